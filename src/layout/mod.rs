pub(crate) mod batch;
pub(crate) mod collect;
pub(crate) mod node;
pub(crate) mod solver;
