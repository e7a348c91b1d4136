use rayon::prelude::*;

use crate::layout::collect::{LayoutMap, RootFlexBox};

/// Lay out independent trees in parallel.
///
/// Each tree is owned by exactly one worker for the duration of its pass. Results are returned
/// in the order of `roots`.
#[tracing::instrument(skip_all, fields(trees = roots.len()))]
pub fn layout_all(roots: &mut [RootFlexBox]) -> Vec<LayoutMap> {
    roots.par_iter_mut().map(RootFlexBox::get_layout).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/batch.rs"]
mod tests;
