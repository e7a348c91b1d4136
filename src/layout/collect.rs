use std::collections::HashSet;
use std::ops::{Deref, DerefMut};

use indexmap::IndexMap;

use crate::{
    composition::model::ContainerOptions,
    foundation::core::{Position, Rect, Size},
    layout::node::{FlexBox, FlexNode},
};

/// Key prefix for nodes collected without an explicit id.
pub const ANONYMOUS_KEY_PREFIX: &str = "_$$";

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Geometry of one node in a collected layout.
pub struct NodeLayout {
    /// Position relative to the node's parent container.
    pub position: Position,
    /// Resolved size.
    pub size: Size,
}

impl NodeLayout {
    /// The node's box in its parent's coordinate space.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Flattened layout of a tree, keyed by node identity.
///
/// Entries are kept in pre-order (parent before children, siblings in insertion order). The
/// root itself is not included. Positions stay local to each node's parent.
pub struct LayoutMap {
    entries: IndexMap<String, NodeLayout>,
}

impl LayoutMap {
    /// Geometry for `key`.
    pub fn get(&self, key: &str) -> Option<&NodeLayout> {
        self.entries.get(key)
    }

    /// `true` when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the layout holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in pre-order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in pre-order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeLayout)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Underlying ordered map.
    pub fn into_inner(self) -> IndexMap<String, NodeLayout> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a LayoutMap {
    type Item = (&'a String, &'a NodeLayout);
    type IntoIter = indexmap::map::Iter<'a, String, NodeLayout>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Entry point of a layout tree.
///
/// A root is an ordinary [`FlexBox`] whose size comes from the caller rather than from a
/// parent. It dereferences to the container for tree construction.
#[derive(Clone, Debug, Default)]
pub struct RootFlexBox {
    root: FlexBox,
}

impl RootFlexBox {
    /// Create a root container of the given size.
    pub fn new(width: f64, height: f64, options: ContainerOptions) -> Self {
        Self {
            root: FlexBox::new(width, height, options),
        }
    }

    /// Promote an existing container to a root.
    pub fn from_box(root: FlexBox) -> Self {
        Self { root }
    }

    /// Give back the underlying container.
    pub fn into_inner(self) -> FlexBox {
        self.root
    }

    /// Compute (or recompute) positions and sizes of the whole tree in place.
    pub fn layout(&mut self) {
        self.root.build();
    }

    /// Lay out the tree and flatten it into a [`LayoutMap`].
    #[tracing::instrument(skip_all, fields(root = self.root.id().unwrap_or("")))]
    pub fn get_layout(&mut self) -> LayoutMap {
        self.layout();
        flatten_layout(&self.root)
    }
}

impl Deref for RootFlexBox {
    type Target = FlexBox;

    fn deref(&self) -> &Self::Target {
        &self.root
    }
}

impl DerefMut for RootFlexBox {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.root
    }
}

impl From<FlexBox> for RootFlexBox {
    fn from(value: FlexBox) -> Self {
        Self::from_box(value)
    }
}

/// Flatten the geometry left by the last layout pass below `root`.
///
/// This does not run layout; an unbuilt tree reports zero sizes. Use
/// [`RootFlexBox::get_layout`] to lay out and flatten in one step.
///
/// Nodes without an id are keyed `_$$0`, `_$$1`, ... in pre-order; a generated key that
/// equals an explicit id anywhere in the tree is skipped. Duplicate explicit ids collapse
/// into a single entry holding the last node's geometry.
pub fn flatten_layout(root: &FlexBox) -> LayoutMap {
    let mut reserved = HashSet::new();
    reserve_ids(root, &mut reserved);

    let mut collector = Collector {
        reserved,
        next_anonymous: 0,
        entries: IndexMap::new(),
    };
    collector.visit(root);
    LayoutMap {
        entries: collector.entries,
    }
}

fn reserve_ids<'a>(container: &'a FlexBox, out: &mut HashSet<&'a str>) {
    for child in &container.children {
        if let Some(id) = child.id() {
            out.insert(id);
        }
        if let FlexNode::Container(b) = child {
            reserve_ids(b, out);
        }
    }
}

struct Collector<'a> {
    reserved: HashSet<&'a str>,
    next_anonymous: u64,
    entries: IndexMap<String, NodeLayout>,
}

impl<'a> Collector<'a> {
    fn visit(&mut self, container: &'a FlexBox) {
        for child in &container.children {
            let key = match child.id() {
                Some(id) => id.to_string(),
                None => self.anonymous_key(),
            };
            let layout = NodeLayout {
                position: child.position(),
                size: child.size(),
            };
            if self.entries.insert(key, layout).is_some() {
                tracing::warn!(
                    id = child.id().unwrap_or_default(),
                    "duplicate node id in layout; keeping the later node's geometry"
                );
            }
            if let FlexNode::Container(b) = child {
                self.visit(b);
            }
        }
    }

    fn anonymous_key(&mut self) -> String {
        loop {
            let key = format!("{ANONYMOUS_KEY_PREFIX}{}", self.next_anonymous);
            self.next_anonymous += 1;
            if !self.reserved.contains(key.as_str()) {
                return key;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/collect.rs"]
mod tests;
