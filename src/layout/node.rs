use crate::{
    composition::model::{ContainerOptions, FlexStyle, StylePatch},
    foundation::core::{Position, Size},
};

/// Index of a child inside its parent's child list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChildId(pub usize);

/// Resolved geometry of a node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Size assigned by the last layout pass.
    pub size: Size,
    /// Position relative to the parent's origin.
    pub position: Position,
}

/// Content-less leaf node.
#[derive(Clone, Debug, Default)]
pub struct FlexElement {
    pub(crate) geometry: Geometry,
    pub(crate) style: FlexStyle,
}

impl FlexElement {
    /// Create a detached element with `style`.
    pub fn new(style: StylePatch) -> Self {
        Self {
            geometry: Geometry::default(),
            style: style.resolve(),
        }
    }

    /// Size assigned by the last layout pass.
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Position assigned by the last layout pass.
    pub fn position(&self) -> Position {
        self.geometry.position
    }

    /// Resolved style.
    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    /// Replace the style; takes effect on the next layout pass.
    pub fn set_style(&mut self, style: StylePatch) {
        self.style = style.resolve();
    }

    /// Node identity, if any.
    pub fn id(&self) -> Option<&str> {
        self.style.id.as_deref()
    }

    /// Caller metadata, if any.
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.style.metadata.as_ref()
    }
}

/// Flex container: owns an ordered list of children and lays them out.
///
/// A container has two independent sets of properties. [`ContainerOptions`] describe how it
/// arranges its own children; its [`FlexStyle`] describes how it behaves as a child of another
/// container. Nesting moves the child container into its parent, so a container can only ever
/// have one parent.
#[derive(Clone, Debug, Default)]
pub struct FlexBox {
    pub(crate) geometry: Geometry,
    pub(crate) preset: Size,
    pub(crate) style: FlexStyle,
    pub(crate) options: ContainerOptions,
    pub(crate) children: Vec<FlexNode>,
}

impl FlexBox {
    /// Create a container with a preset size.
    ///
    /// Roots use the preset size as their layout size. A nested container's size is
    /// overwritten by its parent on every pass, except for a cross extent that is neither
    /// stretched nor explicit, which falls back to the preset.
    pub fn new(width: f64, height: f64, options: ContainerOptions) -> Self {
        let size = Size::new(width, height);
        Self {
            geometry: Geometry {
                size,
                ..Geometry::default()
            },
            preset: size,
            style: FlexStyle::default(),
            options,
            children: Vec::new(),
        }
    }

    /// Append a new element built from `style`.
    pub fn add_element_child(&mut self, style: StylePatch) -> ChildId {
        self.push(FlexNode::Element(FlexElement::new(style)))
    }

    /// Move `child` into this container.
    ///
    /// When `style` is given it replaces the child's external style; the child's own options
    /// and children are left as they are.
    pub fn add_container_child(
        &mut self,
        mut child: FlexBox,
        style: Option<StylePatch>,
    ) -> ChildId {
        if let Some(style) = style {
            child.style = style.resolve();
        }
        self.push(FlexNode::Container(child))
    }

    fn push(&mut self, node: FlexNode) -> ChildId {
        self.children.push(node);
        ChildId(self.children.len() - 1)
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[FlexNode] {
        &self.children
    }

    /// Child by id.
    pub fn child(&self, id: ChildId) -> Option<&FlexNode> {
        self.children.get(id.0)
    }

    /// Mutable child by id. Structure stays append-only; only styles and options may change.
    pub fn child_mut(&mut self, id: ChildId) -> Option<&mut FlexNode> {
        self.children.get_mut(id.0)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// `true` when the container has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Size assigned by the parent (or preset for a root).
    pub fn size(&self) -> Size {
        self.geometry.size
    }

    /// Position assigned by the parent. Never written for a root.
    pub fn position(&self) -> Position {
        self.geometry.position
    }

    /// Set both the current and the preset size.
    pub fn resize(&mut self, width: f64, height: f64) {
        let size = Size::new(width, height);
        self.geometry.size = size;
        self.preset = size;
    }

    /// Place the container. Only meaningful for roots, whose position layout never touches.
    pub fn set_position(&mut self, position: Position) {
        self.geometry.position = position;
    }

    /// Container options.
    pub fn options(&self) -> &ContainerOptions {
        &self.options
    }

    /// Mutable container options; changes apply on the next layout pass.
    pub fn options_mut(&mut self) -> &mut ContainerOptions {
        &mut self.options
    }

    /// External style used when this container is a child.
    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    /// Replace the external style.
    pub fn set_style(&mut self, style: StylePatch) {
        self.style = style.resolve();
    }

    /// Container identity: the options id, falling back to the external style id.
    pub fn id(&self) -> Option<&str> {
        self.options.id.as_deref().or(self.style.id.as_deref())
    }
}

/// A node in the layout tree.
#[derive(Clone, Debug)]
pub enum FlexNode {
    /// Leaf node.
    Element(FlexElement),
    /// Nested container.
    Container(FlexBox),
}

impl FlexNode {
    pub(crate) fn geometry(&self) -> &Geometry {
        match self {
            Self::Element(e) => &e.geometry,
            Self::Container(b) => &b.geometry,
        }
    }

    pub(crate) fn geometry_mut(&mut self) -> &mut Geometry {
        match self {
            Self::Element(e) => &mut e.geometry,
            Self::Container(b) => &mut b.geometry,
        }
    }

    /// Size a node falls back to on a non-stretched, non-explicit cross axis.
    pub(crate) fn preset_size(&self) -> Size {
        match self {
            Self::Element(_) => Size::ZERO,
            Self::Container(b) => b.preset,
        }
    }

    /// Size assigned by the last layout pass.
    pub fn size(&self) -> Size {
        self.geometry().size
    }

    /// Position assigned by the last layout pass.
    pub fn position(&self) -> Position {
        self.geometry().position
    }

    /// Style as seen by the parent container.
    pub fn style(&self) -> &FlexStyle {
        match self {
            Self::Element(e) => &e.style,
            Self::Container(b) => &b.style,
        }
    }

    /// Node identity, if any.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Element(e) => e.id(),
            Self::Container(b) => b.id(),
        }
    }

    /// Caller metadata, if any.
    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.style().metadata.as_ref()
    }

    /// The container, if this node is one.
    pub fn as_container(&self) -> Option<&FlexBox> {
        match self {
            Self::Container(b) => Some(b),
            Self::Element(_) => None,
        }
    }

    /// Mutable access to the container, if this node is one.
    pub fn as_container_mut(&mut self) -> Option<&mut FlexBox> {
        match self {
            Self::Container(b) => Some(b),
            Self::Element(_) => None,
        }
    }

    /// Lay out the subtree below this node. A no-op for elements.
    pub fn build(&mut self) {
        match self {
            Self::Element(_) => {}
            Self::Container(b) => b.build(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/node.rs"]
mod tests;
