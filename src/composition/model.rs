use crate::foundation::core::Axis;

/// Default [`FlexStyle::flex_grow`].
pub const DEFAULT_FLEX_GROW: f64 = 0.0;
/// Default [`FlexStyle::flex_shrink`].
pub const DEFAULT_FLEX_SHRINK: f64 = 1.0;
/// Default [`FlexStyle::flex_basis`].
pub const DEFAULT_FLEX_BASIS: f64 = 0.0;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Direction in which a container lays out its children.
pub enum Direction {
    /// Left to right.
    #[default]
    Row,
    /// Right to left.
    RowReverse,
    /// Top to bottom.
    Column,
    /// Bottom to top.
    ColumnReverse,
}

impl Direction {
    /// `true` for `row` and `row-reverse`.
    pub fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// `true` for `row-reverse` and `column-reverse`.
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    /// Axis along which children are placed in sequence.
    pub fn main_axis(self) -> Axis {
        if self.is_row() {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Distribution of leftover main-axis space among and around children.
pub enum JustifyContent {
    /// Pack children at the main-start edge.
    #[default]
    FlexStart,
    /// Pack children at the main-end edge.
    FlexEnd,
    /// Center children on the main axis.
    Center,
    /// First child at start, last at end, equal space between.
    SpaceBetween,
    /// Equal space around every child (half-size at the edges).
    SpaceAround,
    /// Equal space between children and at both edges.
    SpaceEvenly,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Container-level cross-axis alignment of children.
pub enum AlignItems {
    /// Align to the cross-start edge.
    FlexStart,
    /// Align to the cross-end edge.
    FlexEnd,
    /// Center on the cross axis.
    Center,
    /// Fill the container's cross size unless the child has an explicit cross size.
    #[default]
    Stretch,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
/// Per-child override of the container's [`AlignItems`].
pub enum AlignSelf {
    /// Use the container's `alignItems`.
    #[default]
    Auto,
    /// See [`AlignItems::FlexStart`].
    FlexStart,
    /// See [`AlignItems::FlexEnd`].
    FlexEnd,
    /// See [`AlignItems::Center`].
    Center,
    /// See [`AlignItems::Stretch`].
    Stretch,
}

impl AlignSelf {
    /// Effective alignment of a child inside a container using `items`.
    pub fn resolve(self, items: AlignItems) -> AlignItems {
        match self {
            Self::Auto => items,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

impl From<AlignItems> for AlignSelf {
    fn from(value: AlignItems) -> Self {
        match value {
            AlignItems::FlexStart => Self::FlexStart,
            AlignItems::FlexEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
            AlignItems::Stretch => Self::Stretch,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Fully resolved flex style of a node, as seen by its parent container.
///
/// Built from a [`StylePatch`] at the moment a node is attached; the node keeps its own copy.
pub struct FlexStyle {
    /// Stable external identity, used as the key in collected layouts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Share of positive free space absorbed relative to siblings.
    pub flex_grow: f64,
    /// Share of negative free space absorbed relative to siblings.
    pub flex_shrink: f64,
    /// Main-axis size before grow/shrink distribution. Not clamped.
    pub flex_basis: f64,
    /// Cross-axis alignment override.
    #[serde(default)]
    pub align_self: AlignSelf,
    /// Explicit width; consulted when width is the parent's cross axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Explicit height; consulted when height is the parent's cross axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Opaque caller data carried on the node untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            id: None,
            flex_grow: DEFAULT_FLEX_GROW,
            flex_shrink: DEFAULT_FLEX_SHRINK,
            flex_basis: DEFAULT_FLEX_BASIS,
            align_self: AlignSelf::Auto,
            width: None,
            height: None,
            metadata: None,
        }
    }
}

impl FlexStyle {
    /// Explicit size along `axis`, if one was given.
    pub fn explicit_size(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Partial flex style; unset fields fall back to the [`FlexStyle`] defaults.
pub struct StylePatch {
    /// See [`FlexStyle::id`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// See [`FlexStyle::flex_grow`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    /// See [`FlexStyle::flex_shrink`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    /// See [`FlexStyle::flex_basis`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_basis: Option<f64>,
    /// See [`FlexStyle::align_self`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<AlignSelf>,
    /// See [`FlexStyle::width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// See [`FlexStyle::height`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// See [`FlexStyle::metadata`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl StylePatch {
    /// Empty patch (all defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node identity.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set `flexGrow`.
    pub fn grow(mut self, grow: f64) -> Self {
        self.flex_grow = Some(grow);
        self
    }

    /// Set `flexShrink`.
    pub fn shrink(mut self, shrink: f64) -> Self {
        self.flex_shrink = Some(shrink);
        self
    }

    /// Set `flexBasis`.
    pub fn basis(mut self, basis: f64) -> Self {
        self.flex_basis = Some(basis);
        self
    }

    /// Set `alignSelf`.
    pub fn align_self(mut self, align: AlignSelf) -> Self {
        self.align_self = Some(align);
        self
    }

    /// Set an explicit width.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Set an explicit height.
    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    /// Attach opaque metadata.
    pub fn metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Merge this patch over the defaults.
    pub fn resolve(self) -> FlexStyle {
        FlexStyle {
            id: self.id,
            flex_grow: self.flex_grow.unwrap_or(DEFAULT_FLEX_GROW),
            flex_shrink: self.flex_shrink.unwrap_or(DEFAULT_FLEX_SHRINK),
            flex_basis: self.flex_basis.unwrap_or(DEFAULT_FLEX_BASIS),
            align_self: self.align_self.unwrap_or_default(),
            width: self.width,
            height: self.height,
            metadata: self.metadata,
        }
    }
}

impl From<StylePatch> for FlexStyle {
    fn from(value: StylePatch) -> Self {
        value.resolve()
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Container-level layout options.
///
/// These describe how a container arranges its own children and are independent of the
/// [`FlexStyle`] the container is given as a child of another container.
pub struct ContainerOptions {
    /// Identity of the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Main-axis direction.
    pub direction: Direction,
    /// Gap between children along a row.
    pub column_gap: f64,
    /// Gap between children along a column.
    pub row_gap: f64,
    /// Main-axis distribution.
    pub justify_content: JustifyContent,
    /// Default cross-axis alignment of children.
    pub align_items: AlignItems,
}

impl ContainerOptions {
    /// Defaults: `row`, no gaps, `flex-start`, `stretch`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container identity.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the column gap (main gap of row containers).
    pub fn column_gap(mut self, gap: f64) -> Self {
        self.column_gap = gap;
        self
    }

    /// Set the row gap (main gap of column containers).
    pub fn row_gap(mut self, gap: f64) -> Self {
        self.row_gap = gap;
        self
    }

    /// Set both gaps.
    pub fn gap(self, gap: f64) -> Self {
        self.column_gap(gap).row_gap(gap)
    }

    /// Set the justification mode.
    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = justify;
        self
    }

    /// Set the default cross-axis alignment.
    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = align;
        self
    }

    /// Gap applied between consecutive children on the main axis.
    pub fn main_gap(&self) -> f64 {
        if self.direction.is_row() {
            self.column_gap
        } else {
            self.row_gap
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
