//! flexlay is a single-line flexbox layout engine.
//!
//! It positions and sizes rectangles inside nested containers following a simplified CSS
//! flexbox model: basis/grow/shrink along the main axis, `justify-content` and
//! `align-items`/`align-self` placement, gaps between children, and the four direction
//! keywords. There is no text measurement, wrapping or min/max relaxation.
//!
//! # Pipeline overview
//!
//! 1. **Build**: create a [`RootFlexBox`] and attach [`FlexElement`]s and nested [`FlexBox`]es,
//!    or read a [`TreeSpec`] from JSON
//! 2. **Layout**: [`RootFlexBox::layout`] resolves sizes and positions top-down
//! 3. **Collect**: [`RootFlexBox::get_layout`] flattens the tree into a [`LayoutMap`] keyed by
//!    node id, in pre-order
//!
//! Positions are always relative to the parent container.
//!
//! ```
//! use flexlay::{ContainerOptions, RootFlexBox, StylePatch};
//!
//! let mut root = RootFlexBox::new(200.0, 100.0, ContainerOptions::new());
//! root.add_element_child(StylePatch::new().id("a").grow(1.0));
//! root.add_element_child(StylePatch::new().id("b").grow(1.0));
//!
//! let layout = root.get_layout();
//! assert_eq!(layout.get("b").unwrap().position.x, 100.0);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composition;
mod debug;
mod foundation;
mod layout;

pub use crate::composition::model::{
    AlignItems, AlignSelf, ContainerOptions, DEFAULT_FLEX_BASIS, DEFAULT_FLEX_GROW,
    DEFAULT_FLEX_SHRINK, Direction, FlexStyle, JustifyContent, StylePatch,
};
pub use crate::composition::tree::{ContainerSpec, TreeSpec, flex_box_layout};
pub use crate::debug::svg::{PALETTE, SvgOptions, layout_to_svg, render_png};
pub use crate::foundation::core::{Axis, Point, Position, Rect, Size};
pub use crate::foundation::error::{FlexError, FlexResult};
pub use crate::layout::batch::layout_all;
pub use crate::layout::collect::{
    ANONYMOUS_KEY_PREFIX, LayoutMap, NodeLayout, RootFlexBox, flatten_layout,
};
pub use crate::layout::node::{ChildId, FlexBox, FlexElement, FlexNode, Geometry};
