use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    composition::model::{
        AlignItems, ContainerOptions, Direction, JustifyContent, StylePatch,
    },
    foundation::error::{FlexError, FlexResult},
    layout::{
        collect::{LayoutMap, RootFlexBox},
        node::FlexBox,
    },
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Container options as written in a tree description. Unset fields take the
/// [`ContainerOptions`] defaults.
pub struct ContainerSpec {
    /// See [`ContainerOptions::direction`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// See [`ContainerOptions::column_gap`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_gap: Option<f64>,
    /// See [`ContainerOptions::row_gap`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_gap: Option<f64>,
    /// See [`ContainerOptions::justify_content`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    /// See [`ContainerOptions::align_items`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
}

impl ContainerSpec {
    fn to_options(&self, id: Option<String>) -> ContainerOptions {
        let defaults = ContainerOptions::default();
        ContainerOptions {
            id,
            direction: self.direction.unwrap_or(defaults.direction),
            column_gap: self.column_gap.unwrap_or(defaults.column_gap),
            row_gap: self.row_gap.unwrap_or(defaults.row_gap),
            justify_content: self.justify_content.unwrap_or(defaults.justify_content),
            align_items: self.align_items.unwrap_or(defaults.align_items),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Plain nested description of a layout tree.
///
/// ```json
/// { "id": "root", "width": 500, "height": 300, "columnGap": 10,
///   "children": [ { "id": "a", "flexGrow": 1 }, { "flexBasis": 100 } ] }
/// ```
///
/// A node with children becomes a container, a node without children an element; container
/// options on a leaf are ignored. The top-level node is the root: its `width`/`height` are the
/// layout size. Nested containers use their `width`/`height` as preset size.
pub struct TreeSpec {
    /// Style of this node as a child of its parent.
    #[serde(flatten)]
    pub style: StylePatch,
    /// Options used when this node has children.
    #[serde(flatten)]
    pub container: ContainerSpec,
    /// Child nodes in layout order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeSpec>,
}

impl TreeSpec {
    /// Parse a tree description from JSON text.
    pub fn from_json_str(s: &str) -> FlexResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FlexError::serde(format!("parse tree description JSON: {e}")))
    }

    /// Parse a tree description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FlexResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FlexError::serde(format!("parse tree description JSON: {e}")))
    }

    /// Parse a tree description from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FlexResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FlexError::validation(format!("open tree description '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// `true` when this node will become a container.
    pub fn is_container(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of nodes below this one.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|c| 1 + c.descendant_count())
            .sum()
    }

    /// Check numeric inputs across the whole tree.
    ///
    /// All numbers must be finite. Grow, shrink, gaps and explicit sizes must be `>= 0`.
    /// Negative `flexBasis` is accepted.
    pub fn validate(&self) -> FlexResult<()> {
        self.validate_at("root")
    }

    fn validate_at(&self, path: &str) -> FlexResult<()> {
        let name = match &self.style.id {
            Some(id) => format!("node '{id}'"),
            None => path.to_string(),
        };

        let s = &self.style;
        let c = &self.container;
        let non_negative = [
            ("flexGrow", s.flex_grow),
            ("flexShrink", s.flex_shrink),
            ("width", s.width),
            ("height", s.height),
            ("columnGap", c.column_gap),
            ("rowGap", c.row_gap),
        ];
        for (field, value) in non_negative {
            if let Some(v) = value
                && (!v.is_finite() || v < 0.0)
            {
                return Err(FlexError::validation(format!(
                    "{name}: {field} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if let Some(v) = s.flex_basis
            && !v.is_finite()
        {
            return Err(FlexError::validation(format!(
                "{name}: flexBasis must be finite (got {v})"
            )));
        }

        for (i, child) in self.children.iter().enumerate() {
            child.validate_at(&format!("{path}.children[{i}]"))?;
        }
        Ok(())
    }

    /// Validate and turn this description into a root container.
    pub fn into_root(self) -> FlexResult<RootFlexBox> {
        self.validate()?;
        let style = self.style.clone();
        let mut root = self.into_box();
        root.set_style(style);
        tracing::debug!(
            id = root.id().unwrap_or(""),
            children = root.len(),
            "built layout tree from description"
        );
        Ok(RootFlexBox::from_box(root))
    }

    /// Container for this node; its external style is applied by the caller.
    fn into_box(self) -> FlexBox {
        let TreeSpec {
            style,
            container,
            children,
        } = self;
        let mut b = FlexBox::new(
            style.width.unwrap_or(0.0),
            style.height.unwrap_or(0.0),
            container.to_options(style.id),
        );
        for child in children {
            if child.is_container() {
                let child_style = child.style.clone();
                b.add_container_child(child.into_box(), Some(child_style));
            } else {
                b.add_element_child(child.style);
            }
        }
        b
    }
}

/// Build, lay out and flatten a tree description in one call.
pub fn flex_box_layout(spec: &TreeSpec) -> FlexResult<LayoutMap> {
    let mut root = spec.clone().into_root()?;
    Ok(root.get_layout())
}

#[cfg(test)]
#[path = "../../tests/unit/composition/tree.rs"]
mod tests;
