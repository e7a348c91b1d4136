//! Single-line flex layout.
//!
//! One pass per container, parent before children:
//!
//! 1. pick the main/cross axes from the direction
//! 2. sum basis, grow and shrink over the direct children
//! 3. resolve every child's main size from the free space (no min/max relaxation loop)
//! 4. resolve cross sizes: explicit size, else stretch, else the child's preset
//! 5. justify along the main axis and align along the cross axis
//! 6. recurse into container children against the size they were just given
//!
//! Degenerate inputs (no children, zero totals, overflow) never fail; they flow through the
//! arithmetic and may produce zero sizes or offsets outside the container.

use crate::{
    composition::model::{AlignItems, FlexStyle, JustifyContent},
    foundation::core::Axis,
    layout::node::{FlexBox, FlexNode},
};

/// Sums over a container's direct children.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FlexStats {
    pub(crate) total_basis: f64,
    pub(crate) total_grow: f64,
    pub(crate) total_shrink: f64,
    pub(crate) gap_total: f64,
    pub(crate) free_space: f64,
}

impl FlexStats {
    pub(crate) fn gather(children: &[FlexNode], main_gap: f64, container_main: f64) -> Self {
        let mut stats = Self {
            gap_total: main_gap * children.len().saturating_sub(1) as f64,
            ..Self::default()
        };
        for child in children {
            let style = child.style();
            stats.total_basis += style.flex_basis;
            stats.total_grow += style.flex_grow;
            stats.total_shrink += style.flex_shrink;
        }
        stats.free_space = container_main - stats.total_basis - stats.gap_total;
        stats
    }

    /// Main size of one child after distributing the free space.
    pub(crate) fn resolve_main(&self, style: &FlexStyle) -> f64 {
        let mut main = style.flex_basis;
        if self.free_space > 0.0 && self.total_grow > 0.0 {
            main += self.free_space * style.flex_grow / self.total_grow;
        } else if self.free_space < 0.0 && self.total_shrink > 0.0 {
            main += self.free_space * style.flex_shrink / self.total_shrink;
            main = main.max(0.0);
        }
        main
    }
}

/// `(leading, between)` offsets for `count` children leaving `remaining` main-axis space.
pub(crate) fn justify_offsets(
    justify: JustifyContent,
    remaining: f64,
    main_gap: f64,
    count: usize,
) -> (f64, f64) {
    let n = count as f64;
    match justify {
        JustifyContent::FlexStart => (0.0, main_gap),
        JustifyContent::FlexEnd => (remaining, main_gap),
        JustifyContent::Center => (remaining / 2.0, main_gap),
        JustifyContent::SpaceBetween => {
            let between = if count > 1 {
                main_gap + remaining / (n - 1.0)
            } else {
                0.0
            };
            (0.0, between)
        }
        JustifyContent::SpaceAround if count > 0 => {
            let between = main_gap + remaining / n;
            (between / 2.0, between)
        }
        JustifyContent::SpaceEvenly if count > 0 => {
            let between = main_gap + remaining / (n + 1.0);
            (between, between)
        }
        JustifyContent::SpaceAround | JustifyContent::SpaceEvenly => (0.0, 0.0),
    }
}

/// Cross-axis offset of a child of cross size `child_cross`.
pub(crate) fn cross_offset(align: AlignItems, container_cross: f64, child_cross: f64) -> f64 {
    match align {
        AlignItems::FlexStart | AlignItems::Stretch => 0.0,
        AlignItems::FlexEnd => container_cross - child_cross,
        AlignItems::Center => (container_cross - child_cross) / 2.0,
    }
}

impl FlexBox {
    /// Lay out this container's subtree against its current size.
    ///
    /// Every position and size below this container is recomputed from the current styles,
    /// so calling this again on an unchanged tree yields identical results. The container's
    /// own size and position are not touched.
    pub fn build(&mut self) {
        let main_axis = self.options.direction.main_axis();
        let cross_axis = main_axis.cross();
        let main_gap = self.options.main_gap();
        let container_main = main_axis.extent(self.geometry.size);
        let container_cross = cross_axis.extent(self.geometry.size);

        let stats = FlexStats::gather(&self.children, main_gap, container_main);
        self.resolve_sizes(&stats, main_axis, container_cross);

        if !self.children.is_empty() {
            self.place_children(&stats, main_axis, container_main, container_cross);
        }

        for child in &mut self.children {
            child.build();
        }
    }

    fn resolve_sizes(&mut self, stats: &FlexStats, main_axis: Axis, container_cross: f64) {
        let cross_axis = main_axis.cross();
        let align_items = self.options.align_items;
        for child in &mut self.children {
            let style = child.style();
            let main = stats.resolve_main(style);
            let cross = match style.explicit_size(cross_axis) {
                Some(explicit) => explicit,
                None if style.align_self.resolve(align_items) == AlignItems::Stretch => {
                    container_cross
                }
                None => cross_axis.extent(child.preset_size()),
            };

            let size = &mut child.geometry_mut().size;
            main_axis.set_extent(size, main);
            cross_axis.set_extent(size, cross);
        }
    }

    fn place_children(
        &mut self,
        stats: &FlexStats,
        main_axis: Axis,
        container_main: f64,
        container_cross: f64,
    ) {
        let cross_axis = main_axis.cross();
        let reverse = self.options.direction.is_reverse();
        let align_items = self.options.align_items;

        let occupied = self
            .children
            .iter()
            .map(|c| main_axis.extent(c.size()))
            .sum::<f64>()
            + stats.gap_total;
        let remaining = container_main - occupied;
        if remaining < 0.0 {
            tracing::trace!(remaining, "children overflow the container main axis");
        }

        let (leading, between) = justify_offsets(
            self.options.justify_content,
            remaining,
            self.options.main_gap(),
            self.children.len(),
        );

        // Reversed directions mirror the coordinate, so the first child ends up at main-end.
        let mut cursor = leading;
        for child in &mut self.children {
            let size = child.size();
            let child_main = main_axis.extent(size);
            let main_pos = if reverse {
                container_main - cursor - child_main
            } else {
                cursor
            };
            let align = child.style().align_self.resolve(align_items);
            let cross_pos = cross_offset(align, container_cross, cross_axis.extent(size));

            let position = &mut child.geometry_mut().position;
            main_axis.set_coord(position, main_pos);
            cross_axis.set_coord(position, cross_pos);

            cursor += child_main + between;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/solver.rs"]
mod tests;
