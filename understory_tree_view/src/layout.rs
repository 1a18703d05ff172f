// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row geometry and point hit testing.
//!
//! ## Overview
//!
//! [`RowLayout`] stacks the visible rows top to bottom at a fixed height, each
//! spanning the full layout width. Every row also gets an expander box: a square
//! strip at the row's left edge, pushed right by the row's expander margin.
//!
//! Hit testing maps a point in layout coordinates to a [`RowHit`]. The point is in
//! the [`RowZone::Expander`] zone only when the row has children, expanders are
//! visible, and the point falls inside the expander box; anywhere else on the row is
//! [`RowZone::Content`].
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use understory_tree_view::indent::IndentCalculator;
//! use understory_tree_view::layout::{RowLayout, RowZone};
//! use understory_tree_view::state::VisibleRow;
//! use understory_tree_view::types::{NodeId, RowFlags};
//!
//! let rows = [
//!     VisibleRow { node: NodeId::new(0), depth: 0 },
//!     VisibleRow { node: NodeId::new(1), depth: 1 },
//! ];
//! let mut layout = RowLayout::new(20.0, 200.0);
//! layout.arrange(&rows, &IndentCalculator::default(), |id| {
//!     if id == NodeId::new(0) { RowFlags::HAS_CHILDREN } else { RowFlags::empty() }
//! });
//!
//! let hit = layout.hit_test_point(Point::new(4.0, 10.0)).unwrap();
//! assert_eq!((hit.node, hit.zone), (NodeId::new(0), RowZone::Expander));
//! let hit = layout.hit_test_point(Point::new(100.0, 30.0)).unwrap();
//! assert_eq!((hit.node, hit.zone), (NodeId::new(1), RowZone::Content));
//! assert!(layout.hit_test_point(Point::new(10.0, 45.0)).is_none());
//! ```

use alloc::vec::Vec;
use kurbo::{Point, Rect};

use crate::indent::IndentCalculator;
use crate::state::VisibleRow;
use crate::types::{NodeId, RowFlags};

/// Default row height.
pub const DEFAULT_ROW_HEIGHT: f64 = 20.0;

/// Default width of the expander box.
pub const DEFAULT_EXPANDER_WIDTH: f64 = 16.0;

/// Fixed sizes used to arrange rows.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowMetrics {
    /// Height of every row.
    pub row_height: f64,
    /// Width of the layout; every row spans it.
    pub width: f64,
    /// Width of the expander box.
    pub expander_width: f64,
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            width: 240.0,
            expander_width: DEFAULT_EXPANDER_WIDTH,
        }
    }
}

/// Which of the four arrow images to draw, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ExpanderGlyph {
    /// No arrow: the node has no children or expanders are turned off.
    Hidden,
    /// Collapsed arrow.
    Collapsed,
    /// Collapsed arrow under the pointer.
    CollapsedHovered,
    /// Expanded arrow.
    Expanded,
    /// Expanded arrow under the pointer.
    ExpandedHovered,
}

impl ExpanderGlyph {
    /// Pick the glyph for a row with `flags`.
    pub fn for_flags(flags: RowFlags, expander_visible: bool) -> Self {
        if !expander_visible || !flags.contains(RowFlags::HAS_CHILDREN) {
            return Self::Hidden;
        }
        let hovered = flags.contains(RowFlags::EXPANDER_HOVERED);
        match (flags.contains(RowFlags::EXPANDED), hovered) {
            (false, false) => Self::Collapsed,
            (false, true) => Self::CollapsedHovered,
            (true, false) => Self::Expanded,
            (true, true) => Self::ExpandedHovered,
        }
    }
}

/// Geometry of one arranged row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowBox {
    /// The row's node.
    pub node: NodeId,
    /// Nesting depth.
    pub depth: usize,
    /// The whole row.
    pub bounds: Rect,
    /// The expander arrow's box, inside `bounds`.
    pub expander: Rect,
    /// State bits at arrangement time.
    pub flags: RowFlags,
}

/// Part of a row under a point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowZone {
    /// The expander arrow.
    Expander,
    /// Anywhere else on the row.
    Content,
}

/// Result of [`RowLayout::hit_test_point`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowHit {
    /// The row's node.
    pub node: NodeId,
    /// Part of the row that was hit.
    pub zone: RowZone,
    /// Position of the row in the visible list.
    pub index: usize,
}

/// Visible rows arranged in a vertical stack.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    metrics: RowMetrics,
    expander_visible: bool,
    rows: Vec<RowBox>,
}

impl RowLayout {
    /// Create an empty layout with the given row height and width.
    pub fn new(row_height: f64, width: f64) -> Self {
        Self::with_metrics(RowMetrics {
            row_height,
            width,
            ..RowMetrics::default()
        })
    }

    /// Create an empty layout from explicit metrics.
    pub fn with_metrics(metrics: RowMetrics) -> Self {
        Self {
            metrics,
            expander_visible: true,
            rows: Vec::new(),
        }
    }

    /// Show or hide expander arrows. Hidden arrows are never hit.
    pub fn set_expander_visible(&mut self, visible: bool) {
        self.expander_visible = visible;
    }

    /// Metrics in use.
    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Arrange `rows`, asking `flags` for each row's state bits.
    pub fn arrange(
        &mut self,
        rows: &[VisibleRow],
        indent: &IndentCalculator,
        mut flags: impl FnMut(NodeId) -> RowFlags,
    ) {
        let RowMetrics {
            row_height,
            width,
            expander_width,
        } = self.metrics;
        self.rows.clear();
        self.rows.reserve(rows.len());
        let mut y = 0.0;
        for row in rows {
            let bounds = Rect::new(0.0, y, width, y + row_height);
            let x0 = indent.margin_at_depth(row.depth).x0.min(width);
            let expander = Rect::new(x0, y, (x0 + expander_width).min(width), y + row_height);
            self.rows.push(RowBox {
                node: row.node,
                depth: row.depth,
                bounds,
                expander,
                flags: flags(row.node),
            });
            y += row_height;
        }
    }

    /// Arranged rows, top to bottom.
    pub fn rows(&self) -> &[RowBox] {
        &self.rows
    }

    /// Number of arranged rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no arranged rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Box of the row showing `node`, if it is visible.
    pub fn row_for(&self, node: NodeId) -> Option<&RowBox> {
        self.rows.iter().find(|r| r.node == node)
    }

    /// Total height of the stack.
    pub fn content_height(&self) -> f64 {
        self.rows.last().map_or(0.0, |r| r.bounds.y1)
    }

    /// Glyph to draw for the row at `index`.
    pub fn glyph(&self, index: usize) -> Option<ExpanderGlyph> {
        self.rows
            .get(index)
            .map(|r| ExpanderGlyph::for_flags(r.flags, self.expander_visible))
    }

    /// The row and zone under `point`, or `None` when no row is there.
    pub fn hit_test_point(&self, point: Point) -> Option<RowHit> {
        let row_height = self.metrics.row_height;
        if row_height.is_nan() || row_height <= 0.0 || point.y < 0.0 {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Non-negative quotient; truncation is the floor we want."
        )]
        let index = (point.y / row_height) as usize;
        let row = self.rows.get(index)?;
        if !row.bounds.contains(point) {
            return None;
        }
        let zone = if self.expander_visible
            && row.flags.contains(RowFlags::HAS_CHILDREN)
            && row.expander.contains(point)
        {
            RowZone::Expander
        } else {
            RowZone::Content
        };
        Some(RowHit {
            node: row.node,
            zone,
            index,
        })
    }
}
