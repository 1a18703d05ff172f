// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nesting depth and depth-derived margins.
//!
//! Rows carry two depth-dependent insets:
//!
//! - the expander margin ([`IndentCalculator::margin`]), where only the leading (left)
//!   edge grows with depth, pushing the expander arrow to the right;
//! - the content padding ([`row_padding`]), where the default row padding plus the
//!   node's own padding are added once per nesting level on every edge.

use crate::forest::Forest;
use crate::types::{Margin, NodeId};

/// Indent applied per nesting level when none is configured.
pub const DEFAULT_INDENT: f64 = 10.0;

/// Computes nesting depth and the leading-edge margin of a row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndentCalculator {
    /// Added to the left edge once per nesting level.
    pub per_level_unit: f64,
    /// Margin of a root row.
    pub base_margin: Margin,
}

impl Default for IndentCalculator {
    fn default() -> Self {
        Self {
            per_level_unit: DEFAULT_INDENT,
            base_margin: Margin::ZERO,
        }
    }
}

impl IndentCalculator {
    /// Create a calculator.
    pub fn new(per_level_unit: f64, base_margin: Margin) -> Self {
        Self {
            per_level_unit,
            base_margin,
        }
    }

    /// Number of ancestor hops from `id` to its root; roots have depth 0.
    ///
    /// Returns `None` for ids that are not in the forest.
    pub fn depth(forest: &Forest, id: NodeId) -> Option<usize> {
        let mut slot = forest.slot(id)?;
        let mut depth = 0;
        while let Some(parent) = forest.parent_slot(slot) {
            depth += 1;
            slot = parent;
        }
        Some(depth)
    }

    /// Margin of the row for `id`.
    pub fn margin(&self, forest: &Forest, id: NodeId) -> Option<Margin> {
        Self::depth(forest, id).map(|depth| self.margin_at_depth(depth))
    }

    /// Margin of a row at `depth`: the base margin with the left edge pushed
    /// by `per_level_unit * depth`.
    pub fn margin_at_depth(&self, depth: usize) -> Margin {
        Margin {
            x0: self.base_margin.x0 + self.per_level_unit * depth as f64,
            ..self.base_margin
        }
    }
}

/// Padding around a row's content at `depth`.
///
/// `text_padding + depth * (row_default_padding + node_padding)`, edge by edge.
pub fn row_padding(
    depth: usize,
    text_padding: Margin,
    row_default_padding: Margin,
    node_padding: Margin,
) -> Margin {
    let level = depth as f64;
    Margin {
        x0: text_padding.x0 + level * (row_default_padding.x0 + node_padding.x0),
        y0: text_padding.y0 + level * (row_default_padding.y0 + node_padding.y0),
        x1: text_padding.x1 + level * (row_default_padding.x1 + node_padding.x1),
        y1: text_padding.y1 + level * (row_default_padding.y1 + node_padding.y1),
    }
}
