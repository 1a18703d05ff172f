// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over rows and their expander arrows.
//!
//! The hovered target is a short path: the row, then (if the pointer is over its
//! arrow) the row's expander. Moving the pointer diffs the old path against the new
//! one and reports the minimal set of transitions. Leaves come first, inner to
//! outer, then enters, outer to inner.
//!
//! ```
//! use understory_tree_view::hover::{HoverEvent, HoverTarget, HoverTracker};
//! use understory_tree_view::layout::{RowHit, RowZone};
//! use understory_tree_view::types::NodeId;
//!
//! let node = NodeId::new(0);
//! let mut hover = HoverTracker::new();
//! let on_arrow = RowHit { node, zone: RowZone::Expander, index: 0 };
//! assert_eq!(
//!     hover.update(Some(on_arrow)),
//!     vec![
//!         HoverEvent::Enter(HoverTarget::Row(node)),
//!         HoverEvent::Enter(HoverTarget::Expander(node)),
//!     ]
//! );
//! let on_text = RowHit { zone: RowZone::Content, ..on_arrow };
//! assert_eq!(
//!     hover.update(Some(on_text)),
//!     vec![HoverEvent::Leave(HoverTarget::Expander(node))]
//! );
//! ```

use alloc::vec::Vec;

use crate::layout::{RowHit, RowZone};
use crate::types::NodeId;

/// Something the pointer can hover.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverTarget {
    /// Anywhere on a row.
    Row(NodeId),
    /// The row's expander arrow.
    Expander(NodeId),
}

/// A hover transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    /// The pointer entered the target.
    Enter(HoverTarget),
    /// The pointer left the target.
    Leave(HoverTarget),
}

/// Remembers the hovered row and expander between pointer moves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    current: Vec<HoverTarget>,
}

impl HoverTracker {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered row, if any.
    pub fn hovered_row(&self) -> Option<NodeId> {
        match self.current.first() {
            Some(HoverTarget::Row(node)) => Some(*node),
            _ => None,
        }
    }

    /// The row whose expander arrow is hovered, if any.
    pub fn hovered_expander(&self) -> Option<NodeId> {
        match self.current.get(1) {
            Some(HoverTarget::Expander(node)) => Some(*node),
            _ => None,
        }
    }

    /// Move the pointer onto `hit` (or off every row) and report transitions.
    pub fn update(&mut self, hit: Option<RowHit>) -> Vec<HoverEvent> {
        let mut path = Vec::with_capacity(2);
        if let Some(hit) = hit {
            path.push(HoverTarget::Row(hit.node));
            if hit.zone == RowZone::Expander {
                path.push(HoverTarget::Expander(hit.node));
            }
        }

        let shared = self
            .current
            .iter()
            .zip(&path)
            .take_while(|(old, new)| old == new)
            .count();

        let mut out: Vec<_> = self.current[shared..]
            .iter()
            .rev()
            .map(|&t| HoverEvent::Leave(t))
            .collect();
        out.extend(path[shared..].iter().map(|&t| HoverEvent::Enter(t)));
        self.current = path;
        out
    }

    /// Forget the hover state, reporting leaves inner to outer.
    pub fn clear(&mut self) -> Vec<HoverEvent> {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn hit(node: u32, zone: RowZone) -> Option<RowHit> {
        Some(RowHit {
            node: NodeId::new(node),
            zone,
            index: node as usize,
        })
    }

    #[test]
    fn moving_between_rows_leaves_then_enters() {
        let mut hover = HoverTracker::new();
        let _ = hover.update(hit(0, RowZone::Expander));
        assert_eq!(
            hover.update(hit(1, RowZone::Content)),
            vec![
                HoverEvent::Leave(HoverTarget::Expander(NodeId::new(0))),
                HoverEvent::Leave(HoverTarget::Row(NodeId::new(0))),
                HoverEvent::Enter(HoverTarget::Row(NodeId::new(1))),
            ]
        );
        assert_eq!(hover.hovered_row(), Some(NodeId::new(1)));
        assert_eq!(hover.hovered_expander(), None);
    }

    #[test]
    fn same_target_reports_nothing() {
        let mut hover = HoverTracker::new();
        let _ = hover.update(hit(2, RowZone::Content));
        assert!(hover.update(hit(2, RowZone::Content)).is_empty());
    }

    #[test]
    fn clear_leaves_everything() {
        let mut hover = HoverTracker::new();
        let _ = hover.update(hit(3, RowZone::Expander));
        assert_eq!(hover.hovered_expander(), Some(NodeId::new(3)));
        assert_eq!(hover.clear().len(), 2);
        assert_eq!(hover.hovered_row(), None);
    }
}
