// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion and selection over a built forest.
//!
//! ## Overview
//!
//! [`TreeState`] holds the expansion set, the single selection, and the flattened
//! list of visible rows derived from both. Every operation takes the [`Forest`] it
//! applies to and returns the [`StateChange`]s it caused, in the order a host should
//! observe them. The visible rows are recomputed from scratch after every change;
//! [`StateChange::RowsChanged`] never describes a delta.
//!
//! ## Unknown ids
//!
//! Ids here are node ids, as carried by rows and events. Resolving a host's build
//! position to a node id is [`TreeView`](crate::view::TreeView)'s job. Ids that are
//! not in the forest turn [`expand`](TreeState::expand),
//! [`collapse`](TreeState::collapse), [`toggle_expansion`](TreeState::toggle_expansion)
//! and [`select`](TreeState::select) into no-ops that return no changes.
//!
//! ## Example
//!
//! ```
//! use understory_tree_view::builder::TreeBuilder;
//! use understory_tree_view::state::TreeState;
//! use understory_tree_view::types::{NodeId, NodeRecord};
//!
//! let records = vec![
//!     NodeRecord::root("A"),
//!     NodeRecord::child(1, "B"),
//!     NodeRecord::child(1, "C"),
//! ];
//! let forest = TreeBuilder::new().build(&records).unwrap();
//! let mut state = TreeState::new();
//! state.refresh(&forest);
//! assert_eq!(state.rows().len(), 1);
//!
//! let _ = state.expand(&forest, NodeId::new(0));
//! let depths: Vec<_> = state.rows().iter().map(|r| (r.node.get(), r.depth)).collect();
//! assert_eq!(depths, vec![(0, 0), (1, 1), (2, 1)]);
//! ```

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::event::StateChange;
use crate::forest::Forest;
use crate::types::{NodeId, RowFlags};

/// One visible row: a node and its nesting depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VisibleRow {
    /// The row's node.
    pub node: NodeId,
    /// Number of ancestors; roots are at depth 0.
    pub depth: usize,
}

/// Expansion set, single selection, and the derived visible rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeState {
    expanded: BTreeSet<NodeId>,
    selected: Option<NodeId>,
    rows: Vec<VisibleRow>,
}

impl TreeState {
    /// All collapsed, nothing selected, no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget expansion and selection, and recompute rows for `forest`.
    ///
    /// Reports [`StateChange::SelectionLost`] if something was selected.
    pub fn reset(&mut self, forest: &Forest) -> Vec<StateChange> {
        let mut changes = Vec::new();
        self.expanded.clear();
        if self.selected.take().is_some() {
            changes.push(StateChange::SelectionLost);
        }
        self.refresh(forest);
        changes.push(StateChange::RowsChanged);
        changes
    }

    /// Returns true if `id` is in the expansion set.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Members of the expansion set in id order.
    pub fn expanded(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.expanded.iter().copied()
    }

    /// The selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Visible rows as of the last change or [`refresh`](Self::refresh).
    pub fn rows(&self) -> &[VisibleRow] {
        &self.rows
    }

    /// Row state bits for `id`.
    pub fn flags(&self, forest: &Forest, id: NodeId) -> RowFlags {
        let mut flags = RowFlags::empty();
        flags.set(RowFlags::HAS_CHILDREN, forest.has_children(id));
        flags.set(RowFlags::EXPANDED, self.is_expanded(id));
        flags.set(RowFlags::SELECTED, self.selected == Some(id));
        flags
    }

    /// Add `id` to the expansion set.
    pub fn expand(&mut self, forest: &Forest, id: NodeId) -> Vec<StateChange> {
        self.set_expansion(forest, id, true)
    }

    /// Remove `id` from the expansion set.
    pub fn collapse(&mut self, forest: &Forest, id: NodeId) -> Vec<StateChange> {
        self.set_expansion(forest, id, false)
    }

    /// Set the expansion membership of `id`.
    ///
    /// Leaves may be expanded too; it has no visible effect until they gain children
    /// in a later build of the same records. Always reports
    /// [`StateChange::RowsChanged`] for a known id.
    pub fn set_expansion(
        &mut self,
        forest: &Forest,
        id: NodeId,
        expanded: bool,
    ) -> Vec<StateChange> {
        if !forest.contains(id) {
            return Vec::new();
        }
        let mut changes = Vec::new();
        if self.apply_expansion(id, expanded) {
            changes.push(StateChange::Expansion {
                node: id,
                expanded,
            });
        }
        self.refresh(forest);
        changes.push(StateChange::RowsChanged);
        changes
    }

    /// Flip the expansion of `id`. Leaves are left alone.
    pub fn toggle_expansion(&mut self, forest: &Forest, id: NodeId) -> Vec<StateChange> {
        if !forest.has_children(id) {
            return Vec::new();
        }
        let expanded = !self.is_expanded(id);
        self.set_expansion(forest, id, expanded)
    }

    /// Set the expansion of `id` and of every descendant.
    ///
    /// This is what a shift-click on an expander arrow does. One
    /// [`StateChange::Expansion`] is reported per node whose membership changed,
    /// in pre-order.
    pub fn set_expansion_recursive(
        &mut self,
        forest: &Forest,
        id: NodeId,
        expanded: bool,
    ) -> Vec<StateChange> {
        if !forest.contains(id) {
            return Vec::new();
        }
        let mut changes = Vec::new();
        for node in forest.subtree(id) {
            if self.apply_expansion(node, expanded) {
                changes.push(StateChange::Expansion { node, expanded });
            }
        }
        self.refresh(forest);
        changes.push(StateChange::RowsChanged);
        changes
    }

    /// Make `id` the only selected node.
    ///
    /// Selecting the current selection again reports nothing.
    pub fn select(&mut self, forest: &Forest, id: NodeId) -> Vec<StateChange> {
        if !forest.contains(id) || self.selected == Some(id) {
            return Vec::new();
        }
        self.selected = Some(id);
        self.refresh(forest);
        vec![StateChange::Selection(id), StateChange::RowsChanged]
    }

    /// Clear the selection. Reports nothing if nothing was selected.
    pub fn clear_selection(&mut self, forest: &Forest) -> Vec<StateChange> {
        if self.selected.take().is_none() {
            return Vec::new();
        }
        self.refresh(forest);
        vec![StateChange::SelectionLost, StateChange::RowsChanged]
    }

    /// Apply a click the host resolved to `hit`.
    ///
    /// A hit on a known node selects it. No hit, or a hit on an id that matches no
    /// row of this forest, loses the selection.
    pub fn click(&mut self, forest: &Forest, hit: Option<NodeId>) -> Vec<StateChange> {
        match hit {
            Some(id) if forest.contains(id) => self.select(forest, id),
            _ => self.clear_selection(forest),
        }
    }

    /// Depth-first pre-order walk of `forest`, descending only into expanded nodes.
    pub fn flatten(&self, forest: &Forest) -> Vec<VisibleRow> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, usize)> = forest
            .root_slots()
            .iter()
            .rev()
            .map(|&slot| (slot, 0))
            .collect();
        while let Some((slot, depth)) = stack.pop() {
            let node = forest.node_at(slot);
            out.push(VisibleRow {
                node: node.id(),
                depth,
            });
            if self.expanded.contains(&node.id()) {
                stack.extend(
                    forest
                        .child_slots(slot)
                        .iter()
                        .rev()
                        .map(|&child| (child, depth + 1)),
                );
            }
        }
        out
    }

    /// Recompute the visible rows.
    pub fn refresh(&mut self, forest: &Forest) {
        self.rows = self.flatten(forest);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = self.rows.len(),
            expanded = self.expanded.len(),
            "refreshed visible rows"
        );
    }

    fn apply_expansion(&mut self, id: NodeId, expanded: bool) -> bool {
        if expanded {
            self.expanded.insert(id)
        } else {
            self.expanded.remove(&id)
        }
    }
}
