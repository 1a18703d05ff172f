// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Events handed to the host.
//!
//! ## Layering
//!
//! [`TreeState`](crate::state::TreeState) reports bare [`StateChange`]s keyed by
//! [`NodeId`]. [`TreeView`](crate::view::TreeView) turns them into [`TreeEvent`]s by
//! attaching a [`NodeInfo`] snapshot and the resolved row content, so host handlers
//! never need to look anything up in the forest.

use alloc::string::String;
use alloc::vec::Vec;

use crate::forest::TreeNode;
use crate::types::NodeId;

/// Host-facing snapshot of a node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeInfo {
    /// Position-derived id.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// 1-based parent position from the record, `0` for roots.
    pub parent_id: u32,
    /// Extra strings from the record.
    pub extra: Vec<String>,
}

impl From<&TreeNode> for NodeInfo {
    fn from(node: &TreeNode) -> Self {
        Self {
            id: node.id(),
            name: String::from(node.display_name()),
            parent_id: node.parent_id(),
            extra: node.extra().to_vec(),
        }
    }
}

/// A change to expansion or selection, reported by [`TreeState`](crate::state::TreeState).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StateChange {
    /// `node` entered (`true`) or left (`false`) the expansion set.
    Expansion {
        /// Affected node.
        node: NodeId,
        /// New membership.
        expanded: bool,
    },
    /// `node` became the selection.
    Selection(NodeId),
    /// The selection was cleared.
    SelectionLost,
    /// The visible set must be re-evaluated as a whole.
    RowsChanged,
}

/// Event delivered to host handlers.
///
/// `H` is the host's row content handle (see
/// [`RowContentResolver`](crate::content::RowContentResolver)); `None` means the row
/// renders its plain text label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeEvent<H> {
    /// A row is about to be shown.
    RowGenerated {
        /// The row's node.
        node: NodeInfo,
        /// Resolved content.
        content: Option<H>,
        /// Direct children of the node.
        children: Vec<NodeInfo>,
    },
    /// The selection moved to `node`.
    SelectionChanged {
        /// The selected node.
        node: NodeInfo,
        /// Resolved content of its row.
        content: Option<H>,
    },
    /// The selection was cleared, e.g. by a click outside every row.
    SelectionLost,
    /// A node was expanded or collapsed.
    ExpansionChanged {
        /// The affected node.
        node: NodeInfo,
        /// Resolved content of its row.
        content: Option<H>,
        /// New expansion state.
        expanded: bool,
    },
    /// The visible rows must be re-evaluated as a whole.
    RowsChanged,
}

impl<H> TreeEvent<H> {
    /// The node this event is about, if any.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::RowGenerated { node, .. }
            | Self::SelectionChanged { node, .. }
            | Self::ExpansionChanged { node, .. } => Some(node.id),
            Self::SelectionLost | Self::RowsChanged => None,
        }
    }
}
