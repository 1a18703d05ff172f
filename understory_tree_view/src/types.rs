// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the tree view: node identifiers, input records, row flags, and margins.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Insets;

/// Margin around a row or its content.
///
/// Kurbo's [`Insets`] names the leading edges `x0` (left) and `y0` (top), and the
/// trailing edges `x1` (right) and `y1` (bottom).
pub type Margin = Insets;

/// Identifier for a node in a built [`Forest`](crate::forest::Forest).
///
/// Identifiers are position-derived: a node's id is the 0-based position of the
/// [`NodeRecord`] it was built from. Any `node_id` carried by the record is ignored.
///
/// ## Stability
///
/// - Ids are unique within one build.
/// - A rebuild produces fresh nodes; an id from a previous build refers to
///   whatever record now occupies that position.
/// - Ids outside the built range are tolerated by every host call and turn it into a no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Create an id for the record at `position`.
    pub const fn new(position: u32) -> Self {
        Self(position)
    }

    /// Returns the record position this id refers to.
    pub const fn get(self) -> u32 {
        self.0
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) fn from_position(position: usize) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Record positions fit in 32 bits."
        )]
        Self(position as u32)
    }
}

impl From<u32> for NodeId {
    fn from(position: u32) -> Self {
        Self::new(position)
    }
}

/// One entry of the flat input list the forest is built from.
///
/// `parent_id == 0` marks a root. Any other value is a 1-based position into
/// the same list: `parent_id - 1` names the record that becomes this node's parent.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NodeRecord {
    /// Overwritten with the record position at build time.
    pub node_id: u32,
    /// Text shown when no content widget is resolved for the row.
    pub name: String,
    /// 1-based parent position, or `0` for a root.
    pub parent_id: u32,
    /// Per-node padding, added to the default row padding for every nesting level.
    pub padding: Margin,
    /// Free-form strings forwarded to the host with every event.
    pub extra: Vec<String>,
}

impl NodeRecord {
    /// A root record.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A record whose parent is the record at 1-based position `parent_id`.
    pub fn child(parent_id: u32, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id,
            ..Default::default()
        }
    }

    /// Set the per-node padding.
    pub fn with_padding(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    /// Append extra strings.
    pub fn with_extra<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Returns true if this record describes a root.
    pub fn is_root(&self) -> bool {
        self.parent_id == 0
    }
}

bitflags::bitflags! {
    /// Per-row state handed to the renderer.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RowFlags: u8 {
        /// The node has at least one child; the expander arrow is shown.
        const HAS_CHILDREN     = 0b0000_0001;
        /// The node is in the expansion set.
        const EXPANDED         = 0b0000_0010;
        /// The node is the current selection.
        const SELECTED         = 0b0000_0100;
        /// The pointer is over the row's expander arrow.
        const EXPANDER_HOVERED = 0b0000_1000;
    }
}
