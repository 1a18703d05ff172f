// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built forest: an arena of nodes with parent back-links.
//!
//! ## Ownership
//!
//! The [`Forest`] owns every [`TreeNode`] in a single arena, stored in build order.
//! A node refers to its parent and children by arena slot, so the parent link never
//! forms a second ownership edge and dropping the forest drops the whole hierarchy.
//!
//! ## Lookup
//!
//! Nodes are looked up by [`NodeId`] through a table indexed by record position.
//! Records dropped during a lenient build have no entry; looking them up yields `None`.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{Margin, NodeId, NodeRecord};

/// A single node of the hierarchy.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeNode {
    id: NodeId,
    parent_id: u32,
    display_name: String,
    padding: Margin,
    extra: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl TreeNode {
    fn new(id: NodeId, parent: Option<usize>, record: &NodeRecord) -> Self {
        Self {
            id,
            parent_id: record.parent_id,
            display_name: record.name.clone(),
            padding: record.padding,
            extra: record.extra.clone(),
            parent,
            children: Vec::new(),
        }
    }

    /// Position-derived identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The 1-based parent position from the record, `0` for a root.
    pub fn parent_id(&self) -> u32 {
        self.parent_id
    }

    /// Text shown when no content widget applies.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Per-node padding from the record.
    pub fn padding(&self) -> Margin {
        self.padding
    }

    /// Extra strings from the record.
    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    /// Returns true if the node was built as a root.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns true if the node has at least one child.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A multi-rooted tree built from a flat record list.
#[derive(Clone, Default, PartialEq)]
pub struct Forest {
    nodes: Vec<TreeNode>,
    roots: Vec<usize>,
    // Arena slot per record position; `None` for dropped records.
    slots: Vec<Option<usize>>,
    dropped: Vec<usize>,
    epoch: u64,
}

impl core::fmt::Debug for Forest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Forest")
            .field("nodes", &self.nodes.len())
            .field("roots", &self.roots.len())
            .field("records", &self.slots.len())
            .field("dropped", &self.dropped)
            .field("epoch", &self.epoch)
            .finish_non_exhaustive()
    }
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(records: usize, epoch: u64) -> Self {
        Self {
            nodes: Vec::with_capacity(records),
            roots: Vec::new(),
            slots: Vec::with_capacity(records),
            dropped: Vec::new(),
            epoch,
        }
    }

    /// Number of built nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if no node was built.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of records the forest was built from, including dropped ones.
    pub fn record_count(&self) -> usize {
        self.slots.len()
    }

    /// Build counter of the builder that produced this forest.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Record positions skipped because their parent was not yet built.
    pub fn dropped(&self) -> &[usize] {
        &self.dropped
    }

    /// Root nodes in record order.
    pub fn roots(&self) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        self.roots.iter().map(|&slot| self.nodes[slot].id)
    }

    /// All nodes in build order (the index the builder resolves parents against).
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TreeNode> + '_ {
        self.nodes.iter()
    }

    /// Look up a node.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.slot(id).map(|slot| &self.nodes[slot])
    }

    /// Returns true if `id` refers to a built node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.slot(id).is_some()
    }

    /// The node at `position` of the build-order index.
    pub fn at_index(&self, position: usize) -> Option<&TreeNode> {
        self.nodes.get(position)
    }

    /// Parent of `id`, or `None` for roots and unknown ids.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let node = self.get(id)?;
        node.parent.map(|slot| self.nodes[slot].id)
    }

    /// Children of `id` in record order. Empty for leaves and unknown ids.
    pub fn children(&self, id: NodeId) -> impl ExactSizeIterator<Item = NodeId> + '_ {
        let children: &[usize] = self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[]);
        children.iter().map(|&slot| self.nodes[slot].id)
    }

    /// Returns true if `id` has at least one child.
    pub fn has_children(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(TreeNode::has_children)
    }

    /// Path from the root to `id` (inclusive). Empty for unknown ids.
    pub fn path_to_root(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(mut slot) = self.slot(id) else {
            return out;
        };
        // Terminates: parents are always built before their children.
        loop {
            let node = &self.nodes[slot];
            out.push(node.id);
            match node.parent {
                Some(p) => slot = p,
                None => break,
            }
        }
        out.reverse();
        out
    }

    /// The root of the tree containing `id`.
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        let mut slot = self.slot(id)?;
        while let Some(p) = self.nodes[slot].parent {
            slot = p;
        }
        Some(self.nodes[slot].id)
    }

    /// `id` followed by all of its descendants in depth-first pre-order.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(start) = self.slot(id) else {
            return out;
        };
        let mut stack = alloc::vec![start];
        while let Some(slot) = stack.pop() {
            let node = &self.nodes[slot];
            out.push(node.id);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    // --- build support ---

    /// Number of nodes in the build-order index so far.
    pub(crate) fn built(&self) -> usize {
        self.nodes.len()
    }

    /// Materialize `record` as a root, or as a child of the index entry `parent`.
    pub(crate) fn push(&mut self, id: NodeId, parent: Option<usize>, record: &NodeRecord) {
        debug_assert_eq!(id.idx(), self.slots.len(), "records are pushed in order");
        let slot = self.nodes.len();
        self.nodes.push(TreeNode::new(id, parent, record));
        match parent {
            Some(p) => self.nodes[p].children.push(slot),
            None => self.roots.push(slot),
        }
        self.slots.push(Some(slot));
    }

    /// Account for a record that produced no node.
    pub(crate) fn skip(&mut self, position: usize) {
        debug_assert_eq!(position, self.slots.len(), "records are skipped in order");
        self.slots.push(None);
        self.dropped.push(position);
    }

    pub(crate) fn slot(&self, id: NodeId) -> Option<usize> {
        self.slots.get(id.idx()).copied().flatten()
    }

    pub(crate) fn node_at(&self, slot: usize) -> &TreeNode {
        &self.nodes[slot]
    }

    pub(crate) fn parent_slot(&self, slot: usize) -> Option<usize> {
        self.nodes[slot].parent
    }

    pub(crate) fn root_slots(&self) -> &[usize] {
        &self.roots
    }

    pub(crate) fn child_slots(&self, slot: usize) -> &[usize] {
        &self.nodes[slot].children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Forest {
        // 0: a, 1: a/b, 2: a/b/c, 3: d
        let mut forest = Forest::with_capacity(4, 1);
        forest.push(NodeId::new(0), None, &NodeRecord::root("a"));
        forest.push(NodeId::new(1), Some(0), &NodeRecord::child(1, "b"));
        forest.push(NodeId::new(2), Some(1), &NodeRecord::child(2, "c"));
        forest.push(NodeId::new(3), None, &NodeRecord::root("d"));
        forest
    }

    #[test]
    fn parents_and_children_link_both_ways() {
        let forest = sample();
        assert_eq!(forest.len(), 4);
        assert_eq!(
            forest.roots().collect::<Vec<_>>(),
            vec![NodeId::new(0), NodeId::new(3)]
        );
        assert_eq!(forest.parent(NodeId::new(2)), Some(NodeId::new(1)));
        assert_eq!(forest.parent(NodeId::new(0)), None);
        assert_eq!(
            forest.children(NodeId::new(0)).collect::<Vec<_>>(),
            vec![NodeId::new(1)]
        );
        assert!(forest.has_children(NodeId::new(1)));
        assert!(!forest.has_children(NodeId::new(2)));
    }

    #[test]
    fn path_and_root_walks() {
        let forest = sample();
        assert_eq!(
            forest.path_to_root(NodeId::new(2)),
            vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]
        );
        assert_eq!(forest.root_of(NodeId::new(2)), Some(NodeId::new(0)));
        assert_eq!(forest.root_of(NodeId::new(3)), Some(NodeId::new(3)));
        assert_eq!(
            forest.subtree(NodeId::new(0)),
            vec![NodeId::new(0), NodeId::new(1), NodeId::new(2)]
        );
    }

    #[test]
    fn unknown_ids_are_tolerated() {
        let mut forest = sample();
        forest.skip(4);
        let missing = NodeId::new(4);
        let beyond = NodeId::new(99);
        for id in [missing, beyond] {
            assert!(!forest.contains(id));
            assert_eq!(forest.get(id), None);
            assert_eq!(forest.parent(id), None);
            assert_eq!(forest.children(id).len(), 0);
            assert!(forest.path_to_root(id).is_empty());
            assert!(forest.subtree(id).is_empty());
        }
        assert_eq!(forest.dropped(), &[4]);
        assert_eq!(forest.record_count(), 5);
    }
}
