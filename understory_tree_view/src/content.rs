// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row content selection.
//!
//! A row either shows a host-provided content widget or falls back to a plain text
//! label with the node's display name. The resolver decides which content handle
//! applies to a node; handles are opaque to this crate.
//!
//! ## Precedence
//!
//! 1. The default handle, if set.
//! 2. The first by-parent rule whose `parent_id` matches the node's `parent_id`.
//! 3. The first by-id rule whose `node_id` matches the node's id.
//!
//! Tiers are applied in this order and a later match replaces an earlier one, so a
//! by-id rule always wins over a by-parent rule. Within a tier, the first rule in
//! configured order wins.

use alloc::vec::Vec;

use crate::forest::TreeNode;
use crate::types::NodeId;

/// Content applied to every child of the record at `parent_id`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentByParent<H> {
    /// 1-based parent position (`0` matches roots).
    pub parent_id: u32,
    /// Content handle.
    pub content: H,
}

/// Content applied to one node.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentById<H> {
    /// Target node.
    pub node_id: NodeId,
    /// Content handle.
    pub content: H,
}

/// Ordered content rules plus an optional default.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowContentResolver<H> {
    default: Option<H>,
    by_parent: Vec<ContentByParent<H>>,
    by_id: Vec<ContentById<H>>,
}

impl<H> Default for RowContentResolver<H> {
    fn default() -> Self {
        Self {
            default: None,
            by_parent: Vec::new(),
            by_id: Vec::new(),
        }
    }
}

impl<H> RowContentResolver<H> {
    /// A resolver with no rules; every row falls back to its text label.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default content.
    pub fn with_default(mut self, content: H) -> Self {
        self.default = Some(content);
        self
    }

    /// Append a by-parent rule.
    pub fn by_parent(mut self, parent_id: u32, content: H) -> Self {
        self.by_parent.push(ContentByParent { parent_id, content });
        self
    }

    /// Append a by-id rule.
    pub fn by_id(mut self, node_id: NodeId, content: H) -> Self {
        self.by_id.push(ContentById { node_id, content });
        self
    }

    /// Replace the default content.
    pub fn set_default(&mut self, content: Option<H>) {
        self.default = content;
    }

    /// Replace the by-parent rules.
    pub fn set_by_parent(&mut self, rules: Vec<ContentByParent<H>>) {
        self.by_parent = rules;
    }

    /// Replace the by-id rules.
    pub fn set_by_id(&mut self, rules: Vec<ContentById<H>>) {
        self.by_id = rules;
    }

    /// Returns true if no rule and no default is configured.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.by_parent.is_empty() && self.by_id.is_empty()
    }

    /// Content for `node`, or `None` when the row should render its text label.
    pub fn resolve(&self, node: &TreeNode) -> Option<&H> {
        self.resolve_for(node.id(), node.parent_id())
    }

    /// Content for a node given its id and record `parent_id`.
    pub fn resolve_for(&self, node_id: NodeId, parent_id: u32) -> Option<&H> {
        let mut selected = self.default.as_ref();
        if let Some(rule) = self.by_parent.iter().find(|r| r.parent_id == parent_id) {
            selected = Some(&rule.content);
        }
        if let Some(rule) = self.by_id.iter().find(|r| r.node_id == node_id) {
            selected = Some(&rule.content);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Widget {
        Plain,
        Folder,
        Special,
        Other,
    }

    #[test]
    fn empty_resolver_falls_back_to_label() {
        let resolver: RowContentResolver<Widget> = RowContentResolver::new();
        assert!(resolver.is_empty());
        assert_eq!(resolver.resolve_for(NodeId::new(0), 0), None);
    }

    #[test]
    fn default_applies_without_matching_rules() {
        let resolver = RowContentResolver::new()
            .with_default(Widget::Plain)
            .by_parent(5, Widget::Folder);
        assert_eq!(resolver.resolve_for(NodeId::new(1), 1), Some(&Widget::Plain));
    }

    #[test]
    fn by_parent_overrides_default() {
        let resolver = RowContentResolver::new()
            .with_default(Widget::Plain)
            .by_parent(1, Widget::Folder);
        assert_eq!(resolver.resolve_for(NodeId::new(3), 1), Some(&Widget::Folder));
        // Roots match rules keyed on parent 0.
        let roots = RowContentResolver::new().by_parent(0, Widget::Folder);
        assert_eq!(roots.resolve_for(NodeId::new(0), 0), Some(&Widget::Folder));
    }

    #[test]
    fn by_id_wins_over_by_parent() {
        let resolver = RowContentResolver::new()
            .with_default(Widget::Plain)
            .by_id(NodeId::new(2), Widget::Special)
            .by_parent(1, Widget::Folder);
        assert_eq!(resolver.resolve_for(NodeId::new(2), 1), Some(&Widget::Special));
        assert_eq!(resolver.resolve_for(NodeId::new(3), 1), Some(&Widget::Folder));
    }

    #[test]
    fn first_rule_in_a_tier_wins() {
        let resolver = RowContentResolver::new()
            .by_parent(1, Widget::Folder)
            .by_parent(1, Widget::Other)
            .by_id(NodeId::new(4), Widget::Special)
            .by_id(NodeId::new(4), Widget::Other);
        assert_eq!(resolver.resolve_for(NodeId::new(3), 1), Some(&Widget::Folder));
        assert_eq!(resolver.resolve_for(NodeId::new(4), 1), Some(&Widget::Special));
    }
}
