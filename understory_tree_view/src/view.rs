// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree view control.
//!
//! ## Overview
//!
//! [`TreeView`] owns the record list, the configuration, the content resolver, the
//! built forest and the expansion/selection state. Host calls mutate the state and
//! return the [`TreeEvent`]s they caused; the host dispatches them to its handlers.
//!
//! ## Lazy construction
//!
//! The forest is built on first use and rebuilt whenever the records or the build
//! policy change. [`TreeView::create_tree`] forces a rebuild and is the only call
//! that reports a strict build failure; a failed lazy build leaves an empty tree.
//!
//! A rebuild always starts from a fully collapsed tree with nothing selected.
//!
//! ## Addressing nodes
//!
//! Host calls such as [`TreeView::select_tree_item`] take a build position: the id
//! names the entry at that position of the build-order index, and ids at or past
//! [`Forest::len`] are no-ops. Rows and events carry each node's own id, its record
//! position. The two agree unless a lenient build dropped a record, after which
//! every later node sits one or more places earlier in the index than its id.
//!
//! ## Example
//!
//! ```
//! use understory_tree_view::event::TreeEvent;
//! use understory_tree_view::types::{NodeId, NodeRecord};
//! use understory_tree_view::view::TreeView;
//!
//! let mut view: TreeView<&str> = TreeView::new(vec![
//!     NodeRecord::root("A"),
//!     NodeRecord::child(1, "B"),
//!     NodeRecord::child(1, "C"),
//! ]);
//! assert_eq!(view.rows().len(), 1);
//!
//! let events = view.expand_tree_item(NodeId::new(0));
//! assert!(matches!(events[0], TreeEvent::ExpansionChanged { expanded: true, .. }));
//! assert!(matches!(events[1], TreeEvent::RowsChanged));
//! let labels: Vec<_> = view.visible_rows().iter().map(|r| r.label).collect();
//! assert_eq!(labels, ["A", "B", "C"]);
//! ```

use alloc::vec::Vec;
use kurbo::Point;

use crate::builder::TreeBuilder;
use crate::config::TreeViewConfig;
use crate::content::RowContentResolver;
use crate::error::BuildError;
use crate::event::{NodeInfo, StateChange, TreeEvent};
use crate::forest::{Forest, TreeNode};
use crate::hover::{HoverEvent, HoverTracker};
use crate::indent::row_padding;
use crate::layout::{ExpanderGlyph, RowLayout, RowZone};
use crate::state::{TreeState, VisibleRow};
use crate::types::{Margin, NodeId, NodeRecord, RowFlags};

/// Everything a renderer needs to draw one visible row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView<'a, H> {
    /// The row's node.
    pub node: NodeId,
    /// Nesting depth.
    pub depth: usize,
    /// Text label, used when `content` is `None`.
    pub label: &'a str,
    /// Resolved content handle.
    pub content: Option<&'a H>,
    /// State bits.
    pub flags: RowFlags,
    /// Padding around the row's content.
    pub padding: Margin,
    /// Margin pushing the expander arrow right.
    pub expander_padding: Margin,
    /// Arrow image to draw.
    pub glyph: ExpanderGlyph,
}

/// A headless tree view over a flat parent-pointer record list.
#[derive(Clone, Debug)]
pub struct TreeView<H> {
    records: Vec<NodeRecord>,
    config: TreeViewConfig,
    content: RowContentResolver<H>,
    builder: TreeBuilder,
    forest: Option<Forest>,
    state: TreeState,
    hover: HoverTracker,
}

impl<H: Clone> TreeView<H> {
    /// Create a view with the default configuration and no content rules.
    pub fn new(records: Vec<NodeRecord>) -> Self {
        Self::with_config(records, TreeViewConfig::default())
    }

    /// Create a view with an explicit configuration.
    pub fn with_config(records: Vec<NodeRecord>, config: TreeViewConfig) -> Self {
        Self {
            records,
            config,
            content: RowContentResolver::new(),
            builder: TreeBuilder::with_policy(config.build_policy),
            forest: None,
            state: TreeState::new(),
            hover: HoverTracker::new(),
        }
    }

    /// Replace the content resolver.
    pub fn with_content(mut self, content: RowContentResolver<H>) -> Self {
        self.content = content;
        self
    }

    /// The record list, with ids written back by the last build.
    pub fn records(&self) -> &[NodeRecord] {
        &self.records
    }

    /// Replace the records. The tree is rebuilt on next use.
    pub fn set_records(&mut self, records: Vec<NodeRecord>) -> Vec<TreeEvent<H>> {
        self.records = records;
        self.invalidate()
    }

    /// Current configuration.
    pub fn config(&self) -> &TreeViewConfig {
        &self.config
    }

    /// Replace the configuration. A new build policy triggers a rebuild on next use.
    pub fn set_config(&mut self, config: TreeViewConfig) -> Vec<TreeEvent<H>> {
        let rebuild = config.build_policy != self.config.build_policy;
        self.config = config;
        self.builder.set_policy(config.build_policy);
        if rebuild {
            self.invalidate()
        } else {
            Vec::new()
        }
    }

    /// The content resolver.
    pub fn content(&self) -> &RowContentResolver<H> {
        &self.content
    }

    /// Mutable access to the content resolver.
    pub fn content_mut(&mut self) -> &mut RowContentResolver<H> {
        &mut self.content
    }

    /// The built forest, if the tree has been built.
    pub fn forest(&self) -> Option<&Forest> {
        self.forest.as_ref()
    }

    /// Expansion and selection state.
    pub fn state(&self) -> &TreeState {
        &self.state
    }

    /// Rebuild the tree from the records now.
    ///
    /// On success, reports the selection loss (if anything was selected) and a
    /// rows refresh. Under a strict policy a dangling parent fails the build and
    /// leaves an empty tree.
    pub fn create_tree(&mut self) -> Result<Vec<TreeEvent<H>>, BuildError> {
        self.hover = HoverTracker::new();
        let (forest, outcome) = match self.builder.build_in_place(&mut self.records) {
            Ok(forest) => (forest, Ok(())),
            Err(err) => (Forest::new(), Err(err)),
        };
        let changes = self.state.reset(&forest);
        self.forest = Some(forest);
        outcome?;
        Ok(self.events(changes))
    }

    /// Add the node at build position `id` to the expansion set.
    pub fn expand_tree_item(&mut self, id: NodeId) -> Vec<TreeEvent<H>> {
        let Some(node) = self.resolve(id) else {
            return Vec::new();
        };
        self.apply(|state, forest| state.expand(forest, node))
    }

    /// Remove the node at build position `id` from the expansion set.
    pub fn collapse_tree_item(&mut self, id: NodeId) -> Vec<TreeEvent<H>> {
        let Some(node) = self.resolve(id) else {
            return Vec::new();
        };
        self.apply(|state, forest| state.collapse(forest, node))
    }

    /// Flip the expansion of the node at build position `id` if it has children.
    pub fn toggle_node_expansion(&mut self, id: NodeId) -> Vec<TreeEvent<H>> {
        let Some(node) = self.resolve(id) else {
            return Vec::new();
        };
        self.apply(|state, forest| state.toggle_expansion(forest, node))
    }

    /// Expand or collapse the node at build position `id` and all its descendants.
    pub fn set_expansion_recursive(&mut self, id: NodeId, expanded: bool) -> Vec<TreeEvent<H>> {
        let Some(node) = self.resolve(id) else {
            return Vec::new();
        };
        self.apply(|state, forest| state.set_expansion_recursive(forest, node, expanded))
    }

    /// Make the node at build position `id` the selection.
    pub fn select_tree_item(&mut self, id: NodeId) -> Vec<TreeEvent<H>> {
        let Some(node) = self.resolve(id) else {
            return Vec::new();
        };
        self.apply(|state, forest| state.select(forest, node))
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) -> Vec<TreeEvent<H>> {
        self.apply(|state, forest| state.clear_selection(forest))
    }

    /// Apply a click the host already resolved to a row, or to no row.
    ///
    /// `hit` is a row's node id as reported by [`rows`](Self::rows), not a build
    /// position.
    pub fn click(&mut self, hit: Option<NodeId>) -> Vec<TreeEvent<H>> {
        self.apply(|state, forest| state.click(forest, hit))
    }

    /// One [`TreeEvent::RowGenerated`] per visible row, top to bottom.
    pub fn generate_rows(&mut self) -> Vec<TreeEvent<H>> {
        self.build_if_needed();
        let Some(forest) = self.forest.as_ref() else {
            return Vec::new();
        };
        self.state
            .rows()
            .iter()
            .filter_map(|row| forest.get(row.node))
            .map(|node| TreeEvent::RowGenerated {
                node: NodeInfo::from(node),
                content: self.content.resolve(node).cloned(),
                children: forest
                    .children(node.id())
                    .filter_map(|child| forest.get(child))
                    .map(NodeInfo::from)
                    .collect(),
            })
            .collect()
    }

    /// Visible rows, top to bottom.
    pub fn rows(&mut self) -> &[VisibleRow] {
        self.build_if_needed();
        self.state.rows()
    }

    /// The selected node, if any.
    pub fn selected(&self) -> Option<NodeId> {
        self.state.selected()
    }

    /// Returns true if the node at build position `id` is expanded.
    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.forest
            .as_ref()
            .and_then(|forest| forest.at_index(id.idx()))
            .is_some_and(|node| self.state.is_expanded(node.id()))
    }

    /// The root of the tree containing the node at build position `id`.
    pub fn root_index(&mut self, id: NodeId) -> Option<NodeId> {
        let node = self.resolve(id)?;
        self.forest.as_ref()?.root_of(node)
    }

    /// Render data for every visible row.
    pub fn visible_rows(&mut self) -> Vec<RowView<'_, H>> {
        self.build_if_needed();
        let Some(forest) = self.forest.as_ref() else {
            return Vec::new();
        };
        let config = &self.config;
        let indent = config.indent();
        let hovered = self.hover.hovered_expander();
        self.state
            .rows()
            .iter()
            .filter_map(|row| {
                let node = forest.get(row.node)?;
                let mut flags = self.state.flags(forest, row.node);
                flags.set(RowFlags::EXPANDER_HOVERED, hovered == Some(row.node));
                Some(RowView {
                    node: row.node,
                    depth: row.depth,
                    label: node.display_name(),
                    content: self.content.resolve(node),
                    flags,
                    padding: row_padding(
                        row.depth,
                        config.text_padding,
                        config.row_default_padding,
                        node.padding(),
                    ),
                    expander_padding: indent.margin_at_depth(row.depth),
                    glyph: ExpanderGlyph::for_flags(flags, config.expander_visible),
                })
            })
            .collect()
    }

    /// Arrange the visible rows with the configured metrics.
    pub fn layout(&mut self) -> RowLayout {
        self.build_if_needed();
        let mut layout = RowLayout::with_metrics(self.config.metrics);
        layout.set_expander_visible(self.config.expander_visible);
        let Some(forest) = self.forest.as_ref() else {
            return layout;
        };
        let hovered = self.hover.hovered_expander();
        let state = &self.state;
        layout.arrange(state.rows(), &self.config.indent(), |id| {
            let mut flags = state.flags(forest, id);
            flags.set(RowFlags::EXPANDER_HOVERED, hovered == Some(id));
            flags
        });
        layout
    }

    /// Handle a pointer press at `point` in layout coordinates.
    ///
    /// A press on row content selects the row. A press on an expander toggles it,
    /// or with `shift` sets the whole subtree to the opposite of the row's
    /// current expansion. A press outside every row loses the selection.
    pub fn pointer_down(&mut self, point: Point, shift: bool) -> Vec<TreeEvent<H>> {
        let hit = self.layout().hit_test_point(point);
        let Some(hit) = hit else {
            return self.click(None);
        };
        let node = hit.node;
        match hit.zone {
            RowZone::Content => self.apply(|state, forest| state.select(forest, node)),
            RowZone::Expander if shift => {
                let expanded = !self.state.is_expanded(node);
                self.apply(|state, forest| state.set_expansion_recursive(forest, node, expanded))
            }
            RowZone::Expander => self.apply(|state, forest| state.toggle_expansion(forest, node)),
        }
    }

    /// Track the pointer moving to `point`.
    pub fn pointer_move(&mut self, point: Point) -> Vec<HoverEvent> {
        let hit = self.layout().hit_test_point(point);
        self.hover.update(hit)
    }

    /// Track the pointer leaving the control.
    pub fn pointer_leave(&mut self) -> Vec<HoverEvent> {
        self.hover.clear()
    }

    fn invalidate(&mut self) -> Vec<TreeEvent<H>> {
        self.forest = None;
        self.hover = HoverTracker::new();
        let changes = self.state.reset(&Forest::new());
        self.events(changes)
    }

    /// Node id of the entry at build position `id`, or `None` past the end.
    fn resolve(&mut self, id: NodeId) -> Option<NodeId> {
        self.build_if_needed();
        self.forest.as_ref()?.at_index(id.idx()).map(TreeNode::id)
    }

    fn build_if_needed(&mut self) {
        if self.forest.is_some() {
            return;
        }
        let forest = match self.builder.build_in_place(&mut self.records) {
            Ok(forest) => forest,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_err, "tree build failed, showing an empty tree");
                Forest::new()
            }
        };
        self.state.refresh(&forest);
        self.forest = Some(forest);
    }

    fn apply(
        &mut self,
        f: impl FnOnce(&mut TreeState, &Forest) -> Vec<StateChange>,
    ) -> Vec<TreeEvent<H>> {
        self.build_if_needed();
        let Some(forest) = self.forest.as_ref() else {
            return Vec::new();
        };
        let changes = f(&mut self.state, forest);
        changes
            .into_iter()
            .filter_map(|change| to_event(forest, &self.content, change))
            .collect()
    }

    fn events(&self, changes: Vec<StateChange>) -> Vec<TreeEvent<H>> {
        let empty = Forest::new();
        let forest = self.forest.as_ref().unwrap_or(&empty);
        changes
            .into_iter()
            .filter_map(|change| to_event(forest, &self.content, change))
            .collect()
    }
}

fn to_event<H: Clone>(
    forest: &Forest,
    content: &RowContentResolver<H>,
    change: StateChange,
) -> Option<TreeEvent<H>> {
    Some(match change {
        StateChange::Expansion { node, expanded } => {
            let node = forest.get(node)?;
            TreeEvent::ExpansionChanged {
                node: NodeInfo::from(node),
                content: content.resolve(node).cloned(),
                expanded,
            }
        }
        StateChange::Selection(node) => {
            let node = forest.get(node)?;
            TreeEvent::SelectionChanged {
                node: NodeInfo::from(node),
                content: content.resolve(node).cloned(),
            }
        }
        StateChange::SelectionLost => TreeEvent::SelectionLost,
        StateChange::RowsChanged => TreeEvent::RowsChanged,
    })
}
