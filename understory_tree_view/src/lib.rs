// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree View: a headless tree view model.
//!
//! This crate turns a flat list of parent-pointer records into a multi-rooted tree and
//! keeps an expansion and selection view of it consistent with user actions. It gives
//! the host a flattened list of visible rows with their indentation geometry, and
//! hands back events for the host to dispatch to its handlers.
//!
//! - Builds a [`Forest`](forest::Forest) from [`NodeRecord`](types::NodeRecord)s in one pass.
//! - Tracks expansion and a single selection in [`TreeState`](state::TreeState).
//! - Computes depth, expander margins, and content padding with [`indent`].
//! - Resolves per-row content handles with [`RowContentResolver`](content::RowContentResolver).
//! - Arranges rows in [`kurbo`] geometry and hit tests points with [`RowLayout`](layout::RowLayout).
//!
//! ## Not a widget toolkit
//!
//! Nothing here draws, measures text, or owns widgets. Row content is an opaque handle
//! `H` chosen by the host; the tree only decides which handle applies to which row.
//! Input arrives either as host calls keyed by [`NodeId`](types::NodeId) or as pointer
//! positions in layout coordinates.
//!
//! ## Records
//!
//! Each record names its parent by 1-based position in the same list, with `0` marking
//! a root. A node's id is the 0-based position of its record. A record whose parent has
//! not been built yet is dropped by the default lenient [`BuildPolicy`](builder::BuildPolicy),
//! or rejected with a [`BuildError`](error::BuildError) by the strict one.
//!
//! ## API overview
//!
//! - [`view::TreeView`]: the control. Owns records, configuration, forest, and state.
//! - [`builder::TreeBuilder`]: records to forest.
//! - [`state::TreeState`]: expansion set, selection, visible rows.
//! - [`event::TreeEvent`]: what the host is told.
//! - [`config::TreeViewConfig`]: padding, indent, expander visibility, build policy.
//! - [`hover::HoverTracker`]: enter/leave transitions for rows and expander arrows.
//!
//! ### Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use understory_tree_view::content::RowContentResolver;
//! use understory_tree_view::event::TreeEvent;
//! use understory_tree_view::types::{NodeId, NodeRecord};
//! use understory_tree_view::view::TreeView;
//!
//! let records = vec![
//!     NodeRecord::root("Fruit"),
//!     NodeRecord::child(1, "Apple"),
//!     NodeRecord::child(1, "Pear"),
//!     NodeRecord::root("Vegetables"),
//! ];
//! let mut view = TreeView::new(records)
//!     .with_content(RowContentResolver::new().by_parent(1, "fruit-row"));
//!
//! // Collapsed: one row per root.
//! assert_eq!(view.rows().len(), 2);
//!
//! // Click the first row's expander arrow.
//! let events = view.pointer_down(Point::new(5.0, 5.0), false);
//! assert!(matches!(events[0], TreeEvent::ExpansionChanged { expanded: true, .. }));
//! assert_eq!(view.rows().len(), 4);
//!
//! // Click the text of "Pear".
//! let events = view.pointer_down(Point::new(100.0, 45.0), false);
//! let TreeEvent::SelectionChanged { node, content } = &events[0] else { unreachable!() };
//! assert_eq!(node.name, "Pear");
//! assert_eq!(*content, Some("fruit-row"));
//!
//! // Click below the last row.
//! let events = view.pointer_down(Point::new(100.0, 500.0), false);
//! assert_eq!(events[0], TreeEvent::SelectionLost);
//! assert_eq!(view.selected(), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to Kurbo.
//! - `libm`: `no_std` math for Kurbo.
//! - `tracing`: structured logs for builds, dropped records, and row refreshes.
//! - `serde`: serialization for records and configuration.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod builder;
pub mod config;
pub mod content;
pub mod error;
pub mod event;
pub mod forest;
pub mod hover;
pub mod indent;
pub mod layout;
pub mod state;
pub mod types;
pub mod view;

pub use builder::{BuildPolicy, TreeBuilder};
pub use error::BuildError;
pub use types::{Margin, NodeId, NodeRecord, RowFlags};
pub use view::TreeView;
