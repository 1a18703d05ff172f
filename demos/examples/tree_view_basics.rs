// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree view basics: build from records, expand, select, and print rows.
//!
//! Run:
//! - `cargo run -p understory_examples --example tree_view_basics`

use understory_tree_view::content::RowContentResolver;
use understory_tree_view::event::TreeEvent;
use understory_tree_view::types::{NodeId, NodeRecord};
use understory_tree_view::view::{RowView, TreeView};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Content {
    Folder,
    Asset,
    Pinned,
}

fn print_rows(rows: &[RowView<'_, Content>]) {
    for row in rows {
        let indent = "  ".repeat(row.depth);
        let content = row
            .content
            .map_or_else(|| "label".to_string(), |c| format!("{c:?}"));
        println!(
            "  {indent}{:?} {} [{content}] padding.x0={} flags={:?}",
            row.glyph, row.label, row.padding.x0, row.flags
        );
    }
}

fn print_events(events: &[TreeEvent<Content>]) {
    for event in events {
        match event {
            TreeEvent::RowGenerated { node, children, .. } => {
                println!("  row {:?} '{}' with {} children", node.id, node.name, children.len());
            }
            TreeEvent::SelectionChanged { node, content } => {
                println!("  selected '{}' ({content:?})", node.name);
            }
            TreeEvent::SelectionLost => println!("  selection lost"),
            TreeEvent::ExpansionChanged { node, expanded, .. } => {
                println!("  '{}' expanded={expanded}", node.name);
            }
            TreeEvent::RowsChanged => println!("  rows changed"),
        }
    }
}

fn main() {
    // 1: Content
    // 2: Content/Textures
    // 3: Content/Textures/Grass
    // 4: Content/Meshes
    // 5: Engine
    let records = vec![
        NodeRecord::root("Content"),
        NodeRecord::child(1, "Textures"),
        NodeRecord::child(2, "Grass").with_extra(["T_Grass.png"]),
        NodeRecord::child(1, "Meshes"),
        NodeRecord::root("Engine"),
    ];
    let content = RowContentResolver::new()
        .with_default(Content::Asset)
        .by_parent(0, Content::Folder)
        .by_parent(1, Content::Folder)
        .by_id(NodeId::new(2), Content::Pinned);
    let mut view = TreeView::new(records).with_content(content);

    println!("Collapsed:");
    print_events(&view.generate_rows());
    print_rows(&view.visible_rows());

    println!("Expand everything under Content:");
    print_events(&view.set_expansion_recursive(NodeId::new(0), true));
    print_rows(&view.visible_rows());

    println!("Select Grass:");
    print_events(&view.select_tree_item(NodeId::new(2)));
    println!("  root of Grass: {:?}", view.root_index(NodeId::new(2)));

    println!("Collapse Textures:");
    print_events(&view.toggle_node_expansion(NodeId::new(1)));
    print_rows(&view.visible_rows());

    println!("Ids outside the tree are ignored:");
    println!("  events: {}", view.expand_tree_item(NodeId::new(99)).len());
}
