// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input: hit testing rows, expander clicks, hover glyphs, and clicking
//! outside every row.
//!
//! Run:
//! - `cargo run -p understory_examples --example tree_view_pointer`

use kurbo::Point;
use understory_tree_view::config::TreeViewConfig;
use understory_tree_view::layout::RowMetrics;
use understory_tree_view::types::NodeRecord;
use understory_tree_view::view::TreeView;

fn main() {
    let config = TreeViewConfig {
        metrics: RowMetrics {
            row_height: 24.0,
            width: 320.0,
            expander_width: 16.0,
        },
        ..TreeViewConfig::default()
    };
    let records = vec![
        NodeRecord::root("src"),
        NodeRecord::child(1, "lib.rs"),
        NodeRecord::child(1, "view"),
        NodeRecord::child(3, "mod.rs"),
        NodeRecord::root("tests"),
    ];
    let mut view: TreeView<()> = TreeView::with_config(records, config);

    let layout = view.layout();
    for row in layout.rows() {
        println!("{:?} bounds={:?} expander={:?}", row.node, row.bounds, row.expander);
    }

    // Hover over the arrow of "src".
    let arrow = Point::new(6.0, 12.0);
    println!("hover: {:?}", view.pointer_move(arrow));
    println!("glyph: {:?}", view.visible_rows()[0].glyph);

    // Shift-click expands the whole subtree.
    println!("shift-click: {:?}", view.pointer_down(arrow, true));
    for row in view.visible_rows() {
        println!("  {}{}", "  ".repeat(row.depth), row.label);
    }

    // Click the text of "mod.rs" (fourth row).
    let events = view.pointer_down(Point::new(200.0, 3.5 * 24.0), false);
    println!("click row: {events:?}");
    println!("selected: {:?}", view.selected());

    // Click below the last row.
    let events = view.pointer_down(Point::new(200.0, 1000.0), false);
    println!("click outside: {events:?}");
    println!("selected: {:?}", view.selected());

    println!("leave: {:?}", view.pointer_leave());
}
