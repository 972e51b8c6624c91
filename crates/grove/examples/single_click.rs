//! Grove Single-Click Browsing Example
//!
//! Drives a [`ClickController`] over a [`TreeView`] with a scripted pointer
//! session and prints what the signals report:
//! - Hover tracking while the pointer moves across rows
//! - Single-click activation, and its suppression on expander clicks
//! - Rubber band selection with the drag source suspended
//! - Dragging a multi-row selection without collapsing it
//!
//! Run with: cargo run -p grove --example single_click

use std::sync::Arc;

use grove::model::{ItemModel, ModelIndex, SelectionMode, TreeModel};
use grove::view::{
    ClickController, KeyboardModifiers, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, TreeView, ViewEvent,
};
use grove_core::{Point, Size};

fn click(controller: &mut ClickController<TreeView>, pos: Point) {
    let mut press = ViewEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut press);
    let mut release = ViewEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        pos,
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut release);
}

fn hover(controller: &mut ClickController<TreeView>, pos: Point) {
    let mut event = ViewEvent::MouseMove(MouseMoveEvent::hover(pos));
    controller.handle_event(&mut event);
}

fn drag_move(controller: &mut ClickController<TreeView>, pos: Point) {
    let mut event = ViewEvent::MouseMove(MouseMoveEvent::with_button(pos, MouseButton::Left));
    controller.handle_event(&mut event);
}

fn name_of(model: &TreeModel, index: &ModelIndex) -> String {
    model
        .display_text(index)
        .unwrap_or_else(|| "<unnamed>".to_string())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Grove Single-Click Browsing ===\n");

    let model = Arc::new(TreeModel::new());
    let documents = model.add_root("Documents".to_string());
    model.add_child(documents, "notes.txt".to_string());
    model.add_child(documents, "report.pdf".to_string());
    let pictures = model.add_root("Pictures".to_string());
    model.add_child(pictures, "beach.jpg".to_string());
    model.add_root("README.md".to_string());

    // Rows are 24px tall; the view starts with all roots collapsed.
    let view = TreeView::new(model.clone()).with_view_size(Size::new(320.0, 240.0));
    let mut controller = ClickController::new(view);

    controller.single_click_changed.connect(|enabled| {
        println!("[mode] single-click {}", if *enabled { "on" } else { "off" });
    });

    let hover_model = model.clone();
    controller.row_hovered.connect(move |row| match row {
        Some(index) => println!("[hover] {}", name_of(&hover_model, &index)),
        None => println!("[hover] nothing"),
    });

    let open_model = model.clone();
    controller.view().activated.connect(move |index| {
        println!("[open] {}", name_of(&open_model, &index));
    });

    let expand_model = model.clone();
    controller.view().expanded.connect(move |index| {
        println!("[tree] expanded {}", name_of(&expand_model, &index));
    });

    controller
        .view()
        .selection_model()
        .selection_changed
        .connect(|(selected, deselected)| {
            println!(
                "[selection] +{} -{} rows",
                selected.len(),
                deselected.len()
            );
        });

    controller
        .view()
        .drag_source()
        .drag_started
        .connect(|data| {
            println!("[drag] started with {} rows", data.indices().len());
        });

    controller.set_single_click(true);

    println!("\n--- Hover tracking ---");
    hover(&mut controller, Point::new(140.0, 12.0)); // Documents
    hover(&mut controller, Point::new(140.0, 36.0)); // Pictures
    let mut leave = ViewEvent::Leave(LeaveEvent::new());
    controller.handle_event(&mut leave);

    println!("\n--- One click opens a row ---");
    click(&mut controller, Point::new(140.0, 12.0));

    println!("\n--- Expander clicks toggle without opening ---");
    click(&mut controller, Point::new(8.0, 12.0));
    println!(
        "view now shows {} rows",
        controller.view().visible_row_count()
    );

    println!("\n--- Rubber band selection ---");
    controller
        .view_mut()
        .selection_model_mut()
        .set_selection_mode(SelectionMode::MultiSelection);
    // Press empty space below the rows, sweep upwards over them.
    let mut press = ViewEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(200.0, 140.0),
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut press);
    drag_move(&mut controller, Point::new(60.0, 30.0));
    let mut release = ViewEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(60.0, 30.0),
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut release);

    println!("\n--- Dragging the selection keeps it intact ---");
    controller.view_mut().set_drag_enabled(true);
    let mut press = ViewEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(140.0, 36.0), // notes.txt, part of the selection
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut press);
    drag_move(&mut controller, Point::new(140.0, 60.0));
    // Drop outside the view.
    let mut release = ViewEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(400.0, 300.0),
        KeyboardModifiers::NONE,
    ));
    controller.handle_event(&mut release);
    println!(
        "selection still holds {} rows",
        controller.view().selection_model().selected_count()
    );

    controller.set_single_click(false);
    println!("\n=== Done ===");
}
