//! End-to-end tests driving a `ClickController` over a real `TreeView`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use grove::model::{ItemModel, ModelIndex, SelectionMode, TreeModel};
use grove::view::{
    ClickController, ItemView, Key, KeyPressEvent, KeyboardModifiers, LeaveEvent, MouseButton,
    MouseDoubleClickEvent, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, TreeView, ViewEvent,
};
use grove_core::{Point, Size};
use parking_lot::Mutex;

/// Three roots at 24px row height: Documents (two children), Pictures
/// (one child), README.md (leaf).
fn sample_tree() -> Arc<TreeModel> {
    let model = TreeModel::new();
    let documents = model.add_root("Documents".to_string());
    model.add_child(documents, "notes.txt".to_string());
    model.add_child(documents, "report.pdf".to_string());
    let pictures = model.add_root("Pictures".to_string());
    model.add_child(pictures, "beach.jpg".to_string());
    model.add_root("README.md".to_string());
    Arc::new(model)
}

fn controller() -> (Arc<TreeModel>, ClickController<TreeView>) {
    let model = sample_tree();
    let view = TreeView::new(model.clone()).with_view_size(Size::new(200.0, 240.0));
    (model, ClickController::new(view))
}

fn root(model: &TreeModel, row: usize) -> ModelIndex {
    model.index(row, &ModelIndex::invalid())
}

fn click_at(ctl: &mut ClickController<TreeView>, x: f32, y: f32) {
    press_at(ctl, x, y, KeyboardModifiers::NONE);
    release_at(ctl, x, y, KeyboardModifiers::NONE);
}

fn press_at(ctl: &mut ClickController<TreeView>, x: f32, y: f32, modifiers: KeyboardModifiers) {
    let mut event = ViewEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        Point::new(x, y),
        modifiers,
    ));
    ctl.handle_event(&mut event);
}

fn release_at(ctl: &mut ClickController<TreeView>, x: f32, y: f32, modifiers: KeyboardModifiers) {
    let mut event = ViewEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        Point::new(x, y),
        modifiers,
    ));
    ctl.handle_event(&mut event);
}

fn hover_at(ctl: &mut ClickController<TreeView>, x: f32, y: f32) {
    let mut event = ViewEvent::MouseMove(MouseMoveEvent::hover(Point::new(x, y)));
    ctl.handle_event(&mut event);
}

fn drag_to(ctl: &mut ClickController<TreeView>, x: f32, y: f32) {
    let mut event =
        ViewEvent::MouseMove(MouseMoveEvent::with_button(Point::new(x, y), MouseButton::Left));
    ctl.handle_event(&mut event);
}

fn count_activations(ctl: &ClickController<TreeView>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let c = count.clone();
    ctl.view().activated.connect(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn test_single_click_opens_row() {
    let (model, mut ctl) = controller();
    ctl.set_single_click(true);

    let opened = Arc::new(Mutex::new(Vec::new()));
    let log = opened.clone();
    ctl.view().activated.connect(move |index| {
        log.lock().push(index.clone());
    });

    click_at(&mut ctl, 100.0, 36.0); // Pictures

    let seen = opened.lock();
    assert_eq!(seen.as_slice(), &[root(&model, 1)]);
    // Activation leaves exactly the clicked row selected.
    assert_eq!(
        ctl.view().selection_model().selected_indices(),
        &[root(&model, 1)]
    );
}

#[test]
fn test_no_activation_without_single_click_mode() {
    let (_, mut ctl) = controller();
    let activations = count_activations(&ctl);

    click_at(&mut ctl, 100.0, 36.0);
    assert_eq!(activations.load(Ordering::SeqCst), 0);
    // The base view still handled the press as a plain selection click.
    assert!(ctl.view().selection_model().has_selection());
}

#[test]
fn test_double_click_consumed_only_in_single_click_mode() {
    let (model, mut ctl) = controller();
    ctl.set_single_click(true);
    let activations = count_activations(&ctl);

    // Double-click on the README.md leaf is swallowed whole.
    let mut dbl = ViewEvent::DoubleClick(MouseDoubleClickEvent::new(
        MouseButton::Left,
        Point::new(100.0, 60.0),
        KeyboardModifiers::NONE,
    ));
    assert!(ctl.handle_event(&mut dbl));
    assert!(dbl.is_accepted());
    assert_eq!(activations.load(Ordering::SeqCst), 0);

    // With the mode off the base view reacts: a parent row toggles.
    ctl.set_single_click(false);
    let mut dbl = ViewEvent::DoubleClick(MouseDoubleClickEvent::new(
        MouseButton::Left,
        Point::new(100.0, 12.0),
        KeyboardModifiers::NONE,
    ));
    ctl.handle_event(&mut dbl);
    assert!(ctl.view().is_expanded(&root(&model, 0)));
}

#[test]
fn test_multi_row_selection_survives_drag_press() {
    let (model, mut ctl) = controller();
    ctl.view_mut()
        .selection_model_mut()
        .set_selection_mode(SelectionMode::MultiSelection);
    ctl.view_mut().set_drag_enabled(true);

    // Build a three-row selection through the controller.
    click_at(&mut ctl, 100.0, 12.0);
    press_at(&mut ctl, 100.0, 36.0, KeyboardModifiers::CTRL);
    release_at(&mut ctl, 100.0, 36.0, KeyboardModifiers::CTRL);
    press_at(&mut ctl, 100.0, 60.0, KeyboardModifiers::CTRL);
    release_at(&mut ctl, 100.0, 60.0, KeyboardModifiers::CTRL);
    assert_eq!(ctl.view().selection_model().selected_count(), 3);

    // A plain press on a selected row would normally collapse the
    // selection to that row; the controller carries it through.
    press_at(&mut ctl, 100.0, 36.0, KeyboardModifiers::NONE);
    assert_eq!(ctl.view().selection_model().selected_count(), 3);
    assert_eq!(ctl.view().current_index(), &root(&model, 1));

    // Moving past the threshold starts a drag of the whole selection.
    drag_to(&mut ctl, 100.0, 80.0);
    assert!(ctl.view().has_active_drag());
    let data = ctl.view().drag_source().drag_data().unwrap();
    assert_eq!(data.indices().len(), 3);

    // Dropping outside the view ends the drag and keeps the selection.
    release_at(&mut ctl, 400.0, 300.0, KeyboardModifiers::NONE);
    assert!(!ctl.view().has_active_drag());
    assert_eq!(ctl.view().selection_model().selected_count(), 3);
}

#[test]
fn test_release_on_selected_row_narrows_selection() {
    let (model, mut ctl) = controller();
    ctl.view_mut()
        .selection_model_mut()
        .set_selection_mode(SelectionMode::MultiSelection);

    click_at(&mut ctl, 100.0, 12.0);
    press_at(&mut ctl, 100.0, 36.0, KeyboardModifiers::CTRL);
    release_at(&mut ctl, 100.0, 36.0, KeyboardModifiers::CTRL);
    assert_eq!(ctl.view().selection_model().selected_count(), 2);

    // Press-and-release in place on a selected row, without dragging:
    // the selection narrows to that row.
    click_at(&mut ctl, 100.0, 12.0);
    assert_eq!(
        ctl.view().selection_model().selected_indices(),
        &[root(&model, 0)]
    );
}

#[test]
fn test_rubber_band_sweep_suspends_drag_and_activation() {
    let (_, mut ctl) = controller();
    ctl.set_single_click(true);
    ctl.view_mut()
        .selection_model_mut()
        .set_selection_mode(SelectionMode::MultiSelection);
    ctl.view_mut().set_drag_enabled(true);
    let activations = count_activations(&ctl);

    // Press on empty space: the drag source is put on hold while the
    // band might start.
    press_at(&mut ctl, 100.0, 200.0, KeyboardModifiers::NONE);
    assert!(ctl.view().drag_source().is_suspended());

    // Sweeping upward selects the swept rows.
    drag_to(&mut ctl, 100.0, 30.0);
    assert_eq!(ctl.view().selection_model().selected_count(), 2);
    drag_to(&mut ctl, 100.0, 10.0);
    assert_eq!(ctl.view().selection_model().selected_count(), 3);

    // The release ends the band without activating anything, and the
    // drag source is usable again.
    release_at(&mut ctl, 100.0, 10.0, KeyboardModifiers::NONE);
    assert!(!ctl.view().drag_source().is_suspended());
    assert_eq!(activations.load(Ordering::SeqCst), 0);
    assert_eq!(ctl.view().selection_model().selected_count(), 3);
}

#[test]
fn test_expander_click_toggles_without_activating() {
    let (model, mut ctl) = controller();
    ctl.set_single_click(true);
    let activations = count_activations(&ctl);

    // x=8 lands on the depth-0 expander
    click_at(&mut ctl, 8.0, 12.0);
    assert!(ctl.view().is_expanded(&root(&model, 0)));
    assert_eq!(activations.load(Ordering::SeqCst), 0);

    // Past the expander band the same row activates.
    click_at(&mut ctl, 100.0, 12.0);
    assert_eq!(activations.load(Ordering::SeqCst), 1);
}

#[test]
fn test_hover_follows_pointer_and_clears_on_leave() {
    let (model, mut ctl) = controller();
    ctl.set_single_click(true);

    let hovers = Arc::new(Mutex::new(Vec::new()));
    let log = hovers.clone();
    ctl.row_hovered.connect(move |row| {
        log.lock().push(row.clone());
    });

    hover_at(&mut ctl, 100.0, 12.0);
    hover_at(&mut ctl, 100.0, 36.0);
    let mut leave = ViewEvent::Leave(LeaveEvent::new());
    ctl.handle_event(&mut leave);

    let seen = hovers.lock();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0].as_ref(), Some(&root(&model, 0)));
    assert_eq!(seen[1].as_ref(), Some(&root(&model, 1)));
    assert!(seen[2].is_none());
    assert!(ctl.hovered_row().is_none());
}

#[test]
fn test_keyboard_navigation_moves_cursor_and_drops_hover() {
    let (model, mut ctl) = controller();
    ctl.set_single_click(true);

    let hover_count = Arc::new(AtomicUsize::new(0));
    let c = hover_count.clone();
    ctl.row_hovered.connect(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    hover_at(&mut ctl, 100.0, 12.0);
    assert_eq!(hover_count.load(Ordering::SeqCst), 1);

    let mut key = ViewEvent::KeyPress(KeyPressEvent::new(
        Key::ArrowDown,
        KeyboardModifiers::NONE,
    ));
    ctl.handle_event(&mut key);

    assert_eq!(ctl.view().current_index(), &root(&model, 0));
    assert!(ctl.hovered_row().is_none());
    // The hover reset stays silent.
    assert_eq!(hover_count.load(Ordering::SeqCst), 1);
}
