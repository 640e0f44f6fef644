//! Tests for mask tap filtering and touch delivery.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use side_drawer::prelude::*;

struct Fixture {
    views: SharedViewTree,
    overlay: DrawerOverlay,
    window: ViewId,
    menu: ViewId,
    row: ViewId,
    taps: Rc<Cell<usize>>,
}

/// A shown left drawer at 75% width with one row, counting mask taps.
fn fixture() -> Fixture {
    let views = SharedViewTree::new();
    let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 400.0, 800.0));
    let menu = views.create_view("menu");
    let row = views.create_view_with_frame("row", Rect::new(0.0, 0.0, 300.0, 44.0));
    views.add_child(menu, row).unwrap();

    let mut overlay = DrawerOverlay::new(views.clone(), window).unwrap();
    let item = DrawerItem::builder(menu)
        .size(DrawerSize::new(SizeValue::scale(0.75), SizeValue::scale(1.0)))
        .build()
        .unwrap();
    let index = overlay.add_item(item).unwrap();
    overlay.set_item_hidden(index, false, Duration::ZERO, false, None);

    let taps = Rc::new(Cell::new(0));
    let counter = Rc::clone(&taps);
    overlay.set_mask_tap_callback(Some(Box::new(move |_: &mut DrawerOverlay| {
        counter.set(counter.get() + 1);
    })));

    Fixture {
        views,
        overlay,
        window,
        menu,
        row,
        taps,
    }
}

fn tap_at(x: f32, y: f32) -> [TouchEvent; 2] {
    let start = Instant::now();
    let position = Point::new(x, y);
    [
        TouchEvent::single(TouchPoint::new(1, TouchPhase::Started, position, start)),
        TouchEvent::single(TouchPoint::new(
            1,
            TouchPhase::Ended,
            position,
            start + Duration::from_millis(60),
        )),
    ]
}

fn deliver(overlay: &mut DrawerOverlay, events: &[TouchEvent]) -> bool {
    events.iter().fold(false, |claimed, event| overlay.handle_touch(event) | claimed)
}

#[test]
fn test_tap_on_mask_runs_callback_once() {
    let mut f = fixture();
    let mask = f.overlay.view();

    assert!(f.overlay.handle_tap(mask));
    assert_eq!(f.taps.get(), 1);
}

#[test]
fn test_tap_on_unrelated_view_runs_callback() {
    let mut f = fixture();

    assert!(f.overlay.handle_tap(f.window));
    assert_eq!(f.taps.get(), 1);
}

#[test]
fn test_tap_inside_content_is_ignored() {
    let mut f = fixture();

    assert!(!f.overlay.handle_tap(f.menu));
    assert!(!f.overlay.handle_tap(f.row));
    assert_eq!(f.taps.get(), 0);
}

#[test]
fn test_overlay_does_not_dismiss_by_itself() {
    let mut f = fixture();
    f.overlay.set_mask_tap_callback(None);

    assert!(f.overlay.handle_tap(f.overlay.view()));
    assert!(!f.overlay.is_item_hidden(0));
}

#[test]
fn test_touch_on_mask_outside_drawer() {
    let mut f = fixture();

    assert!(deliver(&mut f.overlay, &tap_at(350.0, 400.0)));
    assert_eq!(f.taps.get(), 1);
}

#[test]
fn test_touch_on_drawer_row_is_ignored() {
    let mut f = fixture();

    assert_eq!(f.views.hit_test(f.window, Point::new(100.0, 20.0)), Some(f.row));
    assert!(!deliver(&mut f.overlay, &tap_at(100.0, 20.0)));
    assert!(!deliver(&mut f.overlay, &tap_at(100.0, 400.0)));
    assert_eq!(f.taps.get(), 0);
}

#[test]
fn test_drag_on_mask_is_not_a_tap() {
    let mut f = fixture();
    let start = Instant::now();
    let events = [
        TouchEvent::single(TouchPoint::new(
            7,
            TouchPhase::Started,
            Point::new(350.0, 400.0),
            start,
        )),
        TouchEvent::single(TouchPoint::new(7, TouchPhase::Moved, Point::new(350.0, 500.0), start)),
        TouchEvent::single(TouchPoint::new(
            7,
            TouchPhase::Ended,
            Point::new(350.0, 500.0),
            start + Duration::from_millis(80),
        )),
    ];

    assert!(!deliver(&mut f.overlay, &events));
    assert_eq!(f.taps.get(), 0);
}

#[test]
fn test_hidden_mask_receives_no_touches() {
    let mut f = fixture();
    f.overlay.hide_all(Duration::ZERO, false, None);

    assert!(!deliver(&mut f.overlay, &tap_at(350.0, 400.0)));
    assert_eq!(f.taps.get(), 0);
}

#[test]
fn test_callback_can_hide_all() {
    let mut f = fixture();
    f.overlay.set_mask_tap_callback(Some(Box::new(|overlay: &mut DrawerOverlay| {
        overlay.hide_all(Duration::from_millis(300), true, None);
    })));

    assert!(deliver(&mut f.overlay, &tap_at(350.0, 400.0)));
    assert!(f.overlay.is_hidden());
    // Still tappable while the drawer slides out.
    assert!(f.views.is_interaction_enabled(f.overlay.view()).unwrap());

    f.overlay.finish_animations();
    assert_eq!(f.views.frame(f.menu).unwrap(), Rect::new(-300.0, 0.0, 300.0, 800.0));
    assert!(!f.views.is_interaction_enabled(f.overlay.view()).unwrap());

    // The callback survives being run.
    f.overlay.set_item_hidden(0, false, Duration::ZERO, false, None);
    assert!(f.overlay.handle_tap(f.overlay.view()));
    assert!(f.overlay.is_hidden());
}

#[test]
fn test_callback_can_remove_itself() {
    let mut f = fixture();
    let taps = Rc::clone(&f.taps);
    f.overlay.set_mask_tap_callback(Some(Box::new(move |overlay: &mut DrawerOverlay| {
        taps.set(taps.get() + 1);
        overlay.set_mask_tap_callback(None);
    })));

    assert!(f.overlay.handle_tap(f.overlay.view()));
    assert!(f.overlay.handle_tap(f.overlay.view()));
    assert_eq!(f.taps.get(), 1);
}

#[test]
fn test_callback_can_replace_itself() {
    let mut f = fixture();
    let taps = Rc::clone(&f.taps);
    f.overlay.set_mask_tap_callback(Some(Box::new(move |overlay: &mut DrawerOverlay| {
        taps.set(taps.get() + 1);
        let taps = Rc::clone(&taps);
        overlay.set_mask_tap_callback(Some(Box::new(move |_: &mut DrawerOverlay| {
            taps.set(taps.get() + 10);
        })));
    })));

    f.overlay.handle_tap(f.overlay.view());
    f.overlay.handle_tap(f.overlay.view());
    f.overlay.handle_tap(f.overlay.view());
    assert_eq!(f.taps.get(), 21);
}
