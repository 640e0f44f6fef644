//! Headless walkthrough of a two-drawer screen.
//!
//! A window with a navigation bar and a content area gets a left and a right
//! menu, each 90% of the screen wide. The bar buttons toggle them and a tap on
//! the mask hides everything. A fixed 60 Hz frame clock drives the animations.
//!
//! Run with `RUST_LOG=side_drawer=debug cargo run --example drawer_demo`
//! to see the state machine's logs.

use std::time::{Duration, Instant};

use side_drawer::prelude::*;
use side_drawer_core::logging::ViewTreeDebug;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_micros(16_667);

struct Screen {
    views: SharedViewTree,
    window: ViewId,
    overlay: DrawerOverlay,
    left: usize,
    right: usize,
}

impl Screen {
    fn build() -> Result<Self, DrawerError> {
        let views = SharedViewTree::new();
        let window = views.create_view_with_frame("window", Rect::new(0.0, 0.0, 390.0, 844.0));
        let nav_bar =
            views.create_view_with_frame("navigation-bar", Rect::new(0.0, 0.0, 390.0, 91.0));
        let content = views.create_view_with_frame("content", Rect::new(0.0, 91.0, 390.0, 753.0));
        views.add_child(window, nav_bar)?;
        views.add_child(window, content)?;

        let config = OverlayConfig {
            cover_mode: CoverMode::CoverNavigationBarLevel,
            ..OverlayConfig::default()
        };
        let mut overlay = DrawerOverlay::with_config(views.clone(), content, config)?;

        let size = DrawerSize::new(SizeValue::scale(0.9), SizeValue::scale(1.0));
        let left = overlay.add_item(
            DrawerItem::builder(menu(&views, "left-menu")?)
                .size(size)
                .build()?,
        )?;
        let right = overlay.add_item(
            DrawerItem::builder(menu(&views, "right-menu")?)
                .position(Position::RIGHT)
                .size(size)
                .build()?,
        )?;

        overlay.set_mask_tap_callback(Some(Box::new(|overlay: &mut DrawerOverlay| {
            let duration = overlay.config().default_duration();
            overlay.hide_all(duration, true, Some(Box::new(|| tracing::info!("all menus hidden"))));
        })));

        Ok(Self {
            views,
            window,
            overlay,
            left,
            right,
        })
    }

    fn run_until_idle(&mut self) {
        let mut frames = 0;
        while self.overlay.is_animating() {
            self.overlay.advance(FRAME);
            frames += 1;
        }
        tracing::info!(frames, "animations settled");
    }

    fn tap(&mut self, position: Point) {
        let start = Instant::now();
        let down = TouchPoint::new(1, TouchPhase::Started, position, start);
        let up = TouchPoint::new(1, TouchPhase::Ended, position, start + Duration::from_millis(70));
        self.overlay.handle_touch(&TouchEvent::single(down));
        self.overlay.handle_touch(&TouchEvent::single(up));
    }

    fn dump(&self, title: &str) {
        let dump = self
            .views
            .with_read(|tree| ViewTreeDebug::new().format_subtree(tree, self.window));
        match dump {
            Ok(dump) => println!("== {title}\n{dump}"),
            Err(error) => tracing::error!(%error, "failed to dump view tree"),
        }
    }
}

/// A menu panel with a few rows.
fn menu(views: &SharedViewTree, name: &str) -> Result<ViewId, DrawerError> {
    let panel = views.create_view(name);
    for i in 0..3 {
        let row = views.create_view_with_frame(
            format!("{name}-row-{i}"),
            Rect::new(0.0, i as f32 * 44.0, 351.0, 44.0),
        );
        views.add_child(panel, row)?;
    }
    Ok(panel)
}

fn main() -> Result<(), DrawerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut screen = Screen::build()?;
    screen.dump("initial");

    // Left bar button, twice.
    screen.overlay.toggle_item(screen.left, Some(Box::new(|| tracing::info!("left menu toggled"))));
    screen.run_until_idle();
    screen.dump("left menu shown");
    screen.overlay.toggle_item(screen.left, None);
    screen.run_until_idle();

    // Right bar button.
    screen.overlay.toggle_item(screen.right, None);
    screen.run_until_idle();
    screen.dump("right menu shown");

    // A row inside the right menu does not dismiss anything.
    screen.tap(Point::new(200.0, 20.0));
    assert!(!screen.overlay.is_hidden());

    // The mask strip left of the right menu does.
    screen.tap(Point::new(20.0, 400.0));
    screen.run_until_idle();
    screen.dump("after mask tap");
    assert!(screen.overlay.is_hidden());

    Ok(())
}
