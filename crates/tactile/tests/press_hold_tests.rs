//! Gesture and animation tests for the press-and-hold button.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tactile::prelude::*;
use tactile::render::DrawCommand;

const FRAME: Duration = Duration::from_millis(16);

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

struct Fixture {
    clock: ManualClock,
    host: HeadlessHost,
    button: PressHoldButton,
    long_presses: Arc<AtomicUsize>,
}

impl Fixture {
    fn new() -> Self {
        init_tracing();
        let clock = ManualClock::new();
        let mut button =
            PressHoldButton::with_config(PressHoldConfig::default(), Arc::new(clock.clone()));
        button.set_bounds(Rect::new(0.0, 0.0, 400.0, 160.0));

        let long_presses = Arc::new(AtomicUsize::new(0));
        let counter = long_presses.clone();
        button.set_long_press_listener(Some(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })));

        Self {
            clock,
            host: HeadlessHost::new(),
            button,
            long_presses,
        }
    }

    fn hold_for(&mut self, duration: Duration) {
        self.host
            .run_for(&mut self.button, &self.clock, duration, FRAME);
    }

    fn long_press_count(&self) -> usize {
        self.long_presses.load(Ordering::SeqCst)
    }

    fn assert_at_rest(&self) {
        assert_eq!(self.button.scale_factor(), 1.0);
        assert_eq!(self.button.fill_color(), Color::YELLOW);
        assert!(!self.button.is_animating());
    }
}

#[test]
fn test_release_before_hold_never_fires_listener() {
    for held in [0, 16, 500, 1500, 1999] {
        let mut fx = Fixture::new();
        fx.button.handle_touch(&TouchEvent::down());
        fx.hold_for(ms(held));
        fx.button.handle_touch(&TouchEvent::up());
        fx.host
            .drive_until_idle(&mut fx.button, &fx.clock, FRAME);
        fx.hold_for(ms(5000));

        assert_eq!(fx.long_press_count(), 0, "released after {held} ms");
        assert!(fx.host.haptics().is_empty());
        assert_eq!(fx.button.press_state(), PressState::Idle);
    }
}

#[test]
fn test_cancel_before_hold_never_fires_listener() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(1000));
    fx.button.handle_touch(&TouchEvent::cancel());
    fx.hold_for(ms(5000));

    assert_eq!(fx.long_press_count(), 0);
    fx.assert_at_rest();
}

#[test]
fn test_hold_fires_listener_once() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(fx.button.hold_duration());

    assert_eq!(fx.long_press_count(), 1);
    assert_eq!(fx.button.press_state(), PressState::LongPressFired);
    assert_eq!(fx.host.haptics(), &[HapticFeedback::LongPress]);
}

#[test]
fn test_holding_past_threshold_does_not_refire() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(10_000));

    assert_eq!(fx.long_press_count(), 1);
    assert_eq!(fx.host.haptics().len(), 1);

    fx.button.handle_touch(&TouchEvent::up());
    fx.hold_for(ms(1000));
    assert_eq!(fx.long_press_count(), 1);
    fx.assert_at_rest();
}

#[test]
fn test_each_gesture_can_fire_once() {
    let mut fx = Fixture::new();
    for round in 1..=3 {
        fx.button.handle_touch(&TouchEvent::down());
        fx.hold_for(ms(2500));
        fx.button.handle_touch(&TouchEvent::up());
        fx.hold_for(ms(300));
        assert_eq!(fx.long_press_count(), round);
    }
}

#[test]
fn test_long_press_resets_while_finger_still_down() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(fx.button.hold_duration());
    assert_eq!(fx.button.scale_factor(), 0.8);
    assert_eq!(fx.button.fill_color(), Color::RED);

    fx.hold_for(fx.button.reset_duration());
    fx.assert_at_rest();
    assert_eq!(fx.button.press_state(), PressState::LongPressFired);
}

#[test]
fn test_release_returns_to_rest_within_reset_duration() {
    for held in [0, 250, 1000, 1900, 2000, 3000] {
        let mut fx = Fixture::new();
        fx.button.handle_touch(&TouchEvent::down());
        fx.hold_for(ms(held));
        fx.button.handle_touch(&TouchEvent::up());

        fx.hold_for(fx.button.reset_duration());
        fx.assert_at_rest();
        assert!(fx.button.next_wakeup().is_none(), "held {held} ms");
    }
}

#[test]
fn test_cancel_returns_to_rest_within_reset_duration() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(1200));
    fx.button.on_touch_up_or_cancel(GestureEnd::Cancelled);

    fx.hold_for(ms(200));
    fx.assert_at_rest();
}

#[test]
fn test_press_during_reset_continues_from_partial_values() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(1000));
    assert!((fx.button.scale_factor() - 0.9).abs() < 1e-4);

    fx.button.handle_touch(&TouchEvent::up());
    fx.hold_for(ms(100));
    let partial_scale = fx.button.scale_factor();
    let partial_color = fx.button.fill_color();
    assert!((partial_scale - 0.95).abs() < 1e-4);

    fx.button.handle_touch(&TouchEvent::down());
    fx.button.advance(&mut fx.host);

    // No jump back to the resting appearance.
    assert_eq!(fx.button.scale_factor(), partial_scale);
    assert_eq!(fx.button.fill_color(), partial_color);
    assert_eq!(fx.button.press_state(), PressState::Pressing);

    // The new press runs toward the pressed appearance from there.
    fx.hold_for(ms(1000));
    let expected = partial_scale + (0.8 - partial_scale) * 0.5;
    assert!((fx.button.scale_factor() - expected).abs() < 1e-4);
    assert!(fx.button.scale_factor() < partial_scale);
}

#[test]
fn test_press_during_reset_rearms_full_hold() {
    let mut fx = Fixture::new();
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(1500));
    fx.button.handle_touch(&TouchEvent::up());
    fx.hold_for(ms(50));

    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(1999));
    assert_eq!(fx.long_press_count(), 0);

    fx.hold_for(ms(1));
    assert_eq!(fx.long_press_count(), 1);
}

#[test]
fn test_set_label_updates_text_and_accessible_name() {
    let mut fx = Fixture::new();
    fx.button.set_label("Done");

    assert_eq!(fx.button.accessible_name().as_deref(), Some("Done"));
    assert_eq!(fx.button.accessible_role(), AccessibleRole::Button);
    assert!(fx.button.accessible_actions().contains(&AccessibleAction::Click));

    let rect = fx.button.local_rect();
    let commands = fx.host.paint(&fx.button, rect);
    let texts: Vec<&str> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Done"]);
}

#[test]
fn test_set_label_schedules_redraw() {
    let mut fx = Fixture::new();
    fx.button.advance(&mut fx.host);
    let before = fx.host.redraw_requests();

    fx.button.set_label("Done");
    assert!(fx.button.next_wakeup().is_some());
    fx.button.advance(&mut fx.host);
    assert_eq!(fx.host.redraw_requests(), before + 1);
}

#[cfg(feature = "accessibility")]
#[test]
fn test_accesskit_node_mirrors_label() {
    let mut fx = Fixture::new();
    fx.button.set_label("Done");

    let node = fx.button.build_accessible_node(fx.button.bounds());
    assert_eq!(node.role(), accesskit::Role::Button);
    assert_eq!(node.label(), Some("Done"));
    assert!(node.supports_action(accesskit::Action::Click));
}

#[test]
fn test_paint_follows_animation() {
    let mut fx = Fixture::new();
    fx.button.set_label("Go");

    let rect = fx.button.local_rect();
    let full = match fx.host.paint(&fx.button, rect).first() {
        Some(DrawCommand::FillRect { rect, color }) => (*rect, *color),
        other => panic!("expected fill, got {other:?}"),
    };
    assert_eq!(full, (rect, Color::YELLOW));

    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(2000));

    let shrunk = match fx.host.paint(&fx.button, rect).first() {
        Some(DrawCommand::FillRect { rect, color }) => (*rect, *color),
        other => panic!("expected fill, got {other:?}"),
    };
    assert_eq!(shrunk.0.center(), rect.center());
    assert_eq!(shrunk.0.width(), 320.0);
    assert_eq!(shrunk.1, Color::RED);
}

#[test]
fn test_signals_in_order() {
    let mut fx = Fixture::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    for (signal, name) in [
        (&fx.button.pressed, "pressed"),
        (&fx.button.tapped, "tapped"),
        (&fx.button.long_pressed, "long_pressed"),
        (&fx.button.released, "released"),
    ] {
        let log = log.clone();
        signal.connect(move |_| log.lock().push(name));
    }

    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(100));
    fx.button.handle_touch(&TouchEvent::up());
    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(2000));
    fx.button.handle_touch(&TouchEvent::up());

    assert_eq!(
        *log.lock(),
        vec![
            "pressed",
            "tapped",
            "released",
            "pressed",
            "long_pressed",
            "released"
        ]
    );
}

#[test]
fn test_haptics_unavailable_still_completes() {
    let mut fx = Fixture::new();
    fx.host = HeadlessHost::new().with_haptics_enabled(false);

    fx.button.handle_touch(&TouchEvent::down());
    fx.hold_for(ms(2200));

    assert_eq!(fx.long_press_count(), 1);
    assert_eq!(fx.host.haptics(), &[HapticFeedback::LongPress]);
    fx.assert_at_rest();
}

#[test]
fn test_custom_timing_from_config() {
    init_tracing();
    let config = PressHoldConfig::from_toml_str(
        r#"
        long_press_timeout_ms = 100
        hold_multiplier = 3
        reset_duration_ms = 50
        pressed_scale = 0.5
        "#,
    )
    .unwrap();
    let clock = ManualClock::new();
    let mut host = HeadlessHost::new();
    let mut button = PressHoldButton::with_config(config, Arc::new(clock.clone()));

    assert_eq!(button.hold_duration(), ms(300));
    button.handle_touch(&TouchEvent::down());
    host.run_for(&mut button, &clock, ms(300), FRAME);
    assert_eq!(button.press_state(), PressState::LongPressFired);
    assert_eq!(button.scale_factor(), 0.5);

    host.run_for(&mut button, &clock, ms(50), FRAME);
    assert_eq!(button.scale_factor(), 1.0);
}
