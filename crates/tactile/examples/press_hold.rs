//! Headless demo of the press-and-hold button.
//!
//! Simulates a quick tap followed by a full hold on a manual clock and prints
//! what the widget asked of its host. Run with
//! `RUST_LOG=tactile=debug cargo run --example press_hold` to see the
//! widget's own logging.

use std::sync::Arc;
use std::time::Duration;

use tactile::prelude::*;
use tactile::render::DrawCommand;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PressHoldConfig::load(path)?,
        None => PressHoldConfig::default(),
    };

    let clock = ManualClock::new();
    let mut host = HeadlessHost::new();
    let mut button = PressHoldButton::with_config(config, Arc::new(clock.clone()));
    button.set_bounds(Rect::new(0.0, 0.0, 400.0, 160.0));
    button.set_label("Hold to finish");

    button.tapped.connect(|_| println!("tapped"));
    button.set_long_press_listener(Some(Box::new(|| println!("long press!"))));

    println!(
        "hold duration {:?}, reset duration {:?}",
        button.hold_duration(),
        button.reset_duration()
    );

    // A quick tap.
    button.handle_touch(&TouchEvent::down());
    host.run_for(&mut button, &clock, Duration::from_millis(150), FRAME);
    button.handle_touch(&TouchEvent::up());
    host.drive_until_idle(&mut button, &clock, FRAME);

    // A full hold, sampled every quarter of the way.
    button.handle_touch(&TouchEvent::down());
    let quarter = button.hold_duration() / 4;
    for step in 1..=4 {
        host.run_for(&mut button, &clock, quarter, FRAME);
        print_frame(&mut host, &button, step * 25);
    }
    button.handle_touch(&TouchEvent::up());
    let frames = host.drive_until_idle(&mut button, &clock, FRAME);

    println!(
        "settled after {frames} frames: scale {:.2}, color {}",
        button.scale_factor(),
        button.fill_color().to_hex()
    );
    println!(
        "{} redraws requested, haptics {:?}",
        host.redraw_requests(),
        host.haptics()
    );

    Ok(())
}

fn print_frame(host: &mut HeadlessHost, button: &PressHoldButton, percent: u32) {
    for command in host.paint(button, button.local_rect()) {
        match command {
            DrawCommand::FillRect { rect, color } => println!(
                "{percent:>3}%  rect {:.0}x{:.0} {}  state {:?}",
                rect.width(),
                rect.height(),
                color.to_hex(),
                button.press_state()
            ),
            DrawCommand::Text { text, origin, .. } => {
                println!("      text {text:?} at ({:.1}, {:.1})", origin.x, origin.y)
            }
        }
    }
}
