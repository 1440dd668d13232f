//! Concrete widgets.

mod press_hold_button;

pub use press_hold_button::{GestureEnd, LongPressListener, PressHoldButton, PressState};
