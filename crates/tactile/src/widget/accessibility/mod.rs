//! Accessibility support for Tactile widgets.
//!
//! Widgets describe themselves through the [`Accessible`] trait. With the
//! `accessibility` feature (on by default) that description can be turned
//! into an [AccessKit](https://accesskit.dev/) node for the platform
//! accessibility tree.

mod node;
mod role;

pub use node::Accessible;
pub use role::{AccessibleAction, AccessibleRole};
