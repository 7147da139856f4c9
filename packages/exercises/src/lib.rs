//! Three small UI exercises, written without a reactive framework.
//!
//! Each one keeps its state in a plain struct, changes it with an `update` function that takes
//! the current state and an event, and describes its UI with a `view` function that returns an
//! [`ElementDescription`](domkit_core::ElementDescription). Putting the result on screen is left
//! to [`domkit_core::render`].

pub mod bg_changer;
pub mod custom_render;
pub mod password_generator;
