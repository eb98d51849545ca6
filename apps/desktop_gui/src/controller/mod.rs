//! Controller layer: UI events and command orchestration around the core form controller.

pub mod events;
pub mod orchestration;
