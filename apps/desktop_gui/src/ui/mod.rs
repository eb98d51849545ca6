//! UI layer for the desktop ticket form.

pub mod app;
pub mod widgets;

pub use app::{StartupConfig, TicketApp};
