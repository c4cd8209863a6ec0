//! Presentation layer: terminal UI, widgets and event handling.

pub mod events;
pub mod ui;
pub mod widgets;
