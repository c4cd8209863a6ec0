//! Screens and the application orchestrator.

mod app;
mod home_screen;
mod landing_screen;

pub use app::{App, AppState};
pub use home_screen::{HomeAction, HomeFocus, HomeScreen};
pub use landing_screen::{LandingAction, LandingMode, LandingScreen};
