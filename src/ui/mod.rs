//! UI module: the trigger cycle and the surface it drives
//!
//! The controller owns the idle/pending state of the submission trigger and
//! talks to the user only through an injected [`UiSurface`].

mod controller;
mod surface;

pub use controller::Controller;
pub use surface::{TerminalSurface, UiSurface};
