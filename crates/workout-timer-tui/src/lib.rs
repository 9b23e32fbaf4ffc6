//! Terminal UI for the workout timer
//!
//! A thin shell over [`workout_timer_app::Driver`] that provides
//! terminal-specific I/O. All orchestration logic lives in the generic
//! [`workout_timer_app::Runtime`].
//!
//! This crate only handles terminal input, drawing and the bell.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod glyphs;
pub mod terminal;
pub mod ui;

pub use terminal::{TerminalDriver, TerminalError};
pub use workout_timer_app::{
    App, AppAction, AppEvent, AppState, Config, Driver, KeyInput, PromptState, Runtime,
};
