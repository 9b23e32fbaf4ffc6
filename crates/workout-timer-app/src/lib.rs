//! Application layer for the workout timer
//!
//! Pure state machines and a generic runtime for driving timing programs
//! from a keyboard, enabling deterministic testing with the same code that
//! runs in the terminal.
//!
//! # Components
//!
//! - [`App`]: UI state machine and command dispatcher
//! - [`Config`]: defaults, TOML loading and keybindings
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use config::{Config, ConfigError};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{AppState, PromptState};
