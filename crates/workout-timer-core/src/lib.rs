//! Workout timer core
//!
//! Pure timing state machines and the text grammar that drives them. Nothing
//! in this crate performs I/O or reads the clock: callers deliver elapsed
//! time through [`Program::tick`], which keeps every engine deterministic
//! under test.
//!
//! # Components
//!
//! - [`Program`]: the contract every engine implements
//! - [`IntervalTimer`]: multi-interval, multi-round countdown with auto and
//!   manual modes
//! - [`Stopwatch`]: count-up with laps
//! - [`parser`]: `set` duration and workout parsing
//! - [`command`]: verb grammar for keybindings and the prompt

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod command;
pub mod error;
pub mod parser;
pub mod program;
pub mod stopwatch;
pub mod time_left;
pub mod timer;

pub use command::Command;
pub use error::{CommandError, ParseError, TimerError};
pub use parser::Workout;
pub use program::{Mode, Position, Program, ProgramState};
pub use stopwatch::Stopwatch;
pub use time_left::TimeLeft;
pub use timer::IntervalTimer;
