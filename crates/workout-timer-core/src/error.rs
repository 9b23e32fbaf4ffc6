//! Error types for the workout timer core.
//!
//! Strongly-typed errors for each layer: duration parsing, timer
//! construction and command interpretation. Every variant renders to a
//! message that can be shown to the user verbatim; none of them is fatal.

use thiserror::Error;

/// Errors produced while parsing a `set` command or one of its tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Missing `set` verb or missing duration token.
    #[error("usage: set <duration>... [x<rounds>] [auto|manual]  (e.g. set 90 or set 1:30)")]
    Usage,

    /// Minute component is not an integer.
    #[error("invalid minutes: {0}")]
    InvalidMinutes(String),

    /// Minute component is outside `0..=59`.
    #[error("minutes out of range: {0}")]
    MinutesOutOfRange(String),

    /// Second component is not an integer.
    #[error("invalid seconds: {0}")]
    InvalidSeconds(String),

    /// Second component is outside `0..=59`.
    #[error("seconds out of range: {0}")]
    SecondsOutOfRange(String),

    /// Bare-seconds token is not a non-negative integer.
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Token has more than one colon.
    #[error("invalid duration syntax: {0}")]
    Syntax(String),

    /// Rounds token is malformed, repeated or not in last position.
    #[error("invalid rounds: {0}")]
    InvalidRounds(String),
}

/// Errors produced when constructing a timer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// An interval timer needs at least one interval.
    #[error("interval timer needs at least one interval")]
    NoIntervals,
}

/// Errors produced while interpreting a command string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Verb is not part of the command grammar.
    #[error("unknown command: {verb}")]
    Unknown {
        /// The unrecognized verb.
        verb: String,
    },

    /// Malformed `set` arguments.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Parsed workout could not be turned into a timer.
    #[error(transparent)]
    Timer(#[from] TimerError),

    /// Argument of a non-`set` command is malformed.
    #[error("{command}: invalid argument: {value}")]
    InvalidArgument {
        /// Command verb.
        command: &'static str,
        /// Offending argument.
        value: String,
    },
}
