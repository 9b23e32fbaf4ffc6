//! Command grammar.
//!
//! Commands arrive as text, either typed at the prompt or looked up from the
//! keybinding table. The first whitespace-delimited token is the verb; verbs
//! are case-sensitive.
//!
//! | Verb                   | Command                  |
//! |------------------------|--------------------------|
//! | `quit`, `q`            | [`Command::Quit`]        |
//! | `prompt`               | [`Command::Prompt`]      |
//! | `help`                 | [`Command::Help`]        |
//! | `start`                | [`Command::Start`]       |
//! | `next`, `lap`          | [`Command::Next`]        |
//! | `pause`, `resume`      | [`Command::TogglePause`] |
//! | `back`                 | [`Command::Back`]        |
//! | `add [<d>]`            | [`Command::Add`]         |
//! | `subtract [<d>]`       | [`Command::Subtract`]    |
//! | `set <d>... [xN] [m]`  | [`Command::Set`]         |
//! | `stopwatch`, `sw`      | [`Command::Stopwatch`]   |

use std::time::Duration;

use crate::{
    error::CommandError,
    parser::{self, Workout},
};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Exit the application.
    Quit,
    /// Open the command prompt.
    Prompt,
    /// Toggle the help overlay.
    Help,
    /// Start a ready program.
    Start,
    /// Advance to the next interval, or record a stopwatch lap.
    Next,
    /// Pause or resume.
    TogglePause,
    /// Step back to the previous interval.
    Back,
    /// Add time to the current interval. `None` uses the configured step.
    Add(Option<Duration>),
    /// Remove time from the current interval. `None` uses the configured
    /// step.
    Subtract(Option<Duration>),
    /// Replace the program with a new interval timer.
    Set(Workout),
    /// Replace the program with a fresh stopwatch.
    Stopwatch,
}

impl Command {
    /// True if the command acts on an existing program and is a no-op
    /// without one.
    pub fn needs_program(&self) -> bool {
        matches!(
            self,
            Self::Start
                | Self::Next
                | Self::TogglePause
                | Self::Back
                | Self::Add(_)
                | Self::Subtract(_)
        )
    }
}

/// Parse a command string. Blank input yields `Ok(None)`.
///
/// # Errors
///
/// - `CommandError::Unknown` for an unrecognized verb
/// - `CommandError::Parse` for malformed `set` arguments
/// - `CommandError::InvalidArgument` for a malformed `add`/`subtract` step
pub fn parse(input: &str) -> Result<Option<Command>, CommandError> {
    let mut fields = input.split_whitespace();
    let Some(verb) = fields.next() else {
        return Ok(None);
    };

    let command = match verb {
        "quit" | "q" => Command::Quit,
        "prompt" => Command::Prompt,
        "help" => Command::Help,
        "start" => Command::Start,
        "next" | "lap" => Command::Next,
        "pause" | "resume" => Command::TogglePause,
        "back" => Command::Back,
        "add" => Command::Add(step("add", fields.next())?),
        "subtract" => Command::Subtract(step("subtract", fields.next())?),
        "set" => Command::Set(parser::parse_workout(fields)?),
        "stopwatch" | "sw" => Command::Stopwatch,
        other => return Err(CommandError::Unknown { verb: other.to_string() }),
    };

    Ok(Some(command))
}

fn step(command: &'static str, arg: Option<&str>) -> Result<Option<Duration>, CommandError> {
    arg.map(|raw| {
        parser::parse_duration(raw)
            .map_err(|_| CommandError::InvalidArgument { command, value: raw.to_string() })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;

    #[test]
    fn blank_input_is_no_command() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn verbs_and_aliases() {
        let cases = [
            ("quit", Command::Quit),
            ("q", Command::Quit),
            ("prompt", Command::Prompt),
            ("help", Command::Help),
            ("start", Command::Start),
            ("next", Command::Next),
            ("lap", Command::Next),
            ("pause", Command::TogglePause),
            ("resume", Command::TogglePause),
            ("back", Command::Back),
            ("stopwatch", Command::Stopwatch),
            ("sw", Command::Stopwatch),
        ];

        for (input, expected) in cases {
            assert_eq!(parse(input), Ok(Some(expected)), "input {input:?}");
        }
    }

    #[test]
    fn verbs_are_case_sensitive() {
        assert_eq!(parse("Quit"), Err(CommandError::Unknown { verb: "Quit".into() }));
    }

    #[test]
    fn unknown_verb_reported() {
        let err = parse("jump 10").unwrap_err();
        assert_eq!(err.to_string(), "unknown command: jump");
    }

    #[test]
    fn set_parses_workout() {
        let Ok(Some(Command::Set(workout))) = parse("set 0:40 0:20 x8") else {
            panic!("expected set command");
        };
        assert_eq!(workout.intervals.len(), 2);
        assert_eq!(workout.rounds, 8);
    }

    #[test]
    fn set_errors_propagate() {
        assert_eq!(
            parse("set 1:60"),
            Err(CommandError::Parse(ParseError::SecondsOutOfRange("60".into())))
        );
        assert_eq!(parse("set"), Err(CommandError::Parse(ParseError::Usage)));
    }

    #[test]
    fn add_and_subtract_steps() {
        assert_eq!(parse("add"), Ok(Some(Command::Add(None))));
        assert_eq!(parse("add 30"), Ok(Some(Command::Add(Some(Duration::from_secs(30))))));
        assert_eq!(
            parse("subtract 1:00"),
            Ok(Some(Command::Subtract(Some(Duration::from_secs(60)))))
        );
        assert_eq!(
            parse("add soon"),
            Err(CommandError::InvalidArgument { command: "add", value: "soon".into() })
        );
    }

    #[test]
    fn lifecycle_commands_need_program() {
        assert!(Command::Start.needs_program());
        assert!(Command::Add(None).needs_program());
        assert!(!Command::Stopwatch.needs_program());
        assert!(!Command::Quit.needs_program());
    }
}
