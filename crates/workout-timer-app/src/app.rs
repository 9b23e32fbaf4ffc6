//! Application state machine and command dispatcher.
//!
//! This module defines the [`App`] state machine, which owns the active
//! [`Program`] and everything the frontend draws around it, completely
//! decoupled from the terminal and the clock.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Routes keys to the prompt editor or through the keybinding table.
//! - Dispatches parsed commands against the active program, installing a
//!   fresh one for `set` and `stopwatch`.
//! - Forwards ticks and raises a bell on entering low time and on
//!   completion.
//! - Stores terminal dimensions to handle resize events.

use std::time::Duration;

use workout_timer_core::{Command, CommandError, Program, ProgramState, Stopwatch, command};

use crate::{AppAction, AppEvent, AppState, Config, KeyInput, PromptState};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a terminal.
#[derive(Debug)]
pub struct App {
    /// Resolved user configuration.
    config: Config,
    /// Active program. `None` until the first `set` or `stopwatch`.
    program: Option<Box<dyn Program>>,
    /// Command prompt.
    prompt: PromptState,
    /// Whether the help overlay is shown.
    show_help: bool,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Low-time state at the last alert check, for edge-triggered bells.
    was_low: bool,
    /// Done state at the last alert check.
    was_done: bool,
}

impl App {
    /// Create an App with no program installed.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            program: None,
            prompt: PromptState::new(),
            show_help: false,
            terminal_size: (80, 24),
            was_low: false,
            was_done: false,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick(elapsed) => self.with_program(|program| program.tick(elapsed)),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
        }
    }

    /// Parse and execute a command string.
    ///
    /// Blank input is a no-op. Lifecycle commands without a program are
    /// silently ignored.
    ///
    /// # Errors
    ///
    /// - `CommandError::Unknown` for an unrecognized verb
    /// - `CommandError::Parse` / `CommandError::InvalidArgument` for
    ///   malformed arguments
    ///
    /// The active program is untouched on error.
    pub fn execute(&mut self, input: &str) -> Result<Vec<AppAction>, CommandError> {
        let Some(command) = command::parse(input.trim())? else {
            return Ok(vec![]);
        };
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<AppAction>, CommandError> {
        if command.needs_program() && self.program.is_none() {
            tracing::debug!(?command, "ignored: no program configured");
            return Ok(vec![]);
        }

        let actions = match command {
            Command::Quit => vec![AppAction::Quit],
            Command::Prompt => {
                self.prompt.open();
                vec![AppAction::Render]
            },
            Command::Help => {
                self.show_help = !self.show_help;
                vec![AppAction::Render]
            },
            Command::Start => self.with_program(|program| program.start()),
            Command::Next => self.with_program(|program| program.next()),
            Command::TogglePause => self.with_program(|program| program.toggle_pause()),
            Command::Back => self.with_program(|program| program.back()),
            Command::Add(step) => {
                let amount = step.unwrap_or(self.config.time_increment);
                self.with_program(|program| program.add_time(amount))
            },
            Command::Subtract(step) => {
                let amount = step.unwrap_or(self.config.time_increment);
                self.with_program(|program| program.subtract_time(amount))
            },
            Command::Set(workout) => {
                let round_length = workout.round_length();
                let timer = workout.into_timer(self.config.default_mode)?;
                tracing::info!(
                    intervals = timer.intervals().len(),
                    rounds = timer.rounds(),
                    round_length = ?round_length,
                    mode = %timer.mode(),
                    "workout configured"
                );
                self.install(Box::new(timer))
            },
            Command::Stopwatch => {
                tracing::info!("stopwatch configured");
                self.install(Box::new(Stopwatch::new()))
            },
        };

        Ok(actions)
    }

    /// Replace the active program wholesale.
    fn install(&mut self, program: Box<dyn Program>) -> Vec<AppAction> {
        self.program = Some(program);
        self.prompt.close();
        self.was_low = false;
        self.was_done = false;
        vec![AppAction::Render]
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        if key == KeyInput::Ctrl('c') {
            return vec![AppAction::Quit];
        }

        if self.prompt.is_open() {
            return self.handle_prompt_key(key);
        }

        if key == KeyInput::Esc {
            if self.show_help {
                self.show_help = false;
                return vec![AppAction::Render];
            }
            return vec![];
        }

        let name = key.name();
        let Some(command) = self.config.command_for(&name).map(str::to_owned) else {
            return vec![];
        };

        match self.execute(&command) {
            Ok(actions) => actions,
            Err(err) => {
                tracing::debug!(key = %name, %command, error = %err, "keybinding command failed");
                vec![]
            },
        }
    }

    fn handle_prompt_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Esc => {
                self.prompt.close();
                vec![AppAction::Render]
            },
            KeyInput::Enter => {
                let input = self.prompt.buffer().to_string();
                match self.execute(&input) {
                    Ok(mut actions) => {
                        self.prompt.close();
                        if !actions.contains(&AppAction::Render) {
                            actions.push(AppAction::Render);
                        }
                        actions
                    },
                    Err(err) => {
                        self.prompt.set_error(err.to_string());
                        vec![AppAction::Render]
                    },
                }
            },
            other => {
                if self.prompt.edit(other) {
                    vec![AppAction::Render]
                } else {
                    vec![]
                }
            },
        }
    }

    /// Apply `f` to the active program and collect render and alert
    /// actions. No-op without a program.
    fn with_program(&mut self, f: impl FnOnce(&mut dyn Program)) -> Vec<AppAction> {
        let Some(program) = self.program.as_deref_mut() else {
            return vec![];
        };
        f(program);

        let mut actions = vec![AppAction::Render];
        if self.check_alerts() {
            actions.push(AppAction::Bell);
        }
        actions
    }

    /// Update the alert latches. Returns `true` if a bell is due.
    fn check_alerts(&mut self) -> bool {
        let Some(program) = self.program.as_deref() else {
            return false;
        };

        let low = program.state() == ProgramState::Running
            && program.is_low_time(self.config.low_time_warning);
        let done = program.state() == ProgramState::Done;

        let entered_low = low && !self.was_low;
        let finished = done && !self.was_done;
        self.was_low = low;
        self.was_done = done;

        if finished {
            tracing::info!("workout complete");
        }

        self.config.beep && (entered_low || finished)
    }

    /// Active program, if any.
    pub fn program(&self) -> Option<&dyn Program> {
        self.program.as_deref()
    }

    /// Status-line state.
    pub fn state(&self) -> AppState {
        AppState::from(self.program.as_deref().map(|p| p.state()))
    }

    /// True if the active program is inside the low-time window.
    pub fn is_low_time(&self) -> bool {
        self.program.as_deref().is_some_and(|p| p.is_low_time(self.config.low_time_warning))
    }

    /// Duration the frontend should draw, if a program is installed.
    pub fn time_display(&self) -> Option<Duration> {
        self.program.as_deref().map(|p| p.time_display())
    }

    /// Command prompt state.
    pub fn prompt(&self) -> &PromptState {
        &self.prompt
    }

    /// Whether the help overlay is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Resolved configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
