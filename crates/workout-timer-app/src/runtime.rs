//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: timer state machine and dispatcher
//! - [`Driver`]: platform-specific I/O and clock
//!
//! Every cycle delivers at most one input event and then exactly one tick
//! carrying the time measured since the previous tick, so programs advance
//! by wall-clock time regardless of how often events arrive.

use std::time::Duration;

use crate::{App, AppAction, AppEvent, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D: Driver> {
    driver: D,
    app: App,
    last_tick: Option<D::Instant>,
}

impl<D: Driver> Runtime<D> {
    /// Create a new runtime with the given driver and app.
    pub fn new(driver: D, app: App) -> Self {
        Self { driver, app, last_tick: None }
    }

    /// Run the main event loop until the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error. The driver is
    /// stopped either way.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let result = self.event_loop().await;
        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;
        self.last_tick = Some(self.driver.now());

        loop {
            let should_quit = self.process_cycle().await?;
            if should_quit {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Process one cycle of the event loop.
    ///
    /// Returns `true` if the application should quit.
    async fn process_cycle(&mut self) -> Result<bool, D::Error> {
        if let Some(event) = self.driver.poll_event().await? {
            let actions = self.app.handle(event);
            if self.process_actions(actions)? {
                return Ok(true);
            }
        }

        let now = self.driver.now();
        let elapsed = self.last_tick.map_or(Duration::ZERO, |last| now - last);
        self.last_tick = Some(now);

        let actions = self.app.handle(AppEvent::Tick(elapsed));
        self.process_actions(actions)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Bell => self.driver.bell()?,
                AppAction::Quit => return Ok(true),
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the App
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }
}
