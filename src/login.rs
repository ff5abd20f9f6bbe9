use crate::config::LoginConfig;
use crate::error::{PortfolioError, Result};
use crate::reveal::Reveal;
use crate::terminal::Completion;
use crate::timer::{CancelToken, Ticker};
use log::{debug, warn};
use serde::Serialize;
use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoginPhase {
    Waiting,
    Username,
    Password,
    Granted,
}

/// What the login panel shows at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginFrame {
    pub phase: LoginPhase,
    pub username: String,
    pub password_mask: String,
}

/// The fake login shown before the terminal: the username is typed out,
/// then a masked password, then control passes to the terminal.
pub struct LoginSequence<T: Ticker> {
    config: LoginConfig,
    ticker: T,
    cancel: CancelToken,
    running: Cell<bool>,
}

/// Clears the running flag when a run finishes or is dropped.
struct Running<'a>(&'a Cell<bool>);

impl Drop for Running<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<T: Ticker> LoginSequence<T> {
    pub fn new(config: LoginConfig, ticker: T, cancel: CancelToken) -> Self {
        LoginSequence {
            config,
            ticker,
            cancel,
            running: Cell::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Play the sequence. `on_granted` fires once, and only if the whole
    /// sequence ran without being torn down.
    ///
    /// A second call while one is still playing is rejected with
    /// [`PortfolioError::Busy`] and shows nothing.
    pub async fn run(
        &self,
        on_frame: impl FnMut(&LoginFrame),
        on_granted: impl FnOnce(),
    ) -> Result<Completion> {
        if self.running.replace(true) {
            warn!("login sequence already playing");
            return Err(PortfolioError::Busy {
                running: "login".to_string(),
            });
        }
        let _running = Running(&self.running);
        Ok(self.play(on_frame, on_granted).await)
    }

    async fn play(
        &self,
        mut on_frame: impl FnMut(&LoginFrame),
        on_granted: impl FnOnce(),
    ) -> Completion {
        let mut frame = LoginFrame {
            phase: LoginPhase::Waiting,
            username: String::new(),
            password_mask: String::new(),
        };
        if self.cancel.is_cancelled() {
            return Completion::Cancelled;
        }
        on_frame(&frame);

        if !self.pause().await {
            return Completion::Cancelled;
        }
        frame.phase = LoginPhase::Username;
        let typed = self
            .reveal(&self.config.username, |prefix| {
                frame.username = prefix.to_string();
                on_frame(&frame);
            })
            .await;
        if !typed || !self.pause().await {
            return Completion::Cancelled;
        }

        frame.phase = LoginPhase::Password;
        let mask = "*".repeat(self.config.password_len);
        let typed = self
            .reveal(&mask, |prefix| {
                frame.password_mask = prefix.to_string();
                on_frame(&frame);
            })
            .await;
        if !typed || !self.pause().await {
            return Completion::Cancelled;
        }

        frame.phase = LoginPhase::Granted;
        on_frame(&frame);
        debug!("login sequence complete for {:?}", self.config.username);
        on_granted();
        Completion::Done
    }

    async fn pause(&self) -> bool {
        self.ticker.sleep(self.config.pause_ms).await;
        !self.cancel.is_cancelled()
    }

    /// Returns false when torn down part way.
    async fn reveal(&self, target: &str, mut emit: impl FnMut(&str)) -> bool {
        for (i, prefix) in Reveal::new(target).enumerate() {
            if i > 0 {
                self.ticker.sleep(self.config.char_ms).await;
                if self.cancel.is_cancelled() {
                    return false;
                }
            }
            emit(prefix);
        }
        true
    }
}
