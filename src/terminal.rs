//! The terminal engine.
//!
//! Owns the output history and animation flags. The page only reads state
//! snapshots (or listens for them) and calls [`Terminal::execute`].
//! A command run is: clear history, type the command out one char per tick,
//! append the rendered section. Only one run may be in flight at a time.

use crate::config::TerminalConfig;
use crate::content::ContentStore;
use crate::error::{PortfolioError, Result};
use crate::reveal::Reveal;
use crate::shell::{self, CommandHistory, CommandRegistry};
use crate::timer::{CancelToken, Ticker};
use log::{debug, info, warn};
use serde::Serialize;
use std::cell::{Cell, RefCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    /// Plain text; the page must escape it.
    Raw,
    /// Trusted HTML produced by the formatters.
    MarkedUp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OutputEntry {
    pub kind: EntryKind,
    pub content: String,
}

impl OutputEntry {
    pub fn raw(content: impl Into<String>) -> Self {
        OutputEntry {
            kind: EntryKind::Raw,
            content: content.into(),
        }
    }

    pub fn marked_up(content: impl Into<String>) -> Self {
        OutputEntry {
            kind: EntryKind::MarkedUp,
            content: content.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationState {
    /// A command run is in flight.
    pub is_typing: bool,
    /// The command line itself is being typed out.
    pub is_typing_command: bool,
    /// Set by the first command and never cleared.
    pub has_interacted: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TerminalState {
    pub entries: Vec<OutputEntry>,
    pub animation: AnimationState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    Done,
    /// Torn down mid-animation; nothing further was written.
    Cancelled,
}

type Listener = Box<dyn Fn(&TerminalState)>;

pub struct Terminal<T: Ticker> {
    store: ContentStore,
    registry: CommandRegistry,
    config: TerminalConfig,
    ticker: T,
    cancel: CancelToken,
    state: RefCell<TerminalState>,
    typing_slot: Cell<Option<usize>>,
    in_flight: RefCell<Option<String>>,
    history: RefCell<CommandHistory>,
    listeners: RefCell<Vec<Listener>>,
}

/// Releases the in-flight slot however the run ends, including when the
/// caller drops the future half way.
struct InFlight<'a, T: Ticker> {
    term: &'a Terminal<T>,
}

impl<T: Ticker> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        self.term.in_flight.borrow_mut().take();
        self.term.typing_slot.set(None);
        if let Ok(mut state) = self.term.state.try_borrow_mut() {
            state.animation.is_typing = false;
            state.animation.is_typing_command = false;
        }
    }
}

impl<T: Ticker> Terminal<T> {
    pub fn new(store: ContentStore, config: TerminalConfig, ticker: T) -> Self {
        Terminal {
            store,
            registry: CommandRegistry::new(),
            config,
            ticker,
            cancel: CancelToken::new(),
            state: RefCell::new(TerminalState::default()),
            typing_slot: Cell::new(None),
            in_flight: RefCell::new(None),
            history: RefCell::new(CommandHistory::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn prompt(&self) -> String {
        shell::prompt(&self.config)
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn state(&self) -> TerminalState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.borrow().is_some()
    }

    /// Register a re-render hook, fired after every state change.
    pub fn subscribe(&self, listener: impl Fn(&TerminalState) + 'static) {
        self.listeners.borrow_mut().push(Box::new(listener));
    }

    pub fn complete(&self, partial: &str) -> Vec<&'static str> {
        self.registry.complete(partial)
    }

    pub fn recall_older(&self) -> Option<String> {
        self.history.borrow_mut().older().map(str::to_string)
    }

    pub fn recall_newer(&self) -> Option<String> {
        self.history.borrow_mut().newer().map(str::to_string)
    }

    /// Run one command to completion.
    ///
    /// Rejects with [`PortfolioError::Busy`] while another run is in flight
    /// and with [`PortfolioError::TornDown`] after [`Terminal::teardown`].
    pub async fn execute(&self, command: &str) -> Result<Completion> {
        if self.cancel.is_cancelled() {
            return Err(PortfolioError::TornDown);
        }
        let running = self.in_flight.borrow().clone();
        if let Some(running) = running {
            warn!("rejected {:?}: {:?} still running", command, running);
            return Err(PortfolioError::Busy { running });
        }
        *self.in_flight.borrow_mut() = Some(command.to_string());
        let _guard = InFlight { term: self };

        debug!("executing {:?}", command);
        self.history.borrow_mut().push(command);
        self.typing_slot.set(None);
        self.update(|s| {
            s.entries.clear();
            s.animation.has_interacted = true;
            s.animation.is_typing = true;
        });

        if self.type_command(command).await == Completion::Cancelled {
            debug!("{:?} cancelled during typing", command);
            return Ok(Completion::Cancelled);
        }

        let entry = match self.registry.lookup(command) {
            Some(cmd) => OutputEntry::marked_up(cmd.render(&self.store)),
            None => {
                debug!("unknown command {:?}", command);
                OutputEntry::marked_up(shell::not_found(command))
            }
        };
        self.update(|s| {
            s.entries.push(entry);
            s.animation.is_typing = false;
        });
        Ok(Completion::Done)
    }

    async fn type_command(&self, command: &str) -> Completion {
        let prompt = self.prompt();
        self.update(|s| s.animation.is_typing_command = true);
        for (i, prefix) in Reveal::new(command).enumerate() {
            if i > 0 {
                self.ticker.sleep(self.config.typing_tick_ms).await;
            }
            if self.cancel.is_cancelled() {
                return Completion::Cancelled;
            }
            let line = format!("{}{}", prompt, prefix);
            self.update(|s| self.set_typing_line(s, line));
        }
        self.update(|s| s.animation.is_typing_command = false);
        Completion::Done
    }

    fn set_typing_line(&self, state: &mut TerminalState, line: String) {
        match self.typing_slot.get() {
            Some(i) if i < state.entries.len() => state.entries[i].content = line,
            _ => {
                state.entries.push(OutputEntry::raw(line));
                self.typing_slot.set(Some(state.entries.len() - 1));
            }
        }
    }

    pub fn clear(&self) {
        self.typing_slot.set(None);
        self.update(|s| s.entries.clear());
    }

    /// Append plain text outside of a command run.
    pub fn print(&self, text: &str) {
        self.update(|s| s.entries.push(OutputEntry::raw(text)));
    }

    pub fn print_markup(&self, html: &str) {
        self.update(|s| s.entries.push(OutputEntry::marked_up(html)));
    }

    /// Stop every pending tick and go quiet. Idempotent.
    pub fn teardown(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        info!("terminal torn down");
        self.cancel.cancel();
        self.ticker.cancel_all();
        if let Ok(mut listeners) = self.listeners.try_borrow_mut() {
            listeners.clear();
        }
    }

    fn update(&self, f: impl FnOnce(&mut TerminalState)) {
        f(&mut self.state.borrow_mut());
        self.notify();
    }

    /// Listeners get a snapshot with no borrows held, so they may call back
    /// into the engine. Updates made from inside a listener are not
    /// re-broadcast to the listeners of the round in progress.
    fn notify(&self) {
        if self.cancel.is_cancelled() {
            return;
        }
        let snapshot = self.state.borrow().clone();
        let listeners = std::mem::take(&mut *self.listeners.borrow_mut());
        for listener in &listeners {
            listener(&snapshot);
        }
        if self.cancel.is_cancelled() {
            return;
        }
        let mut slot = self.listeners.borrow_mut();
        let added = std::mem::replace(&mut *slot, listeners);
        slot.extend(added);
    }
}
