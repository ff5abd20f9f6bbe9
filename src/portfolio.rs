use crate::{
    config::TerminalConfig,
    content::ContentStore,
    login::LoginSequence,
    shell::MENU,
    terminal::{Completion, Terminal},
    timer::BrowserTicker,
};
use js_sys::{Function, Promise};
use log::info;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// The object the page holds: terminal engine plus login animation, both
/// on one browser ticker so a single teardown stops every timer.
#[wasm_bindgen]
pub struct Portfolio {
    terminal: Rc<Terminal<BrowserTicker>>,
    login: Rc<LoginSequence<BrowserTicker>>,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        self.terminal.teardown();
    }
}

impl Portfolio {
    fn build(store: ContentStore, config: TerminalConfig) -> Portfolio {
        let ticker = BrowserTicker::new();
        let login_config = config.login.clone();
        let terminal = Terminal::new(store, config, ticker.clone());
        let login = LoginSequence::new(login_config, ticker, terminal.cancel_token());
        info!("portfolio terminal ready");
        Portfolio {
            terminal: Rc::new(terminal),
            login: Rc::new(login),
        }
    }
}

#[wasm_bindgen]
impl Portfolio {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Portfolio {
        Self::build(ContentStore::embedded(), TerminalConfig::default())
    }

    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<Portfolio, JsValue> {
        let config =
            TerminalConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(ContentStore::embedded(), config))
    }

    #[wasm_bindgen]
    pub fn with_content(content_json: &str, config_json: &str) -> Result<Portfolio, JsValue> {
        let store =
            ContentStore::from_json(content_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let config =
            TerminalConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::build(store, config))
    }

    /// Resolves `true` when the command finished, `false` when torn down
    /// mid-animation; rejects while another command is running.
    #[wasm_bindgen]
    pub fn execute(&self, command: String) -> Promise {
        let terminal = Rc::clone(&self.terminal);
        future_to_promise(async move {
            match terminal.execute(&command).await {
                Ok(Completion::Done) => Ok(JsValue::TRUE),
                Ok(Completion::Cancelled) => Ok(JsValue::FALSE),
                Err(e) => Err(JsValue::from_str(&e.to_string())),
            }
        })
    }

    #[wasm_bindgen]
    pub fn clear(&self) {
        self.terminal.clear();
    }

    #[wasm_bindgen]
    pub fn print(&self, text: &str) {
        self.terminal.print(text);
    }

    #[wasm_bindgen]
    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.terminal.state()).unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn prompt(&self) -> String {
        self.terminal.prompt()
    }

    #[wasm_bindgen]
    pub fn is_busy(&self) -> bool {
        self.terminal.is_busy()
    }

    /// `callback(stateJson)` after every change.
    #[wasm_bindgen]
    pub fn on_change(&self, callback: Function) {
        self.terminal.subscribe(move |state| {
            if let Ok(json) = serde_json::to_string(state) {
                let _ = callback.call1(&JsValue::NULL, &JsValue::from_str(&json));
            }
        });
    }

    #[wasm_bindgen]
    pub fn complete(&self, partial: &str) -> Vec<JsValue> {
        self.terminal
            .complete(partial)
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    }

    #[wasm_bindgen]
    pub fn menu_json() -> String {
        render_menu_json()
    }

    #[wasm_bindgen]
    pub fn history_prev(&self) -> Option<String> {
        self.terminal.recall_older()
    }

    #[wasm_bindgen]
    pub fn history_next(&self) -> Option<String> {
        self.terminal.recall_newer()
    }

    /// Play the login animation: `on_frame(frameJson)` per step, then
    /// `on_done()` unless torn down first. Rejects while already playing.
    #[wasm_bindgen]
    pub fn start_login(&self, on_frame: Function, on_done: Function) -> Promise {
        let login = Rc::clone(&self.login);
        future_to_promise(async move {
            let done = login
                .run(
                    |frame| {
                        if let Ok(json) = serde_json::to_string(frame) {
                            let _ = on_frame.call1(&JsValue::NULL, &JsValue::from_str(&json));
                        }
                    },
                    || {
                        let _ = on_done.call0(&JsValue::NULL);
                    },
                )
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            Ok(JsValue::from_bool(done == Completion::Done))
        })
    }

    /// Stop every animation and timer; the object is inert afterwards.
    #[wasm_bindgen]
    pub fn teardown(&self) {
        self.terminal.teardown();
    }
}

fn render_menu_json() -> String {
    let items: Vec<serde_json::Value> = MENU
        .iter()
        .map(|(label, cmd)| serde_json::json!({ "label": label, "command": cmd.trigger() }))
        .collect();
    serde_json::Value::Array(items).to_string()
}
