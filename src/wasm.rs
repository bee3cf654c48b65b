use crate::errors::BuildError;
use crate::log::init_logger;
use crate::presets;
use crate::session::{ReportView, Session, SessionConfig};
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "B003", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<BuildError> for WasmError {
    fn from(e: BuildError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(|s| s.to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn js_error(e: BuildError) -> JsValue {
    WasmError::from(e).into()
}

fn strings_from(value: JsValue, what: &str) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("{what} must be string[]: {e}"),
            description: "Invalid argument format".to_string(),
            details: format!("The {what} parameter must be a JavaScript array of strings."),
            help: Some("Ensure you're passing a valid string array, e.g., ['RESPETO', 'LEALTAD']".to_string()),
        }
        .into()
    })
}

/// Initialize panic reporting and logging.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// A puzzle session driven from JavaScript.
#[wasm_bindgen]
pub struct WasmSession {
    inner: Session,
}

#[wasm_bindgen]
impl WasmSession {
    /// JS entry: (rows: string[], words: string[], secret: string | undefined)
    #[wasm_bindgen(constructor)]
    pub fn new(
        rows: JsValue,
        words: JsValue,
        secret: Option<String>,
    ) -> Result<WasmSession, JsValue> {
        let rows = strings_from(rows, "rows")?;
        let words = strings_from(words, "words")?;
        let config = SessionConfig { secret_message: secret, ..SessionConfig::default() };
        let inner = Session::new(rows.as_slice(), words.as_slice(), config).map_err(js_error)?;
        Ok(WasmSession { inner })
    }

    /// The built-in 12x12 puzzle.
    #[wasm_bindgen(js_name = fromDefaultPreset)]
    pub fn from_default_preset() -> Result<WasmSession, JsValue> {
        let inner = presets::VALUES_12.session().map_err(js_error)?;
        Ok(WasmSession { inner })
    }

    /// Replace the grid with pasted text (one row per line), keeping the words.
    #[wasm_bindgen(js_name = loadPreset)]
    pub fn load_preset(&mut self, text: &str) -> Result<(), JsValue> {
        self.inner.load_preset(text).map_err(js_error)
    }

    pub fn restart(&mut self) {
        self.inner.restart();
    }

    pub fn size(&self) -> usize {
        self.inner.grid().size()
    }

    #[wasm_bindgen(js_name = letterAt)]
    pub fn letter_at(&self, idx: usize) -> Option<String> {
        self.inner.grid().letter_at(idx).map(String::from)
    }

    /// Current grid text, one row per line.
    #[wasm_bindgen(js_name = presetText)]
    pub fn preset_text(&self) -> String {
        self.inner.grid().rows().collect::<Vec<_>>().join("\n")
    }

    #[wasm_bindgen(js_name = toggleCell)]
    pub fn toggle_cell(&mut self, idx: usize) -> Result<bool, JsValue> {
        self.inner.toggle_cell(idx).map_err(js_error)
    }

    #[wasm_bindgen(js_name = clearSelection)]
    pub fn clear_selection(&mut self) {
        self.inner.clear_selection();
    }

    #[wasm_bindgen(js_name = isCellFound)]
    pub fn is_cell_found(&self, idx: usize) -> bool {
        self.inner.is_cell_found(idx)
    }

    /// Returns `{ outcome: { kind, word?, path? }, message, pathIndices, progress, completed, secretMessage? }`.
    pub fn validate(&mut self) -> Result<JsValue, JsValue> {
        let report = self.inner.validate();
        let view = ReportView::new(report, self.inner.grid());
        serde_wasm_bindgen::to_value(&view).map_err(|e| {
            WasmError {
                code: "WASM002".to_string(),
                message: format!("serialization failed: {e}"),
                description: "Failed to serialize result".to_string(),
                details: "The validation result could not be converted to JavaScript format.".to_string(),
                help: Some("This is an internal error. Please report this issue.".to_string()),
            }
            .into()
        })
    }

    /// `[found, total]`
    pub fn progress(&self) -> Vec<usize> {
        let progress = self.inner.progress();
        vec![progress.found, progress.total]
    }

    /// Display forms of the found words, in discovery order.
    #[wasm_bindgen(js_name = foundWords)]
    pub fn found_words(&self) -> Vec<String> {
        self.inner.found_words().map(|w| w.display.clone()).collect()
    }
}
