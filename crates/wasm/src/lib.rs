use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use tailframe_core::{
    DesignFile, DesignNode, ExtractMode, FrameFailure, GenerateOptions, TailframeError,
    extract_frames as extract_core_frames,
};
use tailframe_react::{FailureReporter, GeneratedComponent, GenerationStats, LogReporter};

// ============================================================================
// Result Types
// ============================================================================

/// A frame chosen by extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEntry {
    /// Frame label as it appears in the design.
    pub name: String,
    /// `"FRAME"` or `"COMPONENT"`.
    pub kind: &'static str,
    /// Identifier of the frame's root node.
    pub node_id: String,
}

/// A frame that was skipped during generation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureEntry {
    /// Label of the skipped frame.
    pub frame: String,
    /// Identifier of the skipped frame's root node.
    pub node_id: String,
    /// Human readable reason.
    pub message: String,
}

impl From<&FrameFailure> for FailureEntry {
    fn from(failure: &FrameFailure) -> Self {
        Self {
            frame: failure.frame.clone(),
            node_id: failure.node_id.clone(),
            message: failure.issue.to_string(),
        }
    }
}

/// Result of a whole-document run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    /// Components in frame order.
    pub components: Vec<GeneratedComponent>,
    /// Frames that were skipped.
    pub failures: Vec<FailureEntry>,
    /// Summary counts.
    pub stats: GenerationStats,
}

// ============================================================================
// Helpers
// ============================================================================

fn js_error(err: TailframeError) -> JsError {
    JsError::new(&err.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

fn parse_config(config: JsValue) -> Result<GenerateOptions, JsError> {
    if config.is_undefined() || config.is_null() {
        return Ok(GenerateOptions::default());
    }
    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
}

fn thrown_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "unknown error".to_string())
}

/// Forwards skipped frames to a JavaScript callback, keeping the first exception it throws.
struct CallbackReporter {
    callback: js_sys::Function,
    thrown: Option<JsValue>,
}

impl FailureReporter for CallbackReporter {
    fn report(&mut self, failure: &FrameFailure) {
        if self.thrown.is_some() {
            return;
        }
        let entry = match serde_wasm_bindgen::to_value(&FailureEntry::from(failure)) {
            Ok(entry) => entry,
            Err(e) => {
                self.thrown = Some(JsValue::from(e));
                return;
            }
        };
        if let Err(thrown) = self.callback.call1(&JsValue::NULL, &entry) {
            self.thrown = Some(thrown);
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Lists the frames a design file would generate components for.
///
/// `mode` is `"topLevel"` (default) or `"recursive"`.
#[wasm_bindgen(js_name = extractFrames)]
pub fn extract_frames(design_json: &str, mode: Option<String>) -> Result<JsValue, JsError> {
    let mode = match mode {
        Some(raw) => raw.parse::<ExtractMode>().map_err(|e| JsError::new(&e))?,
        None => ExtractMode::default(),
    };
    let file = DesignFile::from_json(design_json).map_err(js_error)?;
    let frames = extract_core_frames(file.root().map_err(js_error)?, mode).map_err(js_error)?;
    let entries: Vec<FrameEntry> = frames
        .iter()
        .map(|frame| FrameEntry {
            name: frame.name.to_string(),
            kind: frame.kind.as_str(),
            node_id: frame.node.id.clone(),
        })
        .collect();
    to_js(&entries)
}

/// Generates one component module from a single frame node.
#[wasm_bindgen(js_name = generateComponent)]
pub fn generate_component(node_json: &str) -> Result<JsValue, JsError> {
    let node = DesignNode::from_json(node_json).map_err(js_error)?;
    to_js(&tailframe_react::generate_component(&node))
}

/// Returns the utility classes for a single node.
#[wasm_bindgen(js_name = classifyNode)]
pub fn classify_node(node_json: &str) -> Result<Vec<String>, JsError> {
    let node = DesignNode::from_json(node_json).map_err(js_error)?;
    Ok(tailframe_react::classify(&node))
}

/// Turns a frame label into a valid component identifier.
#[wasm_bindgen(js_name = sanitizeComponentName)]
pub fn sanitize_component_name(name: &str) -> String {
    tailframe_core::sanitize_component_name(name)
}

/// Runs extraction, validation and generation over a whole design file.
///
/// `config` accepts `{ mode, uniqueNames, maxDepth }`. When `on_failure` is
/// given it is called with `{ frame, nodeId, message }` for every skipped
/// frame; otherwise skipped frames only appear in the result.
#[wasm_bindgen]
pub fn generate(
    design_json: &str,
    config: JsValue,
    on_failure: Option<js_sys::Function>,
) -> Result<JsValue, JsError> {
    let options = parse_config(config)?;
    let file = DesignFile::from_json(design_json).map_err(js_error)?;
    let root = file.root().map_err(js_error)?;

    let output = match on_failure {
        Some(callback) => {
            let mut reporter = CallbackReporter {
                callback,
                thrown: None,
            };
            let output = tailframe_react::generate_from_document(root, &options, &mut reporter);
            if let Some(thrown) = reporter.thrown {
                return Err(JsError::new(&format!(
                    "Failure callback threw: {}",
                    thrown_message(&thrown)
                )));
            }
            output
        }
        None => tailframe_react::generate_from_document(root, &options, &mut LogReporter),
    }
    .map_err(js_error)?;

    to_js(&GenerateResult {
        failures: output.failures.iter().map(FailureEntry::from).collect(),
        components: output.components,
        stats: output.stats,
    })
}
