//! NAPI-exposed data structures.

use napi_derive::napi;

/// Options accepted by `generateFromDocument` and `generateBatch`.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// `"topLevel"` (default) or `"recursive"`.
    pub mode: Option<String>,
    /// Suffixes repeated component names (`Card`, `Card2`, ...). Defaults to false.
    pub unique_names: Option<bool>,
    /// Deepest frame subtree that is still generated. Defaults to 256.
    pub max_depth: Option<u32>,
}

/// A frame chosen by extraction.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FrameEntry {
    /// Frame label as it appears in the design.
    pub name: String,
    /// `"FRAME"` or `"COMPONENT"`.
    pub kind: String,
    /// Identifier of the frame's root node.
    pub node_id: String,
}

/// A generated component module.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct ComponentOutput {
    /// Exported component name.
    pub name: String,
    /// Complete module source.
    pub code: String,
    /// Source language tag, always `"tsx"`.
    pub language: String,
}

/// A frame that was skipped during generation.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct FrameFailureEntry {
    /// Label of the skipped frame.
    pub frame: String,
    /// Identifier of the skipped frame's root node.
    pub node_id: String,
    /// Human readable reason.
    pub message: String,
}

/// Counts for a generation run.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct GenerationStatsEntry {
    /// Frames returned by extraction.
    pub frames_found: u32,
    /// Components actually produced.
    pub components_generated: u32,
}

/// Result of `generateFromDocument`.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// Components in frame order.
    pub components: Vec<ComponentOutput>,
    /// Frames that were skipped.
    pub failures: Vec<FrameFailureEntry>,
    /// Summary counts.
    pub stats: GenerationStatsEntry,
}
