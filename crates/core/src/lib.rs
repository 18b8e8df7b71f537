#![deny(missing_docs)]
//! Tailframe core: design tree model, frame extraction, naming, and validation.

/// Core error and failure types.
pub mod error;
/// Frame extraction from a document tree.
pub mod extract;
/// Component name sanitizing.
pub mod naming;
/// Design tree data model.
pub mod node;
/// Generation run options.
pub mod options;
/// Per-frame validation.
pub mod validate;

pub use error::{FrameFailure, FrameIssue, TailframeError};
pub use extract::{
    ExtractMode, FrameKind, ParsedFrame, extract_all_frames, extract_frames,
    extract_top_level_frames,
};
pub use naming::{ComponentNamer, DIGIT_PREFIX, sanitize_component_name};
pub use node::{
    AutoLayout, AxisSizing, BoundingBox, Color, CounterAxisAlign, DesignFile, DesignNode, Effect,
    LayoutMode, NodeType, Paint, PrimaryAxisAlign, TextAlign, TextStyle, Vector, rgba_to_hex,
};
pub use options::{DEFAULT_MAX_DEPTH, GenerateOptions};
pub use validate::validate_frame;
