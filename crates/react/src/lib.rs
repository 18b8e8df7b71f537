#![deny(missing_docs)]
//! Tailframe React engine: utility-class classification, JSX rendering, and codegen.

/// Design node to utility-class mapping.
pub mod classify;
/// Component module generation.
pub mod codegen;
/// Extraction-to-components orchestration.
pub mod pipeline;
/// JSX rendering of design subtrees.
pub mod renderer;

pub use classify::{class_name, classify};
pub use codegen::{GeneratedComponent, LANGUAGE, generate_component, generate_components};
pub use pipeline::{
    FailureReporter, GenerationOutput, GenerationStats, LogReporter, generate_from_document,
    generate_from_file, generate_from_json,
};
pub use renderer::{escape_jsx_text, render_node};
