//! Conversions between tailframe's Rust types and their NAPI shapes.

use crate::types::{
    ComponentOutput, FrameEntry, FrameFailureEntry, GenerateConfig, GenerationResult,
    GenerationStatsEntry,
};
use napi::{Error, Status};
use tailframe_core::{ExtractMode, FrameFailure, GenerateOptions, ParsedFrame, TailframeError};
use tailframe_react::{GeneratedComponent, GenerationOutput};

/// Maps a run-level error onto a JavaScript exception.
pub(crate) fn to_napi_error(err: TailframeError) -> Error {
    match err {
        TailframeError::InvalidDesign(_) => Error::new(Status::InvalidArg, err.to_string()),
        other => Error::from_reason(other.to_string()),
    }
}

pub(crate) fn parse_mode(mode: Option<&str>) -> napi::Result<ExtractMode> {
    match mode {
        Some(raw) => raw
            .parse()
            .map_err(|reason: String| Error::new(Status::InvalidArg, reason)),
        None => Ok(ExtractMode::default()),
    }
}

/// Builds core options from the JavaScript config, filling defaults.
pub(crate) fn to_options(config: Option<&GenerateConfig>) -> napi::Result<GenerateOptions> {
    let defaults = GenerateOptions::default();
    let Some(config) = config else {
        return Ok(defaults);
    };
    Ok(GenerateOptions {
        mode: parse_mode(config.mode.as_deref())?,
        unique_names: config.unique_names.unwrap_or(defaults.unique_names),
        max_depth: config
            .max_depth
            .map_or(defaults.max_depth, |depth| depth as usize),
    })
}

pub(crate) fn frame_entry(frame: &ParsedFrame<'_>) -> FrameEntry {
    FrameEntry {
        name: frame.name.to_string(),
        kind: frame.kind.as_str().to_string(),
        node_id: frame.node.id.clone(),
    }
}

pub(crate) fn component_output(component: GeneratedComponent) -> ComponentOutput {
    ComponentOutput {
        name: component.name,
        code: component.code,
        language: component.language,
    }
}

fn failure_entry(failure: FrameFailure) -> FrameFailureEntry {
    FrameFailureEntry {
        message: failure.issue.to_string(),
        frame: failure.frame,
        node_id: failure.node_id,
    }
}

pub(crate) fn generation_result(output: GenerationOutput) -> GenerationResult {
    GenerationResult {
        components: output
            .components
            .into_iter()
            .map(component_output)
            .collect(),
        failures: output.failures.into_iter().map(failure_entry).collect(),
        stats: GenerationStatsEntry {
            frames_found: output.stats.frames_found as u32,
            components_generated: output.stats.components_generated as u32,
        },
    }
}
