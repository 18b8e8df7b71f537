#![deny(missing_docs)]
//! Node.js bindings that surface tailframe's Rust implementation.

use napi::bindgen_prelude::*;
use napi_derive::napi;
use tailframe_core::{
    DesignFile, DesignNode, GenerateOptions, extract_frames as extract_core_frames,
};
use tailframe_react::{LogReporter, classify, generate_from_file};

/// Batch processing types.
pub mod batch;
/// Conversions between core and NAPI types.
mod convert;
/// NAPI-exposed data structures.
pub mod types;

pub use batch::*;
use convert::{component_output, frame_entry, generation_result, parse_mode, to_napi_error, to_options};
pub use types::*;

fn parse_node(node_json: &str) -> napi::Result<DesignNode> {
    DesignNode::from_json(node_json).map_err(to_napi_error)
}

fn generate_result(source: &str, options: &GenerateOptions) -> napi::Result<GenerationResult> {
    let file = DesignFile::from_json(source).map_err(to_napi_error)?;
    let output = generate_from_file(&file, options, &mut LogReporter).map_err(to_napi_error)?;
    Ok(generation_result(output))
}

/// Runs one batch input, turning a run-level error into an entry.
fn batch_entry(input: BatchInput, options: &GenerateOptions) -> BatchResult {
    match generate_result(&input.source, options) {
        Ok(result) => BatchResult {
            id: input.id,
            result: Some(result),
            error: None,
        },
        Err(e) => BatchResult {
            id: input.id,
            result: None,
            error: Some(e.reason.clone()),
        },
    }
}

/// Lists the frames a design file would generate components for.
///
/// `mode` is `"topLevel"` (default) or `"recursive"`.
#[napi(js_name = "extractFrames")]
pub fn extract_frames(design_json: String, mode: Option<String>) -> napi::Result<Vec<FrameEntry>> {
    let mode = parse_mode(mode.as_deref())?;
    let file = DesignFile::from_json(&design_json).map_err(to_napi_error)?;
    let frames = extract_core_frames(file.root().map_err(to_napi_error)?, mode)
        .map_err(to_napi_error)?;
    Ok(frames.iter().map(frame_entry).collect())
}

/// Generates one component module from a single frame node.
#[napi(js_name = "generateComponent")]
pub fn generate_component(node_json: String) -> napi::Result<ComponentOutput> {
    let node = parse_node(&node_json)?;
    Ok(component_output(tailframe_react::generate_component(&node)))
}

/// Returns the utility classes for a single node, without its children.
#[napi(js_name = "classifyNode")]
pub fn classify_node(node_json: String) -> napi::Result<Vec<String>> {
    Ok(classify(&parse_node(&node_json)?))
}

/// Turns a frame label into a valid component identifier.
#[napi(js_name = "sanitizeComponentName")]
pub fn sanitize_component_name(name: String) -> String {
    tailframe_core::sanitize_component_name(&name)
}

/// Runs extraction, validation and generation over a whole design file.
///
/// Frames that fail validation are skipped and listed in `failures`; the
/// call itself only throws when nothing at all could be generated.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { generateFromDocument } = require('tailframe-napi');
///
/// const result = generateFromDocument(JSON.stringify(file), { uniqueNames: true });
/// for (const component of result.components) {
///   fs.writeFileSync(`${component.name}.tsx`, component.code);
/// }
/// ```
#[napi(js_name = "generateFromDocument")]
pub fn generate_from_document(
    design_json: String,
    config: Option<GenerateConfig>,
) -> napi::Result<GenerationResult> {
    generate_result(&design_json, &to_options(config.as_ref())?)
}

/// Generates components for many design files in parallel using Rayon.
///
/// Results come back in input order. With `continueOnError` (the default)
/// every input is processed and failures are recorded on their own entry.
/// Without it inputs run one at a time and the batch stops after the first
/// failing file, so later inputs get no entry. An invalid `config` fails the
/// whole call before any file is read.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const { generateBatch } = require('tailframe-napi');
///
/// const inputs = [
///   { id: 'marketing', source: marketingJson },
///   { id: 'dashboard', source: dashboardJson },
/// ];
///
/// const result = generateBatch(inputs, { continueOnError: true });
/// console.log(`Processed ${result.stats.total} files in ${result.stats.processingTimeMs}ms`);
/// ```
#[napi(js_name = "generateBatch")]
pub fn generate_batch(
    inputs: Vec<BatchInput>,
    options: Option<BatchOptions>,
) -> napi::Result<BatchProcessingResult> {
    use rayon::prelude::*;
    use std::time::Instant;

    let start = Instant::now();
    let opts = options.unwrap_or_default();
    let generate_options = to_options(opts.config.as_ref())?;
    let total = inputs.len() as u32;

    let results: Vec<BatchResult> = if opts.continue_on_error.unwrap_or(true) {
        let run = || -> Vec<BatchResult> {
            inputs
                .into_par_iter()
                .map(|input| batch_entry(input, &generate_options))
                .collect()
        };
        let pool = opts.max_threads.and_then(|max_threads| {
            rayon::ThreadPoolBuilder::new()
                .num_threads(max_threads as usize)
                .build()
                .ok()
        });
        match pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    } else {
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let entry = batch_entry(input, &generate_options);
            let failed = entry.error.is_some();
            results.push(entry);
            if failed {
                break;
            }
        }
        results
    };

    let failed = results.iter().filter(|entry| entry.error.is_some()).count() as u32;
    Ok(BatchProcessingResult {
        stats: BatchStats {
            total,
            succeeded: results.len() as u32 - failed,
            failed,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
        results,
    })
}
