//! Whole-document generation: extract, validate, and emit every frame.
//!
//! A run fails as a whole only when the document has no root, no frame
//! qualifies, or no frame could be generated. Anything wrong with a single
//! frame is reported through a [`FailureReporter`] and that frame is skipped.

use crate::codegen::{GeneratedComponent, generate_named_component};
use serde::Serialize;
use tailframe_core::{
    ComponentNamer, DesignFile, DesignNode, FrameFailure, GenerateOptions, TailframeError,
    extract_frames, sanitize_component_name, validate_frame,
};

/// Receives frames that were skipped during a run.
pub trait FailureReporter {
    /// Called once per skipped frame, in frame order.
    fn report(&mut self, failure: &FrameFailure);
}

impl<F: FnMut(&FrameFailure)> FailureReporter for F {
    fn report(&mut self, failure: &FrameFailure) {
        self(failure)
    }
}

/// Reports failures through the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl FailureReporter for LogReporter {
    fn report(&mut self, failure: &FrameFailure) {
        log::warn!("Failed to generate component for {}", failure);
    }
}

/// Counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    /// Frames returned by extraction.
    pub frames_found: usize,
    /// Components actually produced.
    pub components_generated: usize,
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutput {
    /// Components in frame order.
    pub components: Vec<GeneratedComponent>,
    /// Frames that were skipped.
    pub failures: Vec<FrameFailure>,
    /// Summary counts.
    pub stats: GenerationStats,
}

/// Runs the full pipeline over a document root.
pub fn generate_from_document(
    root: &DesignNode,
    options: &GenerateOptions,
    reporter: &mut dyn FailureReporter,
) -> Result<GenerationOutput, TailframeError> {
    let frames = extract_frames(root, options.mode)?;
    let mut namer = options.unique_names.then(ComponentNamer::new);
    let mut components = Vec::with_capacity(frames.len());
    let mut failures = Vec::new();

    for frame in &frames {
        if let Err(issue) = validate_frame(frame.node, options.max_depth) {
            let failure = FrameFailure::new(frame.name, &frame.node.id, issue);
            reporter.report(&failure);
            failures.push(failure);
            continue;
        }

        let name = match namer.as_mut() {
            Some(namer) => namer.next_name(frame.name),
            None => sanitize_component_name(frame.name),
        };
        components.push(generate_named_component(frame.node, name));
    }

    if components.is_empty() {
        return Err(TailframeError::NoComponents {
            failed: failures.len(),
        });
    }

    log::debug!(
        "generated {}/{} components from '{}'",
        components.len(),
        frames.len(),
        root.name
    );

    Ok(GenerationOutput {
        stats: GenerationStats {
            frames_found: frames.len(),
            components_generated: components.len(),
        },
        components,
        failures,
    })
}

/// Runs the pipeline over a parsed design file.
pub fn generate_from_file(
    file: &DesignFile,
    options: &GenerateOptions,
    reporter: &mut dyn FailureReporter,
) -> Result<GenerationOutput, TailframeError> {
    generate_from_document(file.root()?, options, reporter)
}

/// Parses a design file response and runs the pipeline, logging skipped frames.
pub fn generate_from_json(
    json: &str,
    options: &GenerateOptions,
) -> Result<GenerationOutput, TailframeError> {
    let file = DesignFile::from_json(json)?;
    generate_from_file(&file, options, &mut LogReporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tailframe_core::{ExtractMode, FrameIssue};

    fn document(value: serde_json::Value) -> DesignNode {
        serde_json::from_value(value).unwrap()
    }

    fn two_page_doc() -> DesignNode {
        document(json!({
            "name": "Shop",
            "type": "DOCUMENT",
            "children": [
                { "type": "CANVAS", "name": "Web", "children": [
                    { "id": "1:1", "name": "Checkout", "type": "FRAME", "children": [
                        { "id": "1:2", "name": "Summary", "type": "FRAME" }
                    ] }
                ] },
                { "type": "CANVAS", "name": "Mobile", "children": [
                    { "id": "2:1", "name": "checkout", "type": "FRAME" }
                ] }
            ]
        }))
    }

    #[test]
    fn top_level_run_reports_stats() {
        let output = generate_from_document(
            &two_page_doc(),
            &GenerateOptions::default(),
            &mut LogReporter,
        )
        .unwrap();

        assert_eq!(
            output.stats,
            GenerationStats {
                frames_found: 2,
                components_generated: 2
            }
        );
        assert!(output.failures.is_empty());
        let names: Vec<_> = output.components.iter().map(|c| c.name.as_str()).collect();
        // duplicates are kept unless unique names are requested
        assert_eq!(names, vec!["Checkout", "Checkout"]);
    }

    #[test]
    fn recursive_run_includes_nested_frames() {
        let options = GenerateOptions {
            mode: ExtractMode::Recursive,
            ..Default::default()
        };
        let output = generate_from_document(&two_page_doc(), &options, &mut LogReporter).unwrap();
        let names: Vec<_> = output.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Checkout", "Summary", "Checkout"]);
        assert_eq!(output.stats.frames_found, 3);
    }

    #[test]
    fn unique_names_suffix_collisions() {
        let options = GenerateOptions {
            unique_names: true,
            ..Default::default()
        };
        let output = generate_from_document(&two_page_doc(), &options, &mut LogReporter).unwrap();
        let names: Vec<_> = output.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Checkout", "Checkout2"]);
        assert!(output.components[1].code.contains("function Checkout2()"));
    }

    #[test]
    fn failing_frame_is_skipped_and_reported() {
        let root = document(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "CANVAS", "children": [
                { "id": "1:1", "name": "Nested", "type": "FRAME", "children": [
                    { "type": "GROUP", "children": [{ "type": "TEXT" }] }
                ] },
                { "id": "1:2", "name": "Fine", "type": "FRAME" }
            ] }]
        }));
        let options = GenerateOptions {
            max_depth: 2,
            ..Default::default()
        };

        let mut reported = Vec::new();
        let mut reporter = |failure: &FrameFailure| reported.push(failure.clone());
        let output = generate_from_document(&root, &options, &mut reporter).unwrap();

        assert_eq!(output.components.len(), 1);
        assert_eq!(output.components[0].name, "Fine");
        assert_eq!(
            output.stats,
            GenerationStats {
                frames_found: 2,
                components_generated: 1
            }
        );
        assert_eq!(output.failures.len(), 1);
        assert_eq!(reported, output.failures);
        assert_eq!(reported[0].frame, "Nested");
        assert_eq!(reported[0].node_id, "1:1");
        assert_eq!(
            reported[0].issue,
            FrameIssue::DepthLimitExceeded { depth: 3, limit: 2 }
        );
    }

    #[test]
    fn negative_padding_side_is_dropped_not_fatal() {
        let json = json!({
            "document": {
                "type": "DOCUMENT",
                "children": [{ "type": "CANVAS", "children": [
                    { "id": "4:1", "name": "Panel", "type": "FRAME", "layoutMode": "VERTICAL",
                      "paddingTop": -2, "paddingLeft": 16 }
                ] }]
            }
        })
        .to_string();

        let output = generate_from_json(&json, &GenerateOptions::default()).unwrap();
        assert!(output.failures.is_empty());
        assert_eq!(output.stats.components_generated, 1);
        assert!(
            output.components[0]
                .code
                .contains(r#"    <div className="flex flex-col pl-4"></div>"#)
        );
    }

    #[test]
    fn deep_frame_is_skipped_next_to_shallow_one() {
        let mut deep = json!({ "type": "TEXT", "characters": "bottom" });
        for _ in 0..300 {
            deep = json!({ "type": "GROUP", "children": [deep] });
        }
        let json = json!({
            "document": {
                "type": "DOCUMENT",
                "children": [{ "type": "CANVAS", "children": [
                    { "id": "5:1", "name": "Abyss", "type": "FRAME", "children": [deep] },
                    { "id": "5:2", "name": "Shallow", "type": "FRAME" }
                ] }]
            }
        })
        .to_string();

        let output = generate_from_json(&json, &GenerateOptions::default()).unwrap();
        assert_eq!(output.stats.frames_found, 2);
        assert_eq!(output.components.len(), 1);
        assert_eq!(output.components[0].name, "Shallow");
        assert_eq!(output.failures.len(), 1);
        assert_eq!(output.failures[0].frame, "Abyss");
        assert!(matches!(
            output.failures[0].issue,
            FrameIssue::DepthLimitExceeded { depth: 302, limit: 256 }
        ));
    }

    #[test]
    fn all_frames_failing_is_an_error() {
        let root = document(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "CANVAS", "children": [
                { "name": "Deep", "type": "FRAME", "children": [
                    { "type": "FRAME", "children": [{ "type": "TEXT" }] }
                ] }
            ] }]
        }));
        let options = GenerateOptions {
            max_depth: 2,
            ..Default::default()
        };

        let mut count = 0;
        let mut reporter = |_: &FrameFailure| count += 1;
        let err = generate_from_document(&root, &options, &mut reporter).unwrap_err();
        assert!(matches!(err, TailframeError::NoComponents { failed: 1 }));
        assert_eq!(count, 1);
    }

    #[test]
    fn no_frames_is_an_error() {
        let root = document(json!({
            "type": "DOCUMENT",
            "children": [{ "type": "CANVAS", "children": [{ "type": "TEXT" }] }]
        }));
        let err = generate_from_document(&root, &GenerateOptions::default(), &mut LogReporter)
            .unwrap_err();
        assert!(matches!(err, TailframeError::NoFrames));
    }

    #[test]
    fn json_entry_point() {
        let json = json!({
            "name": "File",
            "document": {
                "type": "DOCUMENT",
                "children": [{ "type": "CANVAS", "children": [
                    { "name": "Hero", "type": "FRAME", "children": [
                        { "type": "TEXT", "characters": "<Welcome>" }
                    ] }
                ] }]
            }
        })
        .to_string();

        let output = generate_from_json(&json, &GenerateOptions::default()).unwrap();
        assert_eq!(output.components[0].name, "Hero");
        assert!(output.components[0].code.contains("<p>{'<'}Welcome{'>'}</p>"));
    }

    #[test]
    fn json_without_document_is_structural() {
        let err = generate_from_json(r#"{ "name": "x" }"#, &GenerateOptions::default())
            .unwrap_err();
        assert!(matches!(err, TailframeError::MissingDocument));
        assert!(err.is_structural());
    }

    #[test]
    fn malformed_json_is_invalid_design() {
        let err = generate_from_json("{ not json", &GenerateOptions::default()).unwrap_err();
        assert!(matches!(err, TailframeError::InvalidDesign(_)));
    }
}
