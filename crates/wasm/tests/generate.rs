use serde::Deserialize;
use tailframe_wasm::{classify_node, extract_frames, generate, generate_component, sanitize_component_name};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[derive(Deserialize, Debug)]
struct Component {
    name: String,
    code: String,
    language: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Frame {
    name: String,
    kind: String,
    node_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Failure {
    frame: String,
    node_id: String,
    message: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Stats {
    frames_found: usize,
    components_generated: usize,
}

#[derive(Deserialize, Debug)]
struct GenerateResult {
    components: Vec<Component>,
    failures: Vec<Failure>,
    stats: Stats,
}

const DESIGN: &str = r#"{
    "name": "Landing",
    "document": {
        "type": "DOCUMENT",
        "children": [{
            "type": "CANVAS",
            "name": "Page 1",
            "children": [
                { "id": "1:1", "name": "Hero", "type": "FRAME", "layoutMode": "VERTICAL",
                  "primaryAxisAlignItems": "CENTER",
                  "children": [
                    { "id": "1:2", "type": "TEXT", "characters": "Build {fast}",
                      "style": { "fontSize": 36, "fontWeight": 700 } }
                  ] },
                { "id": "1:3", "name": "Broken", "type": "FRAME", "children": [
                    { "type": "GROUP", "children": [{ "type": "RECTANGLE" }] }
                ] },
                { "id": "1:4", "name": "Offset", "type": "FRAME", "paddingTop": -2, "paddingLeft": 16 }
            ]
        }]
    }
}"#;

#[wasm_bindgen_test]
fn extracts_top_level_frames() {
    let frames = extract_frames(DESIGN, None).expect("extract should succeed");
    let frames: Vec<Frame> = serde_wasm_bindgen::from_value(frames).expect("deserialize frames");

    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].name, "Hero");
    assert_eq!(frames[0].kind, "FRAME");
    assert_eq!(frames[0].node_id, "1:1");
}

fn shallow_config() -> JsValue {
    js_sys::JSON::parse(r#"{ "maxDepth": 2 }"#).unwrap()
}

#[wasm_bindgen_test]
fn generates_document_with_failures() {
    let result = generate(DESIGN, shallow_config(), None).expect("generate should succeed");
    let result: GenerateResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert_eq!(result.stats.frames_found, 3);
    assert_eq!(result.stats.components_generated, 2);
    assert_eq!(result.components[0].name, "Hero");
    assert_eq!(result.components[0].language, "tsx");
    assert!(result.components[0].code.contains("flex flex-col justify-center"));
    assert!(result.components[0].code.contains("Build {'{'}fast{'}'}"));
    assert!(result.components[0].code.contains("text-4xl font-bold"));

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].frame, "Broken");
    assert_eq!(result.failures[0].node_id, "1:3");
    assert!(result.failures[0].message.contains("exceeds limit of 2"));
}

#[wasm_bindgen_test]
fn negative_padding_side_is_dropped() {
    let result = generate(DESIGN, JsValue::UNDEFINED, None).expect("generate should succeed");
    let result: GenerateResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");

    assert!(result.failures.is_empty());
    assert_eq!(result.stats.components_generated, 3);
    let offset = result.components.iter().find(|c| c.name == "Offset").expect("Offset generated");
    assert!(offset.code.contains(r#"<div className="pl-4"></div>"#));
}

#[wasm_bindgen_test]
fn failure_callback_sees_skipped_frames() {
    let seen = js_sys::Array::new();
    let push = js_sys::Function::new_with_args("failure", "this.push(failure.frame)")
        .bind(&seen);

    generate(DESIGN, shallow_config(), Some(push)).expect("generate should succeed");

    assert_eq!(seen.length(), 1);
    assert_eq!(seen.get(0).as_string().as_deref(), Some("Broken"));
}

#[wasm_bindgen_test]
fn throwing_callback_fails_the_run() {
    let throws = js_sys::Function::new_with_args("failure", "throw new Error('stop')");
    assert!(generate(DESIGN, shallow_config(), Some(throws)).is_err());
}

#[wasm_bindgen_test]
fn config_enables_recursive_mode() {
    let config = js_sys::JSON::parse(r#"{ "mode": "recursive", "uniqueNames": true }"#).unwrap();
    let result = generate(DESIGN, config, None).expect("generate should succeed");
    let result: GenerateResult = serde_wasm_bindgen::from_value(result).expect("deserialize result");
    assert_eq!(result.stats.frames_found, 3);
}

#[wasm_bindgen_test]
fn invalid_config_is_rejected() {
    let config = js_sys::JSON::parse(r#"{ "mode": "sideways" }"#).unwrap();
    assert!(generate(DESIGN, config, None).is_err());
}

#[wasm_bindgen_test]
fn generates_single_component() {
    let node = r#"{ "name": "price tag", "type": "FRAME", "cornerRadius": 9999 }"#;
    let component = generate_component(node).expect("generate should succeed");
    let component: Component =
        serde_wasm_bindgen::from_value(component).expect("deserialize component");

    assert_eq!(component.name, "Pricetag");
    assert!(component.code.contains(r#"<div className="rounded-full"></div>"#));
}

#[wasm_bindgen_test]
fn classifies_and_sanitizes() {
    let node = r#"{ "type": "FRAME", "paddingTop": 8, "paddingBottom": 8 }"#;
    assert_eq!(classify_node(node).expect("classify"), vec!["pt-2", "pb-2"]);
    assert_eq!(sanitize_component_name("9 lives"), "Component9lives");
}

#[wasm_bindgen_test]
fn missing_document_is_an_error() {
    assert!(generate(r#"{ "name": "empty" }"#, JsValue::UNDEFINED, None).is_err());
}
