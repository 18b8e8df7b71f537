//! Component module generation.
//!
//! Wraps rendered JSX in an exported React function component. This is the
//! "generate one component from one frame root" entry point shared by the
//! pipeline and the NAPI/WASM bindings.

use crate::renderer::render_node;
use serde::Serialize;
use tailframe_core::{DesignNode, ParsedFrame, sanitize_component_name};

/// Language tag attached to generated components.
pub const LANGUAGE: &str = "tsx";

/// Nesting level of the JSX body inside the generated function.
const BODY_DEPTH: usize = 2;

/// A generated component module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedComponent {
    /// Exported component name.
    pub name: String,
    /// Complete module source.
    pub code: String,
    /// Source language tag.
    pub language: String,
}

/// Builds the module text around an already rendered JSX body.
pub fn component_module(name: &str, jsx: &str) -> String {
    format!(
        "import React from 'react'\n\
         \n\
         export default function {name}() {{\n\
         \x20 return (\n\
         {jsx}\n\
         \x20 )\n\
         }}\n"
    )
}

/// Generates a component under an explicit, already valid identifier.
pub fn generate_named_component(node: &DesignNode, name: String) -> GeneratedComponent {
    let jsx = render_node(node, BODY_DEPTH);
    GeneratedComponent {
        code: component_module(&name, &jsx),
        name,
        language: LANGUAGE.to_string(),
    }
}

/// Generates a component from a frame root, naming it after the frame's label.
///
/// # Examples
///
/// ```
/// use tailframe_core::{DesignNode, NodeType};
/// use tailframe_react::codegen::generate_component;
///
/// let component = generate_component(&DesignNode::new(NodeType::Frame, "my card"));
/// assert_eq!(component.name, "Mycard");
/// assert!(component.code.contains("export default function Mycard()"));
/// ```
pub fn generate_component(node: &DesignNode) -> GeneratedComponent {
    generate_named_component(node, sanitize_component_name(&node.name))
}

/// Generates one component per frame, in frame order.
pub fn generate_components(frames: &[ParsedFrame<'_>]) -> Vec<GeneratedComponent> {
    frames
        .iter()
        .map(|frame| generate_component(frame.node))
        .collect()
}
