//! JSX rendering of a design subtree.
//!
//! Every visible node becomes one element: `TEXT` nodes become `<p>` leaves,
//! shapes become empty `<div>`s, and everything else (unknown types included)
//! becomes a `<div>` container holding its visible children.

use crate::classify::classify;
use tailframe_core::{DesignNode, NodeType};

/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// Escapes text content so JSX renders it literally.
///
/// Braces and angle brackets become string-literal expressions (`{'<'}`);
/// every other character passes through unchanged.
///
/// # Examples
///
/// ```
/// use tailframe_react::renderer::escape_jsx_text;
///
/// assert_eq!(escape_jsx_text("a < b"), "a {'<'} b");
/// assert_eq!(escape_jsx_text("{x}"), "{'{'}x{'}'}");
/// ```
pub fn escape_jsx_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '{' => result.push_str("{'{'}"),
            '}' => result.push_str("{'}'}"),
            '<' => result.push_str("{'<'}"),
            '>' => result.push_str("{'>'}"),
            _ => result.push(c),
        }
    }
    result
}

fn class_attr(node: &DesignNode) -> String {
    let classes = classify(node);
    if classes.is_empty() {
        String::new()
    } else {
        format!(" className=\"{}\"", classes.join(" "))
    }
}

/// Pushes `text`, re-indenting every continuation line.
fn push_indented(out: &mut String, text: &str, prefix: &str) {
    let mut lines = text.split('\n');
    if let Some(first) = lines.next() {
        out.push_str(first);
    }
    for line in lines {
        out.push('\n');
        out.push_str(prefix);
        out.push_str(line);
    }
}

fn write_node(node: &DesignNode, depth: usize, out: &mut String) {
    let prefix = INDENT.repeat(depth);
    let class_attr = class_attr(node);
    out.push_str(&prefix);

    match node.node_type {
        NodeType::Text => {
            let text = escape_jsx_text(node.characters.as_deref().unwrap_or_default());
            out.push_str(&format!("<p{class_attr}>"));
            push_indented(out, &text, &prefix);
            out.push_str("</p>");
        }
        NodeType::Rectangle | NodeType::Ellipse => {
            out.push_str(&format!("<div{class_attr}></div>"));
        }
        _ => {
            let mut children = node.visible_children().peekable();
            if children.peek().is_none() {
                out.push_str(&format!("<div{class_attr}></div>"));
                return;
            }

            out.push_str(&format!("<div{class_attr}>"));
            for child in children {
                out.push('\n');
                write_node(child, depth + 1, out);
            }
            out.push('\n');
            out.push_str(&prefix);
            out.push_str("</div>");
        }
    }
}

/// Renders `node` as JSX, with every line indented `depth` levels.
///
/// Hidden children are skipped, whatever extraction already filtered.
pub fn render_node(node: &DesignNode, depth: usize) -> String {
    let mut out = String::new();
    write_node(node, depth, &mut out);
    out
}
