//! Pre-generation checks applied to each extracted frame.
//!
//! Style classification and emission accept any finite tree, including
//! negative lengths and out-of-range colours. These checks only skip frames
//! the emitter cannot render: subtrees nested past the depth limit and
//! numbers that are not finite.

use crate::error::FrameIssue;
use crate::node::DesignNode;

fn check_finite(node: &DesignNode, facet: &'static str, value: Option<f64>) -> Result<(), FrameIssue> {
    match value {
        Some(value) if !value.is_finite() => Err(FrameIssue::InvalidFacet {
            node: node.name.clone(),
            facet,
            message: format!("not a finite number ({value})"),
        }),
        _ => Ok(()),
    }
}

fn check_node(node: &DesignNode) -> Result<(), FrameIssue> {
    let layout = &node.layout;
    check_finite(node, "paddingTop", layout.padding_top)?;
    check_finite(node, "paddingRight", layout.padding_right)?;
    check_finite(node, "paddingBottom", layout.padding_bottom)?;
    check_finite(node, "paddingLeft", layout.padding_left)?;
    check_finite(node, "itemSpacing", layout.item_spacing)?;
    check_finite(node, "cornerRadius", node.corner_radius)?;

    if let Some(style) = &node.style {
        check_finite(node, "fontSize", style.font_size)?;
        check_finite(node, "fontWeight", style.font_weight)?;
    }
    Ok(())
}

/// Checks a frame subtree: depth against `max_depth`, then every visible node's numbers.
///
/// Hidden subtrees are never rendered, so they are not inspected.
pub fn validate_frame(root: &DesignNode, max_depth: usize) -> Result<(), FrameIssue> {
    let depth = root.depth();
    if depth > max_depth {
        return Err(FrameIssue::DepthLimitExceeded {
            depth,
            limit: max_depth,
        });
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        check_node(node)?;
        stack.extend(node.visible_children());
    }
    Ok(())
}
