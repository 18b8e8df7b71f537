//! Frame extraction: picks the nodes that become standalone components.

use crate::error::TailframeError;
use crate::node::{DesignNode, NodeType};
use serde::{Deserialize, Serialize};

/// How far extraction looks into the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtractMode {
    /// Every visible `FRAME` or `COMPONENT` anywhere in the tree, nested ones included.
    Recursive,
    /// Only the direct children of each page.
    #[default]
    TopLevel,
}

impl std::str::FromStr for ExtractMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" => Ok(ExtractMode::Recursive),
            "topLevel" | "top-level" | "top_level" => Ok(ExtractMode::TopLevel),
            other => Err(format!("unknown extraction mode '{other}'")),
        }
    }
}

/// Normalized kind of an extracted frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FrameKind {
    /// `FRAME` or `INSTANCE`.
    Frame,
    /// `COMPONENT` or `COMPONENT_SET`.
    Component,
}

impl FrameKind {
    /// Wire tag of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameKind::Frame => "FRAME",
            FrameKind::Component => "COMPONENT",
        }
    }
}

/// A node selected for generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrame<'a> {
    /// Layer label of the frame.
    pub name: &'a str,
    /// The frame root.
    pub node: &'a DesignNode,
    /// Normalized kind.
    pub kind: FrameKind,
}

impl<'a> ParsedFrame<'a> {
    fn new(node: &'a DesignNode, kind: FrameKind) -> Self {
        Self {
            name: &node.name,
            node,
            kind,
        }
    }
}

/// Kind for candidates directly under a page.
fn top_level_kind(node_type: &NodeType) -> Option<FrameKind> {
    match node_type {
        NodeType::Frame | NodeType::Instance => Some(FrameKind::Frame),
        NodeType::Component | NodeType::ComponentSet => Some(FrameKind::Component),
        _ => None,
    }
}

/// Collects every visible `FRAME` and `COMPONENT` in depth-first document order.
///
/// Frames nested inside frames are reported too, so the same subtree can show up
/// in more than one entry. Hidden nodes prune their whole subtree.
pub fn extract_all_frames(root: &DesignNode) -> Vec<ParsedFrame<'_>> {
    let mut frames = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if !node.is_visible() {
            continue;
        }

        match node.node_type {
            NodeType::Frame => frames.push(ParsedFrame::new(node, FrameKind::Frame)),
            NodeType::Component => frames.push(ParsedFrame::new(node, FrameKind::Component)),
            _ => {}
        }

        // reversed so the first child is visited next
        stack.extend(node.children.iter().rev());
    }

    frames
}

/// Collects the frames sitting directly on each page.
///
/// Document children that are not pages are treated as top-level candidates
/// themselves, which covers exports without page nodes.
pub fn extract_top_level_frames(root: &DesignNode) -> Vec<ParsedFrame<'_>> {
    let mut frames = Vec::new();

    for page in root.visible_children() {
        if !page.node_type.is_page() {
            if let Some(kind) = top_level_kind(&page.node_type) {
                frames.push(ParsedFrame::new(page, kind));
            }
            continue;
        }

        for child in page.visible_children() {
            if let Some(kind) = top_level_kind(&child.node_type) {
                frames.push(ParsedFrame::new(child, kind));
            }
        }
    }

    frames
}

/// Extracts frames in the given mode, failing with [`TailframeError::NoFrames`]
/// when nothing qualifies.
pub fn extract_frames(
    root: &DesignNode,
    mode: ExtractMode,
) -> Result<Vec<ParsedFrame<'_>>, TailframeError> {
    let frames = match mode {
        ExtractMode::Recursive => extract_all_frames(root),
        ExtractMode::TopLevel => extract_top_level_frames(root),
    };

    log::debug!(
        "extracted {} frame(s) from '{}' ({:?})",
        frames.len(),
        root.name,
        mode
    );

    if frames.is_empty() {
        return Err(TailframeError::NoFrames);
    }
    Ok(frames)
}
