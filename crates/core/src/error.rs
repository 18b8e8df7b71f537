use thiserror::Error;

/// Errors that abort a whole generation run.
#[derive(Debug, Error)]
pub enum TailframeError {
    /// The design data carries no document root.
    #[error("No document node found in design data")]
    MissingDocument,
    /// Extraction found no candidate frames.
    #[error("No frames or components found in design")]
    NoFrames,
    /// Every extracted frame failed to generate.
    #[error("Failed to generate any components from the design ({failed} frame(s) skipped)")]
    NoComponents {
        /// Number of frames that were skipped.
        failed: usize,
    },
    /// The design JSON could not be read as a design tree.
    #[error("Invalid design data: {0}")]
    InvalidDesign(#[from] serde_json::Error),
}

impl TailframeError {
    /// Structural errors describe the document as a whole rather than a bad input encoding.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            TailframeError::MissingDocument
                | TailframeError::NoFrames
                | TailframeError::NoComponents { .. }
        )
    }
}

/// Why a single frame was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameIssue {
    /// The subtree is nested deeper than the configured limit.
    #[error("subtree depth {depth} exceeds limit of {limit}")]
    DepthLimitExceeded {
        /// Measured depth.
        depth: usize,
        /// Configured limit.
        limit: usize,
    },
    /// A facet value has an impossible shape.
    #[error("invalid {facet} on node '{node}': {message}")]
    InvalidFacet {
        /// Label of the offending node.
        node: String,
        /// Facet name (e.g. `paddingTop`).
        facet: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

/// Record of a frame that was skipped during generation.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameFailure {
    /// Label of the frame.
    pub frame: String,
    /// Node id of the frame root.
    pub node_id: String,
    /// What went wrong.
    pub issue: FrameIssue,
}

impl FrameFailure {
    /// Creates a new failure record.
    pub fn new(frame: impl Into<String>, node_id: impl Into<String>, issue: FrameIssue) -> Self {
        Self {
            frame: frame.into(),
            node_id: node_id.into(),
            issue,
        }
    }
}

impl std::fmt::Display for FrameFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.node_id.is_empty() {
            write!(f, "frame '{}': {}", self.frame, self.issue)
        } else {
            write!(f, "frame '{}' ({}): {}", self.frame, self.node_id, self.issue)
        }
    }
}
