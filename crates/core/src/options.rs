use crate::extract::ExtractMode;
use serde::{Deserialize, Serialize};

/// Default subtree depth accepted by frame validation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

/// Options for a whole-document generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Which frames to extract.
    #[serde(default)]
    pub mode: ExtractMode,
    /// Whether colliding component names get numeric suffixes.
    #[serde(default)]
    pub unique_names: bool,
    /// Frames nested deeper than this are skipped.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mode: ExtractMode::default(),
            unique_names: false,
            max_depth: default_max_depth(),
        }
    }
}
