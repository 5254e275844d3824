//! Parser configuration.

/// Default maximum container nesting depth. The root object counts as
/// level 1.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options controlling a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth for arrays and objects.
    pub max_depth: usize,
}

impl ParseOptions {
    /// Options with the default limits.
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// No practical depth limit. Only use for trusted input.
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    /// Replace the nesting depth limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}
