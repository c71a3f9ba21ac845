//! Build options and configuration.

/// Default nesting limit for outline entries.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options for building a paragraph tree.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Error handling mode for structurally broken outlines
    pub error_mode: ErrorMode,

    /// Maximum outline nesting depth (top-level entries are depth 0)
    pub max_depth: usize,

    /// Title given to the synthetic root paragraph
    pub root_title: String,
}

impl BuildOptions {
    /// Create new build options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (cut broken branches instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the title of the synthetic root.
    pub fn with_root_title(mut self, title: impl Into<String>) -> Self {
        self.root_title = title.into();
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            max_depth: DEFAULT_MAX_DEPTH,
            root_title: "root".to_string(),
        }
    }
}

/// Error handling mode for cyclic, runaway or broken outlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the build
    #[default]
    Strict,
    /// Drop the offending branch and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_builder() {
        let options = BuildOptions::new()
            .lenient()
            .with_max_depth(8)
            .with_root_title("document");

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert_eq!(options.max_depth, 8);
        assert_eq!(options.root_title, "document");
    }

    #[test]
    fn test_default_options() {
        let options = BuildOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.root_title, "root");
    }
}
