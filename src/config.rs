/// Tuning knobs for a [`Converter`](crate::Converter).
///
/// The default is strict: no string parsing, no lossy narrowing, and a
/// nesting limit of [`ConverterConfig::DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Parse strings into scalar targets and format scalars into string targets.
    pub parse_strings: bool,
    /// Wrap out-of-range integers and truncate floats instead of failing.
    pub allow_truncation: bool,
    /// Maximum bean nesting depth in either direction.
    pub max_depth: usize,
}

impl ConverterConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn new() -> Self {
        Self {
            parse_strings: false,
            allow_truncation: false,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_string_parsing(mut self, enabled: bool) -> Self {
        self.parse_strings = enabled;
        self
    }

    pub fn with_truncation(mut self, enabled: bool) -> Self {
        self.allow_truncation = enabled;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}
