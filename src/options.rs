const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub reject_duplicate_keys: bool,
    pub max_depth: usize,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reject_duplicate_keys(mut self, reject_duplicate_keys: bool) -> Self {
        self.reject_duplicate_keys = reject_duplicate_keys;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            reject_duplicate_keys: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
