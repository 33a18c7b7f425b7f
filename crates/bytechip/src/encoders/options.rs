//! # Encoder Options

/// Builder for encoder behavior not fixed by the trained artifact itself.
#[derive(Debug, Clone, Default)]
pub struct EncoderOptions {
    parallel: bool,
}

impl EncoderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable `rayon`-backed parallel batch/line encoding.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }
}
