//! # Trainer Options

/// Builder for [`BpeTrainer`](crate::training::BpeTrainer) configuration.
#[derive(Debug, Clone)]
pub struct TrainerOptions {
    vocab_size: usize,
    specials: Vec<String>,
}

impl TrainerOptions {
    /// Start a builder targeting `vocab_size` total entries (raw bytes +
    /// special tokens + learned merges).
    pub fn new(vocab_size: usize) -> Self {
        Self {
            vocab_size,
            specials: Vec::new(),
        }
    }

    /// Register special tokens, in the order they should be assigned ids.
    pub fn with_special_tokens<S: AsRef<str>>(mut self, specials: &[S]) -> Self {
        self.specials = specials.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn specials(&self) -> &[String] {
        &self.specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = TrainerOptions::new(300).with_special_tokens(&["<|endoftext|>"]);
        assert_eq!(options.vocab_size(), 300);
        assert_eq!(options.specials(), &["<|endoftext|>".to_string()]);
    }
}
