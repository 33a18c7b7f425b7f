use std::io::Read;

use bytechip::pretokenize::TextSplitter;
#[cfg(feature = "rayon")]
use bytechip::training::count_corpus_parallel;
#[cfg(not(feature = "rayon"))]
use bytechip::training::count_corpus_chunked;
use bytechip::training::{count_corpus, BpeTrainer, TrainerOptions};
use bytechip::vocab::Artifact;

use crate::input_output::{InputArgs, OutputArgs};
use crate::logging::LogArgs;

/// Args for the train command.
#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    #[command(flatten)]
    logging: LogArgs,

    /// Target vocabulary size (256 raw bytes + special tokens + merges).
    #[arg(long, default_value = "512")]
    vocab_size: usize,

    /// Special tokens, in the order they should be assigned ids.
    #[arg(long, value_delimiter = ',', default_value = "<|endoftext|>")]
    special_tokens: Vec<String>,

    /// Number of chunks to pre-tokenize concurrently, aligned to the first
    /// special token as the split sentinel. 1 disables chunking.
    #[arg(long, default_value = "1")]
    workers: usize,
}

impl TrainArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.logging.setup_logging(3)?;

        let splitter = TextSplitter::with_specials(&self.special_tokens);

        let mut data = Vec::new();
        self.input.open_reader()?.read_to_end(&mut data)?;

        let sentinel = self.special_tokens.first().map(|s| s.as_bytes());
        let counts = match (self.workers, sentinel) {
            (workers, Some(sentinel)) if workers > 1 => {
                #[cfg(feature = "rayon")]
                {
                    count_corpus_parallel(&splitter, &data, workers, sentinel)?
                }
                #[cfg(not(feature = "rayon"))]
                {
                    count_corpus_chunked(&splitter, &data, workers, sentinel)?
                }
            }
            _ => count_corpus(&splitter, &data)?,
        };

        log::info!("training on {} distinct pre-tokens", counts.len());

        let options =
            TrainerOptions::new(self.vocab_size).with_special_tokens(&self.special_tokens);
        let result = BpeTrainer::new(options).train(&counts)?;

        let artifact = Artifact {
            vocab: result.vocab,
            merges: result.merges,
            special_token_map: result.special_token_map,
        };

        match &self.output.output {
            Some(path) => artifact.save(path)?,
            None => {
                let mut writer = self.output.open_writer()?;
                std::io::Write::write_all(&mut writer, artifact.to_json()?.as_bytes())?;
            }
        }

        Ok(())
    }
}
