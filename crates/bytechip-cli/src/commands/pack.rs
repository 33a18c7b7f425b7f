use std::io::{BufRead, Write};

use bytechip::{Tokenizer, TokenizerOptions};

use crate::input_output::{InputArgs, OutputArgs};

/// Integer width for packed records.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum Dtype {
    /// 2-byte little-endian records; ids must fit in 16 bits.
    U16,
    /// 4-byte little-endian records.
    U32,
}

/// Args for the pack command: flatten an encoded corpus to fixed-width
/// little-endian records, one per token id, line by line.
///
/// This is a thin convenience for feeding a corpus to a downstream trainer
/// that wants a flat id array; it is explicitly not a memory-mapped file
/// format.
#[derive(clap::Args, Debug)]
pub struct PackArgs {
    /// Path to a trained tokenizer artifact.
    #[arg(long)]
    tokenizer: String,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Record width.
    #[arg(long, value_enum, default_value_t = Dtype::U32)]
    dtype: Dtype,

    /// Encode all lines concurrently via `rayon` instead of one at a time.
    #[arg(long)]
    parallel: bool,
}

impl PackArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let options = TokenizerOptions::new().with_parallel_encoding(self.parallel);
        let tokenizer = Tokenizer::load_with_options(&self.tokenizer, options)?;
        let reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;
        let encoded = tokenizer.encode_batch(&lines)?;

        let mut written = 0u64;
        for ids in encoded {
            for id in ids {
                match self.dtype {
                    Dtype::U16 => {
                        let narrowed: u16 = id
                            .try_into()
                            .map_err(|_| format!("id {id} does not fit in u16"))?;
                        writer.write_all(&narrowed.to_le_bytes())?;
                    }
                    Dtype::U32 => writer.write_all(&id.to_le_bytes())?,
                }
                written += 1;
            }
        }

        log::info!("wrote {written} records");
        Ok(())
    }
}
