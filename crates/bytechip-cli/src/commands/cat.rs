use std::io::{BufRead, Write};

use bytechip::Tokenizer;

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the cat command: a streaming encoder/decoder.
#[derive(clap::Args, Debug)]
pub struct CatArgs {
    /// Path to a trained tokenizer artifact.
    #[arg(long)]
    tokenizer: String,

    /// Decode instead of encode.
    #[arg(long)]
    decode: bool,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl CatArgs {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = Tokenizer::load(&self.tokenizer)?;
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        if self.decode {
            run_decode(&tokenizer, &mut reader, &mut writer)
        } else {
            run_encode(&tokenizer, &mut reader, &mut writer)
        }
    }
}

fn run_encode(
    tokenizer: &Tokenizer,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let ids = tokenizer.encode(&line)?;
        for (idx, id) in ids.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, id)?;
        }
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

fn run_decode(
    tokenizer: &Tokenizer,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let ids: Vec<u32> = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()?;
        let result = tokenizer.decode(&ids);
        if result.remaining > 0 {
            log::warn!("{} id(s) had no vocabulary entry", result.remaining);
        }
        write!(writer, "{}", result.value)?;
        writer.flush()?;
    }
    Ok(())
}
