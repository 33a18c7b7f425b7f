pub mod cat;
pub mod pack;
pub mod train;

use cat::CatArgs;
use pack::PackArgs;
use train::TrainArgs;

/// Subcommands for bytechip-cli.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Train a tokenizer from a text corpus.
    Train(TrainArgs),

    /// Encode/decode as a streaming filter.
    Cat(CatArgs),

    /// Flatten an encoded corpus to fixed-width records.
    Pack(PackArgs),
}

impl Commands {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Train(cmd) => cmd.run(),
            Commands::Cat(cmd) => cmd.run(),
            Commands::Pack(cmd) => cmd.run(),
        }
    }
}
