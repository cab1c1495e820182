use anyhow::Result;
use cardapio::{actions, cli};
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Args::parse();
    actions::handle(args)
}
