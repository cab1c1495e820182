//! CLI argument parser
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Command-line argument parser for `cardapio`.
#[derive(Debug, Parser)]
#[command(name = "cardapio", version)]
#[command(
    about = "A terminal viewer for restaurant menus",
    long_about = "cardapio - A visual-only restaurant menu for the terminal.

Key Features:
 - Browse items grouped by category with a pill strip.
 - Filter the whole menu by name, description or category.
 - Preview item photos in a modal.

Menu data is read from --data, $CARDAPIO_DATA, the `data` key of the config
file, or ~/.config/cardapio/cardapio.json, in that order. JSON, YAML and
TOML files are accepted.

Examples:
 cardapio                     # open the interactive menu
 cardapio list Bebidas        # print the drinks
 cardapio search suco         # print every item matching `suco`
 cardapio --data menu.yaml    # browse another menu

Use `cardapio <COMMAND> --help` for more details."
)]
pub struct Args {
    /// Path of the menu data file
    #[arg(long, short, global = true)]
    pub data: Option<PathBuf>,

    /// Path of the config file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// CLI subcommands for `cardapio`.
#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(
        about = "Open the interactive menu (default)",
        long_about = "Open the interactive menu with category pills, search
and photo preview. Mouse clicks and keyboard both work.",
        alias = "b"
    )]
    Browse {
        #[clap(long, help = "Disable scrolling and reveal animations")]
        no_animations: bool,
    },

    #[command(
        about = "Print the items of a category",
        long_about = "Print the cards of the given category, or of the first
category when none is given.",
        alias = "l"
    )]
    List {
        /// Name of the category (default: first category)
        category: Option<String>,
    },

    #[command(
        about = "Search the whole menu",
        long_about = "Print every item whose name, description or category
contains the term, ignoring case.",
        arg_required_else_help = true,
        alias = "s"
    )]
    Search {
        /// Search term
        term: String,
    },

    #[command(
        about = "Print the categories with their item counts",
        alias = "c"
    )]
    Categories,

    #[command(about = "Generate shell completions", hide = true)]
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
