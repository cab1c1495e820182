use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::catalog::{CatalogView, GroupedCatalog, search::normalize_term};
use crate::cli::{Args, Commands};
use crate::config::{self, UiConfig};
use crate::logging::{self, LogTarget};
use crate::menu::Menu;
use crate::source;
use crate::tui;

pub fn handle(args: Args) -> Result<()> {
    let Args {
        data,
        config,
        command,
    } = args;
    let command = command.unwrap_or(Commands::Browse {
        no_animations: false,
    });

    if let Commands::Completions { shell } = command {
        completions(shell, &mut io::stdout());
        return Ok(());
    }

    let config = config::load(config.as_deref())?;
    let log_target = match command {
        Commands::Browse { .. } => LogTarget::File,
        _ => LogTarget::Stderr,
    };
    logging::init(&config.log, log_target)?;

    let path = source::resolve_data_path(data.as_deref(), &config)?;
    let catalog = source::load_menu_data(&path)?.into_catalog();

    let mut stdout = io::stdout().lock();
    match command {
        Commands::Browse { no_animations } => {
            let mut ui = config.ui.clone();
            if no_animations {
                ui.animations = false;
            }
            browse(catalog, &ui)
        }
        Commands::List { category } => {
            list(&catalog, category.as_deref(), &mut stdout)
        }
        Commands::Search { term } => search(&catalog, &term, &mut stdout),
        Commands::Categories => categories(&catalog, &mut stdout),
        Commands::Completions { shell } => {
            completions(shell, &mut stdout);
            Ok(())
        }
    }
}

/// Runs the interactive menu until the user quits.
pub fn browse(catalog: GroupedCatalog, ui: &UiConfig) -> Result<()> {
    let mut terminal = tui::init()?;
    tracing::info!(
        items = catalog.items().len(),
        categories = catalog.categories().len(),
        "Cardápio visual iniciado"
    );

    let result = Menu::new(catalog, ui).run(&mut terminal);
    tui::finish(result, tui::restore(terminal))
}

/// Prints the cards of `category`, or of the initial category.
pub fn list(
    catalog: &GroupedCatalog,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let category = category.or_else(|| catalog.initial_category());
    let view = match category {
        Some(name) => {
            writeln!(out, "== {name}")?;
            CatalogView::for_category(&catalog.items_in(name))
        }
        None => CatalogView::for_category(&[]),
    };

    write!(out, "{view}")?;
    Ok(())
}

/// Prints the search results for `term`. An empty term prints the initial
/// category, like clearing the search box does.
pub fn search(
    catalog: &GroupedCatalog,
    term: &str,
    out: &mut impl Write,
) -> Result<()> {
    let term = normalize_term(term);
    if term.is_empty() {
        return list(catalog, None, out);
    }

    let matches = crate::catalog::search::search(catalog.items(), &term);
    tracing::debug!(term = %term, matches = matches.len(), "Search");
    write!(out, "{}", CatalogView::for_search(&matches, &term))?;
    Ok(())
}

/// Prints the pill order with item counts, followed by categories that
/// have items but no pill.
pub fn categories(catalog: &GroupedCatalog, out: &mut impl Write) -> Result<()> {
    for category in catalog.categories() {
        writeln!(out, "{category} ({})", catalog.count_in(category))?;
    }

    let hidden = catalog.hidden_categories();
    if !hidden.is_empty() {
        writeln!(out, "Sem pill (apenas na busca):")?;
        for category in hidden {
            writeln!(out, "  {category} ({})", catalog.count_in(category))?;
        }
    }

    Ok(())
}

fn completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
