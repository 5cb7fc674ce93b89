//! Command-line interface: argument definitions and the non-interactive
//! subcommands.
//!
//! Subcommands write to any [`Write`] so they can be tested against a
//! buffer. Text output is one record per line; `--json` prints the same
//! records as a JSON array (or object, for `show`).

use bdwild_core::{
    config::Config,
    query::{self, Query, SuggestOptions},
    Catalog, Category, ConservationStatus, Facet, Species, SpeciesId,
};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bdwild", about = "Browse and search the wildlife of Bangladesh", version)]
pub struct Cli {
    /// Load species.json (and posts.json) from DIR instead of the built-in dataset.
    #[arg(long, global = true, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Write debug logs to the system temp dir (bdwild-debug.log).
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive browser (the default).
    Browse,
    /// List species matching a term and filters.
    Search {
        /// Free text matched against name, local name and description.
        #[arg(default_value = "")]
        term: String,
        /// Only search within one category. Unlike --category, an unknown
        /// name is rejected rather than matching nothing.
        #[arg(long)]
        scope: Option<Category>,
        /// Category filter, or `all`.
        #[arg(long, default_value = "all")]
        category: String,
        /// Conservation status filter, or `all`.
        #[arg(long, default_value = "all")]
        status: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the suggestions a search box would offer for TERM.
    Suggest {
        term: String,
        /// Only suggest from one category (must name a category).
        #[arg(long)]
        scope: Option<Category>,
        /// Maximum number of suggestions (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
        #[arg(long)]
        json: bool,
    },
    /// List the conservation statuses present in the catalog.
    Statuses {
        /// Only list statuses within one category (must name a category).
        #[arg(long)]
        scope: Option<Category>,
    },
    /// Show one species.
    Show {
        id: SpeciesId,
        #[arg(long)]
        json: bool,
    },
}

/// Result of a subcommand that can legitimately find nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NotFound,
}

/// Run a non-interactive subcommand. `Browse` is handled by the caller.
pub fn run_command(
    command: &Commands,
    catalog: &Catalog,
    config: &Config,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    match command {
        Commands::Browse => Ok(Outcome::Done),
        Commands::Search { term, scope, category, status, json } => {
            let query = Query::new()
                .with_term(term.as_str())
                .with_scope(*scope)
                .with_category(Facet::<Category>::parse(category))
                .with_status(Facet::<ConservationStatus>::parse(status));
            tracing::debug!(?query, "cli: search");
            search(catalog, &query, *json, out)?;
            Ok(Outcome::Done)
        }
        Commands::Suggest { term, scope, limit, json } => {
            let limit = limit.unwrap_or(config.search.suggestion_limit);
            let suggestions = query::suggest(
                catalog.species(),
                *scope,
                term,
                SuggestOptions::with_limit(limit),
            );
            if *json {
                serde_json::to_writer_pretty(&mut *out, &suggestions)?;
                writeln!(out)?;
            } else {
                for s in &suggestions {
                    writeln!(out, "{:>3}  {}  {}", s.id.0, s.name, s.local_name)?;
                }
            }
            Ok(Outcome::Done)
        }
        Commands::Statuses { scope } => {
            for status in query::distinct_statuses(catalog.species(), *scope) {
                writeln!(out, "{status}")?;
            }
            Ok(Outcome::Done)
        }
        Commands::Show { id, json } => show(catalog, *id, config.search.related_limit, *json, out),
    }
}

fn search(catalog: &Catalog, query: &Query, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let results = query::filter_catalog(catalog.species(), query);
    if json {
        serde_json::to_writer_pretty(&mut *out, &results)?;
        writeln!(out)?;
        return Ok(());
    }
    for s in &results {
        writeln!(out, "{}", summary_line(s))?;
    }
    writeln!(out, "Showing {} of {} animals", results.len(), catalog.len())?;
    Ok(())
}

fn show(
    catalog: &Catalog,
    id: SpeciesId,
    related_limit: usize,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<Outcome> {
    let Some(species) = query::find_by_id(catalog.species(), id) else {
        writeln!(out, "Animal Not Found: no species with id {id}")?;
        return Ok(Outcome::NotFound);
    };
    if json {
        serde_json::to_writer_pretty(&mut *out, species)?;
        writeln!(out)?;
        return Ok(Outcome::Done);
    }

    writeln!(out, "{} ({})", species.name, species.local_name)?;
    writeln!(out, "{}", species.scientific_name)?;
    writeln!(out, "{} · {}", species.category, species.conservation_status)?;
    let facts = [
        ("Diet", species.diet.clone()),
        ("Avg. Lifespan", species.average_lifespan.clone()),
        ("Habitat", species.habitat.clone()),
        ("Distribution", species.distribution.join(", ")),
    ];
    for (label, value) in facts.iter().filter(|(_, v)| !v.is_empty()) {
        writeln!(out, "{label}: {value}")?;
    }
    writeln!(out)?;
    writeln!(out, "{}", species.description)?;

    let related = query::related_species(catalog.species(), id, related_limit);
    if !related.is_empty() {
        writeln!(out)?;
        writeln!(out, "Related Species:")?;
        for r in related {
            writeln!(out, "{}", summary_line(r))?;
        }
    }
    Ok(Outcome::Done)
}

fn summary_line(s: &Species) -> String {
    format!(
        "{:>3}  {}  {}  [{}] {}",
        s.id.0,
        s.name,
        s.local_name,
        s.category,
        s.conservation_status.code()
    )
}
