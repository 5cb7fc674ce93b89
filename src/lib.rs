//! bdwild: browse and search the wildlife of Bangladesh from the terminal.
//!
//! The catalog and its query engine live in `bdwild-core`; the interactive
//! browser lives in `bdwild-tui`. This crate is the binary glue: argument
//! parsing, dataset selection and the scripting subcommands, exposed as a
//! library so integration tests can drive them without spawning a process.
//!
//! # Architecture
//!
//! ```text
//! Dataset ──► Catalog ──► Query engine ──┬──► TUI    (bdwild browse)
//!                                        └──► CLI    (search, suggest, statuses, show)
//! ```

pub mod cli;

use anyhow::Context;
use bdwild_core::{config::Config, Catalog};
use std::path::Path;

/// Pick the dataset: an explicit `--data` directory first, then the
/// configured `data_dir`, then the dataset compiled into the binary.
pub fn load_catalog(data: Option<&Path>, config: &Config) -> anyhow::Result<Catalog> {
    match data.or(config.catalog.data_dir.as_deref()) {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "loading dataset from directory");
            Catalog::from_dir(dir)
                .with_context(|| format!("failed to load dataset from {}", dir.display()))
        }
        None => Catalog::embedded().context("embedded dataset is invalid"),
    }
}
