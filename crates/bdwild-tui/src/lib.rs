//! bdwild TUI: ratatui application shell for browsing the wildlife catalog.

pub mod app;
pub mod commands;
pub mod event;
pub mod icons;
pub mod router;
pub mod text;
pub mod theme;
pub mod widgets;

pub use app::App;

use bdwild_core::{config::Config, Catalog};

/// Start the TUI over `catalog`. An unknown theme name in `config` falls back
/// to the default theme.
pub fn run(catalog: Catalog, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });
    tracing::info!(species = catalog.len(), posts = catalog.posts().len(), "starting tui");
    App::new(catalog, config, theme).run()
}
