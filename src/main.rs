//! LB Academy - an interactive terminal explainer for load-balancing concepts
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use lbacad_app::state::ExplainerTab;

/// LB Academy - load balancing concepts, visualized in your terminal
#[derive(Parser, Debug)]
#[command(name = "lbacad")]
#[command(about = "An interactive terminal explainer for load-balancing concepts", long_about = None)]
struct Args {
    /// Tab to open at startup: concept, journey, algorithms, health,
    /// layers, or quiz
    #[arg(value_name = "TAB")]
    tab: Option<String>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Validate the tab argument before touching the terminal
    let starting_tab = args
        .tab
        .as_deref()
        .map(str::parse::<ExplainerTab>)
        .transpose()?;

    lbacad_core::logging::init()?;
    tracing::info!(?starting_tab, "Starting TUI");

    lbacad_tui::run(starting_tab).await?;
    Ok(())
}
