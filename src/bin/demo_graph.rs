//! Renders the three storyboard stages to `_demo_graph01.png`, `_demo_graph02.png` and
//! `_demo_graph03.png` in the working directory, then the PageRank view of the converged network
//! to `_demo_pagerank.png`.

use demograph::{
    config::DiagramConfig,
    pagerank,
    render::Renderer,
    storyboard::{Stage, Storyboard},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> demograph::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DiagramConfig::default();
    info!(
        creators = config.creator_count,
        peers = config.peer_count,
        accumulation = ?config.accumulation,
        "rendering storyboard"
    );

    let storyboard = Storyboard::new(config);
    let renderer = Renderer::from_config(storyboard.config());
    let artifacts = storyboard.run(&renderer)?;
    storyboard.render_rank_view(&renderer)?;

    // Report how the creators rank once the network has converged.
    let converged = storyboard.diagram(Stage::Convergence);
    for (creator, rank) in pagerank::pagerank(&converged) {
        let percent = format!("{:.2}%", rank * 100.0);
        info!(%creator, rank = %percent, "pagerank");
    }

    info!(count = artifacts.len(), "done");

    Ok(())
}
