//! The three-stage narrative rendered by the demo.
//!
//! Stage one shows every creator publishing to a peer, stage two adds the creator rings and
//! highlights the high-index creators, stage three converges the creators on two hubs and marks
//! the winners.

use tracing::info;

use crate::{
    builder::{self, ColorPolicy},
    config::DiagramConfig,
    error::Result,
    graph::Diagram,
    pagerank,
    render::{Artifact, Renderer},
};

/// The base name the PageRank view of the converged network is rendered under.
pub const RANK_VIEW_NAME: &str = "_demo_pagerank";

/// A named accumulation stage of the storyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Publish,
    Ring,
    Convergence,
}

impl Stage {
    pub const ALL: [Stage; 3] = [Stage::Publish, Stage::Ring, Stage::Convergence];

    /// The base name the stage is rendered under.
    pub fn output_name(&self) -> &'static str {
        match self {
            Self::Publish => "_demo_graph01",
            Self::Ring => "_demo_graph02",
            Self::Convergence => "_demo_graph03",
        }
    }

    /// Applies the pass this stage introduces on top of the previous stages.
    fn apply(&self, diagram: &mut Diagram) {
        match self {
            Self::Publish => builder::add_creator_to_peer_edges(diagram, &ColorPolicy::default()),
            Self::Ring => builder::add_creator_ring_edges(diagram),
            Self::Convergence => builder::add_convergence_edges(diagram),
        }
    }
}

/// How the diagram evolves from one stage to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accumulation {
    /// Every stage rebuilds its diagram from scratch by replaying the passes up to it.
    #[default]
    Replay,
    /// A single diagram is mutated across the stages and snapshotted after each pass.
    Shared,
}

pub struct Storyboard {
    config: DiagramConfig,
}

impl Storyboard {
    pub fn new(config: DiagramConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Builds the diagram of a stage from scratch.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::config::DiagramConfig;
    /// use demograph::storyboard::{Stage, Storyboard};
    ///
    /// let storyboard = Storyboard::new(DiagramConfig::default());
    ///
    /// assert_eq!(storyboard.diagram(Stage::Publish).edge_count(), 10);
    /// assert_eq!(storyboard.diagram(Stage::Ring).edge_count(), 38);
    /// ```
    pub fn diagram(&self, stage: Stage) -> Diagram {
        let mut diagram = self.base();
        for pass in Stage::ALL.iter().filter(|pass| **pass <= stage) {
            pass.apply(&mut diagram);
        }

        diagram
    }

    /// Returns the diagram of every stage, in order, following the configured accumulation model.
    pub fn diagrams(&self) -> Vec<(Stage, Diagram)> {
        match self.config.accumulation {
            Accumulation::Replay => Stage::ALL
                .into_iter()
                .map(|stage| (stage, self.diagram(stage)))
                .collect(),
            Accumulation::Shared => {
                let mut diagram = self.base();

                Stage::ALL
                    .into_iter()
                    .map(|stage| {
                        stage.apply(&mut diagram);
                        (stage, diagram.clone())
                    })
                    .collect()
            }
        }
    }

    /// Renders every stage and returns the artifacts in stage order.
    pub fn run(&self, renderer: &Renderer) -> Result<Vec<Artifact>> {
        let mut artifacts = Vec::with_capacity(Stage::ALL.len());

        for (stage, diagram) in self.diagrams() {
            let artifact = renderer.render(&diagram, stage.output_name())?;

            info!(
                stage = ?stage,
                nodes = diagram.node_count(),
                edges = diagram.edge_count(),
                image = %artifact.image.display(),
                "rendered stage"
            );

            artifacts.push(artifact);
        }

        Ok(artifacts)
    }

    /// Renders the creators of the converged network sized and colored after their PageRank.
    pub fn render_rank_view(&self, renderer: &Renderer) -> Result<Artifact> {
        let converged = self.diagram(Stage::Convergence);
        let view = pagerank::rank_view(&converged);
        let artifact = renderer.render(&view, RANK_VIEW_NAME)?;

        let highlighted: Vec<String> = pagerank::highlighted(&converged)
            .iter()
            .map(ToString::to_string)
            .collect();
        info!(
            highlighted = ?highlighted,
            image = %artifact.image.display(),
            "rendered rank view"
        );

        Ok(artifact)
    }

    fn base(&self) -> Diagram {
        builder::build_base_graph(self.config.creator_count, self.config.peer_count)
    }
}
