//! PageRank over the creator layer and the rank-weighted view built from it.

use std::collections::BTreeMap;

use nalgebra::{DMatrix, DVector};

use crate::{
    edge::Edge,
    graph::{Cluster, Diagram},
    node::{Node, NodeId},
};

/// Probability of following an edge rather than jumping to a random creator.
pub const DAMPING: f64 = 0.85;
/// The iteration stops once the L1 distance between two successive rank vectors drops below.
pub const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 100;

/// Creators ranked above this percentage are highlighted in the rank view.
pub const HIGHLIGHT_PERCENT: f64 = 10.0;
pub const HIGHLIGHT_FILL: &str = "#FF4444";
pub const PLAIN_FILL: &str = "#FFFFFF";

/// Computes the PageRank of every creator from the creator-to-creator edges.
///
/// Parallel edges weigh in proportion to their count and creators without outgoing edges spread
/// their rank uniformly. The ranks sum to 1.
///
/// # Examples
///
/// ```
/// use demograph::builder;
/// use demograph::node::NodeId;
/// use demograph::pagerank::pagerank;
///
/// let mut diagram = builder::build_base_graph(10, 4);
/// builder::add_creator_ring_edges(&mut diagram);
///
/// let ranks = pagerank(&diagram);
/// assert_eq!(ranks.len(), 10);
/// assert!((ranks.values().sum::<f64>() - 1.0).abs() < 1e-6);
/// ```
pub fn pagerank(diagram: &Diagram) -> BTreeMap<NodeId, f64> {
    let creators: Vec<NodeId> = diagram
        .cluster(Cluster::Creator)
        .iter()
        .map(Node::id)
        .collect();

    let n = creators.len();
    if n == 0 {
        return BTreeMap::new();
    }

    let position: BTreeMap<NodeId, usize> =
        creators.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    // Column `j` holds the outgoing edge counts of creator `j`, normalised below into the
    // probabilities of moving from `j` to each row.
    let mut transition = DMatrix::<f64>::zeros(n, n);
    for edge in diagram.edges() {
        if let (Some(j), Some(i)) = (position.get(edge.source()), position.get(edge.target())) {
            transition[(*i, *j)] += 1.0;
        }
    }

    let mut dangling = vec![];
    for (j, mut column) in transition.column_iter_mut().enumerate() {
        let out = column.sum();
        if out == 0.0 {
            dangling.push(j);
        } else {
            column.unscale_mut(out);
        }
    }

    let teleport = (1.0 - DAMPING) / n as f64;
    let mut ranks = DVector::<f64>::from_element(n, 1.0 / n as f64);

    for _ in 0..MAX_ITERATIONS {
        let dangling_mass: f64 = dangling.iter().map(|j| ranks[*j]).sum();
        let next = (&transition * &ranks)
            .scale(DAMPING)
            .add_scalar(teleport + DAMPING * dangling_mass / n as f64);

        let delta = (&next - &ranks).lp_norm(1);
        ranks = next;

        if delta < TOLERANCE {
            break;
        }
    }

    creators
        .into_iter()
        .zip(ranks.iter())
        .map(|(id, rank)| (id, *rank))
        .collect()
}

/// Builds a creator-only diagram sized and colored after each creator's PageRank.
///
/// Ranks are truncated to whole percents: a creator's width is a fifth of its percentage, its
/// font size seven times it, and creators above [`HIGHLIGHT_PERCENT`] are filled with
/// [`HIGHLIGHT_FILL`].
pub fn rank_view(diagram: &Diagram) -> Diagram {
    let ranks = pagerank(diagram);
    let mut view = Diagram::new();

    for (id, rank) in &ranks {
        let percent = (rank * 100.0).floor();

        let mut node = Node::creator(id.index());
        node.set_width(percent / 5.0);
        node.set_font_size(percent as u32 * 7);
        node.set_fill_color(if percent > HIGHLIGHT_PERCENT {
            HIGHLIGHT_FILL
        } else {
            PLAIN_FILL
        });

        view.insert_node(node);
    }

    for edge in diagram.edges() {
        if edge.source().is_creator() && edge.target().is_creator() {
            view.insert(Edge::new(*edge.source(), *edge.target()));
        }
    }

    view
}

/// Returns the creators ranked above [`HIGHLIGHT_PERCENT`], in index order.
pub fn highlighted(diagram: &Diagram) -> Vec<NodeId> {
    pagerank(diagram)
        .into_iter()
        .filter(|(_, rank)| (rank * 100.0).floor() > HIGHLIGHT_PERCENT)
        .map(|(id, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{self, ColorPolicy};

    const N: usize = 10;
    const M: usize = 4;

    fn converged() -> Diagram {
        let mut diagram = builder::build_base_graph(N, M);
        builder::add_creator_to_peer_edges(&mut diagram, &ColorPolicy::default());
        builder::add_creator_ring_edges(&mut diagram);
        builder::add_convergence_edges(&mut diagram);
        diagram
    }

    fn assert_sums_to_one(ranks: &BTreeMap<NodeId, f64>) {
        let sum: f64 = ranks.values().sum();
        assert!((sum - 1.0).abs() < 1e-6, "ranks sum to {sum}");
    }

    #[test]
    fn empty() {
        assert!(pagerank(&Diagram::new()).is_empty());
        assert_eq!(rank_view(&Diagram::new()).node_count(), 0);
    }

    #[test]
    fn without_edges_is_uniform() {
        let diagram = builder::build_base_graph(4, 2);
        let ranks = pagerank(&diagram);

        assert_eq!(ranks.len(), 4);
        for rank in ranks.values() {
            assert!((rank - 0.25).abs() < 1e-9);
        }
    }

    #[test]
    fn symmetric_cycle_is_uniform() {
        let mut diagram = builder::build_base_graph(3, 0);
        for i in 0..3 {
            diagram.insert(Edge::new(NodeId::Creator(i), NodeId::Creator((i + 1) % 3)));
        }

        for rank in pagerank(&diagram).values() {
            assert!((rank - 1.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn peers_are_ignored() {
        let mut with_peers = builder::build_base_graph(N, M);
        builder::add_creator_to_peer_edges(&mut with_peers, &ColorPolicy::default());
        builder::add_creator_ring_edges(&mut with_peers);

        let mut without_peers = builder::build_base_graph(N, 0);
        builder::add_creator_ring_edges(&mut without_peers);

        assert_eq!(pagerank(&with_peers), pagerank(&without_peers));
    }

    #[test]
    fn convergence_hubs_rank_highest() {
        let ranks = pagerank(&converged());
        assert_sums_to_one(&ranks);

        let (top, _) = ranks
            .iter()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap();
        assert_eq!(*top, NodeId::Creator(4));
        assert!(ranks[&NodeId::Creator(2)] > 0.1);
        assert!(ranks[&NodeId::Creator(4)] > 0.2);
    }

    #[test]
    fn highlighted_are_the_winners() {
        let winners: Vec<NodeId> = builder::WINNERS.into_iter().map(NodeId::Creator).collect();

        assert_eq!(highlighted(&converged()), winners);
    }

    #[test]
    fn rank_view_styling() {
        let view = rank_view(&converged());

        assert_eq!(view.cluster(Cluster::Creator).len(), N);
        assert!(view.cluster(Cluster::Peer).is_empty());
        // Only the creator-to-creator edges are kept: 28 ring edges and 10 convergence edges.
        assert_eq!(view.edge_count(), 38);

        // C4 ranks at 22 percent.
        let hub = view.node(NodeId::Creator(4)).unwrap();
        assert_eq!(hub.fill_color(), Some(HIGHLIGHT_FILL));
        assert_eq!(hub.font_size(), Some(22 * 7));
        assert_eq!(hub.width(), Some(22.0 / 5.0));

        let plain = view.node(NodeId::Creator(1)).unwrap();
        assert_eq!(plain.fill_color(), Some(PLAIN_FILL));
    }
}
