//! The passes that populate a diagram.
//!
//! Each pass appends edges to the diagram and may restyle nodes declared by an earlier pass.
//! Passes are deterministic: replaying the same sequence on a fresh base graph always yields the
//! same edges in the same order.

use crate::{
    edge::Edge,
    graph::{Cluster, Diagram},
    node::{Node, NodeId},
};

/// Color of the edges from creators to peers.
pub const PUBLISH_COLOR: &str = "#FF8822";
/// Layout weight of the edges from creators to peers, low enough to let the tiers spread.
pub const PUBLISH_WEIGHT: f64 = 0.1;
/// Fill of the creators highlighted by the ring pass.
pub const RING_HIGHLIGHT: &str = "#FFCC33";
/// Fill of the winners, and color of their edges to peers.
pub const WINNER_COLOR: &str = "#FF4444";

/// Ring offsets paired with the exclusive bound on the creator index receiving them, `None`
/// meaning every creator.
const RING_OFFSETS: [(usize, Option<usize>); 4] =
    [(1, None), (2, Some(8)), (3, Some(6)), (4, Some(4))];
/// Creators above this index are highlighted by the ring pass.
const RING_HIGHLIGHT_ABOVE: usize = 5;
/// The creators the lower and upper halves converge on.
const HUBS: [usize; 2] = [2, 4];
/// The creators marked as winners once the network has converged.
pub const WINNERS: [usize; 4] = [2, 4, 6, 7];

/// Chooses the color of each creator-to-peer edge from the creator's index.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorPolicy {
    /// Every edge gets the same color.
    Uniform(String),
    /// Creators above `threshold` get `highlight`, the others get `base`.
    Threshold {
        threshold: usize,
        base: String,
        highlight: String,
    },
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::Uniform(PUBLISH_COLOR.to_owned())
    }
}

impl ColorPolicy {
    /// Returns the color for the edge leaving creator `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::builder::ColorPolicy;
    ///
    /// let policy = ColorPolicy::Threshold {
    ///     threshold: 5,
    ///     base: "black".to_owned(),
    ///     highlight: "red".to_owned(),
    /// };
    ///
    /// assert_eq!(policy.color(5), "black");
    /// assert_eq!(policy.color(6), "red");
    /// ```
    pub fn color(&self, index: usize) -> &str {
        match self {
            Self::Uniform(color) => color,
            Self::Threshold {
                threshold,
                base,
                highlight,
            } => {
                if index > *threshold {
                    highlight
                } else {
                    base
                }
            }
        }
    }
}

/// Creates the two ranked partitions and populates them with plainly labeled nodes, the first
/// peer is labeled as the root.
///
/// # Examples
///
/// ```
/// use demograph::builder;
/// use demograph::graph::Cluster;
///
/// let diagram = builder::build_base_graph(10, 4);
///
/// assert_eq!(diagram.cluster(Cluster::Creator).len(), 10);
/// assert_eq!(diagram.cluster(Cluster::Peer)[0].label(), "root");
/// assert_eq!(diagram.edge_count(), 0);
/// ```
pub fn build_base_graph(creator_count: usize, peer_count: usize) -> Diagram {
    let mut diagram = Diagram::new();

    for i in 0..creator_count {
        diagram.insert_node(Node::creator(i));
    }

    for i in 0..peer_count {
        diagram.insert_node(Node::peer(i));
    }

    diagram
}

/// Connects each creator `i` to peer `i mod peer_count`.
///
/// Does nothing when the diagram has no peers.
pub fn add_creator_to_peer_edges(diagram: &mut Diagram, policy: &ColorPolicy) {
    let (creator_count, peer_count) = counts(diagram);
    if peer_count == 0 {
        return;
    }

    for i in 0..creator_count {
        let edge = Edge::new(NodeId::Creator(i), NodeId::Peer(i % peer_count))
            .with_color(policy.color(i))
            .with_weight(PUBLISH_WEIGHT);
        diagram.insert(edge);
    }
}

/// Links the creators into overlapping rings of increasing stride, the longer strides reaching
/// fewer creators, then highlights the high-index creators.
pub fn add_creator_ring_edges(diagram: &mut Diagram) {
    let (creator_count, _) = counts(diagram);

    for i in 0..creator_count {
        for (offset, bound) in RING_OFFSETS {
            if bound.map_or(true, |bound| i < bound) {
                let target = NodeId::Creator((i + offset) % creator_count);
                diagram.insert(Edge::new(NodeId::Creator(i), target));
            }
        }

        if i > RING_HIGHLIGHT_ABOVE {
            if let Some(node) = diagram.node_mut(NodeId::Creator(i)) {
                node.set_fill_color(RING_HIGHLIGHT);
            }
        }
    }
}

/// Routes the lower half of the creators to the first hub and the upper half to the second, then
/// marks the winners and links each of them to a peer.
///
/// Hubs and winners missing from a smaller diagram are skipped.
pub fn add_convergence_edges(diagram: &mut Diagram) {
    let (creator_count, peer_count) = counts(diagram);
    let half = creator_count / 2;

    let halves = [0..half, half..creator_count];
    for (hub, leaves) in HUBS.iter().zip(halves) {
        if *hub >= creator_count {
            continue;
        }

        let leaves: Vec<NodeId> = leaves.map(NodeId::Creator).collect();
        diagram.insert_subset(NodeId::Creator(*hub), &leaves);
    }

    for (k, winner) in WINNERS.iter().enumerate() {
        let id = NodeId::Creator(*winner);
        let Some(node) = diagram.node_mut(id) else {
            continue;
        };
        node.set_fill_color(WINNER_COLOR);

        if peer_count > 0 {
            diagram.insert(Edge::new(id, NodeId::Peer(k % peer_count)).with_color(WINNER_COLOR));
        }
    }
}

/// Returns the number of declared creators and peers.
fn counts(diagram: &Diagram) -> (usize, usize) {
    (
        diagram.cluster(Cluster::Creator).len(),
        diagram.cluster(Cluster::Peer).len(),
    )
}
