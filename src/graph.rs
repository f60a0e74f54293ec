//! A module for working with diagrams.

use std::collections::BTreeMap;

use nalgebra::DMatrix;

use crate::{
    edge::Edge,
    node::{Node, NodeId},
};

/// Fill applied to peers that haven't been restyled.
pub const PEER_FILL: &str = "#FFEECC";

/// The vertical tier a cluster is pinned to by the layout engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Source,
    Sink,
}

impl Rank {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Sink => "sink",
        }
    }
}

/// One of the two named partitions of a diagram.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cluster {
    Creator,
    Peer,
}

impl Cluster {
    pub const ALL: [Cluster; 2] = [Cluster::Creator, Cluster::Peer];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Peer => "peer",
        }
    }

    /// Creators sit on the top tier, peers on the bottom one.
    pub fn rank(&self) -> Rank {
        match self {
            Self::Creator => Rank::Source,
            Self::Peer => Rank::Sink,
        }
    }

    /// The fill shared by every node of the cluster, `None` leaves the engine default.
    pub fn default_fill(&self) -> Option<&'static str> {
        match self {
            Self::Creator => None,
            Self::Peer => Some(PEER_FILL),
        }
    }

    fn of(id: NodeId) -> Self {
        match id {
            NodeId::Creator(_) => Self::Creator,
            NodeId::Peer(_) => Self::Peer,
        }
    }
}

/// A directed diagram made up of two ranked clusters of nodes and a multiset of edges.
///
/// Edges are kept in insertion order and duplicates are preserved, the layout engine overlays
/// them.
#[derive(Clone, Debug, Default)]
pub struct Diagram {
    /// Creator nodes in declaration order.
    creators: Vec<Node>,
    /// Peer nodes in declaration order.
    peers: Vec<Node>,
    /// The edges in the diagram.
    edges: Vec<Edge<NodeId>>,
    /// A mapping of vertices to their indices to be used when constructing the adjacency matrix.
    ///
    /// The `BTreeMap` keeps the vertices sorted by `NodeId`, creators first.
    index: Option<BTreeMap<NodeId, usize>>,
    /// Cache the adjacency matrix when possible.
    adjacency_matrix: Option<DMatrix<f64>>,
}

impl PartialEq for Diagram {
    /// Diagrams are equal when they declare the same nodes and the same sequence of edges, the
    /// cached state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.creators == other.creators && self.peers == other.peers && self.edges == other.edges
    }
}

impl Diagram {
    /// Creates an empty diagram.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::graph::Diagram;
    ///
    /// let diagram = Diagram::new();
    /// assert_eq!(diagram.node_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the nodes declared in a cluster, in declaration order.
    pub fn cluster(&self, cluster: Cluster) -> &[Node] {
        match cluster {
            Cluster::Creator => &self.creators,
            Cluster::Peer => &self.peers,
        }
    }

    /// Returns every declared node, creators first.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.creators.iter().chain(self.peers.iter())
    }

    /// Declares a node in its cluster. Declaring an existing identifier again replaces its
    /// styling in place and returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::graph::Diagram;
    /// use demograph::node::Node;
    ///
    /// let mut diagram = Diagram::new();
    /// assert_eq!(diagram.insert_node(Node::creator(0)), true);
    /// assert_eq!(diagram.insert_node(Node::creator(0)), false);
    /// assert_eq!(diagram.node_count(), 1);
    /// ```
    pub fn insert_node(&mut self, node: Node) -> bool {
        let id = node.id();
        let is_new = !self.contains_node(id);

        let nodes = match Cluster::of(id) {
            Cluster::Creator => &mut self.creators,
            Cluster::Peer => &mut self.peers,
        };

        match nodes.iter_mut().find(|n| n.id() == id) {
            Some(existing) => *existing = node,
            None => nodes.push(node),
        }

        // A new vertex changes the shape of the matrix.
        if is_new {
            self.clear_cache()
        }

        is_new
    }

    /// Returns a declared node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.cluster(Cluster::of(id)).iter().find(|n| n.id() == id)
    }

    /// Returns a declared node for restyling.
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let nodes = match Cluster::of(id) {
            Cluster::Creator => &mut self.creators,
            Cluster::Peer => &mut self.peers,
        };

        nodes.iter_mut().find(|n| n.id() == id)
    }

    /// Checks if the node has been declared.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Returns the edges in insertion order.
    pub fn edges(&self) -> &[Edge<NodeId>] {
        &self.edges
    }

    /// Appends an edge to the diagram, duplicates are kept.
    pub fn insert(&mut self, edge: Edge<NodeId>) {
        self.edges.push(edge);

        // Delete the cached objects because we can't reliably update them from the new
        // connection alone.
        if self.index.is_some() {
            self.clear_cache()
        }
    }

    /// Inserts a subset of `(leaf, hub)` edges into the diagram, routing every leaf to the hub.
    pub fn insert_subset(&mut self, hub: NodeId, leaves: &[NodeId]) {
        for leaf in leaves {
            self.insert(Edge::new(*leaf, hub));
        }
    }

    /// Checks if at least one edge connects `source` to `target`.
    pub fn contains(&self, source: NodeId, target: NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(&source, &target))
    }

    /// Returns the number of parallel edges connecting `source` to `target`.
    pub fn multiplicity(&self, source: NodeId, target: NodeId) -> usize {
        self.edges
            .iter()
            .filter(|e| e.connects(&source, &target))
            .count()
    }

    /// Returns the number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.creators.len() + self.peers.len()
    }

    /// Returns the edge count of the diagram, parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the number of edges pointing at the node.
    pub fn in_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| *e.target() == id).count()
    }

    /// Returns the number of edges leaving the node.
    pub fn out_degree(&self, id: NodeId) -> usize {
        self.edges.iter().filter(|e| *e.source() == id).count()
    }

    /// Returns `(source, target, color)` for every edge, in insertion order.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    /// use demograph::graph::Diagram;
    /// use demograph::node::NodeId;
    ///
    /// let mut diagram = Diagram::new();
    /// diagram.insert(Edge::new(NodeId::Creator(0), NodeId::Peer(0)).with_color("#FF8822"));
    ///
    /// assert_eq!(
    ///     diagram.edge_triples(),
    ///     vec![("C0".to_owned(), "P0".to_owned(), Some("#FF8822".to_owned()))]
    /// );
    /// ```
    pub fn edge_triples(&self) -> Vec<(String, String, Option<String>)> {
        self.edges
            .iter()
            .map(|e| {
                (
                    e.source().to_string(),
                    e.target().to_string(),
                    e.color().map(str::to_owned),
                )
            })
            .collect()
    }

    /// Returns the position of a vertex in the rows and columns of the adjacency matrix.
    pub fn index_of(&mut self, id: NodeId) -> Option<usize> {
        if self.index.is_none() {
            self.generate_index();
        }

        self.index.as_ref().and_then(|index| index.get(&id).copied())
    }

    /// Constructs the adjacency matrix for this diagram.
    ///
    /// Rows are sources and columns are targets, each entry counts the parallel edges between
    /// the pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use demograph::edge::Edge;
    /// use demograph::graph::Diagram;
    /// use demograph::node::NodeId;
    ///
    /// let (a, b) = (NodeId::Creator(0), NodeId::Creator(1));
    ///
    /// let mut diagram = Diagram::new();
    /// diagram.insert(Edge::new(a, b));
    /// diagram.insert(Edge::new(a, b));
    /// assert_eq!(
    ///     diagram.adjacency_matrix(),
    ///     dmatrix![0.0, 2.0;
    ///              0.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.adjacency_matrix.clone() {
            return matrix;
        }

        if self.index.is_none() {
            self.generate_index();
        }

        let index = match self.index.as_ref() {
            Some(index) => index,
            None => return DMatrix::zeros(0, 0),
        };

        let n = index.len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // Every endpoint is present as the index was generated from this set of edges.
        for edge in &self.edges {
            if let (Some(i), Some(j)) = (index.get(edge.source()), index.get(edge.target())) {
                matrix[(*i, *j)] += 1.0;
            }
        }

        // Cache the matrix.
        self.adjacency_matrix = Some(matrix.clone());

        matrix
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This should be called every time the set of vertices or edges is mutated since the cached
    /// state won't correspond to the new diagram.
    fn clear_cache(&mut self) {
        self.index = None;
        self.adjacency_matrix = None;
    }

    /// Constructs and stores an index of the declared vertices and the edge endpoints.
    ///
    /// The index will be sorted by `NodeId`'s implementation of `Ord`.
    fn generate_index(&mut self) {
        // It should be impossible to call this function if the cache is not empty.
        debug_assert!(self.index.is_none());

        let mut vertices: Vec<NodeId> = self
            .nodes()
            .map(Node::id)
            .chain(self.edges.iter().flat_map(|e| [*e.source(), *e.target()]))
            .collect();
        vertices.sort();
        vertices.dedup();

        let index: BTreeMap<NodeId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();

        self.index = Some(index);
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::dmatrix;

    use super::*;

    macro_rules! diagram {
          ($($path:expr),*) => {{
              let mut diagram = Diagram::new();

              $(
                  let mut iter = $path.into_iter().peekable();
                  while let (Some(a), Some(b)) = (iter.next(), iter.peek()) {
                      diagram.insert(Edge::new(a, *b));
                  }

              )*

              diagram
          }}
      }

    const C0: NodeId = NodeId::Creator(0);
    const C1: NodeId = NodeId::Creator(1);
    const C2: NodeId = NodeId::Creator(2);
    const P0: NodeId = NodeId::Peer(0);

    #[test]
    fn new() {
        let diagram = Diagram::new();

        assert!(diagram.cluster(Cluster::Creator).is_empty());
        assert!(diagram.cluster(Cluster::Peer).is_empty());
        assert_eq!(diagram.edge_count(), 0);
    }

    #[test]
    fn cluster_ranks() {
        assert_eq!(Cluster::Creator.rank(), Rank::Source);
        assert_eq!(Cluster::Peer.rank(), Rank::Sink);
        assert_eq!(Cluster::Creator.name(), "creator");
        assert_eq!(Cluster::Peer.name(), "peer");
        assert_eq!(Cluster::Peer.default_fill(), Some(PEER_FILL));
    }

    #[test]
    fn insert_node() {
        let mut diagram = Diagram::new();

        assert!(diagram.insert_node(Node::creator(0)));
        assert!(diagram.insert_node(Node::peer(0)));
        assert_eq!(diagram.cluster(Cluster::Creator).len(), 1);
        assert_eq!(diagram.cluster(Cluster::Peer).len(), 1);

        // Redeclaring restyles in place without reordering.
        assert!(diagram.insert_node(Node::creator(1)));
        let mut restyled = Node::creator(0);
        restyled.set_fill_color("#FFCC33");
        assert!(!diagram.insert_node(restyled));

        let creators = diagram.cluster(Cluster::Creator);
        assert_eq!(creators[0].fill_color(), Some("#FFCC33"));
        assert_eq!(creators[1].id(), C1);
    }

    #[test]
    fn node_mut() {
        let mut diagram = Diagram::new();
        diagram.insert_node(Node::creator(0));

        diagram
            .node_mut(C0)
            .expect("node was declared")
            .set_fill_color("#FF4444");

        assert_eq!(diagram.node(C0).unwrap().fill_color(), Some("#FF4444"));
        assert!(diagram.node_mut(C1).is_none());
    }

    #[test]
    fn insert_keeps_duplicates() {
        let mut diagram = Diagram::new();
        diagram.insert(Edge::new(C0, C1));
        diagram.insert(Edge::new(C0, C1));

        assert_eq!(diagram.edge_count(), 2);
        assert_eq!(diagram.multiplicity(C0, C1), 2);
        assert_eq!(diagram.multiplicity(C1, C0), 0);
    }

    #[test]
    fn insert_subset() {
        let mut diagram = Diagram::new();
        diagram.insert_subset(C2, &[C0, C1, C2]);

        assert_eq!(diagram.in_degree(C2), 3);
        assert!(diagram.contains(C0, C2));
        assert!(diagram.contains(C2, C2));
        assert!(!diagram.contains(C2, C0));
    }

    #[test]
    fn degrees() {
        let diagram = diagram!([C0, C1, C2], [C0, P0]);

        assert_eq!(diagram.out_degree(C0), 2);
        assert_eq!(diagram.in_degree(C0), 0);
        assert_eq!(diagram.in_degree(C1), 1);
        assert_eq!(diagram.in_degree(P0), 1);
    }

    #[test]
    fn edge_triples() {
        let mut diagram = diagram!([C0, C1]);
        diagram.insert(Edge::new(C1, P0).with_color("#FF8822"));

        assert_eq!(
            diagram.edge_triples(),
            vec![
                ("C0".to_owned(), "C1".to_owned(), None),
                ("C1".to_owned(), "P0".to_owned(), Some("#FF8822".to_owned())),
            ]
        );
    }

    #[test]
    fn adjacency_matrix() {
        let mut diagram = Diagram::new();
        assert_eq!(diagram.adjacency_matrix(), DMatrix::<f64>::zeros(0, 0));

        diagram.insert(Edge::new(C0, C1));
        assert_eq!(
            diagram.adjacency_matrix(),
            dmatrix![0.0, 1.0;
                     0.0, 0.0]
        );

        // Peers index after creators regardless of insertion order.
        diagram.insert(Edge::new(P0, C0));
        diagram.insert(Edge::new(C1, C1));
        assert_eq!(
            diagram.adjacency_matrix(),
            dmatrix![0.0, 1.0, 0.0;
                     0.0, 1.0, 0.0;
                     1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn adjacency_matrix_includes_isolated_nodes() {
        let mut diagram = diagram!([C0, C1]);
        diagram.insert_node(Node::peer(0));

        assert_eq!(diagram.index_of(P0), Some(2));
        assert_eq!(
            diagram.adjacency_matrix(),
            dmatrix![0.0, 1.0, 0.0;
                     0.0, 0.0, 0.0;
                     0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn cache_is_cleared_on_insert() {
        let mut diagram = diagram!([C0, C1]);
        let before = diagram.adjacency_matrix();

        diagram.insert(Edge::new(C1, C0));
        let after = diagram.adjacency_matrix();

        assert_ne!(before, after);
        assert_eq!(after[(1, 0)], 1.0);
    }

    #[test]
    fn equality_ignores_cache() {
        let mut a = diagram!([C0, C1, C2]);
        let b = diagram!([C0, C1, C2]);
        a.adjacency_matrix();

        assert_eq!(a, b);
    }
}
