//! Demograph builds small illustrative diagrams of a p2p network made of two layers, "creators"
//! and "peers", and renders them to images through Graphviz.
//!
//! # Basic usage
//!
//! The library is centered around the [`Diagram`](graph::Diagram) structure, which holds two
//! ranked clusters of [`Node`](node::Node) instances and a multiset of directed
//! [`Edge`](edge::Edge) instances. The [`builder`] passes populate a diagram, the [`dot`] module
//! serializes it and the [`Renderer`](render::Renderer) hands it to the layout engine.
//!
//! ```rust
//! use demograph::builder::{self, ColorPolicy};
//! use demograph::dot::Dot;
//! use demograph::node::NodeId;
//!
//! // Ten creators on the top tier, four peers on the bottom tier.
//! let mut diagram = builder::build_base_graph(10, 4);
//!
//! // Every creator publishes to a peer, then the creators form a ring.
//! builder::add_creator_to_peer_edges(&mut diagram, &ColorPolicy::default());
//! builder::add_creator_ring_edges(&mut diagram);
//!
//! assert_eq!(diagram.out_degree(NodeId::Creator(0)), 5);
//! assert_eq!(diagram.node(NodeId::Peer(0)).unwrap().label(), "root");
//!
//! // The DOT source can be inspected before rendering...
//! let source = Dot::new(&diagram).to_string();
//! assert!(source.contains("C0 -> P0"));
//! ```
//!
//! The [`Storyboard`](storyboard::Storyboard) replays the passes in three named stages and
//! renders one image per stage.

pub mod builder;
pub mod config;
pub mod dot;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod pagerank;
pub mod render;
pub mod storyboard;

pub use error::{Error, Result};
