//! Serialization of diagrams to Graphviz DOT.

use std::fmt;

use itertools::Itertools;

use crate::{
    graph::{Cluster, Diagram},
    node::Node,
};

/// A displayable DOT rendition of a diagram.
///
/// Each cluster becomes a named subgraph carrying its rank constraint and the node defaults,
/// edges are listed afterwards in insertion order.
///
/// # Examples
///
/// ```
/// use demograph::builder;
/// use demograph::dot::Dot;
///
/// let diagram = builder::build_base_graph(1, 1);
///
/// assert_eq!(
///     Dot::new(&diagram).to_string(),
///     "digraph {\n\
///      \tsubgraph creator {\n\
///      \t\tgraph [rank=source]\n\
///      \t\tnode [shape=circle style=filled]\n\
///      \t\tC0 [label=\"C0\"]\n\
///      \t}\n\
///      \tsubgraph peer {\n\
///      \t\tgraph [rank=sink]\n\
///      \t\tnode [fillcolor=\"#FFEECC\" shape=trapezium style=filled]\n\
///      \t\tP0 [label=\"root\"]\n\
///      \t}\n\
///      }\n"
/// );
/// ```
pub struct Dot<'a> {
    diagram: &'a Diagram,
}

impl<'a> Dot<'a> {
    pub fn new(diagram: &'a Diagram) -> Self {
        Self { diagram }
    }
}

impl fmt::Display for Dot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;

        for cluster in Cluster::ALL {
            let nodes = self.diagram.cluster(cluster);
            if nodes.is_empty() {
                continue;
            }

            writeln!(f, "\tsubgraph {} {{", cluster.name())?;
            writeln!(f, "\t\tgraph [rank={}]", cluster.rank().as_str())?;

            // Every node of a cluster shares its shape.
            let shape = nodes[0].shape().as_str();
            match cluster.default_fill() {
                Some(fill) => writeln!(
                    f,
                    "\t\tnode [fillcolor={} shape={shape} style=filled]",
                    quote(fill)
                )?,
                None => writeln!(f, "\t\tnode [shape={shape} style=filled]")?,
            }

            for node in nodes {
                writeln!(f, "\t\t{} [{}]", node.id(), node_attributes(node))?;
            }

            writeln!(f, "\t}}")?;
        }

        for edge in self.diagram.edges() {
            let mut attributes = vec![];
            if let Some(color) = edge.color() {
                attributes.push(format!("color={}", quote(color)));
            }
            if let Some(weight) = edge.weight() {
                attributes.push(format!("weight={weight}"));
            }

            if attributes.is_empty() {
                writeln!(f, "\t{} -> {}", edge.source(), edge.target())?;
            } else {
                writeln!(
                    f,
                    "\t{} -> {} [{}]",
                    edge.source(),
                    edge.target(),
                    attributes.iter().join(" ")
                )?;
            }
        }

        writeln!(f, "}}")
    }
}

fn node_attributes(node: &Node) -> String {
    let mut attributes = vec![format!("label={}", quote(node.label()))];

    if let Some(fill) = node.fill_color() {
        attributes.push(format!("fillcolor={}", quote(fill)));
    }
    if let Some(width) = node.width() {
        attributes.push(format!("width={width}"));
    }
    if let Some(font_size) = node.font_size() {
        attributes.push(format!("fontsize={font_size}"));
    }

    attributes.iter().join(" ")
}

/// Wraps a value in double quotes, escaping the characters DOT treats specially.
fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
