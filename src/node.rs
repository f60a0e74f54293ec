//! A module for working with nodes.

use std::fmt;

/// The label displayed in place of `P0`.
pub const ROOT_LABEL: &str = "root";

/// The identity of a node, a deterministic function of its layer and index.
///
/// Creators sort before peers, and nodes within a layer sort by index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeId {
    Creator(usize),
    Peer(usize),
}

impl NodeId {
    /// Returns the index of the node within its layer.
    pub fn index(&self) -> usize {
        match self {
            Self::Creator(i) | Self::Peer(i) => *i,
        }
    }

    pub fn is_creator(&self) -> bool {
        matches!(self, Self::Creator(_))
    }

    pub fn is_peer(&self) -> bool {
        matches!(self, Self::Peer(_))
    }
}

impl fmt::Display for NodeId {
    /// Formats the identifier as it appears in DOT source.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::node::NodeId;
    ///
    /// assert_eq!(NodeId::Creator(3).to_string(), "C3");
    /// assert_eq!(NodeId::Peer(0).to_string(), "P0");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creator(i) => write!(f, "C{i}"),
            Self::Peer(i) => write!(f, "P{i}"),
        }
    }
}

/// The outline a node is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Circle,
    Trapezium,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Trapezium => "trapezium",
        }
    }
}

/// A node of the diagram and its styling.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    id: NodeId,
    label: String,
    shape: Shape,
    /// Overrides the cluster's default fill when set.
    fill_color: Option<String>,
    width: Option<f64>,
    font_size: Option<u32>,
}

impl Node {
    /// Creates a creator node labeled after its identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::node::{Node, Shape};
    ///
    /// let node = Node::creator(7);
    /// assert_eq!(node.label(), "C7");
    /// assert_eq!(node.shape(), Shape::Circle);
    /// ```
    pub fn creator(index: usize) -> Self {
        Self::plain(NodeId::Creator(index), Shape::Circle)
    }

    /// Creates a peer node, the first peer is labeled as the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::node::Node;
    ///
    /// assert_eq!(Node::peer(0).label(), "root");
    /// assert_eq!(Node::peer(2).label(), "P2");
    /// ```
    pub fn peer(index: usize) -> Self {
        let mut node = Self::plain(NodeId::Peer(index), Shape::Trapezium);
        if index == 0 {
            node.label = ROOT_LABEL.to_owned();
        }

        node
    }

    fn plain(id: NodeId, shape: Shape) -> Self {
        Self {
            id,
            label: id.to_string(),
            shape,
            fill_color: None,
            width: None,
            font_size: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn fill_color(&self) -> Option<&str> {
        self.fill_color.as_deref()
    }

    pub fn width(&self) -> Option<f64> {
        self.width
    }

    pub fn font_size(&self) -> Option<u32> {
        self.font_size
    }

    pub fn set_fill_color(&mut self, color: impl Into<String>) {
        self.fill_color = Some(color.into());
    }

    pub fn set_width(&mut self, width: f64) {
        self.width = Some(width);
    }

    pub fn set_font_size(&mut self, font_size: u32) {
        self.font_size = Some(font_size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creator() {
        for i in 0..10 {
            let node = Node::creator(i);

            assert_eq!(node.id(), NodeId::Creator(i));
            assert_eq!(node.label(), format!("C{i}"));
            assert_eq!(node.shape(), Shape::Circle);
            assert_eq!(node.fill_color(), None);
        }
    }

    #[test]
    fn peer() {
        assert_eq!(Node::peer(0).id().to_string(), "P0");
        assert_eq!(Node::peer(0).label(), ROOT_LABEL);

        for i in 1..4 {
            let node = Node::peer(i);

            assert_eq!(node.label(), format!("P{i}"));
            assert_eq!(node.shape(), Shape::Trapezium);
        }
    }

    #[test]
    fn styling() {
        let mut node = Node::creator(0);
        node.set_fill_color("#FFCC33");
        node.set_width(2.2);
        node.set_font_size(77);

        assert_eq!(node.fill_color(), Some("#FFCC33"));
        assert_eq!(node.width(), Some(2.2));
        assert_eq!(node.font_size(), Some(77));
        // Styling never touches the identity or label.
        assert_eq!(node.label(), "C0");
    }

    #[test]
    fn ordering() {
        let mut ids = vec![NodeId::Peer(0), NodeId::Creator(9), NodeId::Creator(1)];
        ids.sort();

        assert_eq!(
            ids,
            vec![NodeId::Creator(1), NodeId::Creator(9), NodeId::Peer(0)]
        );
    }
}
