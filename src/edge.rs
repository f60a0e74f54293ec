//! A module for working with edges.

/// A directed pair of vertices with optional styling. Unlike a set of connections, the order
/// matters: `a -> b` and `b -> a` are distinct edges.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T> {
    source: T,
    target: T,
    color: Option<String>,
    /// Layout hint, lower values let the engine stretch the edge.
    weight: Option<f64>,
}

impl<T> Edge<T> {
    /// Creates a new unstyled edge from two vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_ne!(edge, Edge::new("b", "a"));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self {
            source,
            target,
            color: None,
            weight: None,
        }
    }

    /// Sets the color the edge is drawn with.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b").with_color("#FF8822");
    /// assert_eq!(edge.color(), Some("#FF8822"));
    /// ```
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Sets the layout weight hint of the edge.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns the vertex the edge starts from.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex the edge points to.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.target(), &"b");
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// Returns whether the edge contains the given vertex at either end.
    ///
    /// # Examples
    ///
    /// ```
    /// use demograph::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    ///
    /// assert_eq!(edge.contains(&"a"), true);
    /// assert_eq!(edge.contains(&"b"), true);
    /// assert_eq!(edge.contains(&"c"), false);
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Returns whether the edge connects `source` to `target`, in that direction.
    pub fn connects(&self, source: &T, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == source && self.target() == target
    }

    /// Returns whether the edge starts and ends on the same vertex.
    pub fn is_loop(&self) -> bool
    where
        T: PartialEq,
    {
        self.source == self.target
    }
}
