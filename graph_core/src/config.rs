//! Configuration for graph construction.

/// Configuration fixed at [`Graph`](crate::Graph) construction time.
///
/// `weighted` controls whether `add_edge` honors the supplied weight
/// (unweighted graphs force every weight to `1.0`); `directed` controls
/// whether an edge is one arc or a symmetric pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphConfig {
    pub weighted: bool,
    pub directed: bool,
}

impl GraphConfig {
    /// Unweighted, undirected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn weighted(mut self, weighted: bool) -> Self {
        self.weighted = weighted;
        self
    }

    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}
