use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted undirected graph with named nodes
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of registered nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges, counting each pair of
    /// endpoints once regardless of how many parallel roads connect them
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the registered node identifiers,
    /// in registration order
    fn node_ids(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over the adjacency entries recorded for a node,
    /// in insertion order. Unknown identifiers yield an empty iterator.
    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the node has been registered
    fn has_node(&self, node: usize) -> bool;

    /// Returns true if there's at least one edge between the two nodes
    fn has_edge(&self, u: usize, v: usize) -> bool;

    /// Gets the weight of an edge between two nodes if one exists.
    /// With parallel edges this is the first-inserted weight, not the minimum.
    fn edge_weight(&self, u: usize, v: usize) -> Option<W>;

    /// Returns the display name of a node, or a synthesized placeholder
    /// for identifiers that were never registered
    fn node_name(&self, node: usize) -> String;
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Registers a node under the given identifier, or renames it if the
    /// identifier is already registered
    fn add_node(&mut self, node: usize, name: &str);

    /// Adds an undirected edge between two nodes with the given weight.
    /// Adjacency lists are created on demand, so the endpoints do not have
    /// to be registered first.
    fn add_edge(&mut self, u: usize, v: usize, weight: W);
}
