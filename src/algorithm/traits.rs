use crate::graph::Graph;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Outcome of a single shortest path query.
///
/// On success `path` runs from the start node to the end node inclusive and
/// `distance` is the summed weight of its edges. When no path exists,
/// `success` is false, the distance is zero and the path is empty.
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Whether a path between the endpoints was found
    pub success: bool,

    /// Total weight of the path
    pub distance: W,

    /// Node identifiers along the path, start first
    pub path: Vec<usize>,
}

impl<W> PathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// A successful result with the given distance and path
    pub fn found(distance: W, path: Vec<usize>) -> Self {
        PathResult {
            success: true,
            distance,
            path,
        }
    }

    /// The "no path exists" outcome
    pub fn not_found() -> Self {
        PathResult {
            success: false,
            distance: W::zero(),
            path: Vec::new(),
        }
    }
}

/// Trait for single-pair shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Computes the shortest path from `start` to `end`.
    ///
    /// An unreachable or unregistered endpoint is a normal
    /// [`PathResult::not_found`] outcome, not an error.
    fn find_shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<PathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
