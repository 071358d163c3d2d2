use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::data_structures::MinHeap;
use crate::graph::Graph;
use crate::Result;

/// Classic Dijkstra's algorithm with lazy deletion.
///
/// The heap has no decrease-key operation; every relaxation pushes a fresh
/// entry and outdated ones are recognized on pop, either by the visited set
/// or by carrying a key larger than the node's best known distance.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_shortest_path(&self, graph: &G, start: usize, end: usize) -> Result<PathResult<W>> {
        // Only registered nodes take part in the search; an edge may
        // reference an unregistered identifier, but such a node can never
        // be an endpoint or an intermediate hop.
        let mut distance: HashMap<usize, W> =
            graph.node_ids().map(|v| (v, W::infinity())).collect();

        if !distance.contains_key(&start) || !distance.contains_key(&end) {
            return Ok(PathResult::not_found());
        }
        distance.insert(start, W::zero());

        let mut parent: HashMap<usize, usize> = HashMap::new();
        let mut visited: HashSet<usize> = HashSet::new();

        let mut queue = MinHeap::new();
        queue.push(W::zero(), start);

        while !queue.is_empty() {
            let (current_dist, current) = queue.pop()?;

            // Stale duplicate of an already finalized node
            if !visited.insert(current) {
                continue;
            }

            // With non-negative weights the distance of a popped node is
            // final, so the target can stop the search early.
            if current == end {
                break;
            }

            // Stale entry that predates a better path to this node
            if current_dist > distance[&current] {
                continue;
            }

            for (neighbor, weight) in graph.neighbors(current) {
                let best = match distance.get(&neighbor) {
                    Some(&best) => best,
                    None => continue,
                };

                let candidate = current_dist + weight;
                if candidate < best {
                    distance.insert(neighbor, candidate);
                    parent.insert(neighbor, current);
                    queue.push(candidate, neighbor);
                }
            }
        }

        let total = distance[&end];
        if total == W::infinity() {
            return Ok(PathResult::not_found());
        }

        Ok(PathResult::found(total, reconstruct_path(&parent, start, end)))
    }
}

/// Walks the parent map backward from the end node, then reverses the
/// collected sequence into start-to-end order.
fn reconstruct_path(parent: &HashMap<usize, usize>, start: usize, end: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut current = end;

    loop {
        path.push(current);
        if current == start {
            break;
        }
        match parent.get(&current) {
            Some(&predecessor) => current = predecessor,
            None => break,
        }
    }

    path.reverse();
    path
}
