use crate::graph::traits::{Graph, MutableGraph};
use num_traits::{Float, Zero};
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

/// A weighted undirected graph of named villages using adjacency lists
#[derive(Debug, Clone)]
pub struct VillageGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Display names of registered villages: village_id -> name
    names: HashMap<usize, String>,

    /// Registration order of village identifiers
    order: Vec<usize>,

    /// Adjacency entries for each village: village_id -> [(neighbor, weight)].
    /// Every undirected road is recorded once per direction.
    adjacency: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> VillageGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        VillageGraph {
            names: HashMap::new(),
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty graph with capacity for the given number of villages
    pub fn with_capacity(villages: usize) -> Self {
        VillageGraph {
            names: HashMap::with_capacity(villages),
            order: Vec::with_capacity(villages),
            adjacency: HashMap::with_capacity(villages),
        }
    }
}

impl<W> Graph<W> for VillageGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.order.len()
    }

    fn edge_count(&self) -> usize {
        // Canonicalize each road as (smaller id, larger id) so both directed
        // adjacency entries, and any parallel roads, collapse to one pair.
        let mut pairs: HashSet<(usize, usize)> = HashSet::new();
        for (&u, edges) in &self.adjacency {
            for &(v, _) in edges {
                pairs.insert((u.min(v), u.max(v)));
            }
        }
        pairs.len()
    }

    fn node_ids(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.order.iter().copied())
    }

    fn neighbors(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&node) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: usize) -> bool {
        self.names.contains_key(&node)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        if let Some(edges) = self.adjacency.get(&u) {
            edges.iter().any(|(target, _)| *target == v)
        } else {
            false
        }
    }

    fn edge_weight(&self, u: usize, v: usize) -> Option<W> {
        if let Some(edges) = self.adjacency.get(&u) {
            edges
                .iter()
                .find(|(target, _)| *target == v)
                .map(|(_, weight)| *weight)
        } else {
            None
        }
    }

    fn node_name(&self, node: usize) -> String {
        match self.names.get(&node) {
            Some(name) => name.clone(),
            None => format!("Village {}", node),
        }
    }
}

impl<W> MutableGraph<W> for VillageGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_node(&mut self, node: usize, name: &str) {
        if self.names.insert(node, name.to_string()).is_none() {
            self.order.push(node);
        }
        self.adjacency.entry(node).or_default();
    }

    fn add_edge(&mut self, u: usize, v: usize, weight: W) {
        self.adjacency.entry(u).or_default().push((v, weight));
        self.adjacency.entry(v).or_default().push((u, weight));
    }
}
