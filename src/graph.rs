use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;
use log::{debug, trace};
use petgraph::graphmap::DiGraphMap;

use crate::forest::Forest;
use crate::location::Location;
use crate::reach::{shortest_path_lengths, PathLength};

/// Shortest path lengths between the start and herb sites, and between herb sites themselves.
///
/// Nodes are the start and every herb site reachable from somewhere; an edge `a -> b` weighs the
/// number of moves on a shortest grid path from `a` to `b`. There are no edges back to the start:
/// movement is symmetric, so the way home reuses the weight of the start's outgoing edge.
#[derive(Clone, Debug)]
pub struct CompressedGraph {
    pub(crate) graph: DiGraphMap<Location, PathLength>,
    pub(crate) start: Location,
}

impl CompressedGraph {
    fn new(start: Location) -> Self {
        let mut graph = DiGraphMap::new();
        graph.add_node(start);
        Self { graph, start }
    }

    fn fill_edges(&mut self, origin: Location, ends: &BTreeMap<Location, PathLength>) {
        for (end, length) in ends {
            self.graph.add_edge(origin, *end, *length);
        }
    }

    fn fill_reciprocal_edges(&mut self, origin: Location, ends: &BTreeMap<Location, PathLength>) {
        for (end, length) in ends {
            self.graph.add_edge(*end, origin, *length);
        }
    }

    pub fn start(&self) -> Location {
        self.start
    }

    /// Outgoing edges of `location` as `(destination, length)` pairs.
    pub fn edges_from(&self, location: Location) -> impl Iterator<Item = (Location, PathLength)> + '_ {
        self.graph.edges(location).map(|(_, to, length)| (to, *length))
    }

    pub fn weight(&self, from: Location, to: Location) -> Option<PathLength> {
        self.graph.edge_weight(from, to).copied()
    }

    /// Length of the way home from `location`, read off the start's outgoing edge.
    pub fn return_length(&self, location: Location) -> Option<PathLength> {
        if location == self.start {
            return Some(0);
        }
        self.weight(self.start, location)
    }

    /// Remove the edge `from -> to`, returning its length if it existed.
    pub fn remove_edge(&mut self, from: Location, to: Location) -> Option<PathLength> {
        self.graph.remove_edge(from, to)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Build the [`CompressedGraph`] of `forest`.
///
/// One search runs from the start to every herb site. Then, for each label in ascending order, one
/// search runs from each of its sites to the sites of strictly greater labels only; each edge found
/// is stored in both directions. Sites of the same label are never connected, since moving between
/// them collects nothing new.
pub fn compressed_paths(forest: &Forest) -> CompressedGraph {
    let mut result = CompressedGraph::new(forest.start());

    let all_sites: BTreeSet<Location> = forest.herbs().keys().copied().collect();
    let from_start = shortest_path_lengths(forest, forest.start(), &all_sites);
    trace!("start {} reaches {} of {} herb sites", forest.start(), from_start.len(), all_sites.len());
    result.fill_edges(forest.start(), &from_start);

    for herb in forest.herb_types().iter() {
        let starts = forest.sites_of(herb).collect_vec();
        let targets: BTreeSet<Location> = forest.herbs().iter()
            .filter(|(_, other)| **other > herb)
            .map(|(location, _)| *location)
            .collect();

        for start in starts {
            let path_lengths = shortest_path_lengths(forest, start, &targets);
            trace!("{herb} at {start} reaches {} of {} later herb sites", path_lengths.len(), targets.len());
            result.fill_edges(start, &path_lengths);
            result.fill_reciprocal_edges(start, &path_lengths);
        }
    }

    debug!("compressed graph has {} nodes and {} edges", result.node_count(), result.edge_count());
    result
}
