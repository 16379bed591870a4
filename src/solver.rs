use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::{debug, info};
use thiserror::Error;

use crate::forest::Forest;
use crate::graph::{compressed_paths, CompressedGraph};
use crate::herb::HerbSet;
use crate::location::Location;
use crate::reach::PathLength;

/// Reasons a tour cannot be planned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// No site of any of `herbs` can be reached, so no tour collects every label.
    #[error("no reachable site bears herb(s) {herbs}")]
    Unreachable { herbs: HerbSet },
    /// Every label can be collected, but none of the ways to do so has a way back to `start`.
    #[error("no way back to the start {start} once every herb is collected")]
    NoWayBack { start: Location },
}

/// A search state: where we stand and which labels have been collected getting there.
///
/// The cheapest way to reach a [`Status`] dominates every other, so nothing about the route itself is kept.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct Status {
    pub(crate) location: Location,
    pub(crate) collected: HerbSet,
}

/// Layered search over `(location, collected labels)` on a [`CompressedGraph`].
///
/// Each round moves every surviving state to a site of a label it has not collected yet, so after
/// one round per distinct label every surviving state has collected them all.
pub struct TourSolver<'a> {
    forest: &'a Forest,
    graph: &'a CompressedGraph,
}

impl<'a> TourSolver<'a> {
    pub fn new(forest: &'a Forest, graph: &'a CompressedGraph) -> Self {
        Self { forest, graph }
    }

    /// Number of rounds [`Self::solve`] runs: one per distinct label.
    pub fn rounds(&self) -> usize {
        self.forest.herb_type_count()
    }

    // labels with at least one site the start has an edge to
    fn reachable_herbs(&self) -> HerbSet {
        self.graph.edges_from(self.forest.start())
            .filter_map(|(to, _)| self.forest.herb_at(to))
            .collect()
    }

    pub(crate) fn initial_front(&self) -> HashMap<Status, PathLength> {
        HashMap::from([(Status { location: self.forest.start(), collected: HerbSet::EMPTY }, 0)])
    }

    // one round: every state picks one more kind it has not got yet, cheapest cost per state wins
    pub(crate) fn advance(&self, front: &HashMap<Status, PathLength>) -> HashMap<Status, PathLength> {
        let mut next_front = HashMap::new();

        for (status, length) in front {
            for (to, delta) in self.graph.edges_from(status.location) {
                let Some(herb) = self.forest.herb_at(to) else { continue };
                if status.collected.contains(herb) { continue }

                let next = Status { location: to, collected: status.collected.insert(herb) };
                let next_length = length + delta;
                match next_front.entry(next) {
                    Entry::Vacant(entry) => {
                        entry.insert(next_length);
                    }
                    Entry::Occupied(mut entry) => {
                        if next_length < *entry.get() {
                            entry.insert(next_length);
                        }
                    }
                }
            }
        }

        next_front
    }

    /// Find the length of the shortest tour leaving the start, collecting every label, and coming back.
    ///
    /// Path costs must be symmetric: the way home from a site is assumed to be as long as the way
    /// there from the start, which holds for orthogonal unit moves.
    pub fn solve(&self) -> Result<PathLength, PlanError> {
        let all_herbs = self.forest.herb_types();
        let missing = all_herbs.difference(self.reachable_herbs());
        if !missing.is_empty() {
            return Err(PlanError::Unreachable { herbs: missing });
        }

        let mut front = self.initial_front();
        for round in 0..self.rounds() {
            front = self.advance(&front);
            debug!("round {} of {}: {} states", round + 1, self.rounds(), front.len());
        }

        let best = front.iter()
            .filter(|(status, _)| status.collected == all_herbs)
            .filter_map(|(status, length)| self.graph.return_length(status.location).map(|back| length + back))
            .min();

        match best {
            Some(length) => {
                info!("shortest tour collecting {} is {length} moves", all_herbs);
                Ok(length)
            }
            None => {
                let covered = front.keys().fold(HerbSet::EMPTY, |covered, status| covered.union(status.collected));
                let missing = all_herbs.difference(covered);
                if missing.is_empty() {
                    Err(PlanError::NoWayBack { start: self.forest.start() })
                } else {
                    Err(PlanError::Unreachable { herbs: missing })
                }
            }
        }
    }
}

/// Plan the shortest herb-gathering tour of `forest`.
///
/// See [`TourSolver::solve`] for the symmetry precondition.
pub fn solve(forest: &Forest) -> Result<PathLength, PlanError> {
    let graph = compressed_paths(forest);
    TourSolver::new(forest, &graph).solve()
}
