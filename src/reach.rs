use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::forest::Forest;
use crate::location::Location;
use crate::shape::Step;

/// Number of tile-to-tile moves along a path.
pub type PathLength = u64;

/// Anything that can say which tiles may be walked through.
pub trait Walkable {
    fn is_open(&self, location: Location) -> bool;
}

impl Walkable for Forest {
    fn is_open(&self, location: Location) -> bool {
        Forest::is_open(self, location)
    }
}

impl Walkable for HashSet<Location> {
    fn is_open(&self, location: Location) -> bool {
        self.contains(&location)
    }
}

impl Walkable for BTreeSet<Location> {
    fn is_open(&self, location: Location) -> bool {
        self.contains(&location)
    }
}

/// Breadth-first search from `source`, returning the shortest path length to every target it reaches.
///
/// Expansion stops as soon as every target has been found. Targets that cannot be reached are
/// absent from the result, as is `source` itself.
pub fn shortest_path_lengths(
    open_tiles: &impl Walkable,
    source: Location,
    targets: &BTreeSet<Location>,
) -> BTreeMap<Location, PathLength> {
    let mut result = BTreeMap::new();
    let wanted = targets.iter().filter(|target| **target != source).count();

    let mut explored = HashSet::from([source]);
    let mut front = vec![source];
    let mut path_length: PathLength = 1;

    // one layer per iteration, so every location in `front` is `path_length - 1` moves away
    while !front.is_empty() && result.len() < wanted {
        let mut next_front = Vec::new();

        for current in front {
            for (_, next) in Step::neighbors_of(current) {
                if open_tiles.is_open(next) && explored.insert(next) {
                    if targets.contains(&next) {
                        result.insert(next, path_length);
                    }
                    next_front.push(next);
                }
            }
        }

        path_length += 1;
        front = next_front;
    }

    result
}
