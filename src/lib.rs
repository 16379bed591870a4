#![warn(missing_docs)]

//! # `herbalist`
//!
//! A planner for the shortest herb-gathering tour through a forest: start from the single open tile on the
//! first row, pick at least one herb of every kind, and come back.
//! Begin by parsing a [`Forest`] from text (or building one with a [`ForestBuilder`](builder::ForestBuilder)),
//! then call [`solve()`] for the length of the shortest tour.
//!
//! # Internals
//! Walking the grid tile by tile while tracking which herbs have been picked blows up quickly, so the
//! grid is first compressed into a small graph and the combinatorial part runs on that instead.
//!
//! 1. Breadth-first searches over the open tiles ([`reach::shortest_path_lengths`]) measure how far
//! apart the start and the herb sites are. Searches from a herb only look for herbs of later kinds,
//! and every distance found is stored in both directions ([`graph::compressed_paths`]).
//! 2. A search state is a location together with the set of kinds picked so far, kept as a bitmask
//! ([`HerbSet`]). How a state was reached does not matter, only its cheapest cost, so each round
//! keeps one cost per state. Every round picks exactly one new kind, so there is one round per kind
//! ([`solver::TourSolver`]).
//! 3. The tour closes by walking back from the last herb to the start, whose length is read off the
//! start's own outgoing edge. This relies on moves costing the same in both directions.

pub use forest::{Forest, ParseError};
pub use herb::{Herb, HerbSet};
pub use location::Location;
pub use reach::PathLength;
pub use solver::{solve, PlanError};

pub(crate) mod cell;
pub(crate) mod location;
pub(crate) mod shape;
mod tests;
pub mod builder;
pub mod forest;
pub mod graph;
pub mod herb;
pub mod reach;
pub mod solver;
