use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use itertools::Itertools;
use ndarray::Array2;
use thiserror::Error;

use crate::cell::Tile;
use crate::herb::{Herb, HerbSet};
use crate::location::Location;

/// Reasons a forest may fail to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input has no rows, or only empty ones.
    #[error("forest is empty")]
    Empty,
    /// The first row has no open tile to start from.
    #[error("no open tile on the first row to start from")]
    MissingStart,
    /// The first row has more than one open tile, so the start is not unique.
    #[error("more than one open tile on the first row: {first} and {second}")]
    AmbiguousStart { first: Location, second: Location },
}

/// A forest of walkable tiles, some of which carry herbs.
///
/// Forests are immutable once built, either by parsing (see [`FromStr`]) or through a
/// [`ForestBuilder`](crate::builder::ForestBuilder).
#[derive(Clone, Debug)]
pub struct Forest {
    pub(crate) tiles: Array2<Tile>,
    pub(crate) herbs: BTreeMap<Location, Herb>,
    pub(crate) start: Location,
    pub(crate) herb_types: HerbSet,
}

impl Forest {
    // herb sites and the label set are derived from the tiles so they never disagree
    pub(crate) fn from_tiles(tiles: Array2<Tile>, start: Location) -> Self {
        let herbs: BTreeMap<Location, Herb> = tiles.indexed_iter()
            .filter_map(|(index, tile)| match tile {
                Tile::Herb { herb } => Some((Location::from(index), *herb)),
                _ => None,
            })
            .collect();
        let herb_types = herbs.values().copied().collect();

        Self { tiles, herbs, start, herb_types }
    }

    /// The tile every tour starts from and returns to.
    pub fn start(&self) -> Location {
        self.start
    }

    /// Every herb site, keyed by location.
    pub fn herbs(&self) -> &BTreeMap<Location, Herb> {
        &self.herbs
    }

    pub fn herb_at(&self, location: Location) -> Option<Herb> {
        self.herbs.get(&location).copied()
    }

    /// The set of distinct herb labels present in this forest.
    pub fn herb_types(&self) -> HerbSet {
        self.herb_types
    }

    pub fn herb_type_count(&self) -> usize {
        self.herb_types.len()
    }

    /// Locations of every site bearing `herb`, in ascending order.
    pub fn sites_of(&self, herb: Herb) -> impl Iterator<Item = Location> + '_ {
        self.herbs.iter()
            .filter(move |(_, site_herb)| **site_herb == herb)
            .map(|(location, _)| *location)
    }

    /// `(rows, columns)`
    pub fn dims(&self) -> (usize, usize) {
        self.tiles.dim()
    }

    pub fn is_open(&self, location: Location) -> bool {
        self.tiles.get(location.as_index()).is_some_and(Tile::is_open)
    }
}

impl FromStr for Forest {
    type Err = ParseError;

    /// Parse a forest where `.` is open floor, `A`..=`Z` are herb sites and anything else is impassable.
    ///
    /// The single open tile on the first row is the start. Rows shorter than the widest one are padded
    /// with impassable tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s.lines().collect_vec();
        let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
        if width == 0 {
            return Err(ParseError::Empty);
        }

        let mut tiles = Array2::from_elem((lines.len(), width), Tile::Blocked);
        let mut start = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, display) in line.chars().enumerate() {
                let location = Location(row, col);
                let tile = Tile::from_char(display);
                if row == 0 && tile == Tile::Open {
                    if let Some(first) = start.replace(location) {
                        return Err(ParseError::AmbiguousStart { first, second: location });
                    }
                }
                tiles[location.as_index()] = tile;
            }
        }

        let start = start.ok_or(ParseError::MissingStart)?;
        Ok(Self::from_tiles(tiles, start))
    }
}

impl Display for Forest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.rows() {
            for tile in row {
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
