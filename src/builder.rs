use ndarray::Array2;

use crate::cell::Tile;
use crate::forest::Forest;
use crate::herb::Herb;
use crate::location::{Dimension, Location};

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuilderInvalidReason {
    /// A feature was placed outside the bounds specified by `dims` on the builder.
    FeatureOutOfBounds,
    /// A herb was given a label outside `A`..=`Z`.
    BadHerbLabel(char),
    /// [`ForestBuilder::build`] was called before any start was set.
    NoStart,
    /// The start was placed on a herb site, or a herb on the start.
    StartOnHerb,
}

/// A builder for forests, for when the layout does not come from text.
///
/// Every tile starts out blocked. Builders mutate themselves while building but can be [`Clone`]d to
/// save their state at some point. Once invalid, a builder ignores every further change.
#[derive(Clone)]
pub struct ForestBuilder {
    // width, height
    dims: (Dimension, Dimension),
    tiles: Array2<Tile>,
    start: Option<Location>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl ForestBuilder {
    /// Construct a new [`Self`] with the specified dimensions, specified in `(width, height)` order.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            tiles: Array2::from_elem((dims.1.get(), dims.0.get()), Tile::Blocked),
            start: None,
            invalid_reasons: Default::default(),
        }
    }

    fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.1.get() && location.1 < self.dims.0.get()
    }

    // records the problem and reports whether building may go on
    fn check_bounds(&mut self, location: Location) -> bool {
        if !self.invalid_reasons.is_empty() {
            return false;
        }

        if !self.in_bounds(location) {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return false;
        }

        true
    }

    /// Make `location` open floor, removing any herb there.
    pub fn open(&mut self, location: Location) -> &mut Self {
        if self.check_bounds(location) {
            self.tiles[location.as_index()] = Tile::Open;
        }

        self
    }

    /// Open every tile in the rectangle spanned by `from` and `to`, both inclusive.
    pub fn open_rect(&mut self, from: Location, to: Location) -> &mut Self {
        if !self.check_bounds(from) || !self.check_bounds(to) {
            return self;
        }

        for row in from.0.min(to.0)..=from.0.max(to.0) {
            for col in from.1.min(to.1)..=from.1.max(to.1) {
                self.tiles[(row, col)] = Tile::Open;
            }
        }

        self
    }

    /// Place a herb labeled `display` at `location`, which becomes walkable.
    ///
    /// May cause the builder to enter a [`BadHerbLabel`](BuilderInvalidReason::BadHerbLabel) invalid state if `display` is not an uppercase letter,
    /// or a [`StartOnHerb`](BuilderInvalidReason::StartOnHerb) one if `location` is the start.
    pub fn add_herb(&mut self, display: char, location: Location) -> &mut Self {
        if !self.check_bounds(location) {
            return self;
        }

        let Some(herb) = Herb::from_char(display) else {
            self.invalid_reasons.push(BuilderInvalidReason::BadHerbLabel(display));
            return self;
        };

        if self.start == Some(location) {
            self.invalid_reasons.push(BuilderInvalidReason::StartOnHerb);
            return self;
        }

        self.tiles[location.as_index()] = Tile::Herb { herb };
        self
    }

    /// Set the start of every tour to `location`, opening it if necessary. A later call moves the start.
    pub fn set_start(&mut self, location: Location) -> &mut Self {
        if !self.check_bounds(location) {
            return self;
        }

        if matches!(self.tiles[location.as_index()], Tile::Herb { .. }) {
            self.invalid_reasons.push(BuilderInvalidReason::StartOnHerb);
            return self;
        }

        self.tiles[location.as_index()] = Tile::Open;
        self.start = Some(location);
        self
    }

    /// Block `location`. Blocking the start unsets it.
    pub fn block(&mut self, location: Location) -> &mut Self {
        if !self.check_bounds(location) {
            return self;
        }

        if self.start == Some(location) {
            self.start = None;
        }
        self.tiles[location.as_index()] = Tile::Blocked;
        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`Forest`].
    /// If the builder is invalid for any reason, or has no start, a [`Vec`] of [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<Forest, Vec<BuilderInvalidReason>> {
        if let Some(reasons) = self.is_valid() {
            return Err(reasons.clone());
        }

        match self.start {
            Some(start) => Ok(Forest::from_tiles(self.tiles.clone(), start)),
            None => Err(vec![BuilderInvalidReason::NoStart]),
        }
    }
}
