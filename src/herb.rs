use std::fmt::{Display, Formatter};

/// Number of distinct herb labels, `A` through `Z`.
pub const HERB_KINDS: usize = 26;

/// The label of a herb site, drawn from the ordered alphabet `A`..=`Z`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Herb(u8);

impl Herb {
    /// The herb displayed as `display`, if it is an uppercase ASCII letter.
    pub fn from_char(display: char) -> Option<Self> {
        display.is_ascii_uppercase().then(|| Self(display as u8 - b'A'))
    }

    /// The herb with the given zero-based index into the alphabet.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < HERB_KINDS).then(|| Self(index as u8))
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    pub fn display(&self) -> char {
        (b'A' + self.0) as char
    }

    fn bit(&self) -> u32 {
        1 << self.0
    }
}

impl Display for Herb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A set of herb labels, stored as a bitmask where bit *k* is the *k*-th letter of the alphabet.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HerbSet(u32);

impl HerbSet {
    pub const EMPTY: Self = Self(0);

    pub fn contains(&self, herb: Herb) -> bool {
        self.0 & herb.bit() != 0
    }

    /// The union of `self` and `{herb}`.
    #[must_use]
    pub fn insert(&self, herb: Herb) -> Self {
        Self(self.0 | herb.bit())
    }

    #[must_use]
    pub fn union(&self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Labels in `self` but not in `other`.
    #[must_use]
    pub fn difference(&self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_superset(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Members in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Herb> {
        let set = *self;
        (0..HERB_KINDS)
            .filter_map(Herb::from_index)
            .filter(move |herb| set.contains(*herb))
    }
}

impl FromIterator<Herb> for HerbSet {
    fn from_iter<T: IntoIterator<Item = Herb>>(iter: T) -> Self {
        iter.into_iter().fold(Self::EMPTY, |set, herb| set.insert(herb))
    }
}

impl Display for HerbSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        self.iter().try_for_each(|herb| write!(f, "{herb}"))
    }
}
