use std::fmt::{Display, Formatter};

use crate::herb::Herb;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum Tile {
    Open,
    Herb { herb: Herb },
    #[default]
    Blocked,
}

impl Tile {
    pub(crate) fn is_open(&self) -> bool {
        !matches!(self, Tile::Blocked)
    }

    pub(crate) fn from_char(display: char) -> Self {
        match display {
            '.' => Tile::Open,
            _ => match Herb::from_char(display) {
                Some(herb) => Tile::Herb { herb },
                // walls, water and anything else unrecognised cannot be walked through
                None => Tile::Blocked,
            },
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            Tile::Open => '.',
            Tile::Herb { herb } => herb.display(),
            Tile::Blocked => '#',
        })
    }
}
