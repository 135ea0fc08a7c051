use strum::VariantArray;

use crate::cell::ColorId;

/// An authored terminal layout: `0` for an empty cell, `k > 0` for a terminal of color
/// `k`, exactly two cells per color.
///
/// The catalog is curated data; solvability and terminal-count well-formedness are the
/// author's responsibility, not validated here.
pub type TerminalMap = &'static [&'static [ColorId]];

/// The difficulty tiers of the built-in level catalog.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, VariantArray)]
pub enum Difficulty {
    /// 6x6 boards.
    Easy,
    /// 8x8 boards.
    Medium,
    /// 10x10 boards.
    Hard,
}

impl Difficulty {
    /// The ordered level maps of this tier.
    pub fn maps(&self) -> &'static [TerminalMap] {
        match self {
            Self::Easy => EASY_MAPS,
            Self::Medium => MEDIUM_MAPS,
            Self::Hard => HARD_MAPS,
        }
    }

    /// Look up one level's map by index within this tier.
    pub fn map(&self, level: usize) -> Option<TerminalMap> {
        self.maps().get(level).copied()
    }
}

const EASY_MAPS: &[TerminalMap] = &[
    &[
        &[1, 0, 0, 0, 0, 0],
        &[0, 0, 2, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 3, 2],
        &[0, 0, 0, 0, 0, 3],
        &[4, 0, 0, 0, 0, 4],
    ],
    &[
        &[1, 0, 1, 2, 0, 0],
        &[0, 0, 0, 3, 2, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 4, 3],
        &[0, 0, 0, 0, 0, 4],
        &[5, 0, 0, 0, 0, 5],
    ],
    &[
        &[1, 2, 3, 4, 5, 6],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0],
        &[1, 2, 3, 4, 5, 6],
    ],
];

const MEDIUM_MAPS: &[TerminalMap] = &[
    &[
        &[1, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 2, 1],
        &[2, 3, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 4, 3, 0],
        &[0, 0, 4, 5, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0],
        &[5, 6, 0, 0, 0, 0, 0, 0],
        &[6, 0, 0, 0, 0, 0, 0, 0],
    ],
    &[
        &[1, 0, 0, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0, 0, 2],
        &[0, 0, 0, 0, 0, 0, 0, 2],
        &[0, 0, 0, 0, 0, 0, 0, 3],
        &[0, 0, 0, 0, 0, 0, 0, 3],
        &[0, 0, 0, 0, 0, 0, 0, 4],
        &[0, 0, 0, 0, 0, 0, 0, 4],
        &[5, 0, 0, 0, 0, 0, 0, 5],
    ],
];

const HARD_MAPS: &[TerminalMap] = &[
    &[
        &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 2, 1, 0],
        &[0, 0, 0, 2, 3, 0, 0, 0, 0, 0],
        &[0, 0, 0, 4, 3, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 4, 5, 0],
        &[5, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[6, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 7, 6, 0],
        &[0, 0, 0, 7, 8, 0, 0, 0, 0, 0],
        &[8, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
    &[
        &[1, 1, 2, 2, 3, 3, 4, 4, 5, 5],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
];
