//! Tile kinds and the palette they are drawn from.
//!
//! The engine never interprets a `TileKind` beyond equality: two tiles match
//! iff their kinds are equal. Hosts map kinds to sprites, colors or glyphs.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Opaque tile identifier drawn from a fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileKind(pub u8);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// The fixed set of kinds new tiles are drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    kinds: Vec<TileKind>,
}

impl Palette {
    /// Palette of `size` kinds numbered `0..size`.
    #[must_use]
    pub fn with_size(size: u8) -> Self {
        Self {
            kinds: (0..size).map(TileKind).collect(),
        }
    }

    /// Palette from explicit kinds. Duplicates are dropped, order is kept.
    pub fn from_kinds(kinds: impl IntoIterator<Item = TileKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    /// Number of distinct kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// All kinds in palette order.
    #[must_use]
    pub fn kinds(&self) -> &[TileKind] {
        &self.kinds
    }

    #[must_use]
    pub fn contains(&self, kind: TileKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Uniformly random kind. `None` only for an empty palette.
    pub fn pick<R: RandomSource>(&self, rng: &mut R) -> Option<TileKind> {
        if self.kinds.is_empty() {
            return None;
        }
        Some(self.kinds[rng.gen_index(self.kinds.len())])
    }
}
