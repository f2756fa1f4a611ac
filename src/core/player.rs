//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Oware is strictly two-player. `PlayerId(0)` sits at the bottom of the
//! board and owns the low pit indices; `PlayerId(1)` sits at the top.
//!
//! ## PlayerPair
//!
//! Two-slot storage indexed by `PlayerId`, used for scores.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Player identifier (0 = bottom, 1 = top).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The bottom player, owner of pits `0..pits_per_side`.
    pub const BOTTOM: PlayerId = PlayerId(0);

    /// The top player, owner of pits `pits_per_side..total_pits`.
    pub const TOP: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < 2, "Oware has exactly 2 players");
        Self(id)
    }

    /// Convert a raw id, returning `None` for anything other than 0 or 1.
    #[must_use]
    pub const fn from_raw(id: u8) -> Option<Self> {
        if id < 2 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Both players, bottom first.
    ///
    /// ```
    /// use oware::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players, vec![PlayerId::BOTTOM, PlayerId::TOP]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::BOTTOM, Self::TOP].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One value per player.
///
/// ```
/// use oware::core::{PlayerId, PlayerPair};
///
/// let mut scores: PlayerPair<u32> = PlayerPair::default();
/// scores[PlayerId::TOP] += 3;
/// assert_eq!(scores.into_array(), [0, 3]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from bottom and top values.
    pub const fn new(bottom: T, top: T) -> Self {
        Self { data: [bottom, top] }
    }

    /// Get a reference to a player's value.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's value.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Unwrap into a plain `[bottom, top]` array.
    pub fn into_array(self) -> [T; 2] {
        self.data
    }
}

impl<T> From<[T; 2]> for PlayerPair<T> {
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
