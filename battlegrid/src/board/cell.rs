// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use enumflags2::BitFlags;

/// State of a single cell of a [`Grid`](super::Grid) as seen by the shooter.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuessCell {
    /// Nobody has shot at this cell yet.
    Unset,
    /// The cell was shot and held no ship.
    Miss,
    /// The cell was shot and holds part of the ship with the given index, which is still
    /// afloat.
    Hit(usize),
    /// The cell holds part of the ship with the given index, and every cell of that ship
    /// has been hit.
    Sunk(usize),
}

impl GuessCell {
    /// Get the flag for the kind of this cell, ignoring the ship index.
    pub fn kind(&self) -> GuessKind {
        match self {
            GuessCell::Unset => GuessKind::Unset,
            GuessCell::Miss => GuessKind::Miss,
            GuessCell::Hit(_) => GuessKind::Hit,
            GuessCell::Sunk(_) => GuessKind::Sunk,
        }
    }

    /// Index of the ship in this cell, if the cell was struck.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            GuessCell::Hit(ship) | GuessCell::Sunk(ship) => Some(ship),
            GuessCell::Unset | GuessCell::Miss => None,
        }
    }

    /// Returns true if the cell holds a ship that was hit, sunk or not.
    pub fn is_struck(&self) -> bool {
        self.ship().is_some()
    }

    /// Returns true if the kind of this cell is one of `kinds`.
    pub fn matches(&self, kinds: impl Into<BitFlags<GuessKind>>) -> bool {
        kinds.into().contains(self.kind())
    }
}

impl Default for GuessCell {
    fn default() -> Self {
        GuessCell::Unset
    }
}

/// Kinds of [`GuessCell`], usable as a set of flags to filter cells.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum GuessKind {
    Unset = 0b0001,
    Miss = 0b0010,
    Hit = 0b0100,
    Sunk = 0b1000,
}

/// Result of a successful shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GuessResult {
    /// The shot did not hit anything.
    Miss,
    /// The shot hit the ship with the given index, but did not sink it.
    Hit(usize),
    /// The shot hit the ship with the given index and sunk it.
    Sunk(usize),
}

impl GuessResult {
    /// Get the index of the ship that was hit.
    pub fn ship(&self) -> Option<usize> {
        match *self {
            GuessResult::Miss => None,
            GuessResult::Hit(ship) | GuessResult::Sunk(ship) => Some(ship),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(GuessCell::default(), GuessCell::Unset);
        assert_eq!(GuessCell::Hit(3).kind(), GuessKind::Hit);
        assert_eq!(GuessCell::Sunk(1).ship(), Some(1));
        assert_eq!(GuessCell::Miss.ship(), None);
        assert!(!GuessCell::Unset.is_struck());
        assert!(GuessCell::Hit(0).matches(GuessKind::Hit | GuessKind::Sunk));
        assert!(!GuessCell::Miss.matches(GuessKind::Hit | GuessKind::Sunk));
        assert!(GuessCell::Unset.matches(GuessKind::Unset));
    }

    #[test]
    fn result_ship() {
        assert_eq!(GuessResult::Miss.ship(), None);
        assert_eq!(GuessResult::Hit(2).ship(), Some(2));
        assert_eq!(GuessResult::Sunk(4).ship(), Some(4));
    }
}
