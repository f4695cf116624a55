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
//! Implements the placement phase of a layout.

#[cfg(feature = "rng_gen")]
use log::debug;
#[cfg(feature = "rng_gen")]
use rand::Rng;

#[cfg(feature = "rng_gen")]
use crate::board::ValidationError;
use crate::{
    board::{CannotPlaceReason, Dimensions, Opponent, PlaceError},
    matrix::Coordinate,
    ships::{Orientation, Ship},
};

/// Contains a ship's size and current placement status.
#[derive(Debug, Clone)]
struct ShipPlacementInfo {
    /// Number of cells of the ship.
    size: usize,

    /// Placement of this ship, if it has been placed.
    placement: Option<Ship>,
}

/// Setup phase for an [`Opponent`]. Ships are identified by their index in the list of
/// sizes the setup was created with, and are placed one at a time.
#[derive(Debug, Clone)]
pub struct LayoutSetup {
    dim: Dimensions,
    ships: Vec<ShipPlacementInfo>,
}

impl LayoutSetup {
    /// Begin setup of a board with the given [`Dimensions`] and one unplaced ship per
    /// entry in `sizes`.
    pub fn new(dim: Dimensions, sizes: &[usize]) -> Self {
        Self {
            dim,
            ships: sizes
                .iter()
                .map(|&size| ShipPlacementInfo {
                    size,
                    placement: None,
                })
                .collect(),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Number of ships in this setup, placed or not.
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Size of the ship with the given index.
    pub fn size(&self, index: usize) -> Option<usize> {
        self.ships.get(index).map(|info| info.size)
    }

    /// Checks if this setup is ready to start. Returns `true` if there is at least one
    /// ship and all ships are placed.
    pub fn ready(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(|ship| ship.placement.is_some())
    }

    /// Get an iterator over the indices of ships which still need to be placed.
    pub fn pending_ships(&self) -> impl '_ + Iterator<Item = usize> {
        self.ships
            .iter()
            .enumerate()
            .filter(|(_, ship)| ship.placement.is_none())
            .map(|(index, _)| index)
    }

    /// If the ship is placed, get the placement. Otherwise return `None`.
    pub fn placement(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index).and_then(|ship| ship.placement.as_ref())
    }

    /// Find the placed ship covering `(column, row)`.
    pub fn ship_at(&self, column: i32, row: i32) -> Option<usize> {
        self.ships.iter().position(|info| {
            info.placement
                .map_or(false, |ship| ship.contains(column, row))
        })
    }

    /// Check whether the ship with the given index could be placed starting at
    /// `(column, row)` and extending in `orientation`, without placing it. Returns the
    /// resulting ship on success.
    pub fn check_placement(
        &self,
        index: usize,
        column: i32,
        row: i32,
        orientation: Orientation,
    ) -> Result<Ship, PlaceError> {
        let err = |reason| PlaceError::new(reason, index, Coordinate::new(column, row), orientation);
        let info = self
            .ships
            .get(index)
            .ok_or_else(|| err(CannotPlaceReason::UnknownShip))?;
        if info.placement.is_some() {
            return Err(err(CannotPlaceReason::AlreadyPlaced));
        }
        let ship = Ship::with_origin(column, row, info.size, orientation)
            .map_err(|_| err(CannotPlaceReason::InsufficientSpace))?;
        if !self.dim.contains_ship(&ship) {
            return Err(err(CannotPlaceReason::InsufficientSpace));
        }
        if self.placed().any(|other| other.overlaps(&ship)) {
            return Err(err(CannotPlaceReason::AlreadyOccupied));
        }
        Ok(ship)
    }

    /// Attempts to place the ship with the given index. On failure the setup is left
    /// unchanged.
    pub fn place(
        &mut self,
        index: usize,
        column: i32,
        row: i32,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        let ship = self.check_placement(index, column, row, orientation)?;
        self.ships[index].placement = Some(ship);
        Ok(())
    }

    /// Clear the placement of the ship. Returns the previous placement of the ship, or
    /// `None` if it was not placed.
    pub fn unplace(&mut self, index: usize) -> Option<Ship> {
        self.ships
            .get_mut(index)
            .and_then(|ship| ship.placement.take())
    }

    /// Clear the placement of every ship.
    pub fn clear(&mut self) {
        for ship in &mut self.ships {
            ship.placement = None;
        }
    }

    /// Place every ship that is still pending at a random free position. Ships already
    /// placed are kept. On failure, ships placed by this call are removed again.
    #[cfg(feature = "rng_gen")]
    pub fn randomize_rest<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ValidationError> {
        let pending: Vec<usize> = self.pending_ships().collect();
        for (n, &index) in pending.iter().enumerate() {
            let placed: Vec<Ship> = self.placed().copied().collect();
            match super::opponent::place_randomly(self.dim, self.ships[index].size, &placed, rng) {
                Ok(ship) => self.ships[index].placement = Some(ship),
                Err(err) => {
                    for &undo in &pending[..n] {
                        self.ships[undo].placement = None;
                    }
                    return Err(err);
                }
            }
        }
        debug!("randomly placed ships {:?}", pending);
        Ok(())
    }

    /// Tries to finish setup. If all ships are placed, returns an [`Opponent`] with the
    /// current placements. Otherwise returns self.
    pub fn start(self) -> Result<Opponent, Self> {
        if !self.ready() {
            return Err(self);
        }
        let ships = self.placed().copied().collect();
        Opponent::new(self.dim, ships).map_err(|_| self)
    }

    /// Get an iterator over the rows of the board. Each row yields the index of the ship
    /// occupying each cell, if any.
    pub fn iter_board(&self) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = Option<usize>>> {
        self.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self.ship_at(coord.x, coord.y)))
    }

    fn placed(&self) -> impl '_ + Iterator<Item = &Ship> {
        self.ships.iter().filter_map(|ship| ship.placement.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> LayoutSetup {
        LayoutSetup::new(Dimensions::default(), &[5, 4, 3])
    }

    #[test]
    fn place_and_start() {
        let mut setup = setup();
        assert!(!setup.ready());
        assert_eq!(setup.pending_ships().collect::<Vec<_>>(), vec![0, 1, 2]);

        setup.place(0, 2, 0, Orientation::Horizontal).unwrap();
        setup.place(1, 0, 2, Orientation::Vertical).unwrap();
        assert_eq!(setup.pending_ships().collect::<Vec<_>>(), vec![2]);
        assert_eq!(setup.placement(0), Some(&Ship::new(0, 2, 0, 6).unwrap()));
        assert_eq!(setup.ship_at(0, 4), Some(1));

        let setup = setup.start().unwrap_err();
        let mut setup = setup;
        setup.place(2, 9, 7, Orientation::Vertical).unwrap();
        assert!(setup.ready());
        let opponent = setup.start().unwrap();
        assert_eq!(opponent.ships().len(), 3);
        assert_eq!(opponent.ship_at(9, 9).map(|(i, _)| i), Some(2));
    }

    #[test]
    fn placement_errors() {
        let mut setup = setup();
        let reason = |r: Result<(), PlaceError>| r.unwrap_err().reason();

        assert_eq!(
            reason(setup.place(3, 0, 0, Orientation::Horizontal)),
            CannotPlaceReason::UnknownShip
        );
        assert_eq!(
            reason(setup.place(0, 6, 0, Orientation::Horizontal)),
            CannotPlaceReason::InsufficientSpace
        );
        assert_eq!(
            reason(setup.place(0, -1, 0, Orientation::Horizontal)),
            CannotPlaceReason::InsufficientSpace
        );
        setup.place(0, 0, 0, Orientation::Horizontal).unwrap();
        assert_eq!(
            reason(setup.place(0, 0, 5, Orientation::Horizontal)),
            CannotPlaceReason::AlreadyPlaced
        );
        let err = setup.place(1, 4, 0, Orientation::Vertical).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.index(), 1);
        assert_eq!(err.origin(), Coordinate::new(4, 0));
        assert_eq!(err.orientation(), Orientation::Vertical);
        assert_eq!(setup.placement(1), None);
    }

    #[test]
    fn unplace_and_clear() {
        let mut setup = setup();
        setup.place(0, 0, 0, Orientation::Horizontal).unwrap();
        setup.place(1, 0, 1, Orientation::Horizontal).unwrap();
        assert_eq!(setup.unplace(0), Some(Ship::new(0, 0, 0, 4).unwrap()));
        assert_eq!(setup.unplace(0), None);
        assert_eq!(setup.unplace(9), None);
        setup.place(2, 0, 0, Orientation::Horizontal).unwrap();
        setup.clear();
        assert_eq!(setup.pending_ships().count(), 3);
    }

    #[test]
    fn failed_move_can_be_restored() {
        let mut setup = setup();
        setup.place(0, 0, 0, Orientation::Horizontal).unwrap();
        setup.place(1, 0, 1, Orientation::Horizontal).unwrap();

        let previous = setup.unplace(1).unwrap();
        let err = setup.place(1, 2, 0, Orientation::Vertical).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        setup
            .place(1, previous.left(), previous.top(), previous.orientation())
            .unwrap();
        assert_eq!(setup.placement(1), Some(&previous));
    }

    #[test]
    fn empty_setup_never_ready() {
        let setup = LayoutSetup::new(Dimensions::default(), &[]);
        assert!(setup.is_empty());
        assert!(!setup.ready());
        assert!(setup.start().is_err());
    }

    #[test]
    fn board_rows() {
        let mut setup = LayoutSetup::new(Dimensions::new(3, 2), &[2]);
        setup.place(0, 1, 0, Orientation::Vertical).unwrap();
        let rows: Vec<Vec<_>> = setup.iter_board().map(|row| row.collect()).collect();
        assert_eq!(
            rows,
            vec![vec![None, Some(0), None], vec![None, Some(0), None]]
        );
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn randomize_keeps_existing_placements() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut setup = setup();
        setup.place(1, 3, 3, Orientation::Vertical).unwrap();
        setup
            .randomize_rest(&mut StdRng::seed_from_u64(3))
            .unwrap();
        assert!(setup.ready());
        assert_eq!(setup.placement(1), Some(&Ship::new(3, 3, 6, 3).unwrap()));
        assert!(setup.start().is_ok());
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn randomize_failure_rolls_back() {
        use rand::{rngs::StdRng, SeedableRng};

        let mut setup = LayoutSetup::new(Dimensions::new(4, 4), &[2, 9]);
        assert!(setup
            .randomize_rest(&mut StdRng::seed_from_u64(3))
            .is_err());
        assert_eq!(setup.pending_ships().count(), 2);
    }
}
