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
//! Types that make up the game board.
//!
//! An [`Opponent`] is the hidden layout of a fleet. A [`Grid`] wraps one and tracks the
//! shots fired at it, which ships have been sunk, and who to tell when that changes.

use std::{fmt, rc::Rc};

use enumflags2::BitFlags;
use log::debug;

use crate::matrix::{Coordinate, Matrix, OutOfRange};

pub use self::{
    cell::{GuessCell, GuessKind, GuessResult},
    dimensions::Dimensions,
    errors::{
        CannotPlaceReason, CannotShootReason, PlaceError, ShotError, ValidationError,
    },
    opponent::Opponent,
    setup::LayoutSetup,
};

mod cell;
mod dimensions;
mod errors;
mod opponent;
pub mod setup;

/// Receives a notification after every successful shot on a [`Grid`].
pub trait GridListener {
    /// Called once the grid has been fully updated by a shot at `(column, row)`.
    fn on_grid_changed(&self, grid: &Grid, column: i32, row: i32);
}

impl<F: Fn(&Grid, i32, i32)> GridListener for F {
    fn on_grid_changed(&self, grid: &Grid, column: i32, row: i32) {
        self(grid, column, row)
    }
}

/// One player's side of the ocean: the hidden [`Opponent`] layout plus the record of
/// every shot fired at it.
pub struct Grid {
    /// Layout being shot at.
    opponent: Opponent,

    /// What the shooter knows about each cell.
    guesses: Matrix<GuessCell>,

    /// Whether each ship of the layout has been sunk, by index.
    ships_sunk: Box<[bool]>,

    /// Notified in registration order after each shot.
    listeners: Vec<Rc<dyn GridListener>>,
}

impl Grid {
    /// Start a fresh grid with every cell unset.
    pub fn new(opponent: Opponent) -> Self {
        Self {
            guesses: Matrix::with_default(opponent.columns(), opponent.rows()),
            ships_sunk: vec![false; opponent.ships().len()].into_boxed_slice(),
            opponent,
            listeners: Vec::new(),
        }
    }

    pub fn columns(&self) -> i32 {
        self.opponent.columns()
    }

    pub fn rows(&self) -> i32 {
        self.opponent.rows()
    }

    /// Get the layout this grid is shooting at.
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Whether each ship of the layout has been sunk, indexed like
    /// [`Opponent::ships`].
    pub fn ships_sunk(&self) -> &[bool] {
        &self.ships_sunk
    }

    /// Returns true once every ship is sunk. A layout without ships is finished from the
    /// start.
    pub fn is_finished(&self) -> bool {
        self.ships_sunk.iter().all(|&sunk| sunk)
    }

    /// Get the state of the cell at `(column, row)`.
    pub fn get(&self, column: i32, row: i32) -> Result<GuessCell, OutOfRange> {
        self.guesses.get(column, row).copied()
    }

    /// Read only view of every cell.
    pub fn guesses(&self) -> &Matrix<GuessCell> {
        &self.guesses
    }

    /// Get the coordinates of every cell whose kind is one of `kinds`, in row-major
    /// order.
    pub fn coordinates_matching(
        &self,
        kinds: impl Into<BitFlags<GuessKind>>,
    ) -> impl '_ + Iterator<Item = Coordinate> {
        let kinds = kinds.into();
        self.guesses
            .iter_cells()
            .filter(move |(_, cell)| cell.matches(kinds))
            .map(|(coord, _)| coord)
    }

    /// Number of cells nobody has shot at yet.
    pub fn unset_count(&self) -> usize {
        self.guesses
            .iter()
            .filter(|cell| **cell == GuessCell::Unset)
            .count()
    }

    /// Register a listener. Registering the same listener twice has no effect.
    pub fn add_listener(&mut self, listener: Rc<dyn GridListener>) {
        if !self.listeners.iter().any(|l| same_listener(l, &listener)) {
            self.listeners.push(listener);
        }
    }

    /// Remove a previously registered listener. Does nothing if it was not registered.
    pub fn remove_listener(&mut self, listener: &Rc<dyn GridListener>) {
        self.listeners.retain(|l| !same_listener(l, listener));
    }

    /// Fire a shot at `(column, row)`.
    ///
    /// Fails if the cell is off the board or was already shot, in which case the grid is
    /// unchanged and no listener is called. Otherwise the cell becomes a miss or a hit;
    /// if the hit was the last unstruck cell of its ship, every cell of that ship is
    /// marked sunk. Listeners are called once the update is complete.
    pub fn shoot(&mut self, column: i32, row: i32) -> Result<GuessResult, ShotError> {
        let coord = Coordinate::new(column, row);
        match self.guesses.get(column, row) {
            Err(_) => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Ok(GuessCell::Unset) => {}
            Ok(_) => return Err(ShotError::new(CannotShootReason::AlreadyShot, coord)),
        }
        let result = match self.opponent.ship_at(column, row) {
            None => {
                self.guesses[coord] = GuessCell::Miss;
                GuessResult::Miss
            }
            Some((index, &ship)) => {
                self.guesses[coord] = GuessCell::Hit(index);
                let guesses = &self.guesses;
                if ship.cells().all(|cell| guesses[cell].is_struck()) {
                    for cell in ship.cells() {
                        self.guesses[cell] = GuessCell::Sunk(index);
                    }
                    self.ships_sunk[index] = true;
                    GuessResult::Sunk(index)
                } else {
                    GuessResult::Hit(index)
                }
            }
        };
        debug!("shot at {}: {:?}", coord, result);
        if self.is_finished() {
            debug!("all {} ships sunk", self.ships_sunk.len());
        }
        self.notify(column, row);
        Ok(result)
    }

    fn notify(&self, column: i32, row: i32) {
        for listener in &self.listeners {
            listener.on_grid_changed(self, column, row);
        }
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Grid")
            .field("opponent", &self.opponent)
            .field("guesses", &self.guesses)
            .field("ships_sunk", &self.ships_sunk)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Listeners are identified by the allocation they point to.
fn same_listener(a: &Rc<dyn GridListener>, b: &Rc<dyn GridListener>) -> bool {
    Rc::as_ptr(a) as *const u8 == Rc::as_ptr(b) as *const u8
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::ships::Ship;

    fn grid() -> Grid {
        let opponent = Opponent::new(
            Dimensions::default(),
            vec![
                Ship::new(0, 2, 0, 6).unwrap(),
                Ship::new(2, 0, 3, 0).unwrap(),
            ],
        )
        .unwrap();
        Grid::new(opponent)
    }

    #[test]
    fn fresh_grid() {
        let grid = grid();
        assert_eq!(grid.columns(), 10);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.unset_count(), 100);
        assert_eq!(grid.ships_sunk(), &[false, false]);
        assert!(!grid.is_finished());
        assert_eq!(grid.get(9, 9), Ok(GuessCell::Unset));
        assert!(grid.get(10, 0).is_err());
    }

    #[test]
    fn miss_hit_sink() {
        let mut grid = grid();
        assert_eq!(grid.shoot(5, 5), Ok(GuessResult::Miss));
        assert_eq!(grid.get(5, 5), Ok(GuessCell::Miss));
        assert_eq!(grid.shoot(0, 2), Ok(GuessResult::Hit(1)));
        assert_eq!(grid.get(0, 2), Ok(GuessCell::Hit(1)));
        assert_eq!(grid.shoot(0, 3), Ok(GuessResult::Sunk(1)));
        assert_eq!(grid.get(0, 2), Ok(GuessCell::Sunk(1)));
        assert_eq!(grid.get(0, 3), Ok(GuessCell::Sunk(1)));
        assert_eq!(grid.ships_sunk(), &[false, true]);
        assert!(!grid.is_finished());
        assert_eq!(grid.unset_count(), 97);
    }

    #[test]
    fn errors_leave_grid_unchanged() {
        let mut grid = grid();
        grid.shoot(3, 0).unwrap();
        let before = grid.guesses().clone();

        let err = grid.shoot(3, 0).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::AlreadyShot);
        assert_eq!(err.coord(), Coordinate::new(3, 0));
        let err = grid.shoot(-1, 0).unwrap_err();
        assert_eq!(err.reason(), CannotShootReason::OutOfBounds);
        assert_eq!(err.into_coord(), Coordinate::new(-1, 0));

        assert_eq!(grid.guesses(), &before);
        assert_eq!(grid.ships_sunk(), &[false, false]);
    }

    #[test]
    fn matching_coordinates() {
        let mut grid = grid();
        grid.shoot(1, 0).unwrap();
        grid.shoot(2, 0).unwrap();
        grid.shoot(0, 2).unwrap();
        grid.shoot(0, 3).unwrap();
        let struck: Vec<_> = grid
            .coordinates_matching(GuessKind::Hit | GuessKind::Sunk)
            .map(|c| (c.x, c.y))
            .collect();
        assert_eq!(struck, vec![(2, 0), (0, 2), (0, 3)]);
        assert_eq!(
            grid.coordinates_matching(GuessKind::Miss)
                .map(|c| (c.x, c.y))
                .collect::<Vec<_>>(),
            vec![(1, 0)]
        );
        assert_eq!(grid.coordinates_matching(GuessKind::Unset).count(), 96);
    }

    #[test]
    fn listeners_run_in_order_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first: Rc<dyn GridListener> = {
            let log = log.clone();
            Rc::new(move |_: &Grid, x: i32, y: i32| log.borrow_mut().push(("first", x, y)))
        };
        let second: Rc<dyn GridListener> = {
            let log = log.clone();
            Rc::new(move |g: &Grid, x: i32, y: i32| {
                assert_eq!(g.get(x, y), Ok(GuessCell::Miss));
                log.borrow_mut().push(("second", x, y))
            })
        };
        let mut grid = grid();
        grid.add_listener(first.clone());
        grid.add_listener(second.clone());
        grid.add_listener(first.clone());

        grid.shoot(9, 9).unwrap();
        assert_eq!(*log.borrow(), vec![("first", 9, 9), ("second", 9, 9)]);

        grid.remove_listener(&first);
        grid.remove_listener(&first);
        grid.shoot(8, 8).unwrap();
        assert!(grid.shoot(8, 8).is_err());
        assert_eq!(log.borrow().len(), 3);
        assert_eq!(log.borrow()[2], ("second", 8, 8));
    }

    #[test]
    fn empty_layout_is_finished() {
        let grid = Grid::new(Opponent::new(Dimensions::new(2, 2), Vec::new()).unwrap());
        assert!(grid.is_finished());
    }
}
