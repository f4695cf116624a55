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
//! Errors used by the `Opponent`, `LayoutSetup` and `Grid`.

use thiserror::Error;

use crate::{
    matrix::Coordinate,
    ships::{Orientation, Ship, ShipError},
};

/// Error returned when a layout of ships cannot be built.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ValidationError {
    /// A ship's geometry was invalid.
    #[error("invalid ship: {0}")]
    Ship(#[from] ShipError),
    /// The ship with the given index does not lie within the board.
    #[error("ship {index} at {ship} is out of bounds")]
    OutOfBounds { index: usize, ship: Ship },
    /// Two ships share at least one cell.
    #[error("ship {second} overlaps ship {first}")]
    Overlap { first: usize, second: usize },
    /// A ship of the given size fits the board in neither orientation.
    #[error("a ship of size {size} does not fit on a {columns}x{rows} board")]
    DoesNotFit { size: usize, columns: i32, rows: i32 },
}

/// Reason why a ship could not be placed during setup.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// There is no ship with the given index.
    #[error("no such ship")]
    UnknownShip,
    /// The ship was already placed.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// The ship did not fit on the board in the given direction.
    #[error("insufficient space for the ship at the specified position")]
    InsufficientSpace,
    /// One or more of the cells was already occupied by another ship.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship {index} at {origin} {orientation:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    index: usize,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlaceError {
    pub(super) fn new(
        reason: CannotPlaceReason,
        index: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Self {
        Self {
            reason,
            index,
            origin,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Index of the ship that was being placed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The requested origin of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// The requested orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    OutOfBounds,

    /// A shot has already been fired at that cell.
    AlreadyShot,
}

/// Error returned when trying to shoot a cell. The grid is left unchanged.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason:?}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(super) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// Extract the coordinate of the shot cell.
    pub fn into_coord(self) -> Coordinate {
        self.coord
    }
}
