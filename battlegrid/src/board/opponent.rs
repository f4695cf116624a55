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
//! Validated placement of a fleet.

#[cfg(feature = "rng_gen")]
use std::convert::TryFrom;

#[cfg(feature = "rng_gen")]
use log::{debug, trace};
#[cfg(feature = "rng_gen")]
use rand::Rng;

use crate::{
    board::{Dimensions, ValidationError},
    ships::Ship,
};
#[cfg(feature = "rng_gen")]
use crate::ships::Orientation;

/// An immutable layout of ships on a board of fixed size. The index of a ship in the
/// layout is its identity.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Opponent {
    dim: Dimensions,
    ships: Vec<Ship>,
}

impl Opponent {
    /// Validate and build a layout. Every ship must lie within the board and no two
    /// ships may share a cell.
    pub fn new(dim: Dimensions, ships: Vec<Ship>) -> Result<Self, ValidationError> {
        for (index, ship) in ships.iter().enumerate() {
            if !dim.contains_ship(ship) {
                return Err(ValidationError::OutOfBounds { index, ship: *ship });
            }
            if let Some(first) = ships[..index].iter().position(|other| other.overlaps(ship)) {
                return Err(ValidationError::Overlap {
                    first,
                    second: index,
                });
            }
        }
        Ok(Self { dim, ships })
    }

    /// Build a random layout with one ship per entry of `sizes`, in order.
    ///
    /// Placement retries until a ship lands on free cells, so the caller must make sure
    /// the whole fleet can fit. Fails if a size is zero or fits the board in neither
    /// orientation.
    #[cfg(feature = "rng_gen")]
    pub fn random<R: Rng + ?Sized>(
        dim: Dimensions,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Self, ValidationError> {
        Self::new(dim, Self::random_layout(dim, sizes, rng)?)
    }

    /// Generate the ships of a random layout without wrapping them in an [`Opponent`].
    #[cfg(feature = "rng_gen")]
    pub fn random_layout<R: Rng + ?Sized>(
        dim: Dimensions,
        sizes: &[usize],
        rng: &mut R,
    ) -> Result<Vec<Ship>, ValidationError> {
        let mut ships = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let ship = place_randomly(dim, size, &ships, rng)?;
            ships.push(ship);
        }
        debug!("generated layout on {:?}: {:?}", dim, ships);
        Ok(ships)
    }

    /// Find the first ship, in index order, that covers `(column, row)`.
    pub fn ship_at(&self, column: i32, row: i32) -> Option<(usize, &Ship)> {
        self.ships
            .iter()
            .enumerate()
            .find(|(_, ship)| ship.contains(column, row))
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Get the ship with the given index, if any.
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    pub fn columns(&self) -> i32 {
        self.dim.columns()
    }

    pub fn rows(&self) -> i32 {
        self.dim.rows()
    }
}

/// Pick a random position for a ship of `size` cells that does not overlap any of
/// `placed`. Loops until one is found.
#[cfg(feature = "rng_gen")]
pub(super) fn place_randomly<R: Rng + ?Sized>(
    dim: Dimensions,
    size: usize,
    placed: &[Ship],
    rng: &mut R,
) -> Result<Ship, ValidationError> {
    let does_not_fit = ValidationError::DoesNotFit {
        size,
        columns: dim.columns(),
        rows: dim.rows(),
    };
    let len = match i32::try_from(size) {
        Ok(len) if len > 0 && (len <= dim.columns() || len <= dim.rows()) => len,
        _ => return Err(does_not_fit),
    };
    loop {
        let vertical = dim.columns() < len
            || (dim.rows() >= len && rng.gen::<Orientation>() == Orientation::Vertical);
        let ship = if vertical {
            let row = rng.gen_range(0, dim.rows() - len + 1);
            let column = rng.gen_range(0, dim.columns());
            Ship::with_origin(column, row, size, Orientation::Vertical)?
        } else {
            let row = rng.gen_range(0, dim.rows());
            let column = rng.gen_range(0, dim.columns() - len + 1);
            Ship::with_origin(column, row, size, Orientation::Horizontal)?
        };
        if placed.iter().any(|other| other.overlaps(&ship)) {
            trace!("rejected overlapping candidate {}", ship);
            continue;
        }
        return Ok(ship);
    }
}
