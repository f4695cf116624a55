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
#[cfg(feature = "rng_gen")]
use rand::{rngs::StdRng, SeedableRng};

use crate::board::{Dimensions, LayoutSetup};
#[cfg(feature = "rng_gen")]
use crate::board::{Opponent, ValidationError};

/// Sizes of the standard fleet: carrier, battleship, cruiser, submarine and destroyer.
pub const DEFAULT_SHIP_SIZES: [usize; 5] = [5, 4, 3, 3, 2];

/// Settings shared by every grid of a game.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Size of every board.
    pub dimensions: Dimensions,
    /// Size of each ship in a fleet, in placement order.
    pub ship_sizes: Vec<usize>,
    /// Seed for random layouts and the computer player. Uses entropy when unset.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Build a random number generator from the configured seed.
    #[cfg(feature = "rng_gen")]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate a random layout for this configuration.
    #[cfg(feature = "rng_gen")]
    pub fn random_opponent<R: rand::Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Opponent, ValidationError> {
        Opponent::random(self.dimensions, &self.ship_sizes, rng)
    }

    /// Returns true if the fleet has no more cells than the board. Random placement of a
    /// fleet that fails this check never finishes.
    pub fn fleet_fits(&self) -> bool {
        self.ship_sizes
            .iter()
            .try_fold(0usize, |total, &size| total.checked_add(size))
            .map_or(false, |total| total <= self.dimensions.total_size())
    }

    /// Begin manual placement of a fleet for this configuration.
    pub fn layout_setup(&self) -> LayoutSetup {
        LayoutSetup::new(self.dimensions, &self.ship_sizes)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            ship_sizes: DEFAULT_SHIP_SIZES.to_vec(),
            seed: None,
        }
    }
}
