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
use battlegrid::matrix::{Coordinate, IntMatrix, Matrix};
use proptest::prelude::*;

proptest! {
    #[test]
    fn packing_is_a_bijection(x in any::<i16>(), y in any::<i16>()) {
        let coord = Coordinate::new(x.into(), y.into());
        let packed = coord.packed();
        prop_assert_eq!(Coordinate::from_packed(packed), coord);
        prop_assert_eq!(Coordinate::from_packed(packed).packed(), packed);
    }

    #[test]
    fn unpacking_is_a_bijection(packed in any::<i32>()) {
        prop_assert_eq!(Coordinate::from_packed(packed).packed(), packed);
    }

    #[test]
    fn dense_iteration_visits_every_cell(width in 0..20i32, height in 0..20i32) {
        let m = Matrix::from_fn(width, height, |x, y| x + y * width);
        let expected: Vec<i32> = (0..width * height).collect();
        prop_assert_eq!(m.iter().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn sparse_iteration_visits_valid_cells(
        width in 1..16i32,
        height in 1..16i32,
        modulus in 1..5i32,
    ) {
        let valid = |x: i32, y: i32| (x * 7 + y * 3) % modulus == 0;
        let m = Matrix::sparse(width, height, valid, |x, y| Coordinate::new(x, y));
        let expected: Vec<Coordinate> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coordinate::new(x, y)))
            .filter(|c| valid(c.x, c.y))
            .collect();
        prop_assert_eq!(m.valid_count(), expected.len());
        prop_assert_eq!(m.iter().copied().collect::<Vec<_>>(), expected.clone());
        prop_assert_eq!(m.indices().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn copies_are_independent(
        width in 1..10i32,
        height in 1..10i32,
        x in 0..10i32,
        y in 0..10i32,
        value in any::<i32>(),
    ) {
        let original: IntMatrix = Matrix::sparse(width, height, |x, y| x >= y, |x, y| x * y);
        let mut copy = original.clone();
        prop_assert!(copy.content_equals(&original));
        let changed = copy.set(x, y, value).is_ok();
        prop_assert_eq!(changed, original.is_valid(x, y));
        if changed {
            prop_assert_eq!(original[(x, y)], x * y);
            prop_assert_eq!(copy.content_equals(&original), value == x * y);
        }
        for cy in 0..height {
            for cx in 0..width {
                prop_assert_eq!(copy.is_valid(cx, cy), original.is_valid(cx, cy));
            }
        }
    }
}
