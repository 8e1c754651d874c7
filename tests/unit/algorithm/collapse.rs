//! Tests for weighted collapse and cumulative weight selection

#[cfg(test)]
mod tests {
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::collapse::{
        RandomSelector, collapse_cell, cumulative_weights, weighted_pick,
    };
    use wavetile::spatial::grid::Cell;
    use wavetile::spatial::tiles::{TileDefinition, TileSet};

    fn weighted_tileset() -> TileSet {
        TileSet::from_definitions(&[
            TileDefinition::new("a", 1),
            TileDefinition::new("b", 3),
            TileDefinition::new("c", 2),
        ])
        .unwrap()
    }

    // Tests cumulative weights follow candidate order and skip absent tiles
    // Verified by summing weights of all tiles instead of candidates
    #[test]
    fn test_cumulative_weights_over_candidates() {
        let tileset = weighted_tileset();
        let candidates = TileBitset::from_indices(&[0, 2], 3);

        assert_eq!(cumulative_weights(&candidates, &tileset), vec![1, 3]);
        assert_eq!(
            cumulative_weights(&TileBitset::all(3), &tileset),
            vec![1, 4, 6]
        );
    }

    // Tests sampling ratio converges to the weight ratio A:B = 1:3
    // Verified by using a lower-bound search so the draw boundary shifts
    #[test]
    fn test_weighted_pick_matches_weight_ratio() {
        let tileset = weighted_tileset();
        let candidates = TileBitset::from_indices(&[0, 1], 3);
        let mut rng = RandomSelector::new(Some(7));

        let draws = 20_000;
        let mut counts = [0_usize; 2];
        for _ in 0..draws {
            match weighted_pick(&candidates, &tileset, &mut rng) {
                Some(0) => counts[0] += 1,
                Some(1) => counts[1] += 1,
                other => unreachable!("picked tile outside candidates: {other:?}"),
            }
        }

        let share_a = counts[0] as f64 / draws as f64;
        assert!(
            (share_a - 0.25).abs() < 0.02,
            "expected ~25% of draws to be A, got {share_a}"
        );
    }

    // Tests a single candidate is always picked
    // Verified by drawing from the full tile range
    #[test]
    fn test_weighted_pick_single_candidate() {
        let tileset = weighted_tileset();
        let candidates = TileBitset::singleton(3, 2);
        let mut rng = RandomSelector::new(Some(1));

        for _ in 0..100 {
            assert_eq!(weighted_pick(&candidates, &tileset, &mut rng), Some(2));
        }
    }

    // Tests empty candidate sets yield no pick
    // Verified by defaulting to tile 0 on an empty set
    #[test]
    fn test_weighted_pick_empty_candidates() {
        let tileset = weighted_tileset();
        let mut rng = RandomSelector::new(Some(1));
        assert_eq!(
            weighted_pick(&TileBitset::new(3), &tileset, &mut rng),
            None
        );
    }

    // Tests collapse marks the cell collapsed with the picked tile
    // Verified by leaving the collapsed flag unset
    #[test]
    fn test_collapse_cell_sets_singleton() {
        let tileset = weighted_tileset();
        let mut cell = Cell::new(0, 0, tileset.len());
        let mut rng = RandomSelector::new(Some(3));

        let tile = collapse_cell(&mut cell, &tileset, &mut rng).unwrap();

        assert!(cell.is_collapsed());
        assert_eq!(cell.entropy(), 1);
        assert_eq!(cell.tile(), Some(tile));
    }

    // Tests identical seeds give identical pick sequences
    // Verified by seeding from the operating system regardless of seed
    #[test]
    fn test_seeded_picks_are_reproducible() {
        let tileset = weighted_tileset();
        let candidates = TileBitset::all(3);
        let mut first = RandomSelector::new(Some(99));
        let mut second = RandomSelector::new(Some(99));

        let a: Vec<_> = (0..50)
            .map(|_| weighted_pick(&candidates, &tileset, &mut first))
            .collect();
        let b: Vec<_> = (0..50)
            .map(|_| weighted_pick(&candidates, &tileset, &mut second))
            .collect();
        assert_eq!(a, b);
    }

    // Tests the random source stays in range and returns 0 for empty ranges
    // Verified by drawing from 0..=len instead of 0..len
    #[test]
    fn test_random_selector_ranges() {
        let mut rng = RandomSelector::new(Some(5));

        assert_eq!(rng.index(0), 0);
        assert_eq!(rng.below(0), 0);
        for _ in 0..1_000 {
            assert!(rng.index(3) < 3);
            assert!(rng.below(7) < 7);
        }
        assert_eq!(rng.index(1), 0);
    }
}
