//! Tests for lowest-entropy cell selection

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use wavetile::algorithm::bitset::TileBitset;
    use wavetile::algorithm::collapse::RandomSelector;
    use wavetile::algorithm::selection::{lowest_entropy_cells, select_lowest_entropy};
    use wavetile::spatial::grid::Grid;

    // Tests the unique minimum-entropy cell is selected
    // Verified by selecting the maximum instead of the minimum
    #[test]
    fn test_selects_unique_minimum() {
        let mut grid = Grid::new(3, 3, 4).unwrap();
        grid.cell_mut(2, 1)
            .unwrap()
            .set_candidates(TileBitset::from_indices(&[0, 3], 4));
        grid.cell_mut(0, 2)
            .unwrap()
            .set_candidates(TileBitset::from_indices(&[0, 1, 3], 4));

        let mut rng = RandomSelector::new(Some(5));
        assert_eq!(select_lowest_entropy(&grid, &mut rng), Some([2, 1]));
    }

    // Tests collapsed cells are never candidates even with entropy 1
    // Verified by removing the collapsed filter
    #[test]
    fn test_ignores_collapsed_cells() {
        let mut grid = Grid::new(2, 1, 3).unwrap();
        grid.cell_mut(0, 0).unwrap().collapse_to(1);

        let scan = lowest_entropy_cells(&grid).unwrap();
        assert_eq!(scan.entropy, 3);
        assert_eq!(scan.cells, vec![[1, 0]]);
    }

    // Tests a fully collapsed grid yields no selection
    // Verified by returning the first cell when no candidate exists
    #[test]
    fn test_fully_collapsed_returns_none() {
        let mut grid = Grid::new(2, 2, 2).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                grid.cell_mut(x, y).unwrap().collapse_to(0);
            }
        }

        let mut rng = RandomSelector::new(Some(5));
        assert!(lowest_entropy_cells(&grid).is_none());
        assert_eq!(select_lowest_entropy(&grid, &mut rng), None);
    }

    // Tests ties are broken across all tied cells
    // Verified by always returning the first tied cell
    #[test]
    fn test_ties_are_broken_randomly() {
        let grid = Grid::new(3, 2, 4).unwrap();
        let mut rng = RandomSelector::new(Some(11));

        let scan = lowest_entropy_cells(&grid).unwrap();
        assert_eq!(scan.cells.len(), 6);

        let picked: HashSet<[usize; 2]> = (0..200)
            .filter_map(|_| select_lowest_entropy(&grid, &mut rng))
            .collect();
        assert_eq!(picked.len(), 6, "every tied cell should eventually be chosen");
    }
}
