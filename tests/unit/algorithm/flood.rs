//! Tests for jump flooding propagation

#[cfg(test)]
mod tests {

    use jumpflood::algorithm::flood::{flood, flood_pass};
    use jumpflood::math::distance::squared_distance;
    use jumpflood::spatial::{Grid, Position};

    fn seeded_grid(width: usize, height: usize, seeds: &[(i32, i32, [u8; 3])]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y, color) in seeds {
            let pos = Position::new(x, y);
            if let Some(cell) = grid.cell_mut(pos) {
                cell.color = color;
                cell.owner = Some(pos);
            }
        }
        grid
    }

    #[test]
    fn test_single_seed_claims_every_cell() {
        let seed = Position::new(3, 3);
        let mut grid = seeded_grid(8, 8, &[(3, 3, [10, 20, 30])]);

        flood(&mut grid);

        for pos in grid.positions() {
            let cell = grid.cell(pos).copied().unwrap_or_default();
            assert_eq!(cell.owner, Some(seed), "cell {pos:?}");
            assert_eq!(cell.color, [10, 20, 30], "cell {pos:?}");
        }
    }

    // The 4x4 two-seed scenario: every cell converges to one of the two
    // seeds, and to the strictly nearer one wherever distances differ
    #[test]
    fn test_two_seeds_partition_by_distance() {
        let red = Position::new(1, 1);
        let blue = Position::new(2, 2);
        let mut grid = seeded_grid(4, 4, &[(1, 1, [255, 0, 0]), (2, 2, [0, 0, 255])]);

        flood(&mut grid);

        for pos in grid.positions() {
            let cell = grid.cell(pos).copied().unwrap_or_default();
            let owner = cell.owner;
            assert!(
                owner == Some(red) || owner == Some(blue),
                "cell {pos:?} owned by {owner:?}"
            );

            let to_red = squared_distance(pos, red);
            let to_blue = squared_distance(pos, blue);
            if to_red < to_blue {
                assert_eq!(owner, Some(red), "cell {pos:?}");
                assert_eq!(cell.color, [255, 0, 0]);
            } else if to_blue < to_red {
                assert_eq!(owner, Some(blue), "cell {pos:?}");
                assert_eq!(cell.color, [0, 0, 255]);
            }
            // Ties may resolve to either seed depending on write order
        }
    }

    #[test]
    fn test_no_seeds_leaves_grid_unassigned() {
        let mut grid = Grid::new(6, 6);

        flood(&mut grid);

        assert!(grid.iter_row_major().all(|cell| cell.owner.is_none()));
    }

    // An extra refinement pass over a converged grid can only keep or
    // shorten each cell's distance to its claimed seed
    #[test]
    fn test_updates_never_increase_held_distance() {
        let mut grid = seeded_grid(
            16,
            16,
            &[(2, 3, [200, 0, 0]), (12, 5, [0, 200, 0]), (7, 13, [0, 0, 200])],
        );

        flood(&mut grid);

        let before: Vec<u64> = grid
            .positions()
            .map(|pos| {
                grid.cell(pos)
                    .and_then(|cell| cell.owner)
                    .map_or(u64::MAX, |owner| squared_distance(pos, owner))
            })
            .collect();

        flood_pass(&mut grid, 1);

        for (index, pos) in grid.positions().enumerate() {
            let after = grid
                .cell(pos)
                .and_then(|cell| cell.owner)
                .map_or(u64::MAX, |owner| squared_distance(pos, owner));
            let limit = before.get(index).copied().unwrap_or(0);
            assert!(after <= limit, "cell {pos:?} moved farther from its seed");
        }
    }

    #[test]
    fn test_assigned_owners_always_point_at_original_seeds() {
        let seeds = [(2, 2, [50, 60, 70]), (9, 4, [80, 90, 100])];
        let mut grid = seeded_grid(12, 8, &seeds);

        flood(&mut grid);

        let seed_positions = [Position::new(2, 2), Position::new(9, 4)];
        for pos in grid.positions() {
            let owner = grid.cell(pos).and_then(|cell| cell.owner);
            assert!(
                owner.is_some_and(|o| seed_positions.contains(&o)),
                "cell {pos:?} owned by {owner:?}"
            );
        }
    }

    #[test]
    fn test_single_pass_at_large_step_reaches_distant_cells() {
        let mut grid = seeded_grid(9, 9, &[(0, 0, [1, 2, 3])]);

        // One pass at step 4 lets ownership hop 0 -> 4 -> 8 within the scan
        flood_pass(&mut grid, 4);

        let corner = grid.cell(Position::new(8, 8)).copied().unwrap_or_default();
        assert_eq!(corner.owner, Some(Position::new(0, 0)));
    }
}
