//! Tests for border and corner-junction rendering

#[cfg(test)]
mod tests {

    use jumpflood::algorithm::borders::render_borders;
    use jumpflood::io::configuration::{BACKGROUND_COLOR, BORDER_COLOR, CORNER_COLOR};
    use jumpflood::spatial::{Grid, Position};

    // Assigns every cell an owner chosen by the given rule, as a flood
    // pass would have left it
    fn owned_grid<F>(width: usize, height: usize, owner_of: F) -> Grid
    where
        F: Fn(Position) -> Position,
    {
        let mut grid = Grid::new(width, height);
        for pos in grid.positions().collect::<Vec<_>>() {
            if let Some(cell) = grid.cell_mut(pos) {
                cell.color = [40, 40, 40];
                cell.owner = Some(owner_of(pos));
            }
        }
        grid
    }

    #[test]
    fn test_uniform_grid_renders_black_interior() {
        let seed = Position::new(4, 4);
        let mut grid = owned_grid(8, 8, |_| seed);

        render_borders(&mut grid);

        for pos in grid.positions() {
            let cell = grid.cell(pos).copied().unwrap_or_default();
            let interior = pos.x >= 1 && pos.x <= 6 && pos.y >= 1 && pos.y <= 6;
            if interior {
                assert_eq!(cell.color, BACKGROUND_COLOR, "cell {pos:?}");
            } else {
                // The outer frame is never visited
                assert_eq!(cell.color, [40, 40, 40], "cell {pos:?}");
            }
        }
    }

    #[test]
    fn test_two_regions_render_a_symmetric_border() {
        let left = Position::new(1, 3);
        let right = Position::new(6, 3);
        let mut grid = owned_grid(8, 8, |pos| if pos.x < 4 { left } else { right });

        render_borders(&mut grid);

        for y in 1..7 {
            // Both sides of the boundary are marked, mirroring each other
            let a = grid.cell(Position::new(3, y)).copied().unwrap_or_default();
            let b = grid.cell(Position::new(4, y)).copied().unwrap_or_default();
            assert_eq!(a.color, BORDER_COLOR, "left of split at y={y}");
            assert_eq!(b.color, BORDER_COLOR, "right of split at y={y}");

            let far = grid.cell(Position::new(1, y)).copied().unwrap_or_default();
            assert_eq!(far.color, BACKGROUND_COLOR, "interior at y={y}");
        }
    }

    #[test]
    fn test_three_regions_mark_corner_junctions() {
        let a = Position::new(1, 1);
        let b = Position::new(6, 1);
        let c = Position::new(3, 6);
        let mut grid = owned_grid(8, 8, |pos| {
            if pos.y >= 4 {
                c
            } else if pos.x < 4 {
                a
            } else {
                b
            }
        });

        render_borders(&mut grid);

        // (3,3) touches owners a (itself), b at (4,3), and c at (3,4)
        let junction = grid.cell(Position::new(3, 3)).copied().unwrap_or_default();
        assert_eq!(junction.color, CORNER_COLOR);

        // Cells along the a/b boundary far from region c see only two owners
        let plain_border = grid.cell(Position::new(3, 1)).copied().unwrap_or_default();
        assert_eq!(plain_border.color, BORDER_COLOR);
    }

    #[test]
    fn test_exactly_two_owners_never_produce_corners() {
        let left = Position::new(1, 3);
        let right = Position::new(6, 3);
        let mut grid = owned_grid(10, 10, |pos| if pos.x < 5 { left } else { right });

        render_borders(&mut grid);

        assert!(
            grid.iter_row_major().all(|cell| cell.color != CORNER_COLOR),
            "two distinct owners must not mark corners"
        );
    }

    #[test]
    fn test_pass_is_idempotent_and_preserves_owners() {
        let a = Position::new(2, 2);
        let b = Position::new(7, 7);
        let mut grid = owned_grid(10, 10, |pos| if pos.x + pos.y < 9 { a } else { b });

        render_borders(&mut grid);
        let owners_after_first: Vec<_> = grid.iter_row_major().map(|cell| cell.owner).collect();
        let colors_after_first: Vec<_> = grid.iter_row_major().map(|cell| cell.color).collect();

        render_borders(&mut grid);
        let owners_after_second: Vec<_> = grid.iter_row_major().map(|cell| cell.owner).collect();
        let colors_after_second: Vec<_> = grid.iter_row_major().map(|cell| cell.color).collect();

        assert_eq!(owners_after_first, owners_after_second);
        assert_eq!(colors_after_first, colors_after_second);
    }
}
