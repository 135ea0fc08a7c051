#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use ndarray::arr2;

    use crate::builder::BoardBuilder;
    use crate::catalog::Difficulty;
    use crate::cell::Cell;
    use crate::codec;
    use crate::error::BoardError;
    use crate::location::Location;
    use crate::mapper::CellMapper;
    use crate::shape::SquareStep;
    use crate::wire::Wire;
    use crate::Board;

    #[test]
    fn adjacency_is_symmetric_and_unit_distance() {
        let locations = (0..3)
            .cartesian_product(0..3)
            .map(|(x, y)| Location(x, y))
            .collect_vec();

        for &a in &locations {
            for &b in &locations {
                assert_eq!(a.is_adjacent(b), b.is_adjacent(a));

                let manhattan = a.0.abs_diff(b.0) + a.1.abs_diff(b.1);
                assert_eq!(a.is_adjacent(b), manhattan == 1);
            }
        }
    }

    #[test]
    fn direction_between_neighbors() {
        let center = Location(1, 1);
        assert_eq!(SquareStep::direction_to(center, Location(2, 1)), Some(SquareStep::Right));
        assert_eq!(SquareStep::direction_to(center, Location(0, 1)), Some(SquareStep::Left));
        assert_eq!(SquareStep::direction_to(center, Location(1, 0)), Some(SquareStep::Up));
        assert_eq!(SquareStep::direction_to(center, Location(1, 2)), Some(SquareStep::Down));
        assert_eq!(SquareStep::direction_to(center, center), None);
        assert_eq!(SquareStep::direction_to(center, Location(2, 2)), None);
        assert_eq!(SquareStep::direction_to(center, Location(1, 3)), None);
    }

    #[test]
    fn segment_bits_sum_to_opposites() {
        assert_eq!(SquareStep::Right.bit() + SquareStep::Left.bit(), 5);
        assert_eq!(SquareStep::Up.bit() + SquareStep::Down.bit(), 10);
        for dir in [SquareStep::Up, SquareStep::Down, SquareStep::Left, SquareStep::Right] {
            assert_eq!(dir.invert().invert(), dir);
        }
    }

    #[test]
    fn connect_across_two_cell_board() {
        let mut board = BoardBuilder::with_dims(2, 1)
            .add_termini(1, (Location(0, 0), Location(1, 0)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        assert_eq!(board.cur_color(), Some(1));
        assert_eq!(board.wires()[0].path(), &[Location(0, 0)]);
        assert!(!board.wires()[0].is_complete());
        assert!(!board.is_complete());

        board.update_on_drag(0, 1);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(1, 0)]);
        assert!(board.wires()[0].is_complete());
        assert!(board.wires()[0].is_connected());
        // both ends stay terminus cells, so their encoded values stay negative
        assert_eq!(board.color_string(), "-1,-1");
        assert_eq!(board.shape_string(), "1,4");
        assert!(board.is_complete());
    }

    #[test]
    fn horizontal_then_vertical_segment_codes() {
        let mut board = BoardBuilder::with_dims(2, 2)
            .add_termini(1, (Location(0, 0), Location(1, 1)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        board.update_on_drag(1, 1);

        assert!(board.is_complete());
        // (0,0) exits right; (1,0) enters from the left and exits down; (1,1) enters from above
        assert_eq!(board.shape_string(), "1,12/0,2");
        assert_eq!(board.color_string(), "-1,1/0,-1");
    }

    #[test]
    fn dragging_back_over_own_path_shortens_it() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 2)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        board.update_on_drag(0, 2);
        board.update_on_drag(1, 2);
        board.update_on_drag(1, 1);
        assert_eq!(
            board.wires()[0].path(),
            &[Location(0, 0), Location(1, 0), Location(2, 0), Location(2, 1), Location(1, 1)]
        );

        // re-entering (1, 0) keeps the path only up to its earlier occurrence
        board.update_on_drag(0, 1);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(1, 0)]);
    }

    #[test]
    fn crossing_retracts_the_invaded_wire() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 0)))
            .add_termini(2, (Location(0, 2), Location(2, 2)))
            .build()
            .unwrap();

        // route the first wire through the middle row
        board.update_on_press(0, 0);
        board.update_on_drag(1, 0);
        board.update_on_drag(1, 1);
        board.update_on_drag(1, 2);
        board.update_on_drag(0, 2);
        assert!(board.wires()[0].is_complete());
        board.update_on_release();

        // the second wire invades (1, 1), which the first wire held last move
        board.update_on_press(2, 0);
        board.update_on_drag(2, 1);
        board.update_on_drag(1, 1);

        assert_eq!(board.wires()[1].path(), &[Location(0, 2), Location(1, 2), Location(1, 1)]);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(0, 1)]);
        assert!(!board.wires()[0].is_complete());
        assert_eq!(board.colors()[(1, 1)], Cell::Path { color: 2 });
        assert_eq!(board.colors()[(1, 2)], Cell::Empty);
    }

    #[test]
    fn retraction_without_intersection_keeps_previous_path() {
        let mut wire = Wire::new(1);
        wire.add_on_drag(Location(2, 1));
        wire.add_on_drag(Location(2, 2));
        wire.add_on_drag(Location(2, 3));
        wire.update_after_move();

        wire.update_on_cross(&[Location(2, 2)]);
        assert_eq!(wire.path(), &[Location(2, 1)]);

        wire.update_on_cross(&[Location(0, 0)]);
        assert_eq!(wire.path(), &[Location(2, 1), Location(2, 2), Location(2, 3)]);
    }

    #[test]
    fn pressing_an_empty_cell_selects_nothing() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 2)))
            .build()
            .unwrap();

        board.update_on_press(1, 1);
        assert_eq!(board.cur_color(), None);
        assert!(board.wires().iter().all(|w| w.path().is_empty()));
        assert_eq!(board.move_count(), 1);

        // a drag with no active wire is a no-op
        board.update_on_drag(1, 2);
        assert!(board.wires().iter().all(|w| w.path().is_empty()));

        // an out-of-range press neither selects nor counts
        board.update_on_press(-1, 0);
        board.update_on_press(0, 3);
        assert_eq!(board.move_count(), 1);
    }

    #[test]
    fn drag_cannot_enter_a_foreign_terminal() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 0)))
            .add_termini(2, (Location(1, 1), Location(2, 2)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(1, 0);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(0, 1)]);

        board.update_on_drag(1, 1);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(0, 1)]);
    }

    #[test]
    fn drag_snaps_to_nearest_in_board_candidate() {
        let mut board = BoardBuilder::with_dims(3, 1)
            .add_termini(1, (Location(0, 0), Location(2, 0)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        // the pointer is far past the right edge; only the tail and its right neighbor are
        // in board, and the right neighbor is closer
        board.update_on_drag(0, 7);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(1, 0)]);

        // the pointer sitting on the tail itself changes nothing
        board.update_on_drag(0, 1);
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(1, 0)]);
    }

    #[test]
    fn pressing_mid_path_truncates_there() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 2)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        board.update_on_drag(0, 2);
        board.update_on_release();

        board.update_on_press(0, 1);
        assert_eq!(board.cur_color(), Some(1));
        assert_eq!(board.wires()[0].path(), &[Location(0, 0), Location(1, 0)]);
    }

    #[test]
    fn pressing_a_terminal_of_a_connected_wire_restarts_there() {
        let mut board = BoardBuilder::with_dims(2, 1)
            .add_termini(1, (Location(0, 0), Location(1, 0)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        assert!(board.wires()[0].is_complete());
        board.update_on_release();

        board.update_on_press(0, 1);
        assert_eq!(board.wires()[0].path(), &[Location(1, 0)]);
        assert!(!board.wires()[0].is_complete());
    }

    #[test]
    fn looping_back_to_the_start_terminal_resets_the_wire() {
        let mut wire = Wire::new(1);
        wire.set_terminal(Location(0, 0));
        wire.set_terminal(Location(3, 0));

        wire.add_on_drag(Location(0, 0));
        wire.add_on_drag(Location(0, 1));
        wire.add_on_drag(Location(0, 0));
        assert_eq!(wire.path(), &[Location(0, 0)]);
        assert!(!wire.is_connected());
    }

    #[test]
    fn wire_completion_requires_distinct_capped_terminals() {
        let mut wire = Wire::new(1);
        wire.set_terminal(Location(0, 0));
        wire.set_terminal(Location(3, 0));
        assert!(!wire.is_complete());

        wire.add_on_drag(Location(0, 0));
        wire.add_on_drag(Location(1, 0));
        assert!(!wire.is_complete());

        wire.add_on_drag(Location(2, 0));
        wire.add_on_drag(Location(3, 0));
        assert!(wire.is_complete());
        assert!(wire.is_connected());

        // a completed wire caps both terminals, steps only between neighbors, and never
        // revisits a cell
        let path = wire.path();
        assert!(wire.is_terminal(path[0]) && wire.is_terminal(*path.last().unwrap()));
        assert!(path.windows(2).all(|pair| pair[0].is_adjacent(pair[1])));
        assert_eq!(path.iter().unique().count(), path.len());
    }

    #[test]
    fn third_terminal_occurrence_is_ignored() {
        let board = BoardBuilder::from_map(&[&[1, 1, 1]]).build().unwrap();
        assert_eq!(
            board.wires()[0].terminals(),
            (Some(Location(0, 0)), Some(Location(1, 0)))
        );
    }

    #[test]
    fn release_twice_changes_nothing() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 2)))
            .build()
            .unwrap();

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        board.update_on_release();

        let snapshot = board
            .wires()
            .iter()
            .map(|w| (w.path().to_vec(), w.prev_path().to_vec(), w.is_pressed()))
            .collect_vec();
        let colors = board.color_string().to_owned();

        board.update_on_release();
        let again = board
            .wires()
            .iter()
            .map(|w| (w.path().to_vec(), w.prev_path().to_vec(), w.is_pressed()))
            .collect_vec();

        assert_eq!(snapshot, again);
        assert_eq!(board.cur_color(), None);
        assert_eq!(board.color_string(), colors);
    }

    #[test]
    fn board_strings_round_trip() {
        let grid = arr2(&[[1, -2, 0], [3, 15, -9]]);
        let encoded = codec::grid_to_string(&grid);
        assert_eq!(encoded, "1,-2,0/3,15,-9");

        let decoded = codec::parse_grid(&encoded);
        for (r, row) in grid.rows().into_iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert_eq!(decoded[r][c], Some(value));
            }
        }
    }

    #[test]
    fn malformed_tokens_decode_as_blanks() {
        let decoded = codec::parse_grid("1,x,-3/oops,4");
        assert_eq!(decoded[0], vec![Some(1), None, Some(-3)]);
        assert_eq!(decoded[1], vec![None, Some(4)]);
    }

    #[test]
    fn catalog_levels_build() {
        let board = Board::new(Difficulty::Easy, 0).unwrap();
        assert_eq!((board.width(), board.height()), (6, 6));
        assert_eq!(board.wires().len(), 4);
        // terminals are discovered scanning the map row-major
        assert_eq!(
            board.wires()[0].terminals(),
            (Some(Location(0, 0)), Some(Location(3, 1)))
        );

        assert_eq!(
            Board::new(Difficulty::Easy, 99).err(),
            Some(BoardError::UnknownLevel { difficulty: Difficulty::Easy, level: 99 })
        );
    }

    #[test]
    fn straight_line_level_plays_to_completion() {
        // the third easy level is six parallel columns
        let mut board = Board::new(Difficulty::Easy, 2).unwrap();
        assert!(!board.is_complete());

        for color in 1..=6 {
            let col = color as isize - 1;
            board.update_on_press(0, col);
            for row in 1..=5 {
                board.update_on_drag(row, col);
            }
            board.update_on_release();
            assert!(board.wires()[color - 1].is_complete());
        }

        assert!(board.is_complete());
        assert_eq!(board.move_count(), 6);
    }

    #[test]
    fn builder_rejects_bad_input() {
        assert_eq!(BoardBuilder::from_map(&[]).build().err(), Some(BoardError::EmptyMap));
        assert_eq!(
            BoardBuilder::with_dims(0, 4).build().err(),
            Some(BoardError::EmptyMap)
        );

        let err = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(5, 1)))
            .build()
            .err();
        assert_eq!(err, Some(BoardError::OutOfBounds { col: 5, row: 1, width: 3, height: 3 }));
    }

    #[test]
    fn display_shows_termini_and_paths() {
        let mut board = BoardBuilder::with_dims(3, 3)
            .add_termini(1, (Location(0, 0), Location(2, 2)))
            .build()
            .unwrap();
        assert_eq!(format!("{}", board), "A..\n...\n..A\n");

        board.update_on_press(0, 0);
        board.update_on_drag(0, 1);
        assert_eq!(format!("{}", board), "Aa.\n...\n..A\n");
    }

    #[test]
    fn mapper_floors_pixels_and_rejects_bad_cells() {
        let mapper = CellMapper::new(5, 5, 40.0, 100.0, 50.0);

        assert_eq!(mapper.col_from_x(99.9), -1);
        assert_eq!(mapper.col_from_x(100.0), 0);
        assert_eq!(mapper.col_from_x(139.9), 0);
        assert_eq!(mapper.row_from_y(131.0), 2);

        assert_eq!(mapper.cell_center(Location(0, 0)), Ok((120.0, 70.0)));
        assert_eq!(
            mapper.cell_center(Location(5, 0)),
            Err(BoardError::OutOfBounds { col: 5, row: 0, width: 5, height: 5 })
        );
    }
}
