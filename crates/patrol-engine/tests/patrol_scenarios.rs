//! Scenario tests for the patrol step, driven through the public API.

use patrol_core::TickId;
use patrol_engine::{
    advance_tick, initialize, interpolated_position, next_cell, PatrolConfig, PatrolWorld,
    StepOutcome, WeightField, MAX_WEIGHT,
};
use patrol_space::Grid;
use patrol_test_utils::{
    c, enclosed_cell, open_grid, raw_weights, reference_grid, walled_grid, REFERENCE_START,
};

#[test]
fn center_of_open_three_by_three_picks_top_neighbour() {
    let grid = open_grid(3, 3);
    let field = WeightField::from_raw(
        &grid,
        raw_weights(&[&[255, 255, 255], &[255, 0, 255], &[255, 255, 255]]),
    )
    .unwrap();
    assert_eq!(next_cell(&grid, &field, c(1, 1)), c(1, 0));

    // Same outcome through the tick entry point.
    let (_, mut agent) = initialize(&grid, c(1, 1), 5).unwrap();
    let mut field = field;
    match advance_tick(&grid, &mut field, &mut agent) {
        StepOutcome::Committed { from, to, .. } => {
            assert_eq!(from, c(1, 1));
            assert_eq!(to, c(1, 0));
        }
        other => panic!("expected a commit, got {other:?}"),
    }
}

#[test]
fn enclosed_agent_idles_for_many_ticks() {
    let (grid, center) = enclosed_cell();
    let (mut field, mut agent) = initialize(&grid, center, 1).unwrap();
    for _ in 0..12 {
        let out = advance_tick(&grid, &mut field, &mut agent);
        assert_eq!(
            out,
            StepOutcome::Committed {
                from: center,
                to: center,
                weight: 0
            }
        );
        assert_eq!(agent.next(), agent.previous());
        assert_eq!(field.get(&grid, center), Some(0));
    }
}

#[test]
fn enclosed_world_counts_idle_steps() {
    let (grid, center) = enclosed_cell();
    let mut world = PatrolWorld::new(PatrolConfig::new(grid, center).with_step_interval(2)).unwrap();
    world.run(20);
    assert_eq!(world.metrics().steps, 10);
    assert_eq!(world.metrics().idle_steps, 10);
    assert_eq!(world.interpolated_position(), (1.0, 1.0));
}

#[test]
fn corner_start_stays_in_bounds() {
    let grid = open_grid(4, 4);
    let (mut field, mut agent) = initialize(&grid, c(0, 0), 1).unwrap();
    let out = advance_tick(&grid, &mut field, &mut agent);
    assert_eq!(
        out,
        StepOutcome::Committed {
            from: c(0, 0),
            to: c(0, 1),
            weight: MAX_WEIGHT
        }
    );
}

#[test]
fn far_corner_start_stays_in_bounds() {
    let grid = open_grid(4, 4);
    let (mut field, mut agent) = initialize(&grid, c(3, 3), 1).unwrap();
    advance_tick(&grid, &mut field, &mut agent);
    assert_eq!(agent.next(), c(3, 2));
}

#[test]
fn visited_cell_is_zero_right_after_commit() {
    let grid = reference_grid();
    let (mut field, mut agent) = initialize(&grid, REFERENCE_START, 3).unwrap();
    for _ in 0..300 {
        if let StepOutcome::Committed { from, .. } = advance_tick(&grid, &mut field, &mut agent) {
            assert_eq!(field.get(&grid, from), Some(0));
        }
    }
}

#[test]
fn steps_are_single_axis_unit_moves_onto_floor() {
    let grid = reference_grid();
    let mut world = PatrolWorld::new(PatrolConfig::new(grid, REFERENCE_START)).unwrap();
    for _ in 0..2_000 {
        if let StepOutcome::Committed { from, to, .. } = world.advance_tick() {
            assert!(world.grid().is_passable(to));
            assert!(from.col == to.col || from.row == to.row);
            assert_eq!(from.manhattan(to), 1, "{from} -> {to} is not a unit move");
        }
    }
}

#[test]
fn reference_map_is_fully_covered() {
    let grid = reference_grid();
    let passable = grid.passable_count();
    let mut world =
        PatrolWorld::new(PatrolConfig::new(grid, REFERENCE_START).with_step_interval(1)).unwrap();
    world.run(5_000);
    assert_eq!(world.metrics().visited(), passable);
    assert_eq!(world.metrics().coverage_ratio(passable), 1.0);
    assert!(world.metrics().full_coverage_tick(passable).is_some());
}

#[test]
fn interpolation_walks_from_previous_towards_next() {
    let grid = open_grid(3, 3);
    let mut world =
        PatrolWorld::new(PatrolConfig::new(grid, c(1, 1)).with_step_interval(4)).unwrap();

    world.advance_tick();
    let agent = *world.agent();
    assert_eq!(agent.previous(), c(1, 1));
    assert_eq!(agent.next(), c(1, 0));
    assert_eq!(interpolated_position(&agent), (1.0, 1.0));

    let mut last_y = 1.0;
    for _ in 0..3 {
        world.advance_tick();
        let (x, y) = world.interpolated_position();
        assert_eq!(x, 1.0);
        assert!(y < last_y && y > 0.0);
        last_y = y;
    }
    assert_eq!(world.current_tick(), TickId(4));
}

#[test]
fn blocked_slots_are_never_read_or_written() {
    let grid = walled_grid(6, 7);
    // Fill wall slots with sentinels that would win any scan if read.
    let mut raw = Vec::with_capacity(grid.cell_count());
    for (i, p) in grid.as_slice().iter().enumerate() {
        raw.push(match p {
            patrol_space::Passability::Blocked => 200 + (i % 50) as u8,
            patrol_space::Passability::Passable => 1,
        });
    }
    let (_, mut agent) = initialize(&grid, c(1, 1), 1).unwrap();
    let mut field = WeightField::from_raw(&grid, raw.clone()).unwrap();

    for _ in 0..500 {
        advance_tick(&grid, &mut field, &mut agent);
        assert!(grid.is_passable(agent.next()));
    }
    for (i, p) in grid.as_slice().iter().enumerate() {
        if *p == patrol_space::Passability::Blocked {
            assert_eq!(field.as_raw()[i], raw[i], "wall slot {i} was written");
        }
    }
}

#[test]
fn single_row_corridor_sweeps_back_and_forth() {
    let grid = Grid::parse(".....").unwrap();
    let mut world =
        PatrolWorld::new(PatrolConfig::new(grid, c(0, 0)).with_step_interval(1)).unwrap();
    let mut path = vec![];
    for _ in 0..9 {
        world.advance_tick();
        path.push(world.agent().previous().col);
    }
    assert_eq!(path, vec![0, 1, 2, 3, 4, 3, 2, 1, 0]);
}
