use super::*;

fn serpentine_3x3() -> Maze {
    // 0,0 -> 0,1 -> 0,2 -> 1,2 -> 1,1 -> 1,0 -> 2,0 -> 2,1 -> 2,2
    let mut maze = Maze::new(3, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
    maze.add_all_walls();
    let path = [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0), (2, 0), (2, 1), (2, 2)];
    for pair in path.windows(2) {
        let (a, b) = (Cell::new(pair[0].0, pair[0].1), Cell::new(pair[1].0, pair[1].1));
        maze.del_wall(a, b).unwrap();
    }
    maze
}

#[test]
fn construction_rejects_bad_endpoints() {
    assert_eq!(
        Maze::new(3, Cell::new(1, 1), Cell::new(1, 1)),
        Err(MazeError::Construction(ConstructionFault::StartEqualsEnd))
    );
    assert_eq!(
        Maze::new(3, Cell::new(3, 0), Cell::new(1, 1)),
        Err(MazeError::Construction(ConstructionFault::StartOutOfBounds))
    );
    assert_eq!(
        Maze::new(3, Cell::new(0, 0), Cell::new(0, -1)),
        Err(MazeError::Construction(ConstructionFault::EndOutOfBounds))
    );
    assert_eq!(
        Maze::new(0, Cell::new(0, 0), Cell::new(0, 1)),
        Err(MazeError::Construction(ConstructionFault::ZeroSize))
    );
    assert_eq!(
        Maze::new(5_000_000_000, Cell::new(0, 0), Cell::new(0, 1)),
        Err(MazeError::Construction(ConstructionFault::TooLarge { size: 5_000_000_000 }))
    );
}

#[test]
fn blank_maze_is_open_and_valid() {
    let maze = Maze::new(4, Cell::new(0, 0), Cell::new(3, 3)).unwrap();
    assert_eq!(maze.count_walls(), 0);
    assert!(maze.is_valid());
    assert_eq!(maze.position(), maze.start());
}

#[test]
fn all_walls_make_the_maze_invalid() {
    let mut maze = Maze::new(3, Cell::new(0, 0), Cell::new(2, 2)).unwrap();
    maze.add_all_walls();
    assert!(!maze.is_valid());
    assert_eq!(maze.ensure_valid(), Err(MazeError::InvalidMaze));
    assert!(maze.options().is_empty());
}

#[test]
fn construction_reveals_the_start_cell() {
    let maze = serpentine_3x3();
    assert_eq!(maze.fog().known_count(), 2);
    assert_eq!(maze.fog().walls().get_wall(Cell::new(0, 0), Cell::new(0, 1)), Ok(WallState::Absent));
    assert_eq!(
        maze.fog().walls().get_wall(Cell::new(0, 0), Cell::new(1, 0)),
        Ok(WallState::Present)
    );
}

#[test]
fn move_to_follows_open_walls_and_reveals() {
    let mut maze = serpentine_3x3();
    assert_eq!(maze.options(), vec![Cell::new(0, 1)]);

    maze.move_to(Cell::new(0, 1)).expect("open corridor");
    assert_eq!(maze.position(), Cell::new(0, 1));
    assert_eq!(maze.fog().known_count(), 4);
    assert_eq!(maze.fog().walls().get_wall(Cell::new(0, 1), Cell::new(1, 1)), Ok(WallState::Present));
}

#[test]
fn move_through_a_wall_is_rejected_without_state_change() {
    let mut maze = serpentine_3x3();
    let before = maze.clone();

    let err = maze.move_to(Cell::new(1, 0)).expect_err("wall between (0,0) and (1,0)");
    assert_eq!(err, MazeError::IllegalMove { from: Cell::new(0, 0), to: Cell::new(1, 0) });
    assert_eq!(maze, before);

    assert!(maze.move_to(Cell::new(0, 0)).is_err(), "staying put is not a move");
    assert!(maze.move_to(Cell::new(2, 2)).is_err(), "teleporting is not a move");
    assert_eq!(maze, before);
}

#[test]
fn walking_the_serpentine_solves_the_maze() {
    let mut maze = serpentine_3x3();
    let path = [(0, 1), (0, 2), (1, 2), (1, 1), (1, 0), (2, 0), (2, 1), (2, 2)];
    for (row, col) in path {
        assert!(!maze.solved());
        maze.move_to(Cell::new(row, col)).unwrap();
    }
    assert!(maze.solved());
    assert_eq!(maze.fog().walls(), maze.walls(), "every wall touches a visited cell");
}

#[test]
fn reset_restores_fog_and_position() {
    let mut maze = serpentine_3x3();
    let fresh = maze.clone();
    maze.move_to(Cell::new(0, 1)).unwrap();
    maze.move_to(Cell::new(0, 2)).unwrap();

    maze.reset();

    assert_eq!(maze, fresh);
}

#[test]
fn set_wall_refreshes_fog_around_the_solver() {
    let mut maze = Maze::new(2, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
    maze.add_wall(Cell::new(0, 0), Cell::new(0, 1)).unwrap();
    assert_eq!(maze.fog().walls().get_wall(Cell::new(0, 0), Cell::new(0, 1)), Ok(WallState::Present));
    assert!(maze.is_valid());
    maze.add_wall(Cell::new(0, 0), Cell::new(1, 0)).unwrap();
    assert!(!maze.is_valid());
}

#[test]
fn adjacent_cells_ignores_walls() {
    let maze = serpentine_3x3();
    assert_eq!(maze.adjacent_cells(Cell::new(0, 0)), vec![Cell::new(1, 0), Cell::new(0, 1)]);
    assert_eq!(maze.l1_distance(), 4);
}
