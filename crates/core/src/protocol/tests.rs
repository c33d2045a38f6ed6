use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::*;
use crate::carve::design_maze;
use crate::error::ConstructionFault;

// 3x3, start top-left, end bottom-right, single corridor down the left then along the bottom.
const CORRIDOR_3X3: &str = "3\n0 0\n2 2\n011011\n111100\n";

#[test]
fn architect_text_loads_walls_positionally() {
    let maze = Maze::load_from_architect_string(CORRIDOR_3X3).expect("valid corridor");

    assert_eq!(maze.size(), 3);
    assert_eq!(maze.start(), Cell::new(0, 0));
    assert_eq!(maze.end(), Cell::new(2, 2));
    assert_eq!(maze.get_wall(Cell::new(0, 0), Cell::new(1, 0)), Ok(WallState::Absent));
    assert_eq!(maze.get_wall(Cell::new(1, 0), Cell::new(2, 0)), Ok(WallState::Absent));
    assert_eq!(maze.get_wall(Cell::new(2, 0), Cell::new(2, 1)), Ok(WallState::Absent));
    assert_eq!(maze.get_wall(Cell::new(2, 1), Cell::new(2, 2)), Ok(WallState::Absent));
    assert_eq!(maze.count_walls(), 8);
    assert_eq!(maze.to_architect_string(), CORRIDOR_3X3);
}

#[test]
fn carved_maze_survives_architect_round_trip() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let maze = design_maze(&mut rng, 9).unwrap();

    let loaded = Maze::load_from_architect_string(&maze.to_architect_string()).unwrap();

    assert_eq!(loaded.walls(), maze.walls());
    assert_eq!(loaded.start(), maze.start());
    assert_eq!(loaded.end(), maze.end());
}

#[test]
fn mismatched_header_size_is_a_parse_error() {
    // Header says 3, wall strings are sized for 4.
    let text = "3\n0 0\n2 2\n000000000000\n000000000000\n";
    let err = Maze::load_from_architect_string(text).expect_err("wrong wall length");
    assert!(matches!(err, MazeError::ProtocolParse { line: 4, .. }), "{err}");
}

#[test]
fn architect_text_rejects_fog_characters_and_bad_line_counts() {
    let fogged = "2\n0 0\n1 1\n0?\n00\n";
    assert!(matches!(
        Maze::load_from_architect_string(fogged),
        Err(MazeError::ProtocolParse { line: 4, .. })
    ));

    let short = "2\n0 0\n1 1\n00\n";
    assert!(matches!(
        Maze::load_from_architect_string(short),
        Err(MazeError::ProtocolParse { .. })
    ));

    let garbage_size = "two\n0 0\n1 1\n00\n00\n";
    assert!(matches!(
        Maze::load_from_architect_string(garbage_size),
        Err(MazeError::ProtocolParse { line: 1, .. })
    ));

    let bad_cell = "2\n0\n1 1\n00\n00\n";
    assert!(matches!(
        Maze::load_from_architect_string(bad_cell),
        Err(MazeError::ProtocolParse { line: 2, .. })
    ));
}

#[test]
fn architect_text_is_revalidated_on_load() {
    let walled_in = "2\n0 0\n1 1\n11\n11\n";
    assert_eq!(Maze::load_from_architect_string(walled_in), Err(MazeError::InvalidMaze));

    let same_endpoints = "2\n1 1\n1 1\n00\n00\n";
    assert_eq!(
        Maze::load_from_architect_string(same_endpoints),
        Err(MazeError::Construction(ConstructionFault::StartEqualsEnd))
    );
}

#[test]
fn architect_text_tolerates_missing_or_extra_trailing_newlines() {
    let bare = CORRIDOR_3X3.trim_end();
    let padded = format!("{CORRIDOR_3X3}\n\n");
    assert!(Maze::load_from_architect_string(bare).is_ok());
    assert!(Maze::load_from_architect_string(&padded).is_ok());
}

#[test]
fn solver_text_shows_only_revealed_walls() {
    let mut maze = Maze::load_from_architect_string(CORRIDOR_3X3).unwrap();
    let text = maze.to_solver_string();

    assert_eq!(text, "3\n0 0\n2 2\n0?????\n1?????\n0 0\n1 0\n");
}

#[test]
fn solver_text_grows_as_the_solver_moves() {
    let mut maze = Maze::load_from_architect_string(CORRIDOR_3X3).unwrap();
    maze.move_to(Cell::new(1, 0)).unwrap();
    let text = maze.to_solver_string();

    assert_eq!(text, "3\n0 0\n2 2\n0??0??\n1?1???\n1 0\n2 0,0 0\n");
}

#[test]
fn solver_text_round_trips_into_a_fogged_maze() {
    let mut maze = Maze::load_from_architect_string(CORRIDOR_3X3).unwrap();
    maze.move_to(Cell::new(1, 0)).unwrap();
    let text = maze.to_solver_string();

    let view = Maze::load_from_solver_string(&text).expect("driver output must load");

    assert_eq!(view.position(), Cell::new(1, 0));
    assert_eq!(view.options(), maze.options());
    assert_eq!(view.get_wall(Cell::new(1, 1), Cell::new(1, 2)), Ok(WallState::Unknown));
    assert_eq!(view.fog().walls(), maze.fog().walls());
    assert!(!view.is_valid(), "fog hides the rest of the corridor");
}

#[test]
fn solver_text_with_no_options_line_loads() {
    let text = "2\n0 0\n1 1\n1?\n1?\n0 0\n";
    let view = Maze::load_from_solver_string(text).unwrap();
    assert!(view.options().is_empty());

    let with_blank = "2\n0 0\n1 1\n1?\n1?\n0 0\n\n";
    assert!(Maze::load_from_solver_string(with_blank).is_ok());
}

#[test]
fn solver_text_rejects_inconsistent_options_and_positions() {
    let lying = "2\n0 0\n1 1\n1?\n1?\n0 0\n0 1\n";
    assert!(matches!(
        Maze::load_from_solver_string(lying),
        Err(MazeError::ProtocolParse { line: 7, .. })
    ));

    let outside = "2\n0 0\n1 1\n??\n??\n2 0\n";
    assert!(matches!(
        Maze::load_from_solver_string(outside),
        Err(MazeError::ProtocolParse { line: 6, .. })
    ));

    let bad_char = "2\n0 0\n1 1\n1x\n1?\n0 0\n";
    assert!(matches!(
        Maze::load_from_solver_string(bad_char),
        Err(MazeError::ProtocolParse { line: 4, .. })
    ));
}

#[test]
fn decisions_parse_as_a_single_coordinate_pair() {
    assert_eq!(parse_decision("3 4\n"), Ok(Cell::new(3, 4)));
    assert_eq!(parse_decision("  0   1  "), Ok(Cell::new(0, 1)));
    assert!(parse_decision("").is_err());
    assert!(parse_decision("1 2 3").is_err());
    assert!(parse_decision("1 2\n3 4\n").is_err());
    assert!(parse_decision("a b").is_err());
}

#[test]
fn oversized_header_is_rejected_before_any_allocation() {
    // Squaring this size overflows a 64-bit usize.
    let architect = "4294967297\n0 0\n0 1\n00\n00\n";
    assert!(matches!(
        Maze::load_from_architect_string(architect),
        Err(MazeError::ProtocolParse { line: 1, .. })
    ));

    let solver = "4294967297\n0 0\n0 1\n??\n??\n0 0\n\n";
    assert!(matches!(
        Maze::load_from_solver_string(solver),
        Err(MazeError::ProtocolParse { line: 1, .. })
    ));

    let just_over = format!("{}\n0 0\n0 1\n00\n00\n", MAX_SIZE + 1);
    let err = Maze::load_from_architect_string(&just_over).expect_err("over the cap");
    assert!(err.to_string().contains("exceeds the maximum"), "{err}");
}
