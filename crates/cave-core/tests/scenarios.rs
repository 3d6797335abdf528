//! End-to-end generation scenarios

use cave_core::map::{
    Coord, Room, RoomGraph, RoomId, closest_connection, connect_rooms, find_regions,
};
use cave_core::{
    GeneratorConfig, Grid, MapError, MapGenerator, MapOutput, MapRng, RandomSource, Tile,
    generate_output,
};

/// Replays a fixed list of values, wrapping around
struct Sequence {
    values: Vec<u32>,
    next: usize,
}

impl Sequence {
    fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }
}

impl RandomSource for Sequence {
    fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % n
    }
}

#[test]
fn test_empty_fill_gives_one_room_and_two_outlines() {
    let config = GeneratorConfig::new(20, 20, 0).with_seed(3);
    let map = MapGenerator::new(config.clone())
        .unwrap()
        .generate(&mut MapRng::new(3))
        .unwrap();
    assert_eq!(map.rooms.len(), 1);
    assert_eq!(find_regions(&map.grid, Tile::Floor).len(), 1);

    let output = generate_output(&config, &mut MapRng::new(3)).unwrap();
    assert!(output.error.is_none());
    // Outer frame plus the inner cave wall
    assert_eq!(output.walls.len(), 2);
    assert_eq!(output.map.len(), 22);
    assert!(output.map.iter().all(|column| column.len() == 22));
}

#[test]
fn test_full_fill_reports_degenerate_map() {
    let config = GeneratorConfig::new(20, 20, 100);
    let err = generate_output(&config, &mut MapRng::new(1)).unwrap_err();
    assert!(matches!(err, MapError::DegenerateMap { .. }));

    let output = MapOutput::failure(&err);
    assert!(output.map.is_empty());
    assert!(output.walls.is_empty());
    assert!(output.error.is_some());
}

#[test]
fn test_invalid_parameters_are_rejected_before_generation() {
    for config in [
        GeneratorConfig::new(0, 20, 40),
        GeneratorConfig::new(20, 0, 40),
        GeneratorConfig::new(20, 20, 101),
    ] {
        let err = generate_output(&config, &mut MapRng::new(1)).unwrap_err();
        assert!(matches!(err, MapError::InvalidParameters { .. }), "{config:?}");
    }
}

#[test]
fn test_two_rooms_get_a_corridor() {
    // Two 9x8 rooms with a nine-cell wall band between them
    let mut grid = Grid::new(30, 12, Tile::Wall);
    for x in (2..=10).chain(19..=27) {
        for y in 2..=9 {
            grid.set(x, y, Tile::Floor);
        }
    }
    let rooms = find_regions(&grid, Tile::Floor)
        .into_iter()
        .map(|region| Room::new(region, &grid))
        .collect();
    let mut graph = RoomGraph::new(rooms);
    graph.set_main_room(RoomId(0));
    assert!(!graph.all_accessible());

    // Nearest edge tiles face each other across the top row of the band
    let nearest = closest_connection(&graph, &[RoomId(0)], &[RoomId(1)]).unwrap();
    assert_eq!(nearest.tile_a, Coord::new(10, 2));
    assert_eq!(nearest.tile_b, Coord::new(19, 2));

    let passages = connect_rooms(&mut grid, &mut graph, 5).unwrap();
    assert_eq!(passages, 1);
    assert!(graph.all_accessible());
    assert!(graph.get(RoomId(0)).is_connected(RoomId(1)));
    assert!(graph.get(RoomId(1)).is_connected(RoomId(0)));
    assert_eq!(find_regions(&grid, Tile::Floor).len(), 1);

    // The band is cut through along the line
    assert!((10..=19).all(|x| grid.tile(x, 2) == Tile::Floor));
    // Radius 5 brush: five rows below the line is carved, six is not
    assert_eq!(grid.tile(14, 7), Tile::Floor);
    assert_eq!(grid.tile(14, 8), Tile::Wall);
}

#[test]
fn test_same_seed_same_output() {
    let config = GeneratorConfig::new(60, 40, 45);
    let a = generate_output(&config, &mut MapRng::new(77)).unwrap();
    let b = generate_output(&config, &mut MapRng::new(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fixed_sequence_source_is_deterministic() {
    let values = [3, 71, 12, 90, 45, 8, 66, 20, 99, 1, 54, 37];
    let generator = MapGenerator::new(GeneratorConfig::new(40, 30, 45)).unwrap();
    let a = generator.generate(&mut Sequence::new(&values));
    let b = generator.generate(&mut Sequence::new(&values));
    assert_eq!(a, b);
}

#[test]
fn test_source_that_never_fills_matches_empty_fill() {
    // 99 is never below the fill chance, so only the border starts as wall
    let generator = MapGenerator::new(GeneratorConfig::new(20, 20, 42)).unwrap();
    let map = generator.generate(&mut Sequence::new(&[99])).unwrap();
    assert_eq!(map.rooms.len(), 1);
    assert_eq!(map.grid.count(Tile::Floor), 18 * 18 - 4);
}

#[test]
fn test_spawn_points_land_on_open_floor() {
    let config = GeneratorConfig::new(60, 40, 40).with_seed(11);
    let map = MapGenerator::new(config.clone())
        .unwrap()
        .generate(&mut MapRng::new(11))
        .unwrap();
    let output = generate_output(&config, &mut MapRng::new(11)).unwrap();

    let (width, height) = (map.grid.width() as f64, map.grid.height() as f64);
    assert!(output.spawn_points.len() <= config.spawn_points);
    for point in &output.spawn_points {
        let x = (point.x * width - 0.5).round() as usize;
        let y = (point.y * height - 0.5).round() as usize;
        assert!(map.grid.is_open(x, y));
    }
}
