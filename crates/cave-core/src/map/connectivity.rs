//! Room connectivity
//!
//! Joins rooms with carved passages in two phases:
//! 1. Every room without a connection is linked to its nearest room
//! 2. While some rooms are cut off from the main room, the closest pair
//!    between the reachable and unreachable sets is linked

use super::passage::carve_passage;
use super::{Coord, Grid, RoomGraph, RoomId};
use crate::error::MapError;

/// Closest pair of edge tiles found between two rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub room_a: RoomId,
    pub room_b: RoomId,
    pub tile_a: Coord,
    pub tile_b: Coord,
    /// Squared distance between the two tiles
    pub distance: i64,
}

/// Find the closest edge-tile pair between any room of `from` and any room
/// of `to`. Pairs already connected are skipped. On equal distance the
/// first pair found wins.
pub fn closest_connection(
    rooms: &RoomGraph,
    from: &[RoomId],
    to: &[RoomId],
) -> Option<Connection> {
    let mut best: Option<Connection> = None;

    for &a in from {
        let room_a = rooms.get(a);
        for &b in to {
            if a == b || room_a.is_connected(b) {
                continue;
            }
            let room_b = rooms.get(b);
            for &tile_a in &room_a.edge_tiles {
                for &tile_b in &room_b.edge_tiles {
                    let distance = tile_a.distance_sq(&tile_b);
                    if best.is_none_or(|c| distance < c.distance) {
                        best = Some(Connection {
                            room_a: a,
                            room_b: b,
                            tile_a,
                            tile_b,
                            distance,
                        });
                    }
                }
            }
        }
    }

    best
}

/// Link two rooms and carve the corridor between their closest tiles
fn create_passage(grid: &mut Grid, rooms: &mut RoomGraph, connection: &Connection, radius: i32) {
    log::debug!(
        "passage room {} -> room {} (distance² {})",
        connection.room_a.0,
        connection.room_b.0,
        connection.distance
    );
    rooms.connect(connection.room_a, connection.room_b);
    carve_passage(grid, connection.tile_a, connection.tile_b, radius);
}

/// Carve passages until every room is reachable from the main room.
///
/// Returns the number of passages carved. A room left unreachable after
/// both phases is reported as [`MapError::UnreachableRoom`].
pub fn connect_rooms(
    grid: &mut Grid,
    rooms: &mut RoomGraph,
    radius: i32,
) -> Result<usize, MapError> {
    let all: Vec<RoomId> = rooms.ids().collect();
    let mut passages = 0;

    // Phase 1: nearest neighbour for each room that has no link yet
    for &a in &all {
        if !rooms.get(a).connected_rooms.is_empty() {
            continue;
        }
        if let Some(connection) = closest_connection(rooms, &[a], &all) {
            create_passage(grid, rooms, &connection, radius);
            passages += 1;
        }
    }

    // Phase 2: bridge the reachable set to the rest until nothing is left out
    loop {
        let (reachable, unreachable): (Vec<RoomId>, Vec<RoomId>) = all
            .iter()
            .partition(|&&id| rooms.get(id).is_accessible_from_main_room);
        if unreachable.is_empty() {
            break;
        }
        let Some(connection) = closest_connection(rooms, &unreachable, &reachable) else {
            break;
        };
        create_passage(grid, rooms, &connection, radius);
        passages += 1;
    }

    if let Some(&room) = rooms.inaccessible().first() {
        return Err(MapError::UnreachableRoom { room: room.0 });
    }

    Ok(passages)
}
