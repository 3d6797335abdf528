//! Rooms and the room connection graph
//!
//! Rooms live in an arena ([`RoomGraph`]) and refer to each other by
//! [`RoomId`], so the undirected passage graph needs no shared ownership.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Coord, Grid, Region};

/// Index of a room inside its [`RoomGraph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// A floor region that survived pruning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// All tiles of the room, in flood-fill order
    pub tiles: Vec<Coord>,
    /// Tiles with at least one orthogonal wall neighbour
    pub edge_tiles: Vec<Coord>,
    /// Rooms directly joined to this one by a passage
    pub connected_rooms: BTreeSet<RoomId>,
    pub is_main_room: bool,
    pub is_accessible_from_main_room: bool,
}

impl Room {
    /// Build a room from a region, computing its edge tiles against `grid`
    pub fn new(tiles: Region, grid: &Grid) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|&tile| grid.has_orthogonal_wall(tile))
            .collect();

        Self {
            tiles,
            edge_tiles,
            connected_rooms: BTreeSet::new(),
            is_main_room: false,
            is_accessible_from_main_room: false,
        }
    }

    pub fn size(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_connected(&self, other: RoomId) -> bool {
        self.connected_rooms.contains(&other)
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        for tile in self.tiles.iter_mut().chain(self.edge_tiles.iter_mut()) {
            *tile = tile.offset(dx, dy);
        }
    }
}

/// Arena of rooms plus their passage graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGraph {
    rooms: Vec<Room>,
}

impl RoomGraph {
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn get(&self, id: RoomId) -> &Room {
        &self.rooms[id.0]
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn ids(&self) -> impl Iterator<Item = RoomId> + use<> {
        (0..self.rooms.len()).map(RoomId)
    }

    /// Id of the main room, if one has been chosen
    pub fn main_room(&self) -> Option<RoomId> {
        self.rooms.iter().position(|r| r.is_main_room).map(RoomId)
    }

    /// Mark a room as the main room. It is accessible from itself.
    pub fn set_main_room(&mut self, id: RoomId) {
        for room in &mut self.rooms {
            room.is_main_room = false;
        }
        self.rooms[id.0].is_main_room = true;
        self.set_accessible(id);
    }

    /// Join two rooms both ways. If either side is reachable from the
    /// main room, the whole component becomes reachable.
    pub fn connect(&mut self, a: RoomId, b: RoomId) {
        if self.rooms[a.0].is_accessible_from_main_room {
            self.set_accessible(b);
        } else if self.rooms[b.0].is_accessible_from_main_room {
            self.set_accessible(a);
        }

        self.rooms[a.0].connected_rooms.insert(b);
        self.rooms[b.0].connected_rooms.insert(a);
    }

    /// Mark a room and everything linked to it as accessible
    pub fn set_accessible(&mut self, id: RoomId) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let room = &mut self.rooms[current.0];
            if room.is_accessible_from_main_room {
                continue;
            }
            room.is_accessible_from_main_room = true;
            stack.extend(room.connected_rooms.iter().copied());
        }
    }

    /// Rooms not yet reachable from the main room
    pub fn inaccessible(&self) -> Vec<RoomId> {
        self.ids()
            .filter(|&id| !self.get(id).is_accessible_from_main_room)
            .collect()
    }

    pub fn all_accessible(&self) -> bool {
        self.rooms.iter().all(|r| r.is_accessible_from_main_room)
    }

    /// Shift every stored coordinate, used when the map gains a border
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for room in &mut self.rooms {
            room.translate(dx, dy);
        }
    }
}
