// Room occupancy grid
// A fixed floors x rooms matrix, the only source of truth for which rooms are taken

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomGrid {
    // rooms[floor][room], true = occupied
    rooms: Vec<Vec<bool>>,
}

impl RoomGrid {
    pub fn new(floors: usize, rooms_per_floor: usize) -> Self {
        Self {
            rooms: vec![vec![false; rooms_per_floor]; floors],
        }
    }

    pub fn floors(&self) -> usize {
        self.rooms.len()
    }

    pub fn rooms_per_floor(&self) -> usize {
        self.rooms.first().map_or(0, |floor| floor.len())
    }

    pub fn capacity(&self) -> usize {
        self.floors() * self.rooms_per_floor()
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms
            .iter()
            .map(|floor| floor.iter().filter(|taken| **taken).count())
            .sum()
    }

    // 0-based indices; anything out of range reads as free
    pub fn is_occupied(&self, floor: usize, room: usize) -> bool {
        self.rooms
            .get(floor)
            .and_then(|f| f.get(room))
            .copied()
            .unwrap_or(false)
    }

    // Row-major scan: floor 0 first, then room 0..N-1 within each floor
    pub fn first_free(&self) -> Option<(usize, usize)> {
        self.rooms.iter().enumerate().find_map(|(floor, rooms)| {
            rooms
                .iter()
                .position(|taken| !*taken)
                .map(|room| (floor, room))
        })
    }

    pub fn occupy(&mut self, floor: usize, room: usize) -> bool {
        self.set(floor, room, true)
    }

    pub fn release(&mut self, floor: usize, room: usize) -> bool {
        self.set(floor, room, false)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.rooms.iter().map(Vec::as_slice)
    }

    fn set(&mut self, floor: usize, room: usize, occupied: bool) -> bool {
        match self.rooms.get_mut(floor).and_then(|f| f.get_mut(room)) {
            Some(cell) => {
                *cell = occupied;
                true
            }
            None => false,
        }
    }
}
