//! # Item Placement
//!
//! Scatters a few consumables across the interior rooms.

use crate::generation::encounters::{pick_name, random_inset_position};
use crate::utils::roll;
use crate::{interior_rooms, DungeonLayout, Entity, GenerationConfig};
use log::trace;
use rand::Rng;

/// How many inset positions are tried before an item is dropped.
const PLACEMENT_ATTEMPTS: u32 = 10;

/// Places between two and four items, never more than there are interior
/// rooms. Each item lands in a random interior room on a free inset tile;
/// an item that finds no free tile is skipped.
pub fn place_items<R: Rng>(layout: &mut DungeonLayout, config: &GenerationConfig, rng: &mut R) {
    let rooms = interior_rooms(&layout.rooms);
    if rooms.is_empty() || config.item_names.is_empty() {
        return;
    }

    let wanted = roll(rng, 2, 4) as usize;
    let count = wanted.min(rooms.len());
    let level = &mut layout.level;

    for _ in 0..count {
        let room = &rooms[rng.gen_range(0..rooms.len())];

        let spot = (0..PLACEMENT_ATTEMPTS)
            .map(|_| random_inset_position(rng, room))
            .find(|pos| !level.is_occupied(*pos));

        let Some(position) = spot else {
            trace!("No free tile for an item in room {}", room.id);
            continue;
        };

        if let Some(name) = pick_name(rng, &config.item_names) {
            level.entities.push(Entity::item(rng, position, name));
        }
    }
}
