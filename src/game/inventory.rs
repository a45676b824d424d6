//! # Inventory
//!
//! Collected items, aggregated by name.

use crate::{Entity, EntityId};
use serde::{Deserialize, Serialize};

/// A stack of collected items sharing one name. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Id of the first item entity collected into this stack
    pub id: EntityId,
    pub name: String,
    pub quantity: u32,
}

/// Adds a picked-up item to the inventory, stacking onto an existing entry
/// with the same name.
///
/// # Examples
///
/// ```
/// use delve::{add_to_inventory, Entity, Position};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(2);
/// let mut inventory = Vec::new();
/// add_to_inventory(&mut inventory, &Entity::item(&mut rng, Position::new(1, 1), "Shield"));
/// add_to_inventory(&mut inventory, &Entity::item(&mut rng, Position::new(2, 1), "Shield"));
/// assert_eq!(inventory.len(), 1);
/// assert_eq!(inventory[0].quantity, 2);
/// ```
pub fn add_to_inventory(inventory: &mut Vec<InventoryItem>, item: &Entity) {
    match inventory.iter_mut().find(|entry| entry.name == item.name) {
        Some(entry) => entry.quantity += 1,
        None => inventory.push(InventoryItem {
            id: item.id,
            name: item.name.clone(),
            quantity: 1,
        }),
    }
}

/// Total number of items held across all stacks.
pub fn inventory_count(inventory: &[InventoryItem]) -> u32 {
    inventory.iter().map(|entry| entry.quantity).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_distinct_names_get_own_entries() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut inventory = Vec::new();
        let potion = Entity::item(&mut rng, Position::new(1, 1), "Health Potion");
        let shield = Entity::item(&mut rng, Position::new(2, 2), "Shield");

        add_to_inventory(&mut inventory, &potion);
        add_to_inventory(&mut inventory, &shield);
        add_to_inventory(&mut inventory, &potion);

        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory[0].name, "Health Potion");
        assert_eq!(inventory[0].quantity, 2);
        assert_eq!(inventory[0].id, potion.id);
        assert_eq!(inventory[1].quantity, 1);
        assert_eq!(inventory_count(&inventory), 3);
    }
}
