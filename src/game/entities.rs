//! # Entities
//!
//! Actors that occupy a single tile: the player, enemies, items and the exit.

use crate::config;
use crate::{new_entity_id, EntityId, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// What an entity is. Decides how a player bumping into it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Player,
    Enemy,
    Item,
    Exit,
}

/// A mobile or static actor.
///
/// `health` and `damage` are present for the player and enemies and absent
/// for items and exits. For items, `name` doubles as the effect key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub position: Position,
    pub name: String,
    pub health: Option<i32>,
    pub damage: Option<i32>,
}

impl Entity {
    /// Creates an entity without combat stats.
    pub fn new<R: Rng>(rng: &mut R, kind: EntityKind, position: Position, name: &str) -> Self {
        Self {
            id: new_entity_id(rng),
            kind,
            position,
            name: name.to_string(),
            health: None,
            damage: None,
        }
    }

    /// Creates the hero with starting stats.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Entity, EntityKind, Position};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let hero = Entity::player(&mut rng, Position::new(4, 4));
    /// assert_eq!(hero.kind, EntityKind::Player);
    /// assert_eq!(hero.health, Some(100));
    /// assert_eq!(hero.damage, Some(10));
    /// ```
    pub fn player<R: Rng>(rng: &mut R, position: Position) -> Self {
        Self::new(rng, EntityKind::Player, position, "Hero").with_stats(
            config::PLAYER_START_HEALTH,
            config::PLAYER_START_DAMAGE,
        )
    }

    pub fn enemy<R: Rng>(
        rng: &mut R,
        position: Position,
        name: &str,
        health: i32,
        damage: i32,
    ) -> Self {
        Self::new(rng, EntityKind::Enemy, position, name).with_stats(health, damage)
    }

    pub fn item<R: Rng>(rng: &mut R, position: Position, name: &str) -> Self {
        Self::new(rng, EntityKind::Item, position, name)
    }

    pub fn exit<R: Rng>(rng: &mut R, position: Position) -> Self {
        Self::new(rng, EntityKind::Exit, position, "Exit")
    }

    /// Attaches combat stats.
    pub fn with_stats(mut self, health: i32, damage: i32) -> Self {
        self.health = Some(health);
        self.damage = Some(damage);
        self
    }

    /// Combat stats, if this entity can fight.
    pub fn combat_stats(&self) -> Option<(i32, i32)> {
        Some((self.health?, self.damage?))
    }
}

/// The effect an item applies when picked up, keyed by item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restores health, capped at the player's nominal maximum
    Heal(i32),
    /// Permanently raises damage
    Strength(i32),
    /// Raises health with no cap
    Fortify(i32),
    /// Collected without any numeric effect
    Inert,
}

impl ItemEffect {
    /// Looks up the effect for an item name.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::ItemEffect;
    ///
    /// assert_eq!(ItemEffect::for_item("Health Potion"), ItemEffect::Heal(20));
    /// assert_eq!(ItemEffect::for_item("Rusty Key"), ItemEffect::Inert);
    /// ```
    pub fn for_item(name: &str) -> Self {
        match name {
            "Health Potion" => ItemEffect::Heal(config::HEALTH_POTION_HEAL),
            "Strength Potion" => ItemEffect::Strength(config::STRENGTH_POTION_BONUS),
            "Shield" => ItemEffect::Fortify(config::SHIELD_HEALTH_BONUS),
            _ => ItemEffect::Inert,
        }
    }

    /// Applies the effect to the player, returning the text appended to the
    /// pickup message (empty when nothing happened).
    pub fn apply(self, player: &mut Entity) -> String {
        match self {
            ItemEffect::Heal(amount) => match player.health.as_mut() {
                Some(health) => {
                    *health = (*health + amount).min(config::PLAYER_MAX_HEALTH);
                    format!(" You restored {} health.", amount)
                }
                None => String::new(),
            },
            ItemEffect::Strength(amount) => match player.damage.as_mut() {
                Some(damage) => {
                    *damage += amount;
                    format!(" Your damage increased by {}.", amount)
                }
                None => String::new(),
            },
            ItemEffect::Fortify(amount) => match player.health.as_mut() {
                Some(health) => {
                    *health += amount;
                    format!(" Your maximum health increased by {}.", amount)
                }
                None => String::new(),
            },
            ItemEffect::Inert => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn hero() -> Entity {
        Entity::player(&mut StdRng::seed_from_u64(5), Position::new(1, 1))
    }

    #[test]
    fn test_constructors() {
        let mut rng = StdRng::seed_from_u64(5);
        let enemy = Entity::enemy(&mut rng, Position::new(2, 3), "Cat", 30, 7);
        assert_eq!(enemy.combat_stats(), Some((30, 7)));

        let item = Entity::item(&mut rng, Position::new(2, 3), "Shield");
        assert_eq!(item.kind, EntityKind::Item);
        assert!(item.combat_stats().is_none());

        let exit = Entity::exit(&mut rng, Position::new(9, 9));
        assert_eq!(exit.name, "Exit");
        assert_ne!(enemy.id, item.id);
    }

    #[test]
    fn test_heal_is_capped() {
        let mut player = hero();
        player.health = Some(90);
        ItemEffect::for_item("Health Potion").apply(&mut player);
        assert_eq!(player.health, Some(100));
    }

    #[test]
    fn test_heal_clamps_fortified_health() {
        let mut player = hero();
        player.health = Some(110);
        ItemEffect::for_item("Health Potion").apply(&mut player);
        assert_eq!(player.health, Some(100));
    }

    #[test]
    fn test_strength_and_shield() {
        let mut player = hero();
        let text = ItemEffect::for_item("Strength Potion").apply(&mut player);
        assert_eq!(player.damage, Some(12));
        assert_eq!(text, " Your damage increased by 2.");

        ItemEffect::for_item("Shield").apply(&mut player);
        assert_eq!(player.health, Some(110));
    }

    #[test]
    fn test_unknown_item_is_inert() {
        let mut player = hero();
        let before = player.clone();
        assert_eq!(ItemEffect::for_item("Pebble").apply(&mut player), "");
        assert_eq!(player, before);
    }
}
