//! The `weapons` collection under `player`: everything a player carries.

use gsi_types::{WeaponState, WeaponType};

use crate::collection::Collection;
use crate::raw::{FeedNode, RawNode};

/// One carried weapon or piece of equipment.
#[derive(Debug, Clone)]
pub struct WeaponNode {
    base: RawNode,
    /// Internal weapon name, e.g. `weapon_ak47`.
    pub name: String,
    /// Skin name, `default` when unskinned.
    pub paint_kit: String,
    /// Weapon category.
    pub weapon_type: WeaponType,
    /// Whether the weapon is drawn, stowed, or reloading.
    pub state: WeaponState,
    /// Rounds in the magazine. Absent for melee and grenades.
    pub ammo_clip: i32,
    /// Magazine capacity.
    pub ammo_clip_max: i32,
    /// Rounds in reserve.
    pub ammo_reserve: i32,
}

impl WeaponNode {
    /// Whether the player currently has this weapon out, counting a
    /// mid-reload weapon as out.
    pub const fn is_drawn(&self) -> bool {
        matches!(self.state, WeaponState::Active | WeaponState::Reloading)
    }
}

impl FeedNode for WeaponNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            name: base.text("name"),
            paint_kit: base.text("paintkit"),
            weapon_type: WeaponType::from_feed(&base.text("type")),
            state: WeaponState::from_feed(&base.text("state")),
            ammo_clip: base.int("ammo_clip"),
            ammo_clip_max: base.int("ammo_clip_max"),
            ammo_reserve: base.int("ammo_reserve"),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

/// The keyed collection of a player's carried weapons (`weapon_0`,
/// `weapon_1`, ...), in document order.
#[derive(Debug, Clone)]
pub struct WeaponsNode {
    base: RawNode,
    weapons: Collection<WeaponNode>,
}

impl WeaponsNode {
    /// The number of carried weapons.
    pub fn count(&self) -> usize {
        self.weapons.count()
    }

    /// The weapon at `index`, or an empty-default weapon when out of
    /// range. Never fails.
    pub fn by_index(&self, index: usize) -> &WeaponNode {
        self.weapons.by_index(index)
    }

    /// The weapon under the given slot key (`weapon_0`, ...), or an
    /// empty-default weapon on a miss.
    pub fn by_key(&self, key: &str) -> &WeaponNode {
        self.weapons.by_key(key)
    }

    /// The weapon the player currently has out: the first entry in
    /// document order that is active or reloading, or an empty-default
    /// weapon when nothing is drawn.
    pub fn active_weapon(&self) -> &WeaponNode {
        self.weapons.first_matching(WeaponNode::is_drawn)
    }

    /// The ordered `(slot key, weapon)` entries.
    pub fn entries(&self) -> &[(String, WeaponNode)] {
        self.weapons.entries()
    }

    /// Iterate over weapons in document order.
    pub fn iter(&self) -> impl Iterator<Item = &WeaponNode> {
        self.weapons.iter()
    }
}

impl FeedNode for WeaponsNode {
    fn from_raw(raw: &str) -> Self {
        let base = RawNode::lenient(raw);
        Self {
            weapons: Collection::from_node(&base),
            base,
        }
    }

    fn base(&self) -> &RawNode {
        &self.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEAPONS_JSON: &str = r#"{
        "weapon_0":{"name":"weapon_knife","paintkit":"default","type":"Knife","state":"holstered"},
        "weapon_1":{"name":"weapon_ak47","paintkit":"cu_ak47_asiimov","type":"Rifle","ammo_clip":30,"ammo_clip_max":30,"ammo_reserve":90,"state":"active"},
        "weapon_2":{"name":"weapon_smokegrenade","paintkit":"default","type":"Grenade","ammo_reserve":1,"state":"holstered"}
    }"#;

    #[test]
    fn parses_weapon_fields() {
        let weapons = WeaponsNode::from_raw(WEAPONS_JSON);
        assert_eq!(weapons.count(), 3);
        let rifle = weapons.by_index(1);
        assert_eq!(rifle.name, "weapon_ak47");
        assert_eq!(rifle.weapon_type, WeaponType::Rifle);
        assert_eq!(rifle.ammo_clip, 30);
        assert_eq!(rifle.ammo_reserve, 90);
        assert_eq!(rifle.paint_kit, "cu_ak47_asiimov");
    }

    #[test]
    fn active_weapon_is_the_drawn_one() {
        let weapons = WeaponsNode::from_raw(WEAPONS_JSON);
        let active = weapons.active_weapon();
        assert_eq!(active.name, "weapon_ak47");
        assert!(std::ptr::eq(active, weapons.by_index(1)));
    }

    #[test]
    fn reloading_counts_as_drawn() {
        let weapons = WeaponsNode::from_raw(
            r#"{"weapon_0":{"name":"weapon_glock","state":"reloading"}}"#,
        );
        assert_eq!(weapons.active_weapon().name, "weapon_glock");
    }

    #[test]
    fn first_active_wins_on_ties() {
        // Two entries both claim to be active; document order decides.
        let weapons = WeaponsNode::from_raw(
            r#"{"weapon_0":{"name":"first","state":"active"},"weapon_1":{"name":"second","state":"active"}}"#,
        );
        assert_eq!(weapons.active_weapon().name, "first");
        assert!(std::ptr::eq(weapons.active_weapon(), weapons.by_index(0)));
    }

    #[test]
    fn no_drawn_weapon_yields_empty_default() {
        let weapons = WeaponsNode::from_raw(
            r#"{"weapon_0":{"name":"weapon_knife","state":"holstered"}}"#,
        );
        assert!(weapons.active_weapon().is_empty());
        assert_eq!(weapons.active_weapon().state, WeaponState::Undefined);
    }

    #[test]
    fn by_key_looks_up_slot_keys() {
        let weapons = WeaponsNode::from_raw(WEAPONS_JSON);
        assert_eq!(weapons.by_key("weapon_1").name, "weapon_ak47");
        assert!(std::ptr::eq(weapons.by_key("weapon_1"), weapons.by_index(1)));
        assert!(weapons.by_key("weapon_9").is_empty());
        assert_eq!(weapons.by_key("weapon_9").name, "");
    }

    #[test]
    fn out_of_range_index_is_empty_default() {
        let weapons = WeaponsNode::from_raw(WEAPONS_JSON);
        assert!(weapons.by_index(3).is_empty());
        assert_eq!(weapons.by_index(3).name, "");
        assert!(!weapons.by_index(2).is_empty());
    }

    #[test]
    fn empty_section_has_no_weapons() {
        let weapons = WeaponsNode::empty();
        assert!(weapons.is_empty());
        assert_eq!(weapons.count(), 0);
        assert!(weapons.active_weapon().is_empty());
    }
}
