//! Player facts
//!
//! Class, active specialization, proficiencies, and the equip
//! compatibility check used by the player-preference path.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::item::{ArmorSubclass, ItemClass, ItemFacts, WeaponSubclass};

/// Skill line id for plate proficiency.
pub const SKILL_PLATE_MAIL: u16 = 293;
/// Skill line id for mail proficiency.
pub const SKILL_MAIL: u16 = 413;

/// The fixed set of playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerClass {
    Warrior,
    Paladin,
    Hunter,
    Rogue,
    Priest,
    DeathKnight,
    Shaman,
    Mage,
    Warlock,
    Druid,
}

impl PlayerClass {
    pub const ALL: [PlayerClass; 10] = [
        PlayerClass::Warrior,
        PlayerClass::Paladin,
        PlayerClass::Hunter,
        PlayerClass::Rogue,
        PlayerClass::Priest,
        PlayerClass::DeathKnight,
        PlayerClass::Shaman,
        PlayerClass::Mage,
        PlayerClass::Warlock,
        PlayerClass::Druid,
    ];

    /// Talent specializations belonging to this class.
    pub fn specs(&self) -> &'static [Specialization] {
        use Specialization::*;
        match self {
            PlayerClass::Warrior => &[Arms, Fury, ProtectionWarrior],
            PlayerClass::Paladin => &[HolyPaladin, ProtectionPaladin, Retribution],
            PlayerClass::Hunter => &[BeastMastery, Marksmanship, Survival],
            PlayerClass::Rogue => &[Assassination, Combat, Subtlety],
            PlayerClass::Priest => &[Discipline, HolyPriest, Shadow],
            PlayerClass::DeathKnight => &[Blood, FrostKnight, Unholy],
            PlayerClass::Shaman => &[Elemental, Enhancement, RestorationShaman],
            PlayerClass::Mage => &[Arcane, Fire, FrostMage],
            PlayerClass::Warlock => &[Affliction, Demonology, Destruction],
            PlayerClass::Druid => &[Balance, FeralCombat, RestorationDruid],
        }
    }

    /// Weapon subclasses the class can train.
    pub fn usable_weapons(&self) -> &'static [WeaponSubclass] {
        use WeaponSubclass::*;
        match self {
            PlayerClass::Warrior => &[
                Axe, Axe2, Mace, Mace2, Sword, Sword2, Polearm, Dagger, Fist, Staff, Bow, Gun,
                Crossbow, Thrown,
            ],
            PlayerClass::Paladin => &[Axe, Axe2, Mace, Mace2, Sword, Sword2, Polearm],
            PlayerClass::Hunter => &[
                Axe, Axe2, Sword, Sword2, Polearm, Dagger, Fist, Staff, Bow, Gun, Crossbow, Thrown,
            ],
            PlayerClass::Rogue => &[Axe, Mace, Sword, Dagger, Fist, Bow, Gun, Crossbow, Thrown],
            PlayerClass::Priest => &[Mace, Dagger, Staff, Wand],
            PlayerClass::DeathKnight => &[Axe, Axe2, Mace, Mace2, Sword, Sword2, Polearm],
            PlayerClass::Shaman => &[Axe, Axe2, Mace, Mace2, Dagger, Fist, Staff],
            PlayerClass::Mage => &[Sword, Dagger, Staff, Wand],
            PlayerClass::Warlock => &[Sword, Dagger, Staff, Wand],
            PlayerClass::Druid => &[Mace, Mace2, Dagger, Fist, Staff, Polearm],
        }
    }

    /// Armor subclasses the class would actually want to wear.
    ///
    /// Plate wearers drop to mail until they learn plate, mail wearers
    /// drop to leather until they learn mail. Evaluated top-to-bottom
    /// with the shared wearer helpers so every class states its relics
    /// and shield eligibility explicitly.
    pub fn preferred_armor(&self, has_plate_skill: bool, has_mail_skill: bool) -> Vec<ArmorSubclass> {
        use ArmorSubclass::*;
        match self {
            PlayerClass::Paladin => {
                with_extras(&[Libram, Shield], plate_wearer(has_plate_skill))
            }
            PlayerClass::DeathKnight => with_extras(&[Sigil], plate_wearer(has_plate_skill)),
            PlayerClass::Warrior => with_extras(&[Shield], plate_wearer(has_plate_skill)),
            PlayerClass::Shaman => with_extras(&[Totem, Shield], mail_wearer(has_mail_skill)),
            PlayerClass::Hunter => vec![mail_wearer(has_mail_skill)],
            PlayerClass::Druid => vec![Idol, Leather],
            PlayerClass::Rogue => vec![Leather],
            PlayerClass::Priest | PlayerClass::Mage | PlayerClass::Warlock => vec![Cloth],
        }
    }
}

fn plate_wearer(has_plate_skill: bool) -> ArmorSubclass {
    if has_plate_skill {
        ArmorSubclass::Plate
    } else {
        ArmorSubclass::Mail
    }
}

fn mail_wearer(has_mail_skill: bool) -> ArmorSubclass {
    if has_mail_skill {
        ArmorSubclass::Mail
    } else {
        ArmorSubclass::Leather
    }
}

fn with_extras(extras: &[ArmorSubclass], base: ArmorSubclass) -> Vec<ArmorSubclass> {
    let mut out = extras.to_vec();
    out.push(base);
    out
}

/// Talent specialization, scoped to its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    // Warrior
    Arms,
    Fury,
    ProtectionWarrior,
    // Paladin
    HolyPaladin,
    ProtectionPaladin,
    Retribution,
    // Hunter
    BeastMastery,
    Marksmanship,
    Survival,
    // Rogue
    Assassination,
    Combat,
    Subtlety,
    // Priest
    Discipline,
    HolyPriest,
    Shadow,
    // Death Knight
    Blood,
    FrostKnight,
    Unholy,
    // Shaman
    Elemental,
    Enhancement,
    RestorationShaman,
    // Mage
    Arcane,
    Fire,
    FrostMage,
    // Warlock
    Affliction,
    Demonology,
    Destruction,
    // Druid
    Balance,
    FeralCombat,
    RestorationDruid,
}

impl Specialization {
    pub fn class(&self) -> PlayerClass {
        use Specialization::*;
        match self {
            Arms | Fury | ProtectionWarrior => PlayerClass::Warrior,
            HolyPaladin | ProtectionPaladin | Retribution => PlayerClass::Paladin,
            BeastMastery | Marksmanship | Survival => PlayerClass::Hunter,
            Assassination | Combat | Subtlety => PlayerClass::Rogue,
            Discipline | HolyPriest | Shadow => PlayerClass::Priest,
            Blood | FrostKnight | Unholy => PlayerClass::DeathKnight,
            Elemental | Enhancement | RestorationShaman => PlayerClass::Shaman,
            Arcane | Fire | FrostMage => PlayerClass::Mage,
            Affliction | Demonology | Destruction => PlayerClass::Warlock,
            Balance | FeralCombat | RestorationDruid => PlayerClass::Druid,
        }
    }
}

/// Snapshot of a player at decision time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerFacts {
    pub name: String,
    pub class: PlayerClass,
    pub spec: Specialization,
    pub level: u32,
    /// Trained skill lines, keyed by skill id.
    pub skills: HashMap<u16, u16>,
}

impl PlayerFacts {
    pub fn new(name: &str, class: PlayerClass, spec: Specialization, level: u32) -> Self {
        PlayerFacts {
            name: name.to_string(),
            class,
            spec,
            level,
            skills: HashMap::new(),
        }
    }

    pub fn has_skill(&self, skill: u16) -> bool {
        self.skills.contains_key(&skill)
    }

    pub fn skill_value(&self, skill: u16) -> u16 {
        self.skills.get(&skill).copied().unwrap_or(0)
    }

    /// Whether this item is something the player's class would use.
    ///
    /// Universal slots (rings, trinkets, cloaks, shirts) always pass.
    /// Weapons check the class weapon table, armor the preferred armor
    /// table with the player's current proficiencies.
    pub fn can_use(&self, item: &ItemFacts) -> bool {
        if item.inventory_type.is_universal() {
            return true;
        }
        match item.kind {
            super::item::ItemKind::Weapon(sub) => self.class.usable_weapons().contains(&sub),
            super::item::ItemKind::Armor(sub) => self
                .class
                .preferred_armor(
                    self.has_skill(SKILL_PLATE_MAIL),
                    self.has_skill(SKILL_MAIL),
                )
                .contains(&sub),
            super::item::ItemKind::Other => false,
        }
    }
}
