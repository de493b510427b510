//! Player classification
//!
//! Static class × specialization lookup. Every combination is covered;
//! specs with no special-casing inherit the class baseline.

use crate::facts::{PlayerClass, PlayerFacts, Specialization};
use crate::masks::{CategoryMask, EnchantCategory};

use super::profile::RoleProfile;

/// Enchant categories a given class/spec combination wants.
pub fn player_categories(class: PlayerClass, spec: Specialization) -> Vec<EnchantCategory> {
    use EnchantCategory::*;
    use Specialization::*;
    let mut cats: Vec<EnchantCategory> = Vec::new();
    match class {
        PlayerClass::Warrior => {
            cats.extend([Strength, Melee]);
            if spec == ProtectionWarrior {
                cats.extend([TankDefense, TankShieldBlock]);
            }
        }
        PlayerClass::Paladin => {
            cats.extend([Caster, HolyDamage]);
            match spec {
                HolyPaladin => cats.extend([Intellect, Healer]),
                ProtectionPaladin => {
                    cats.extend([Strength, Melee, TankDefense, TankShieldBlock])
                }
                Retribution => cats.extend([Strength, Melee]),
                _ => {}
            }
        }
        PlayerClass::Hunter => {
            cats.extend([Agility, Ranged]);
        }
        PlayerClass::Rogue => {
            cats.extend([Agility, Melee]);
        }
        PlayerClass::Priest => {
            cats.extend([Intellect, Caster, Healer]);
            match spec {
                Discipline | HolyPriest => cats.push(HolyDamage),
                Shadow => cats.push(ShadowDamage),
                _ => {}
            }
        }
        PlayerClass::DeathKnight => {
            cats.extend([Strength, Melee, Caster, ShadowDamage, TankDefense]);
            if spec == FrostKnight {
                cats.push(FrostDamage);
            }
        }
        PlayerClass::Shaman => {
            cats.extend([NatureDamage, Caster]);
            match spec {
                Elemental => cats.extend([Intellect, FireDamage]),
                Enhancement => cats.extend([Agility, Melee]),
                RestorationShaman => cats.extend([Intellect, Healer]),
                _ => {}
            }
        }
        PlayerClass::Mage => {
            cats.extend([Intellect, Caster]);
            match spec {
                Arcane => cats.push(ArcaneDamage),
                Fire => cats.push(FireDamage),
                FrostMage => cats.push(FrostDamage),
                _ => {}
            }
        }
        PlayerClass::Warlock => {
            cats.extend([Intellect, Caster, ShadowDamage]);
            if spec == Demonology || spec == Destruction {
                cats.push(FireDamage);
            }
        }
        PlayerClass::Druid => match spec {
            Balance => cats.extend([Intellect, Caster, NatureDamage, ArcaneDamage]),
            FeralCombat => cats.extend([Agility, TankDefense, Melee]),
            RestorationDruid => cats.extend([Intellect, Caster, Healer, NatureDamage]),
            _ => {}
        },
    }
    cats
}

pub fn player_category_mask(player: &PlayerFacts) -> CategoryMask {
    CategoryMask::from_categories(player_categories(player.class, player.spec))
}

/// Role profile for a player, folded down from the category table.
pub fn classify_player(player: &PlayerFacts) -> RoleProfile {
    let mut p = RoleProfile::default();
    for cat in player_categories(player.class, player.spec) {
        match cat {
            EnchantCategory::Strength => p.main_stat_strength = true,
            EnchantCategory::Agility => p.main_stat_agility = true,
            EnchantCategory::Intellect => p.main_stat_intellect = true,
            EnchantCategory::TankDefense => p.tank = true,
            EnchantCategory::TankShieldBlock => p.tank_shielder = true,
            EnchantCategory::Melee => p.melee = true,
            EnchantCategory::Ranged => p.ranged = true,
            EnchantCategory::Healer => p.healer = true,
            EnchantCategory::Caster
            | EnchantCategory::HolyDamage
            | EnchantCategory::ShadowDamage
            | EnchantCategory::FrostDamage
            | EnchantCategory::NatureDamage
            | EnchantCategory::FireDamage
            | EnchantCategory::ArcaneDamage => p.caster = true,
        }
    }
    p
}
