//! Item classification
//!
//! Scans an item's stat list into a [`RoleProfile`] and maps the
//! profile through the class/subclass taxonomy tables into a category
//! mask for the candidate filter.

use crate::facts::{ArmorSubclass, ItemFacts, ItemKind, StatType, WeaponSubclass};
use crate::masks::{CategoryMask, EnchantCategory};

use super::profile::RoleProfile;

/// Per-flag category contributions of one class/subclass combination.
///
/// Each field lists the categories that flag unlocks on this kind of
/// item. An empty list means the subclass never serves that role.
#[derive(Debug, Clone, Copy)]
struct Contributions {
    agility: &'static [EnchantCategory],
    strength: &'static [EnchantCategory],
    intellect: &'static [EnchantCategory],
    healer: &'static [EnchantCategory],
    melee: &'static [EnchantCategory],
    ranged: &'static [EnchantCategory],
    caster: &'static [EnchantCategory],
    tank: &'static [EnchantCategory],
    shielder: &'static [EnchantCategory],
}

const NONE: &[EnchantCategory] = &[];

const EMPTY: Contributions = Contributions {
    agility: NONE,
    strength: NONE,
    intellect: NONE,
    healer: NONE,
    melee: NONE,
    ranged: NONE,
    caster: NONE,
    tank: NONE,
    shielder: NONE,
};

/// Taxonomy table: which categories each subclass can carry, per flag.
///
/// The caster lists differ per subclass on purpose; they encode which
/// spell schools traditionally appear on that armor/weapon type.
fn contributions(kind: &ItemKind) -> Contributions {
    use EnchantCategory::*;
    match kind {
        ItemKind::Armor(sub) => match sub {
            ArmorSubclass::Misc => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                ranged: &[Ranged],
                caster: &[
                    Caster,
                    HolyDamage,
                    ShadowDamage,
                    FrostDamage,
                    NatureDamage,
                    FireDamage,
                    ArcaneDamage,
                ],
                tank: &[TankDefense],
                shielder: &[TankShieldBlock],
            },
            ArmorSubclass::Cloth => Contributions {
                intellect: &[Intellect],
                healer: &[Healer],
                caster: &[
                    Caster,
                    HolyDamage,
                    ShadowDamage,
                    FrostDamage,
                    FireDamage,
                    ArcaneDamage,
                ],
                ..EMPTY
            },
            ArmorSubclass::Leather => Contributions {
                agility: &[Agility],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                ranged: &[Ranged],
                caster: &[Caster, FrostDamage, NatureDamage, FireDamage, ArcaneDamage],
                tank: &[TankDefense],
                ..EMPTY
            },
            ArmorSubclass::Mail => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                ranged: &[Ranged],
                caster: &[Caster, HolyDamage, FrostDamage, NatureDamage, FireDamage],
                ..EMPTY
            },
            ArmorSubclass::Plate => Contributions {
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                caster: &[Caster, HolyDamage, ShadowDamage, FrostDamage],
                tank: &[TankDefense],
                shielder: &[TankShieldBlock],
                ..EMPTY
            },
            ArmorSubclass::Shield => Contributions {
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                caster: &[Caster, HolyDamage, NatureDamage],
                tank: &[TankDefense],
                shielder: &[TankShieldBlock],
                ..EMPTY
            },
            ArmorSubclass::Libram => Contributions {
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                caster: &[Caster, HolyDamage],
                tank: &[TankDefense],
                shielder: &[TankShieldBlock],
                ..EMPTY
            },
            ArmorSubclass::Idol => Contributions {
                agility: &[Agility],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                caster: &[Caster, NatureDamage, ArcaneDamage],
                tank: &[TankDefense],
                ..EMPTY
            },
            ArmorSubclass::Totem => Contributions {
                agility: &[Agility],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                caster: &[Caster, FrostDamage, NatureDamage, FireDamage],
                ..EMPTY
            },
            ArmorSubclass::Sigil => Contributions {
                strength: &[Strength],
                melee: &[Melee],
                caster: &[Caster, ShadowDamage, FrostDamage],
                tank: &[TankDefense],
                ..EMPTY
            },
            ArmorSubclass::Buckler => EMPTY,
        },
        ItemKind::Weapon(sub) => match sub {
            WeaponSubclass::Axe
            | WeaponSubclass::Axe2
            | WeaponSubclass::Mace
            | WeaponSubclass::Mace2
            | WeaponSubclass::Sword
            | WeaponSubclass::Sword2
            | WeaponSubclass::Polearm
            | WeaponSubclass::Dagger => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                intellect: &[Intellect],
                healer: &[Healer],
                melee: &[Melee],
                ranged: &[Ranged],
                caster: &[
                    Caster,
                    HolyDamage,
                    ShadowDamage,
                    FrostDamage,
                    NatureDamage,
                    FireDamage,
                    ArcaneDamage,
                ],
                tank: &[TankDefense],
                ..EMPTY
            },
            WeaponSubclass::Bow | WeaponSubclass::Gun | WeaponSubclass::Crossbow => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                ranged: &[Ranged],
                ..EMPTY
            },
            WeaponSubclass::Fist => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                intellect: &[Intellect],
                melee: &[Melee],
                caster: &[Caster, FrostDamage, NatureDamage, FireDamage, ArcaneDamage],
                tank: &[TankDefense],
                ..EMPTY
            },
            WeaponSubclass::Thrown => Contributions {
                agility: &[Agility],
                strength: &[Strength],
                melee: &[Melee],
                tank: &[TankDefense],
                ..EMPTY
            },
            WeaponSubclass::Wand => Contributions {
                intellect: &[Intellect],
                healer: &[Healer],
                caster: &[
                    Caster,
                    HolyDamage,
                    ShadowDamage,
                    FrostDamage,
                    FireDamage,
                    ArcaneDamage,
                ],
                ..EMPTY
            },
            WeaponSubclass::Spear
            | WeaponSubclass::Obsolete
            | WeaponSubclass::Staff
            | WeaponSubclass::Exotic
            | WeaponSubclass::Exotic2
            | WeaponSubclass::Misc
            | WeaponSubclass::FishingPole => EMPTY,
        },
        ItemKind::Other => EMPTY,
    }
}

/// One pass over the stat list, raising flags per the stat table.
///
/// Stamina, plain health/mana, the hit/crit/haste catch-alls, the
/// hit-taken family and resilience carry no role signal and are
/// suppressed on purpose.
fn scan_stats(stats: &[StatType]) -> RoleProfile {
    let mut p = RoleProfile::default();
    for stat in stats {
        match stat {
            StatType::Agility => p.main_stat_agility = true,
            StatType::Strength => p.main_stat_strength = true,
            StatType::Intellect => p.main_stat_intellect = true,
            StatType::Spirit => p.healer = true,
            StatType::HitMeleeRating
            | StatType::CritMeleeRating
            | StatType::HasteMeleeRating
            | StatType::ExpertiseRating => p.melee = true,
            StatType::HitRangedRating
            | StatType::CritRangedRating
            | StatType::HasteRangedRating
            | StatType::RangedAttackPower => p.ranged = true,
            StatType::HitSpellRating | StatType::SpellDamageDone | StatType::SpellPenetration => {
                p.caster = true
            }
            StatType::CritSpellRating | StatType::HasteSpellRating | StatType::SpellPower => {
                p.caster = true;
                p.healer = true;
            }
            StatType::SpellHealingDone | StatType::ManaRegeneration => p.healer = true,
            StatType::AttackPower | StatType::ArmorPenetrationRating => {
                p.melee = true;
                p.ranged = true;
            }
            StatType::DefenseRating | StatType::DodgeRating | StatType::ParryRating => {
                p.tank = true
            }
            StatType::BlockRating | StatType::BlockValue => p.tank_shielder = true,
            StatType::Stamina
            | StatType::Health
            | StatType::Mana
            | StatType::HealthRegen
            | StatType::HitRating
            | StatType::CritRating
            | StatType::HasteRating
            | StatType::HitTakenRating
            | StatType::HitTakenMeleeRating
            | StatType::HitTakenRangedRating
            | StatType::HitTakenSpellRating
            | StatType::CritTakenRating
            | StatType::ResilienceRating
            | StatType::CritTakenMeleeRating
            | StatType::CritTakenRangedRating
            | StatType::CritTakenSpellRating => {}
        }
    }
    p
}

/// Derive the role profile for an item.
///
/// Items without any combat-relevant stat fall back to the full role
/// set their class/subclass taxonomy supports, so slot/type information
/// alone still yields a usable profile. Items with a single populated
/// axis get the other axis inferred.
pub fn classify_item(item: &ItemFacts) -> RoleProfile {
    let mut profile = scan_stats(&item.stats);
    if profile.is_empty() {
        let c = contributions(&item.kind);
        return RoleProfile {
            main_stat_agility: !c.agility.is_empty(),
            main_stat_strength: !c.strength.is_empty(),
            main_stat_intellect: !c.intellect.is_empty(),
            healer: !c.healer.is_empty(),
            melee: !c.melee.is_empty(),
            ranged: !c.ranged.is_empty(),
            caster: !c.caster.is_empty(),
            tank: !c.tank.is_empty(),
            tank_shielder: !c.shielder.is_empty(),
        };
    }
    profile.infer_missing_axis();
    profile
}

/// Category mask for an item: the taxonomy contributions of every flag
/// raised in its profile, OR-combined.
pub fn item_category_mask(item: &ItemFacts) -> CategoryMask {
    let profile = classify_item(item);
    let c = contributions(&item.kind);
    let mut cats: Vec<EnchantCategory> = Vec::new();
    if profile.main_stat_agility {
        cats.extend_from_slice(c.agility);
    }
    if profile.main_stat_strength {
        cats.extend_from_slice(c.strength);
    }
    if profile.main_stat_intellect {
        cats.extend_from_slice(c.intellect);
    }
    if profile.healer {
        cats.extend_from_slice(c.healer);
    }
    if profile.melee {
        cats.extend_from_slice(c.melee);
    }
    if profile.ranged {
        cats.extend_from_slice(c.ranged);
    }
    if profile.caster {
        cats.extend_from_slice(c.caster);
    }
    if profile.tank {
        cats.extend_from_slice(c.tank);
    }
    if profile.tank_shielder {
        cats.extend_from_slice(c.shielder);
    }
    let mask = CategoryMask::from_categories(cats);
    log::debug!(
        "classified item {} ({}): profile {:?}, category mask {:#06x}",
        item.name,
        item.id,
        profile,
        mask.0
    );
    mask
}
