//! Role profile flags

/// Capability flags derived from item stats or a player's class/spec.
///
/// Transient: recomputed on every classification call, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleProfile {
    pub main_stat_strength: bool,
    pub main_stat_agility: bool,
    pub main_stat_intellect: bool,
    pub healer: bool,
    pub melee: bool,
    pub ranged: bool,
    pub caster: bool,
    pub tank: bool,
    pub tank_shielder: bool,
}

impl RoleProfile {
    pub fn is_empty(&self) -> bool {
        !self.has_main_stat() && !self.has_sub_role()
    }

    pub fn has_main_stat(&self) -> bool {
        self.main_stat_strength || self.main_stat_agility || self.main_stat_intellect
    }

    pub fn has_sub_role(&self) -> bool {
        self.healer || self.melee || self.ranged || self.caster || self.tank || self.tank_shielder
    }

    /// One stat axis populated without the other.
    pub fn has_only_main_stat(&self) -> bool {
        self.has_main_stat() && !self.has_sub_role()
    }

    pub fn has_only_sub_role(&self) -> bool {
        !self.has_main_stat() && self.has_sub_role()
    }

    /// Fill in the missing stat axis from the populated one.
    ///
    /// The table is an acknowledged approximation carried over from the
    /// original heuristic; it trades precision for coverage and must
    /// not be "improved":
    ///   agility only      -> melee, ranged, tank
    ///   strength only     -> melee, tank, shield-block
    ///   intellect only    -> healer, caster
    ///   healer/caster only-> intellect
    ///   physical role only-> strength, agility
    ///   shield-block only -> strength
    pub fn infer_missing_axis(&mut self) {
        if self.has_only_main_stat() {
            if self.main_stat_agility {
                self.melee = true;
                self.ranged = true;
                self.tank = true;
            }
            if self.main_stat_strength {
                self.melee = true;
                self.tank = true;
                self.tank_shielder = true;
            }
            if self.main_stat_intellect {
                self.healer = true;
                self.caster = true;
            }
        } else if self.has_only_sub_role() {
            if self.healer || self.caster {
                self.main_stat_intellect = true;
            }
            if self.melee || self.ranged || self.tank {
                self.main_stat_agility = true;
                self.main_stat_strength = true;
            }
            if self.tank_shielder {
                self.main_stat_strength = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_axis_strength() {
        let mut p = RoleProfile {
            main_stat_strength: true,
            ..Default::default()
        };
        p.infer_missing_axis();
        assert!(p.melee && p.tank && p.tank_shielder);
        assert!(!p.ranged && !p.healer && !p.caster);
    }

    #[test]
    fn test_one_axis_agility() {
        let mut p = RoleProfile {
            main_stat_agility: true,
            ..Default::default()
        };
        p.infer_missing_axis();
        assert!(p.melee && p.ranged && p.tank);
        assert!(!p.tank_shielder);
    }

    #[test]
    fn test_one_axis_sub_only_shielder() {
        let mut p = RoleProfile {
            tank_shielder: true,
            ..Default::default()
        };
        p.infer_missing_axis();
        assert!(p.main_stat_strength);
        assert!(!p.main_stat_agility && !p.main_stat_intellect);
    }

    #[test]
    fn test_both_axes_untouched() {
        let mut p = RoleProfile {
            main_stat_intellect: true,
            healer: true,
            ..Default::default()
        };
        let before = p;
        p.infer_missing_axis();
        assert_eq!(p, before);
    }
}
