use crate::model::ElementType;

/// Multiplier of `attack_type` against every type of the defender, multiplied together.
pub fn effectiveness(attack_type: ElementType, defender_types: &[ElementType]) -> f64 {
    defender_types
        .iter()
        .map(|&t| single_type_effectiveness(attack_type, t))
        .product()
}

/// Same-type attack bonus.
pub fn stab(attack_type: ElementType, attacker_types: &[ElementType]) -> f64 {
    if attacker_types.contains(&attack_type) {
        1.5
    } else {
        1.0
    }
}

/// Only the listed attack types have entries; every other pairing is neutral.
fn single_type_effectiveness(attacking: ElementType, defending: ElementType) -> f64 {
    use ElementType::*;
    match attacking {
        Normal => match defending {
            Rock | Steel => 0.5,
            Ghost => 0.0,
            _ => 1.0,
        },
        Fire => match defending {
            Fire | Water | Rock | Dragon => 0.5,
            Grass | Ice | Bug | Steel => 2.0,
            _ => 1.0,
        },
        Water => match defending {
            Water | Grass | Dragon => 0.5,
            Fire | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Electric => match defending {
            Electric | Grass | Dragon => 0.5,
            Water | Flying => 2.0,
            Ground => 0.0,
            _ => 1.0,
        },
        Grass => match defending {
            Fire | Grass | Poison | Flying | Bug | Dragon | Steel => 0.5,
            Water | Ground | Rock => 2.0,
            _ => 1.0,
        },
        Poison => match defending {
            Grass => 2.0,
            Poison | Ground | Rock | Ghost => 0.5,
            Steel => 0.0,
            _ => 1.0,
        },
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ElementType::*;

    #[test]
    fn single_type_multipliers() {
        assert_eq!(effectiveness(Fire, &[Grass]), 2.0);
        assert_eq!(effectiveness(Electric, &[Ground]), 0.0);
        assert_eq!(effectiveness(Grass, &[Water]), 2.0);
        assert_eq!(effectiveness(Water, &[Fire]), 2.0);
        assert_eq!(effectiveness(Fire, &[Fire]), 0.5);
    }

    #[test]
    fn dual_types_multiply() {
        assert_eq!(effectiveness(Electric, &[Water, Ground]), 0.0);
        assert_eq!(effectiveness(Grass, &[Water, Ground]), 4.0);
        assert_eq!(effectiveness(Fire, &[Water, Rock]), 0.25);
    }

    #[test]
    fn unlisted_pairings_are_neutral() {
        assert_eq!(effectiveness(Ground, &[Flying]), 1.0);
        assert_eq!(effectiveness(Ice, &[Dragon]), 1.0);
        assert_eq!(effectiveness(Fighting, &[Ghost]), 1.0);
        assert_eq!(effectiveness(Dragon, &[Fairy]), 1.0);
        assert_eq!(effectiveness(Poison, &[Fairy]), 1.0);
    }

    #[test]
    fn empty_defender_is_neutral() {
        assert_eq!(effectiveness(Fire, &[]), 1.0);
    }

    #[test]
    fn stab_requires_shared_type() {
        assert_eq!(stab(Fire, &[Fire]), 1.5);
        assert_eq!(stab(Fire, &[Grass]), 1.0);
        assert_eq!(stab(Water, &[Grass, Water]), 1.5);
    }
}
