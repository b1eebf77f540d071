//! Integration tests for the rules vocabulary
//!
//! Tests name lookups for abilities, damage types, conditions, sizes,
//! alignments, and movement modes.

use bestiary_foundation::{
    Ability, Alignment, CreatureCondition, CreatureSize, DamageType, Ethic, Modifier, Moral,
    MovementMode,
};

#[test]
fn ability_names_and_abbreviations() {
    assert_eq!(Ability::from_name("constitution"), Some(Ability::Constitution));
    assert_eq!(Ability::from_name("CHA"), Some(Ability::Charisma));
    assert_eq!(Ability::Dexterity.to_string(), "dexterity");
}

#[test]
fn damage_types() {
    assert_eq!(DamageType::from_name("acid"), Some(DamageType::Acid));
    assert_eq!(DamageType::from_name("Radiant"), Some(DamageType::Radiant));
    assert_eq!(DamageType::from_name("sonic"), None);
}

#[test]
fn conditions() {
    assert_eq!(CreatureCondition::from_name("grappled"), Some(CreatureCondition::Grappled));
    assert_eq!(CreatureCondition::from_name("hungry"), None);
}

#[test]
fn sizes() {
    assert_eq!(CreatureSize::from_name("Gargantuan"), Some(CreatureSize::Gargantuan));
    assert_eq!(CreatureSize::from_name("colossal"), None);
}

#[test]
fn alignment_phrases() {
    assert_eq!(Alignment::from_phrase("unaligned"), Some(Alignment::Unaligned));
    assert_eq!(Alignment::from_phrase("any alignment"), Some(Alignment::Any));
    assert_eq!(Alignment::from_phrase("neutral"), Some(Alignment::NEUTRAL));
    assert_eq!(
        Alignment::from_phrase("Chaotic Evil"),
        Some(Alignment::Both(Moral::Chaotic, Ethic::Evil))
    );
    assert_eq!(
        Alignment::from_phrase("any evil alignment"),
        Some(Alignment::Ethic(Ethic::Evil))
    );
    assert_eq!(Alignment::from_phrase("any neutral alignment"), None);
}

#[test]
fn movement_modes() {
    assert_eq!(MovementMode::from_name("burrow"), Some(MovementMode::Burrow));
    assert_eq!(MovementMode::from_name("teleport"), None);
}

#[test]
fn modifier_display_is_signed() {
    assert_eq!(Modifier(4).to_string(), "+4");
    assert_eq!(Modifier(-1).to_string(), "-1");
    assert_eq!(Modifier(0).to_string(), "+0");
}
