//! Integration tests for the feature grammar
//!
//! Usage limits in names, spellcasting blocks, and description annotations.

use bestiary_foundation::{
    Ability, DiceExpression, ItemKind, ItemReference, LimitedUse, Located, Modifier, Recharge,
    Span,
};
use bestiary_grammar::{
    GrammarConfig, LimitedUseSpellGroup, ReferenceCatalog, parse_feature, parse_limited_use,
};
use im::OrdMap;

const ACOLYTE: &str = "The acolyte is a 1st-level spellcaster. Its spellcasting ability is Wisdom \
    (spell save DC 12, +4 to hit with spell attacks). The acolyte has following cleric spells \
    prepared:\n\n• Cantrips (at will): light, sacred flame, thaumaturgy\n• 1st level (3 slots): bless, \
    cure wounds, sanctuary";

const CLOUD_GIANT: &str = "The giant's innate spellcasting ability is Charisma. It can innately cast \
    the following spells, requiring no material components:\n\nAt will: detect magic, fog cloud, \
    light\n3/day each: feather fall, fly, misty step, telekinesis\n1/day each: control weather, \
    gaseous form";

fn spell(name: &str, start: usize, end: usize) -> Located<ItemReference> {
    Located::new(ItemReference::spell(name), Span::new(start, end))
}

fn single(name: &str, start: usize, end: usize, limited_use: Option<LimitedUse>) -> LimitedUseSpellGroup {
    LimitedUseSpellGroup {
        spells: vec![spell(name, start, end)],
        limited_use,
    }
}

// =============================================================================
// Spellcasting
// =============================================================================

#[test]
fn prepared_spells_by_level() {
    let parsed = parse_feature("Spellcasting", ACOLYTE, &GrammarConfig::default());
    assert!(parsed.limited_use.is_none());
    let spellcasting = parsed.spellcasting.expect("spellcasting");
    assert!(!spellcasting.innate);
    assert_eq!(spellcasting.spellcaster_level, Some(1));
    assert_eq!(spellcasting.ability, Some(Ability::Wisdom));
    assert_eq!(spellcasting.spell_save_dc, Some(12));
    assert_eq!(spellcasting.spell_attack_hit, Some(Modifier(4)));
    assert_eq!(spellcasting.slots_by_level, OrdMap::from(vec![(1u32, 3u32)]));
    assert_eq!(
        spellcasting.spells_by_level,
        OrdMap::from(vec![
            (
                0u32,
                vec![
                    spell("light", 198, 203),
                    spell("sacred flame", 205, 217),
                    spell("thaumaturgy", 219, 230),
                ]
            ),
            (
                1,
                vec![
                    spell("bless", 254, 259),
                    spell("cure wounds", 261, 272),
                    spell("sanctuary", 274, 283),
                ]
            ),
        ])
    );
    assert!(spellcasting.limited_use_spells.is_empty());

    assert_eq!(parsed.other_description_annotations.len(), 1);
    let annotation = &parsed.other_description_annotations[0];
    assert_eq!(annotation.span, Span::new(94, 96));
    assert_eq!(annotation.value.as_dice(), Some(&DiceExpression::d20_check(4)));
}

#[test]
fn innate_spells_by_use() {
    let parsed = parse_feature("Innate Spellcasting", CLOUD_GIANT, &GrammarConfig::default());
    let spellcasting = parsed.spellcasting.expect("spellcasting");
    assert!(spellcasting.innate);
    assert_eq!(spellcasting.spellcaster_level, None);
    assert_eq!(spellcasting.ability, Some(Ability::Charisma));
    assert_eq!(spellcasting.spell_save_dc, None);
    assert_eq!(spellcasting.spell_attack_hit, None);
    assert!(spellcasting.slots_by_level.is_empty());
    assert!(spellcasting.spells_by_level.is_empty());

    let three = Some(LimitedUse::per_day(3));
    let one = Some(LimitedUse::per_day(1));
    assert_eq!(
        spellcasting.limited_use_spells,
        vec![
            single("detect magic", 140, 152, None),
            single("fog cloud", 154, 163, None),
            single("light", 165, 170, None),
            single("feather fall", 183, 195, three.clone()),
            single("fly", 197, 200, three.clone()),
            single("misty step", 202, 212, three.clone()),
            single("telekinesis", 214, 225, three),
            single("control weather", 238, 253, one.clone()),
            single("gaseous form", 255, 267, one),
        ]
    );
    assert!(parsed.other_description_annotations.is_empty());
}

#[test]
fn innate_spells_in_newer_layout() {
    let parsed = parse_feature(
        "Innate Spellcasting",
        "The dragon casts one of the following spells, requiring no Material components and using \
         Charisma as the spellcasting ability (spell save DC 17, +9 to hit with spell attacks): \
         - At Will: Detect Magic, Fear, Acid Arrow - 1e/Day Each: Speak with Dead, Vitriolic Sphere",
        &GrammarConfig::default(),
    );
    let spellcasting = parsed.spellcasting.expect("spellcasting");
    assert_eq!(spellcasting.ability, Some(Ability::Charisma));
    assert_eq!(spellcasting.spell_save_dc, Some(17));
    assert_eq!(spellcasting.spell_attack_hit, Some(Modifier(9)));

    let summary: Vec<String> = spellcasting
        .limited_use_spells
        .iter()
        .map(|group| {
            let amount = group
                .limited_use
                .as_ref()
                .map_or_else(|| "at will".to_string(), |limited_use| limited_use.amount.to_string());
            let names: Vec<&str> = group.spells.iter().map(|s| s.value.text.as_str()).collect();
            format!("{amount}: {}", names.join(", "))
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            "at will: detect magic",
            "at will: fear",
            "at will: acid arrow",
            "1: speak with dead",
            "1: vitriolic sphere",
        ]
    );
}

#[test]
fn shared_daily_group() {
    let parsed = parse_feature(
        "Innate Spellcasting",
        "The imp can innately cast the following spells:\n2/day: darkness, fear",
        &GrammarConfig::default(),
    );
    let spellcasting = parsed.spellcasting.expect("spellcasting");
    assert_eq!(spellcasting.limited_use_spells.len(), 1);
    let group = &spellcasting.limited_use_spells[0];
    assert_eq!(group.limited_use, Some(LimitedUse::per_day(2)));
    assert_eq!(group.spells.len(), 2);
}

#[test]
fn slot_counts_for_every_level() {
    let parsed = parse_feature(
        "Spellcasting",
        "The naga is an 11th-level spellcaster. Its spellcasting ability is Wisdom (spell save DC 16, \
         +8 to hit with spell attacks), and it needs only verbal components to cast its spells. It has \
         the following cleric spells prepared:\n\n• Cantrips (at will): mending, sacred flame, \
         thaumaturgy\n• 1st level (4 slots): command, cure wounds, shield of faith\n• 2nd level (3 \
         slots): calm emotions, hold person\n• 3rd level (3 slots): bestow curse, clairvoyance\n• 4th \
         level (3 slots): banishment, freedom of movement\n• 5th level (2 slots): flame strike, geas\n\
         • 6th level (1 slot): true seeing",
        &GrammarConfig::default(),
    );
    let spellcasting = parsed.spellcasting.expect("spellcasting");
    assert_eq!(spellcasting.spellcaster_level, Some(11));
    assert_eq!(
        spellcasting.slots_by_level,
        OrdMap::from(vec![(1u32, 4u32), (2, 3), (3, 3), (4, 3), (5, 2), (6, 1)])
    );
    assert_eq!(spellcasting.spells_by_level.len(), 7);
    assert_eq!(spellcasting.spells().count(), 15);
}

#[test]
fn spellcasting_requires_the_name() {
    let parsed = parse_feature("Magic Resistance", ACOLYTE, &GrammarConfig::default());
    assert!(parsed.spellcasting.is_none());
}

// =============================================================================
// Usage Limits
// =============================================================================

#[test]
fn recharge_limit_in_name() {
    let parsed = parse_feature("Web (Recharge 5-6)", "", &GrammarConfig::default());
    let limited_use = parsed.limited_use.clone().expect("limited use");
    assert_eq!(limited_use.value, LimitedUse::recharge_on([5, 6]));
    assert_eq!(limited_use.span, Span::new(5, 17));

    let annotations = parsed.name_annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].span, Span::new(5, 17));
    assert_eq!(annotations[0].value.as_dice(), Some(&DiceExpression::dice(1, 6)));
}

#[test]
fn rest_limit_in_name() {
    let found = parse_limited_use("Relentless (Recharges after a Short or Long Rest)").expect("limit");
    assert_eq!(found.value.amount, 1);
    assert_eq!(
        found.value.recharge,
        Some(Recharge::Rest {
            short: true,
            long: true
        })
    );
    assert_eq!(
        found.value.display_string(),
        "Recharges after a Short or Long Rest"
    );
}

#[test]
fn daily_limit_in_name() {
    let parsed = parse_feature("Teleport (3/Day)", "The imp teleports.", &GrammarConfig::default());
    assert_eq!(
        parsed.limited_use.clone().map(|found| found.value),
        Some(LimitedUse::per_day(3))
    );
    assert!(parsed.name_annotations().is_empty());
}

// =============================================================================
// Annotations
// =============================================================================

#[test]
fn listed_spells_are_not_annotated_twice() {
    let config = GrammarConfig::new().with_references(
        ReferenceCatalog::new()
            .with("light", ItemKind::Spell)
            .with("fireball", ItemKind::Spell),
    );
    let parsed = parse_feature(
        "Spellcasting",
        "Cantrips (at will): light\nIt prefers fireball.",
        &config,
    );
    let other: Vec<&str> = parsed
        .other_description_annotations
        .iter()
        .filter_map(|annotation| annotation.value.as_reference())
        .map(|reference| reference.text.as_str())
        .collect();
    assert_eq!(other, vec!["fireball"]);

    let all: Vec<String> = parsed
        .description_annotations()
        .iter()
        .filter_map(|annotation| annotation.value.as_reference().map(|r| r.text.clone()))
        .collect();
    assert_eq!(all, vec!["fireball", "light"]);
}

#[test]
fn dice_annotations_can_be_disabled() {
    let text = "The wolf deals an extra 7 (2d6) damage.";
    let enabled = parse_feature("Pack Tactics", text, &GrammarConfig::default());
    assert_eq!(enabled.other_description_annotations.len(), 1);
    assert_eq!(
        enabled.other_description_annotations[0].value.as_dice(),
        Some(&DiceExpression::dice(2, 6))
    );

    let disabled = parse_feature(
        "Pack Tactics",
        text,
        &GrammarConfig::new().with_dice_annotations(false),
    );
    assert!(disabled.is_empty());
}

#[test]
fn huge_dice_pools_are_annotated() {
    let parsed = parse_feature(
        "Breath",
        "It deals 4294967295d6 + 1d6 fire damage.",
        &GrammarConfig::default(),
    );
    assert_eq!(parsed.other_description_annotations.len(), 1);
    let annotation = &parsed.other_description_annotations[0];
    assert_eq!(annotation.span, Span::new(9, 27));
    assert_eq!(
        annotation.value.as_dice(),
        Some(&(DiceExpression::dice(u32::MAX, 6) + DiceExpression::dice(1, 6)))
    );
}
