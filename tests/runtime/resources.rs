//! Integration tests for combat resource extraction

use bestiary_runtime::{
    CombatantResource, CreatureAction, CreatureFeature, DomainParsers, Legendary,
    MAX_TRACKED_USES, ParseableCreatureAction, ParseableCreatureFeature, StatBlock,
    extract_resources,
};
use proptest::prelude::*;

fn stat_block(features: Vec<CreatureFeature>, actions: Vec<CreatureAction>) -> StatBlock {
    let mut stats = StatBlock {
        features: features.into_iter().map(ParseableCreatureFeature::new).collect(),
        actions: actions.into_iter().map(ParseableCreatureAction::new).collect(),
        ..StatBlock::default()
    };
    stats.parse_if_needed(&DomainParsers::default());
    stats
}

fn titles(resources: &[CombatantResource]) -> Vec<&str> {
    resources.iter().map(|resource| resource.title.as_str()).collect()
}

#[test]
fn spell_slots_by_level() {
    let stats = stat_block(
        vec![CreatureFeature::new(
            "Spellcasting",
            "The naga is an 11th-level spellcaster. Its spellcasting ability is Wisdom (spell save DC 16, \
             +8 to hit with spell attacks), and it needs only verbal components to cast its spells. It has \
             the following cleric spells prepared:\n\n• Cantrips (at will): mending, sacred flame, \
             thaumaturgy\n• 1st level (4 slots): command, cure wounds, shield of faith\n• 2nd level (3 \
             slots): calm emotions, hold person\n• 3rd level (3 slots): bestow curse, clairvoyance\n• 4th \
             level (3 slots): banishment, freedom of movement\n• 5th level (2 slots): flame strike, geas\n\
             • 6th level (1 slot): true seeing",
        )],
        vec![],
    );

    let resources = extract_resources(&stats);
    assert_eq!(resources.len(), 6);
    assert_eq!(resources[0].title, "1st level spell slots");
    assert_eq!(resources[0].slots, vec![false; 4]);
    assert_eq!(resources[1].title, "2nd level spell slots");
    assert_eq!(resources[2].title, "3rd level spell slots");
    assert_eq!(resources[5].title, "6th level spell slots");
    assert_eq!(resources[5].slots, vec![false]);
}

#[test]
fn innate_spells_with_daily_limits() {
    let stats = stat_block(
        vec![CreatureFeature::new(
            "Innate Spellcasting",
            "The giant's innate spellcasting ability is Charisma. It can innately cast the following \
             spells, requiring no material components:\n\nAt will: detect magic, fog cloud, light\n3/day \
             each: feather fall, fly, misty step, telekinesis\n1/day each: control weather, gaseous form",
        )],
        vec![],
    );

    let resources = stats.extract_resources();
    assert_eq!(
        titles(&resources),
        vec![
            "feather fall (3/Day)",
            "fly (3/Day)",
            "misty step (3/Day)",
            "telekinesis (3/Day)",
            "control weather (1/Day)",
            "gaseous form (1/Day)",
        ]
    );
    assert_eq!(resources[0].slots, vec![false; 3]);
    assert_eq!(resources[5].slots, vec![false]);
}

#[test]
fn shared_group_is_one_resource() {
    let stats = stat_block(
        vec![CreatureFeature::new(
            "Innate Spellcasting",
            "The imp can innately cast the following spells:\n2/day: darkness, fear, sleep",
        )],
        vec![],
    );
    let resources = stats.extract_resources();
    assert_eq!(titles(&resources), vec!["darkness, fear, and sleep (2/Day)"]);
    assert_eq!(resources[0].slots.len(), 2);
}

#[test]
fn feature_recharging_after_rest() {
    let stats = stat_block(
        vec![CreatureFeature::new(
            "Relentless (Recharges after a Short or Long Rest)",
            "If the boar takes 7 damage or less that would reduce it to 0 hit points, it is reduced to \
             1 hit point instead.",
        )],
        vec![],
    );
    let resources = stats.extract_resources();
    assert_eq!(
        titles(&resources),
        vec!["Relentless (Recharges after a Short or Long Rest)"]
    );
    assert_eq!(resources[0].slots, vec![false]);
}

#[test]
fn action_recharging_on_a_roll() {
    let stats = stat_block(
        vec![],
        vec![CreatureAction::new(
            "Cold Breath (Recharge 5-6)",
            "The dragon exhales an icy blast of hail in a 15-foot cone. Each creature in that area must \
             make a DC 12 Constitution saving throw, taking 22 (5d8) cold damage on a failed save, or half \
             as much damage on a successful one.",
        )],
    );
    let resources = stats.extract_resources();
    assert_eq!(titles(&resources), vec!["Cold Breath (Recharge 5-6)"]);
    assert_eq!(resources[0].slots, vec![false]);
    assert_eq!(resources[0].id, "0-cold-breath-recharge-5-6");
}

#[test]
fn legendary_actions() {
    let stats = StatBlock {
        legendary: Some(Legendary {
            description: Some("Acererak can take 5 legendary actions, choosing".to_string()),
            actions: vec![],
        }),
        ..StatBlock::default()
    };
    let resources = stats.extract_resources();
    assert_eq!(titles(&resources), vec!["Legendary Actions"]);
    assert_eq!(resources[0].slots, vec![false; 5]);
}

#[test]
fn resource_order_across_sources() {
    let mut stats = stat_block(
        vec![
            CreatureFeature::new("Teleport (1/Day)", "The imp teleports."),
            CreatureFeature::new(
                "Spellcasting",
                "Its spellcasting ability is Intelligence.\n1st level (2 slots): shield",
            ),
        ],
        vec![CreatureAction::new("Fire Breath (Recharge 6)", "")],
    );
    stats.legendary = Some(Legendary {
        description: Some("The dragon can take 3 legendary actions.".to_string()),
        actions: vec![],
    });

    let resources = stats.extract_resources();
    assert_eq!(
        titles(&resources),
        vec![
            "1st level spell slots",
            "Fire Breath (Recharge 6)",
            "Teleport (1/Day)",
            "Legendary Actions",
        ]
    );
    let ids: Vec<&str> = resources.iter().map(|resource| resource.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "0-1st-level-spell-slots",
            "1-fire-breath-recharge-6",
            "2-teleport-1-day",
            "3-legendary-actions",
        ]
    );
}

#[test]
fn unparsed_entries_contribute_nothing() {
    let stats = StatBlock {
        features: vec![ParseableCreatureFeature::new(CreatureFeature::new(
            "Teleport (1/Day)",
            "",
        ))],
        ..StatBlock::default()
    };
    assert!(stats.extract_resources().is_empty());
}

#[test]
fn spending_and_resetting_uses() {
    let mut resource = CombatantResource::new("0-web", "Web (Recharge 5-6)", 2);
    resource.set_used(1).expect("within range");
    assert_eq!(resource.used(), 1);
    assert_eq!(resource.remaining(), 1);
    assert!(resource.set_used(3).is_err());
    assert_eq!(resource.used(), 1);
    resource.reset();
    assert_eq!(resource.slots, vec![false, false]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn slot_counts_merge_without_overflow(
        counts in prop::collection::vec(any::<u32>(), 1..4),
        daily in any::<u32>(),
        legendary in any::<u32>(),
    ) {
        let features = counts
            .iter()
            .map(|count| {
                CreatureFeature::new(
                    "Spellcasting",
                    format!("Its spellcasting ability is Wisdom.\n• 1st level ({count} slots): bless"),
                )
            })
            .collect();
        let mut stats = stat_block(features, vec![CreatureAction::new(format!("Blink ({daily}/Day)"), "")]);
        stats.legendary = Some(Legendary {
            description: Some(format!("The dragon can take {legendary} legendary actions.")),
            actions: vec![],
        });

        let resources = stats.extract_resources();
        for resource in &resources {
            prop_assert!(resource.slots.len() <= MAX_TRACKED_USES);
        }
        let total: u64 = counts.iter().map(|&count| u64::from(count)).sum();
        if total > 0 {
            let expected = usize::try_from(total.min(u64::from(u32::MAX))).map_or(MAX_TRACKED_USES, |n| n.min(MAX_TRACKED_USES));
            prop_assert_eq!(resources[0].title.as_str(), "1st level spell slots");
            prop_assert_eq!(resources[0].slots.len(), expected);
        }
    }
}
