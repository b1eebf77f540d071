//! Property tests for the grammars
//!
//! Arbitrary prose never panics, parses the same way twice, and located
//! values always point back into their source text.

use bestiary_combinator::fold_case;
use bestiary_foundation::Modifier;
use bestiary_grammar::action::AttackRange;
use bestiary_grammar::auxiliary::{parse_armor_class, parse_hit_points, parse_movement, parse_type_line};
use bestiary_grammar::{
    ActionGrammar, GrammarConfig, dice_expression_matches, parse_feature, parse_limited_use,
};
use proptest::prelude::*;

fn prose() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.:;()+/-]{0,80}").expect("valid regex")
}

/// Prose with dice pools and numbers anywhere in the integer range.
fn numeric_prose() -> impl Strategy<Value = String> {
    let part = prop_oneof![
        prop::string::string_regex("[0-9]{1,10}d[0-9]{1,3}( \\+ [0-9]{1,10}d[0-9]{1,3})?").expect("valid regex"),
        any::<u32>().prop_map(|n| n.to_string()),
        any::<u32>().prop_map(|n| format!("+{n}")),
        any::<u32>().prop_map(|n| format!("({n}/Day)")),
        any::<u32>().prop_map(|n| format!("{n}th level ({n} slots): fireball")),
        prop::string::string_regex("[a-z ,.]{0,12}").expect("valid regex"),
    ];
    prop::collection::vec(part, 0..8).prop_map(|parts| parts.join(" "))
}

fn spell_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::string::string_regex("[a-z]{3,8}( [a-z]{2,6})?").expect("valid regex"), 1..5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn action_parsing_is_deterministic(input in prose()) {
        let grammar = ActionGrammar::default();
        prop_assert_eq!(grammar.parse_raw(&input), grammar.parse_raw(&input));
    }

    #[test]
    fn auxiliary_grammars_accept_any_text(input in prose()) {
        let _ = parse_movement(&input);
        let _ = parse_armor_class(&input);
        let _ = parse_hit_points(&input);
        let _ = parse_type_line(&input);
    }

    #[test]
    fn attack_preamble_survives_any_hit_text(
        modifier in 0i32..20,
        reach in 1u32..60,
        tail in "[a-z ]{0,30}",
    ) {
        let text = format!(
            "Melee Weapon Attack: +{modifier} to hit, reach {reach} ft., one target. Hit: {tail}"
        );
        let action = ActionGrammar::default().parse(&text);
        let attack = action.as_ref().and_then(|action| action.as_weapon_attack());
        prop_assert!(attack.is_some());
        let attack = attack.unwrap();
        prop_assert_eq!(attack.hit_modifier, Modifier(modifier));
        prop_assert_eq!(&attack.ranges, &vec![AttackRange::Reach(reach)]);
    }

    #[test]
    fn grammars_accept_extreme_numbers(input in numeric_prose()) {
        let config = GrammarConfig::default();
        let _ = parse_feature("Spellcasting", &input, &config);
        let _ = parse_feature(&input, &input, &config);
        let _ = ActionGrammar::new(&config).parse_raw(&input);
        let _ = parse_hit_points(&input);
        let _ = parse_movement(&input);
        for found in dice_expression_matches(&fold_case(&input)) {
            prop_assert!(found.value.has_dice());
            let _ = (found.value.dice_count(), found.value.average());
        }
    }

    #[test]
    fn dice_spans_point_into_the_text(input in prose()) {
        let chars = fold_case(&input);
        for found in dice_expression_matches(&chars) {
            prop_assert!(found.span.start < found.span.end);
            prop_assert!(found.span.end <= chars.len());
        }
    }

    #[test]
    fn limit_spans_point_into_the_name(name in prose()) {
        if let Some(found) = parse_limited_use(&name) {
            prop_assert!(found.span.end <= name.chars().count());
        }
    }

    #[test]
    fn listed_spell_spans_cover_their_names(names in spell_names()) {
        let description = format!("Cantrips (at will): {}", names.join(", "));
        let parsed = parse_feature("Spellcasting", &description, &GrammarConfig::default());
        let spellcasting = parsed.spellcasting.expect("spellcasting");
        let listed: Vec<String> = spellcasting.spells().map(|spell| spell.value.text.clone()).collect();
        prop_assert_eq!(&listed, &names);
        for spell in spellcasting.spells() {
            prop_assert_eq!(spell.span.text(&description), spell.value.text.clone());
        }
    }
}
