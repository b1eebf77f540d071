//! Spellcasting blocks.
//!
//! Picks fragments out of the description wherever they occur: caster
//! level, ability, save DC, attack bonus, leveled spell lists, and innate
//! (at will / per day) spell lists. Each spell name is located so it can be
//! linked.

use bestiary_combinator::{
    Cursor, Parser, any, char_eq, character, choice, either, fold_case, horizontal_whitespace,
    int, literal, parenthesized, signed_int, word, zip, zip3, zip4, zip5,
};
use bestiary_foundation::{Ability, ItemReference, LimitedUse, Located, Modifier, Span};
use im::OrdMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A creature's spellcasting.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Spellcasting {
    /// Spells are cast innately, without slots.
    pub innate: bool,
    /// `1st-level spellcaster`
    pub spellcaster_level: Option<u32>,
    /// The spellcasting ability.
    pub ability: Option<Ability>,
    /// `spell save DC 12`
    pub spell_save_dc: Option<u32>,
    /// `+4 to hit with spell attacks`
    pub spell_attack_hit: Option<Modifier>,
    /// Spell level -> number of slots. Cantrips (level 0) have none.
    pub slots_by_level: OrdMap<u32, u32>,
    /// Spell level -> the spells listed for it.
    pub spells_by_level: OrdMap<u32, Vec<Located<ItemReference>>>,
    /// Innate spells, grouped by how often they can be cast.
    pub limited_use_spells: Vec<LimitedUseSpellGroup>,
}

impl Spellcasting {
    /// Every located spell, leveled lists first (by level), then innate
    /// groups in source order.
    pub fn spells(&self) -> impl Iterator<Item = &Located<ItemReference>> {
        self.spells_by_level
            .values()
            .flatten()
            .chain(self.limited_use_spells.iter().flat_map(|group| group.spells.iter()))
    }

    /// The ranges of every listed spell.
    #[must_use]
    pub fn spell_spans(&self) -> Vec<Span> {
        self.spells().map(|spell| spell.span).collect()
    }
}

/// Spells sharing a usage limit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LimitedUseSpellGroup {
    /// The spells.
    pub spells: Vec<Located<ItemReference>>,
    /// How often; `None` means at will.
    pub limited_use: Option<LimitedUse>,
}

#[derive(Clone, Debug)]
enum Fragment {
    SpellcasterLevel(u32),
    Ability(Ability),
    InnateAbility(Ability),
    SaveDc(u32),
    AttackHit(Modifier),
    SpellsByLevel(u32, Option<u32>, Vec<Located<String>>),
    SpellsByUse(Option<LimitedUse>, bool, Vec<Located<String>>),
}

/// The spellcasting grammar over a case-folded description.
#[must_use]
pub fn spellcasting() -> Parser<Spellcasting> {
    let fragment = choice(vec![
        spellcaster_level(),
        using_ability(),
        innate_ability(),
        ability(),
        save_dc(),
        attack_hit(),
        spells_by_level(),
        spells_by_use(),
    ]);
    any(fragment.skipping_any_before())
        .map(|fragments| fragments.into_iter().fold(Spellcasting::default(), apply))
        .log("spellcasting")
}

/// Parses the spellcasting in a feature or action, if its name mentions
/// spellcasting. Offsets are characters of `description`.
#[must_use]
pub fn parse_spellcasting(name: &str, description: &str) -> Option<Spellcasting> {
    let name = name.to_lowercase();
    if !name.contains("spellcasting") {
        return None;
    }
    let chars = fold_case(description);
    let (mut parsed, _) = spellcasting().parse(Cursor::new(&chars))?;
    parsed.innate |= name.contains("innate");
    Some(parsed)
}

fn apply(mut result: Spellcasting, fragment: Fragment) -> Spellcasting {
    let spell = |name: Located<String>| name.map(ItemReference::spell);
    match fragment {
        Fragment::SpellcasterLevel(level) => result.spellcaster_level = Some(level),
        Fragment::Ability(ability) => result.ability = Some(ability),
        Fragment::InnateAbility(ability) => {
            result.ability = Some(ability);
            result.innate = true;
        }
        Fragment::SaveDc(dc) => result.spell_save_dc = Some(dc),
        Fragment::AttackHit(modifier) => result.spell_attack_hit = Some(modifier),
        Fragment::SpellsByLevel(level, slots, names) => {
            if let Some(slots) = slots {
                result.slots_by_level.insert(level, slots);
            }
            result
                .spells_by_level
                .insert(level, names.into_iter().map(spell).collect());
        }
        Fragment::SpellsByUse(limited_use, shared, names) => {
            if shared {
                result.limited_use_spells.push(LimitedUseSpellGroup {
                    spells: names.into_iter().map(spell).collect(),
                    limited_use,
                });
            } else {
                result
                    .limited_use_spells
                    .extend(names.into_iter().map(|name| LimitedUseSpellGroup {
                        spells: vec![spell(name)],
                        limited_use: limited_use.clone(),
                    }));
            }
        }
    }
    result
}

fn ability_name() -> Parser<Ability> {
    word().flat_map(|name| Ability::from_name(&name))
}

/// `1st-level spellcaster`
fn spellcaster_level() -> Parser<Fragment> {
    zip3(
        int(),
        any(character(char::is_alphabetic)),
        literal("-level spellcaster"),
    )
    .map(|(level, _, _)| Fragment::SpellcasterLevel(level))
}

/// `spellcasting ability is wisdom`
fn ability() -> Parser<Fragment> {
    zip(literal("spellcasting ability is "), ability_name())
        .map(|(_, ability)| Fragment::Ability(ability))
}

/// `innate spellcasting ability is charisma`
fn innate_ability() -> Parser<Fragment> {
    zip(literal("innate spellcasting ability is "), ability_name())
        .map(|(_, ability)| Fragment::InnateAbility(ability))
}

/// `using charisma as the spellcasting ability`
fn using_ability() -> Parser<Fragment> {
    zip3(
        literal("using "),
        ability_name(),
        literal(" as the spellcasting ability"),
    )
    .map(|(_, ability, _)| Fragment::InnateAbility(ability))
}

fn save_dc() -> Parser<Fragment> {
    zip(literal("spell save dc "), int()).map(|(_, dc)| Fragment::SaveDc(dc))
}

fn attack_hit() -> Parser<Fragment> {
    zip(signed_int(), literal(" to hit with spell attacks"))
        .map(|(modifier, _)| Fragment::AttackHit(Modifier(modifier)))
}

/// `cantrips (at will): a, b` or `1st level (3 slots): a, b`
fn spells_by_level() -> Parser<Fragment> {
    let level = either(
        literal("cantrips").value(0),
        zip3(int(), word(), literal(" level")).map(|(level, _, _)| level),
    );
    let slots = either(
        literal("at will").value(None),
        zip3(int(), literal(" slot"), word().optional()).map(|(slots, _, _)| Some(slots)),
    );
    zip5(level, literal(" ("), slots, list_start(")"), spell_list())
        .map(|(level, _, slots, (), spells)| Fragment::SpellsByLevel(level, slots, spells))
}

/// `at will: a, b`, `3/day each: a, b`, or `1e/day each: a, b`
fn spells_by_use() -> Parser<Fragment> {
    let per_day = zip4(
        int(),
        char_eq('e').optional(),
        literal("/day"),
        literal(" each").optional(),
    )
    .map(|(amount, _, _, each)| (Some(LimitedUse::per_day(amount)), each.is_none()));
    let rate = either(literal("at will").value((None, false)), per_day);
    zip3(rate, list_start(""), spell_list())
        .map(|((limited_use, shared), (), spells)| Fragment::SpellsByUse(limited_use, shared, spells))
}

/// `closing` followed by a colon and optional spacing.
fn list_start(closing: &str) -> Parser<()> {
    zip3(
        literal(closing),
        char_eq(':'),
        horizontal_whitespace().optional(),
    )
    .value(())
}

/// Comma-separated spell names. Markers such as `*` and parenthetical
/// notes after a name are skipped and not part of its range.
fn spell_list() -> Parser<Vec<Located<String>>> {
    let name = zip(
        word(),
        any(zip(horizontal_whitespace(), word()).map(|(_, word)| word)),
    )
    .map(|(first, rest)| {
        std::iter::once(first)
            .chain(rest)
            .collect::<Vec<_>>()
            .join(" ")
    })
    .located();
    let note = zip(
        char_eq('*').optional(),
        zip(horizontal_whitespace().optional(), parenthesized()).optional(),
    );
    let separator = literal(",").trimming(horizontal_whitespace());
    any(zip3(name, note, separator.optional()).map(|(name, _, _)| name))
}
