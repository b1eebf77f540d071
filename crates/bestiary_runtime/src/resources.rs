//! Trackable combat resources derived from a stat block.
//!
//! Spell slots, limited-use spells, recharging abilities, daily abilities,
//! and legendary actions each become a [`CombatantResource`] with one
//! checkbox per use. Resources are emitted in this order:
//!
//! 1. spell slots, by ascending level
//! 2. limited-use spell groups
//! 3. recharging features, then recharging actions
//! 4. other limited features, then other limited actions
//! 5. legendary actions

use bestiary_combinator::{Cursor, Parser, fold_case, int, literal, zip3};
use bestiary_foundation::{Error, LimitedUse, Recharge, Result};
use bestiary_grammar::Spellcasting;
use im::OrdMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::statblock::StatBlock;

/// Most uses a single resource tracks. Larger counts written in a stat
/// block are clamped to this.
pub const MAX_TRACKED_USES: usize = 100;

/// A resource with a fixed number of uses, each of which is spent or not.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantResource {
    /// Identifier derived from the title and the position in the list.
    pub id: String,
    /// Display title, e.g. "1st level spell slots".
    pub title: String,
    /// One entry per use; `true` means spent.
    pub slots: Vec<bool>,
}

impl CombatantResource {
    /// Creates a resource with all uses available, at most
    /// [`MAX_TRACKED_USES`] of them.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, slot_count: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slots: vec![false; slot_count.min(MAX_TRACKED_USES)],
        }
    }

    /// Number of spent uses.
    #[must_use]
    pub fn used(&self) -> usize {
        self.slots.iter().filter(|&&spent| spent).count()
    }

    /// Number of uses left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.slots.len() - self.used()
    }

    /// Marks the first `count` uses as spent and the rest as available.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` exceeds the number of slots.
    pub fn set_used(&mut self, count: usize) -> Result<()> {
        if count > self.slots.len() {
            return Err(Error::internal(format!(
                "cannot spend {count} uses of '{}', which has {}",
                self.title,
                self.slots.len()
            )));
        }
        for (index, slot) in self.slots.iter_mut().enumerate() {
            *slot = index < count;
        }
        Ok(())
    }

    /// Makes every use available again.
    pub fn reset(&mut self) {
        self.slots.fill(false);
    }
}

fn legendary_action_count() -> Parser<u32> {
    zip3(literal("take "), int(), literal(" legendary actions"))
        .map(|(_, count, _)| count)
        .skipping_any_before()
}

/// Returns the ordinal form of a number: `1st`, `2nd`, `11th`, `23rd`.
#[must_use]
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Joins items as an English list: `a`, `a and b`, `a, b, and c`.
#[must_use]
pub fn english_list(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

fn slug(title: &str) -> String {
    title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn is_recharging(limited_use: &LimitedUse) -> bool {
    matches!(
        limited_use.recharge,
        Some(Recharge::TurnStart(_) | Recharge::Rest { .. })
    )
}

fn uses(amount: u32) -> usize {
    usize::try_from(amount).map_or(MAX_TRACKED_USES, |n| n.min(MAX_TRACKED_USES))
}

impl StatBlock {
    /// Derives the trackable resources from the parsed features and
    /// actions. Entries that have not been parsed contribute nothing.
    #[must_use]
    pub fn extract_resources(&self) -> Vec<CombatantResource> {
        let features = self
            .features
            .iter()
            .filter_map(|feature| Some((feature.input().name.as_str(), feature.value()?)))
            .map(|(name, parsed)| (name, parsed.limited_use.as_ref(), parsed.spellcasting.as_ref()));
        let actions = self
            .actions
            .iter()
            .filter_map(|action| Some((action.input().name.as_str(), action.value()?)))
            .map(|(name, parsed)| (name, parsed.limited_use.as_ref(), parsed.spellcasting.as_ref()));
        let entries: Vec<_> = features.chain(actions).collect();

        let spellcasting: Vec<&Spellcasting> = entries.iter().filter_map(|&(_, _, spellcasting)| spellcasting).collect();

        let mut slots: OrdMap<u32, u32> = OrdMap::new();
        for (level, count) in spellcasting.iter().flat_map(|s| s.slots_by_level.iter()) {
            if *level > 0 {
                let total = slots.get(level).copied().unwrap_or(0).saturating_add(*count);
                slots.insert(*level, total);
            }
        }

        let mut titled: Vec<(String, usize)> = slots
            .iter()
            .map(|(level, count)| (format!("{} level spell slots", ordinal(*level)), uses(*count)))
            .collect();

        for group in spellcasting.iter().flat_map(|s| s.limited_use_spells.iter()) {
            let Some(limited_use) = &group.limited_use else {
                continue;
            };
            let names: Vec<&str> = group.spells.iter().map(|spell| spell.value.text.as_str()).collect();
            titled.push((
                format!("{} ({})", english_list(&names), limited_use.display_string()),
                uses(limited_use.amount),
            ));
        }

        let limited: Vec<(&str, &LimitedUse)> = entries
            .iter()
            .filter_map(|&(name, limited_use, _)| limited_use.map(|found| (name, &found.value)))
            .collect();
        let (recharging, other): (Vec<_>, Vec<_>) =
            limited.into_iter().partition(|(_, limited_use)| is_recharging(limited_use));
        for (name, limited_use) in recharging.into_iter().chain(other) {
            titled.push((name.to_string(), uses(limited_use.amount)));
        }

        let legendary = self
            .legendary
            .as_ref()
            .and_then(|legendary| legendary.description.as_deref())
            .and_then(|description| {
                let chars = fold_case(description);
                legendary_action_count()
                    .parse(Cursor::new(&chars))
                    .map(|(count, _)| count)
            })
            .filter(|&count| count > 0);
        if let Some(legendary) = legendary {
            titled.push(("Legendary Actions".to_string(), uses(legendary)));
        }

        debug!(resources = titled.len(), "extracted resources");
        titled
            .into_iter()
            .enumerate()
            .map(|(position, (title, slot_count))| {
                CombatantResource::new(format!("{position}-{}", slug(&title)), title, slot_count)
            })
            .collect()
    }
}

/// Derives resources from a stat block. See [`StatBlock::extract_resources`].
#[must_use]
pub fn extract_resources(stats: &StatBlock) -> Vec<CombatantResource> {
    stats.extract_resources()
}
