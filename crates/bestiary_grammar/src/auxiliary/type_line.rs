use bestiary_combinator::{
    Parser, any, char_eq, character, either, end, horizontal_whitespace, one_or_more,
    parenthesized, word, zip, zip3,
};
use bestiary_foundation::{Alignment, CreatureSize};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A creature type line such as `M humanoid (gnoll), chaotic neutral`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TypeLine {
    /// Size category, if given.
    pub size: Option<CreatureSize>,
    /// Creature type as written, e.g. `dragon`.
    pub creature_type: String,
    /// Parenthesized subtype, e.g. `gnoll`.
    pub subtype: Option<String>,
    /// Alignment, if given.
    pub alignment: Option<Alignment>,
}

#[derive(Clone, Debug)]
enum Component {
    Size(CreatureSize),
    Type(String),
    Subtype(String),
    Alignment(Alignment),
}

/// Comma-separated components in any order; unrecognized components
/// (such as a source book name) are skipped. Fails without a type.
#[must_use]
pub fn type_line() -> Parser<TypeLine> {
    let recognized = zip(either(alignment(), size_and_type()), end_of_component())
        .map(|(components, ())| components);
    any(either(recognized, skip_component()))
        .map(|groups| groups.into_iter().flatten().collect::<Vec<_>>())
        .flat_map(|components| {
            let mut size = None;
            let mut creature_type = None;
            let mut subtype = None;
            let mut alignment = None;
            for component in components {
                match component {
                    Component::Size(s) => {
                        size.get_or_insert(s);
                    }
                    Component::Type(t) => {
                        creature_type.get_or_insert(t);
                    }
                    Component::Subtype(s) => {
                        subtype.get_or_insert(s);
                    }
                    Component::Alignment(a) => {
                        alignment.get_or_insert(a);
                    }
                }
            }
            Some(TypeLine {
                size,
                creature_type: creature_type?,
                subtype,
                alignment,
            })
        })
}

/// Parses a type line.
#[must_use]
pub fn parse_type_line(text: &str) -> Option<TypeLine> {
    type_line().run(text)
}

fn component_text() -> Parser<String> {
    one_or_more(character(|c| c != ',')).joined("")
}

fn end_of_component() -> Parser<()> {
    zip(char_eq(','), any(char_eq(' ')))
        .value(())
        .or(end())
}

fn alignment() -> Parser<Vec<Component>> {
    component_text().flat_map(|text| {
        Alignment::from_phrase(&text).map(|alignment| vec![Component::Alignment(alignment)])
    })
}

fn size_and_type() -> Parser<Vec<Component>> {
    let size = zip(word(), horizontal_whitespace())
        .flat_map(|(w, _)| CreatureSize::from_name(&w).map(Component::Size));
    let subtype = parenthesized()
        .map(Component::Subtype)
        .trimming(horizontal_whitespace());
    zip3(size.optional(), word().map(Component::Type), subtype.optional())
        .map(|(size, creature_type, subtype)| {
            [size, Some(creature_type), subtype].into_iter().flatten().collect()
        })
}

fn skip_component() -> Parser<Vec<Component>> {
    zip(component_text(), end_of_component()).value(Vec::new())
}
