//! Grammars for the short stat block fields: speed, armor class, hit
//! points, the type line, and modifier lists.
//!
//! These operate on the field text as written (no case folding) and
//! never report partial matches as success.

mod movement;
mod stats;
mod type_line;

pub use movement::{movement, parse_movement};
pub use stats::{
    ArmorClass, HitPoints, armor_class, hit_points, modifier_list, parse_armor_class,
    parse_hit_points, parse_modifier_list,
};
pub use type_line::{TypeLine, parse_type_line, type_line};
