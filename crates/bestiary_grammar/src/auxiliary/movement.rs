use bestiary_combinator::{
    Parser, any, char_eq, either, end, horizontal_whitespace, int, literal, word, zip, zip4, zip5,
};
use bestiary_foundation::{Movement, MovementMode};

/// A speed line such as `40 ft., burrow 40 ft., fly 80 ft.`.
///
/// An unlabeled speed is a walking speed. The whole line must be
/// consumed; anything malformed fails the parse.
#[must_use]
pub fn movement() -> Parser<Movement> {
    zip(any(speed()), end()).map(|(speeds, ())| {
        speeds
            .into_iter()
            .fold(Movement::new(), |mut movement, (mode, feet)| {
                if !movement.contains_key(&mode) {
                    movement.insert(mode, feet);
                }
                movement
            })
    })
}

/// Parses a speed line, yielding an empty mapping when it is malformed.
#[must_use]
pub fn parse_movement(text: &str) -> Movement {
    movement().run(text).unwrap_or_default()
}

fn speed() -> Parser<(MovementMode, u32)> {
    let separator = either(
        literal(",").trimming(horizontal_whitespace()).value(()),
        end(),
    );
    let feet = literal("ft.").skipping_any_before();

    // fly 30 ft.
    let mode_first = zip5(
        word().optional(),
        char_eq(' '),
        int(),
        feet.clone(),
        separator.clone(),
    )
    .map(|(mode, _, speed, _, ())| (speed, mode));

    // 30 ft. swim
    let speed_first = zip4(int(), feet, zip(char_eq(' '), word()).optional(), separator)
        .map(|(speed, _, mode, ())| (speed, mode.map(|(_, mode)| mode)));

    either(mode_first, speed_first).flat_map(|(speed, mode)| match mode {
        Some(mode) => MovementMode::from_name(&mode).map(|mode| (mode, speed)),
        None => Some((MovementMode::Walk, speed)),
    })
}
