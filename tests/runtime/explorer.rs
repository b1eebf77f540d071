//! Integration tests for the grammar explorer

use bestiary_foundation::ErrorKind;
use bestiary_runtime::{Evaluation, Repl, ScriptedEditor};

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::default()).without_banner()
}

fn output(line: &str) -> String {
    match repl().eval(line).expect("evaluation") {
        Evaluation::Output(output) => output,
        Evaluation::Quit => panic!("unexpected quit for {line}"),
    }
}

#[test]
fn bare_text_is_parsed_as_an_action() {
    let output = output(
        "Melee Weapon Attack: +4 to hit, reach 5 ft., one target. Hit: 5 (1d6 + 2) slashing damage.",
    );
    assert!(output.contains("WeaponAttack"));
    assert!(output.contains("Slashing"));
    assert!(!output.contains("unparsed"));
}

#[test]
fn leftover_text_is_shown() {
    let output = output(
        ":action Melee Weapon Attack: +4 to hit, reach 5 ft., one creature. Hit: 6 (1d8 + 2) bludgeoning \
         damage, and the target is grappled (escape DC 14). Until this grapple ends, the creature is \
         restrained.",
    );
    assert!(output.contains("Grappled"));
    assert!(output.contains("unparsed:"));
    assert!(output.contains("until this grapple ends"));
}

#[test]
fn unmatched_action() {
    assert!(output(":action The dragon makes three attacks.").contains("no match"));
}

#[test]
fn feature_command() {
    let parsed = output(":feature Web (Recharge 5-6) | The spider shoots webbing.");
    assert!(parsed.contains("TurnStart"));
    assert!(output(":feature Keen Smell | The wolf has advantage.").contains("no match"));

    let err = repl().eval(":feature Keen Smell").expect_err("missing separator");
    assert!(matches!(err.kind, ErrorKind::Internal(_)));
}

#[test]
fn auxiliary_commands() {
    assert!(output(":movement 30 ft., fly 60 ft.").contains("Fly"));
    assert!(output(":ac 15 (natural armor)").contains("natural armor"));
    assert!(output(":hp 7 (2d6)").contains("HitPoints"));
    assert!(output(":type Medium humanoid (goblinoid), neutral evil").contains("goblinoid"));
    assert!(output(":dice deals 7 (2d6) damage").contains("Dice"));
    assert!(output(":help").contains(":feature"));
}

#[test]
fn quit_and_unknown_commands() {
    assert!(matches!(repl().eval(":quit"), Ok(Evaluation::Quit)));
    assert!(matches!(repl().eval(":q"), Ok(Evaluation::Quit)));
    let err = repl().eval(":roll 1d20").expect_err("unknown command");
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
}

#[test]
fn run_stops_at_quit() {
    let editor = ScriptedEditor::new([":hp 7 (2d6)", "", ":bogus", ":quit", ":ac 12"]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().expect("run");
    assert_eq!(repl.editor().history(), [":hp 7 (2d6)", ":bogus", ":quit"]);
}

#[test]
fn script_errors_carry_the_line() {
    let path = std::env::temp_dir().join(format!("bestiary-script-{}.txt", std::process::id()));
    std::fs::write(&path, "# speed lines\n\n:movement 30 ft.\n:bogus\n").expect("write script");
    let result = repl().eval_file(&path);
    let _ = std::fs::remove_file(&path);

    let err = result.expect_err("unknown command");
    assert!(matches!(err.kind, ErrorKind::UnknownCommand(_)));
    assert_eq!(err.context.and_then(|context| context.line), Some(4));
}
