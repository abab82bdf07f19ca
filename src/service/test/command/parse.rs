use super::*;

/// Tests recognition of every command.
#[test]
fn parses_known_commands() {
    assert_eq!(WarCommand::parse("!stats"), Some(WarCommand::Stats));
    assert_eq!(WarCommand::parse("!warlog"), Some(WarCommand::WarLog));
    assert_eq!(WarCommand::parse("!analysis"), Some(WarCommand::Analysis));
    assert_eq!(WarCommand::parse("!help"), Some(WarCommand::Help));
}

/// Tests that matching ignores case, surrounding whitespace and extra words.
#[test]
fn parses_loosely_formatted_commands() {
    assert_eq!(WarCommand::parse("!STATS"), Some(WarCommand::Stats));
    assert_eq!(WarCommand::parse("  !WarLog  "), Some(WarCommand::WarLog));
    assert_eq!(WarCommand::parse("!stats please"), Some(WarCommand::Stats));
}

/// Tests messages that are not commands.
#[test]
fn ignores_other_messages() {
    assert_eq!(WarCommand::parse(""), None);
    assert_eq!(WarCommand::parse("stats"), None);
    assert_eq!(WarCommand::parse("!"), None);
    assert_eq!(WarCommand::parse("!attack"), None);
    assert_eq!(WarCommand::parse("what are the !stats"), None);
}

/// Tests the average stars per attack.
///
/// Expected: 0 without attacks, otherwise rounded to two decimals
#[test]
fn averages_stars_per_attack() {
    assert_eq!(avg_stars_per_attack(0, 0), 0.0);
    assert_eq!(avg_stars_per_attack(12, 0), 0.0);
    assert_eq!(avg_stars_per_attack(30, 20), 1.5);
    assert_eq!(avg_stars_per_attack(5, 3), 1.67);
}
