//! Integration tests for the ant colony
//!
//! These tests drive the territory directly and through the numbered menu:
//! - Founding, supplying and ageing groups
//! - Conflict resolution (strict majority wins, ties go to the defender)
//! - Capacity and index errors leave the territory untouched

use colony_sim::colony::{ConflictOutcome, Territory};
use colony_sim::command::MenuSession;
use colony_sim::core::config::ColonyConfig;
use colony_sim::core::error::SimError;
use colony_sim::core::registry::Entity;
use std::io::Cursor;

fn default_territory() -> Territory {
    Territory::new(&ColonyConfig::default())
}

fn run_menu(script: &str) -> (Territory, String) {
    let mut out = Vec::new();
    let territory = {
        let mut session =
            MenuSession::new(default_territory(), Cursor::new(script.to_string()), &mut out);
        session.run().expect("menu session should not fail on in-memory I/O");
        session.territory().clone()
    };
    (territory, String::from_utf8(out).expect("output is UTF-8"))
}

// ============================================================================
// Territory Behaviour
// ============================================================================

#[test]
fn test_new_group_reports_empty_and_active() {
    let mut territory = default_territory();
    let idx = territory.establish("A", "Soldier").unwrap();

    let report = territory.describe(idx).unwrap();

    assert!(report.contains("Workers: 0"));
    assert!(report.contains("Warriors: 0"));
    assert!(report.contains("Conquests: 0"));
    assert!(report.contains("Status: Active"));
}

#[test]
fn test_five_beats_three() {
    let mut territory = default_territory();
    let red = territory.establish("Red", "Fire").unwrap();
    let black = territory.establish("Black", "Carpenter").unwrap();
    territory.allocate(red, 0, 5).unwrap();
    territory.allocate(black, 2, 3).unwrap();

    let outcome = territory.resolve_conflict(red, black).unwrap();

    assert!(matches!(outcome, ConflictOutcome::Victory { spoils: 5, .. }));
    let black = territory.group(black).unwrap();
    assert!(!black.is_active());
    assert_eq!(black.eliminated_by(), Some("Red"));
    assert_eq!(territory.group(red).unwrap().conquests(), &["Black".to_string()]);
}

#[test]
fn test_four_against_four_eliminates_nobody() {
    let mut territory = default_territory();
    territory.establish("Red", "Fire").unwrap();
    territory.establish("Black", "Carpenter").unwrap();
    territory.allocate(0, 0, 4).unwrap();
    territory.allocate(1, 0, 4).unwrap();

    territory.resolve_conflict(0, 1).unwrap();

    for i in 0..2 {
        let group = territory.group(i).unwrap();
        assert!(group.is_active());
        assert_eq!(group.eliminated_by(), None);
        assert!(group.conquests().is_empty());
    }
}

#[test]
fn test_progress_ages_only_the_living() {
    let mut territory = default_territory();
    territory.establish("Red", "Fire").unwrap();
    territory.establish("Black", "Carpenter").unwrap();
    territory.allocate(0, 0, 2).unwrap();
    territory.resolve_conflict(0, 1).unwrap();

    territory.progress();
    territory.progress();

    assert_eq!(territory.group(0).unwrap().age(), 2);
    assert_eq!(territory.group(1).unwrap().age(), 0);
}

#[test]
fn test_eleventh_group_rejected() {
    let mut territory = default_territory();
    for i in 0..10 {
        territory.establish(&format!("g{}", i), "Fire").unwrap();
    }

    let err = territory.establish("g10", "Fire").unwrap_err();

    assert!(matches!(err, SimError::CapacityExceeded { capacity: 10 }));
    assert_eq!(territory.len(), 10);
}

#[test]
fn test_allocate_to_missing_index() {
    let mut territory = default_territory();
    for name in ["A", "B", "C"] {
        territory.establish(name, "Fire").unwrap();
    }

    let err = territory.allocate(999, 1, 1).unwrap_err();

    assert!(matches!(err, SimError::InvalidIndex { index: 999, count: 3 }));
    for i in 0..3 {
        assert_eq!(territory.group(i).unwrap().headcount(), 0);
    }
}

// ============================================================================
// Menu Session
// ============================================================================

#[test]
fn test_menu_full_campaign() {
    let script = "\
1\nRed\nFire\n\
1\nBlack\nCarpenter\n\
2\n1\n10\n6\n\
2\n2\n4\n2\n\
3\n\
4\n1\n2\n\
5\n1\n\
5\n2\n\
6\n\
7\n";
    let (territory, output) = run_menu(script);

    assert!(output.contains("Red defeated Black!"));
    assert!(output.contains("Eliminations: 6"));
    assert!(output.contains("Conquests: 1 (Black)"));
    assert!(output.contains("Status: Eliminated by Red"));
    assert!(output.contains("1. Red (Fire)"));
    assert!(output.contains("2. Black (Carpenter)"));
    assert_eq!(territory.group(0).unwrap().age(), 1);
}

#[test]
fn test_menu_conflict_with_eliminated_group() {
    let script = "1 Red Fire\n1 Black Ant\n1 Gold Ant\n2 1 0 5\n4 1 2\n4 3 2\n7\n";
    let (_, output) = run_menu(script);

    assert!(output.contains("Red defeated Black!"));
    assert!(output.contains("Both populations must be active for conflict."));
}

#[test]
fn test_menu_allocate_to_eliminated_group() {
    let script = "1 Red Fire\n1 Black Ant\n2 1 0 5\n4 1 2\n2 2 9 9\n7\n";
    let (territory, output) = run_menu(script);

    assert!(output.contains("Black has been eliminated; nothing changed."));
    assert_eq!(territory.group(1).unwrap().headcount(), 0);
}

#[test]
fn test_menu_rejects_duplicate_names() {
    let (territory, output) = run_menu("1 Red Fire\n1 Red Army\n7\n");
    assert!(output.contains("A population named Red already exists."));
    assert_eq!(territory.len(), 1);
}

#[test]
fn test_menu_out_of_range_selection() {
    let (_, output) = run_menu("1 Red Fire\n5\n4\n7\n");
    assert!(output.contains("Invalid group selection."));
    assert!(output.contains("Farewell"));
}
