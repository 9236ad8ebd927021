//! End-to-end lineup validation scenarios.

use lineup_rules::core::{PlayerEntry, Position};
use lineup_rules::enforcement::{LineupRules, RuleKind, RuleViolation};
use lineup_rules::{roster, validate_lineup};
use stillwater::validation::Validation;

fn entry(id: i64, name: &str, position: Position, team: i64, game: i64, salary: u32) -> PlayerEntry {
    PlayerEntry::new(id, name, position, team, game, salary)
}

fn valid_lineup() -> Vec<PlayerEntry> {
    vec![
        entry(1, "Chris Sale", Position::Pitcher, 12, 123, 9500),
        entry(2, "Yadier Molina", Position::Catcher, 22, 115, 2500),
        entry(3, "Luke Voit", Position::FirstBase, 20, 115, 2800),
        entry(4, "Dee Gordon", Position::SecondBase, 18, 101, 3200),
        entry(5, "Manny Machado", Position::ThirdBase, 14, 134, 3100),
        entry(6, "Troy Tulowitzki", Position::Shortstop, 27, 126, 3300),
        entry(7, "Andrew McCutchen", Position::Outfield, 11, 131, 3800),
        entry(8, "Bryce Harper", Position::Outfield, 15, 119, 3800),
        entry(9, "Mookie Betts", Position::Outfield, 12, 123, 3600),
    ]
}

fn violation_kinds(lineup: &[PlayerEntry]) -> Vec<RuleKind> {
    match LineupRules::default().enforce(lineup) {
        Validation::Failure(violations) => violations.iter().map(RuleViolation::kind).collect(),
        Validation::Success(_) => Vec::new(),
    }
}

#[test]
fn lineup_satisfying_all_rules_is_valid() {
    let lineup = valid_lineup();

    assert!(validate_lineup(&lineup));
    assert!(violation_kinds(&lineup).is_empty());
}

#[test]
fn too_many_players_from_one_team_is_invalid() {
    let mut lineup = valid_lineup();
    lineup[2] = entry(3, "Mitch Moreland", Position::FirstBase, 12, 123, 2800);

    assert!(!validate_lineup(&lineup));
    assert_eq!(violation_kinds(&lineup), vec![RuleKind::TeamCount]);
}

#[test]
fn too_many_players_from_one_game_is_invalid() {
    let mut lineup = valid_lineup();
    lineup[1].game_id = 123i64.into();
    lineup[7].game_id = 123i64.into();

    assert!(!validate_lineup(&lineup));
    assert_eq!(violation_kinds(&lineup), vec![RuleKind::GameCount]);
}

#[test]
fn too_many_players_at_one_position_is_invalid() {
    let mut lineup = valid_lineup();
    lineup.push(entry(10, "Aaron Judge", Position::Outfield, 40, 140, 2200));

    assert!(!validate_lineup(&lineup));
    assert_eq!(violation_kinds(&lineup), vec![RuleKind::PositionCount]);
}

#[test]
fn too_few_players_at_one_position_is_invalid() {
    let mut lineup = valid_lineup();
    lineup.pop();

    assert!(!validate_lineup(&lineup));
    assert_eq!(violation_kinds(&lineup), vec![RuleKind::PositionCount]);
}

#[test]
fn missing_position_is_invalid() {
    let mut lineup = valid_lineup();
    lineup.remove(1);

    assert!(!validate_lineup(&lineup));
    match LineupRules::default().enforce(&lineup) {
        Validation::Failure(violations) => {
            let found: Vec<RuleViolation> = violations.iter().cloned().collect();
            assert_eq!(
                found,
                vec![RuleViolation::PositionSlotMismatch {
                    position: Position::Catcher,
                    count: 0,
                    required: 1,
                }]
            );
        }
        Validation::Success(_) => panic!("Expected failure for missing catcher"),
    }
}

#[test]
fn salary_above_cap_is_invalid() {
    let salaries = [10800, 4000, 4400, 4500, 4100, 4500, 4200, 4400, 4200];
    let lineup: Vec<PlayerEntry> = valid_lineup()
        .into_iter()
        .zip(salaries)
        .map(|(mut player, salary)| {
            player.salary = salary;
            player
        })
        .collect();

    assert!(!validate_lineup(&lineup));
    assert_eq!(violation_kinds(&lineup), vec![RuleKind::Salary]);
}

#[test]
fn salary_exactly_at_cap_is_valid() {
    let mut lineup = valid_lineup();
    lineup[0].salary += 45_000 - 35_600;

    assert!(validate_lineup(&lineup));
}

#[test]
fn validation_is_idempotent() {
    let lineup = valid_lineup();
    let snapshot = lineup.clone();

    assert_eq!(validate_lineup(&lineup), validate_lineup(&lineup));
    assert_eq!(lineup, snapshot);
}

#[test]
fn decoded_feed_lineup_validates() {
    let json = r#"[
        {"id": 1, "name": "Chris Sale", "position": "P", "teamId": "BOS", "gameId": 123, "salary": 9500},
        {"id": 2, "name": "Yadier Molina", "position": "C", "teamId": "STL", "gameId": 115, "salary": 2500},
        {"id": 3, "name": "Luke Voit", "position": "1B", "teamId": "NYY", "gameId": 115, "salary": 2800},
        {"id": 4, "name": "Dee Gordon", "position": "2B", "teamId": "SEA", "gameId": 101, "salary": 3200},
        {"id": 5, "name": "Manny Machado", "position": "3B", "teamId": "SD", "gameId": 134, "salary": 3100},
        {"id": 6, "name": "Troy Tulowitzki", "position": "SS", "teamId": "TOR", "gameId": 126, "salary": 3300},
        {"id": 7, "name": "Andrew McCutchen", "position": "OF", "teamId": "PIT", "gameId": 131, "salary": 3800},
        {"id": 8, "name": "Bryce Harper", "position": "OF", "teamId": "PHI", "gameId": 119, "salary": 3800},
        {"id": 9, "name": "Mookie Betts", "position": "OF", "teamId": "BOS", "gameId": 123, "salary": 3600}
    ]"#;

    let lineup = roster::from_json_str(json).unwrap();
    assert!(validate_lineup(&lineup));
}

#[test]
fn custom_rules_change_the_verdict() {
    let lineup = valid_lineup();
    let strict = LineupRules::builder().salary_cap(30_000).build();
    let one_per_team = LineupRules::builder().max_per_team(1).build();

    assert!(!strict.is_valid(&lineup));
    assert!(!one_per_team.is_valid(&lineup));
    assert!(LineupRules::default().is_valid(&lineup));
}
