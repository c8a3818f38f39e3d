//! Scoring pipeline integration tests
//!
//! Exported tables go through ingestion, rule evaluation, deduplication and
//! ranking, via both the engine API and the batch runner.
//!
//! Run with: cargo test -p integration-tests --test scoring_tests

use integration_tests::{
    config_table, reactions_table, users_table, LogRow, TableFiles, CHANNEL,
};
use scores_core::{
    ChannelConfig, ChannelDescriptor, ChannelId, DomainError, EventType, ReactionEvent,
    ReactionRules, User, UserDirectory, UserId,
};
use scores_engine::dto::{
    find_channel, leaderboard_table, ledger_table, parse_reaction_log, parse_users,
};
use scores_engine::{ScoringContext, ScoringService};
use serde_json::{json, Value};

fn context_from_tables(rows: &[LogRow]) -> ScoringContext {
    let descriptor = find_channel(&config_table(None), &ChannelId::new(CHANNEL)).unwrap();
    let users = parse_users(&users_table()).unwrap();
    let events = parse_reaction_log(&reactions_table(rows)).unwrap();
    ScoringContext::new(descriptor, users, events)
}

fn run_json(files: &TableFiles, output: &str) -> Value {
    let config = files.config(CHANNEL, output).unwrap();
    serde_json::from_str(&scores_cli::execute(&config).unwrap()).unwrap()
}

// ============================================================================
// Engine
// ============================================================================

#[test]
fn test_thread_author_scenario() {
    let users: UserDirectory = [
        User::new(UserId::new("U1"), "Alice"),
        User::new(UserId::new("U2"), "Bob"),
    ]
    .into_iter()
    .collect();
    let descriptor = ChannelDescriptor {
        channel_id: ChannelId::new("C1"),
        sheet_name: "Questions".to_string(),
        config: ChannelConfig {
            admin_user_id: None,
            restrict_reactions_to_thread_authors: true,
            reaction_rules: ReactionRules::new().with("check", 2),
        },
        leaderboard_link: None,
    };
    let react = |issuer: &str, target: &str, message: &str| {
        ReactionEvent::new(
            UserId::new(issuer),
            UserId::new(target),
            ChannelId::new("C1"),
            "check",
            EventType::Added,
        )
        .with_thread("T1", Some(UserId::new("U1")))
        .with_message("answer", Some(message.to_string()))
    };
    let ctx = ScoringContext::new(
        descriptor,
        users,
        vec![react("U1", "U2", "M1"), react("U2", "U1", "M2")],
    );
    let service = ScoringService::new(&ctx);

    let ledger = service.ledger().unwrap();
    assert_eq!(ledger[0].score_change, Some(2));
    assert_eq!(ledger[1].score_change, None);
    assert!(!ledger[1].duplicate_suppressed);

    let leaderboard = service.leaderboard().unwrap();
    assert_eq!(leaderboard.rows.len(), 1);
    assert_eq!(leaderboard.rows[0].name, "Bob");
    assert_eq!(leaderboard.rows[0].total_score, 2);
    assert_eq!(leaderboard.rows[0].rank, 1);
}

#[test]
fn test_ledger_from_exported_tables() {
    let ctx = context_from_tables(&[
        LogRow::added("U_ALICE", "U_BOB", "white_check_mark"),
        LogRow::added("U_ALICE", "U_BOB", "white_check_mark"),
        LogRow::added("U_CAROL", "U_BOB", "trophy").on_message("2"),
        LogRow::added("U_ADMIN", "U_CAROL", "trophy").on_message("3"),
        LogRow::added("U_ALICE", "U_CAROL", "thumbsup").on_message("4"),
        LogRow::added("U_ALICE", "U_CAROL", "lock").in_channel("C_OTHER"),
        LogRow::removed("U_ALICE", "U_BOB", "white_check_mark"),
    ]);
    let table = ledger_table(&ScoringService::new(&ctx).ledger().unwrap());

    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!([
            ["issuer name", "target name", "score change", "Comment"],
            ["Alice", "Bob", 2, ""],
            ["Alice", "Bob", "", "Duplication detected"],
            ["Carol", "Bob", "", ""],
            ["Dana", "Carol", 10, ""],
            ["Alice", "Carol", "", ""],
            ["Alice", "Carol", "", ""],
            ["Alice", "Bob", -2, ""]
        ])
    );
}

#[test]
fn test_leaderboard_ties_and_columns() {
    let ctx = context_from_tables(&[
        LogRow::added("U_ALICE", "U_BOB", "trophy").on_message("1"),
        LogRow::added("U_ALICE", "U_CAROL", "white_check_mark").on_message("2"),
        LogRow::added("U_ADMIN", "U_ALICE", "trophy").on_message("3"),
        LogRow::added("U_ALICE", "U_CAROL", "lock").on_message("4"),
        LogRow::added("U_ALICE", "U_ADMIN", "lock").on_message("5"),
    ]);
    let table = leaderboard_table(&ScoringService::new(&ctx).leaderboard().unwrap());

    assert_eq!(
        serde_json::to_value(&table).unwrap(),
        json!([
            ["user", "score", "rank", "[white_check_mark]'s points", "[lock]'s points", "[trophy]'s points"],
            ["Alice", 10, 1, 0, 0, 10],
            ["Bob", 10, 1, 0, 0, 10],
            ["Carol", 3, 2, 2, 1, 0],
            ["Dana", 1, 3, 0, 1, 0]
        ])
    );
}

#[test]
fn test_podium_groups_ties() {
    let ctx = context_from_tables(&[
        LogRow::added("U_ALICE", "U_BOB", "trophy").on_message("1"),
        LogRow::added("U_ALICE", "U_CAROL", "trophy").on_message("2"),
        LogRow::added("U_ALICE", "U_ADMIN", "white_check_mark").on_message("3"),
    ]);
    let reply = ScoringService::new(&ctx).scores_reply().unwrap();
    assert_eq!(
        reply,
        "*Leaderboard*: :first_place_medal: Bob, Carol (10 pts) :second_place_medal: Dana (2 pts)"
    );
}

#[test]
fn test_legacy_rows_without_message_id() {
    let legacy = |target| {
        let mut row = LogRow::added("U_ALICE", target, "lock");
        row.message_id = None;
        row
    };
    let ctx = context_from_tables(&[legacy("U_BOB"), legacy("U_BOB"), legacy("U_CAROL")]);
    let ledger = ScoringService::new(&ctx).ledger().unwrap();
    let changes: Vec<Option<i64>> = ledger.iter().map(|r| r.score_change).collect();
    assert_eq!(changes, [Some(1), None, Some(1)]);
    assert!(ledger[1].duplicate_suppressed);
}

#[test]
fn test_unknown_user_in_log_fails() {
    let ctx = context_from_tables(&[LogRow::added("U_ALICE", "U_GHOST", "lock")]);
    let err = ScoringService::new(&ctx).leaderboard().unwrap_err();
    assert!(matches!(err, DomainError::UserNotFound(id) if id.as_str() == "U_GHOST"));
}

// ============================================================================
// Batch runner
// ============================================================================

#[test]
fn test_runner_outputs() {
    let files = TableFiles::write(
        &config_table(Some("https://sheets.example/leaderboard")),
        &users_table(),
        &reactions_table(&[
            LogRow::added("U_ALICE", "U_BOB", "white_check_mark"),
            LogRow::added("U_ADMIN", "U_ALICE", "lock").on_message("2"),
        ]),
    )
    .unwrap();

    let leaderboard = run_json(&files, "leaderboard");
    assert_eq!(leaderboard[1], json!(["Bob", 2, 1, 2, 0, 0]));
    assert_eq!(leaderboard[2], json!(["Alice", 1, 2, 0, 1, 0]));

    let ledger = run_json(&files, "ledger");
    assert_eq!(ledger.as_array().map(Vec::len), Some(3));

    let podium = scores_cli::execute(&files.config(CHANNEL, "podium").unwrap()).unwrap();
    assert_eq!(
        podium,
        "*Leaderboard*: :first_place_medal: Bob (2 pts) :second_place_medal: Alice (1 pts)\n\
         _Complete leaderboard is available here : https://sheets.example/leaderboard _"
    );

    let help = scores_cli::execute(&files.config(CHANNEL, "help").unwrap()).unwrap();
    assert!(help.contains("- When reaction :trophy: is set by this channel admin (Dana) or question thread author : adding 10 points"));
}

#[test]
fn test_runner_podium_without_scores() {
    let files = TableFiles::write(
        &config_table(None),
        &users_table(),
        &reactions_table(&[LogRow::added("U_ALICE", "U_BOB", "thumbsup")]),
    )
    .unwrap();

    let podium = scores_cli::execute(&files.config(CHANNEL, "podium").unwrap()).unwrap();
    assert_eq!(
        podium,
        "No score available yet in spreadsheet's sheet named [Questions] corresponding to channel [C024BE91L] !"
    );
}

#[test]
fn test_runner_unconfigured_channel() {
    let files = TableFiles::write(&config_table(None), &users_table(), &reactions_table(&[])).unwrap();

    let help = scores_cli::execute(&files.config("C_NEW", "help").unwrap()).unwrap();
    assert!(help.starts_with("It appears this channel has not be configured yet."));

    let err = scores_cli::execute(&files.config("C_NEW", "leaderboard").unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "UNKNOWN_CHANNEL");
    assert_eq!(err.exit_code(), 65);
}

#[test]
fn test_runner_source_errors() {
    let files = TableFiles::write(&config_table(None), &users_table(), &reactions_table(&[])).unwrap();

    files.put_raw("users.json", "[[\"id\", \"name\"], [\"U1\"").unwrap();
    let err = scores_cli::execute(&files.config(CHANNEL, "ledger").unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "MALFORMED_TABLE");
    assert_eq!(err.exit_code(), 65);

    std::fs::remove_file(files.path("users.json")).unwrap();
    let err = scores_cli::execute(&files.config(CHANNEL, "ledger").unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "IO_ERROR");
    assert_eq!(err.exit_code(), 74);
}

#[test]
fn test_runner_invalid_row() {
    let mut reactions = reactions_table(&[LogRow::added("U_ALICE", "U_BOB", "lock")]);
    reactions[1][5] = json!("reaction_edited");
    let files = TableFiles::write(&config_table(None), &users_table(), &reactions).unwrap();

    let err = scores_cli::execute(&files.config(CHANNEL, "leaderboard").unwrap()).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_ROW");
    assert!(err.to_string().starts_with("Invalid row 2 in reactions table"));
}

#[test]
fn test_table_files_are_isolated_and_removed() {
    let first = TableFiles::write(&config_table(None), &users_table(), &reactions_table(&[])).unwrap();
    let second = TableFiles::write(&config_table(None), &users_table(), &reactions_table(&[])).unwrap();
    assert_ne!(first.dir(), second.dir());
    assert!(first.path("users.json").is_file());

    let dir = first.dir().to_path_buf();
    drop(first);
    assert!(!dir.exists());
    assert!(second.path("users.json").is_file());
}
