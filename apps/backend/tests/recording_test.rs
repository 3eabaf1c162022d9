mod common;

use backend_test_support::scratch::record_file;
use hanabi_backend::config::GameConfig;
use hanabi_backend::errors::ErrorCode;
use hanabi_backend::services::game_flow::build_session;
use hanabi_backend::services::recording::RECORD_COLUMNS;

use crate::common::immediate_research;

#[tokio::test]
async fn records_follow_acceptance_order() {
    let scratch = record_file();
    let session = build_session()
        .with_game(GameConfig::default().with_seed(21))
        .with_research(immediate_research(&scratch, ["human", "human"]))
        .build()
        .unwrap();

    let mut played = Vec::new();
    for _ in 0..3 {
        let mv = session.legal_moves()[0];
        let outcome = session.submit_move(mv).await.unwrap();
        assert!(outcome.is_accepted());
        played.push(mv);
    }

    let records = session.records();
    assert_eq!(records.len(), 4);
    assert!(records[0].is_sentinel());
    assert_eq!(records[0].player_type, "init");
    let players: Vec<i32> = records.iter().map(|r| r.player).collect();
    assert_eq!(players, vec![-1, 0, 1, 0]);
    for (record, mv) in records[1..].iter().zip(&played) {
        assert_eq!(record.player_type, "HumanPlayer");
        assert_eq!(record.mv.map(|m| m.sanitized()), Some(*mv));
        assert!(record.reward.is_some());
    }
    for pair in records.windows(2) {
        assert!(pair[0].timestamp < pair[1].timestamp, "timestamps strictly increase");
    }

    // Each record holds the state right after its move.
    assert_eq!(records[3].observation_after, session.full_observation());
}

#[tokio::test]
async fn shutdown_writes_csv_once() {
    let scratch = record_file();
    let session = build_session()
        .with_game(GameConfig::default().with_seed(4))
        .with_research(immediate_research(&scratch, ["human", "human"]))
        .build()
        .unwrap();
    let mv = session.legal_moves()[0];
    session.submit_move(mv).await.unwrap();

    assert!(session.shutdown().unwrap());
    assert!(!session.shutdown().unwrap(), "second flush is a no-op");

    let mut reader = csv::Reader::from_path(scratch.path()).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, RECORD_COLUMNS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);

    let sentinel = &rows[0];
    assert_eq!(&sentinel[0], "-1");
    assert_eq!(&sentinel[1], "init");
    assert_eq!(&sentinel[2], "");
    assert_eq!(&sentinel[4], "");
    assert_eq!(&sentinel[5], "0");

    let first = &rows[1];
    assert_eq!(&first[0], "0");
    assert_eq!(&first[1], "HumanPlayer");
    let mv_json: serde_json::Value = serde_json::from_str(&first[2]).unwrap();
    assert!(mv_json["action_type"].is_string());
    let observation: serde_json::Value = serde_json::from_str(&first[3]).unwrap();
    assert_eq!(observation["player_observations"].as_array().unwrap().len(), 2);
    assert!(observation["player_observations"][0].get("vectorized").is_none());
    let delta: f64 = first[5].parse().unwrap();
    assert!(delta > 0.0);
    let vectors: Vec<Vec<u8>> = serde_json::from_str(&first[6]).unwrap();
    assert_eq!(vectors.len(), 2);
    assert!(!vectors[0].is_empty());
}

#[test]
fn existing_record_file_is_refused() {
    let scratch = record_file();
    scratch.occupy().unwrap();

    let err = build_session()
        .with_research(immediate_research(&scratch, ["human", "random"]))
        .build()
        .err()
        .unwrap();
    assert_eq!(err.code(), ErrorCode::DuplicateOutput);
    assert_eq!(std::fs::read(scratch.path()).unwrap(), Vec::<u8>::new());
}

#[test]
fn record_file_taken_after_start_is_not_overwritten() {
    let scratch = record_file();
    let session = build_session()
        .with_research(immediate_research(&scratch, ["human", "human"]))
        .build()
        .unwrap();

    std::fs::write(scratch.path(), b"someone else's data").unwrap();
    let err = session.shutdown().unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateOutput);
    assert_eq!(
        std::fs::read(scratch.path()).unwrap(),
        b"someone else's data".to_vec()
    );
}

#[tokio::test]
async fn failed_flush_can_be_retried() {
    let scratch = record_file();
    let session = build_session()
        .with_game(GameConfig::default().with_seed(6))
        .with_research(immediate_research(&scratch, ["human", "human"]))
        .build()
        .unwrap();
    let mv = session.legal_moves()[0];
    assert!(session.submit_move(mv).await.unwrap().is_accepted());

    std::fs::write(scratch.path(), b"in the way").unwrap();
    let err = session.shutdown().unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateOutput);

    std::fs::remove_file(scratch.path()).unwrap();
    assert!(session.shutdown().unwrap(), "retry writes the records");
    assert!(!session.shutdown().unwrap());

    let mut reader = csv::Reader::from_path(scratch.path()).unwrap();
    assert_eq!(reader.records().count(), 2);
}

#[tokio::test]
async fn failed_end_of_game_flush_is_retried_on_shutdown() {
    let scratch = record_file();
    let session = build_session()
        .with_game(GameConfig::default().with_seed(12))
        .with_research(immediate_research(&scratch, ["random", "random"]))
        .build()
        .unwrap();

    scratch.occupy().unwrap();
    let err = session.start().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::DuplicateOutput);
    assert!(session.is_terminal());

    std::fs::remove_file(scratch.path()).unwrap();
    assert!(session.shutdown().unwrap());
    let mut reader = csv::Reader::from_path(scratch.path()).unwrap();
    assert_eq!(reader.records().count(), session.record_count());
}
