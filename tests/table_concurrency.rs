//! Concurrent requests against one table
//!
//! Plays arrive from many tasks at once; the single lock around the
//! coordinator must still close the round exactly once.

use cah_engine::{core::PlayerRecord, game::Phase, Table, TableConfig};
use std::path::PathBuf;

fn decks_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_decks")
}

async fn seated_table(players: usize) -> (Table, Vec<PlayerRecord>) {
    let table = Table::open(&decks_dir(), TableConfig::with_seed(17))
        .await
        .unwrap();
    let mut records = Vec::new();
    for i in 0..players {
        records.push(table.join_player(&format!("P{i}")).await.unwrap());
    }
    (table, records)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_plays_close_round_once() {
    let (table, records) = seated_table(5).await;
    table.start_game(&records[0].secret, 5).await.unwrap();

    let mut tasks = Vec::new();
    for record in records.iter().skip(1).cloned() {
        let table = table.clone();
        tasks.push(tokio::spawn(async move {
            let view = table.game_view(&record.secret).await?;
            for card in view.hand.iter().take(view.plays_remaining()) {
                table.play_card(&record.secret, card.id).await?;
            }
            cah_engine::Result::Ok(())
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    assert_eq!(table.phase().await, Phase::ShowingAnswers);
    let view = table.game_view(&records[0].secret).await.unwrap();
    assert_eq!(view.submissions.len(), 4);
    let stored = table
        .with_coordinator(|coordinator| coordinator.state().submissions().len())
        .await;
    assert_eq!(stored, 4);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_get_unique_seats() {
    let table = Table::open(&decks_dir(), TableConfig::with_seed(3))
        .await
        .unwrap();

    let mut tasks = Vec::new();
    for i in 0..12 {
        let table = table.clone();
        tasks.push(tokio::spawn(async move {
            table.join_player(&format!("Player {i}")).await
        }));
    }
    let mut records = Vec::new();
    for task in tasks {
        records.push(task.await.unwrap().unwrap());
    }

    // Exactly one czar, whoever got the lock first
    assert_eq!(records.iter().filter(|r| r.czar).count(), 1);
    let players = table.list_players().await;
    assert_eq!(players.len(), 12);
    assert_eq!(players.iter().filter(|p| p.czar).count(), 1);
    assert!(players[0].czar);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_duplicate_play_races_are_rejected() {
    let (table, records) = seated_table(3).await;
    table.start_game(&records[0].secret, 5).await.unwrap();

    // Two tasks try to play the same card for the same player
    let view = table.game_view(&records[1].secret).await.unwrap();
    let card = view.hand[0].id;
    let (first, second) = tokio::join!(
        table.play_card(&records[1].secret, card),
        table.play_card(&records[1].secret, card)
    );
    assert!(first.is_ok() != second.is_ok());

    let view = table.game_view(&records[1].secret).await.unwrap();
    assert_eq!(view.round_plays.len(), 1);
    assert_eq!(view.hand.len() + view.round_plays.len(), 8);
}
