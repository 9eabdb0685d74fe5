//! Driver behavior: scheduling, stale callbacks, publication.

use reflex_games::{Command, Driver, Snapshot};
use reflex_tictactoe::{FixedPick, GameResult, Mark, MoveError, Position, Rationale, Square};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{sleep, timeout};

const DELAY: Duration = Duration::from_millis(1000);

async fn wait_until(
    rx: &mut watch::Receiver<Snapshot>,
    pred: impl FnMut(&Snapshot) -> bool,
) -> Snapshot {
    timeout(Duration::from_secs(30), rx.wait_for(pred))
        .await
        .expect("timed out waiting for snapshot")
        .expect("driver stopped")
        .clone()
}

#[tokio::test(start_paused = true)]
async fn test_opponent_moves_after_delay() {
    let (driver, handle) = Driver::new(Mark::X, DELAY, FixedPick(0));
    driver.spawn();
    let mut rx = handle.subscribe();

    handle.send(Command::HumanMove(Position::TopLeft)).unwrap();
    let thinking = wait_until(&mut rx, |s| s.state.history().len() == 1).await;
    assert!(thinking.thinking);
    assert!(thinking.state.is_automated_turn());

    let done = wait_until(&mut rx, |s| s.state.history().len() == 2).await;
    assert!(!done.thinking);
    assert_eq!(done.state.board().get(Position::Center), Square::Occupied(Mark::O));
    assert_eq!(done.last_decision.map(|d| d.rationale), Some(Rationale::Center));
    assert!(done.state.is_human_turn());
}

#[tokio::test(start_paused = true)]
async fn test_human_moves_ignored_while_opponent_thinks() {
    let (driver, handle) = Driver::new(Mark::X, DELAY, FixedPick(0));
    driver.spawn();
    let mut rx = handle.subscribe();

    handle.send(Command::HumanMove(Position::TopLeft)).unwrap();
    handle.send(Command::HumanMove(Position::BottomRight)).unwrap();

    let done = wait_until(&mut rx, |s| s.state.history().len() == 2).await;
    assert!(done.state.board().is_empty(Position::BottomRight));
}

#[tokio::test(start_paused = true)]
async fn test_occupied_square_reported() {
    let (driver, handle) = Driver::new(Mark::X, DELAY, FixedPick(0));
    driver.spawn();
    let mut rx = handle.subscribe();

    handle.send(Command::HumanMove(Position::TopLeft)).unwrap();
    wait_until(&mut rx, |s| s.state.history().len() == 2).await;

    handle.send(Command::HumanMove(Position::Center)).unwrap();
    let refused = wait_until(&mut rx, |s| s.last_error.is_some()).await;
    assert_eq!(refused.last_error, Some(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(refused.state.history().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_reset_drops_pending_opponent_move() {
    let (driver, handle) = Driver::new(Mark::X, DELAY, FixedPick(0));
    driver.spawn();

    handle.send(Command::HumanMove(Position::TopLeft)).unwrap();
    handle.send(Command::Reset).unwrap();

    // Well past the delay: the stale callback has fired and been dropped.
    sleep(DELAY * 3).await;
    let snapshot = handle.snapshot();
    assert!(snapshot.state.history().is_empty());
    assert!(!snapshot.thinking);
    assert_eq!(snapshot.state.result(), GameResult::InProgress);
}

#[tokio::test(start_paused = true)]
async fn test_opponent_opens_when_human_plays_o() {
    let (driver, handle) = Driver::new(Mark::O, DELAY, FixedPick(0));
    driver.spawn();
    let mut rx = handle.subscribe();

    let opened = wait_until(&mut rx, |s| s.state.history().len() == 1).await;
    assert_eq!(opened.state.board().get(Position::Center), Square::Occupied(Mark::X));

    handle.send(Command::Reset).unwrap();
    let reopened = wait_until(&mut rx, |s| s.state.history().is_empty()).await;
    assert!(reopened.thinking);
    wait_until(&mut rx, |s| s.state.history().len() == 1).await;
}

#[tokio::test(start_paused = true)]
async fn test_full_game_ends_and_stays_over() {
    let (driver, handle) = Driver::new(Mark::X, DELAY, FixedPick(0));
    driver.spawn();
    let mut rx = handle.subscribe();

    // The human always takes the first free square: X 0, 1, 3 against
    // O center, block at 2, then the win on the anti-diagonal.
    let mut moves = 0;
    loop {
        let snap = wait_until(&mut rx, |s| s.state.is_human_turn() || s.state.is_over()).await;
        if snap.state.is_over() {
            break;
        }
        let pos = Position::valid_moves(snap.state.board())[0];
        handle.send(Command::HumanMove(pos)).unwrap();
        moves += 1;
        wait_until(&mut rx, |s| s.state.board().get(pos) != Square::Empty).await;
        assert!(moves <= 5);
    }

    let over = handle.snapshot();
    assert_eq!(over.state.result(), GameResult::Won(Mark::O));
    let len = over.state.history().len();

    handle.send(Command::HumanMove(Position::TopLeft)).unwrap();
    sleep(DELAY * 2).await;
    assert_eq!(handle.snapshot().state.history().len(), len);
}

#[tokio::test]
async fn test_quit_stops_driver() {
    let (driver, handle) = Driver::new(Mark::X, Duration::ZERO, FixedPick(0));
    let task = driver.spawn();
    handle.send(Command::Quit).unwrap();
    task.await.unwrap();
    assert!(handle.send(Command::Reset).is_err());
}
