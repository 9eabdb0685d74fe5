//! Turn driver between the keyboard and the heuristic opponent.
//!
//! The driver task owns the [`GameState`]. Every change goes through
//! [`transition`] on that one task, so human and opponent moves never
//! overlap. Each new state is published on a `watch` channel for the UI.
//!
//! The opponent's "thinking" pause is a scheduled callback: a spawned task
//! sleeps, then posts back into the driver's inbox tagged with the epoch it
//! was scheduled in. A reset bumps the epoch, so a pending callback from the
//! previous game is dropped when it arrives.

use derive_more::{Display, Error};
use reflex_tictactoe::{
    select_move_explained, transition, Action, Decision, GameState, Mark, Move, MoveError,
    Position, RandomSource,
};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Requests from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The human places their mark.
    HumanMove(Position),
    /// Start a new game.
    Reset,
    /// Stop the driver.
    Quit,
}

#[derive(Debug)]
enum Inbox {
    Ui(Command),
    Think { epoch: u64 },
}

/// What the UI renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current game.
    pub state: GameState,
    /// True while an opponent move is scheduled.
    pub thinking: bool,
    /// The opponent's most recent choice in this game.
    pub last_decision: Option<Decision>,
    /// Why the most recent human command was refused, if it was.
    pub last_error: Option<MoveError>,
}

impl Snapshot {
    fn new(state: GameState) -> Self {
        Self {
            state,
            thinking: false,
            last_decision: None,
            last_error: None,
        }
    }
}

/// The driver task has stopped and can no longer take commands.
#[derive(Debug, Clone, Copy, Display, Error)]
#[display("Game driver has stopped")]
pub struct DriverStopped;

/// UI side of a driver.
#[derive(Debug, Clone)]
pub struct DriverHandle {
    inbox: mpsc::UnboundedSender<Inbox>,
    snapshots: watch::Receiver<Snapshot>,
}

impl DriverHandle {
    /// Sends a command to the driver.
    pub fn send(&self, command: Command) -> Result<(), DriverStopped> {
        self.inbox
            .send(Inbox::Ui(command))
            .map_err(|_| DriverStopped)
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }
}

/// Owns the game and runs the opponent.
pub struct Driver<R> {
    snapshot: Snapshot,
    epoch: u64,
    delay: Duration,
    rng: R,
    inbox_rx: mpsc::UnboundedReceiver<Inbox>,
    scheduler: mpsc::WeakUnboundedSender<Inbox>,
    publisher: watch::Sender<Snapshot>,
}

impl<R: RandomSource + Send + 'static> Driver<R> {
    /// Creates a driver and the handle used to talk to it.
    #[instrument(skip(rng))]
    pub fn new(human: Mark, delay: Duration, rng: R) -> (Self, DriverHandle) {
        let snapshot = Snapshot::new(GameState::new(human));
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();
        let (publisher, snapshots) = watch::channel(snapshot.clone());
        let driver = Self {
            snapshot,
            epoch: 0,
            delay,
            rng,
            inbox_rx,
            scheduler: inbox_tx.downgrade(),
            publisher,
        };
        let handle = DriverHandle {
            inbox: inbox_tx,
            snapshots,
        };
        (driver, handle)
    }

    /// Runs the driver on its own task.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Processes commands until `Quit` or until every handle is dropped.
    #[instrument(skip(self), fields(human = %self.snapshot.state.human()))]
    pub async fn run(mut self) {
        info!("Driver started");
        self.schedule_if_needed();
        self.publish();

        while let Some(message) = self.inbox_rx.recv().await {
            match message {
                Inbox::Ui(Command::HumanMove(pos)) => self.human_move(pos),
                Inbox::Ui(Command::Reset) => self.reset(),
                Inbox::Ui(Command::Quit) => break,
                Inbox::Think { epoch } => self.automated_move(epoch),
            }
            self.publish();
        }

        info!("Driver stopped");
    }

    fn publish(&self) {
        self.publisher.send_replace(self.snapshot.clone());
    }

    #[instrument(skip(self))]
    fn human_move(&mut self, pos: Position) {
        let state = &self.snapshot.state;
        if !state.is_human_turn() {
            debug!(result = %state.result(), to_move = %state.to_move(), "Ignoring move out of turn");
            return;
        }

        let mov = Move::new(state.human(), pos);
        match transition(state, Action::Place(mov)) {
            Ok(next) => {
                info!(%mov, result = %next.result(), "Human moved");
                self.snapshot.state = next;
                self.snapshot.last_error = None;
                self.schedule_if_needed();
            }
            Err(e) => {
                warn!(error = %e, "Human move rejected");
                self.snapshot.last_error = Some(e);
            }
        }
    }

    #[instrument(skip(self))]
    fn reset(&mut self) {
        let next = match transition(&self.snapshot.state, Action::Reset) {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "Reset rejected");
                return;
            }
        };
        self.epoch += 1;
        info!(epoch = self.epoch, "Game reset");
        self.snapshot = Snapshot::new(next);
        self.schedule_if_needed();
    }

    fn schedule_if_needed(&mut self) {
        if !self.snapshot.state.is_automated_turn() {
            return;
        }
        let Some(inbox) = self.scheduler.upgrade() else {
            return;
        };

        let epoch = self.epoch;
        let delay = self.delay;
        self.snapshot.thinking = true;
        debug!(epoch, ?delay, "Scheduling opponent move");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The driver may already be gone.
            let _ = inbox.send(Inbox::Think { epoch });
        });
    }

    #[instrument(skip(self))]
    fn automated_move(&mut self, epoch: u64) {
        if epoch != self.epoch {
            debug!(current = self.epoch, "Dropping stale opponent callback");
            return;
        }
        self.snapshot.thinking = false;

        let state = &self.snapshot.state;
        if !state.is_automated_turn() {
            return;
        }

        let Some(decision) =
            select_move_explained(state.board(), state.automated(), state.human(), &mut self.rng)
        else {
            warn!("Opponent found no empty square");
            return;
        };

        match transition(state, Action::Place(Move::new(state.automated(), decision.position))) {
            Ok(next) => {
                info!(%decision, result = %next.result(), "Opponent moved");
                self.snapshot.state = next;
                self.snapshot.last_decision = Some(decision);
            }
            Err(e) => warn!(error = %e, "Opponent move rejected"),
        }
    }
}
