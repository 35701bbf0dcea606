//! One background search and the handle that owns it
//!
//! A [`SearchSession`] runs the engine search on a dedicated thread and
//! streams [`SearchEvent`]s back over a channel. Progress events arrive as
//! the best candidate improves; exactly one terminal event (`Finished` or
//! `Failed`) follows unless the session is cancelled first, in which case
//! the worker goes quiet.

use super::error::{AiError, AiResult};
use super::reaction::{pick_reaction, Reaction};
use crate::core::DEFAULT_REACTION_CHANCE;
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{error, info, warn};
use xiangqi_engine::{Board, Difficulty, EngineError, EngineResult, Move, Player, SearchParams, Searcher};

/// Everything a worker needs, copied out of the caller's game state
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub board: Board,
    /// Side the AI moves for
    pub player: Player,
    /// Earlier positions of the game, oldest first
    pub history: Vec<Board>,
    pub difficulty: Difficulty,
    pub reaction_chance: f64,
    /// Fixed RNG seed for reproducible move choice
    pub seed: Option<u64>,
}

impl SearchRequest {
    pub fn new(board: Board, player: Player, history: Vec<Board>, difficulty: Difficulty) -> Self {
        Self {
            board,
            player,
            history,
            difficulty,
            reaction_chance: DEFAULT_REACTION_CHANCE,
            seed: None,
        }
    }

    pub fn with_reaction_chance(mut self, chance: f64) -> Self {
        self.reaction_chance = chance;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// A finished AI decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiMove {
    pub mv: Move,
    pub score: i32,
    pub reaction: Option<Reaction>,
    pub nodes: u64,
}

/// Messages from a search worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A new best candidate
    Progress { mv: Move, score: i32 },
    /// The search completed; `None` when the side has no legal move
    Finished(Option<AiMove>),
    /// The worker failed
    Failed(AiFailure),
}

/// Why a worker stopped without a result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiFailure {
    /// The search panicked; carries the panic message
    Panic(String),
    /// The engine returned an error
    Engine(EngineError),
}

impl From<AiFailure> for AiError {
    fn from(failure: AiFailure) -> Self {
        match failure {
            AiFailure::Panic(message) => AiError::WorkerPanicked(message),
            AiFailure::Engine(e) => AiError::Engine(e),
        }
    }
}

impl SearchEvent {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchEvent::Progress { .. })
    }
}

/// Handle to one in-flight search
///
/// Dropping the handle cancels the search.
pub struct SearchSession {
    id: u64,
    stop: Arc<AtomicBool>,
    events: Receiver<SearchEvent>,
    handle: Option<JoinHandle<()>>,
    finished: bool,
}

impl SearchSession {
    /// Start searching `request` on a new thread
    pub fn spawn(id: u64, request: SearchRequest) -> AiResult<Self> {
        info!(
            "[AI] Spawning search {} for {} at {} difficulty ({} pieces, {} history states)",
            id,
            request.player,
            request.difficulty,
            request.board.len(),
            request.history.len()
        );

        Self::spawn_worker(id, move |stop, progress| run_search(request, stop, progress))
    }

    /// Run `job` on a worker thread, wiring its result into events
    pub(crate) fn spawn_worker<F>(id: u64, job: F) -> AiResult<Self>
    where
        F: FnOnce(Arc<AtomicBool>, &dyn Fn(Move, i32)) -> EngineResult<Option<AiMove>> + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = crossbeam_channel::unbounded();

        let worker_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name(format!("xiangqi-ai-{id}"))
            .spawn(move || worker_main(id, job, worker_stop, tx))?;

        Ok(Self {
            id,
            stop,
            events: rx,
            handle: Some(handle),
            finished: false,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Whether a terminal event has been received
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Next event if one is ready
    ///
    /// Returns `Ok(None)` while the worker is still thinking and after the
    /// terminal event has been taken.
    pub fn try_next(&mut self) -> AiResult<Option<SearchEvent>> {
        if self.finished {
            return Ok(None);
        }
        match self.events.try_recv() {
            Ok(event) => Ok(Some(self.observe(event))),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(self.closed()),
        }
    }

    /// Block until the next event
    pub fn next_blocking(&mut self) -> AiResult<SearchEvent> {
        if self.finished {
            return Err(AiError::Disconnected);
        }
        match self.events.recv() {
            Ok(event) => Ok(self.observe(event)),
            Err(_) => Err(self.closed()),
        }
    }

    /// Block until the search ends, forwarding progress to `on_progress`
    pub fn wait(mut self, mut on_progress: impl FnMut(Move, i32)) -> AiResult<Option<AiMove>> {
        loop {
            match self.next_blocking()? {
                SearchEvent::Progress { mv, score } => on_progress(mv, score),
                SearchEvent::Finished(result) => {
                    self.join();
                    return Ok(result);
                }
                SearchEvent::Failed(failure) => {
                    self.join();
                    return Err(failure.into());
                }
            }
        }
    }

    /// Ask the worker to stop; it sends nothing more afterwards
    pub fn cancel(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    fn observe(&mut self, event: SearchEvent) -> SearchEvent {
        if event.is_terminal() {
            self.finished = true;
        }
        event
    }

    fn closed(&mut self) -> AiError {
        self.finished = true;
        if self.is_cancelled() {
            AiError::Cancelled
        } else {
            AiError::Disconnected
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("[AI] Search {} worker exited abnormally", self.id);
            }
        }
    }
}

impl Drop for SearchSession {
    fn drop(&mut self) {
        if !self.finished {
            self.cancel();
        }
    }
}

impl std::fmt::Debug for SearchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSession")
            .field("id", &self.id)
            .field("finished", &self.finished)
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

fn worker_main<F>(id: u64, job: F, stop: Arc<AtomicBool>, tx: Sender<SearchEvent>)
where
    F: FnOnce(Arc<AtomicBool>, &dyn Fn(Move, i32)) -> EngineResult<Option<AiMove>>,
{
    let progress = |mv: Move, score: i32| {
        if !stop.load(Ordering::Relaxed) {
            let _ = tx.send(SearchEvent::Progress { mv, score });
        }
    };

    let result = panic::catch_unwind(AssertUnwindSafe(|| job(Arc::clone(&stop), &progress)));

    if stop.load(Ordering::Relaxed) {
        info!("[AI] Search {} cancelled", id);
        return;
    }

    let event = match result {
        Ok(Ok(result)) => {
            match &result {
                Some(ai_move) => info!(
                    "[AI] Search {} complete: {} (score {}, {} nodes)",
                    id, ai_move.mv, ai_move.score, ai_move.nodes
                ),
                None => info!("[AI] Search {} complete: no legal move", id),
            }
            SearchEvent::Finished(result)
        }
        Ok(Err(EngineError::SearchAborted)) => {
            info!("[AI] Search {} aborted", id);
            return;
        }
        Ok(Err(e)) => {
            error!("[AI] Search {} failed: {}", id, e);
            SearchEvent::Failed(AiFailure::Engine(e))
        }
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            error!("[AI] Search {} worker panicked: {}", id, message);
            SearchEvent::Failed(AiFailure::Panic(message))
        }
    };

    let _ = tx.send(event);
}

fn run_search(request: SearchRequest, stop: Arc<AtomicBool>, progress: &dyn Fn(Move, i32)) -> EngineResult<Option<AiMove>> {
    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let outcome = Searcher::new(SearchParams::for_difficulty(request.difficulty))
        .with_stop_flag(stop)
        .choose_move(&request.board, request.player, &request.history, &mut rng, |p| {
            progress(p.mv, p.score)
        })?;

    Ok(outcome.map(|outcome| AiMove {
        mv: outcome.mv,
        score: outcome.score,
        reaction: pick_reaction(outcome.gives_check, request.reaction_chance, &mut rng),
        nodes: outcome.nodes,
    }))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use xiangqi_engine::move_gen::is_legal_move;
    use xiangqi_engine::Position;

    fn sample_move() -> Move {
        Move::new(Position::new(0, 9), Position::new(0, 8))
    }

    #[test]
    fn test_session_finishes_with_legal_move() {
        let board = Board::standard();
        let request = SearchRequest::new(board.clone(), Player::Red, Vec::new(), Difficulty::Easy).with_seed(4);
        let session = SearchSession::spawn(1, request).unwrap();
        assert_eq!(session.id(), 1);

        let mut progress = Vec::new();
        let result = session.wait(|mv, score| progress.push((mv, score))).unwrap().unwrap();

        assert!(is_legal_move(&board, result.mv, Player::Red));
        assert_eq!(progress.last().map(|&(mv, _)| mv), Some(result.mv));
    }

    #[test]
    fn test_session_reports_no_move() {
        let session = SearchSession::spawn_worker(2, |_, _| Ok(None)).unwrap();
        assert_eq!(session.wait(|_, _| {}).unwrap(), None);
    }

    #[test]
    fn test_worker_panic_becomes_error() {
        let session = SearchSession::spawn_worker(3, |_, _| panic!("evaluation blew up")).unwrap();
        match session.wait(|_, _| {}) {
            Err(AiError::WorkerPanicked(message)) => assert!(message.contains("evaluation blew up")),
            other => panic!("expected a worker panic, got {other:?}"),
        }
    }

    #[test]
    fn test_engine_error_keeps_its_type() {
        let illegal = EngineError::IllegalMove {
            from: Position::new(0, 9),
            to: Position::new(1, 8),
        };
        let expected = illegal.clone();
        let mut session = SearchSession::spawn_worker(8, move |_, _| Err(illegal)).unwrap();

        assert_eq!(
            session.next_blocking().unwrap(),
            SearchEvent::Failed(AiFailure::Engine(expected.clone()))
        );

        let session = SearchSession::spawn_worker(9, move |_, _| Err(expected)).unwrap();
        match session.wait(|_, _| {}) {
            Err(AiError::Engine(EngineError::IllegalMove { from, to })) => {
                assert_eq!((from, to), (Position::new(0, 9), Position::new(1, 8)));
            }
            other => panic!("expected an engine error, got {other:?}"),
        }
    }

    #[test]
    fn test_events_arrive_in_order() {
        let mut session = SearchSession::spawn_worker(4, |_, progress| {
            progress(sample_move(), 1);
            progress(sample_move(), 2);
            Ok(None)
        })
        .unwrap();

        assert_eq!(
            session.next_blocking().unwrap(),
            SearchEvent::Progress { mv: sample_move(), score: 1 }
        );
        assert_eq!(
            session.next_blocking().unwrap(),
            SearchEvent::Progress { mv: sample_move(), score: 2 }
        );
        assert_eq!(session.next_blocking().unwrap(), SearchEvent::Finished(None));
        assert!(session.is_finished());
        assert!(session.try_next().unwrap().is_none());
    }

    #[test]
    fn test_cancelled_session_goes_quiet() {
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(1);
        let mut session = SearchSession::spawn_worker(5, move |_, progress| {
            let _ = release_rx.recv();
            progress(sample_move(), 7);
            Ok(None)
        })
        .unwrap();

        session.cancel();
        release_tx.send(()).unwrap();

        match session.next_blocking() {
            Err(AiError::Cancelled) => {}
            other => panic!("expected cancellation, got {other:?}"),
        }
    }

    #[test]
    fn test_drop_cancels_search() {
        let stop_seen = Arc::new(AtomicBool::new(false));
        let observed = Arc::clone(&stop_seen);
        let session = SearchSession::spawn_worker(6, move |stop, _| {
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(1));
            }
            observed.store(true, Ordering::Relaxed);
            Err(EngineError::SearchAborted)
        })
        .unwrap();

        drop(session);
        for _ in 0..2_000 {
            if stop_seen.load(Ordering::Relaxed) {
                return;
            }
            thread::sleep(Duration::from_millis(1));
        }
        panic!("worker never saw the stop flag");
    }

    #[test]
    fn test_try_next_polls_without_blocking() {
        let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(1);
        let mut session = SearchSession::spawn_worker(7, move |_, _| {
            let _ = release_rx.recv();
            Ok(None)
        })
        .unwrap();

        assert!(session.try_next().unwrap().is_none());
        release_tx.send(()).unwrap();
        assert_eq!(session.next_blocking().unwrap(), SearchEvent::Finished(None));
    }
}
