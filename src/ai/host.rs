//! Search host
//!
//! Owns at most one [`SearchSession`] at a time. A new request supersedes
//! whatever is still running, so a stale result can never be delivered for
//! a position that has since changed.

use super::error::AiResult;
use super::session::{AiMove, SearchEvent, SearchRequest, SearchSession};
use tracing::{info, warn};
use xiangqi_engine::search::hint_move;
use xiangqi_engine::{Board, Move, Player};

#[derive(Debug, Default)]
pub struct SearchHost {
    current: Option<SearchSession>,
    next_id: u64,
}

impl SearchHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a search, cancelling any search still in flight
    ///
    /// Returns the id of the new session.
    pub fn request(&mut self, request: SearchRequest) -> AiResult<u64> {
        if let Some(previous) = self.current.take() {
            if !previous.is_finished() {
                warn!("[AI] Superseding search {} with a new request", previous.id());
            }
            previous.cancel();
        }

        self.next_id += 1;
        let session = SearchSession::spawn(self.next_id, request)?;
        self.current = Some(session);
        Ok(self.next_id)
    }

    /// Drain the events available for the current search
    ///
    /// The session is released once its terminal event has been returned
    /// or the worker has gone away.
    pub fn poll(&mut self) -> AiResult<Vec<SearchEvent>> {
        let Some(session) = self.current.as_mut() else {
            return Ok(Vec::new());
        };

        let mut events = Vec::new();
        let mut done = false;
        let outcome = loop {
            match session.try_next() {
                Ok(Some(event)) => {
                    done = event.is_terminal();
                    events.push(event);
                    if done {
                        break Ok(());
                    }
                }
                Ok(None) => break Ok(()),
                Err(e) => break Err(e),
            }
        };

        if done || outcome.is_err() {
            self.current = None;
        }
        outcome?;

        Ok(events)
    }

    /// Cancel the current search, if any
    pub fn cancel(&mut self) {
        if let Some(session) = self.current.take() {
            info!("[AI] Cancelling search {}", session.id());
            session.cancel();
        }
    }

    pub fn is_searching(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_id(&self) -> Option<u64> {
        self.current.as_ref().map(SearchSession::id)
    }

    /// Suggest a move for a human player, computed on the calling thread
    pub fn hint(&self, board: &Board, player: Player, history: &[Board]) -> AiResult<Option<Move>> {
        let mut rng = rand::rng();
        Ok(hint_move(board, player, history, &mut rng)?)
    }

    /// Block until the current search ends
    ///
    /// Returns `Ok(None)` immediately when nothing is running.
    pub fn wait(&mut self, on_progress: impl FnMut(Move, i32)) -> AiResult<Option<AiMove>> {
        match self.current.take() {
            Some(session) => session.wait(on_progress),
            None => Ok(None),
        }
    }
}
