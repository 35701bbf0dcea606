//! Minimax with alpha-beta pruning
//!
//! Scores are always from the maximizing player's point of view. Depth is
//! bounded by the difficulty tier, so plain recursion is enough.

use crate::board::Board;
use crate::constants::*;
use crate::error::{EngineError, EngineResult};
use crate::evaluation::evaluate;
use crate::move_gen::legal_moves;
use crate::types::Player;
use std::sync::atomic::{AtomicBool, Ordering};

/// Per-search bookkeeping shared by every node
pub(crate) struct SearchContext<'a> {
    pub nodes: u64,
    stop: Option<&'a AtomicBool>,
}

impl<'a> SearchContext<'a> {
    pub fn new(stop: Option<&'a AtomicBool>) -> Self {
        Self { nodes: 0, stop }
    }

    pub fn stopped(&self) -> bool {
        self.stop.is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Score `board` by searching `depth` more plies
///
/// A side with no legal move loses outright: `-MATE_SCORE` when it is the
/// maximizer, `MATE_SCORE` otherwise.
///
/// # Errors
///
/// Returns [`EngineError::SearchAborted`] once the stop flag is raised.
pub(crate) fn minimax(
    ctx: &mut SearchContext<'_>,
    board: &Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizer: Player,
    maximizing: bool,
) -> EngineResult<i32> {
    ctx.nodes += 1;
    if ctx.stopped() {
        return Err(EngineError::SearchAborted);
    }

    if depth == 0 {
        return Ok(evaluate(board, maximizer));
    }

    let to_move = if maximizing {
        maximizer
    } else {
        maximizer.opponent()
    };
    let moves = legal_moves(board, to_move);
    if moves.is_empty() {
        return Ok(if maximizing { -MATE_SCORE } else { MATE_SCORE });
    }

    let mut best = if maximizing { -AB_INF } else { AB_INF };
    for mv in moves {
        let Some(next) = board.after_move(mv) else {
            continue;
        };
        let value = minimax(ctx, &next, depth - 1, alpha, beta, maximizer, !maximizing)?;

        if maximizing {
            best = best.max(value);
            alpha = alpha.max(best);
        } else {
            best = best.min(value);
            beta = beta.min(best);
        }

        if beta <= alpha {
            break;
        }
    }

    Ok(best)
}
