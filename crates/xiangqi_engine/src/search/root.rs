//! Top-level move selection
//!
//! Scores every legal move of the side to play with a minimax search of
//! the opponent's replies, then adjusts the score with two heuristics:
//! a penalty for walking back into a position from the game history and
//! a bonus for checking while ahead on material before the move.

use super::difficulty::Difficulty;
use super::minimax::{minimax, SearchContext};
use crate::board::Board;
use crate::constants::*;
use crate::error::EngineResult;
use crate::evaluation::evaluate_material;
use crate::move_gen::{is_in_check, legal_moves};
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::{debug, trace};

/// Knobs for one root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParams {
    /// Plies searched after each candidate move
    pub depth: u32,
    pub anti_repetition: bool,
    pub killer_instinct: bool,
}

impl SearchParams {
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            anti_repetition: true,
            killer_instinct: true,
        }
    }

    /// Easiest depth with no heuristic adjustments
    pub fn hint() -> Self {
        Self {
            depth: Difficulty::Easy.depth(),
            anti_repetition: false,
            killer_instinct: false,
        }
    }
}

/// A new best candidate, reported as the search goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchProgress {
    pub mv: Move,
    pub score: i32,
}

/// The move a finished search settled on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub mv: Move,
    /// Adjusted score of `mv`
    pub score: i32,
    /// Whether `mv` puts the opponent in check
    pub gives_check: bool,
    pub nodes: u64,
    pub candidates: usize,
}

#[derive(Debug, Clone)]
pub struct Searcher {
    params: SearchParams,
    stop: Option<Arc<AtomicBool>>,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Self {
        Self { params, stop: None }
    }

    /// Abort with [`crate::EngineError::SearchAborted`] once `flag` is raised
    pub fn with_stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    pub fn params(&self) -> SearchParams {
        self.params
    }

    /// Pick a move for `player`, or `None` when it has no legal move
    ///
    /// Candidates are shuffled before scoring so that equal scores do not
    /// always resolve to the same move. The first candidate reaching the
    /// best score wins; `on_progress` sees every strict improvement.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::SearchAborted`] when the stop flag is
    /// raised mid-search.
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        history: &[Board],
        rng: &mut R,
        mut on_progress: impl FnMut(SearchProgress),
    ) -> EngineResult<Option<SearchOutcome>> {
        let mut candidates = legal_moves(board, player);
        if candidates.is_empty() {
            debug!(%player, "no legal move to search");
            return Ok(None);
        }
        candidates.shuffle(rng);

        let material_lead = evaluate_material(board, player);
        let opponent = player.opponent();
        let previous: HashSet<String> = if self.params.anti_repetition {
            history.iter().map(Board::state_key).collect()
        } else {
            HashSet::new()
        };

        let mut ctx = SearchContext::new(self.stop.as_deref());
        let mut best: Option<(Move, i32, bool)> = None;

        for &mv in &candidates {
            let Some(next) = board.after_move(mv) else {
                continue;
            };
            let mut score = minimax(&mut ctx, &next, self.params.depth, -AB_INF, AB_INF, player, false)?;

            if self.params.anti_repetition && previous.contains(&next.state_key()) {
                score -= REPETITION_PENALTY;
            }

            let gives_check = is_in_check(&next, opponent);
            if self.params.killer_instinct && gives_check && material_lead > KILLER_INSTINCT_THRESHOLD {
                score += KILLER_INSTINCT_BONUS;
            }

            if best.is_none_or(|(_, best_score, _)| score > best_score) {
                trace!(%mv, score, "new best candidate");
                best = Some((mv, score, gives_check));
                on_progress(SearchProgress { mv, score });
            }
        }

        let outcome = best.map(|(mv, score, gives_check)| SearchOutcome {
            mv,
            score,
            gives_check,
            nodes: ctx.nodes,
            candidates: candidates.len(),
        });

        if let Some(outcome) = &outcome {
            debug!(
                %player,
                depth = self.params.depth,
                candidates = outcome.candidates,
                nodes = outcome.nodes,
                score = outcome.score,
                "search complete: {}",
                outcome.mv
            );
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::{is_checkmate, is_legal_move};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_of(pieces: &[(PieceKind, Player, (i8, i8))]) -> Board {
        Board::new(
            pieces
                .iter()
                .enumerate()
                .map(|(id, &(kind, owner, (x, y)))| Piece::new(id as u8, owner, kind, Position::new(x, y)))
                .collect(),
        )
        .unwrap()
    }

    /// Black to move with a one-move mate available
    fn mate_in_one() -> Board {
        board_of(&[
            (PieceKind::General, Player::Red, (4, 9)),
            (PieceKind::General, Player::Black, (3, 0)),
            (PieceKind::Chariot, Player::Black, (1, 0)),
            (PieceKind::Chariot, Player::Black, (0, 8)),
        ])
    }

    /// Material is level and every Black move scores the same
    fn quiet_endgame() -> Board {
        board_of(&[
            (PieceKind::General, Player::Red, (3, 9)),
            (PieceKind::General, Player::Black, (5, 1)),
            (PieceKind::Soldier, Player::Red, (8, 6)),
            (PieceKind::Soldier, Player::Black, (0, 3)),
        ])
    }

    #[test]
    fn test_search_finds_mate_in_one() {
        let board = mate_in_one();
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Easy))
                .choose_move(&board, Player::Black, &[], &mut rng, |_| {})
                .unwrap()
                .expect("Black has moves");

            let next = board.after_move(outcome.mv).unwrap();
            assert!(is_checkmate(&next, Player::Red), "{} is not mate\n{next}", outcome.mv);
            assert!(outcome.gives_check);
            assert!(outcome.score >= MATE_SCORE);
        }
    }

    #[test]
    fn test_search_output_is_always_legal() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(11);
        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let outcome = Searcher::new(SearchParams::for_difficulty(difficulty))
                .choose_move(&board, Player::Black, &[], &mut rng, |_| {})
                .unwrap()
                .unwrap();
            assert!(is_legal_move(&board, outcome.mv, Player::Black));
            assert_eq!(outcome.candidates, 44);
            assert!(outcome.nodes > 44);
        }
    }

    #[test]
    fn test_search_without_moves_returns_none() {
        let board = board_of(&[
            (PieceKind::General, Player::Red, (4, 9)),
            (PieceKind::General, Player::Black, (3, 0)),
            (PieceKind::Chariot, Player::Black, (0, 9)),
            (PieceKind::Chariot, Player::Black, (0, 8)),
        ]);
        let mut rng = StdRng::seed_from_u64(0);
        let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Hard))
            .choose_move(&board, Player::Red, &[], &mut rng, |_| panic!("no progress expected"))
            .unwrap();
        assert_eq!(outcome, None);
    }

    #[test]
    fn test_anti_repetition_avoids_seen_positions() {
        //! With every other reply already in the history, the one fresh move wins
        let board = quiet_endgame();
        let moves = legal_moves(&board, Player::Black);
        assert_eq!(moves.len(), 4, "three general steps and one soldier push");

        for fresh in &moves {
            let history: Vec<Board> = moves
                .iter()
                .filter(|mv| *mv != fresh)
                .map(|mv| board.after_move(*mv).unwrap())
                .collect();

            for seed in 0..4 {
                let mut rng = StdRng::seed_from_u64(seed);
                let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Easy))
                    .choose_move(&board, Player::Black, &history, &mut rng, |_| {})
                    .unwrap()
                    .unwrap();
                assert_eq!(outcome.mv, *fresh);
                assert_eq!(outcome.score, 0);
            }
        }
    }

    #[test]
    fn test_hint_ignores_history() {
        let board = quiet_endgame();
        let moves = legal_moves(&board, Player::Black);
        let history: Vec<Board> = moves.iter().map(|mv| board.after_move(*mv).unwrap()).collect();

        let mut rng = StdRng::seed_from_u64(3);
        let outcome = Searcher::new(SearchParams::hint())
            .choose_move(&board, Player::Black, &history, &mut rng, |_| {})
            .unwrap()
            .unwrap();
        assert_eq!(outcome.score, 0, "No repetition penalty for hints");
    }

    #[test]
    fn test_killer_instinct_rewards_check_when_ahead() {
        //! Black is a chariot up; a checking move earns the bonus
        let board = board_of(&[
            (PieceKind::General, Player::Red, (3, 9)),
            (PieceKind::General, Player::Black, (5, 0)),
            (PieceKind::Chariot, Player::Black, (0, 5)),
        ]);
        let mut rng = StdRng::seed_from_u64(5);
        let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Easy))
            .choose_move(&board, Player::Black, &[], &mut rng, |_| {})
            .unwrap()
            .unwrap();

        assert!(outcome.gives_check, "{} should give check", outcome.mv);
        assert_eq!(outcome.score, CHARIOT_VALUE + KILLER_INSTINCT_BONUS);
    }

    #[test]
    fn test_killer_instinct_ignores_positional_lead() {
        //! Black's crossed soldiers are worth 30 positionally, but material is level
        let board = board_of(&[
            (PieceKind::General, Player::Red, (3, 9)),
            (PieceKind::General, Player::Black, (5, 0)),
            (PieceKind::Chariot, Player::Red, (8, 8)),
            (PieceKind::Chariot, Player::Black, (0, 3)),
            (PieceKind::Soldier, Player::Red, (6, 6)),
            (PieceKind::Soldier, Player::Red, (7, 6)),
            (PieceKind::Soldier, Player::Red, (8, 6)),
            (PieceKind::Soldier, Player::Black, (0, 6)),
            (PieceKind::Soldier, Player::Black, (1, 6)),
            (PieceKind::Soldier, Player::Black, (2, 6)),
        ]);
        assert_eq!(crate::evaluation::evaluate(&board, Player::Black), 30);
        assert_eq!(evaluate_material(&board, Player::Black), 0);

        let checking = Move::new(Position::new(0, 3), Position::new(3, 3));
        assert!(is_in_check(&board.after_move(checking).unwrap(), Player::Red));

        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Easy))
                .choose_move(&board, Player::Black, &[], &mut rng, |_| {})
                .unwrap()
                .unwrap();
            assert_eq!(outcome.score, 30, "no check bonus without a material lead");
        }
    }

    #[test]
    fn test_progress_is_strictly_improving() {
        let board = Board::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let mut reports = Vec::new();
        let outcome = Searcher::new(SearchParams::for_difficulty(Difficulty::Easy))
            .choose_move(&board, Player::Red, &[], &mut rng, |p| reports.push(p))
            .unwrap()
            .unwrap();

        assert!(!reports.is_empty());
        assert!(reports.windows(2).all(|w| w[1].score > w[0].score));
        let last = reports.last().unwrap();
        assert_eq!((last.mv, last.score), (outcome.mv, outcome.score));
    }

    #[test]
    fn test_stop_flag_aborts_search() {
        let flag = Arc::new(AtomicBool::new(true));
        let mut rng = StdRng::seed_from_u64(1);
        let result = Searcher::new(SearchParams::for_difficulty(Difficulty::Medium))
            .with_stop_flag(flag)
            .choose_move(&Board::standard(), Player::Red, &[], &mut rng, |_| {});
        assert_eq!(result, Err(crate::error::EngineError::SearchAborted));
    }
}
