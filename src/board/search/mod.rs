//! Fixed-depth negamax search.
//!
//! Every legal move of the side to move is tried to the full depth. There
//! is no pruning, move ordering or transposition table, so the result is
//! exactly the minimax value of the tree under the static evaluator.

use super::{Board, Color, Evaluator, Move};

/// Base score of a checkmate. Larger than any static evaluation.
pub const MATE_SCORE: i32 = 1_000_000;

const INFINITY: i32 = 2 * MATE_SCORE;

/// Outcome of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Score from the point of view of `side`
    pub score: i32,
    /// The first move reaching `score`, or `None` at depth 0 or when the
    /// side to move has no legal move
    pub best_move: Option<Move>,
    pub depth: u32,
    /// Nodes visited, root included
    pub nodes: u64,
    /// Side to move at the root
    pub side: Color,
}

impl SearchResult {
    /// `score` seen from White's side.
    #[must_use]
    pub const fn white_score(&self) -> i32 {
        self.side.sign() * self.score
    }

    /// Returns true if the score is a forced mate for either side.
    #[must_use]
    pub const fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_SCORE
    }
}

impl Board {
    /// Search `depth` plies with the standard evaluator.
    pub fn negamax(&mut self, depth: u32) -> SearchResult {
        self.negamax_with(depth, &Evaluator::default())
    }

    /// Search `depth` plies, scoring leaves with `evaluator`.
    ///
    /// The board is mutated during the search and restored before this
    /// returns.
    pub fn negamax_with(&mut self, depth: u32, evaluator: &Evaluator<'_>) -> SearchResult {
        let mut nodes = 0;
        let (score, best_move) = self.negamax_node(depth, evaluator, &mut nodes);
        log_debug!(
            "negamax depth {} score {} best {} nodes {}",
            depth,
            score,
            best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
            nodes
        );
        SearchResult {
            score,
            best_move,
            depth,
            nodes,
            side: self.side_to_move,
        }
    }

    fn negamax_node(
        &mut self,
        depth: u32,
        evaluator: &Evaluator<'_>,
        nodes: &mut u64,
    ) -> (i32, Option<Move>) {
        *nodes += 1;
        if depth == 0 {
            return (self.side_to_move.sign() * evaluator.evaluate(self), None);
        }

        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in self.all_legal_moves() {
            if !self.play(mv) {
                continue;
            }
            let (child, _) = self.negamax_node(depth - 1, evaluator, nodes);
            self.unmake_move();

            let score = -child;
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        if best_move.is_none() {
            // Mates found with more depth left are closer to the root.
            let score = if self.in_check() {
                -(MATE_SCORE + depth as i32)
            } else {
                0
            };
            return (score, None);
        }

        (best_score, best_move)
    }
}
