use super::eval_terms::{PieceSquareTables, STANDARD_TABLES};
use super::eval_terms::tables::{
    BLOCKED_PAWN, DOUBLED_PAWN, ISOLATED_PAWN, MATERIAL, MOBILITY_WEIGHT,
};
use super::{Board, Color, Piece};

/// Tunable weights of the static evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalWeights {
    /// Indexed by `Piece::index()`
    pub material: [i32; 6],
    pub doubled_pawn: i32,
    pub blocked_pawn: i32,
    pub isolated_pawn: i32,
    pub mobility: i32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        EvalWeights {
            material: MATERIAL,
            doubled_pawn: DOUBLED_PAWN,
            blocked_pawn: BLOCKED_PAWN,
            isolated_pawn: ISOLATED_PAWN,
            mobility: MOBILITY_WEIGHT,
        }
    }
}

/// Static evaluator: weights plus a borrowed set of piece-square tables.
#[derive(Clone, Debug)]
pub struct Evaluator<'t> {
    tables: &'t PieceSquareTables,
    weights: EvalWeights,
}

impl Default for Evaluator<'static> {
    fn default() -> Self {
        Evaluator::new(&STANDARD_TABLES, EvalWeights::default())
    }
}

impl<'t> Evaluator<'t> {
    #[must_use]
    pub fn new(tables: &'t PieceSquareTables, weights: EvalWeights) -> Self {
        Evaluator { tables, weights }
    }

    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    #[must_use]
    pub fn tables(&self) -> &'t PieceSquareTables {
        self.tables
    }

    /// Score of `board` from White's point of view.
    #[must_use]
    pub fn evaluate(&self, board: &Board) -> i32 {
        self.side_score(board, Color::White) - self.side_score(board, Color::Black)
    }

    /// Every term for one side, each counted as a bonus for that side.
    fn side_score(&self, board: &Board, color: Color) -> i32 {
        let weights = &self.weights;
        let mut score = 0;

        for piece in Piece::ALL {
            let bb = board.pieces(color, piece);
            score += weights.material[piece.index()] * bb.popcount() as i32;
            for sq in bb.squares() {
                score += self.tables.value(color, piece, sq);
            }
        }

        let flaws = board.pawn_flaws(color);
        score += weights.doubled_pawn * flaws.doubled as i32;
        score += weights.blocked_pawn * flaws.blocked as i32;
        score += weights.isolated_pawn * flaws.isolated as i32;

        if weights.mobility != 0 {
            score += weights.mobility * board.mobility(color) as i32;
        }

        score
    }
}

impl Board {
    /// Static score from White's point of view with the standard weights
    /// and tables. Positive favors White.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        Evaluator::default().evaluate(self)
    }

    #[must_use]
    pub fn evaluate_with(&self, evaluator: &Evaluator<'_>) -> i32 {
        evaluator.evaluate(self)
    }
}
