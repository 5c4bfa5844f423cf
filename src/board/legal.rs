//! Legality filter, built on simulate-and-revert.
//!
//! A pseudo-legal move is legal if, after playing it, the mover's king is
//! not attacked. Every check goes through `make_move`/`unmake_move`, so the
//! board is back in its original state whenever one of these returns.

use super::{Bitboard, Board, BoardError, GameStatus, Move};

impl Board {
    /// Returns true if moving `from` -> `to` is pseudo-legal for the side to
    /// move and does not leave its king attacked. Returns false without
    /// changing the board if `make_move` would refuse the move.
    pub fn is_move_legal(&mut self, from: Bitboard, to: Bitboard) -> bool {
        if !self.make_move(from, to) {
            return false;
        }
        let mover = self.side_to_move.opponent();
        let safe = !self.is_king_attacked(mover);
        self.unmake_move();
        safe
    }

    /// Legal destinations of every side-to-move piece in `origin`.
    pub fn legal_moves(&mut self, origin: Bitboard) -> Bitboard {
        let mut legal = Bitboard::EMPTY;
        for from in (origin & self.on_move_positions()).singles() {
            for to in self.pseudo_legal_moves(from).singles() {
                if self.is_move_legal(from, to) {
                    legal |= to;
                }
            }
        }
        legal
    }

    /// Returns true if `from` -> `to` is one of the legal moves from `from`.
    /// Unlike [`Board::make_move`] nothing is played.
    pub fn can_make_move(&mut self, from: Bitboard, to: Bitboard) -> bool {
        from.is_single() && to.is_single() && self.legal_moves(from).intersects(to)
    }

    /// Legal moves from a single origin square as `Move` values, in
    /// ascending destination order.
    ///
    /// # Errors
    /// Returns [`BoardError::MultipleOrigins`] if `origin` has more than one
    /// bit set. An empty `origin` yields no moves.
    pub fn generate_moves(&mut self, origin: Bitboard) -> Result<Vec<Move>, BoardError> {
        let count = origin.popcount();
        if count > 1 {
            log_debug!("generate_moves rejected a selector with {count} origins");
            return Err(BoardError::MultipleOrigins { count });
        }
        let Some(from) = origin.lsb() else {
            return Ok(Vec::new());
        };
        Ok(self
            .legal_moves(origin)
            .squares()
            .map(|to| Move::new(from, to))
            .collect())
    }

    /// Every legal move of the side to move, origins and destinations in
    /// ascending square order.
    pub fn all_legal_moves(&mut self) -> Vec<Move> {
        let mut moves = Vec::new();
        for from in self.on_move_positions().singles() {
            let Some(origin) = from.lsb() else { continue };
            for to in self.legal_moves(from).squares() {
                moves.push(Move::new(origin, to));
            }
        }
        moves
    }

    /// Returns true if the side to move has at least one legal move.
    pub fn has_legal_move(&mut self) -> bool {
        for from in self.on_move_positions().singles() {
            for to in self.pseudo_legal_moves(from).singles() {
                if self.is_move_legal(from, to) {
                    return true;
                }
            }
        }
        false
    }

    /// End-of-game check for the side to move: checkmate, stalemate, or
    /// still in progress.
    pub fn status(&mut self) -> GameStatus {
        if self.has_legal_move() {
            return GameStatus::InProgress;
        }
        let status = if self.in_check() {
            GameStatus::mated(self.side_to_move)
        } else {
            GameStatus::Draw
        };
        log_debug!("game over: {status}");
        status
    }

    /// Number of leaf nodes of the legal move tree `depth` plies deep.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            if self.play(mv) {
                nodes += self.perft(depth - 1);
                self.unmake_move();
            }
        }
        nodes
    }
}
