//! The movement contract of every [`PieceKind`](crate::PieceKind).
//!
//! A rule only answers yes or no. Which team is to move and whether the piece belongs to it is
//! checked before a rule is consulted, see [`Game::check_move`](crate::Game::check_move). En
//! passant is decided there as well, so the pawn rule only knows ordinary captures.

use crate::{Move, Piece, Team};

use super::Board;

/// Everything a movement rule may look at besides the move itself.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    /// the board before the move
    pub board: &'a Board,
    /// the team the moving piece belongs to
    pub team: Team,
}

impl MoveContext<'_> {
    /// what stands on the target square
    fn captured(&self, mv: Move) -> Option<Piece> {
        self.board[mv.end()]
    }

    fn lands_on_friend(&self, mv: Move) -> bool {
        matches!(self.captured(mv), Some(piece) if piece.team() == self.team)
    }

    fn lands_on_enemy(&self, mv: Move) -> bool {
        matches!(self.captured(mv), Some(piece) if piece.team() != self.team)
    }

    /// `true` if the move runs along a line and nothing stands between its ends
    fn unobstructed(&self, mv: Move) -> bool {
        mv.path().is_some_and(|path| self.board.is_clear(&path))
    }
}

/// Decides whether a piece may make a move. See [`PieceKind::movement_rule`]
///
/// [`PieceKind::movement_rule`]: crate::PieceKind::movement_rule
pub type MovementRule = fn(Move, &MoveContext<'_>) -> bool;

pub(crate) fn pawn(mv: Move, ctx: &MoveContext<'_>) -> bool {
    let (drow, dcol) = (mv.delta_row(), mv.delta_col());
    if drow.signum() != ctx.team.forward() {
        return false;
    }

    match (drow.abs(), dcol.abs()) {
        // pawns never capture straight ahead
        (1, 0) => ctx.captured(mv).is_none(),
        (2, 0) => {
            mv.start().row() == ctx.team.pawn_rank()
                && ctx.captured(mv).is_none()
                && ctx.unobstructed(mv)
        }
        (1, 1) => ctx.lands_on_enemy(mv),
        _ => false,
    }
}

pub(crate) fn rook(mv: Move, ctx: &MoveContext<'_>) -> bool {
    let (drow, dcol) = (mv.delta_row(), mv.delta_col());
    (drow == 0) != (dcol == 0) && ctx.unobstructed(mv) && !ctx.lands_on_friend(mv)
}

pub(crate) fn bishop(mv: Move, ctx: &MoveContext<'_>) -> bool {
    let (drow, dcol) = (mv.delta_row(), mv.delta_col());
    drow != 0 && drow.abs() == dcol.abs() && ctx.unobstructed(mv) && !ctx.lands_on_friend(mv)
}

pub(crate) fn queen(mv: Move, ctx: &MoveContext<'_>) -> bool {
    rook(mv, ctx) || bishop(mv, ctx)
}

/// knights jump, so nothing in between matters
pub(crate) fn knight(mv: Move, ctx: &MoveContext<'_>) -> bool {
    let jump = matches!(
        (mv.delta_row().abs(), mv.delta_col().abs()),
        (1, 2) | (2, 1)
    );
    jump && !ctx.lands_on_friend(mv)
}

// TODO: refuse moves that leave the own king attacked once check detection exists
pub(crate) fn king(mv: Move, ctx: &MoveContext<'_>) -> bool {
    let (drow, dcol) = (mv.delta_row().abs(), mv.delta_col().abs());
    drow.max(dcol) == 1 && !ctx.lands_on_friend(mv)
}
