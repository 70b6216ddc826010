//! The board together with the state that lives alongside it, and the rules for changing it.

use std::{fmt::Display, ops::Index};

use crate::{MalformedMove, Move, Piece, PieceKind, Square, Team};

mod board;
pub(crate) mod movement;

pub use board::{Board, Snapshot};
pub use movement::{MoveContext, MovementRule};

/// The state of a game: where every piece stands, which square may be taken en passant and what
/// was played last.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    board: Board,
    /// Some(sq) if a pawn skipped over sq on the move before
    en_passant_sq: Option<Square>,
    last_move: Option<Move>,
}

/// Why a move was rejected. None of these end the game, the same player simply tries again.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MoveError {
    /// the move could not be read
    #[error(transparent)]
    Malformed(#[from] MalformedMove),
    /// no piece stands on the start square
    #[error("there is no piece on {0}")]
    EmptyOrigin(Square),
    /// the piece on the start square belongs to the other team
    #[error("the piece on {0} is not yours")]
    NotYourPiece(Square),
    /// the target square holds a piece of the moving team
    #[error("you cannot capture your own piece on {0}")]
    FriendlyCapture(Square),
    /// the piece cannot move like that
    #[error("a {} cannot move {mv}", .piece.name())]
    IllegalPieceMovement {
        /// the kind of the piece that was asked to move
        piece: PieceKind,
        /// the move that was asked for
        mv: Move,
    },
}

/// How a move got permission to be played
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    /// the movement rule of the piece allows it
    Movement,
    /// a pawn takes a pawn that just skipped past it
    EnPassant,
}

/// What happened when a move was made
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInfo {
    /// the move that was made
    pub mv: Move,
    /// the piece that moved
    pub piece: Piece,
    /// the piece that was taken off the board, if any
    pub captured: Option<Piece>,
    /// how the move was allowed
    pub authorization: Authorization,
}

impl Game {
    /// Starts a game from the standard layout
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            en_passant_sq: None,
            last_move: None,
        }
    }

    /// Continues a game from an arbitrary board
    pub fn from_board(board: Board, en_passant_sq: Option<Square>) -> Self {
        Game {
            board,
            en_passant_sq,
            last_move: None,
        }
    }

    /// the current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// a copy of the current board, see [`Board::snapshot`]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    /// the square a pawn may move to in order to capture en passant on the next move
    pub fn en_passant_sq(&self) -> Option<Square> {
        self.en_passant_sq
    }

    /// the move played last, if any
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Checks whether `team` may make the move, without making it.
    ///
    /// The checks run in order and the first one that fails is reported:
    ///
    /// 1. a piece of `team` stands on the start square
    /// 2. the target square does not hold a piece of `team`
    /// 3. the move is an en passant capture, or else the movement rule of the piece allows it
    ///
    /// ## Examples
    ///
    /// ```
    /// # use chess_rules::{game::Authorization, Game, Move, MoveError, Team};
    /// let game = Game::new();
    /// let e2e4 = Move::parse("e2e4").unwrap();
    ///
    /// assert_eq!(game.check_move(Team::White, e2e4), Ok(Authorization::Movement));
    /// assert_eq!(
    ///     game.check_move(Team::Black, e2e4),
    ///     Err(MoveError::NotYourPiece(e2e4.start()))
    /// );
    /// ```
    pub fn check_move(&self, team: Team, mv: Move) -> Result<Authorization, MoveError> {
        self.authorize(team, mv).map(|(_, authorization)| authorization)
    }

    fn authorize(&self, team: Team, mv: Move) -> Result<(Piece, Authorization), MoveError> {
        let piece = self.board[mv.start()].ok_or(MoveError::EmptyOrigin(mv.start()))?;
        if piece.team() != team {
            return Err(MoveError::NotYourPiece(mv.start()));
        }

        if matches!(self.board[mv.end()], Some(target) if target.team() == team) {
            return Err(MoveError::FriendlyCapture(mv.end()));
        }

        if self.is_en_passant(piece, mv) {
            return Ok((piece, Authorization::EnPassant));
        }

        let ctx = MoveContext {
            board: &self.board,
            team,
        };
        if (piece.kind().movement_rule())(mv, &ctx) {
            Ok((piece, Authorization::Movement))
        } else {
            Err(MoveError::IllegalPieceMovement {
                piece: piece.kind(),
                mv,
            })
        }
    }

    /// a pawn stepping diagonally forward onto the square an enemy pawn skipped, with that pawn
    /// standing beside it
    fn is_en_passant(&self, piece: Piece, mv: Move) -> bool {
        piece.is_pawn()
            && self.en_passant_sq == Some(mv.end())
            && mv.delta_row() == piece.team().forward()
            && mv.delta_col().abs() == 1
            && self.board[Self::passed_square(mv)]
                == Some(Piece::new(PieceKind::Pawn, piece.team().other()))
    }

    /// where the pawn taken en passant stands: beside the start square, not on the target
    fn passed_square(mv: Move) -> Square {
        Square::new(mv.start().row(), mv.end().col())
    }

    /// Attempts to make a move for `team`, returning Err if the move is not allowed. A rejected
    /// move changes nothing.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use chess_rules::{Game, Move, Square, Team};
    /// let mut game = Game::new();
    /// let info = game.try_make_move(Team::White, Move::parse("e2e4").unwrap()).unwrap();
    ///
    /// assert_eq!(info.captured, None);
    /// assert_eq!(game.en_passant_sq(), Some(Square::new(2, 4)));
    /// assert!(game.try_make_move(Team::White, Move::parse("e4e6").unwrap()).is_err());
    /// ```
    pub fn try_make_move(&mut self, team: Team, mv: Move) -> Result<MoveInfo, MoveError> {
        let (piece, authorization) = self.authorize(team, mv)?;

        let captured = match authorization {
            Authorization::Movement => self.board.apply(mv),
            Authorization::EnPassant => {
                self.board.apply(mv);
                self.board.remove(Self::passed_square(mv))
            }
        };

        self.en_passant_sq = Self::skipped_square(piece, mv);
        self.last_move = Some(mv);

        Ok(MoveInfo {
            mv,
            piece,
            captured,
            authorization,
        })
    }

    /// the square behind a pawn that just advanced two rows
    fn skipped_square(piece: Piece, mv: Move) -> Option<Square> {
        if !piece.is_pawn() || mv.delta_row().abs() != 2 {
            return None;
        }
        mv.end() + (-piece.team().forward(), 0)
    }
}

impl Index<Square> for Game {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.board[index]
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)
    }
}
