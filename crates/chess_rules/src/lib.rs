#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod game;
mod notation;
mod players;
mod session;
mod square;

use std::fmt::Display;

pub use game::{Game, MoveError};
pub use notation::{MalformedMove, Move, Path};
pub use players::{assign_teams, Player, SameTeam, TurnOrder};
pub use session::{Session, TurnReport};
pub use square::{InvalidSquare, Square};

use game::{movement, MovementRule};

/// Of which kind a piece is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum PieceKind {
    /// a pawn (♙)
    #[default]
    Pawn,
    /// a rook (♖)
    Rook,
    /// a knight (♘)
    Knight,
    /// a bishop (♗)
    Bishop,
    /// a queen (♕)
    Queen,
    /// a king (♔)
    King,
}

/// One of the two sides of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Team {
    /// The team playing the light colored pieces (the ones that start)
    #[default]
    White,
    /// The team playing the dark colored pieces
    Black,
}

impl Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Team::White => "white",
                Team::Black => "black",
            }
        )
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                PieceKind::Pawn => 'p',
                PieceKind::Rook => 'r',
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Queen => 'q',
                PieceKind::King => 'k',
            }
        )
    }
}

impl Team {
    /// changes the inner value to the other team
    #[inline]
    pub fn flip(&mut self) {
        let other = self.other();
        *self = other;
    }

    /// returns the opposing team
    #[inline]
    pub const fn other(&self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// returns the row on which the pieces of this team start out
    #[inline]
    pub const fn home_rank(&self) -> u8 {
        match self {
            Team::White => 0,
            Team::Black => 7,
        }
    }

    /// returns the row on which the pawns of this team start out
    #[inline]
    pub const fn pawn_rank(&self) -> u8 {
        match self {
            Team::White => 1,
            Team::Black => 6,
        }
    }

    /// returns the sign of the row delta of a pawn advance: white moves up the board, black down
    ///
    /// ```
    /// # use chess_rules::Team;
    /// assert_eq!(Team::White.forward(), 1);
    /// assert_eq!(Team::Black.forward(), -1);
    /// ```
    #[inline]
    pub const fn forward(&self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }
}

impl PieceKind {
    /// all kinds, in catalog order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Returns the material value of the kind, relative to pawns. Capturing a piece awards this
    /// many points.
    ///
    /// ```
    /// # use chess_rules::PieceKind;
    /// assert_eq!(PieceKind::Queen.value(), 9);
    /// assert_eq!(PieceKind::King.value(), 0);
    /// ```
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Rook => 5,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Returns the rule that decides whether a piece of this kind may make a move
    pub fn movement_rule(self) -> MovementRule {
        match self {
            PieceKind::Pawn => movement::pawn,
            PieceKind::Rook => movement::rook,
            PieceKind::Knight => movement::knight,
            PieceKind::Bishop => movement::bishop,
            PieceKind::Queen => movement::queen,
            PieceKind::King => movement::king,
        }
    }

    /// the english name of the kind, for messages
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece belonging to a team. Construct this with [`Piece::new_black`] and [`Piece::new_white`].
/// There usually is no need to construct though, as this is done by [`Game::new`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Piece {
    kind: PieceKind,
    team: Team,
}

impl Piece {
    /// Constructs a new piece of the given kind for the given team
    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self { kind, team }
    }

    /// Constructs a new dark colored piece
    pub const fn new_black(kind: PieceKind) -> Self {
        Self::new(kind, Team::Black)
    }

    /// Constructs a new light colored piece
    pub const fn new_white(kind: PieceKind) -> Self {
        Self::new(kind, Team::White)
    }

    /// Returns `true` if the piece kind is [`Pawn`].
    ///
    /// [`Pawn`]: PieceKind::Pawn
    ///
    /// ```
    /// # use chess_rules::*;
    /// assert_eq!(Piece::new_black(PieceKind::Pawn).is_pawn(), true);
    /// ```
    #[must_use]
    #[inline]
    pub fn is_pawn(&self) -> bool {
        matches!(self.kind, PieceKind::Pawn)
    }

    /// Returns `true` if the piece kind is [`King`].
    ///
    /// [`King`]: PieceKind::King
    #[must_use]
    #[inline]
    pub fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// returns to which team the piece belongs
    #[inline]
    pub fn team(&self) -> Team {
        self.team
    }

    /// returns the [`PieceKind`] of the piece, i.e. 'erases' the team
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the material value of the piece. See [`PieceKind::value`]
    #[inline]
    pub fn value(&self) -> u32 {
        self.kind.value()
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.team, self.kind) {
            (Team::Black, PieceKind::Pawn) => write!(f, "p")?,
            (Team::Black, PieceKind::Rook) => write!(f, "r")?,
            (Team::Black, PieceKind::Knight) => write!(f, "n")?,
            (Team::Black, PieceKind::Bishop) => write!(f, "b")?,
            (Team::Black, PieceKind::Queen) => write!(f, "q")?,
            (Team::Black, PieceKind::King) => write!(f, "k")?,
            (Team::White, PieceKind::Pawn) => write!(f, "P")?,
            (Team::White, PieceKind::Rook) => write!(f, "R")?,
            (Team::White, PieceKind::Knight) => write!(f, "N")?,
            (Team::White, PieceKind::Bishop) => write!(f, "B")?,
            (Team::White, PieceKind::Queen) => write!(f, "Q")?,
            (Team::White, PieceKind::King) => write!(f, "K")?,
        }

        Ok(())
    }
}
