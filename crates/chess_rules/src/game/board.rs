use std::{fmt::Display, ops::Index};

use crate::{Move, Piece, PieceKind, Square, Team};

/// A read-only copy of every cell of the board, indexed `[row][col]`. Row 0 is white's home
/// rank.
pub type Snapshot = [[Option<Piece>; 8]; 8];

const fn back_rank(team: Team) -> [Option<Piece>; 8] {
    use PieceKind::*;
    [
        Some(Piece::new(Rook, team)),
        Some(Piece::new(Knight, team)),
        Some(Piece::new(Bishop, team)),
        Some(Piece::new(Queen, team)),
        Some(Piece::new(King, team)),
        Some(Piece::new(Bishop, team)),
        Some(Piece::new(Knight, team)),
        Some(Piece::new(Rook, team)),
    ]
}

const fn pawn_rank(team: Team) -> [Option<Piece>; 8] {
    [Some(Piece::new(PieceKind::Pawn, team)); 8]
}

/// The standard starting layout. Every new [`Board`] gets its own copy of it.
const STARTING_LAYOUT: Snapshot = [
    back_rank(Team::White),
    pawn_rank(Team::White),
    [None; 8],
    [None; 8],
    [None; 8],
    [None; 8],
    pawn_rank(Team::Black),
    back_rank(Team::Black),
];

/// A chess board. Indexable via [`Square`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pub(super) cells: Snapshot,
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, i: Square) -> &Self::Output {
        &self.cells[i.row() as usize][i.col() as usize]
    }
}

impl Board {
    /// Sets up a new board in the standard way.
    pub fn new() -> Self {
        Board {
            cells: STARTING_LAYOUT,
        }
    }

    /// A board without any pieces on it
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Sets up a board holding exactly the given pieces. If a square is listed more than once, the
    /// last piece wins.
    ///
    /// ```
    /// # use chess_rules::{game::Board, Piece, PieceKind, Square};
    /// let e4 = Square::new(3, 4);
    /// let board = Board::with_pieces([(e4, Piece::new_white(PieceKind::Queen))]);
    /// assert_eq!(board.to_string(), "8/8/8/8/4Q3/8/8/8");
    /// ```
    pub fn with_pieces(pieces: impl IntoIterator<Item = (Square, Piece)>) -> Self {
        let mut board = Self::empty();
        for (square, piece) in pieces {
            board.cells[square.row() as usize][square.col() as usize] = Some(piece);
        }
        board
    }

    /// returns the piece standing on the square, if any
    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<Piece> {
        self[square]
    }

    /// Moves whatever stands on `mv.start()` to `mv.end()` and returns what stood on `mv.end()`
    /// before.
    ///
    /// This does **not** check whether the move is allowed. Use [`Game::try_make_move`] for that.
    ///
    /// [`Game::try_make_move`]: crate::Game::try_make_move
    pub fn apply(&mut self, mv: Move) -> Option<Piece> {
        let moving = self.cell_mut(mv.start()).take();
        std::mem::replace(self.cell_mut(mv.end()), moving)
    }

    /// takes the piece off the square, returning it
    pub(super) fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cell_mut(square).take()
    }

    fn cell_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.cells[square.row() as usize][square.col() as usize]
    }

    /// Returns a copy of the board for display purposes. Changing the copy does not change the
    /// board.
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }

    /// returns `1` for every occupied cell and `0` for every empty one, indexed like
    /// [`Snapshot`]
    pub fn occupancy(&self) -> [[u8; 8]; 8] {
        self.cells.map(|row| row.map(|cell| u8::from(cell.is_some())))
    }

    /// returns `true` if none of the squares holds a piece
    pub fn is_clear(&self, squares: &[Square]) -> bool {
        squares.iter().all(|&square| self[square].is_none())
    }

    /// returns an iterator over each piece on the board, including its square
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self[square].map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes the piece placement, rank 8 first, with digits for runs of empty cells
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().rev().enumerate() {
            let mut skip = 0;
            for cell in row {
                match cell {
                    Some(p) => {
                        if skip != 0 {
                            write!(f, "{skip}")?;
                        }
                        skip = 0;
                        write!(f, "{p}")?;
                    }
                    None => skip += 1,
                }
            }
            if skip != 0 {
                write!(f, "{skip}")?;
            }
            if i != 7 {
                write!(f, "/")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use pieces::*;
    mod pieces {
        #![allow(non_upper_case_globals, unused)]
        use crate::{Piece, PieceKind};
        pub const R: Option<Piece> = Some(Piece::new_white(PieceKind::Rook));
        pub const N: Option<Piece> = Some(Piece::new_white(PieceKind::Knight));
        pub const B: Option<Piece> = Some(Piece::new_white(PieceKind::Bishop));
        pub const Q: Option<Piece> = Some(Piece::new_white(PieceKind::Queen));
        pub const K: Option<Piece> = Some(Piece::new_white(PieceKind::King));
        pub const P: Option<Piece> = Some(Piece::new_white(PieceKind::Pawn));

        pub const r: Option<Piece> = Some(Piece::new_black(PieceKind::Rook));
        pub const n: Option<Piece> = Some(Piece::new_black(PieceKind::Knight));
        pub const b: Option<Piece> = Some(Piece::new_black(PieceKind::Bishop));
        pub const q: Option<Piece> = Some(Piece::new_black(PieceKind::Queen));
        pub const k: Option<Piece> = Some(Piece::new_black(PieceKind::King));
        pub const p: Option<Piece> = Some(Piece::new_black(PieceKind::Pawn));

        pub const x: Option<Piece> = None;
    }

    fn mv(s: &str) -> Move {
        Move::parse(s).unwrap()
    }

    #[test]
    fn to_string_starting_pos() {
        let board = Board::default();
        assert_eq!(
            board.to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        )
    }

    #[test]
    fn to_string_random() {
        // rows are listed from rank 1 up
        #[rustfmt::skip]
        let board = Board {
            cells: [
                [x,x,x,x,x,x,x,x],
                [x,r,x,x,x,K,P,P],
                [N,x,x,x,x,P,x,x],
                [p,x,P,P,x,B,x,x],
                [x,x,x,P,x,x,x,x],
                [x,x,x,p,x,x,p,p],
                [x,x,p,x,x,p,b,x],
                [x,x,k,x,x,x,x,x],
            ],
        };

        assert_eq!(
            board.to_string(),
            "2k5/2p2pb1/3p2pp/3P4/p1PP1B2/N4P2/1r3KPP/8"
        )
    }

    #[test]
    fn starting_layout_has_one_king_each() {
        let board = Board::new();
        let kings = board
            .pieces()
            .filter(|(_, piece)| piece.is_king())
            .collect::<Vec<_>>();

        assert_eq!(
            kings,
            [
                (Square::new(Team::White.home_rank(), 4), K.unwrap()),
                (Square::new(Team::Black.home_rank(), 4), k.unwrap()),
            ]
        );
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn every_new_board_is_fresh() {
        let mut first = Board::new();
        first.apply(mv("e2e4"));
        let second = Board::new();

        assert_eq!(second, Board::default());
        assert_ne!(first, second);
    }

    #[test]
    fn apply_relocates() {
        let mut board = Board::new();
        let captured = board.apply(mv("e2e4"));

        assert_eq!(captured, None);
        assert_eq!(board.occupant_at("e2".parse().unwrap()), None);
        assert_eq!(board.occupant_at("e4".parse().unwrap()), P);
        assert_eq!(
            board.to_string(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }

    #[test]
    fn apply_returns_capture() {
        let mut board = Board::new();
        let captured = board.apply(mv("d1d8"));

        assert_eq!(captured, q);
        assert_eq!(board.occupant_at("d8".parse().unwrap()), Q);
        assert_eq!(board.pieces().count(), 31);
    }

    #[test]
    fn apply_does_not_check_legality() {
        let mut board = Board::new();
        // a rook through its own pawn
        let captured = board.apply(mv("a1a5"));

        assert_eq!(captured, None);
        assert_eq!(board.occupant_at("a5".parse().unwrap()), R);
    }

    #[test]
    fn non_capture_is_invertible() {
        let before = Board::new();
        let mut board = before.clone();
        let the_move = mv("g1f3");

        board.apply(the_move);
        board.apply(the_move.reversed());

        assert_eq!(board, before);
    }

    #[test]
    fn capture_is_not_invertible() {
        let before = Board::new();
        let mut board = before.clone();
        let the_move = mv("b1b7");

        assert_eq!(board.apply(the_move), p);
        board.apply(the_move.reversed());

        assert_ne!(board, before);
        assert_eq!(board.occupant_at("b7".parse().unwrap()), None);
    }

    #[test]
    fn snapshot_does_not_alias() {
        let board = Board::new();
        let mut snapshot = board.snapshot();
        snapshot[0][0] = None;

        assert_eq!(board.occupant_at(Square::new(0, 0)), R);
    }

    #[test]
    fn occupancy_grid() {
        let occupancy = Board::new().occupancy();

        assert_eq!(occupancy[0], [1; 8]);
        assert_eq!(occupancy[1], [1; 8]);
        assert_eq!(occupancy[4], [0; 8]);
        assert_eq!(occupancy[7], [1; 8]);
    }

    #[test]
    fn clear_squares() {
        let board = Board::new();
        let sq = |s: &str| s.parse::<Square>().unwrap();

        assert!(board.is_clear(&[sq("e3"), sq("e4"), sq("e5"), sq("e6")]));
        assert!(!board.is_clear(&[sq("e3"), sq("e2")]));
        assert!(board.is_clear(&[]));
    }

    #[test]
    fn with_pieces_places_exactly_those() {
        let board = Board::with_pieces([
            ("a1".parse().unwrap(), K.unwrap()),
            ("h8".parse().unwrap(), k.unwrap()),
        ]);

        assert_eq!(board.to_string(), "7k/8/8/8/8/8/8/K7");
        assert_eq!(board.pieces().count(), 2);
    }
}
