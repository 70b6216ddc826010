use std::{fmt::Display, str::FromStr};

use nom::{character::complete::one_of, sequence::tuple, IResult};
use tinyvec::ArrayVec;

use crate::Square;

type IRes<'a, T> = IResult<&'a str, T>;

/// The squares strictly between the two ends of a move. Six is the most a line can cross.
pub type Path = ArrayVec<[Square; 6]>;

/// A move from one square to another, as entered by a player.
///
/// Nothing about the move is checked at this point, except that both squares are on the board.
///
/// ## Examples
///
/// ```
/// # use chess_rules::{Move, Square};
/// let mv = Move::parse("e2e4").unwrap();
///
/// assert_eq!(mv.start(), Square::new(1, 4));
/// assert_eq!(mv.end(), Square::new(3, 4));
/// assert_eq!((mv.delta_row(), mv.delta_col()), (2, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Square,
    end: Square,
}

/// Error that arises from [`Move::parse`]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("{token:?} is not a move of the form <file><rank><file><rank>, for example \"e2e4\"")]
pub struct MalformedMove {
    token: String,
}

impl MalformedMove {
    /// the input that could not be parsed
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl Move {
    /// Constructs a move from its two squares
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }

    /// Parses `<file><rank><file><rank>`, e.g. `e2e4`. Files may be upper or lower case.
    ///
    /// ```
    /// # use chess_rules::Move;
    /// assert_eq!(Move::parse("E2E4"), Move::parse("e2e4"));
    /// assert!(Move::parse("e2e9").is_err());
    /// assert!(Move::parse("e2e4 ").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, MalformedMove> {
        let malformed = || MalformedMove {
            token: token.to_owned(),
        };
        let (rest, (start, end)) = tuple((square, square))(token).map_err(|_| malformed())?;
        if !rest.is_empty() {
            return Err(malformed());
        }

        Ok(Move { start, end })
    }

    /// the square the piece leaves
    #[inline]
    pub fn start(&self) -> Square {
        self.start
    }

    /// the square the piece arrives on
    #[inline]
    pub fn end(&self) -> Square {
        self.end
    }

    /// how many rows the move covers, positive towards black's side
    #[inline]
    pub fn delta_row(&self) -> i8 {
        self.end.row() as i8 - self.start.row() as i8
    }

    /// how many columns the move covers, positive towards the h file
    #[inline]
    pub fn delta_col(&self) -> i8 {
        self.end.col() as i8 - self.start.col() as i8
    }

    /// the same move played backwards
    #[must_use]
    pub fn reversed(self) -> Self {
        Move {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns the squares strictly between start and end, or `None` if the move is not along a
    /// row, a column or a diagonal. A move to an adjacent square has an empty path.
    ///
    /// ```
    /// # use chess_rules::Move;
    /// let path = Move::parse("a1d4").unwrap().path().unwrap();
    /// let path: Vec<_> = path.iter().map(|sq| sq.to_string()).collect();
    /// assert_eq!(path, ["b2", "c3"]);
    ///
    /// assert!(Move::parse("g1f3").unwrap().path().is_none());
    /// ```
    pub fn path(self) -> Option<Path> {
        let (drow, dcol) = (self.delta_row(), self.delta_col());
        let straight = drow == 0 || dcol == 0 || drow.abs() == dcol.abs();
        if !straight || (drow, dcol) == (0, 0) {
            return None;
        }

        let step = (drow.signum(), dcol.signum());
        let mut path = Path::new();
        let mut current = self.start;
        for _ in 1..drow.abs().max(dcol.abs()) {
            current = (current + step)?;
            path.push(current);
        }
        Some(path)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

impl FromStr for Move {
    type Err = MalformedMove;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn get_file(s: &str) -> IRes<u8> {
    let (s, x) = one_of("abcdefghABCDEFGH")(s)?;
    let x = x.to_ascii_lowercase() as u8 - b'a';
    Ok((s, x))
}

fn get_rank(s: &str) -> IRes<u8> {
    let (s, x) = one_of("12345678")(s)?;
    let x = x as u8 - b'1';
    Ok((s, x))
}

fn square(s: &str) -> IRes<Square> {
    let (s, (col, row)) = tuple((get_file, get_rank))(s)?;

    Ok((s, Square::new(row, col)))
}
