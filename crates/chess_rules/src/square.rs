use std::{fmt::Display, ops::Add, str::FromStr};

use itertools::iproduct;

/// A square on the board. Enforces that the square is actually on the board.
///
/// `row` is the rank and `col` the file, both zero based: `"a1"` is `(0, 0)` and `"e4"` is
/// `(3, 4)`. Row 0 is the side of team white.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Creates a new square. Ensures that the square is valid.
    ///
    /// ## Panics
    ///
    /// Panics if `row >= 8` or if `col >= 8`. To fail recoverably, use [`try_new`] instead
    ///
    /// [`try_new`]: Square::try_new
    pub fn new(row: u8, col: u8) -> Square {
        assert!(row < 8);
        assert!(col < 8);
        Square { row, col }
    }

    /// Creates a new square. Returns `None` if the square would not be on the board
    pub fn try_new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// returns the rank of the square
    ///
    /// ```
    /// # use chess_rules::*;
    /// assert_eq!("e4".parse::<Square>().unwrap().row(), 3);
    /// ```
    pub fn row(&self) -> u8 {
        self.row
    }

    /// returns the file of the square
    ///
    /// ```
    /// # use chess_rules::*;
    /// assert_eq!("e4".parse::<Square>().unwrap().col(), 4);
    /// ```
    pub fn col(&self) -> u8 {
        self.col
    }

    /// turns the square into a tuple of `(row, col)`
    #[must_use]
    pub fn as_tuple(self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// iterates over every square of the board, row by row starting at `a1`
    pub fn all() -> impl Iterator<Item = Square> {
        iproduct!(0..8, 0..8).map(|(row, col)| Square { row, col })
    }
}

/// Offsets a square by `(rows, cols)`. Returns `None` if the result would leave the board
impl Add<(i8, i8)> for Square {
    type Output = Option<Square>;

    fn add(self, (drow, dcol): (i8, i8)) -> Self::Output {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        Square::try_new(row, col)
    }
}

impl From<(u8, u8)> for Square {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}

/// Error that arises from parsing a [`Square`]
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("square is invalid")]
pub struct InvalidSquare;

impl FromStr for Square {
    type Err = InvalidSquare;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars().map(|c| c.to_ascii_lowercase());
        let col = chars.next().ok_or(InvalidSquare)?;
        let col = match col {
            'a'..='h' => col as u8 - b'a',
            _ => return Err(InvalidSquare),
        };
        let row = chars.next().ok_or(InvalidSquare)?;
        let row = match row {
            '1'..='8' => row as u8 - b'1',
            _ => return Err(InvalidSquare),
        };
        if chars.next().is_some() {
            return Err(InvalidSquare);
        }
        Ok(Square { row, col })
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let col = (self.col + b'a') as char;
        let row = (self.row + b'1') as char;

        write!(f, "{col}{row}")
    }
}
