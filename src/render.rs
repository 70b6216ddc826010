use catppuccin::{Colour, Flavour};
use chess_rules::{game::Snapshot, Move, Piece, Square, Team};
use either::Either;
use itertools::Itertools;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Draws a board snapshot for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    plain: bool,
    /// the team sitting at the bottom of the board
    perspective: Team,
}

impl Renderer {
    /// Letters only if `plain`, otherwise with 24-bit ANSI colors. White sits at the bottom.
    pub fn new(plain: bool) -> Self {
        Renderer {
            plain,
            perspective: Team::White,
        }
    }

    pub fn with_perspective(self, perspective: Team) -> Self {
        Renderer {
            perspective,
            ..self
        }
    }

    /// rows from the top of the screen down
    fn rows(&self) -> impl Iterator<Item = u8> {
        match self.perspective {
            Team::White => Either::Left((0..8u8).rev()),
            Team::Black => Either::Right(0..8u8),
        }
    }

    /// columns from left to right
    fn cols(&self) -> impl Iterator<Item = u8> {
        match self.perspective {
            Team::White => Either::Left(0..8u8),
            Team::Black => Either::Right((0..8u8).rev()),
        }
    }

    pub fn render(&self, snapshot: &Snapshot, last_move: Option<Move>) -> String {
        let highlighted = |square: Square| {
            last_move.is_some_and(|mv| mv.start() == square || mv.end() == square)
        };

        let mut out = String::new();
        for row in self.rows() {
            out.push_str(&format!("{} ", row + 1));
            let mut cells = self.cols().map(|col| {
                let square = Square::new(row, col);
                let piece = snapshot[row as usize][col as usize];
                self.cell(square, piece, highlighted(square))
            });
            if self.plain {
                out.push_str(&cells.join(" "));
            } else {
                out.extend(cells);
            }
            out.push('\n');
        }

        let files = self.cols().map(|col| FILES[col as usize]);
        if self.plain {
            out.push_str(&format!("  {}", files.format(" ")));
        } else {
            out.push_str("  ");
            out.extend(files.map(|file| format!(" {file} ")));
        }
        out
    }

    fn cell(&self, square: Square, piece: Option<Piece>, highlighted: bool) -> String {
        let glyph = piece.map_or('.', |piece| {
            piece.to_string().chars().next().unwrap_or('?')
        });
        if self.plain {
            return glyph.to_string();
        }

        let flavor = Flavour::Mocha;
        let background = if highlighted {
            flavor.peach()
        } else if (square.row() + square.col()) % 2 == 0 {
            flavor.overlay0()
        } else {
            flavor.overlay2()
        };
        let foreground = match piece {
            Some(piece) if piece.team() == Team::Black => flavor.crust(),
            _ => flavor.text(),
        };
        let glyph = if piece.is_some() { glyph } else { ' ' };
        paint(&format!(" {glyph} "), foreground, background)
    }
}

/// Wraps `text` in 24-bit ANSI color escapes
fn paint(text: &str, foreground: Colour, background: Colour) -> String {
    let (fr, fg, fb): (u8, u8, u8) = foreground.into();
    let (br, bg, bb): (u8, u8, u8) = background.into();
    format!("\x1b[38;2;{fr};{fg};{fb}m\x1b[48;2;{br};{bg};{bb}m{text}\x1b[0m")
}
