use std::io::{self, BufRead, Write};

use chess_rules::Player;
use regex::Regex;

/// Lets through only tokens of the form `<file><rank><file><rank>`.
pub struct MoveFilter {
    pattern: Regex,
}

impl MoveFilter {
    pub fn new() -> anyhow::Result<Self> {
        Ok(MoveFilter {
            pattern: Regex::new(r"^[a-h][1-8][a-h][1-8]$")?,
        })
    }

    /// Trims and lower-cases `raw`. Returns `None` if the result is not a well formed move.
    pub fn accept(&self, raw: &str) -> Option<String> {
        let token = raw.trim().to_lowercase();
        self.pattern.is_match(&token).then_some(token)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    #[error("a name cannot be empty")]
    Empty,
    #[error("{0:?} is already taken")]
    Taken(String),
}

/// Trims `name` and makes sure it is neither empty nor in `taken`.
pub fn check_name(name: &str, taken: &[String]) -> Result<String, NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if taken.iter().any(|other| other == name) {
        return Err(NameError::Taken(name.to_owned()));
    }
    Ok(name.to_owned())
}

/// The name used for player `which` when nobody typed one in
pub fn default_name(which: usize, taken: &[String]) -> String {
    let mut n = which;
    loop {
        let name = format!("Player {n}");
        if !taken.contains(&name) {
            return name;
        }
        n += 1;
    }
}

/// Asks the players for names and moves until they give a usable answer.
pub struct Prompt<R> {
    input: R,
    filter: MoveFilter,
}

impl<R: BufRead> Prompt<R> {
    pub fn new(input: R) -> anyhow::Result<Self> {
        Ok(Prompt {
            input,
            filter: MoveFilter::new()?,
        })
    }

    /// `None` once the input is exhausted
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Asks for the name of player `which`, falling back to a default when the input runs out.
    pub fn read_name(&mut self, which: usize, taken: &[String]) -> io::Result<String> {
        loop {
            print!("Player {which}, please enter your name: ");
            io::stdout().flush()?;

            let Some(line) = self.read_line()? else {
                println!();
                return Ok(default_name(which, taken));
            };
            match check_name(&line, taken) {
                Ok(name) => return Ok(name),
                Err(e) => eprintln!("Sorry, {e}. Please try again."),
            }
        }
    }

    /// Asks `player` for a move. Returns `None` when the input runs out.
    pub fn read_move(&mut self, player: &Player) -> io::Result<Option<String>> {
        loop {
            print!("{player} ({}), please enter your move: ", player.team());
            io::stdout().flush()?;

            let Some(line) = self.read_line()? else {
                println!();
                return Ok(None);
            };
            match self.filter.accept(&line) {
                Some(token) => return Ok(Some(token)),
                None => eprintln!(
                    "That's not a valid move. It needs to follow the pattern \"e2e4\". Please try again."
                ),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_rules::Team;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn filter_normalizes() {
        let filter = MoveFilter::new().unwrap();
        assert_eq!(filter.accept("e2e4"), Some("e2e4".to_owned()));
        assert_eq!(filter.accept("  E2E4\n"), Some("e2e4".to_owned()));
        assert_eq!(filter.accept("b1c3"), Some("b1c3".to_owned()));
    }

    #[test]
    fn filter_rejects() {
        let filter = MoveFilter::new().unwrap();
        for raw in ["", "e2", "e2e", "e2e44", "i2e4", "e0e4", "e2 e4", "e2-e4", "Nf3"] {
            assert_eq!(filter.accept(raw), None, "{raw:?}");
        }
    }

    #[test]
    fn names_are_trimmed_and_distinct() {
        assert_eq!(check_name("  Ada \n", &[]), Ok("Ada".to_owned()));
        assert_eq!(check_name(" \n", &[]), Err(NameError::Empty));
        assert_eq!(
            check_name("Ada\n", &["Ada".to_owned()]),
            Err(NameError::Taken("Ada".to_owned()))
        );
    }

    #[test]
    fn default_names_avoid_taken_ones() {
        assert_eq!(default_name(2, &[]), "Player 2");
        assert_eq!(default_name(2, &["Player 2".to_owned()]), "Player 3");
    }

    #[test]
    fn read_name_retries_until_usable() {
        let mut prompt = Prompt::new(Cursor::new("\nAda\nGrace\n")).unwrap();
        let taken = ["Ada".to_owned()];
        assert_eq!(prompt.read_name(2, &taken).unwrap(), "Grace");
    }

    #[test]
    fn read_name_falls_back_on_eof() {
        let mut prompt = Prompt::new(Cursor::new("")).unwrap();
        assert_eq!(prompt.read_name(1, &[]).unwrap(), "Player 1");
    }

    #[test]
    fn read_move_skips_garbage() {
        let player = Player::new("Ada", Team::White);
        let mut prompt = Prompt::new(Cursor::new("hello\ne9e4\n G1F3 \nd2d4\n")).unwrap();

        assert_eq!(prompt.read_move(&player).unwrap(), Some("g1f3".to_owned()));
        assert_eq!(prompt.read_move(&player).unwrap(), Some("d2d4".to_owned()));
        assert_eq!(prompt.read_move(&player).unwrap(), None);
    }
}
