use std::fmt::Display;

use rand::Rng;

use crate::Team;

/// Someone playing the game, with the points they scored by capturing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    team: Team,
    points: u32,
}

impl Player {
    /// A player without any points yet
    pub fn new(name: impl Into<String>, team: Team) -> Self {
        Player {
            name: name.into(),
            team,
            points: 0,
        }
    }

    /// the name the player gave
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the team the player moves
    pub fn team(&self) -> Team {
        self.team
    }

    /// the points scored so far
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Adds points after a capture. Returns the new total.
    pub fn add_points(&mut self, points: u32) -> u32 {
        self.points += points;
        self.points
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Puts the first player on a random team and the second player on the other one.
///
/// ```
/// # use chess_rules::assign_teams;
/// let [a, b] = assign_teams("Ada", "Grace", &mut rand::thread_rng());
/// assert_ne!(a.team(), b.team());
/// ```
pub fn assign_teams<R: Rng + ?Sized>(
    first: impl Into<String>,
    second: impl Into<String>,
    rng: &mut R,
) -> [Player; 2] {
    let team = if rng.gen_bool(0.5) {
        Team::White
    } else {
        Team::Black
    };
    [Player::new(first, team), Player::new(second, team.other())]
}

/// Error that arises from [`TurnOrder::new`]
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("both players are on team {0}")]
pub struct SameTeam(pub Team);

/// Decides whose turn it is. White moves first, then the turns alternate forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOrder {
    /// white first
    players: [Player; 2],
    turn: usize,
}

impl TurnOrder {
    /// Orders the players so that white moves first. The players must be on different teams.
    pub fn new(players: [Player; 2]) -> Result<Self, SameTeam> {
        let [a, b] = players;
        let players = match (a.team(), b.team()) {
            (Team::White, Team::Black) => [a, b],
            (Team::Black, Team::White) => [b, a],
            (team, _) => return Err(SameTeam(team)),
        };
        Ok(TurnOrder { players, turn: 0 })
    }

    /// The player making move number `turn`, counting from 0. Does not depend on how far the
    /// order has advanced.
    ///
    /// ```
    /// # use chess_rules::{Player, Team, TurnOrder};
    /// let order = TurnOrder::new([
    ///     Player::new("Ada", Team::Black),
    ///     Player::new("Grace", Team::White),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(order.turn_for(0).name(), "Grace");
    /// assert_eq!(order.turn_for(1).name(), "Ada");
    /// assert_eq!(order.turn_for(40).name(), "Grace");
    /// ```
    pub fn turn_for(&self, turn: usize) -> &Player {
        &self.players[turn % 2]
    }

    /// the player whose turn it is
    pub fn current(&self) -> &Player {
        self.turn_for(self.turn)
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.turn % 2]
    }

    /// Hands the turn to the other player and returns them
    pub fn advance(&mut self) -> &Player {
        self.turn += 1;
        self.current()
    }

    /// how many turns have been completed
    pub fn turns_taken(&self) -> usize {
        self.turn
    }

    /// both players, white first
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// the player on the given team
    pub fn player(&self, team: Team) -> &Player {
        match team {
            Team::White => &self.players[0],
            Team::Black => &self.players[1],
        }
    }

    /// An endless iterator over the players in turn order, starting with white. Not affected by
    /// [`advance`](TurnOrder::advance).
    pub fn iter(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().cycle()
    }
}
