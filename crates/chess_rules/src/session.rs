use crate::{game::MoveInfo, Game, Move, MoveError, Player, SameTeam, Team, TurnOrder};

/// A game between two players: the board, whose turn it is, and the score.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    turns: TurnOrder,
}

/// What a successfully played turn did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// name of the player who moved
    pub player: String,
    /// the team that moved
    pub team: Team,
    /// the move and its capture
    pub info: MoveInfo,
    /// the points of the player after the move
    pub points: u32,
}

impl Session {
    /// Starts a game from the standard layout. The players must be on different teams.
    pub fn new(players: [Player; 2]) -> Result<Self, SameTeam> {
        Self::with_game(Game::new(), players)
    }

    /// Plays on from `game`, with white to move
    pub fn with_game(game: Game, players: [Player; 2]) -> Result<Self, SameTeam> {
        Ok(Session {
            game,
            turns: TurnOrder::new(players)?,
        })
    }

    /// the state of the board
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// the turn order, including both players and their points
    pub fn turns(&self) -> &TurnOrder {
        &self.turns
    }

    /// the player whose turn it is
    pub fn to_move(&self) -> &Player {
        self.turns.current()
    }

    /// Plays a move given as `<file><rank><file><rank>` for the player whose turn it is.
    ///
    /// On success the player is credited with the value of whatever they captured and the turn
    /// passes to the other player. On failure nothing changes and the same player is to move.
    pub fn play(&mut self, token: &str) -> Result<TurnReport, MoveError> {
        let mv = Move::parse(token)?;
        self.play_move(mv)
    }

    /// Like [`play`](Session::play), for an already parsed move
    pub fn play_move(&mut self, mv: Move) -> Result<TurnReport, MoveError> {
        let team = self.turns.current().team();
        let info = self.game.try_make_move(team, mv)?;

        let mover = self.turns.current_mut();
        let points = match info.captured {
            Some(piece) => mover.add_points(piece.value()),
            None => mover.points(),
        };
        let report = TurnReport {
            player: mover.name().to_owned(),
            team,
            info,
            points,
        };

        self.turns.advance();
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Piece, PieceKind};
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        Session::new([
            Player::new("Ada", Team::Black),
            Player::new("Grace", Team::White),
        ])
        .unwrap()
    }

    #[test]
    fn turns_alternate_on_success_only() {
        let mut session = session();
        assert_eq!(session.to_move().name(), "Grace");

        assert!(session.play("e7e5").is_err());
        assert_eq!(session.to_move().name(), "Grace");

        session.play("e2e4").unwrap();
        assert_eq!(session.to_move().name(), "Ada");
        assert_eq!(session.turns().turns_taken(), 1);
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        let mut session = session();
        let err = session.play("e2e9").unwrap_err();
        assert!(matches!(err, MoveError::Malformed(_)));
        assert_eq!(session.game(), &Game::new());
    }

    #[test]
    fn captures_score_points() {
        let mut session = session();
        for token in ["e2e4", "d7d5", "e4d5", "d8d5", "b1c3"] {
            session.play(token).unwrap();
        }
        assert_eq!(session.turns().player(Team::White).points(), 1);
        assert_eq!(session.turns().player(Team::Black).points(), 1);

        session.play("a7a6").unwrap();
        // the knight takes the queen
        let report = session.play("c3d5").unwrap();
        assert_eq!(report.points, 10);
        assert_eq!(session.turns().player(Team::White).points(), 10);
        assert_eq!(session.turns().player(Team::Black).points(), 1);
    }

    #[test]
    fn report_names_the_mover() {
        let mut session = session();
        session.play("e2e4").unwrap();
        session.play("d7d5").unwrap();

        let report = session.play("e4d5").unwrap();
        assert_eq!(
            report,
            TurnReport {
                player: "Grace".to_owned(),
                team: Team::White,
                info: MoveInfo {
                    mv: Move::parse("e4d5").unwrap(),
                    piece: Piece::new_white(PieceKind::Pawn),
                    captured: Some(Piece::new_black(PieceKind::Pawn)),
                    authorization: crate::game::Authorization::Movement,
                },
                points: 1,
            }
        );
    }

    #[test]
    fn same_team_is_refused() {
        let result = Session::new([
            Player::new("Ada", Team::Black),
            Player::new("Grace", Team::Black),
        ]);
        assert!(result.is_err());
    }
}
