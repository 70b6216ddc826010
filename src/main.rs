use std::io::Write;

use anyhow::Context;
use chess_rules::{assign_teams, Session, TurnReport};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};

use crate::{prompt::Prompt, render::Renderer};

mod prompt;
mod render;

const BANNER: &str = "\
--------------------------------------------------------------------
|              Welcome to \"Check yourself, mate!\"                  |
--------------------------------------------------------------------

To play you simply take turns entering your moves according to
the format <start square><end square>, for example \"e2e4\"
would move the piece from e2 to the square e4.
";

#[derive(Parser)]
struct Opts {
    /// name of a player, may be given twice. Missing names are asked for
    #[clap(short, long = "player")]
    players: Vec<String>,
    /// seed for deciding who plays white
    #[clap(short, long)]
    seed: Option<u64>,
    /// draw the board without colors
    #[clap(long)]
    plain: bool,
    /// turn the board towards the player to move, also for the final board of `--moves`
    #[clap(short, long)]
    rotate: bool,
    /// play these moves without asking, then print the final board
    #[clap(short, long, num_args = 1..)]
    moves: Vec<String>,
}

macro_rules! retry {
    ($e:expr) => {{
        match $e {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Sorry, {e}. Please try again.");
                continue;
            }
        }
    }};
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    if opts.players.len() > 2 {
        anyhow::bail!("a game has two players, got {} names", opts.players.len());
    }

    let mut names = Vec::with_capacity(2);
    for name in &opts.players {
        let name = prompt::check_name(name, &names).context("invalid player name")?;
        names.push(name);
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let renderer = Renderer::new(opts.plain);

    if !opts.moves.is_empty() {
        return headless(opts, names, &mut rng, renderer);
    }

    println!("{BANNER}");
    let stdin = std::io::stdin();
    let mut prompt = Prompt::new(stdin.lock())?;
    while names.len() < 2 {
        let name = prompt.read_name(names.len() + 1, &names)?;
        names.push(name);
    }

    let [first, second] = [names.remove(0), names.remove(0)];
    let mut session = Session::new(assign_teams(first, second, &mut rng))?;
    for player in session.turns().players() {
        println!("{player} plays {}.", player.team());
    }
    println!();

    loop {
        let to_move = session.to_move().clone();
        println!("{}\n", board_view(&session, renderer, opts.rotate));

        // a rejected move keeps the same player and board, so only the prompt repeats
        let report = loop {
            let Some(token) = prompt.read_move(&to_move)? else {
                return final_score(&session);
            };
            break retry!(session.play(&token));
        };
        announce(&report);
        std::io::stdout().flush()?;
    }
}

fn headless(
    opts: Opts,
    mut names: Vec<String>,
    rng: &mut StdRng,
    renderer: Renderer,
) -> anyhow::Result<()> {
    while names.len() < 2 {
        names.push(prompt::default_name(names.len() + 1, &names));
    }
    let [first, second] = [names.remove(0), names.remove(0)];
    let mut session = Session::new(assign_teams(first, second, rng))?;
    let filter = prompt::MoveFilter::new()?;

    for (i, raw) in opts.moves.iter().enumerate() {
        let token = filter
            .accept(raw)
            .with_context(|| format!("move {} ({raw:?}) is not of the form \"e2e4\"", i + 1))?;
        let report = session
            .play(&token)
            .with_context(|| format!("move {} ({token}) was refused", i + 1))?;
        announce(&report);
    }

    println!("{}\n", board_view(&session, renderer, opts.rotate));
    final_score(&session)
}

/// The board with the last move highlighted, turned towards the player to move if `rotate`
fn board_view(session: &Session, renderer: Renderer, rotate: bool) -> String {
    let renderer = if rotate {
        renderer.with_perspective(session.to_move().team())
    } else {
        renderer
    };
    renderer.render(&session.game().snapshot(), session.game().last_move())
}

fn announce(report: &TurnReport) {
    if let Some(piece) = report.info.captured {
        eprintln!(
            "{} captured: {} ({} points in total).",
            report.player,
            piece.kind().name(),
            report.points
        );
    }
}

fn final_score(session: &Session) -> anyhow::Result<()> {
    for player in session.turns().players() {
        eprintln!("{player} ({}): {} points", player.team(), player.points());
    }
    Ok(())
}
