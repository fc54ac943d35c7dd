//! Console front end: prompts, a manual player and an AI opponent.

mod renderer;

pub use renderer::ConsoleRenderer;

use crate::config::GameConfig;
use crate::renderer::{Renderer, Scene};
use anyhow::{Context, Result, bail};
use crosswise_core::{Game, ManualPlayer, Mark, Player, PlayerKind, Strategy, StrategyError};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// How a console game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The named player completed a line.
    Won(String),
    /// Board filled with no line.
    Stalemate,
    /// An AI picked an illegal square; the named player wins by default.
    Forfeit(String),
}

/// Where a seat's moves come from.
pub enum Seat {
    /// Typed on the console input.
    Manual,
    /// Chosen by a strategy.
    Ai(Box<dyn Strategy>),
}

impl Seat {
    /// Seat for a registered player kind, using the built-in AI tiers.
    pub fn for_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Manual => Seat::Manual,
            PlayerKind::Ai(difficulty) => Seat::Ai(Box::new(difficulty.strategy())),
        }
    }
}

/// Runs one console game to completion.
///
/// Names and player 1's mark come from `config` when set and are prompted
/// for otherwise. Player 1 is manual unless `ai_vs_ai` is set; player 2 is
/// always the configured AI tier.
#[instrument(skip_all, fields(difficulty = %config.difficulty()))]
pub fn run<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let game = setup(config, input, output)?;
    let mut seats: Vec<Seat> = game
        .players()
        .iter()
        .map(|p| Seat::for_kind(*p.kind()))
        .collect();
    play(game, &mut seats, input, output)
}

/// Prompts for whatever the config leaves unset and registers both players.
#[instrument(skip_all)]
pub fn setup<R: BufRead, W: Write>(
    config: &GameConfig,
    input: &mut R,
    output: &mut W,
) -> Result<Game> {
    let first_name = match config.player_name() {
        Some(name) => name.clone(),
        None => prompt(input, output, "Player 1's name: ")?,
    };

    let first_mark = match config.player_mark() {
        Some(mark) => *mark,
        None => prompt_mark(input, output, &first_name)?,
    };

    let second_name = match config.opponent_name() {
        Some(name) => name.clone(),
        None => prompt(input, output, "Player 2's name: ")?,
    };

    let ai = PlayerKind::Ai(*config.difficulty());
    let first_kind = if *config.ai_vs_ai() {
        ai
    } else {
        PlayerKind::Manual
    };

    let mut game = Game::new();
    game.add_player(first_kind, first_mark, &first_name)?;
    game.add_player(ai, first_mark.opponent(), &second_name)?;
    info!(%first_name, %second_name, "Players registered");
    Ok(game)
}

/// Alternates moves until the game is over.
///
/// `seats` holds one move source per registered player, in seat order.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write>(
    mut game: Game,
    seats: &mut [Seat],
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    ConsoleRenderer::new(&mut *output).render(&Scene::of(&game))?;

    while !game.game_over() {
        let me = game
            .next_player()
            .context("game in progress without a next player")?
            .clone();
        let opponent = me.mark().opponent();

        let seat = usize::from(me.ordinal().number() - 1);
        let choice = match seats.get_mut(seat) {
            Some(Seat::Manual) => {
                let mut human = ManualPlayer::new(&mut *input, &mut *output);
                match human.choose_move(game.grid(), &me, opponent) {
                    Ok(coord) => Some(coord),
                    Err(StrategyError::InputClosed) => {
                        bail!("input closed during {}'s turn", me.name())
                    }
                    Err(e) => return Err(e).context("reading manual move"),
                }
            }
            Some(Seat::Ai(strategy)) => match strategy.choose_move(game.grid(), &me, opponent) {
                Ok(coord) => {
                    writeln!(output, "{} plays {}", me.name(), coord)?;
                    Some(coord)
                }
                Err(e) => {
                    warn!(player = %me.name(), error = %e, "AI produced no move");
                    None
                }
            },
            None => bail!("no seat configured for {}", me),
        };

        let coord = match choice {
            Some(coord) if game.grid().is_open(coord) => coord,
            _ if matches!(seats.get(seat), Some(Seat::Ai(_))) => {
                let other = other_name(&game, &me);
                warn!(player = %me.name(), ?choice, "AI picked an invalid move");
                writeln!(output, "An AI player picked an invalid move! {} wins!", other)?;
                return Ok(Outcome::Forfeit(other));
            }
            _ => {
                debug!(?choice, "Manual move rejected");
                writeln!(output, "Invalid move.")?;
                continue;
            }
        };

        // Checked open above, so the turn pointer never skips a seat.
        if !game.place(coord.x, coord.y)? {
            bail!("placement at {} rejected for {}", coord, me.name());
        }
        ConsoleRenderer::new(&mut *output).render(&Scene::of(&game))?;
    }

    let outcome = match game.winner() {
        Some(winner) => {
            writeln!(output, "{} wins!", winner.name())?;
            Outcome::Won(winner.name().clone())
        }
        None => {
            writeln!(output, "Stalemate!")?;
            Outcome::Stalemate
        }
    };
    info!(?outcome, "Game over");
    Ok(outcome)
}

fn other_name(game: &Game, me: &Player) -> String {
    game.player_with(me.mark().opponent())
        .map(|p| p.name().clone())
        .unwrap_or_default()
}

/// Writes `message` and reads one trimmed line.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        bail!("input closed while waiting for an answer to {:?}", message.trim());
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

/// Asks player 1 for a mark until an X or O is given.
fn prompt_mark<R: BufRead, W: Write>(input: &mut R, output: &mut W, name: &str) -> Result<Mark> {
    let mut answer = prompt(input, output, &format!("{}, would you like to be X or O? ", name))?;
    loop {
        if let Ok(mark) = answer.parse::<Mark>() {
            return Ok(mark);
        }
        writeln!(output, "Invalid letter.")?;
        answer = prompt(input, output, "Player 1, would you like to be X or O? ")?;
    }
}
