use std::io::{BufRead, Write};

use onitama::{visualize_board, Card, Color, Game, GameSnapshot, Player};
use tracing::{debug, info};

use crate::command::{Command, HELP};

pub enum SessionResult {
    Won { winner: Color, name: String },
    /// The user quit, or the input ended, before anyone won.
    Abandoned,
}

/// Runs the turn loop on `game` until someone wins, reading moves from `input`.
///
/// Rejected moves and unparseable lines are reported and the same player is
/// asked again. Returns an error only on I/O failure.
pub fn play_session(
    game: &mut Game,
    mut input: impl BufRead,
    output: &mut impl Write,
    json: bool,
) -> anyhow::Result<SessionResult> {
    let mut buf = String::new();
    let mut show_board = true;

    while !game.is_over() {
        if show_board {
            print_state(game, output, json)?;
            show_board = false;
        }
        write!(output, "{} > ", game.current_player().name())?;
        output.flush()?;

        buf.clear();
        let num_bytes_read = input.read_line(&mut buf)?;
        if num_bytes_read == 0 {
            // EOF
            writeln!(output)?;
            info!("Input ended before the game was decided");
            return Ok(SessionResult::Abandoned);
        }

        let command = match buf.trim().parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match command {
            Command::Quit => {
                info!("Game abandoned");
                return Ok(SessionResult::Abandoned);
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::ListMoves => {
                for m in game.legal_moves() {
                    writeln!(
                        output,
                        "{} {} {} {} {}",
                        m.card, m.origin.row, m.origin.col, m.offset.row, m.offset.col
                    )?;
                }
            }
            Command::Move {
                card,
                origin,
                offset,
            } => {
                let card = match card.resolve(game.current_player(), &[game.table_card()]) {
                    Ok(card) => card,
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        continue;
                    }
                };
                match game.make_move(&card, origin, offset) {
                    Ok(outcome) => {
                        if let Some(piece) = outcome.captured {
                            writeln!(output, "Captured {} at {}", piece, outcome.destination)?;
                        }
                        show_board = true;
                    }
                    Err(err) => {
                        debug!(%err, "Rejected move");
                        let mut err_dyn = &err as &dyn std::error::Error;
                        while let Some(src_err) = err_dyn.source() {
                            write!(output, "{}: ", err_dyn)?;
                            err_dyn = src_err;
                        }
                        writeln!(output, "{}", err_dyn)?;
                    }
                }
            }
        }
    }

    print_state(game, output, json)?;
    let winner = game
        .winner()
        .map(|player| (player.color(), String::from(player.name())));
    match winner {
        Some((color, name)) => {
            writeln!(output, "Congratulations, {}! You won the game!", name)?;
            Ok(SessionResult::Won {
                winner: color,
                name,
            })
        }
        None => Ok(SessionResult::Abandoned),
    }
}

fn print_state(game: &Game, output: &mut impl Write, json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer(&mut *output, &GameSnapshot::of(game))?;
        writeln!(output)?;
        return Ok(());
    }
    writeln!(output, "{}", visualize_board(game.board()))?;
    writeln!(output, "Table card: {}", describe_card(game.table_card()))?;
    print_hand(game.player(Color::Blue), output)?;
    print_hand(game.player(Color::Red), output)?;
    if !game.is_over() {
        writeln!(
            output,
            "Turn {}: {} ({}) to move",
            game.turn() + 1,
            game.current_player().name(),
            game.current_player().color()
        )?;
    }
    Ok(())
}

fn print_hand(player: &Player, output: &mut impl Write) -> anyhow::Result<()> {
    write!(output, "{} ({}):", player.name(), player.color())?;
    for (idx, card) in player.hand().iter().enumerate() {
        write!(output, "  {}: {}", idx + 1, describe_card(card))?;
    }
    writeln!(output)?;
    Ok(())
}

fn describe_card(card: &Card) -> String {
    format!("{} [{}]", card, card.offsets_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use onitama::{card, Deal};

    use super::*;

    fn game() -> Game {
        Game::from_deal(
            "Ana",
            "Bo",
            Deal {
                table_card: card!("Dragon"),
                red_hand: [card!("Tiger"), card!("Crab")],
                blue_hand: [card!("Rabbit"), card!("Goose")],
            },
        )
        .unwrap()
    }

    fn run(game: &mut Game, script: &str, json: bool) -> (SessionResult, String) {
        let mut output = Vec::new();
        let result = play_session(game, Cursor::new(script), &mut output, json).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn rejected_moves_ask_again() {
        let mut game = game();
        let script = "\
Tiger 4 2 -2 0
Goose 0 4 1 1
Goose 0 4 1 0
";
        let (result, output) = run(&mut game, script, false);
        assert!(matches!(result, SessionResult::Abandoned));
        assert!(output.contains("The destination (1, 5) is off the board"));
        assert!(output.contains("does not allow moving by (1, 0)"));
        assert_eq!(game.turn(), 1);
        assert_eq!(game.current_player().color(), Color::Blue);
    }

    #[test]
    fn full_game_until_victory() {
        let mut game = game();
        // Blue's leader steps forward and is taken by a red student jumping two rows
        let script = "\
Crab 4 3 -1 0
Tiger 0 2 1 0
Goose 0 2 1 1
Tiger 3 3 -2 0
";
        let (result, output) = run(&mut game, script, false);
        match result {
            SessionResult::Won { winner, name } => {
                assert_eq!(winner, Color::Red);
                assert_eq!(name, "Ana");
            }
            SessionResult::Abandoned => panic!("Game should have been won:\n{}", output),
        }
        assert!(output.contains("Tried to play Tiger, which is not in the player's hand"));
        assert!(output.contains("Captured m at (1, 3)"));
        assert!(output.contains("Congratulations, Ana!"));
        assert!(game.check_victory(Color::Red));
        assert_eq!(game.turn(), 3);
    }

    #[test]
    fn commands_and_parse_errors() {
        let mut game = game();
        let (result, output) = run(&mut game, "help\nmoves\nTiger 4 2\nMonkey 4 2 -1 0\n3 4 2 -1 0\nquit\n", false);
        assert!(matches!(result, SessionResult::Abandoned));
        assert!(output.contains("Enter a move as"));
        assert!(output.contains("Tiger 4 2 -2 0"));
        assert!(output.contains("Crab 4 0 -1 0"));
        assert!(output.contains("four numbers, but 2 numbers were given"));
        assert!(output.contains("no card named 'Monkey'"));
        assert!(output.contains("no card number 3"));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn wrong_turn_is_reported() {
        let mut game = game();
        let (_, output) = run(&mut game, "Rabbit 0 1 1 -1\n", false);
        assert!(output.contains("does not belong to red"));
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn json_output() {
        let mut game = game();
        let (_, output) = run(&mut game, "quit\n", true);
        let first_line = output.lines().next().unwrap();
        let value: serde_json::Value = serde_json::from_str(first_line).unwrap();
        assert_eq!(value["current"], "red");
        assert_eq!(value["turn"], 0);
    }
}
