//! Hot-seat terminal driver: two players share one board and type squares.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use plum_rules::chess_errors::{ChessError, ChessResult};
use plum_rules::game::chess_game::ChessGame;
use plum_rules::game::selection::{Selection, SelectionOutcome};
use plum_rules::game_state::chess_types::*;
use plum_rules::utils::render_game_state::{render_board, render_pieces, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "plum_rules", version, about = "Two-player chess in the terminal")]
struct Args {
    /// Log filter used when RUST_LOG is unset (e.g. `debug`, `plum_rules=trace`).
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Draw pieces as letters instead of Unicode glyphs.
    #[arg(long)]
    ascii: bool,

    /// Hide file and rank labels.
    #[arg(long)]
    no_coordinates: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Move(Square, Square),
    Select(Square),
    Promote(PromotionChoice),
    Undo,
    New,
    Moves,
    Captured,
    Help,
    Quit,
}

fn parse_command(line: &str) -> ChessResult<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let lowered: Vec<String> = words.iter().map(|word| word.to_ascii_lowercase()).collect();
    let lowered: Vec<&str> = lowered.iter().map(String::as_str).collect();

    match lowered.as_slice() {
        ["undo"] => Ok(Command::Undo),
        ["new"] => Ok(Command::New),
        ["moves"] | ["history"] => Ok(Command::Moves),
        ["captured"] => Ok(Command::Captured),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["promote", choice] => {
            let mut letters = choice.chars();
            match (letters.next(), letters.next()) {
                (Some(letter), None) => Ok(Command::Promote(PromotionChoice::try_from(letter)?)),
                _ => Err(ChessError::UnknownCommand(line.trim().to_owned())),
            }
        }
        [from, to] => Ok(Command::Move(from.parse()?, to.parse()?)),
        [square] => Ok(Command::Select(square.parse()?)),
        _ => Err(ChessError::UnknownCommand(line.trim().to_owned())),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  e2 e4            move a piece");
    println!("  e2               select a square (select again to move)");
    println!("  promote q|r|b|n  choose the piece for a waiting pawn");
    println!("  undo             take back the last move");
    println!("  new              start over");
    println!("  moves            show the move list");
    println!("  captured         show captured pieces");
    println!("  quit             leave");
}

fn print_position(game: &ChessGame, options: RenderOptions) {
    println!("{}", render_board(game.board(), options));

    let side = game.current_player();
    match game.status() {
        GameStatus::Checkmate => {
            if let Some(winner) = game.winner() {
                println!("Checkmate! {winner} wins.");
            }
        }
        GameStatus::Stalemate => println!("Stalemate. The game is drawn."),
        GameStatus::Check => println!("{side} to move, in check."),
        GameStatus::InProgress => println!("{side} to move."),
    }
    if let Some(pending) = game.pending_promotion() {
        println!(
            "{} pawn on {} promotes: type `promote q|r|b|n`.",
            pending.color, pending.square
        );
    }
}

fn report_move(result: MoveResult) -> bool {
    if !result.committed {
        println!("That move is not allowed.");
    }
    result.committed
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = RenderOptions {
        ascii: args.ascii,
        coordinates: !args.no_coordinates,
    };

    let mut game = ChessGame::new();
    let mut selection = Selection::new();
    print_position(&game, options);

    let stdin = io::stdin();
    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        if input.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&input) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        debug!(?command, "command");

        let changed = match command {
            Command::Move(from, to) => {
                selection.clear();
                report_move(game.execute_move(from, to))
            }
            Command::Select(square) => match selection.select_square(&mut game, square) {
                SelectionOutcome::Selected { square, moves } => {
                    if moves.is_empty() {
                        println!("{square}: no moves");
                    } else {
                        let names: Vec<String> = moves.iter().map(Square::to_string).collect();
                        println!("{square}: {}", names.join(" "));
                    }
                    false
                }
                SelectionOutcome::Moved(result) => report_move(result),
                SelectionOutcome::Cleared => {
                    println!("Selection cleared.");
                    false
                }
                SelectionOutcome::Ignored => {
                    println!("Nothing to select on {square}.");
                    false
                }
            },
            Command::Promote(choice) => match game.pending_promotion() {
                Some(pending) => match game.resolve_promotion(pending.square, choice) {
                    Ok(_) => true,
                    Err(err) => {
                        println!("{err}");
                        false
                    }
                },
                None => {
                    println!("{}", ChessError::NoPromotionPending);
                    false
                }
            },
            Command::Undo => {
                selection.clear();
                let undone = game.undo();
                if !undone {
                    println!("Nothing to undo.");
                }
                undone
            }
            Command::New => {
                selection.clear();
                game.reset();
                true
            }
            Command::Moves => {
                for entry in game.move_list() {
                    println!("{entry}");
                }
                false
            }
            Command::Captured => {
                for captor in [Color::White, Color::Black] {
                    let pieces = render_pieces(game.captured().by(captor), options.ascii);
                    println!("{captor}: {pieces}");
                }
                false
            }
            Command::Help => {
                print_help();
                false
            }
            Command::Quit => break,
        };

        if changed {
            print_position(&game, options);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_selections() {
        assert_eq!(
            parse_command("e2 e4\n"),
            Ok(Command::Move(Square::new(6, 4), Square::new(4, 4)))
        );
        assert_eq!(parse_command("  G1 "), Ok(Command::Select(Square::new(7, 6))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(parse_command("undo"), Ok(Command::Undo));
        assert_eq!(parse_command("QUIT"), Ok(Command::Quit));
        assert_eq!(parse_command("promote n"), Ok(Command::Promote(PromotionChoice::Knight)));
    }

    #[test]
    fn reports_malformed_input() {
        assert_eq!(
            parse_command("e9"),
            Err(ChessError::InvalidSquareName("e9".to_owned()))
        );
        assert_eq!(
            parse_command("promote k"),
            Err(ChessError::InvalidPromotionChoice('k'))
        );
        assert_eq!(
            parse_command("castle long now"),
            Err(ChessError::UnknownCommand("castle long now".to_owned()))
        );
    }
}
