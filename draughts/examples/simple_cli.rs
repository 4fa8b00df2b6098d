// Simple command-line application to play draughts. Both players enter
// squares (like "b4") by hand: first to pick a piece, then to drop it on
// one of its destinations.

use draughts::{Action, Color, Coord, Game, PrettyStyle};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn side_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn main() {
    let mut stdin = io::stdin().lock();
    let mut game = Game::new();

    loop {
        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        if let Some(winner) = game.winner() {
            println!("{} wins!", side_name(winner));
            break;
        }

        match game.board().selected_piece() {
            Some(piece) => {
                let dests: Vec<_> = game
                    .board()
                    .selected_moves()
                    .unwrap()
                    .iter()
                    .map(|m| m.dst().to_string())
                    .collect();
                print!(
                    "{} moves {} to [{}] > ",
                    side_name(game.board().side()),
                    piece.pos(),
                    dests.join(", ")
                );
            }
            None => print!("{} picks a square > ", side_name(game.board().side())),
        }
        io::stdout().flush().unwrap();

        let mut line = String::new();
        if stdin.read_line(&mut line).unwrap() == 0 {
            break;
        }
        let sq = match Coord::from_str(line.trim()) {
            Ok(sq) => sq,
            Err(err) => {
                println!("bad square: {}", err);
                println!();
                continue;
            }
        };

        let action = game.on_board_action(sq.file().index(), sq.rank().index());
        match action {
            Action::Ignored => println!("nothing there"),
            Action::Selected(_) => println!("selected {}", sq),
            Action::Deselected => println!("selection dropped"),
            Action::Moved { mv, turn_over } => {
                println!("played {}{}", mv, if turn_over { "" } else { ", keep jumping" });
            }
        }
        println!();
    }
}
