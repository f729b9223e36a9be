// Simple command-line application to play chess on the standard board

use gridchess::{Board, Color, Coord, PrettyStyle};
use std::io::{self, BufRead, Write};

fn parse_move(s: &str) -> Result<(Coord, Coord), String> {
    let mut iter = s.split_whitespace();
    let (Some(src), Some(dst), None) = (iter.next(), iter.next(), iter.next()) else {
        return Err("expected two cells, like \"6,4 4,4\"".to_string());
    };
    let src = src.parse::<Coord>().map_err(|e| e.to_string())?;
    let dst = dst.parse::<Coord>().map_err(|e| e.to_string())?;
    Ok((src, dst))
}

fn main() {
    let mut stdin = io::stdin().lock();

    let mut board = Board::initial();

    loop {
        println!("{}", board.pretty(PrettyStyle::Ascii));
        let side = match board.side() {
            Color::White => "White",
            Color::Black => "Black",
        };
        if board.is_king_in_check(board.side()) {
            println!("{} is in check", side);
        }
        print!("{} move (\"row,column row,column\", empty line to quit): ", side);
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }
        let s = s.trim();
        if s.is_empty() {
            break;
        }

        let (src, dst) = match parse_move(s) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad input: {}", e);
                println!();
                continue;
            }
        };

        match board.try_apply_move(src, dst) {
            Ok(report) => {
                if let Some(captured) = report.captured {
                    println!("Captured {} on {}", captured.glyph(), captured.coord);
                }
            }
            Err(e) => println!("Illegal move: {}", e),
        }

        println!();
    }
}
