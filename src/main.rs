use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use broadside::{
    init_logging, BoardView, GameError, GameSession, CellState, Coord, Phase, ShipClass,
    BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Volley Battleship against the computer", long_about = None)]
struct Cli {
    /// Fix the RNG seed for a reproducible game (e.g., --seed 12345)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut session = match cli.seed {
        Some(seed) => GameSession::from_seed(seed),
        None => GameSession::new(),
    };

    println!("Volley Battleship. Type `help` for the command list.");
    print_boards(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(&mut session, line.trim()) {
            break;
        }
        for notice in session.take_notices() {
            println!("{}", notice);
        }
        if session.phase() == Phase::End {
            print_boards(&session);
            println!("Game over.");
            break;
        }
    }
    Ok(())
}

/// Run one console command. Returns `false` when the player quits.
fn dispatch(session: &mut GameSession, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(word) => word.to_ascii_lowercase(),
        None => return true,
    };

    let outcome: Result<(), GameError> = match command.as_str() {
        "quit" | "exit" => return false,
        "help" => {
            print_help();
            Ok(())
        }
        "show" => {
            print_boards(session);
            Ok(())
        }
        "rotate" => {
            session.toggle_orientation();
            Ok(())
        }
        "start" => session.start_game(),
        "fire" => {
            let res = session.fire();
            if res.is_ok() {
                print_boards(session);
            }
            res
        }
        "place" => match (parts.next().and_then(parse_class), parts.next()) {
            (Some(class), Some(raw)) => match parse_coord(raw) {
                Some(anchor) => {
                    let orientation = session.orientation();
                    session.place_ship(class, anchor, orientation)
                }
                None => {
                    println!("Invalid coordinate: {}", raw);
                    Ok(())
                }
            },
            (Some(class), None) => session.request_placement(class),
            _ => {
                println!("Which ship? (corvette, submarine, frigate, destroyer)");
                Ok(())
            }
        },
        "aim" => match (parts.next().and_then(parse_class), parts.next()) {
            (Some(class), Some(raw)) => match parse_coord(raw) {
                Some(anchor) => session.select_targets(class, anchor),
                None => {
                    println!("Invalid coordinate: {}", raw);
                    Ok(())
                }
            },
            (Some(class), None) => session.request_targeting(class),
            _ => {
                println!("Which ship? (corvette, submarine, frigate, destroyer)");
                Ok(())
            }
        },
        // A bare coordinate answers an outstanding prompt.
        _ => match parse_coord(&command) {
            Some(coord) => match session.phase() {
                Phase::Placing(class) => {
                    let orientation = session.orientation();
                    session.place_ship(class, coord, orientation)
                }
                Phase::SelectingTargets(class) => session.select_targets(class, coord),
                _ => {
                    println!("Nothing to do with {} right now.", command);
                    Ok(())
                }
            },
            None => {
                println!("Unknown command: {} (try `help`)", command);
                Ok(())
            }
        },
    };

    if let Err(err) = outcome {
        println!("{}", err);
    }
    true
}

fn print_help() {
    println!("Commands:");
    println!("  place <ship> [A5]   place a ship (bare `place <ship>` prompts for a cell)");
    println!("  rotate              toggle placement orientation");
    println!("  start               start the game once all four ships are placed");
    println!("  aim <ship> [A5]     select the targets for a ship");
    println!("  fire                fire the volley once every ship has aimed");
    println!("  show                redraw both boards");
    println!("  quit                leave the game");
    println!("Ships: corvette (2), submarine (3), frigate (4), destroyer (5).");
    println!("Answer a prompt by typing just a coordinate, e.g. `B7`.");
}

fn parse_class(input: &str) -> Option<ShipClass> {
    match input.to_ascii_lowercase().as_str() {
        "corvette" | "c" => Some(ShipClass::Corvette),
        "submarine" | "s" => Some(ShipClass::Submarine),
        "frigate" | "f" => Some(ShipClass::Frigate),
        "destroyer" | "d" => Some(ShipClass::Destroyer),
        _ => None,
    }
}

fn parse_coord(input: &str) -> Option<Coord> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    if row == 0 || row > BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

fn coord_to_string(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

fn print_boards(session: &GameSession) {
    println!("\nEnemy waters:");
    print_view(&session.computer_view(), false);
    println!("\nYour fleet:");
    print_view(&session.human_view(), true);
    let last = Coord::new(BOARD_SIZE - 1, BOARD_SIZE - 1);
    println!(
        "Cells run A1..{}. Ships alive - you: {}, computer: {}.",
        coord_to_string(last),
        session.human_alive_ships(),
        session.computer_alive_ships()
    );
}

fn print_view(view: &BoardView, reveal: bool) {
    print!("   ");
    for c in 0..BOARD_SIZE {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!();
    for r in 0..BOARD_SIZE {
        print!("{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let cell = view.get(r, c).copied().unwrap_or_default();
            let ch = if cell.aimed {
                '*'
            } else if cell.hit {
                if cell.state == CellState::Ship {
                    'X'
                } else {
                    'o'
                }
            } else if reveal && cell.state == CellState::Ship {
                'S'
            } else {
                '.'
            };
            print!(" {}", ch);
        }
        println!();
    }
}
