use std::io;

use ansi_term::Style;
use anyhow::{Context, Result};

use minefield::{
    board::BoardPoint,
    game::{FlagOutcome, GameStatus, Minefield, MinefieldOpts, RevealOutcome},
};

fn underline(input: &str) -> ansi_term::ANSIGenericString<str> {
    Style::new().underline().paint(input)
}

fn render(game: &Minefield) {
    let header = (0..game.cols()).fold(String::new(), |acc, x| acc + &format!("|{}", x / 10));
    println!("{}", &format!("XX{}|", header));
    let header = (0..game.cols()).fold(String::new(), |acc, x| acc + &format!("|{}", x % 10));
    println!("{}", underline(&format!("XX{}|", header)));
    for (r_num, row) in game.player_board().rows_iter().enumerate() {
        print!("{}", underline(&format!("{:0>2}", r_num)));
        for item in row.iter() {
            print!("{}", underline(&format!("|{}", item)));
        }
        print!("{}", underline("|\n"));
    }
    println!("Mines remaining: {}", game.mines_remaining());
}

fn main() -> Result<()> {
    let flags = xflags::parse_or_exit! {
        optional -r, --rows rows: usize
        optional -c, --cols cols: usize
        optional -m, --mines mines: usize
    };
    let opts = MinefieldOpts {
        rows: flags.rows.unwrap_or(9),
        cols: flags.cols.unwrap_or(9),
        num_mines: flags.mines.unwrap_or(10),
    };
    let mut game = Minefield::new(opts).context("could not set up the board")?;
    while !game.is_over() {
        render(&game);
        println!("Input action & 2 numbers `{{c|f}} {{row}} {{col}}` as play:");
        let mut play = String::new();
        io::stdin()
            .read_line(&mut play)
            .context("failed to read move")?;
        let play: Vec<&str> = play.trim_end().split(' ').collect();
        if play.len() != 3 {
            println!("Bad number of inputs - try again.");
            continue;
        }
        let row = play[1].parse();
        let Ok(row) = row else {
            println!("Invalid row - try again: {:?}", row);
            continue;
        };
        let col = play[2].parse();
        let Ok(col) = col else {
            println!("Invalid col - try again: {:?}", col);
            continue;
        };
        let point = BoardPoint { row, col };

        match play[0] {
            "c" => match game.reveal(point) {
                Ok(RevealOutcome::Continued(cells)) if cells.is_empty() => {
                    println!("Nothing to reveal there")
                }
                Ok(RevealOutcome::Continued(_)) => println!("Success"),
                Ok(RevealOutcome::Lost(_)) | Ok(RevealOutcome::Won(_)) => {}
                Err(e) => println!("Invalid move - try again: {e}"),
            },
            "f" => match game.toggle_flag(point) {
                Ok(FlagOutcome::Flagged) => println!("Flagged"),
                Ok(FlagOutcome::Unflagged) => println!("Unflagged"),
                Ok(FlagOutcome::Rejected) => println!("Can't flag that"),
                Err(e) => println!("Invalid move - try again: {e}"),
            },
            _ => println!("Bad action - try again"),
        }
    }
    render(&game);
    match game.status() {
        GameStatus::Won => println!("Congratulations -- you won!"),
        GameStatus::Lost => println!("KABOOM! You lose."),
        GameStatus::Playing => {}
    }
    Ok(())
}
