use std::path::Path;

use anyhow::{Context, Result};
use lib::cli::{self, Opts};
use lib::cubes::Game;
use lib::Input;
use thiserror::Error;

/// Cube totals the bag is known to hold in part 1.
const BAG: (u32, u32, u32) = (12, 13, 14);

#[derive(Debug, Error)]
enum Error {
    #[error("{}:{}: bad game", .0.display(), .1)]
    BadGame(Box<Path>, usize),
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let input = Input::open("inputs/d02.txt")?;

    cli::run(&opts, None::<(u64, u64)>, || solve(&input))
}

/// Sum ids of possible games and powers of minimal cube sets.
fn solve(input: &Input) -> Result<(u64, u64)> {
    let (red, green, blue) = BAG;

    let mut part1 = 0u64;
    let mut part2 = 0u64;

    for (n, line) in input.lines() {
        let game = Game::parse(line).context(Error::BadGame(input.path().into(), n))?;

        if game.possible_with(red, green, blue) {
            part1 += u64::from(game.id);
        }

        part2 += u64::from(game.min_set().power());
    }

    Ok((part1, part2))
}
