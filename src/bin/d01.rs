use std::path::Path;

use anyhow::{Context, Result};
use lib::calibration;
use lib::cli::{self, Opts};
use lib::Input;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error("{}:{}: bad input", .0.display(), .1)]
    BadInput(Box<Path>, usize),
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let input = Input::open("inputs/d01.txt")?;

    cli::run(&opts, None::<(u64, u64)>, || solve(&input))
}

/// Sum calibration values over all lines, digits-only and full scan.
fn solve(input: &Input) -> Result<(u64, u64)> {
    let mut part1 = 0u64;
    let mut part2 = 0u64;

    for (n, line) in input.lines() {
        part1 += u64::from(
            calibration::extract_digits(line)
                .context(Error::BadInput(input.path().into(), n))?,
        );

        part2 += u64::from(
            calibration::extract(line).context(Error::BadInput(input.path().into(), n))?,
        );
    }

    Ok((part1, part2))
}
