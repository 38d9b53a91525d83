//! Cube game model for day 2.

use anyhow::{bail, Context, Result};

/// A single reveal of cubes from the bag. Colors not shown are zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Draw {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Draw {
    /// The power of a set of cubes.
    pub fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

/// One game: its id and the draws revealed from the bag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Draw>,
}

impl Game {
    /// Parse a `Game <id>: <draw>; <draw>; ...` line.
    pub fn parse(line: &str) -> Result<Self> {
        let (game, rest) = line.split_once(": ").context("missing `: `")?;
        let (_, id) = game.split_once(' ').context("bad game")?;
        let id = id.parse().context("bad game id")?;

        let mut draws = Vec::new();

        for part in rest.split("; ") {
            let mut draw = Draw::default();

            for pull in part.split(", ") {
                let (count, color) = pull.split_once(' ').context("bad pull")?;
                let count = count.parse().context("bad count")?;

                match color {
                    "red" => draw.red = count,
                    "green" => draw.green = count,
                    "blue" => draw.blue = count,
                    other => bail!("unknown color `{other}`"),
                }
            }

            draws.push(draw);
        }

        Ok(Self { id, draws })
    }

    /// Test if the game is possible with a bag holding the given cube totals.
    pub fn possible_with(&self, red: u32, green: u32, blue: u32) -> bool {
        self.draws
            .iter()
            .all(|d| d.red <= red && d.green <= green && d.blue <= blue)
    }

    /// The smallest bag that could have produced every draw.
    pub fn min_set(&self) -> Draw {
        let mut set = Draw::default();

        for d in &self.draws {
            set.red = set.red.max(d.red);
            set.green = set.green.max(d.green);
            set.blue = set.blue.max(d.blue);
        }

        set
    }
}

#[cfg(test)]
mod tests {
    use super::{Draw, Game};

    const SAMPLE: &[&str] = &[
        "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green",
        "Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue",
        "Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red",
        "Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red",
        "Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green",
    ];

    #[test]
    fn parse() {
        let game = Game::parse(SAMPLE[0]).unwrap();

        assert_eq!(game.id, 1);
        assert_eq!(
            game.draws,
            [
                Draw { red: 4, green: 0, blue: 3 },
                Draw { red: 1, green: 2, blue: 6 },
                Draw { red: 0, green: 2, blue: 0 },
            ]
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Game::parse("").is_err());
        assert!(Game::parse("Game 1: 3 mauve").is_err());
        assert!(Game::parse("Game x: 3 blue").is_err());
    }

    #[test]
    fn possible_games() {
        let ids = SAMPLE
            .iter()
            .map(|line| Game::parse(line).unwrap())
            .filter(|game| game.possible_with(12, 13, 14))
            .map(|game| game.id)
            .sum::<u32>();

        assert_eq!(ids, 8);
    }

    #[test]
    fn min_set_power() {
        let game = Game::parse(SAMPLE[0]).unwrap();
        assert_eq!(game.min_set(), Draw { red: 4, green: 2, blue: 6 });
        assert_eq!(game.min_set().power(), 48);

        let total = SAMPLE
            .iter()
            .map(|line| Game::parse(line).unwrap().min_set().power())
            .sum::<u32>();

        assert_eq!(total, 2286);
    }
}
