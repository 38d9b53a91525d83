//! Input file handling.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// A puzzle input read once into memory.
#[derive(Debug)]
pub struct Input {
    path: Box<Path>,
    data: String,
}

impl Input {
    /// Construct an input from already-loaded data, useful for tests.
    pub fn new<P>(path: P, data: String) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().into(),
            data,
        }
    }

    /// Read the input file at the given path.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();

        let data = fs::read_to_string(path)
            .with_context(|| anyhow!("{path}", path = path.display()))?;

        Ok(Self::new(path, data))
    }

    /// The path the input was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over non-blank lines with their 1-based line numbers.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.data
            .lines()
            .enumerate()
            .filter_map(|(n, line)| (!line.trim().is_empty()).then_some((n + 1, line)))
    }
}

#[cfg(test)]
mod tests {
    use super::Input;

    #[test]
    fn line_numbers_skip_blanks() {
        let input = Input::new("test.txt", String::from("a1\n\nb2\n"));
        let lines = input.lines().collect::<Vec<_>>();
        assert_eq!(lines, [(1, "a1"), (3, "b2")]);
    }

    #[test]
    fn missing_file_names_path() {
        let error = Input::open("inputs/does-not-exist.txt").unwrap_err();
        assert!(format!("{error:#}").contains("inputs/does-not-exist.txt"));
    }
}
