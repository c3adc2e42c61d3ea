//! Board coordinates.
//!
//! Tiles and board cells share the same notation: a column number followed
//! by a row letter, e.g. `5C`. Coordinates are kept in canonical form, so a
//! client's `05C` is reported back as `5C`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DriverError;

/// Board columns, numbered from 1.
pub const BOARD_COLUMNS: u8 = 12;
/// Board rows, lettered from `A`.
pub const BOARD_ROWS: u8 = 9;
/// Rows are lettered `A` to `Z`, so a board can't have more.
pub const MAX_BOARD_ROWS: u8 = 26;

/// A tile (or board cell) coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tile {
    number: u32,
    letter: char,
}

impl Tile {
    #[must_use]
    pub const fn new(number: u32, letter: char) -> Self {
        Self { number, letter }
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.number
    }

    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    /// Every cell of a `columns` x `rows` board, column by column. Rows past
    /// [`MAX_BOARD_ROWS`] are left out.
    ///
    /// ```
    /// use acquire_driver::core::Tile;
    ///
    /// let cells: Vec<_> = Tile::board(2, 2).map(|t| t.to_string()).collect();
    /// assert_eq!(cells, ["1A", "1B", "2A", "2B"]);
    /// ```
    pub fn board(columns: u8, rows: u8) -> impl Iterator<Item = Tile> {
        (1..=u32::from(columns)).flat_map(move |number| {
            ('A'..='Z')
                .take(usize::from(rows))
                .map(move |letter| Tile::new(number, letter))
        })
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.number, self.letter)
    }
}

impl FromStr for Tile {
    type Err = DriverError;

    fn from_str(coords: &str) -> Result<Self, Self::Err> {
        let mut chars = coords.chars();
        let letter = chars
            .next_back()
            .filter(char::is_ascii_alphabetic)
            .ok_or_else(|| DriverError::parsing(format!("not a valid tile: {coords:?}")))?;
        let prefix = chars.as_str();
        let number = prefix
            .parse::<u32>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| DriverError::parsing(format!("not a valid tile: {coords:?}")))?;

        Ok(Self::new(number, letter))
    }
}

impl TryFrom<String> for Tile {
    type Error = DriverError;

    fn try_from(coords: String) -> Result<Self, Self::Error> {
        coords.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}
