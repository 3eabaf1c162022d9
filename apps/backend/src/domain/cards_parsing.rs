//! Text forms for colors and cards.
//!
//! Cards print as color letter plus one-based rank (`R1` is the lowest red
//! card), the notation players use at the table.

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Color};
use crate::errors::domain::DomainError;

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, u16::from(self.rank) + 1)
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "R" => Ok(Color::Red),
            "Y" => Ok(Color::Yellow),
            "G" => Ok(Color::Green),
            "W" => Ok(Color::White),
            "B" => Ok(Color::Blue),
            other => Err(DomainError::validation(format!("unknown color '{other}'"))),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let color = chars
            .next()
            .ok_or_else(|| DomainError::validation("empty card"))?
            .to_string()
            .parse::<Color>()?;
        let rank: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| DomainError::validation(format!("bad rank in card '{s}'")))?;
        if rank == 0 {
            return Err(DomainError::validation(format!(
                "ranks start at 1 in card '{s}'"
            )));
        }
        Ok(Card::new(color, rank - 1))
    }
}
