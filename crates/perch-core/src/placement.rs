//! Sides, alignments, and placement tokens.
//!
//! A placement token is either a bare side (`"top"`, centered on the cross axis)
//! or a `side-alignment` compound such as `"bottom-end"`.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::take_while1,
    character::complete::char,
    combinator::{all_consuming, opt},
    sequence::{pair, preceded},
    IResult,
};

use crate::errors::PlacementError;

/// Edge of the reference element the floating element is placed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// The side across the reference element.
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// True when the main axis is vertical (top/bottom).
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|side| side.as_str() == word)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position along the cross axis relative to the reference element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Alignment {
    /// Align with the reference's left (or top) edge
    Start,
    /// Center on the reference
    #[default]
    Center,
    /// Align with the reference's right (or bottom) edge
    End,
}

impl Alignment {
    pub const ALL: [Alignment; 3] = [Alignment::Start, Alignment::Center, Alignment::End];

    /// Start and end swap; center has no opposite and maps to itself.
    pub fn opposite(self) -> Self {
        match self {
            Alignment::Start => Alignment::End,
            Alignment::Center => Alignment::Center,
            Alignment::End => Alignment::Start,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        }
    }

    fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|alignment| alignment.as_str() == word)
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A side plus an alignment. Twelve combinations in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Placement {
    pub side: Side,
    pub alignment: Alignment,
}

impl Placement {
    /// Every placement, grouped by side.
    pub const ALL: [Placement; 12] = [
        Placement::new(Side::Top, Alignment::Start),
        Placement::new(Side::Top, Alignment::Center),
        Placement::new(Side::Top, Alignment::End),
        Placement::new(Side::Bottom, Alignment::Start),
        Placement::new(Side::Bottom, Alignment::Center),
        Placement::new(Side::Bottom, Alignment::End),
        Placement::new(Side::Left, Alignment::Start),
        Placement::new(Side::Left, Alignment::Center),
        Placement::new(Side::Left, Alignment::End),
        Placement::new(Side::Right, Alignment::Start),
        Placement::new(Side::Right, Alignment::Center),
        Placement::new(Side::Right, Alignment::End),
    ];

    pub const fn new(side: Side, alignment: Alignment) -> Self {
        Self { side, alignment }
    }

    /// A centered placement on the given side.
    pub const fn centered(side: Side) -> Self {
        Self::new(side, Alignment::Center)
    }

    /// Parse a placement token such as `"top"` or `"left-end"`.
    pub fn parse(token: &str) -> Result<Self, PlacementError> {
        let trimmed = token.trim();
        let (_, (side_word, alignment_word)) =
            split_token(trimmed).map_err(|_| PlacementError::Malformed {
                token: token.to_string(),
            })?;

        let side = Side::from_keyword(side_word).ok_or_else(|| PlacementError::UnknownSide {
            token: token.to_string(),
            found: side_word.to_string(),
        })?;

        let alignment = match alignment_word {
            None => Alignment::Center,
            Some(word) => {
                Alignment::from_keyword(word).ok_or_else(|| PlacementError::UnknownAlignment {
                    token: token.to_string(),
                    found: word.to_string(),
                })?
            }
        };

        Ok(Self::new(side, alignment))
    }

    /// Same alignment on the other side of the reference.
    pub fn flip_side(self) -> Self {
        Self::new(self.side.opposite(), self.alignment)
    }

    /// Same side with start and end swapped.
    pub fn flip_alignment(self) -> Self {
        Self::new(self.side, self.alignment.opposite())
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::new(Side::Bottom, Alignment::Start)
    }
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphabetic())(input)
}

/// Split `side` or `side-alignment` into its words.
fn split_token(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    all_consuming(pair(word, opt(preceded(char('-'), word))))(input)
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.alignment {
            Alignment::Center => write!(f, "{}", self.side),
            alignment => write!(f, "{}-{}", self.side, alignment),
        }
    }
}

impl FromStr for Placement {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Placement {
    type Error = PlacementError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Placement> for String {
    fn from(placement: Placement) -> Self {
        placement.to_string()
    }
}
