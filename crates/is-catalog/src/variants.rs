//! Print variant tables and price resolution.
//!
//! A print's price depends only on its size and glass finish. Each size row
//! stores distinct standard and anti-reflective prices; frame colour is
//! cosmetic and never changes the price.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::CatalogError;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PrintSize {
    pub id: &'static str,
    pub label: &'static str,
    pub dimensions: &'static str,
    pub base_price: u64,
    pub anti_reflection_price: u64,
}

pub static PRINT_SIZES: &[PrintSize] = &[
    PrintSize {
        id: "a3",
        label: "29.7 × 42 cm",
        dimensions: "29.7x42",
        base_price: 29,
        anti_reflection_price: 34,
    },
    PrintSize {
        id: "a2",
        label: "42 × 59.4 cm",
        dimensions: "42x59.4",
        base_price: 44,
        anti_reflection_price: 49,
    },
];

pub const DEFAULT_PRINT_SIZE: &str = "a3";

pub fn print_size(id: &str) -> Result<&'static PrintSize, CatalogError> {
    PRINT_SIZES
        .iter()
        .find(|s| s.id.eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| CatalogError::UnknownSize(id.to_owned()))
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GlassFinish {
    #[default]
    Standard,
    AntiReflection,
}

impl GlassFinish {
    pub const ALL: [GlassFinish; 2] = [GlassFinish::Standard, GlassFinish::AntiReflection];

    pub fn id(self) -> &'static str {
        match self {
            GlassFinish::Standard => "standard",
            GlassFinish::AntiReflection => "anti-reflection",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GlassFinish::Standard => "Standard Glass",
            GlassFinish::AntiReflection => "Anti-Reflection Glass",
        }
    }

    /// Short name used in inquiry messages.
    pub fn short_label(self) -> &'static str {
        match self {
            GlassFinish::Standard => "Standard",
            GlassFinish::AntiReflection => "Anti-Reflection",
        }
    }

    /// Surcharge advertised next to the option. Display only; prices come
    /// from the size table.
    pub fn listed_modifier(self) -> u64 {
        match self {
            GlassFinish::Standard => 0,
            GlassFinish::AntiReflection => 5,
        }
    }
}

impl FromStr for GlassFinish {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "standard" => Ok(GlassFinish::Standard),
            "anti-reflection" | "anti_reflection" | "antireflection" => {
                Ok(GlassFinish::AntiReflection)
            }
            _ => Err(CatalogError::UnknownGlass(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub enum FrameColor {
    #[default]
    Black,
    White,
    Walnut,
    NaturalOak,
}

impl FrameColor {
    pub const ALL: [FrameColor; 4] = [
        FrameColor::Black,
        FrameColor::White,
        FrameColor::Walnut,
        FrameColor::NaturalOak,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FrameColor::Black => "Black",
            FrameColor::White => "White",
            FrameColor::Walnut => "Walnut",
            FrameColor::NaturalOak => "Natural Oak",
        }
    }
}

impl fmt::Display for FrameColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FrameColor {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.is_empty() {
            return Ok(FrameColor::default());
        }
        let normalised = wanted.replace(['-', '_'], " ");
        FrameColor::ALL
            .into_iter()
            .find(|frame| frame.label().eq_ignore_ascii_case(&normalised))
            .ok_or_else(|| CatalogError::UnknownFrame(s.to_owned()))
    }
}

/// Resolve the price of a print from the size table.
pub fn print_price(size_id: &str, glass: GlassFinish) -> Result<u64, CatalogError> {
    let size = print_size(size_id)?;
    Ok(match glass {
        GlassFinish::Standard => size.base_price,
        GlassFinish::AntiReflection => size.anti_reflection_price,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSelection {
    pub size: &'static PrintSize,
    pub glass: GlassFinish,
    pub frame: FrameColor,
}

impl Default for PrintSelection {
    fn default() -> Self {
        Self {
            size: &PRINT_SIZES[0],
            glass: GlassFinish::Standard,
            frame: FrameColor::Black,
        }
    }
}

impl PrintSelection {
    pub fn parse(size: &str, glass: &str, frame: &str) -> Result<Self, CatalogError> {
        let size = if size.trim().is_empty() {
            print_size(DEFAULT_PRINT_SIZE)?
        } else {
            print_size(size)?
        };
        Ok(Self {
            size,
            glass: glass.parse()?,
            frame: frame.parse()?,
        })
    }

    pub fn price(&self) -> u64 {
        match self.glass {
            GlassFinish::Standard => self.size.base_price,
            GlassFinish::AntiReflection => self.size.anti_reflection_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_comes_from_the_size_table() {
        assert_eq!(print_price("a3", GlassFinish::Standard).unwrap(), 29);
        assert_eq!(print_price("a3", GlassFinish::AntiReflection).unwrap(), 34);
        assert_eq!(print_price("A2", GlassFinish::Standard).unwrap(), 44);
        assert_eq!(print_price("a2", GlassFinish::AntiReflection).unwrap(), 49);
    }

    #[test]
    fn unknown_size_is_an_error() {
        assert!(matches!(
            print_price("a0", GlassFinish::Standard),
            Err(CatalogError::UnknownSize(_))
        ));
    }

    #[test]
    fn frame_never_changes_price() {
        let prices: Vec<u64> = FrameColor::ALL
            .into_iter()
            .map(|frame| {
                PrintSelection {
                    frame,
                    ..PrintSelection::parse("a2", "anti-reflection", "").unwrap()
                }
                .price()
            })
            .collect();
        assert!(prices.iter().all(|p| *p == 49));
    }

    #[test]
    fn selection_parses_labels_and_defaults() {
        let selection = PrintSelection::parse("", "", "natural-oak").unwrap();
        assert_eq!(selection.size.id, "a3");
        assert_eq!(selection.glass, GlassFinish::Standard);
        assert_eq!(selection.frame, FrameColor::NaturalOak);
        assert!(PrintSelection::parse("a3", "frosted", "").is_err());
        assert!(PrintSelection::parse("a3", "", "gold").is_err());
    }
}
