use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::ids::{CategoryId, SignId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sign {kind}: {raw}")]
pub struct ParseSignAttributeError {
    kind: &'static str,
    raw: String,
}

/// Outline of a sign plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignShape {
    Circle,
    Triangle,
    Square,
    Rectangle,
    Octagon,
    Diamond,
}

impl SignShape {
    pub const ALL: [SignShape; 6] = [
        SignShape::Circle,
        SignShape::Triangle,
        SignShape::Square,
        SignShape::Rectangle,
        SignShape::Octagon,
        SignShape::Diamond,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SignShape::Circle => "circle",
            SignShape::Triangle => "triangle",
            SignShape::Square => "square",
            SignShape::Rectangle => "rectangle",
            SignShape::Octagon => "octagon",
            SignShape::Diamond => "diamond",
        }
    }
}

/// Dominant plate color of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignColor {
    Red,
    Blue,
    Yellow,
    Green,
    White,
    Orange,
    Black,
}

impl SignColor {
    pub const ALL: [SignColor; 7] = [
        SignColor::Red,
        SignColor::Blue,
        SignColor::Yellow,
        SignColor::Green,
        SignColor::White,
        SignColor::Orange,
        SignColor::Black,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SignColor::Red => "red",
            SignColor::Blue => "blue",
            SignColor::Yellow => "yellow",
            SignColor::Green => "green",
            SignColor::White => "white",
            SignColor::Orange => "orange",
            SignColor::Black => "black",
        }
    }
}

impl fmt::Display for SignShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for SignColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for SignShape {
    type Err = ParseSignAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == needle)
            .ok_or_else(|| ParseSignAttributeError {
                kind: "shape",
                raw: s.to_owned(),
            })
    }
}

impl FromStr for SignColor {
    type Err = ParseSignAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|color| color.as_str() == needle)
            .ok_or_else(|| ParseSignAttributeError {
                kind: "color",
                raw: s.to_owned(),
            })
    }
}

/// A group of related signs (warning, regulatory, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCategory {
    pub id: CategoryId,
    pub name: String,
    pub urdu_name: Option<String>,
    pub description: String,
    /// Theme color name used by front-ends for badges.
    pub color: String,
    pub icon: String,
}

/// An illustrated traffic sign in the reference catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSign {
    pub id: SignId,
    pub name: String,
    pub urdu_name: Option<String>,
    pub description: String,
    pub significance: String,
    pub category_id: CategoryId,
    pub image_url: String,
    pub shape: SignShape,
    pub color: SignColor,
    pub keywords: Vec<String>,
}

impl TrafficSign {
    /// Case-insensitive substring match over names, description and keywords.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .urdu_name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(needle))
            || self.description.to_lowercase().contains(needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(needle))
    }
}

/// Criteria for narrowing the sign catalog. Every present field must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub category: Option<CategoryId>,
    pub shape: Option<SignShape>,
    pub color: Option<SignColor>,
    pub query: Option<String>,
}

impl SearchFilters {
    #[must_use]
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: SignShape) -> Self {
        self.shape = Some(shape);
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: SignColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn matches(&self, sign: &TrafficSign) -> bool {
        if self.category.as_ref().is_some_and(|c| *c != sign.category_id) {
            return false;
        }
        if self.shape.is_some_and(|s| s != sign.shape) {
            return false;
        }
        if self.color.is_some_and(|c| c != sign.color) {
            return false;
        }
        match self.query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => sign.matches_query(&q.to_lowercase()),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop_sign() -> TrafficSign {
        TrafficSign {
            id: SignId::new("regulatory-stop"),
            name: "Stop Sign".into(),
            urdu_name: Some("رک جائیں".into()),
            description: "Requires drivers to come to a complete stop".into(),
            significance: "Must stop completely".into(),
            category_id: CategoryId::new("regulatory"),
            image_url: String::new(),
            shape: SignShape::Octagon,
            color: SignColor::Red,
            keywords: vec!["halt".into(), "توقف".into()],
        }
    }

    #[test]
    fn shape_and_color_parse_case_insensitively() {
        assert_eq!("Octagon".parse::<SignShape>().unwrap(), SignShape::Octagon);
        assert_eq!(" RED ".parse::<SignColor>().unwrap(), SignColor::Red);
        assert!("hexagon".parse::<SignShape>().is_err());
    }

    #[test]
    fn query_matches_keywords_and_urdu() {
        let sign = stop_sign();
        assert!(sign.matches_query("halt"));
        assert!(sign.matches_query("توقف"));
        assert!(sign.matches_query("complete"));
        assert!(!sign.matches_query("parking"));
    }

    #[test]
    fn filters_combine_with_and() {
        let sign = stop_sign();
        let filters = SearchFilters::default()
            .with_category(CategoryId::new("regulatory"))
            .with_color(SignColor::Red);
        assert!(filters.matches(&sign));
        assert!(!filters.clone().with_shape(SignShape::Circle).matches(&sign));
        assert!(filters.with_query("   ").matches(&sign));
    }
}
