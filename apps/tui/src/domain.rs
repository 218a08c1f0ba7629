use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Facility categories shown on the map, in their fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    Subway,
    Aeon,
    Maxvalu,
    Tsuruha,
    JuniorHigh,
    Elementary,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown category {0:?}")]
pub struct UnknownCategory(pub String);

/// How a category's markers are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Square,
    Circle,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Subway,
        Self::Aeon,
        Self::Maxvalu,
        Self::Tsuruha,
        Self::JuniorHigh,
        Self::Elementary,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Subway => "subway",
            Self::Aeon => "aeon",
            Self::Maxvalu => "maxvalu",
            Self::Tsuruha => "tsuruha",
            Self::JuniorHigh => "junior_high",
            Self::Elementary => "elementary",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Subway),
            1 => Some(Self::Aeon),
            2 => Some(Self::Maxvalu),
            3 => Some(Self::Tsuruha),
            4 => Some(Self::JuniorHigh),
            5 => Some(Self::Elementary),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Subway => 0,
            Self::Aeon => 1,
            Self::Maxvalu => 2,
            Self::Tsuruha => 3,
            Self::JuniorHigh => 4,
            Self::Elementary => 5,
        }
    }

    /// Look up a category by key, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let key = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|category| category.as_str() == key)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Subway => "Subway stations",
            Self::Aeon => "AEON",
            Self::Maxvalu => "MaxValu",
            Self::Tsuruha => "Tsuruha Drug",
            Self::JuniorHigh => "Junior high schools",
            Self::Elementary => "Elementary schools",
        }
    }

    pub const fn default_color(self) -> &'static str {
        match self {
            Self::Subway => "#1e88e5",
            Self::Aeon => "#b0006d",
            Self::Maxvalu => "#e53935",
            Self::Tsuruha => "#2e7d32",
            Self::JuniorHigh => "#fb8c00",
            Self::Elementary => "#8e24aa",
        }
    }

    /// Initial radius in metres.
    pub const fn default_radius(self) -> f64 {
        match self {
            Self::Subway => 800.0,
            Self::Aeon | Self::Maxvalu => 1000.0,
            Self::Tsuruha | Self::Elementary => 500.0,
            Self::JuniorHigh => 1000.0,
        }
    }

    pub const fn marker_shape(self) -> MarkerShape {
        match self {
            Self::Subway => MarkerShape::Square,
            _ => MarkerShape::Circle,
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| UnknownCategory(value.to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single facility record. This is the shape that gets exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub note: String,
}

impl Facility {
    pub fn position(&self) -> crate::map::LatLng {
        crate::map::LatLng::new(self.lat, self.lng)
    }
}
