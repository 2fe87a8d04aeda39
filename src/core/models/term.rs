//! Academic term model ("Season Year" labels)

use crate::core::error::PlannerError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Season of an academic term, ordered by position in the calendar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    /// January start
    Winter,
    /// Spring quarter/semester
    Spring,
    /// Summer session
    Summer,
    /// September start
    Fall,
}

impl Season {
    /// All seasons in calendar order
    pub const ALL: [Self; 4] = [Self::Winter, Self::Spring, Self::Summer, Self::Fall];

    /// Label used in catalog `terms_offered` fields
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Self::Winter),
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" | "autumn" => Ok(Self::Fall),
            _ => Err(PlannerError::InvalidTerm(s.to_string())),
        }
    }
}

/// A concrete term such as "Fall 2025"
///
/// Terms order chronologically: by year, then by season within the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    /// Calendar year
    pub year: u16,
    /// Season within the year
    pub season: Season,
}

impl Term {
    /// Create a term
    #[must_use]
    pub const fn new(season: Season, year: u16) -> Self {
        Self { year, season }
    }

    /// The term that follows this one
    ///
    /// When `include_summer` is false, Spring is followed by Fall.
    #[must_use]
    pub const fn next(self, include_summer: bool) -> Self {
        match self.season {
            Season::Winter => Self::new(Season::Spring, self.year),
            Season::Spring if include_summer => Self::new(Season::Summer, self.year),
            Season::Spring | Season::Summer => Self::new(Season::Fall, self.year),
            Season::Fall => Self::new(Season::Winter, self.year.saturating_add(1)),
        }
    }

    /// `count` consecutive terms starting at `start`
    #[must_use]
    pub fn upcoming(start: Self, count: usize, include_summer: bool) -> Vec<Self> {
        std::iter::successors(Some(start), |t| Some(t.next(include_summer)))
            .take(count)
            .collect()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.season, self.year)
    }
}

impl FromStr for Term {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidTerm(s.to_string());
        let mut parts = s.split_whitespace();
        let (Some(season), Some(year), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };
        let season = season.parse::<Season>().map_err(|_| invalid())?;
        let year = year.parse::<u16>().map_err(|_| invalid())?;
        Ok(Self::new(season, year))
    }
}

/// Order term labels chronologically; labels that do not parse sort last, by text.
#[must_use]
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    match (a.parse::<Term>(), b.parse::<Term>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Season part of a term label: "Fall 2025" → "Fall", "Fall" → "Fall".
#[must_use]
pub fn season_of(label: &str) -> Option<Season> {
    label
        .parse::<Term>()
        .map(|t| t.season)
        .or_else(|_| label.parse::<Season>())
        .ok()
}
