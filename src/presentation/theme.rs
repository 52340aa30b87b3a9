use indexmap::IndexMap;
use thiserror::Error;

/// Visual theme bucket for a weather condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

impl Theme {
    /// Background image identifier for this theme.
    pub fn background_id(self) -> &'static str {
        match self {
            Self::Sunny => "sunny_background",
            Self::Cloudy => "cloud_background",
            Self::Rainy => "rain_background",
            Self::Snowy => "snow_background",
        }
    }

    /// Animation identifier for this theme.
    pub fn animation_id(self) -> &'static str {
        match self {
            Self::Sunny => "sun",
            Self::Cloudy => "cloud",
            Self::Rainy => "rain",
            Self::Snowy => "snow",
        }
    }

    pub fn selection(self) -> ThemeSelection {
        ThemeSelection {
            theme: self,
            background_id: self.background_id(),
            animation_id: self.animation_id(),
        }
    }
}

/// Background and animation pair resolved for one condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSelection {
    pub theme: Theme,
    pub background_id: &'static str,
    pub animation_id: &'static str,
}

const SUNNY_LABELS: &[&str] = &["Clear Sky", "Sunny", "Clear"];
const CLOUDY_LABELS: &[&str] = &["Partly Clouds", "Clouds", "Overcast", "Mist", "Foggy"];
const RAINY_LABELS: &[&str] = &[
    "Rain",
    "Light Rain",
    "Drizzle",
    "Moderate Rain",
    "Showers",
    "Heavy Rain",
];
const SNOWY_LABELS: &[&str] = &["Light Snow", "Moderate Snow", "Heavy Snow", "Blizzard"];

/// Theme shown when a label matches none of the known sets.
const FALLBACK_THEME: Theme = Theme::Sunny;

#[derive(Error, Debug, PartialEq)]
pub enum ThemeTableError {
    #[error("Condition label {label:?} is mapped to both {first:?} and {second:?}")]
    DuplicateLabel {
        label: &'static str,
        first: Theme,
        second: Theme,
    },
}

/// Maps free-text condition labels to themes.
///
/// Lookups are exact and case-sensitive: the upstream API reports labels
/// like `"Rain"` or `"Clear Sky"` verbatim, and anything outside the table
/// falls back to [`Theme::Sunny`]. Construction walks the label sets once
/// and rejects a label claimed by two themes.
#[derive(Debug, Clone)]
pub struct ThemeResolver {
    table: IndexMap<&'static str, Theme>,
}

impl ThemeResolver {
    pub fn new() -> Result<Self, ThemeTableError> {
        let groups = [
            (Theme::Sunny, SUNNY_LABELS),
            (Theme::Cloudy, CLOUDY_LABELS),
            (Theme::Rainy, RAINY_LABELS),
            (Theme::Snowy, SNOWY_LABELS),
        ];

        let mut table = IndexMap::new();
        for (theme, labels) in groups {
            for &label in labels {
                if let Some(prev) = table.insert(label, theme) {
                    return Err(ThemeTableError::DuplicateLabel {
                        label,
                        first: prev,
                        second: theme,
                    });
                }
            }
        }

        Ok(Self { table })
    }

    /// Resolve a condition label to its theme. Total: unrecognized labels
    /// yield the fallback theme.
    pub fn resolve(&self, label: &str) -> Theme {
        match self.table.get(label) {
            Some(&theme) => theme,
            None => {
                tracing::debug!(label = %label, "Unrecognized condition label, using fallback theme");
                FALLBACK_THEME
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ThemeResolver {
        ThemeResolver::new().unwrap()
    }

    #[test]
    fn test_sunny_labels() {
        let r = resolver();
        for label in ["Clear Sky", "Sunny", "Clear"] {
            assert_eq!(r.resolve(label), Theme::Sunny, "label: {label}");
        }
    }

    #[test]
    fn test_cloudy_labels() {
        let r = resolver();
        for label in ["Partly Clouds", "Clouds", "Overcast", "Mist", "Foggy"] {
            assert_eq!(r.resolve(label), Theme::Cloudy, "label: {label}");
        }
    }

    #[test]
    fn test_rainy_labels() {
        let r = resolver();
        for label in [
            "Rain",
            "Light Rain",
            "Drizzle",
            "Moderate Rain",
            "Showers",
            "Heavy Rain",
        ] {
            assert_eq!(r.resolve(label), Theme::Rainy, "label: {label}");
        }
    }

    #[test]
    fn test_snowy_labels() {
        let r = resolver();
        for label in ["Light Snow", "Moderate Snow", "Heavy Snow", "Blizzard"] {
            assert_eq!(r.resolve(label), Theme::Snowy, "label: {label}");
        }
    }

    #[test]
    fn test_unmatched_labels_fall_back_to_sunny() {
        let r = resolver();
        assert_eq!(r.resolve(""), Theme::Sunny);
        assert_eq!(r.resolve("unknown"), Theme::Sunny);
        assert_eq!(r.resolve("Thunderstorm"), Theme::Sunny);
        assert_eq!(r.resolve("☔ véry wët"), Theme::Sunny);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let r = resolver();
        assert_eq!(r.resolve("rain"), Theme::Sunny);
        assert_eq!(r.resolve("CLOUDS"), Theme::Sunny);
    }

    #[test]
    fn test_table_construction_succeeds() {
        assert!(ThemeResolver::new().is_ok());
    }

    #[test]
    fn test_selection_carries_asset_identifiers() {
        let selection = Theme::Rainy.selection();
        assert_eq!(selection.background_id, "rain_background");
        assert_eq!(selection.animation_id, "rain");
    }
}
