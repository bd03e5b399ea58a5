//! Per-attribute field probes
//!
//! Each probe is a precompiled case-insensitive, dot-matches-newline regex
//! keyed to one infobox label, with a named capture group for the value and a
//! field-specific message for the not-found case.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FactboxError;

static BIRTH_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Born\D*(?P<birth>\d{4}-\d{2}-\d{2})").unwrap());

static POLAR_RADIUS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Polar radius.*?(?: ?\d+ )?(?P<radius>[\d,.]+).*?km").unwrap()
});

static POPULATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)Population.*?(?P<pop>\d{1,3}(?:,\d{3})+)").unwrap()
});

static CAPITAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)capital[^\w]*[:|]?[^\w]*(?P<capital>[A-Za-z\s]+)").unwrap()
});

static COORDINATES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)Coordinates(?P<coord>[\dNEWS./\s;-]+)").unwrap());

/// Qualifier Wikipedia appends when one city is both capital and largest
const LARGEST_CITY: &str = "and largest city";

/// Extraction recipe for one factual attribute of a summary box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProbe {
    BirthDate,
    PolarRadius,
    Population,
    Capital,
    Coordinates,
}

impl FieldProbe {
    /// Short probe name for logging
    pub fn name(&self) -> &'static str {
        match self {
            FieldProbe::BirthDate => "birth-date",
            FieldProbe::PolarRadius => "polar-radius",
            FieldProbe::Population => "population",
            FieldProbe::Capital => "capital",
            FieldProbe::Coordinates => "coordinates",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            FieldProbe::BirthDate => &BIRTH_DATE,
            FieldProbe::PolarRadius => &POLAR_RADIUS,
            FieldProbe::Population => &POPULATION,
            FieldProbe::Capital => &CAPITAL,
            FieldProbe::Coordinates => &COORDINATES,
        }
    }

    fn group(&self) -> &'static str {
        match self {
            FieldProbe::BirthDate => "birth",
            FieldProbe::PolarRadius => "radius",
            FieldProbe::Population => "pop",
            FieldProbe::Capital => "capital",
            FieldProbe::Coordinates => "coord",
        }
    }

    fn missing_message(&self) -> &'static str {
        match self {
            FieldProbe::BirthDate => {
                "Page infobox has no birth information (at least none in xxxx-xx-xx format)"
            }
            FieldProbe::PolarRadius => "Page infobox has no polar radius information",
            FieldProbe::Population => "Page infobox has no information for population size",
            FieldProbe::Capital => "Page infobox has no information for the capital",
            FieldProbe::Coordinates => "No coordinate information found in correct format",
        }
    }

    /// Run this probe over cleaned infobox text.
    pub fn extract(&self, text: &str) -> Result<String, FactboxError> {
        let value = self
            .regex()
            .captures(text)
            .and_then(|caps| caps.name(self.group()))
            .map(|m| m.as_str())
            .ok_or_else(|| FactboxError::FieldFormat {
                message: self.missing_message().to_string(),
            })?;

        Ok(self.post_process(value))
    }

    fn post_process(&self, value: &str) -> String {
        match self {
            FieldProbe::Capital => value.replace(LARGEST_CITY, "").trim().to_string(),
            _ => value.trim().to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birth_date_iso_format() {
        let text = "Isaac Newton\nBorn Isaac Newton 1643-01-04 Woolsthorpe, England";
        assert_eq!(FieldProbe::BirthDate.extract(text).unwrap(), "1643-01-04");
    }

    #[test]
    fn test_birth_date_missing_has_field_message() {
        let err = FieldProbe::BirthDate
            .extract("Born 25 December 1642")
            .unwrap_err();
        assert!(err.to_string().contains("no birth information"));
    }

    #[test]
    fn test_polar_radius() {
        let text = "Mercury\nEquatorial radius 2,439.7 km\nPolar radius 2,438.3 km";
        assert_eq!(FieldProbe::PolarRadius.extract(text).unwrap(), "2,438.3");
    }

    #[test]
    fn test_population_takes_grouped_count() {
        let text = "France\nPopulation (2024) 68,373,433\nDensity 123/km2";
        assert_eq!(FieldProbe::Population.extract(text).unwrap(), "68,373,433");
    }

    #[test]
    fn test_capital_plain() {
        // The value class spans letters and whitespace, so the fixture ends the
        // way cleaned infobox text does: with the coordinate digits.
        let text = "Japan\nCapital Tokyo 35.6897 N 139.6922 E";
        assert_eq!(FieldProbe::Capital.extract(text).unwrap(), "Tokyo");
    }

    #[test]
    fn test_capital_strips_largest_city_qualifier() {
        let text = "France\nCapital and largest city Paris 48.8566 N 2.3522 E";
        assert_eq!(FieldProbe::Capital.extract(text).unwrap(), "Paris");
    }

    #[test]
    fn test_coordinates() {
        let text = "Paris\nCoordinates 48.8566 N 2.3522 E\nArea 105 km2";
        assert_eq!(
            FieldProbe::Coordinates.extract(text).unwrap(),
            "48.8566 N 2.3522 E"
        );
    }

    #[test]
    fn test_missing_field_is_field_format_error() {
        let err = FieldProbe::Coordinates.extract("no such label here").unwrap_err();
        assert!(matches!(err, FactboxError::FieldFormat { .. }));
    }
}
