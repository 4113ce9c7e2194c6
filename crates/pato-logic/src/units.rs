//! Unit conversion — lengths to canonical centimetres, masses to grams.
//!
//! All functions are pure and total. Negative or zero inputs pass through
//! arithmetically; range validation is a presentation concern.

use serde::{Deserialize, Serialize};

pub const CM_PER_INCH: f64 = 2.54;
pub const CM_PER_FOOT: f64 = 30.48;
pub const G_PER_POUND: f64 = 453.59237;

/// Length units a drone model can measure the duck in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
}

impl LengthUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Foot => "ft",
        }
    }
}

/// Mass units a drone model can measure the duck in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "g")]
    Gram,
    #[serde(rename = "lb")]
    Pound,
}

impl MassUnit {
    pub fn label(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Pound => "lb",
        }
    }
}

/// Which display system the measurement inputs are currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

/// Convert a length to canonical centimetres.
pub fn to_cm(value: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Centimeter => value,
        LengthUnit::Inch => value * CM_PER_INCH,
        LengthUnit::Foot => value * CM_PER_FOOT,
    }
}

/// Convert canonical centimetres back to the given unit.
pub fn from_cm(cm: f64, unit: LengthUnit) -> f64 {
    match unit {
        LengthUnit::Centimeter => cm,
        LengthUnit::Inch => cm / CM_PER_INCH,
        LengthUnit::Foot => cm / CM_PER_FOOT,
    }
}

/// Convert a mass to canonical grams.
pub fn to_g(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => value,
        MassUnit::Pound => value * G_PER_POUND,
    }
}

/// Convert canonical grams back to the given unit.
pub fn from_g(g: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Gram => g,
        MassUnit::Pound => g / G_PER_POUND,
    }
}

/// Round to one decimal place (metric display precision).
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

/// Round to two decimal places (imperial display precision).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const LENGTH_UNITS: [LengthUnit; 3] =
        [LengthUnit::Centimeter, LengthUnit::Inch, LengthUnit::Foot];
    const MASS_UNITS: [MassUnit; 2] = [MassUnit::Gram, MassUnit::Pound];

    #[test]
    fn length_factors() {
        assert_eq!(to_cm(100.0, LengthUnit::Centimeter), 100.0);
        assert!((to_cm(1.0, LengthUnit::Inch) - 2.54).abs() < 1e-9);
        assert!((to_cm(1.0, LengthUnit::Foot) - 30.48).abs() < 1e-9);
    }

    #[test]
    fn mass_factors() {
        assert_eq!(to_g(5000.0, MassUnit::Gram), 5000.0);
        assert!((to_g(1.0, MassUnit::Pound) - 453.59237).abs() < 1e-9);
    }

    #[test]
    fn length_round_trip_within_tolerance() {
        for unit in LENGTH_UNITS {
            for v in [0.1, 1.0, 5.5, 100.0, 1234.56] {
                let back = from_cm(to_cm(v, unit), unit);
                assert!(
                    (back - v).abs() < 0.01,
                    "{v} {unit:?} round-tripped to {back}"
                );
            }
        }
    }

    #[test]
    fn mass_round_trip_within_tolerance() {
        for unit in MASS_UNITS {
            for v in [0.1, 1.0, 11.02, 5000.0] {
                let back = from_g(to_g(v, unit), unit);
                assert!(
                    (back - v).abs() < 0.01,
                    "{v} {unit:?} round-tripped to {back}"
                );
            }
        }
    }

    #[test]
    fn negative_and_zero_pass_through() {
        assert_eq!(to_cm(0.0, LengthUnit::Foot), 0.0);
        assert!((to_cm(-2.0, LengthUnit::Inch) + 5.08).abs() < 1e-9);
        assert!((to_g(-1.0, MassUnit::Pound) + 453.59237).abs() < 1e-9);
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round1(3.28083), 3.3);
        assert_eq!(round2(3.28083), 3.28);
        assert_eq!(round1(100.04), 100.0);
    }

    #[test]
    fn unit_serde_tags() {
        assert_eq!(serde_json::to_string(&LengthUnit::Foot).unwrap(), "\"ft\"");
        assert_eq!(serde_json::to_string(&MassUnit::Pound).unwrap(), "\"lb\"");
        let u: LengthUnit = serde_json::from_str("\"cm\"").unwrap();
        assert_eq!(u, LengthUnit::Centimeter);
    }
}
