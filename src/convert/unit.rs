//! Mass units found on body-mass records.

use crate::config::{UNIT_KILOGRAMS, UNIT_POUNDS};

/// Units this tool can express in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassUnit {
    /// `kg`
    Kilograms,
    /// `lb`
    Pounds,
}

impl MassUnit {
    /// Looks up a unit identifier exactly as written in the export.
    ///
    /// Returns `None` for anything else, including case variants like `KG`.
    pub fn parse(unit: &str) -> Option<Self> {
        match unit {
            UNIT_KILOGRAMS => Some(MassUnit::Kilograms),
            UNIT_POUNDS => Some(MassUnit::Pounds),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_units() {
        assert_eq!(MassUnit::parse("kg"), Some(MassUnit::Kilograms));
        assert_eq!(MassUnit::parse("lb"), Some(MassUnit::Pounds));
    }

    #[test]
    fn test_parse_rejects_other_units() {
        for unit in ["", "g", "st", "KG", "lbs", " kg"] {
            assert_eq!(MassUnit::parse(unit), None, "{unit:?} should be rejected");
        }
    }
}
