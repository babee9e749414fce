pub mod apriori;
pub mod counting;
pub mod rules;

pub use apriori::{mine, Apriori, FrequentItemsets, MinerOptions};
pub use counting::CountingStrategy;
pub use rules::{derive, sort_rules, Redundancy, Rule, RuleDeriver, RuleOptions};

use crate::error::{AssocError, Result};

/// Rejects supports at or below zero. Values above one are allowed and mine nothing.
pub fn validate_min_support(min_support: f64) -> Result<()> {
    if min_support.is_nan() || min_support <= 0.0 {
        return Err(AssocError::InvalidThreshold {
            name: "min_support",
            value: min_support,
            expected: "a fraction greater than 0",
        });
    }
    Ok(())
}

pub fn validate_min_confidence(min_confidence: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&min_confidence) {
        return Err(AssocError::InvalidThreshold {
            name: "min_confidence",
            value: min_confidence,
            expected: "a fraction between 0 and 1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_support_bounds() {
        assert!(validate_min_support(0.5).is_ok());
        assert!(validate_min_support(1.0).is_ok());
        assert!(validate_min_support(1.5).is_ok());
        assert!(validate_min_support(0.0).is_err());
        assert!(validate_min_support(-1.0).is_err());
        assert!(validate_min_support(f64::NAN).is_err());
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(validate_min_confidence(0.0).is_ok());
        assert!(validate_min_confidence(1.0).is_ok());
        assert!(validate_min_confidence(1.01).is_err());
        assert!(validate_min_confidence(-0.01).is_err());
        assert!(validate_min_confidence(f64::NAN).is_err());
    }
}
