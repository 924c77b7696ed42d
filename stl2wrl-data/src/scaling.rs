//! Validated coordinate divisor.

use crate::error::StlError;
use std::fmt;
use std::str::FromStr;

/// Nonzero, finite divisor applied to every vertex coordinate (e.g. 25.4 for mm to inch).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingFactor(f64);

impl ScalingFactor {
    /// Validate a divisor. Zero and non-finite values are rejected.
    pub fn new(divisor: f64) -> Result<Self, StlError> {
        if divisor == 0.0 {
            return Err(StlError::InvalidScalingFactor(
                "scaling divisor must be nonzero".to_string(),
            ));
        }
        if !divisor.is_finite() {
            return Err(StlError::InvalidScalingFactor(format!(
                "scaling divisor must be finite (got {})",
                divisor
            )));
        }
        Ok(Self(divisor))
    }

    pub fn divisor(self) -> f64 {
        self.0
    }
}

impl Default for ScalingFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

impl FromStr for ScalingFactor {
    type Err = StlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let divisor: f64 = s.trim().parse().map_err(|e| {
            StlError::InvalidScalingFactor(format!("'{}' is not a number: {}", s, e))
        })?;
        Self::new(divisor)
    }
}

impl fmt::Display for ScalingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_divisor() {
        let scaling: ScalingFactor = "25.4".parse().unwrap();
        assert_eq!(scaling.divisor(), 25.4);

        let scaling: ScalingFactor = " -1e1 ".parse().unwrap();
        assert_eq!(scaling.divisor(), -10.0);
    }

    #[test]
    fn test_zero_divisor_rejected() {
        assert!(matches!(
            ScalingFactor::new(0.0),
            Err(StlError::InvalidScalingFactor(_))
        ));
        assert!(matches!(
            "-0.0".parse::<ScalingFactor>(),
            Err(StlError::InvalidScalingFactor(_))
        ));
    }

    #[test]
    fn test_non_numeric_divisor_rejected() {
        let err = "ten".parse::<ScalingFactor>().unwrap_err();
        assert!(matches!(err, StlError::InvalidScalingFactor(_)));
        assert!(err.to_string().contains("'ten'"));
    }

    #[test]
    fn test_non_finite_divisor_rejected() {
        assert!(ScalingFactor::new(f64::NAN).is_err());
        assert!("inf".parse::<ScalingFactor>().is_err());
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(ScalingFactor::default().divisor(), 1.0);
    }
}
