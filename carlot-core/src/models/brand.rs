//! Brand family types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Brand
// ============================================================================

/// Supported brand families.
///
/// Each brand offers exactly one sports car and one family car, and the two
/// are made by the same factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    /// Mazda (MX-5 and CX-30)
    Mazda,
    /// Ford (Mustang and Mondeo)
    Ford,
}

impl Brand {
    /// Returns the display name for this brand.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Mazda => "Mazda",
            Self::Ford => "Ford",
        }
    }

    /// Returns all brands in showroom order.
    pub fn all() -> &'static [Brand] {
        &[Self::Mazda, Self::Ford]
    }

    /// Returns the CLI name for this brand (lowercase, no spaces).
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Mazda => "mazda",
            Self::Ford => "ford",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Brand {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|b| b.cli_name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownBrand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_order() {
        assert_eq!(Brand::all(), &[Brand::Mazda, Brand::Ford]);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("mazda".parse::<Brand>(), Ok(Brand::Mazda));
        assert_eq!("FORD".parse::<Brand>(), Ok(Brand::Ford));
        assert_eq!(" Ford ".parse::<Brand>(), Ok(Brand::Ford));
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "tesla".parse::<Brand>().unwrap_err();
        assert_eq!(err, CoreError::UnknownBrand("tesla".to_string()));
        assert_eq!(err.to_string(), "Unknown brand: tesla");
    }

    #[test]
    fn test_display_uses_display_name() {
        assert_eq!(Brand::Mazda.to_string(), "Mazda");
    }
}
