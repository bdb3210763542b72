//! Urgency tier of a shipment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority profile a shipment is ranked under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyTier {
    Standard,
    Express,
    Rush,
}

impl UrgencyTier {
    /// All tiers, least to most urgent.
    pub const ALL: [UrgencyTier; 3] = [
        UrgencyTier::Standard,
        UrgencyTier::Express,
        UrgencyTier::Rush,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyTier::Standard => "standard",
            UrgencyTier::Express => "express",
            UrgencyTier::Rush => "rush",
        }
    }
}

impl fmt::Display for UrgencyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string names no known tier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown urgency tier: '{0}'")]
pub struct UnknownTier(pub String);

impl FromStr for UrgencyTier {
    type Err = UnknownTier;

    /// Parses a lowercase tier name, exactly as it appears on the wire.
    /// There is no fallback tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(UrgencyTier::Standard),
            "express" => Ok(UrgencyTier::Express),
            "rush" => Ok(UrgencyTier::Rush),
            _ => Err(UnknownTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_tiers() {
        assert_eq!("standard".parse::<UrgencyTier>(), Ok(UrgencyTier::Standard));
        assert_eq!("express".parse::<UrgencyTier>(), Ok(UrgencyTier::Express));
        assert_eq!("rush".parse::<UrgencyTier>(), Ok(UrgencyTier::Rush));
    }

    #[test]
    fn parse_rejects_padded_or_uppercase_names() {
        for input in [" RUSH ", "Rush", "rush ", "EXPRESS"] {
            assert_eq!(
                input.parse::<UrgencyTier>(),
                Err(UnknownTier(input.to_string()))
            );
        }
    }

    #[test]
    fn parse_rejects_near_miss() {
        assert!("rushh".parse::<UrgencyTier>().is_err());
    }

    #[test]
    fn parse_agrees_with_serde() {
        for input in ["rush", "Rush", " rush"] {
            let parsed = input.parse::<UrgencyTier>().ok();
            let deserialized = serde_json::from_value(serde_json::json!(input)).ok();
            assert_eq!(parsed, deserialized);
        }
    }

    #[test]
    fn parse_rejects_unknown_tier() {
        let err = "overnight".parse::<UrgencyTier>().unwrap_err();
        assert_eq!(err, UnknownTier("overnight".to_string()));
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!("".parse::<UrgencyTier>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for tier in UrgencyTier::ALL {
            assert_eq!(tier.to_string().parse::<UrgencyTier>(), Ok(tier));
        }
    }
}
