//! AI coach persona selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// AI coach persona applied across the journal's feedback surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiPersonality {
    /// Calm, even-keeled commentary.
    #[default]
    Zen,
    /// Blunt, high-energy commentary.
    Aggressive,
    /// Numbers-first commentary.
    Analytical,
}

impl AiPersonality {
    /// All personas in display order.
    pub const ALL: [AiPersonality; 3] = [Self::Zen, Self::Aggressive, Self::Analytical];

    /// Wire name, as stored in the persisted blob.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zen => "zen",
            Self::Aggressive => "aggressive",
            Self::Analytical => "analytical",
        }
    }
}

impl fmt::Display for AiPersonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AiPersonality {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zen" => Ok(Self::Zen),
            "aggressive" => Ok(Self::Aggressive),
            "analytical" => Ok(Self::Analytical),
            _ => Err(CoreError::InvalidPersonality(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zen() {
        assert_eq!(AiPersonality::default(), AiPersonality::Zen);
    }

    #[test]
    fn test_parse_roundtrip() {
        for persona in AiPersonality::ALL {
            let parsed: AiPersonality = persona.as_str().parse().unwrap();
            assert_eq!(parsed, persona);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            "Analytical".parse::<AiPersonality>().unwrap(),
            AiPersonality::Analytical
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "chaotic".parse::<AiPersonality>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidPersonality(_)));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&AiPersonality::Aggressive).unwrap();
        assert_eq!(json, "\"aggressive\"");

        let back: AiPersonality = serde_json::from_str("\"zen\"").unwrap();
        assert_eq!(back, AiPersonality::Zen);
    }

    #[test]
    fn test_serde_rejects_undeclared_variant() {
        assert!(serde_json::from_str::<AiPersonality>("\"chaotic\"").is_err());
    }
}
