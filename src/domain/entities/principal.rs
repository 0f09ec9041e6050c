//! Authenticated principal and capability model for the admin surface.

use std::fmt;
use std::str::FromStr;

/// A permission granted to an API token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Edit the draft redirect map.
    ManageSettings,
}

impl Capability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown capability: {0}")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manage_settings" => Ok(Self::ManageSettings),
            other => Err(UnknownCapability(other.to_string())),
        }
    }
}

/// Identity attached to an authenticated admin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub token_id: i64,
    pub name: String,
    pub capabilities: Vec<Capability>,
}

impl Principal {
    pub fn can(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Parses stored capability strings, dropping ones this build does not know.
pub fn parse_capabilities(raw: &[String]) -> Vec<Capability> {
    raw.iter().filter_map(|c| c.parse().ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can() {
        let principal = Principal {
            token_id: 1,
            name: "editor".to_string(),
            capabilities: vec![Capability::ManageSettings],
        };
        assert!(principal.can(Capability::ManageSettings));

        let viewer = Principal {
            capabilities: vec![],
            ..principal
        };
        assert!(!viewer.can(Capability::ManageSettings));
    }

    #[test]
    fn test_parse_capabilities_skips_unknown() {
        let raw = vec!["manage_settings".to_string(), "edit_posts".to_string()];
        assert_eq!(parse_capabilities(&raw), vec![Capability::ManageSettings]);
    }
}
