//! User roles and the dashboard each one sees

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried on a user record
///
/// Stored as its plain string. Values other than the known roles are kept
/// verbatim in `Other` so they survive a profile update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Consumer,
    Retailer,
    Farmer,
    Other(String),
}

/// Which dashboard variant a role is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardKind {
    Consumer,
    Retailer,
    Default,
}

impl Role {
    /// Roles offered by the login and registration forms
    pub const SELECTABLE: [Role; 3] = [Role::Farmer, Role::Consumer, Role::Retailer];

    pub fn as_str(&self) -> &str {
        match self {
            Role::Consumer => "Consumer",
            Role::Retailer => "Retailer",
            Role::Farmer => "Farmer",
            Role::Other(s) => s,
        }
    }

    pub fn dashboard(&self) -> DashboardKind {
        match self {
            Role::Consumer => DashboardKind::Consumer,
            Role::Retailer => DashboardKind::Retailer,
            Role::Farmer | Role::Other(_) => DashboardKind::Default,
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Consumer" => Role::Consumer,
            "Retailer" => Role::Retailer,
            "Farmer" => Role::Farmer,
            _ => Role::Other(s),
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        Role::from(s.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_mapping() {
        assert_eq!(Role::Consumer.dashboard(), DashboardKind::Consumer);
        assert_eq!(Role::Retailer.dashboard(), DashboardKind::Retailer);
        assert_eq!(Role::Farmer.dashboard(), DashboardKind::Default);
        assert_eq!(
            Role::from("Distributor").dashboard(),
            DashboardKind::Default
        );
    }

    #[test]
    fn test_parsing_is_case_sensitive() {
        assert_eq!(Role::from("consumer"), Role::Other("consumer".to_string()));
        assert_eq!(Role::from("consumer").dashboard(), DashboardKind::Default);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Role::Retailer).unwrap(), "\"Retailer\"");

        let role: Role = serde_json::from_str("\"Inspector\"").unwrap();
        assert_eq!(role, Role::Other("Inspector".to_string()));
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"Inspector\"");
    }
}
