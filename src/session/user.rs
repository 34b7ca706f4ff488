//! The signed-in user record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::role::{DashboardKind, Role};

/// User record persisted as JSON under the user key
///
/// There is no schema version and no type checking: any JSON object reads
/// as a user. Known fields holding a non-string value read as unset, and
/// fields this struct doesn't know about are kept in `extra` and written
/// back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct User {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A stored user record that is valid JSON but not an object
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("user record is not a JSON object")]
pub struct NotAnObject;

impl TryFrom<Value> for User {
    type Error = NotAnObject;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(NotAnObject);
        };

        // `name` is always written back, so a non-string one is dropped
        // rather than kept in `extra`
        let name = match fields.remove("name") {
            Some(Value::String(name)) => name,
            _ => String::new(),
        };
        let email = take_text(&mut fields, "email");
        let role = take_text(&mut fields, "role").map(Role::from);
        let phone = take_text(&mut fields, "phone");
        let location = take_text(&mut fields, "location");

        Ok(Self {
            name,
            email,
            role,
            phone,
            location,
            extra: fields,
        })
    }
}

/// Remove a string field. Null or missing reads as unset; any other value
/// stays in `fields` untouched.
fn take_text(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key)? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => {
            fields.insert(key.to_string(), other);
            None
        }
    }
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            role: None,
            phone: None,
            location: None,
            extra: Map::new(),
        }
    }

    /// Builder method: set role
    pub fn role(mut self, role: impl Into<Role>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Builder method: set email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder method: set location
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Dashboard variant for this user; a missing role gets the default view
    pub fn dashboard(&self) -> DashboardKind {
        self.role
            .as_ref()
            .map(Role::dashboard)
            .unwrap_or(DashboardKind::Default)
    }

    /// Name to greet the user with
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            fallback
        } else {
            &self.name
        }
    }

    /// Up to two uppercase initials for the avatar badge
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_record_parses() {
        let user: User = serde_json::from_str(r#"{"name":"Asha","role":"Consumer"}"#).unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.dashboard(), DashboardKind::Consumer);
    }

    #[test]
    fn test_missing_or_null_role_is_default_dashboard() {
        let user: User = serde_json::from_str(r#"{"name":"Asha"}"#).unwrap();
        assert_eq!(user.dashboard(), DashboardKind::Default);

        let user: User = serde_json::from_str(r#"{"name":"Asha","role":null}"#).unwrap();
        assert_eq!(user.role, None);
        assert_eq!(user.dashboard(), DashboardKind::Default);
    }

    #[test]
    fn test_unknown_fields_survive_rewrite() {
        let raw = r#"{"name":"Ravi","role":"Retailer","storeName":"Green Mart"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.extra.get("storeName"), Some(&Value::from("Green Mart")));

        let written = serde_json::to_value(&user).unwrap();
        assert_eq!(written["storeName"], "Green Mart");
        assert_eq!(written["role"], "Retailer");
        assert!(written.get("email").is_none());
    }

    #[test]
    fn test_wrongly_typed_fields_read_as_unset() {
        let user: User = serde_json::from_str(r#"{"name":null,"role":"Consumer"}"#).unwrap();
        assert_eq!(user.name, "");
        assert_eq!(user.dashboard(), DashboardKind::Consumer);

        let raw = r#"{"name":"Ravi","role":7,"phone":9820000000,"email":null}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.name, "Ravi");
        assert_eq!(user.role, None);
        assert_eq!(user.phone, None);
        assert_eq!(user.email, None);
        assert_eq!(user.dashboard(), DashboardKind::Default);

        // Kept as-is for the next write
        let written = serde_json::to_value(&user).unwrap();
        assert_eq!(written["phone"], 9820000000u64);
        assert_eq!(written["role"], 7);
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<User>("[1, 2]").is_err());
        assert!(serde_json::from_str::<User>("\"Asha\"").is_err());
        assert!(serde_json::from_str::<User>("null").is_err());
        assert_eq!(User::try_from(Value::from(3)), Err(NotAnObject));
    }

    #[test]
    fn test_display_name_and_initials() {
        let user = User::new("  ");
        assert_eq!(user.display_name("Consumer"), "Consumer");

        let user = User::new("meera devi patel");
        assert_eq!(user.display_name("Consumer"), "meera devi patel");
        assert_eq!(user.initials(), "MD");
    }
}
