//! Sign-in, registration and profile forms
//!
//! There is no credential check anywhere: a form that passes its field
//! constraints becomes the signed-in user record. Passwords are required
//! by the forms but never leave them.

use thiserror::Error;

use crate::session::{Role, User};

/// Form validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Sign-in form fields
#[derive(Debug, Clone, PartialEq)]
pub struct LoginForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Role::Farmer,
        }
    }
}

impl LoginForm {
    pub fn into_user(self) -> Result<User, FormError> {
        let name = required("Name", &self.name)?;
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }

        Ok(User::new(name).email(email).role(self.role))
    }
}

/// Registration form fields
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Farmer,
        }
    }
}

impl RegisterForm {
    pub fn into_user(self) -> Result<User, FormError> {
        let name = required("Name", &self.name)?;
        let email = validate_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        let mut user = User::new(name).email(email).role(self.role);
        user.phone = optional(&self.phone);
        user.location = optional(&self.location);
        Ok(user)
    }
}

/// Editable profile fields
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
}

impl ProfileForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone().unwrap_or_default(),
            phone: user.phone.clone().unwrap_or_default(),
            location: user.location.clone().unwrap_or_default(),
        }
    }

    /// Apply the edits to `user`. Role and unknown fields are left alone.
    pub fn apply(self, user: &User) -> Result<User, FormError> {
        let name = required("Name", &self.name)?;
        let email = if self.email.trim().is_empty() {
            None
        } else {
            Some(validate_email(&self.email)?)
        };

        let mut updated = user.clone();
        updated.name = name;
        updated.email = email;
        updated.phone = optional(&self.phone);
        updated.location = optional(&self.location);
        Ok(updated)
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

// Same shape check as an `<input type="email">`: text on both sides of one '@'
fn validate_email(value: &str) -> Result<String, FormError> {
    let value = required("Email", value)?;
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(value)
        }
        _ => Err(FormError::InvalidEmail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login() -> LoginForm {
        LoginForm {
            name: " Asha ".to_string(),
            email: "asha@example.com".to_string(),
            password: "secret".to_string(),
            role: Role::Consumer,
        }
    }

    #[test]
    fn test_login_builds_user_without_password() {
        let user = login().into_user().unwrap();
        assert_eq!(user.name, "Asha");
        assert_eq!(user.role, Some(Role::Consumer));

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_login_required_fields() {
        let mut form = login();
        form.name = "   ".to_string();
        assert_eq!(form.into_user(), Err(FormError::Missing("Name")));

        let mut form = login();
        form.password.clear();
        assert_eq!(form.into_user(), Err(FormError::Missing("Password")));

        let mut form = login();
        form.email = "asha.example.com".to_string();
        assert_eq!(form.into_user(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("a@b").is_ok());
        assert_eq!(validate_email("@b"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email("a@b@c"), Err(FormError::InvalidEmail));
        assert_eq!(validate_email(""), Err(FormError::Missing("Email")));
    }

    #[test]
    fn test_register_password_mismatch() {
        let form = RegisterForm {
            name: "Gopal".to_string(),
            email: "gopal@farm.in".to_string(),
            password: "one".to_string(),
            confirm_password: "two".to_string(),
            ..RegisterForm::default()
        };
        assert_eq!(form.into_user(), Err(FormError::PasswordMismatch));
    }

    #[test]
    fn test_register_optional_fields() {
        let form = RegisterForm {
            name: "Gopal".to_string(),
            email: "gopal@farm.in".to_string(),
            location: "Nashik".to_string(),
            password: "pw".to_string(),
            confirm_password: "pw".to_string(),
            ..RegisterForm::default()
        };
        let user = form.into_user().unwrap();
        assert_eq!(user.role, Some(Role::Farmer));
        assert_eq!(user.location.as_deref(), Some("Nashik"));
        assert_eq!(user.phone, None);
    }

    #[test]
    fn test_profile_edit_preserves_role() {
        let user = User::new("Ravi").role(Role::Retailer).email("ravi@shop.in");
        let mut form = ProfileForm::from_user(&user);
        form.name = "Ravi Kumar".to_string();
        form.email.clear();
        form.phone = "98200 00000".to_string();

        let updated = form.apply(&user).unwrap();
        assert_eq!(updated.name, "Ravi Kumar");
        assert_eq!(updated.email, None);
        assert_eq!(updated.phone.as_deref(), Some("98200 00000"));
        assert_eq!(updated.role, Some(Role::Retailer));
    }
}
