//! Built-in form schemas for the todo application's screens.
//!
//! Each call builds a fresh schema, so independent forms never share
//! predicate state.

use formguard_constraint::StringField;
use formguard_schema::Schema;

pub const LOGIN: &str = "login";
pub const SIGNUP: &str = "signup";
pub const TODO: &str = "todo";

/// Minimum password length accepted at signup.
pub const PASSWORD_MIN_LENGTH: usize = 4;

/// Names of every built-in form.
pub const BUILTIN_FORMS: [&str; 3] = [LOGIN, SIGNUP, TODO];

/// Login: both credentials must be present.
pub fn login() -> Schema {
    Schema::new()
        .field("userName", StringField::new().required("Enter your name"))
        .field("password", StringField::new().required("Enter your password"))
}

/// Signup: name required, password required and at least four characters.
pub fn signup() -> Schema {
    Schema::new()
        .field("userName", StringField::new().required("Enter your name"))
        .field(
            "password",
            StringField::new()
                .required("Enter your password")
                .min_length(
                    PASSWORD_MIN_LENGTH,
                    format!("Password must be at least {PASSWORD_MIN_LENGTH} characters"),
                ),
        )
}

/// New todo: the task text must not be empty.
pub fn todo() -> Schema {
    Schema::new().field("text", StringField::new().required("Enter a task"))
}

/// Look up a built-in form by name (case-insensitive).
pub fn lookup(name: &str) -> Option<Schema> {
    match name.to_ascii_lowercase().as_str() {
        LOGIN => Some(login()),
        SIGNUP => Some(signup()),
        TODO => Some(todo()),
        _ => None,
    }
}
