use thiserror::Error;

/// Errors returned when building a URL out of a named route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The route name is not present in the table.
    #[error("unknown route: {0}")]
    UnknownRoute(String),

    /// Required placeholders were left unresolved. Carries the full set of
    /// parameter names the template requires and the set that was supplied.
    #[error(
        "invalid route parameters; REQUIRED: {}; GIVEN: {}",
        .required.join(","),
        .given.join(",")
    )]
    MissingParameters {
        required: Vec<String>,
        given: Vec<String>,
    },
}

/// Route-table validation errors reported while assembling a router.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("duplicate route name: {0}")]
    DuplicateRoute(String),

    /// Unterminated `{` or an identifier with characters outside `[0-9A-Za-z_]`.
    #[error("route {name}: malformed template {template:?}")]
    InvalidTemplate { name: String, template: String },

    /// A template reuses one placeholder name twice.
    #[error("route {name}: placeholder {{{param}}} appears more than once")]
    DuplicateParam { name: String, param: String },

    #[error("route {name}: invalid HTTP method {method:?}")]
    InvalidMethod { name: String, method: String },
}
