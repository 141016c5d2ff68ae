use std::fmt;

use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    /// The service answered 404. Callers show this as information, not failure.
    NotFound(Option<String>),
    Server { status: u16, message: Option<String> },
    /// No response was received at all.
    Network(String),
    Decode(String),
    ValidationError(Vec<FieldError>),
    Cancelled,
    Config(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(Some(msg)) => write!(f, "Not found: {}", msg),
            AppError::NotFound(None) => write!(f, "Not found"),
            AppError::Server { status, message: Some(msg) } => {
                write!(f, "Server error ({}): {}", status, msg)
            }
            AppError::Server { status, message: None } => write!(f, "Server error ({})", status),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Decode(msg) => write!(f, "Invalid response body: {}", msg),
            AppError::ValidationError(errors) => {
                let messages = errors.iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "validation error: {}", messages)
            }
            AppError::Cancelled => write!(f, "Request cancelled"),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AppError::Cancelled)
    }

    /// Message supplied by the remote service, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            AppError::NotFound(message) | AppError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for an error banner: the service's own message when it sent one,
    /// the field problems for rejected input, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            AppError::ValidationError(errors) => errors.iter()
                .map(|e| e.message.clone())
                .collect::<Vec<_>>()
                .join(", "),
            _ => self.server_message()
                .map(str::to_string)
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(|e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|s| s.to_string())
                        .unwrap_or_else(|| "Invalid value".to_string()),
                })
            })
            .collect();

        // field_errors() only covers the top level
        for (field, kind) in errors.errors() {
            if let validator::ValidationErrorsKind::List(items) = kind {
                for (index, nested) in items {
                    if let AppError::ValidationError(inner) = AppError::from((**nested).clone()) {
                        field_errors.extend(inner.into_iter().map(|e| FieldError {
                            field: format!("{}[{}].{}", field, index, e.field),
                            message: e.message,
                        }));
                    }
                }
            } else if let validator::ValidationErrorsKind::Struct(nested) = kind {
                if let AppError::ValidationError(inner) = AppError::from((**nested).clone()) {
                    field_errors.extend(inner.into_iter().map(|e| FieldError {
                        field: format!("{}.{}", field, e.field),
                        message: e.message,
                    }));
                }
            }
        }

        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::ValidationError(field_errors)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
