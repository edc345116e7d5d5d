//! Field validation shared by department and employee inputs.

use thiserror::Error;

/// Maximum length of a department or employee name, in characters.
pub const MAX_NAME_CHARS: usize = 100;

/// Input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` must not be blank")]
    EmptyField(&'static str),
    #[error("field `{field}` exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("salary must not be negative, got {0}")]
    NegativeSalary(f64),
    #[error("salary must be a finite number")]
    NonFiniteSalary,
    #[error("salary {0} would push total payroll past the representable range")]
    PayrollOverflow(f64),
}

pub(crate) fn normalize_name(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{normalize_name, ValidationError, MAX_NAME_CHARS};

    #[test]
    fn name_at_limit_is_accepted() {
        let name = "x".repeat(MAX_NAME_CHARS);
        assert_eq!(normalize_name("name", &name).expect("name at limit should pass"), name);
    }

    #[test]
    fn name_over_limit_is_rejected() {
        let name = "é".repeat(MAX_NAME_CHARS + 1);
        assert_eq!(
            normalize_name("name", &name).unwrap_err(),
            ValidationError::TooLong {
                field: "name",
                max: MAX_NAME_CHARS
            }
        );
    }
}
