use serde_json::Value;

use crate::request::require_string;
use crate::response::FieldError;

/// Accepts anything with an `@` in it. The confirmation mail is the real
/// check; this only keeps obvious typos out of the list.
pub fn parse_form(body: &Value) -> Result<String, Vec<FieldError>> {
    let mut errors = Vec::new();

    let email = require_string(body, "email", &mut errors);

    if let Some(email) = &email {
        if !email.contains('@') {
            errors.push(FieldError {
                field: "email".to_string(),
                message: "email must be a valid email address".to_string(),
            });
        }
    }

    match email {
        Some(email) if errors.is_empty() => Ok(email),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn a_plausible_address_passes() {
        let email = parse_form(&json!({ "email": "ada@example.com" }));

        assert_eq!(email.unwrap(), "ada@example.com");
    }

    #[test]
    fn an_address_without_an_at_sign_fails() {
        let errors =
            parse_form(&json!({ "email": "ada.example.com" })).err().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "email must be a valid email address");
    }

    #[test]
    fn a_missing_address_fails() {
        let errors = parse_form(&json!({})).err().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "email is required");
    }

    #[test]
    fn a_non_string_address_fails() {
        let errors = parse_form(&json!({ "email": 42 })).err().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "email must be a string");
    }
}
