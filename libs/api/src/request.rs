use serde_json::Value;

use crate::response::FieldError;

/// Pulls a required string field out of a JSON body. Absence, `null` and
/// non-string values each record a `FieldError`; the caller keeps going so
/// the client gets every problem in one round trip.
pub fn require_string(
    body: &Value,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("{field} is required"),
            });
            None
        }
        Some(_) => {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("{field} must be a string"),
            });
            None
        }
    }
}

/// Like [`require_string`] but absence and `null` are fine; only a wrong
/// JSON type records an error.
pub fn optional_string(
    body: &Value,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match body.get(field) {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Null) | None => None,
        Some(_) => {
            errors.push(FieldError {
                field: field.to_string(),
                message: format!("{field} must be a string"),
            });
            None
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    #[test]
    fn present_strings_pass() {
        let body = json!({ "name": "Ada" });
        let mut errors = Vec::new();

        let value = require_string(&body, "name", &mut errors);

        assert_eq!(value, Some("Ada".to_string()));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_strings_count_as_present() {
        let body = json!({ "name": "" });
        let mut errors = Vec::new();

        let value = require_string(&body, "name", &mut errors);

        assert_eq!(value, Some(String::new()));
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_and_null_fields_are_required_errors() {
        let body = json!({ "email": null });
        let mut errors = Vec::new();

        assert!(require_string(&body, "name", &mut errors).is_none());
        assert!(require_string(&body, "email", &mut errors).is_none());

        let messages: Vec<_> =
            errors.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["name is required", "email is required"]
        );
    }

    #[test]
    fn wrong_types_are_reported_by_field() {
        let body = json!({ "name": 42 });
        let mut errors = Vec::new();

        assert!(require_string(&body, "name", &mut errors).is_none());

        assert_eq!(
            errors,
            vec![FieldError {
                field: "name".to_string(),
                message: "name must be a string".to_string(),
            }]
        );
    }

    #[test]
    fn optional_fields_may_be_absent_or_null() {
        let body = json!({ "phone": null });
        let mut errors = Vec::new();

        assert!(optional_string(&body, "phone", &mut errors).is_none());
        assert!(optional_string(&body, "fax", &mut errors).is_none());
        assert!(errors.is_empty());
    }

    #[test]
    fn optional_fields_still_reject_wrong_types() {
        let body = json!({ "phone": ["555"] });
        let mut errors = Vec::new();

        assert!(optional_string(&body, "phone", &mut errors).is_none());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "phone");
    }
}
