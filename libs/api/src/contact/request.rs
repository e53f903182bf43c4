use std::str::FromStr;

use entity::prelude::*;
use serde_json::Value;

use crate::request::{optional_string, require_string};
use crate::response::FieldError;

/// Checks a contact form body field by field and only then builds the
/// insert model, so one bad submission reports every problem at once.
pub fn parse_form(body: &Value) -> Result<NewContact, Vec<FieldError>> {
    let mut errors = Vec::new();

    let name = require_string(body, "name", &mut errors);
    let email = require_string(body, "email", &mut errors);
    let phone = optional_string(body, "phone", &mut errors);
    let contact_type = parse_contact_type(body, &mut errors);
    let message = require_string(body, "message", &mut errors);

    match (name, email, contact_type, message) {
        (Some(name), Some(email), Some(contact_type), Some(message))
            if errors.is_empty() =>
        {
            Ok(NewContact {
                name,
                email,
                phone,
                contact_type,
                message,
            })
        }
        _ => Err(errors),
    }
}

// `type` gets its own arm instead of `require_string` so a missing field
// and an unknown value never both land on it.
fn parse_contact_type(
    body: &Value,
    errors: &mut Vec<FieldError>,
) -> Option<ContactType> {
    match body.get("type") {
        Some(Value::String(value)) => match ContactType::from_str(value) {
            Ok(contact_type) => Some(contact_type),
            Err(_) => {
                errors.push(FieldError {
                    field: "type".to_string(),
                    message: format!(
                        "type must be one of: {}",
                        ContactType::accepted().join(", ")
                    ),
                });
                None
            }
        },
        Some(Value::Null) | None => {
            errors.push(FieldError {
                field: "type".to_string(),
                message: "type is required".to_string(),
            });
            None
        }
        Some(_) => {
            errors.push(FieldError {
                field: "type".to_string(),
                message: "type must be a string".to_string(),
            });
            None
        }
    }
}
