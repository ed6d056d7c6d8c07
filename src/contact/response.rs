use crate::config::{FIX_ERRORS_HEADER, FORM_WIDE_ERROR_KEY};
use serde::Deserialize;
use serde_json::{Map, Value};

/// JSON body returned by the contact endpoint for scripted requests.
#[derive(Debug, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    /// `null` and a missing key both mean "no field errors".
    #[serde(default)]
    pub errors: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmissionResult {
    Success { message: Option<String> },
    ValidationFailure(ValidationErrors),
}

/// Field errors in the order the server listed them, plus the form-wide list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub fields: Vec<(String, Vec<String>)>,
    pub form_wide: Option<Vec<String>>,
}

impl ValidationErrors {
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Text for the error notification. Form-wide messages replace the
    /// per-field summary entirely.
    pub fn summary(&self) -> String {
        if let Some(messages) = &self.form_wide {
            return messages.join("\n");
        }
        let mut summary = String::from(FIX_ERRORS_HEADER);
        for (_, messages) in &self.fields {
            summary.push_str(&format!("• {}\n", messages.join(", ")));
        }
        summary
    }
}

impl From<SubmissionResponse> for FormSubmissionResult {
    fn from(response: SubmissionResponse) -> Self {
        if response.success {
            return FormSubmissionResult::Success {
                message: response.message,
            };
        }
        let mut errors = ValidationErrors::default();
        for (field, value) in response.errors.unwrap_or_default() {
            let messages = messages_of(value);
            if field == FORM_WIDE_ERROR_KEY {
                errors.form_wide = Some(messages);
            } else {
                errors.fields.push((field, messages));
            }
        }
        FormSubmissionResult::ValidationFailure(errors)
    }
}

pub fn parse(body: &str) -> Result<FormSubmissionResult, serde_json::Error> {
    serde_json::from_str::<SubmissionResponse>(body).map(FormSubmissionResult::from)
}

// Accepts plain strings as well as `{"message": ..}` objects from verbose error encoders.
fn messages_of(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(message_of).collect(),
        other => message_of(other).into_iter().collect(),
    }
}

fn message_of(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Object(mut obj) => match obj.remove("message") {
            Some(Value::String(s)) => Some(s),
            _ => None,
        },
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_flag_wins() {
        let result = parse(r#"{"success": true, "message": "Спасибо!"}"#).unwrap();
        assert_eq!(
            result,
            FormSubmissionResult::Success {
                message: Some("Спасибо!".into())
            }
        );
    }

    #[test]
    fn field_order_follows_the_server() {
        let result = parse(
            r#"{"success": false, "errors": {"phone": ["Invalid"], "name": ["Required", "Too short"]}}"#,
        )
        .unwrap();
        let FormSubmissionResult::ValidationFailure(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["phone", "name"]);
        assert_eq!(
            errors.summary(),
            "Пожалуйста, исправьте ошибки:\n• Invalid\n• Required, Too short\n"
        );
    }

    #[test]
    fn form_wide_errors_replace_summary() {
        let result = parse(
            r#"{"success": false, "errors": {"phone": ["Invalid"], "__all__": ["Form rejected"]}}"#,
        )
        .unwrap();
        let FormSubmissionResult::ValidationFailure(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.field_names().collect::<Vec<_>>(), vec!["phone"]);
        assert_eq!(errors.summary(), "Form rejected");
    }

    #[test]
    fn form_wide_messages_join_with_newlines() {
        let errors = ValidationErrors {
            fields: vec![],
            form_wide: Some(vec!["First".into(), "Second".into()]),
        };
        assert_eq!(errors.summary(), "First\nSecond");
    }

    #[test]
    fn verbose_error_objects_are_flattened() {
        let result = parse(
            r#"{"success": false, "errors": {"email": [{"message": "Bad email", "code": "invalid"}]}}"#,
        )
        .unwrap();
        let FormSubmissionResult::ValidationFailure(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.fields, vec![("email".to_string(), vec!["Bad email".to_string()])]);
    }

    #[test]
    fn missing_errors_is_an_empty_failure() {
        let result = parse(r#"{"success": false}"#).unwrap();
        assert_eq!(result, FormSubmissionResult::ValidationFailure(ValidationErrors::default()));
    }

    #[test]
    fn null_errors_is_an_empty_failure() {
        let result = parse(r#"{"success": false, "errors": null}"#).unwrap();
        let FormSubmissionResult::ValidationFailure(errors) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(errors, ValidationErrors::default());
        assert_eq!(errors.summary(), "Пожалуйста, исправьте ошибки:\n");
    }

    #[test]
    fn success_flag_must_be_a_boolean() {
        assert!(parse(r#"{"errors": {}}"#).is_err());
        assert!(parse(r#"{"success": "yes"}"#).is_err());
        assert!(parse(r#"{"success": 1, "message": "ok"}"#).is_err());
        assert!(parse(r#"{"success": null}"#).is_err());
    }

    #[test]
    fn html_body_does_not_parse() {
        assert!(parse("<!doctype html><html></html>").is_err());
        assert!(parse(r#"{"message": "no flag"}"#).is_err());
    }
}
