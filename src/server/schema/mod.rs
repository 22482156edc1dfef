//! Declarative record schemas and request-body validation.
//!
//! Each resource declares its full record shape once, including server-generated
//! fields. The creation validator is that shape minus generated fields; the partial
//! update validator additionally treats every field as optional. Validation collects
//! every problem in the body before failing so clients can fix a payload in one pass.
//!
//! Handlers receive validated payloads through the [`Validated`] extractor.

pub mod activity;
pub mod analysis;
pub mod document;
pub mod user;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{model::api::FieldErrorDto, server::error::AppError};

/// Value check applied to a single field.
#[derive(Clone, Copy)]
pub enum FieldKind {
    String,
    /// Whole number that fits in a 32-bit signed integer.
    Integer,
    /// String holding standard base64.
    Base64,
    /// String restricted to a fixed set of tags.
    OneOf(&'static [&'static str]),
    /// Any JSON object; deeper checks happen when the payload is typed.
    Object,
    /// Nested structure checked by a custom function.
    Shape {
        expected: &'static str,
        check: fn(&Value) -> Result<(), String>,
    },
}

impl FieldKind {
    fn describe(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Base64 => "base64 string".to_string(),
            Self::OneOf(tags) => format!("one of {}", tags.join(", ")),
            Self::Object => "object".to_string(),
            Self::Shape { expected, .. } => expected.to_string(),
        }
    }

    fn check(&self, value: &Value) -> Result<(), String> {
        let mismatch = || format!("Expected {}", self.describe());
        match self {
            Self::String => value.as_str().map(|_| ()).ok_or_else(mismatch),
            Self::Integer => value
                .as_i64()
                .filter(|n| i32::try_from(*n).is_ok())
                .map(|_| ())
                .ok_or_else(mismatch),
            Self::Base64 => {
                let raw = value.as_str().ok_or_else(mismatch)?;
                STANDARD
                    .decode(raw)
                    .map(|_| ())
                    .map_err(|e| format!("Expected base64 string: {}", e))
            }
            Self::OneOf(tags) => value
                .as_str()
                .filter(|tag| tags.contains(tag))
                .map(|_| ())
                .ok_or_else(mismatch),
            Self::Object => {
                if value.is_object() {
                    Ok(())
                } else {
                    Err(mismatch())
                }
            }
            Self::Shape { check, .. } => check(value),
        }
    }
}

/// One field of a record definition.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Must be present on creation.
    pub required: bool,
    /// Accepts an explicit `null`.
    pub nullable: bool,
    /// Assigned by the server, never accepted from clients.
    pub generated: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            nullable: false,
            generated: false,
        }
    }

    /// Optional and nullable.
    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: true,
            generated: false,
        }
    }

    pub const fn generated(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            generated: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    Create,
    Update,
}

/// Full record definition of a resource.
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Fields a client may submit.
    pub fn writable_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.generated)
    }

    fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks a request body, collecting every field error.
    ///
    /// # Arguments
    /// - `body` - Parsed JSON request body
    /// - `mode` - `Create` enforces required fields, `Update` treats all as optional
    ///
    /// # Returns
    /// - `Ok(())` - Body satisfies the derived validator
    /// - `Err(Vec<FieldErrorDto>)` - One entry per problem found
    pub fn validate(&self, body: &Value, mode: WriteMode) -> Result<(), Vec<FieldErrorDto>> {
        let Some(object) = body.as_object() else {
            return Err(vec![FieldErrorDto::new("body", "Expected a JSON object")]);
        };

        let mut errors = Vec::new();

        for (key, value) in object {
            let def = match self.field(key) {
                Some(def) if def.generated => {
                    errors.push(FieldErrorDto::new(key, "Field is assigned by the server"));
                    continue;
                }
                Some(def) => def,
                None => {
                    errors.push(FieldErrorDto::new(key, "Unrecognized field"));
                    continue;
                }
            };

            if value.is_null() {
                if !def.nullable {
                    errors.push(FieldErrorDto::new(
                        key,
                        format!("Expected {}, received null", def.kind.describe()),
                    ));
                }
                continue;
            }

            if let Err(message) = def.kind.check(value) {
                errors.push(FieldErrorDto::new(key, message));
            }
        }

        if mode == WriteMode::Create {
            for def in self.writable_fields().filter(|f| f.required) {
                if !object.contains_key(def.name) {
                    errors.push(FieldErrorDto::new(def.name, "Required"));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates a body and deserializes it into its typed payload.
    pub fn parse<T: DeserializeOwned>(&self, body: Value, mode: WriteMode) -> Result<T, AppError> {
        let message = || format!("Invalid {} payload", self.name);

        self.validate(&body, mode)
            .map_err(|errors| AppError::validation(message(), errors))?;

        serde_json::from_value(body).map_err(|e| {
            AppError::validation(message(), vec![FieldErrorDto::new("body", e.to_string())])
        })
    }
}

/// Ties a request payload type to the record schema and mode that validate it.
pub trait Validate: DeserializeOwned {
    fn schema() -> &'static RecordSchema;
    fn mode() -> WriteMode;
}

/// Extractor yielding a payload that passed its record validator.
///
/// Malformed JSON and a wrong content type are reported as validation errors in the
/// standard error envelope. A body over the configured limit is a 413.
pub struct Validated<T>(pub T);

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: Validate + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        T::schema().parse(body, T::mode()).map(Self)
    }
}

fn body_rejection(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge;
    }

    AppError::validation(
        "Invalid request body",
        vec![FieldErrorDto::new("body", rejection.body_text())],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    static GADGET: RecordSchema = RecordSchema {
        name: "gadget",
        fields: &[
            FieldSpec::generated("id", FieldKind::Integer),
            FieldSpec::required("label", FieldKind::String),
            FieldSpec::required("size", FieldKind::Integer),
            FieldSpec::required("kind", FieldKind::OneOf(&["small", "large"])),
            FieldSpec::optional("blob", FieldKind::Base64),
            FieldSpec::generated("createdAt", FieldKind::String),
        ],
    };

    #[derive(Deserialize, Debug)]
    struct Gadget {
        label: String,
        size: i32,
    }

    fn fields(errors: &[FieldErrorDto]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn accepts_complete_creation_payload() {
        let body = json!({ "label": "a", "size": 3, "kind": "small", "blob": "aGk=" });

        assert!(GADGET.validate(&body, WriteMode::Create).is_ok());
    }

    /// Expected: Err naming the unknown field, the generated field and both missing fields
    #[test]
    fn collects_every_creation_problem() {
        let body = json!({ "label": "a", "id": 4, "colour": "red" });

        let errors = GADGET.validate(&body, WriteMode::Create).unwrap_err();
        let mut names = fields(&errors);
        names.sort();

        assert_eq!(names, vec!["colour", "id", "kind", "size"]);
    }

    #[test]
    fn rejects_mistyped_fields() {
        let body = json!({ "label": 7, "size": 1.5, "kind": "medium", "blob": "@@@" });

        let errors = GADGET.validate(&body, WriteMode::Create).unwrap_err();

        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn rejects_integers_outside_i32() {
        let body = json!({ "label": "a", "size": 5_000_000_000_i64, "kind": "large" });

        let errors = GADGET.validate(&body, WriteMode::Create).unwrap_err();

        assert_eq!(fields(&errors), vec!["size"]);
    }

    #[test]
    fn update_mode_accepts_partial_payload() {
        let body = json!({ "size": 9 });

        assert!(GADGET.validate(&body, WriteMode::Update).is_ok());
    }

    #[test]
    fn update_mode_still_rejects_generated_fields() {
        let body = json!({ "createdAt": "2024-01-01T00:00:00Z" });

        let errors = GADGET.validate(&body, WriteMode::Update).unwrap_err();

        assert_eq!(fields(&errors), vec!["createdAt"]);
    }

    #[test]
    fn null_only_allowed_on_nullable_fields() {
        let ok = json!({ "blob": null });
        let bad = json!({ "label": null });

        assert!(GADGET.validate(&ok, WriteMode::Update).is_ok());
        assert_eq!(
            fields(&GADGET.validate(&bad, WriteMode::Update).unwrap_err()),
            vec!["label"]
        );
    }

    #[test]
    fn rejects_non_object_body() {
        let errors = GADGET.validate(&json!([1, 2]), WriteMode::Create).unwrap_err();

        assert_eq!(fields(&errors), vec!["body"]);
    }

    #[test]
    fn parse_returns_typed_payload() {
        let gadget: Gadget = GADGET
            .parse(json!({ "label": "a", "size": 3, "kind": "small" }), WriteMode::Create)
            .unwrap();

        assert_eq!(gadget.label, "a");
        assert_eq!(gadget.size, 3);
    }

    #[test]
    fn parse_maps_failures_to_validation_error() {
        let result: Result<Gadget, _> = GADGET.parse(json!({ "label": "a" }), WriteMode::Create);

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
