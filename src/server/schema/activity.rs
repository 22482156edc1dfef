use crate::{
    model::activity::CreateActivityDto,
    server::schema::{FieldKind, FieldSpec, RecordSchema, Validate, WriteMode},
};

pub const ACTIVITY_TYPES: &[&str] = &[
    "document_upload",
    "document_update",
    "investor_view",
    "score_improvement",
    "analysis_complete",
];

/// `details` is only checked to be an object here; its shape depends on
/// `activityType` and is enforced when the typed event is built.
pub static ACTIVITY_RECORD: RecordSchema = RecordSchema {
    name: "activity",
    fields: &[
        FieldSpec::generated("id", FieldKind::Integer),
        FieldSpec::required("userId", FieldKind::Integer),
        FieldSpec::optional("documentId", FieldKind::Integer),
        FieldSpec::required("activityType", FieldKind::OneOf(ACTIVITY_TYPES)),
        FieldSpec::required("details", FieldKind::Object),
        FieldSpec::generated("createdAt", FieldKind::String),
    ],
};

impl Validate for CreateActivityDto {
    fn schema() -> &'static RecordSchema {
        &ACTIVITY_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Create
    }
}
