use crate::{
    model::document::{CreateDocumentDto, UpdateDocumentDto},
    server::schema::{FieldKind, FieldSpec, RecordSchema, Validate, WriteMode},
};

pub static DOCUMENT_RECORD: RecordSchema = RecordSchema {
    name: "document",
    fields: &[
        FieldSpec::generated("id", FieldKind::Integer),
        FieldSpec::required("userId", FieldKind::Integer),
        FieldSpec::required("title", FieldKind::String),
        FieldSpec::required("fileType", FieldKind::String),
        FieldSpec::required("fileContent", FieldKind::Base64),
        FieldSpec::optional("pageCount", FieldKind::Integer),
        FieldSpec::optional("score", FieldKind::Integer),
        FieldSpec::generated("createdAt", FieldKind::String),
        FieldSpec::generated("updatedAt", FieldKind::String),
    ],
};

impl Validate for CreateDocumentDto {
    fn schema() -> &'static RecordSchema {
        &DOCUMENT_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Create
    }
}

impl Validate for UpdateDocumentDto {
    fn schema() -> &'static RecordSchema {
        &DOCUMENT_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Update
    }
}
