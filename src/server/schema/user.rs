use crate::{
    model::user::{CreateUserDto, UpdateUserDto},
    server::schema::{FieldKind, FieldSpec, RecordSchema, Validate, WriteMode},
};

pub const USER_TYPES: &[&str] = &["startup", "investor", "partner", "admin"];

pub static USER_RECORD: RecordSchema = RecordSchema {
    name: "user",
    fields: &[
        FieldSpec::generated("id", FieldKind::Integer),
        FieldSpec::required("username", FieldKind::String),
        FieldSpec::required("password", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("userType", FieldKind::OneOf(USER_TYPES)),
        FieldSpec::optional("avatar", FieldKind::String),
        FieldSpec::generated("createdAt", FieldKind::String),
    ],
};

impl Validate for CreateUserDto {
    fn schema() -> &'static RecordSchema {
        &USER_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Create
    }
}

impl Validate for UpdateUserDto {
    fn schema() -> &'static RecordSchema {
        &USER_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Update
    }
}
