use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored JSON column no longer matches its typed shape.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Stored {column} of {table} row {id} is malformed: {source}")]
    MalformedJsonColumn {
        table: &'static str,
        column: &'static str,
        id: i32,
        #[source]
        source: serde_json::Error,
    },

    /// A stored enum tag is not one the application knows about.
    #[error("Stored {column} value '{value}' is not recognised")]
    UnknownEnumValue {
        column: &'static str,
        value: String,
    },
}
