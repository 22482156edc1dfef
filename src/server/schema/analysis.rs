use serde::Deserialize;
use serde_json::Value;

use crate::{
    model::analysis::{
        ComparisonDataDto, CreateAnalysisDto, ImprovementAreaDto, UpdateAnalysisDto,
    },
    server::schema::{FieldKind, FieldSpec, RecordSchema, Validate, WriteMode},
};

fn improvement_areas(value: &Value) -> Result<(), String> {
    Vec::<ImprovementAreaDto>::deserialize(value)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

fn comparison_data(value: &Value) -> Result<(), String> {
    ComparisonDataDto::deserialize(value)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub static ANALYSIS_RECORD: RecordSchema = RecordSchema {
    name: "analysis",
    fields: &[
        FieldSpec::generated("id", FieldKind::Integer),
        FieldSpec::required("documentId", FieldKind::Integer),
        FieldSpec::required("feasibilityScore", FieldKind::Integer),
        FieldSpec::required("scalabilityScore", FieldKind::Integer),
        FieldSpec::required("financialHealthScore", FieldKind::Integer),
        FieldSpec::required("innovationScore", FieldKind::Integer),
        FieldSpec::required("marketFitScore", FieldKind::Integer),
        FieldSpec::required("overallScore", FieldKind::Integer),
        FieldSpec::required(
            "improvementAreas",
            FieldKind::Shape {
                expected: "list of { area, score, suggestion }",
                check: improvement_areas,
            },
        ),
        FieldSpec::required(
            "comparisonData",
            FieldKind::Shape {
                expected: "{ industryAverage, topPerformers }",
                check: comparison_data,
            },
        ),
        FieldSpec::generated("createdAt", FieldKind::String),
    ],
};

impl Validate for CreateAnalysisDto {
    fn schema() -> &'static RecordSchema {
        &ANALYSIS_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Create
    }
}

impl Validate for UpdateAnalysisDto {
    fn schema() -> &'static RecordSchema {
        &ANALYSIS_RECORD
    }

    fn mode() -> WriteMode {
        WriteMode::Update
    }
}
