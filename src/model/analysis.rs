use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A weak spot found by the analysis, with a suggested fix.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ImprovementAreaDto {
    pub area: String,
    pub score: i32,
    pub suggestion: String,
}

/// Benchmark figures the overall score is compared against.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComparisonDataDto {
    pub industry_average: f64,
    pub top_performers: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDto {
    pub id: i32,
    pub document_id: i32,
    pub feasibility_score: i32,
    pub scalability_score: i32,
    pub financial_health_score: i32,
    pub innovation_score: i32,
    pub market_fit_score: i32,
    pub overall_score: i32,
    pub improvement_areas: Vec<ImprovementAreaDto>,
    pub comparison_data: ComparisonDataDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAnalysisDto {
    pub document_id: i32,
    pub feasibility_score: i32,
    pub scalability_score: i32,
    pub financial_health_score: i32,
    pub innovation_score: i32,
    pub market_fit_score: i32,
    pub overall_score: i32,
    pub improvement_areas: Vec<ImprovementAreaDto>,
    pub comparison_data: ComparisonDataDto,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAnalysisDto {
    #[serde(default)]
    pub document_id: Option<i32>,
    #[serde(default)]
    pub feasibility_score: Option<i32>,
    #[serde(default)]
    pub scalability_score: Option<i32>,
    #[serde(default)]
    pub financial_health_score: Option<i32>,
    #[serde(default)]
    pub innovation_score: Option<i32>,
    #[serde(default)]
    pub market_fit_score: Option<i32>,
    #[serde(default)]
    pub overall_score: Option<i32>,
    #[serde(default)]
    pub improvement_areas: Option<Vec<ImprovementAreaDto>>,
    #[serde(default)]
    pub comparison_data: Option<ComparisonDataDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AnalysisResponseDto {
    pub analysis: AnalysisDto,
}

/// Lookup by document; `analysis` is `null` when none exists yet.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct OptionalAnalysisResponseDto {
    pub analysis: Option<AnalysisDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct AnalysisListResponseDto {
    pub analyses: Vec<AnalysisDto>,
}
