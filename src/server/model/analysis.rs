//! Analysis domain models and parameters.
//!
//! An analysis scores a single document across five dimensions plus an overall score.
//! Improvement areas and benchmark comparison data are stored as JSON columns and
//! re-typed when read back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::analysis::{
        AnalysisDto, ComparisonDataDto, CreateAnalysisDto, ImprovementAreaDto, UpdateAnalysisDto,
    },
    server::error::internal::InternalError,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImprovementArea {
    pub area: String,
    pub score: i32,
    pub suggestion: String,
}

impl ImprovementArea {
    pub fn from_dto(dto: ImprovementAreaDto) -> Self {
        Self {
            area: dto.area,
            score: dto.score,
            suggestion: dto.suggestion,
        }
    }

    pub fn into_dto(self) -> ImprovementAreaDto {
        ImprovementAreaDto {
            area: self.area,
            score: self.score,
            suggestion: self.suggestion,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonData {
    pub industry_average: f64,
    pub top_performers: f64,
}

impl ComparisonData {
    pub fn from_dto(dto: ComparisonDataDto) -> Self {
        Self {
            industry_average: dto.industry_average,
            top_performers: dto.top_performers,
        }
    }

    pub fn into_dto(self) -> ComparisonDataDto {
        ComparisonDataDto {
            industry_average: self.industry_average,
            top_performers: self.top_performers,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub id: i32,
    pub document_id: i32,
    pub feasibility_score: i32,
    pub scalability_score: i32,
    pub financial_health_score: i32,
    pub innovation_score: i32,
    pub market_fit_score: i32,
    pub overall_score: i32,
    pub improvement_areas: Vec<ImprovementArea>,
    pub comparison_data: ComparisonData,
    pub created_at: DateTime<Utc>,
}

impl Analysis {
    /// Converts an entity model to an analysis domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Analysis)` - The converted analysis with typed JSON payloads
    /// - `Err(InternalError::MalformedJsonColumn)` - A stored JSON column has the wrong shape
    pub fn from_entity(entity: entity::analysis::Model) -> Result<Self, InternalError> {
        let id = entity.id;
        let malformed = |column, source| InternalError::MalformedJsonColumn {
            table: "analyses",
            column,
            id,
            source,
        };

        let improvement_areas = serde_json::from_value(entity.improvement_areas)
            .map_err(|e| malformed("improvement_areas", e))?;
        let comparison_data = serde_json::from_value(entity.comparison_data)
            .map_err(|e| malformed("comparison_data", e))?;

        Ok(Self {
            id,
            document_id: entity.document_id,
            feasibility_score: entity.feasibility_score,
            scalability_score: entity.scalability_score,
            financial_health_score: entity.financial_health_score,
            innovation_score: entity.innovation_score,
            market_fit_score: entity.market_fit_score,
            overall_score: entity.overall_score,
            improvement_areas,
            comparison_data,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> AnalysisDto {
        AnalysisDto {
            id: self.id,
            document_id: self.document_id,
            feasibility_score: self.feasibility_score,
            scalability_score: self.scalability_score,
            financial_health_score: self.financial_health_score,
            innovation_score: self.innovation_score,
            market_fit_score: self.market_fit_score,
            overall_score: self.overall_score,
            improvement_areas: self
                .improvement_areas
                .into_iter()
                .map(ImprovementArea::into_dto)
                .collect(),
            comparison_data: self.comparison_data.into_dto(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAnalysisParams {
    pub document_id: i32,
    pub feasibility_score: i32,
    pub scalability_score: i32,
    pub financial_health_score: i32,
    pub innovation_score: i32,
    pub market_fit_score: i32,
    pub overall_score: i32,
    pub improvement_areas: Vec<ImprovementArea>,
    pub comparison_data: ComparisonData,
}

impl CreateAnalysisParams {
    pub fn from_dto(dto: CreateAnalysisDto) -> Self {
        Self {
            document_id: dto.document_id,
            feasibility_score: dto.feasibility_score,
            scalability_score: dto.scalability_score,
            financial_health_score: dto.financial_health_score,
            innovation_score: dto.innovation_score,
            market_fit_score: dto.market_fit_score,
            overall_score: dto.overall_score,
            improvement_areas: dto
                .improvement_areas
                .into_iter()
                .map(ImprovementArea::from_dto)
                .collect(),
            comparison_data: ComparisonData::from_dto(dto.comparison_data),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAnalysisParams {
    pub document_id: Option<i32>,
    pub feasibility_score: Option<i32>,
    pub scalability_score: Option<i32>,
    pub financial_health_score: Option<i32>,
    pub innovation_score: Option<i32>,
    pub market_fit_score: Option<i32>,
    pub overall_score: Option<i32>,
    pub improvement_areas: Option<Vec<ImprovementArea>>,
    pub comparison_data: Option<ComparisonData>,
}

impl UpdateAnalysisParams {
    pub fn from_dto(dto: UpdateAnalysisDto) -> Self {
        Self {
            document_id: dto.document_id,
            feasibility_score: dto.feasibility_score,
            scalability_score: dto.scalability_score,
            financial_health_score: dto.financial_health_score,
            innovation_score: dto.innovation_score,
            market_fit_score: dto.market_fit_score,
            overall_score: dto.overall_score,
            improvement_areas: dto
                .improvement_areas
                .map(|areas| areas.into_iter().map(ImprovementArea::from_dto).collect()),
            comparison_data: dto.comparison_data.map(ComparisonData::from_dto),
        }
    }
}
