use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000002_create_document_table::Document;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Analysis::Table)
                    .if_not_exists()
                    .col(pk_auto(Analysis::Id))
                    // One analysis per document
                    .col(integer_uniq(Analysis::DocumentId))
                    .col(integer(Analysis::FeasibilityScore))
                    .col(integer(Analysis::ScalabilityScore))
                    .col(integer(Analysis::FinancialHealthScore))
                    .col(integer(Analysis::InnovationScore))
                    .col(integer(Analysis::MarketFitScore))
                    .col(integer(Analysis::OverallScore))
                    .col(json_binary(Analysis::ImprovementAreas))
                    .col(json_binary(Analysis::ComparisonData))
                    .col(
                        timestamp_with_time_zone(Analysis::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_analyses_document_id")
                            .from(Analysis::Table, Analysis::DocumentId)
                            .to(Document::Table, Document::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Analysis::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Analysis {
    #[sea_orm(iden = "analyses")]
    Table,
    Id,
    DocumentId,
    FeasibilityScore,
    ScalabilityScore,
    FinancialHealthScore,
    InnovationScore,
    MarketFitScore,
    OverallScore,
    ImprovementAreas,
    ComparisonData,
    CreatedAt,
}
