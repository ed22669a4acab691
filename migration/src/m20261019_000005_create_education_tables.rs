use sea_orm_migration::prelude::*;

use crate::common::{
    add_sort_order_index, add_updated_at_trigger, drop_updated_at_trigger, id_column,
    published_column, sort_order_column, timestamp_column,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // education
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(id_column(Education::Id))
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Degree).text().not_null())
                    .col(ColumnDef::new(Education::FieldOfStudy).text())
                    .col(ColumnDef::new(Education::Location).text())
                    .col(ColumnDef::new(Education::StartYear).integer().not_null())
                    .col(ColumnDef::new(Education::EndYear).integer())
                    .col(ColumnDef::new(Education::Gpa).text())
                    .col(ColumnDef::new(Education::Description).text())
                    .col(ColumnDef::new(Education::LogoUrl).text())
                    .col(published_column(Education::Published))
                    .col(sort_order_column(Education::SortOrder))
                    .col(timestamp_column(Education::CreatedAt))
                    .col(timestamp_column(Education::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "education", None).await?;
        add_updated_at_trigger(manager, "education").await?;

        // =====================================================
        // certifications
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Certifications::Table)
                    .if_not_exists()
                    .col(id_column(Certifications::Id))
                    .col(ColumnDef::new(Certifications::Name).text().not_null())
                    .col(ColumnDef::new(Certifications::Issuer).text().not_null())
                    .col(ColumnDef::new(Certifications::IssueDate).date().not_null())
                    .col(ColumnDef::new(Certifications::ExpiryDate).date())
                    .col(ColumnDef::new(Certifications::CredentialId).text())
                    .col(ColumnDef::new(Certifications::CredentialUrl).text())
                    .col(ColumnDef::new(Certifications::BadgeUrl).text())
                    .col(published_column(Certifications::Published))
                    .col(sort_order_column(Certifications::SortOrder))
                    .col(timestamp_column(Certifications::CreatedAt))
                    .col(timestamp_column(Certifications::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "certifications", None).await?;
        add_updated_at_trigger(manager, "certifications").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "certifications").await?;
        manager
            .drop_table(Table::drop().table(Certifications::Table).to_owned())
            .await?;

        drop_updated_at_trigger(manager, "education").await?;
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Institution,
    Degree,
    FieldOfStudy,
    Location,
    StartYear,
    EndYear,
    Gpa,
    Description,
    LogoUrl,
    Published,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Certifications {
    Table,
    Id,
    Name,
    Issuer,
    IssueDate,
    ExpiryDate,
    CredentialId,
    CredentialUrl,
    BadgeUrl,
    Published,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
