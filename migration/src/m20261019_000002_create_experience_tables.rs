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
        // experiences
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(id_column(Experiences::Id))
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::Role).text().not_null())
                    .col(ColumnDef::new(Experiences::Location).text())
                    .col(ColumnDef::new(Experiences::EmploymentType).text())
                    .col(ColumnDef::new(Experiences::StartDate).date().not_null())
                    .col(ColumnDef::new(Experiences::EndDate).date())
                    .col(ColumnDef::new(Experiences::Description).text())
                    .col(ColumnDef::new(Experiences::TechStack).text())
                    .col(ColumnDef::new(Experiences::CompanyUrl).text())
                    .col(ColumnDef::new(Experiences::LogoUrl).text())
                    .col(published_column(Experiences::Published))
                    .col(sort_order_column(Experiences::SortOrder))
                    .col(timestamp_column(Experiences::CreatedAt))
                    .col(timestamp_column(Experiences::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "experiences", None).await?;
        add_updated_at_trigger(manager, "experiences").await?;

        // =====================================================
        // experience_bullets
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ExperienceBullets::Table)
                    .if_not_exists()
                    .col(id_column(ExperienceBullets::Id))
                    .col(ColumnDef::new(ExperienceBullets::ExperienceId).uuid().not_null())
                    .col(ColumnDef::new(ExperienceBullets::Content).text().not_null())
                    .col(sort_order_column(ExperienceBullets::SortOrder))
                    .col(timestamp_column(ExperienceBullets::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experience_bullets_experience")
                            .from(ExperienceBullets::Table, ExperienceBullets::ExperienceId)
                            .to(Experiences::Table, Experiences::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "experience_bullets", Some("experience_id")).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ExperienceBullets::Table).to_owned())
            .await?;

        drop_updated_at_trigger(manager, "experiences").await?;
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    Company,
    Role,
    Location,
    EmploymentType,
    StartDate,
    EndDate,
    Description,
    TechStack,
    CompanyUrl,
    LogoUrl,
    Published,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ExperienceBullets {
    Table,
    Id,
    ExperienceId,
    Content,
    SortOrder,
    CreatedAt,
}
