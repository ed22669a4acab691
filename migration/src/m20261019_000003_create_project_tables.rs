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
        // projects
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(id_column(Projects::Id))
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Slug).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text())
                    .col(ColumnDef::new(Projects::LongDescription).text())
                    .col(ColumnDef::new(Projects::TechStack).text())
                    .col(ColumnDef::new(Projects::LiveUrl).text())
                    .col(ColumnDef::new(Projects::GithubUrl).text())
                    .col(ColumnDef::new(Projects::ImageUrl).text())
                    .col(ColumnDef::new(Projects::ThumbnailUrl).text())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(published_column(Projects::Published))
                    .col(sort_order_column(Projects::SortOrder))
                    .col(timestamp_column(Projects::CreatedAt))
                    .col(timestamp_column(Projects::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // Case-insensitive slug uniqueness
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS ux_projects_slug_lower
                ON projects (lower(slug));
                "#,
            )
            .await?;
        add_sort_order_index(manager, "projects", None).await?;
        add_updated_at_trigger(manager, "projects").await?;

        // =====================================================
        // project_bullets
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectBullets::Table)
                    .if_not_exists()
                    .col(id_column(ProjectBullets::Id))
                    .col(ColumnDef::new(ProjectBullets::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectBullets::Content).text().not_null())
                    .col(sort_order_column(ProjectBullets::SortOrder))
                    .col(timestamp_column(ProjectBullets::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_bullets_project")
                            .from(ProjectBullets::Table, ProjectBullets::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "project_bullets", Some("project_id")).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProjectBullets::Table).to_owned())
            .await?;

        drop_updated_at_trigger(manager, "projects").await?;
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS ux_projects_slug_lower;")
            .await?;
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Slug,
    Description,
    LongDescription,
    TechStack,
    LiveUrl,
    GithubUrl,
    ImageUrl,
    ThumbnailUrl,
    Featured,
    Published,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProjectBullets {
    Table,
    Id,
    ProjectId,
    Content,
    SortOrder,
    CreatedAt,
}
