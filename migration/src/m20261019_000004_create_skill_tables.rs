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
        manager
            .create_table(
                Table::create()
                    .table(SkillCategories::Table)
                    .if_not_exists()
                    .col(id_column(SkillCategories::Id))
                    .col(ColumnDef::new(SkillCategories::Name).text().not_null())
                    .col(ColumnDef::new(SkillCategories::Icon).text())
                    .col(published_column(SkillCategories::Published))
                    .col(sort_order_column(SkillCategories::SortOrder))
                    .col(timestamp_column(SkillCategories::CreatedAt))
                    .col(timestamp_column(SkillCategories::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "skill_categories", None).await?;
        add_updated_at_trigger(manager, "skill_categories").await?;

        manager
            .create_table(
                Table::create()
                    .table(SkillItems::Table)
                    .if_not_exists()
                    .col(id_column(SkillItems::Id))
                    .col(ColumnDef::new(SkillItems::CategoryId).uuid().not_null())
                    .col(ColumnDef::new(SkillItems::Name).text().not_null())
                    .col(ColumnDef::new(SkillItems::IconUrl).text())
                    .col(ColumnDef::new(SkillItems::Proficiency).text())
                    .col(sort_order_column(SkillItems::SortOrder))
                    .col(timestamp_column(SkillItems::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_items_category")
                            .from(SkillItems::Table, SkillItems::CategoryId)
                            .to(SkillCategories::Table, SkillCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        add_sort_order_index(manager, "skill_items", Some("category_id")).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillItems::Table).to_owned())
            .await?;

        drop_updated_at_trigger(manager, "skill_categories").await?;
        manager
            .drop_table(Table::drop().table(SkillCategories::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SkillCategories {
    Table,
    Id,
    Name,
    Icon,
    Published,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SkillItems {
    Table,
    Id,
    CategoryId,
    Name,
    IconUrl,
    Proficiency,
    SortOrder,
    CreatedAt,
}
