use sea_orm_migration::prelude::*;

use crate::common::{add_updated_at_trigger, drop_updated_at_trigger, id_column, timestamp_column};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // updated_at trigger function (shared by every table)
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE OR REPLACE FUNCTION update_updated_at_column()
                RETURNS TRIGGER AS $$
                BEGIN
                    NEW.updated_at = CURRENT_TIMESTAMP;
                    RETURN NEW;
                END;
                $$ language 'plpgsql';
                "#,
            )
            .await?;

        // =====================================================
        // profile
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(id_column(Profile::Id))
                    .col(ColumnDef::new(Profile::Name).text().not_null())
                    .col(ColumnDef::new(Profile::Title).text().not_null())
                    .col(ColumnDef::new(Profile::Tagline).text())
                    .col(ColumnDef::new(Profile::Bio).text())
                    .col(ColumnDef::new(Profile::AvatarUrl).text())
                    .col(ColumnDef::new(Profile::ResumeUrl).text())
                    .col(ColumnDef::new(Profile::Email).text())
                    .col(ColumnDef::new(Profile::GithubUrl).text())
                    .col(ColumnDef::new(Profile::LinkedinUrl).text())
                    .col(ColumnDef::new(Profile::TwitterUrl).text())
                    .col(ColumnDef::new(Profile::Nickname).text())
                    .col(timestamp_column(Profile::CreatedAt))
                    .col(timestamp_column(Profile::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_updated_at_trigger(manager, "profile").await?;

        // =====================================================
        // contact_settings
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ContactSettings::Table)
                    .if_not_exists()
                    .col(id_column(ContactSettings::Id))
                    .col(ColumnDef::new(ContactSettings::Email).text().not_null())
                    .col(ColumnDef::new(ContactSettings::Phone).text())
                    .col(ColumnDef::new(ContactSettings::Location).text())
                    .col(ColumnDef::new(ContactSettings::AvailabilityStatus).text())
                    .col(
                        ColumnDef::new(ContactSettings::FormEnabled)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ContactSettings::FormRecipient).text())
                    .col(ColumnDef::new(ContactSettings::SuccessMessage).text())
                    .col(timestamp_column(ContactSettings::CreatedAt))
                    .col(timestamp_column(ContactSettings::UpdatedAt))
                    .to_owned(),
            )
            .await?;
        add_updated_at_trigger(manager, "contact_settings").await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_updated_at_trigger(manager, "contact_settings").await?;
        drop_updated_at_trigger(manager, "profile").await?;

        manager
            .drop_table(Table::drop().table(ContactSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP FUNCTION IF EXISTS update_updated_at_column();")
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Title,
    Tagline,
    Bio,
    AvatarUrl,
    ResumeUrl,
    Email,
    GithubUrl,
    LinkedinUrl,
    TwitterUrl,
    Nickname,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ContactSettings {
    Table,
    Id,
    Email,
    Phone,
    Location,
    AvailabilityStatus,
    FormEnabled,
    FormRecipient,
    SuccessMessage,
    CreatedAt,
    UpdatedAt,
}
