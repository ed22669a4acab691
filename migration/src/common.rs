use sea_orm_migration::prelude::*;

/// Installs the `updated_at` trigger on a table that has the column.
pub async fn add_updated_at_trigger(manager: &SchemaManager<'_>, table: &str) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            r#"
            CREATE TRIGGER update_{table}_updated_at
            BEFORE UPDATE ON {table}
            FOR EACH ROW
            EXECUTE FUNCTION update_updated_at_column();
            "#
        ))
        .await?;
    Ok(())
}

pub async fn drop_updated_at_trigger(
    manager: &SchemaManager<'_>,
    table: &str,
) -> Result<(), DbErr> {
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "DROP TRIGGER IF EXISTS update_{table}_updated_at ON {table};"
        ))
        .await?;
    Ok(())
}

/// Index backing rank-ordered reads, optionally scoped by a parent column.
pub async fn add_sort_order_index(
    manager: &SchemaManager<'_>,
    table: &str,
    parent_column: Option<&str>,
) -> Result<(), DbErr> {
    let columns = match parent_column {
        Some(parent) => format!("{parent}, sort_order"),
        None => "sort_order".to_string(),
    };
    manager
        .get_connection()
        .execute_unprepared(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_sort_order ON {table} ({columns});"
        ))
        .await?;
    Ok(())
}

pub fn id_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .uuid()
        .not_null()
        .primary_key()
        .default(Expr::cust("gen_random_uuid()"))
        .to_owned()
}

pub fn timestamp_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden)
        .timestamp_with_time_zone()
        .not_null()
        .default(Expr::current_timestamp())
        .to_owned()
}

pub fn sort_order_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden).integer().not_null().default(0).to_owned()
}

pub fn published_column<T: IntoIden>(iden: T) -> ColumnDef {
    ColumnDef::new(iden).boolean().not_null().default(true).to_owned()
}
