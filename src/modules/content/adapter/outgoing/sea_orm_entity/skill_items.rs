use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_name = "category_id", column_type = "Uuid")]
    pub category_id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub icon_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub proficiency: Option<String>,

    pub sort_order: i32,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_categories::Entity",
        from = "Column::CategoryId",
        to = "super::skill_categories::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    SkillCategories,
}

impl Related<super::skill_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SkillCategories.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
