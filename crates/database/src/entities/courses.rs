use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(
        primary_key,
        auto_increment = false,
        column_type = "String(StringLen::N(10))"
    )]
    pub course_id: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub course_name: String,
    /// Free text, usually comma-separated course ids or "None". Not a foreign key.
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub prerequisite: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
