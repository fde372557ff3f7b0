use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String, // 24 char hex ObjectId
    pub name: String,
    pub student_number: Option<i64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

// Courses point at students through course_students without a foreign key,
// so a student can be deleted while courses still list it.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
