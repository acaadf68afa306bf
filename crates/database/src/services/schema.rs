use crate::{entities::courses, services::course::to_active_model};
use log::info;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema, sea_query::Table,
};

/// The catalog every fresh `courses` table starts with.
/// "MSDS4001" is kept as-is so the seed set matches existing deployments.
pub const SEED_COURSES: [(&str, &str, &str); 5] = [
    ("MSDS400", "Math for Modelers", "None"),
    ("MSDS485", "Data Governance, Ethics, and Law", "None"),
    ("MSDS403", "Data Science and Digital Transformation", "None"),
    ("MSDS460", "Decision Analytics", "MSDS400, MSDS4001"),
    ("MSDS432", "Foundations Of Data Engineering", "MSDS420"),
];

pub struct SchemaService;

impl SchemaService {
    /// Drops the `courses` table, recreates it and inserts the seed rows.
    /// Everything previously stored in the table is lost.
    pub async fn reset(db: &DatabaseConnection) -> Result<(), DbErr> {
        let backend = db.get_database_backend();

        let drop = Table::drop().table(courses::Entity).if_exists().to_owned();
        db.execute(backend.build(&drop)).await?;

        let create = Schema::new(backend)
            .create_table_from_entity(courses::Entity)
            .if_not_exists()
            .to_owned();
        db.execute(backend.build(&create)).await?;
        info!("Created table for the course catalog");

        Self::seed(db).await
    }

    pub fn seed_courses() -> Vec<courses::Model> {
        SEED_COURSES
            .iter()
            .map(|(id, name, prerequisite)| courses::Model {
                course_id: id.to_string(),
                course_name: name.to_string(),
                prerequisite: prerequisite.to_string(),
            })
            .collect()
    }

    /// Bulk-inserts the seed rows into an existing table
    pub async fn seed(db: &DatabaseConnection) -> Result<(), DbErr> {
        let rows = Self::seed_courses().into_iter().map(to_active_model);
        courses::Entity::insert_many(rows)
            .exec_without_returning(db)
            .await?;

        info!("Inserted {} seed courses", SEED_COURSES.len());
        Ok(())
    }
}
