use crate::{entities::courses, error::CourseError};
use log::debug;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, PaginatorTrait};

/// Data access for the `courses` table. Every operation is a single
/// autocommit statement against the shared pool.
#[derive(Clone, Debug)]
pub struct CourseRepository {
    db: DatabaseConnection,
}

impl CourseRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// All courses in storage order
    pub async fn list(&self) -> Result<Vec<courses::Model>, CourseError> {
        Ok(courses::Entity::find().all(&self.db).await?)
    }

    /// Inserts one course. A duplicate id is rejected by the primary key.
    pub async fn insert(&self, course: courses::Model) -> Result<(), CourseError> {
        courses::Entity::insert(to_active_model(course))
            .exec_without_returning(&self.db)
            .await?;
        Ok(())
    }

    /// Deletes the course with the given id, returning how many rows went away.
    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, course_id: &str) -> Result<u64, CourseError> {
        let result = courses::Entity::delete_by_id(course_id.to_owned())
            .exec(&self.db)
            .await?;
        debug!(
            "Deleted {} row(s) for course {course_id}",
            result.rows_affected
        );
        Ok(result.rows_affected)
    }

    pub async fn search(&self, course_id: &str) -> Result<courses::Model, CourseError> {
        courses::Entity::find_by_id(course_id.to_owned())
            .one(&self.db)
            .await?
            .ok_or_else(|| CourseError::NotFound(course_id.to_owned()))
    }

    /// Checks that the pool can still reach the database
    pub async fn ping(&self) -> Result<(), CourseError> {
        Ok(self.db.ping().await?)
    }

    /// Number of stored courses; migrate mode seeds only when this is zero
    pub async fn count(&self) -> Result<u64, CourseError> {
        Ok(courses::Entity::find().count(&self.db).await?)
    }
}

pub(crate) fn to_active_model(course: courses::Model) -> courses::ActiveModel {
    courses::ActiveModel {
        course_id: Set(course.course_id),
        course_name: Set(course.course_name),
        prerequisite: Set(course.prerequisite),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::memory_connection, services::schema::SchemaService};

    async fn seeded() -> CourseRepository {
        let db = memory_connection().await;
        SchemaService::reset(&db).await.unwrap();
        CourseRepository::new(db)
    }

    fn data_mining() -> courses::Model {
        courses::Model {
            course_id: "MSDS410".to_string(),
            course_name: "Data Mining".to_string(),
            prerequisite: "MSDS460".to_string(),
        }
    }

    #[tokio::test]
    async fn list_returns_seed_rows() {
        let repo = seeded().await;

        let mut ids: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.course_id)
            .collect();
        ids.sort();

        assert_eq!(
            ids,
            ["MSDS400", "MSDS403", "MSDS432", "MSDS460", "MSDS485"]
        );
    }

    #[tokio::test]
    async fn list_of_empty_table_is_empty() {
        let repo = seeded().await;
        for course in repo.list().await.unwrap() {
            repo.delete(&course.course_id).await.unwrap();
        }

        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ping_reaches_the_database() {
        let repo = seeded().await;

        assert!(repo.ping().await.is_ok());
    }

    #[tokio::test]
    async fn inserted_course_can_be_found() {
        let repo = seeded().await;

        repo.insert(data_mining()).await.unwrap();

        assert_eq!(repo.search("MSDS410").await.unwrap(), data_mining());
        assert_eq!(repo.count().await.unwrap(), 6);
    }

    #[tokio::test]
    async fn deleted_course_is_not_found() {
        let repo = seeded().await;

        assert_eq!(repo.delete("MSDS400").await.unwrap(), 1);

        assert!(matches!(
            repo.search("MSDS400").await,
            Err(CourseError::NotFound(id)) if id == "MSDS400"
        ));
    }

    #[tokio::test]
    async fn deleting_unknown_course_succeeds() {
        let repo = seeded().await;

        assert_eq!(repo.delete("NOPE").await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let repo = seeded().await;
        let duplicate = courses::Model {
            course_id: "MSDS400".to_string(),
            course_name: "Something Else".to_string(),
            prerequisite: "None".to_string(),
        };

        assert!(matches!(
            repo.insert(duplicate).await,
            Err(CourseError::Database(_))
        ));

        let matching = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .filter(|c| c.course_id == "MSDS400")
            .collect::<Vec<_>>();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].course_name, "Math for Modelers");
    }

    #[tokio::test]
    async fn search_for_unknown_course_is_not_found() {
        let repo = seeded().await;

        assert!(matches!(
            repo.search("NOPE").await,
            Err(CourseError::NotFound(_))
        ));
    }
}
