//! Wink repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::wink::{self, ActiveModel, Entity as WinkEntity};
use common::{AppError, AppResult};
use domain::{NewWink, Wink};

#[cfg(test)]
use mockall::automock;

/// Wink repository trait for dependency injection.
///
/// Winks are append-only: there is no update or delete.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WinkRepository: Send + Sync {
    /// Store a new wink, assigning its id
    async fn create(&self, new: NewWink) -> AppResult<Wink>;

    /// Find wink by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Wink>>;

    /// List winks on a post, oldest first (ties broken by id)
    async fn list_by_post(&self, post_id: Uuid) -> AppResult<Vec<Wink>>;
}

/// Concrete implementation of WinkRepository over SeaORM
pub struct WinkStore {
    db: DatabaseConnection,
}

impl WinkStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WinkRepository for WinkStore {
    async fn create(&self, new: NewWink) -> AppResult<Wink> {
        let wink = Wink::create(Uuid::new_v4(), new, Utc::now());
        let active_model = ActiveModel {
            id: Set(wink.id),
            post_id: Set(wink.post_id),
            user_id: Set(wink.user_id),
            created_at: Set(wink.created_at),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Wink::from(model))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Wink>> {
        let result = WinkEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Wink::from))
    }

    async fn list_by_post(&self, post_id: Uuid) -> AppResult<Vec<Wink>> {
        let models = WinkEntity::find()
            .filter(wink::Column::PostId.eq(post_id))
            .order_by_asc(wink::Column::CreatedAt)
            .order_by_asc(wink::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Wink::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone};
    use sea_orm::{DatabaseBackend, MockDatabase, Transaction, Value};

    fn model(post_id: Uuid, user_id: Uuid) -> wink::Model {
        wink::Model {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    fn store_returning(rows: Vec<wink::Model>) -> WinkStore {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();
        WinkStore::new(db)
    }

    /// Timestamp bound by the single INSERT in the log.
    fn inserted_created_at(log: &[Transaction]) -> DateTime<Utc> {
        assert_eq!(log.len(), 1);
        let statement = &log[0].statements()[0];
        assert!(statement.sql.starts_with(r#"INSERT INTO "winks""#));

        let values = statement.values.as_ref().unwrap();
        values
            .0
            .iter()
            .find_map(|value| match value {
                Value::ChronoDateTimeUtc(Some(ts)) => Some(**ts),
                _ => None,
            })
            .unwrap()
    }

    #[tokio::test]
    async fn create_returns_stored_record() {
        let stored = model(Uuid::new_v4(), Uuid::new_v4());
        let store = store_returning(vec![stored.clone()]);

        let wink = store
            .create(NewWink::new(stored.post_id, stored.user_id))
            .await
            .unwrap();

        assert_eq!(wink, Wink::from(stored));
    }

    #[tokio::test]
    async fn create_inserts_creation_instant_when_no_timestamp() {
        let stored = model(Uuid::new_v4(), Uuid::new_v4());
        let store = store_returning(vec![stored.clone()]);

        let before = Utc::now();
        store
            .create(NewWink::new(stored.post_id, stored.user_id))
            .await
            .unwrap();

        let created_at = inserted_created_at(&store.db.into_transaction_log());
        assert!(created_at >= before);
        assert!(created_at - before < Duration::seconds(1));
    }

    #[tokio::test]
    async fn create_inserts_explicit_timestamp() {
        let explicit = Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap();
        let mut stored = model(Uuid::new_v4(), Uuid::new_v4());
        stored.created_at = explicit;
        let store = store_returning(vec![stored.clone()]);

        let wink = store
            .create(NewWink::new(stored.post_id, stored.user_id).at(explicit))
            .await
            .unwrap();

        assert_eq!(wink.created_at, explicit);
        assert_eq!(inserted_created_at(&store.db.into_transaction_log()), explicit);
    }

    #[tokio::test]
    async fn find_by_id_missing_returns_none() {
        let store = store_returning(Vec::new());

        let result = store.find_by_id(Uuid::new_v4()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn list_by_post_filters_on_post() {
        let post_id = Uuid::new_v4();
        let store = store_returning(vec![
            model(post_id, Uuid::new_v4()),
            model(post_id, Uuid::new_v4()),
        ]);

        let winks = store.list_by_post(post_id).await.unwrap();

        assert_eq!(winks.len(), 2);
        assert!(winks.iter().all(|w| w.post_id == post_id));

        assert_eq!(
            store.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "winks"."id", "winks"."post_id", "winks"."user_id", "winks"."created_at" FROM "winks" WHERE "winks"."post_id" = $1 ORDER BY "winks"."created_at" ASC, "winks"."id" ASC"#,
                [post_id.into()],
            )]
        );
    }
}
