//! Wink database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Wink;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "winks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Wink {
    fn from(model: Model) -> Self {
        Wink {
            id: model.id,
            post_id: model.post_id,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
