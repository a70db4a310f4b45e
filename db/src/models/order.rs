use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::ConnectionTrait;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A customer's booking. Orders are insert-only; the booked lessons are
/// snapshotted into `order_lessons` rows at placement time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub customer_name: String,
    pub phone: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_lesson::Entity")]
    OrderLesson,
}

impl Related<super::order_lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderLesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        customer_name: &str,
        phone: &str,
    ) -> Result<Model, DbErr> {
        let order = ActiveModel {
            customer_name: Set(customer_name.to_owned()),
            phone: Set(phone.to_owned()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        order.insert(db).await
    }

    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }
}
