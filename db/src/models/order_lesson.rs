use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// One booked lesson line on an order. Subject, location and price are
/// captured at order time so later lesson edits don't rewrite history.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "order_lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub order_id: i64,
    pub lesson_id: i64,

    pub subject: String,
    pub location: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,

    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_delete = "Cascade"
    )]
    Lesson,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        order_id: i64,
        lesson_id: i64,
        subject: &str,
        location: &str,
        price: i32,
    ) -> Result<Model, DbErr> {
        let line = ActiveModel {
            order_id: Set(order_id),
            lesson_id: Set(lesson_id),
            subject: Set(subject.to_owned()),
            location: Set(location.to_owned()),
            price: Set(price),
            ..Default::default()
        };

        line.insert(db).await
    }

    pub async fn find_by_order_id<C: ConnectionTrait>(
        db: &C,
        order_id: i64,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::OrderId.eq(order_id))
            .all(db)
            .await
    }
}
