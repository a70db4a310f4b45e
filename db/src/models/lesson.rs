use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{Condition, ConnectionTrait, QueryFilter};
use serde::{Deserialize, Serialize};

/// A bookable after-school class offering. `spaces` is the remaining
/// booking capacity and is only ever decremented through [`Model::reserve_space`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub subject: String,
    pub location: String,
    pub price: i32,
    pub spaces: i32,
    pub image: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
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
        subject: &str,
        location: &str,
        price: i32,
        spaces: i32,
        image: &str,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let lesson = ActiveModel {
            subject: Set(subject.to_owned()),
            location: Set(location.to_owned()),
            price: Set(price),
            spaces: Set(spaces),
            image: Set(image.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        lesson.insert(db).await
    }

    pub async fn get_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Takes one space off the lesson, but only if at least one is left.
    ///
    /// The availability check and the decrement are a single conditional
    /// `UPDATE`, so two competing orders can never both take the last space.
    /// Returns `false` when the lesson is full (or does not exist).
    pub async fn reserve_space<C: ConnectionTrait>(db: &C, id: i64) -> Result<bool, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Spaces, Expr::col(Column::Spaces).sub(1))
            .filter(Column::Id.eq(id))
            .filter(Column::Spaces.gte(1))
            .exec(db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Lessons whose subject or location contains `q` (case-insensitive).
    pub async fn find_matching_text<C: ConnectionTrait>(
        db: &C,
        q: &str,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Subject.contains(q))
                    .add(Column::Location.contains(q)),
            )
            .all(db)
            .await
    }

    /// Lessons whose price or remaining spaces equal `n` exactly.
    pub async fn find_matching_number<C: ConnectionTrait>(
        db: &C,
        n: i32,
    ) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(
                Condition::any()
                    .add(Column::Price.eq(n))
                    .add(Column::Spaces.eq(n)),
            )
            .all(db)
            .await
    }
}
