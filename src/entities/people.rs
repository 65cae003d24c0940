use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "people")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    pub birthday: Option<String>,
    pub gender: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub biography: Option<String>,
    pub profile_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::movie_actors::Entity")]
    MovieActors,
    #[sea_orm(has_many = "super::movie_crews::Entity")]
    MovieCrews,
}

impl Related<super::movie_actors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieActors.def()
    }
}

impl Related<super::movie_crews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MovieCrews.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
