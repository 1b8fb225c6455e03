use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board_user::Entity")]
    BoardUser,
    #[sea_orm(has_many = "super::card_user::Entity")]
    CardUser,
}

impl Related<super::board_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardUser.def()
    }
}

impl Related<super::card_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
