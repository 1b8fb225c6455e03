use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "card")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub due_date: Date,
    pub list_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::list::Entity",
        from = "Column::ListId",
        to = "super::list::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    List,
    #[sea_orm(has_many = "super::card_user::Entity")]
    CardUser,
}

impl Related<super::list::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::List.def()
    }
}

impl Related<super::card_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CardUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
