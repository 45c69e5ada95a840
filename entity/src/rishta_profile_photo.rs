use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_profile_photo")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub profile_id: i32,
    pub storage_key: String,
    pub is_primary: bool,
    pub position: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rishta_profile::Entity",
        from = "Column::ProfileId",
        to = "super::rishta_profile::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RishtaProfile,
}

impl Related<super::rishta_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
