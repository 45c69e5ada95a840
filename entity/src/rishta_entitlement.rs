use sea_orm::entity::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum EntitlementStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "revoked")]
    Revoked,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_entitlement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub owner_id: i32,
    #[sea_orm(unique)]
    pub access_token: String,
    pub max_credits: i32,
    pub remaining_credits: i32,
    pub consumed_count: i32,
    pub valid_from: DateTime,
    pub valid_to: DateTime,
    pub status: EntitlementStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rishta_user::Entity",
        from = "Column::OwnerId",
        to = "super::rishta_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RishtaUser,
    #[sea_orm(has_many = "super::rishta_entitlement_unlock::Entity")]
    RishtaEntitlementUnlock,
}

impl Related<super::rishta_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaUser.def()
    }
}

impl Related<super::rishta_entitlement_unlock::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaEntitlementUnlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
