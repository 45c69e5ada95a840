use sea_orm::entity::prelude::*;

/// One member of an entitlement's unlocked profile set.
///
/// `profile_id` has no foreign key, membership outlives the profile.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_entitlement_unlock")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub entitlement_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub profile_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rishta_entitlement::Entity",
        from = "Column::EntitlementId",
        to = "super::rishta_entitlement::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RishtaEntitlement,
}

impl Related<super::rishta_entitlement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaEntitlement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
