use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::rishta_entitlement::Entity")]
    RishtaEntitlement,
    #[sea_orm(has_many = "super::rishta_payment_request::Entity")]
    RishtaPaymentRequest,
    #[sea_orm(has_many = "super::rishta_profile::Entity")]
    RishtaProfile,
}

impl Related<super::rishta_entitlement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaEntitlement.def()
    }
}

impl Related<super::rishta_payment_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaPaymentRequest.def()
    }
}

impl Related<super::rishta_profile::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaProfile.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
