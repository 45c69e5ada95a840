use sea_orm::entity::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PaymentPlan {
    #[sea_orm(string_value = "basic")]
    Basic,
    #[sea_orm(string_value = "standard")]
    Standard,
    #[sea_orm(string_value = "premium")]
    Premium,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum PaymentStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "approved")]
    Approved,
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_payment_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub requester_id: i32,
    pub plan: PaymentPlan,
    pub reference_code: String,
    pub proof_key: String,
    pub status: PaymentStatus,
    pub effective_credits: Option<i32>,
    pub reviewer_id: Option<i32>,
    pub review_notes: Option<String>,
    pub decided_at: Option<DateTime>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rishta_user::Entity",
        from = "Column::RequesterId",
        to = "super::rishta_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    RishtaUser,
}

impl Related<super::rishta_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
