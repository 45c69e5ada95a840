use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rishta_profile")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub first_name: String,
    pub surname: String,
    pub date_of_birth: Date,
    pub height_cm: Option<i32>,
    pub marital_status: String,
    pub caste: Option<String>,
    pub gotra: Option<String>,
    pub education: Option<String>,
    pub occupation: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contact_number: Option<String>,
    pub postal_address: Option<String>,
    pub about: Option<String>,
    pub is_published: bool,
    pub is_active: bool,
    pub is_deleted: bool,
    pub is_unlocked: bool,
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
    #[sea_orm(has_many = "super::rishta_profile_photo::Entity")]
    RishtaProfilePhoto,
}

impl Related<super::rishta_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaUser.def()
    }
}

impl Related<super::rishta_profile_photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RishtaProfilePhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
