use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PhotoDto {
    /// Time-limited signed URL, or the raw storage key when signing failed
    pub url: String,
    pub is_primary: bool,
}

/// Identity-light projection returned to viewers without access.
///
/// Never carries surname, contact number, postal address or secondary photos.
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RedactedProfileDto {
    pub id: i32,
    pub code: String,
    pub first_name: String,
    pub age: i32,
    pub height_cm: Option<i32>,
    pub marital_status: String,
    /// Caste and gotra joined into one string
    pub community: Option<String>,
    /// Education, falling back to occupation
    pub education_or_occupation: Option<String>,
    /// City and state only
    pub location: Option<String>,
    pub photo: Option<PhotoDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FullProfileDto {
    pub id: i32,
    pub owner_id: i32,
    pub code: String,
    pub first_name: String,
    pub surname: String,
    pub date_of_birth: NaiveDate,
    pub age: i32,
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
    pub photos: Vec<PhotoDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "projection", rename_all = "snake_case")]
pub enum ProfileViewDto {
    Full(FullProfileDto),
    Redacted(RedactedProfileDto),
}

impl ProfileViewDto {
    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full(_))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProfileListDto {
    pub profiles: Vec<ProfileViewDto>,
    pub page: u64,
    pub per_page: u64,
}
