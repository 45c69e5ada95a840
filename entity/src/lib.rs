pub mod prelude;

pub mod rishta_entitlement;
pub mod rishta_entitlement_unlock;
pub mod rishta_payment_request;
pub mod rishta_profile;
pub mod rishta_profile_photo;
pub mod rishta_user;
