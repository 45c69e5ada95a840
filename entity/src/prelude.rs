pub use super::rishta_entitlement::Entity as RishtaEntitlement;
pub use super::rishta_entitlement_unlock::Entity as RishtaEntitlementUnlock;
pub use super::rishta_payment_request::Entity as RishtaPaymentRequest;
pub use super::rishta_profile::Entity as RishtaProfile;
pub use super::rishta_profile_photo::Entity as RishtaProfilePhoto;
pub use super::rishta_user::Entity as RishtaUser;
