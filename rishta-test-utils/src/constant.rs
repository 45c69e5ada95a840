/// Username placed on the admin allow-list of test application state
pub const TEST_ADMIN_USERNAME: &str = "admin";
/// Email placed on the admin allow-list of test application state
pub const TEST_ADMIN_EMAIL: &str = "admin@rishta.test";
/// Lifetime of signed photo URLs in test application state
pub const TEST_PHOTO_URL_TTL_SECS: u64 = 600;
/// Payload written for mock photos and payment proofs
pub const TEST_IMAGE_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nmock";
