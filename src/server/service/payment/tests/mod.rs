
use rishta_test_utils::prelude::*;
use sea_orm::EntityTrait;

use super::*;

fn media(test: &TestContext) -> MediaStore {
    MediaStore::Memory(test.media.clone())
}

fn approve(override_credits: Option<i32>) -> DecidePaymentDto {
    DecidePaymentDto {
        decision: DecisionDto::Approve,
        notes: Some("UTR verified".to_string()),
        override_credits,
    }
}

fn reject() -> DecidePaymentDto {
    DecidePaymentDto {
        decision: DecisionDto::Reject,
        notes: Some("Reference not found".to_string()),
        override_credits: None,
    }
}
