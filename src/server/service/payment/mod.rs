//! Payment request workflow.
//!
//! Requesters submit a claim of an off-band payment together with a screenshot of the proof.
//! An administrator approves or rejects each claim exactly once; approval is the only way an
//! entitlement gains credits.

#[cfg(test)]
mod tests;

use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use entity::rishta_payment_request::PaymentStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::payment::{
        DecidePaymentDto, DecisionDto, DecisionResultDto, PaymentRequestDto, PaymentStatusDto,
        PendingPaymentDto,
    },
    server::{
        data::{
            entitlement::EntitlementRepository,
            payment::{PaymentDecisionRecord, PaymentRequestRepository},
        },
        error::{entitlement::EntitlementError, payment::PaymentError, Error},
        model::plan::PlanDefinition,
        service::{entitlement::entitlement_dto, retry::RetryContext},
        storage::MediaStore,
        util::{
            time::{renewed_validity, validity_end},
            token::random_token,
        },
    },
};

const ACCESS_TOKEN_LEN: usize = 32;

/// Uploaded payment screenshot
#[derive(Clone, Debug)]
pub struct ProofUpload {
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Approved => Self::Approved,
            PaymentStatus::Rejected => Self::Rejected,
        }
    }
}

impl From<entity::rishta_payment_request::Model> for PaymentRequestDto {
    fn from(request: entity::rishta_payment_request::Model) -> Self {
        Self {
            id: request.id,
            requester_id: request.requester_id,
            plan: request.plan.into(),
            reference_code: request.reference_code,
            status: request.status.into(),
            effective_credits: request.effective_credits,
            reviewer_id: request.reviewer_id,
            review_notes: request.review_notes,
            decided_at: request.decided_at,
            created_at: request.created_at,
        }
    }
}

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    media: &'a MediaStore,
}

impl<'a> PaymentService<'a> {
    /// Creates a new instance of PaymentService.
    pub fn new(db: &'a DatabaseConnection, media: &'a MediaStore) -> Self {
        Self { db, media }
    }

    /// Stores the proof and records a pending payment request.
    ///
    /// No entitlement changes until an administrator approves the request.
    ///
    /// # Returns
    /// - `Ok(PaymentRequestDto)` - The pending request
    /// - `Err(Error::PaymentError(PaymentError::InvalidPlan))` - Plan is not in the plan table
    /// - `Err(Error::PaymentError(PaymentError::MissingField))` - Blank reference code or empty proof
    /// - `Err(Error::StorageError)` - Proof could not be stored, no request is created
    /// - `Err(Error::DbErr)` - Database operation failed after retries, the stored proof is discarded
    pub async fn submit(
        &self,
        requester_id: i32,
        plan_id: &str,
        reference_code: &str,
        proof: ProofUpload,
    ) -> Result<PaymentRequestDto, Error> {
        let plan = PlanDefinition::parse(plan_id)?;

        let reference_code = reference_code.trim().to_string();
        if reference_code.is_empty() {
            return Err(PaymentError::MissingField("reference_code").into());
        }
        if proof.bytes.is_empty() {
            return Err(PaymentError::MissingField("proof").into());
        }

        let proof_key = self
            .media
            .store(
                &format!("payments/{}", requester_id),
                proof.bytes,
                proof.content_type.as_deref(),
            )
            .await?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let request = ctx
            .execute_with_retry(
                &format!("payment submission of user ID {}", requester_id),
                |_| {
                    let db = db.clone();
                    let reference_code = reference_code.clone();
                    let proof_key = proof_key.clone();

                    Box::pin(async move {
                        let payment_repo = PaymentRequestRepository::new(&db);

                        Ok(payment_repo
                            .create(
                                requester_id,
                                plan.plan,
                                reference_code,
                                proof_key,
                                Utc::now().naive_utc(),
                            )
                            .await?)
                    })
                },
            )
            .await;

        let request = match request {
            Ok(request) => request,
            Err(err) => {
                self.media.discard(&proof_key).await;

                return Err(err);
            }
        };

        tracing::info!(
            user_id = %requester_id,
            payment_request_id = %request.id,
            "Submitted payment request"
        );

        Ok(request.into())
    }

    /// Approves or rejects a pending payment request.
    ///
    /// Approval grants `override_credits` (or the plan's credits) to the requester's
    /// entitlement, creating it on first approval. The status transition and the top-up
    /// commit together.
    ///
    /// # Returns
    /// - `Ok(DecisionResultDto)` - Decided request, plus the requester's entitlement on approval
    /// - `Err(Error::PaymentError(PaymentError::InvalidOverrideCredits))` - Non-positive override on approval
    /// - `Err(Error::PaymentError(PaymentError::NotFound))` - Request does not exist
    /// - `Err(Error::PaymentError(PaymentError::AlreadyProcessed))` - Request was already decided
    /// - `Err(Error::EntitlementError(EntitlementError::UpdateConflict))` - Entitlement kept changing under every retry
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn decide(
        &self,
        request_id: i32,
        reviewer_id: i32,
        decision: DecidePaymentDto,
    ) -> Result<DecisionResultDto, Error> {
        let override_credits = match decision.decision {
            DecisionDto::Approve => decision.override_credits,
            DecisionDto::Reject => None,
        };
        if let Some(credits) = override_credits {
            if credits <= 0 {
                return Err(PaymentError::InvalidOverrideCredits(credits).into());
            }
        }

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let result = ctx
            .execute_with_retry(&format!("decision on payment request ID {}", request_id), |_| {
                let db = db.clone();
                let notes = decision.notes.clone();
                let verdict = decision.decision;

                Box::pin(async move {
                    let now = Utc::now().naive_utc();
                    let txn = db.begin().await?;
                    let payment_repo = PaymentRequestRepository::new(&txn);

                    let request = payment_repo
                        .get_by_id(request_id)
                        .await?
                        .ok_or(PaymentError::NotFound(request_id))?;
                    if request.status != PaymentStatus::Pending {
                        return Err(PaymentError::AlreadyProcessed(request_id).into());
                    }

                    let (status, effective_credits) = match verdict {
                        DecisionDto::Approve => {
                            let credits = override_credits
                                .unwrap_or(PlanDefinition::of(request.plan).credits_granted);

                            (PaymentStatus::Approved, Some(credits))
                        }
                        DecisionDto::Reject => (PaymentStatus::Rejected, None),
                    };

                    let decided = payment_repo
                        .mark_decided(
                            request_id,
                            PaymentDecisionRecord {
                                status,
                                reviewer_id,
                                review_notes: notes,
                                effective_credits,
                                decided_at: now,
                            },
                        )
                        .await?;
                    if !decided {
                        return Err(PaymentError::AlreadyProcessed(request_id).into());
                    }

                    let entitlement = match effective_credits {
                        None => None,
                        Some(credits) => {
                            let owner_id = request.requester_id;

                            let entitlement = grant_credits(&txn, owner_id, credits, now).await?;

                            Some(entitlement_dto(entitlement, now))
                        }
                    };

                    let request = payment_repo
                        .get_by_id(request_id)
                        .await?
                        .ok_or(PaymentError::NotFound(request_id))?;

                    txn.commit().await?;

                    Ok(DecisionResultDto {
                        request: request.into(),
                        entitlement,
                    })
                })
            })
            .await?;

        tracing::info!(
            payment_request_id = %request_id,
            reviewer_id = %reviewer_id,
            status = ?result.request.status,
            effective_credits = ?result.request.effective_credits,
            "Decided payment request"
        );

        Ok(result)
    }

    /// Lists pending requests, oldest first, each with a time-limited link to its proof.
    ///
    /// Proofs that fail to sign are linked by their raw storage key.
    pub async fn list_pending(&self, ttl: Duration) -> Result<Vec<PendingPaymentDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        let requests = ctx
            .execute_with_retry("listing of pending payment requests", |_| {
                let db = db.clone();

                Box::pin(async move {
                    let payment_repo = PaymentRequestRepository::new(&db);

                    Ok(payment_repo.get_pending().await?)
                })
            })
            .await?;

        let mut pending = Vec::with_capacity(requests.len());
        for request in requests {
            let proof_url = self.media.sign_or_fallback(&request.proof_key, ttl).await;

            pending.push(PendingPaymentDto {
                request: request.into(),
                proof_url,
            });
        }

        Ok(pending)
    }

    /// Lists the requests submitted by `requester_id`, newest first.
    pub async fn list_for_requester(
        &self,
        requester_id: i32,
    ) -> Result<Vec<PaymentRequestDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("payment history of user ID {}", requester_id),
            |_| {
                let db = db.clone();

                Box::pin(async move {
                    let payment_repo = PaymentRequestRepository::new(&db);
                    let requests = payment_repo.get_by_requester(requester_id).await?;

                    Ok(requests.into_iter().map(PaymentRequestDto::from).collect())
                })
            },
        )
        .await
    }
}

/// Grants `credits` to `owner_id`, creating the entitlement on first approval
///
/// `db` must be a transaction: the existing record stays locked until it ends.
async fn grant_credits<C: ConnectionTrait>(
    db: &C,
    owner_id: i32,
    credits: i32,
    now: NaiveDateTime,
) -> Result<entity::rishta_entitlement::Model, Error> {
    let entitlement_repo = EntitlementRepository::new(db);

    match entitlement_repo.get_by_owner_for_update(owner_id).await? {
        None => create_entitlement(db, owner_id, credits, now).await,
        Some(existing) => top_up_entitlement(db, &existing, credits, now).await,
    }
}

/// Creates the first entitlement of `owner_id`
///
/// A concurrent approval for the same owner surfaces as a unique violation on `owner_id`,
/// which is reported as [`EntitlementError::CreateConflict`] so the retry tops up instead.
pub(super) async fn create_entitlement<C: ConnectionTrait>(
    db: &C,
    owner_id: i32,
    credits: i32,
    now: NaiveDateTime,
) -> Result<entity::rishta_entitlement::Model, Error> {
    let entitlement_repo = EntitlementRepository::new(db);

    match entitlement_repo
        .create(
            owner_id,
            random_token(ACCESS_TOKEN_LEN),
            credits,
            now,
            validity_end(now)?,
        )
        .await
    {
        Ok(entitlement) => Ok(entitlement),
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            Err(EntitlementError::CreateConflict(owner_id).into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Adds `credits` to `existing` and renews its validity from the copy that was read
pub(super) async fn top_up_entitlement<C: ConnectionTrait>(
    db: &C,
    existing: &entity::rishta_entitlement::Model,
    credits: i32,
    now: NaiveDateTime,
) -> Result<entity::rishta_entitlement::Model, Error> {
    let entitlement_repo = EntitlementRepository::new(db);
    let renewed = renewed_validity(existing.valid_to, now)?;

    if !entitlement_repo
        .top_up(existing, credits, renewed.valid_to, renewed.reactivate, now)
        .await?
    {
        return Err(EntitlementError::UpdateConflict(existing.id).into());
    }

    entitlement_repo.get_by_id(existing.id).await?.ok_or_else(|| {
        Error::InternalError(format!(
            "Entitlement ID {} disappeared during top-up",
            existing.id
        ))
    })
}
