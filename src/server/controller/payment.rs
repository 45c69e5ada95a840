use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        payment::{
            DecidePaymentDto, DecisionResultDto, PaymentRequestDto, PendingPaymentDto, PlanDto,
        },
    },
    server::{
        controller::util::get_user::{get_admin_from_session, get_user_from_session},
        error::{payment::PaymentError, Error},
        model::{app::AppState, plan::PLANS},
        service::payment::{PaymentService, ProofUpload},
    },
};

pub static PAYMENT_TAG: &str = "payment";

/// Fields of the payment submission form
#[derive(Default)]
struct SubmissionForm {
    plan: Option<String>,
    reference_code: Option<String>,
    proof: Option<ProofUpload>,
}

impl SubmissionForm {
    async fn read(mut multipart: Multipart) -> Result<Self, Error> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| PaymentError::InvalidUpload(e.to_string()))?
        {
            match field.name() {
                Some("plan") => {
                    form.plan = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PaymentError::InvalidUpload(e.to_string()))?,
                    );
                }
                Some("reference_code") => {
                    form.reference_code = Some(
                        field
                            .text()
                            .await
                            .map_err(|e| PaymentError::InvalidUpload(e.to_string()))?,
                    );
                }
                Some("proof") => {
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| PaymentError::InvalidUpload(e.to_string()))?;

                    form.proof = Some(ProofUpload {
                        bytes: bytes.to_vec(),
                        content_type,
                    });
                }
                _ => {}
            }
        }

        Ok(form)
    }
}

/// List the subscription plans
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "The plan table", body = Vec<PlanDto>)
    ),
)]
pub async fn get_plans() -> impl IntoResponse {
    let plans: Vec<PlanDto> = PLANS.into_iter().map(PlanDto::from).collect();

    (StatusCode::OK, Json(plans))
}

/// Submit a manual payment with its proof screenshot
///
/// Expects a multipart form with `plan`, `reference_code` and a `proof` file.
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = PAYMENT_TAG,
    request_body(content_type = "multipart/form-data", description = "Fields `plan`, `reference_code` and file `proof`"),
    responses(
        (status = 201, description = "Pending payment request", body = PaymentRequestDto),
        (status = 400, description = "Unknown plan or missing form field", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 503, description = "Proof storage unavailable", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_payment(
    State(state): State<AppState>,
    session: Session,
    multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let form = SubmissionForm::read(multipart).await?;
    let plan = form.plan.ok_or(PaymentError::MissingField("plan"))?;
    let reference_code = form
        .reference_code
        .ok_or(PaymentError::MissingField("reference_code"))?;
    let proof = form.proof.ok_or(PaymentError::MissingField("proof"))?;

    let request = PaymentService::new(&state.db, &state.media)
        .submit(user.id, &plan, &reference_code, proof)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// List pending payment requests for review, oldest first
#[utoipa::path(
    get,
    path = "/api/payments/pending",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Pending requests with proof links", body = Vec<PendingPaymentDto>),
        (status = 403, description = "Caller is not an administrator", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_admin_from_session(&state, &session).await?;

    let pending = PaymentService::new(&state.db, &state.media)
        .list_pending(state.photo_url_ttl)
        .await?;

    Ok((StatusCode::OK, Json(pending)))
}

/// Approve or reject a pending payment request
#[utoipa::path(
    post,
    path = "/api/payments/{id}/decide",
    tag = PAYMENT_TAG,
    params(("id" = i32, Path, description = "Payment request ID")),
    request_body = DecidePaymentDto,
    responses(
        (status = 200, description = "Decided request with the resulting entitlement", body = DecisionResultDto),
        (status = 400, description = "Non-positive override credits", body = ErrorDto),
        (status = 403, description = "Caller is not an administrator", body = ErrorDto),
        (status = 404, description = "Payment request or user not found", body = ErrorDto),
        (status = 409, description = "Payment request already processed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn decide_payment(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
    Json(decision): Json<DecidePaymentDto>,
) -> Result<impl IntoResponse, Error> {
    let admin = get_admin_from_session(&state, &session).await?;

    let result = PaymentService::new(&state.db, &state.media)
        .decide(request_id, admin.id, decision)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// List the caller's own payment requests, newest first
#[utoipa::path(
    get,
    path = "/api/payments/me",
    tag = PAYMENT_TAG,
    responses(
        (status = 200, description = "Caller's payment history", body = Vec<PaymentRequestDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_payments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let requests = PaymentService::new(&state.db, &state.media)
        .list_for_requester(user.id)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}
