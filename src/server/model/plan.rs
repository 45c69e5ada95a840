//! The fixed subscription plan table.

use entity::rishta_payment_request::PaymentPlan;

use crate::{
    model::payment::{PlanDto, PlanIdDto},
    server::error::{payment::PaymentError, Error},
};

/// Credits and price granted by one plan
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanDefinition {
    pub plan: PaymentPlan,
    pub credits_granted: i32,
    /// Price in whole rupees
    pub price: i32,
}

pub const PLANS: [PlanDefinition; 3] = [
    PlanDefinition {
        plan: PaymentPlan::Basic,
        credits_granted: 30,
        price: 499,
    },
    PlanDefinition {
        plan: PaymentPlan::Standard,
        credits_granted: 75,
        price: 999,
    },
    PlanDefinition {
        plan: PaymentPlan::Premium,
        credits_granted: 200,
        price: 1999,
    },
];

impl PlanDefinition {
    pub fn of(plan: PaymentPlan) -> Self {
        match plan {
            PaymentPlan::Basic => PLANS[0],
            PaymentPlan::Standard => PLANS[1],
            PaymentPlan::Premium => PLANS[2],
        }
    }

    /// Looks up a plan by its identifier, case-insensitively
    ///
    /// # Returns
    /// - `Ok(PlanDefinition)` - Known plan
    /// - `Err(Error::PaymentError(PaymentError::InvalidPlan))` - Identifier is not in the plan table
    pub fn parse(plan_id: &str) -> Result<Self, Error> {
        match plan_id.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::of(PaymentPlan::Basic)),
            "standard" => Ok(Self::of(PaymentPlan::Standard)),
            "premium" => Ok(Self::of(PaymentPlan::Premium)),
            _ => Err(PaymentError::InvalidPlan(plan_id.to_string()).into()),
        }
    }
}

impl From<PaymentPlan> for PlanIdDto {
    fn from(plan: PaymentPlan) -> Self {
        match plan {
            PaymentPlan::Basic => Self::Basic,
            PaymentPlan::Standard => Self::Standard,
            PaymentPlan::Premium => Self::Premium,
        }
    }
}

impl From<PlanDefinition> for PlanDto {
    fn from(definition: PlanDefinition) -> Self {
        Self {
            id: definition.plan.into(),
            credits_granted: definition.credits_granted,
            price: definition.price,
        }
    }
}
