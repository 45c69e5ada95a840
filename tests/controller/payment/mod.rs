mod decide_payment;
mod get_my_payments;
mod get_pending_payments;
mod get_plans;
mod submit_payment;

use super::*;
