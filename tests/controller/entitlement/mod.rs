mod adjust_entitlement;
mod get_my_entitlement;

use super::*;
