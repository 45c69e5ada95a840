
use rishta_test_utils::prelude::*;

use super::*;
