//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{MONEY_DP, MONEY_TOLERANCE, RATE_DP, approx_eq, round_dp, round_money, round_rate};
