//! Pipeline steps of a Permit2 swap
//!
//! Each step takes its collaborators as arguments (`SwapApi`, `ChainOps`)
//! so it can be driven by [`crate::runner::SwapRunner`] or tested alone.

pub mod allowance;
pub mod display;
pub mod permit;
pub mod price;
pub mod sources;
pub mod submit;

pub use allowance::{ensure_allowance, AllowanceAction, ApprovalOutcome};
pub use permit::{sign_quote, splice_signature, PermitRequirement, SignedQuote};
pub use price::{fetch_price, parse_sell_amount, swap_params};
pub use sources::report_sources;
pub use submit::{build_transaction, submit_transaction, Submission};
