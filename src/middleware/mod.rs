mod error_handler;
mod rate_limit;

pub use error_handler::{handle_panic, log_errors, not_found};
pub use rate_limit::{RateLimiter, rate_limit};
