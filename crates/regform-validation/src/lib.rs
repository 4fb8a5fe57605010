//! Registration Form Validation Core
//!
//! Pure validation predicates shared by the rule set of `regform`.
//! Nothing in here knows about fields or messages; every function answers
//! a single question about a single string.

pub mod date;
pub mod email;
pub mod password;
pub mod pattern;
pub mod string;

// Re-export all validators
pub use date::*;
pub use email::*;
pub use password::*;
pub use pattern::*;
pub use string::*;
