//! Service layer for jciphers
//!
//! The service layer sits between the pure cipher engine and the user-facing
//! front ends, handling input validation and result history.

pub mod session;

pub use session::CipherSession;
