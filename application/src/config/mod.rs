//! Application-level configuration.
//!
//! - [`SessionParams`]: context window size and generation settings

pub mod session_params;

pub use session_params::SessionParams;
