//! HTTP protocol layer module
//!
//! Response builders shared by the router and the chat handler.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_413_response, build_chat_response, build_error_response,
    build_health_response, build_options_response,
};
