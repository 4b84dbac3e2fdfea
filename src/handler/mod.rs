// Handler module
// Routes incoming requests and serves the chat endpoint

mod chat;
mod router;

pub use chat::handle_chat;
pub use router::handle_request;
