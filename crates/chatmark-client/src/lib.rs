//! Client for the chat server.
//!
//! - **`api`**: `ApiClient` for `/conversations` and `POST /chat/stream`
//! - **`controller`**: `ChatController`, one send from guard to final render
//! - **`error`**: `ClientError` and its user-facing status messages
//! - **`time`**: parsing of server timestamps

pub mod api;
pub mod controller;
pub mod error;
pub mod time;

pub use api::{ApiClient, CONVERSATION_ID_HEADER, ChatStream};
pub use controller::{ChatController, Reply};
pub use error::ClientError;
pub use time::parse_timestamp;
