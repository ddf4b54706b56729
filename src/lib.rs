pub mod error;
pub mod config;
pub mod request;
pub mod transport;
pub mod client;

/*

askai: a small async client for services exposing `POST /api/ask`.
one prompt goes out, one uniform result record comes back; every
failure is folded into that record instead of being returned as Err.

askai/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports
│   ├── error.rs        # Failure taxonomy; Display is the record message
│   ├── config.rs       # Base URL, model, timeout, certificate policy
│   ├── request.rs      # Payload and result record types
│   ├── client.rs       # AskClient, ask_ai, ask_ai_blocking
│   ├── transport/      # How the payload reaches the service
│   │   ├── mod.rs      # Transport trait
│   │   └── http.rs     # reqwest transport
│   └── bin/ask.rs      # Demo CLI
└── tests/              # Integration tests

*/

pub use error::Error;
pub use config::{AskConfig, endpoint_for};
pub use request::{AskFailure, AskReply, AskRequest, AskResult};
pub use transport::{HttpTransport, RawResponse, Transport};
pub use client::{AskClient, ask_ai, ask_ai_blocking, decode_reply};
