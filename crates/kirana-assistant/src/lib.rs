//! # Kirana Assistant
//!
//! The AI side-channel of the shop: a thin client for Google's
//! Generative Language API plus the pure prompt-building that feeds it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        kirana-assistant                                 │
//! │                                                                         │
//! │   products/sales/locations/customers (borrowed slices)                  │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   BusinessContext::from_snapshot() ── pure, testable                    │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   chat_prompt() / trends_prompt() ── pure string builders               │
//! │            │                                                            │
//! │            ▼                                                            │
//! │   AssistantClient ── reqwest, async                                     │
//! │       chat()      total: any failure becomes the fallback reply         │
//! │       generate()  fallible: callers that want the AssistantError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The split matters: everything above the HTTP call is synchronous and
//! deterministic, so prompt content is tested without a network.
//!
//! ## Configuration
//!
//! | Variable                | Meaning                   | Default            |
//! |-------------------------|---------------------------|--------------------|
//! | `GEMINI_API_KEY`        | API key (required)        | (none)             |
//! | `KIRANA_AI_MODEL`       | Model name                | `gemini-2.5-flash` |
//! | `KIRANA_AI_TIMEOUT_SECS`| Request timeout, seconds  | `30`               |

pub mod client;
pub mod config;
pub mod context;
pub mod error;

pub use client::{AssistantClient, FALLBACK_REPLY};
pub use config::{AssistantConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use context::{chat_prompt, trends_prompt, BusinessContext, ResponseTone};
pub use error::{AssistantError, AssistantResult};
