//! # kirana-store: The In-Memory State Container
//!
//! One running shop = one [`Store`]. This crate owns every record, applies
//! every mutation, and narrates what happened into a bounded notification
//! feed the shopkeeper actually reads.
//!
//! ## Data Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                          kirana-store                                │
//! │                                                                      │
//! │            ┌───────────────────────────────────────────┐             │
//! │   caller ──►  Store                                    │             │
//! │            │    products   locations   sales           │             │
//! │            │    transfers  customers   suppliers       │             │
//! │            │    tax tiers  targets     goals           │             │
//! │            │                                           │             │
//! │            │    every mutator ──► tracing event        │             │
//! │            │                 └──► NotificationLog (50) │             │
//! │            └───────────────────────────────────────────┘             │
//! │                                                                      │
//! │   StoreState = Arc<Mutex<Store>>  (for embedding in a host app)      │
//! │   seed::demo_store()              (realistic demo dataset)           │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mutation Discipline
//!
//! Mutators are **total**: they never panic and never return errors.
//! A transfer that cannot happen becomes a FAILED audit record; an unknown
//! id is a logged no-op. The cart in `kirana-core::billing` is where typed
//! errors live, because a cashier needs them on screen.

pub mod notifications;
pub mod seed;
pub mod state;
pub mod store;

pub use notifications::{NotificationLog, NOTIFICATION_RETENTION};
pub use state::StoreState;
pub use store::Store;
