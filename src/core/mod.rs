//! # Core Application Logic
//!
//! This module contains the post box's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • workflow (submit)    │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Session   │      │   Remote   │
//!     │  Adapter   │      │  Provider  │      │  (GraphQL) │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`draft`]: Form values and local validation
//! - [`workflow`]: The lookup-or-create-then-post sequence
//! - [`session`], [`notify`]: Injected boundaries to identity and notifications
//! - [`config`]: Settings resolution

pub mod action;
pub mod config;
pub mod draft;
pub mod notify;
pub mod session;
pub mod state;
pub mod workflow;
