//! # TUI Components
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Built fresh each frame from the core state:
//! - `TitleBar`: app name, signed-in user, status text
//! - `Feed`: existing posts
//! - `LandingPage`: lays out the form and the feed
//!
//! ### Stateful Components (Event-Driven)
//!
//! Keep presentation state between frames and emit events:
//! - `TextField`: one labelled single-line input with a cursor
//! - `PostBox`: the post form, built from four `TextField`s
//! - `Toaster`: the notification stack (also the app's `NotificationSink`)
//!
//! Components receive external data as props, never by reaching into
//! global state:
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! TitleBar::new(username, app.status_message.clone()).render(frame, area);
//! ```
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs
//! ├── landing.rs
//! ├── feed.rs
//! ├── post_box.rs
//! ├── toaster.rs
//! └── text_field/      (input + string editing helpers)
//! ```

pub mod feed;
pub mod landing;
pub mod post_box;
pub mod text_field;
pub mod title_bar;
pub mod toaster;

pub use feed::Feed;
pub use landing::LandingPage;
pub use post_box::{PostBox, PostBoxEvent};
pub use title_bar::TitleBar;
pub use toaster::Toaster;
