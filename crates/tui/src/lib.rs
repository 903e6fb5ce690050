//! TUI crate: terminal dashboard for the Vizora data server.
//!
//! Five views, one on screen at a time:
//! - City map (sized, coloured markers on a world map)
//! - Monthly sales (grouped bar chart)
//! - Population trends (one line per country)
//! - Arc overlay (animated arcs between cities)
//! - Stock prices (table)
//!
//! # Architecture
//!
//! Fetches run as tokio tasks and report back to the render loop over a
//! channel, so a slow server never blocks drawing:
//!
//! ```text
//! ┌────────────────┐   FetchOutcome    ┌────────────────┐
//! │  Fetch task    │ ────────────────► │   Dashboard    │
//! │  (tokio)       │    (channel)      │  (main thread) │
//! └────────────────┘                   └────────────────┘
//! ```
//!
//! Every outcome carries the generation of the view that asked for it.
//! Switching views bumps the generation, so a late answer for a view that is
//! no longer on screen is dropped.
//!
//! # Usage
//!
//! ```ignore
//! use client::{ClientConfig, DataClient};
//! use tui::Dashboard;
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let client = DataClient::new(ClientConfig::from_env());
//! Dashboard::new(client, runtime.handle().clone())
//!     .frame_rate(30)
//!     .run()?;
//! ```

mod app;
mod fetch;
mod panel;
mod widgets;

pub use app::Dashboard;
pub use fetch::{FetchOutcome, Payload};
pub use panel::{ActiveView, Panel};
