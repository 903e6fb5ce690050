//! Client crate: everything the dashboard views need short of drawing.
//!
//! - [`http`]: `DataClient`, one typed fetch per dataset
//! - [`view`]: the `View` capability and the per-view `ViewState` machine
//! - [`transform`]: pure row-to-model transforms (grids, series, scales, arcs)
//! - [`config`]: server base URL
//! - [`error`]: `ClientError`, the `NetworkFailure` condition
//!
//! Views hold no shared state. A view is mounted in `Idle`, fetches its one
//! dataset, transforms the rows and hands the model to a renderer.

pub mod config;
pub mod error;
pub mod http;
pub mod transform;
pub mod view;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::DataClient;
pub use view::{
    MapView, OverlayModel, OverlayView, Phase, PopulationView, SalesView, StockView, View,
    ViewState, fetch_model,
};
