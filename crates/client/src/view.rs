//! The view capability and the per-view state machine.
//!
//! Every view is `fetch its dataset -> transform rows -> draw`. The first two
//! steps live here; drawing is left to the renderer.
//!
//! ```text
//!            begin()              resolve(Ok)
//!   Idle ─────────────> Loading ─────────────> Ready(model)
//!                         ▲   │
//!                 retry() │   │ resolve(Err)
//!                         │   ▼
//!                        Failed(error)
//! ```

use types::{City, PopulationRecord, Record, SalesRecord, StockPrice};

use crate::error::{ClientError, ClientResult};
use crate::http::DataClient;
use crate::transform::{
    Arc, ArcConfig, CityMarker, PopulationSeries, SalesGrid, ScaleConfig, build_arcs,
    group_by_country, markers,
};

// =============================================================================
// View Capability
// =============================================================================

/// A visualization: one dataset, one pure transform.
pub trait View {
    /// Row type fetched from the server.
    type Record: Record;
    /// Drawable model produced from the rows.
    type Model;

    /// Human-readable title.
    fn title(&self) -> &'static str;

    /// Build the model. Must not fail: an empty input yields an empty model.
    fn transform(&self, records: Vec<Self::Record>) -> Self::Model;

    /// Whether the model has nothing to draw.
    fn is_empty(&self, model: &Self::Model) -> bool;
}

/// Fetch `view`'s dataset and transform it.
pub async fn fetch_model<V: View>(view: &V, client: &DataClient) -> ClientResult<V::Model> {
    let records = client.fetch::<V::Record>().await?;
    Ok(view.transform(records))
}

// =============================================================================
// View State Machine
// =============================================================================

/// Phase of a [`ViewState`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Lifecycle of one mounted view.
#[derive(Debug, Clone)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(ClientError),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn phase(&self) -> Phase {
        match self {
            ViewState::Idle => Phase::Idle,
            ViewState::Loading => Phase::Loading,
            ViewState::Ready(_) => Phase::Ready,
            ViewState::Failed(_) => Phase::Failed,
        }
    }

    /// `Idle -> Loading`. Returns true when the caller must issue a fetch.
    pub fn begin(&mut self) -> bool {
        if matches!(self, ViewState::Idle) {
            *self = ViewState::Loading;
            true
        } else {
            false
        }
    }

    /// `Loading -> Ready | Failed`. Ignored (returns false) in other phases.
    pub fn resolve(&mut self, result: ClientResult<T>) -> bool {
        if !matches!(self, ViewState::Loading) {
            return false;
        }
        *self = match result {
            Ok(model) => ViewState::Ready(model),
            Err(e) => ViewState::Failed(e),
        };
        true
    }

    /// `Failed -> Loading`. Returns true when the caller must issue a fetch.
    pub fn retry(&mut self) -> bool {
        if matches!(self, ViewState::Failed(_)) {
            *self = ViewState::Loading;
            true
        } else {
            false
        }
    }

    pub fn model(&self) -> Option<&T> {
        match self {
            ViewState::Ready(model) => Some(model),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ViewState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Run one fetch cycle for `view`: begin (or retry), fetch, resolve.
    ///
    /// Does nothing when the state is already `Loading` or `Ready`.
    pub async fn load<V>(&mut self, view: &V, client: &DataClient) -> Phase
    where
        V: View<Model = T>,
    {
        if self.begin() || self.retry() {
            let result = fetch_model(view, client).await;
            if let Err(ref e) = result {
                tracing::warn!(view = view.title(), error = %e, "view failed to load");
            }
            self.resolve(result);
        }
        self.phase()
    }
}

// =============================================================================
// Views
// =============================================================================

/// Cities as sized, coloured points on a world map.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapView {
    pub scale: ScaleConfig,
}

impl View for MapView {
    type Record = City;
    type Model = Vec<CityMarker>;

    fn title(&self) -> &'static str {
        "City Map"
    }

    fn transform(&self, records: Vec<City>) -> Vec<CityMarker> {
        markers(&records, self.scale)
    }

    fn is_empty(&self, model: &Vec<CityMarker>) -> bool {
        model.is_empty()
    }
}

/// Monthly sales as grouped bars, one colour per product.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesView;

impl View for SalesView {
    type Record = SalesRecord;
    type Model = SalesGrid;

    fn title(&self) -> &'static str {
        "Monthly Sales"
    }

    fn transform(&self, records: Vec<SalesRecord>) -> SalesGrid {
        SalesGrid::from_records(&records)
    }

    fn is_empty(&self, model: &SalesGrid) -> bool {
        model.is_empty()
    }
}

/// Population trend lines, one per country.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopulationView;

impl View for PopulationView {
    type Record = PopulationRecord;
    type Model = Vec<PopulationSeries>;

    fn title(&self) -> &'static str {
        "Population Trends"
    }

    fn transform(&self, records: Vec<PopulationRecord>) -> Vec<PopulationSeries> {
        group_by_country(&records)
    }

    fn is_empty(&self, model: &Vec<PopulationSeries>) -> bool {
        model.is_empty()
    }
}

/// Model for the arc overlay: city markers plus the arcs linking them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverlayModel {
    pub markers: Vec<CityMarker>,
    pub arcs: Vec<Arc>,
}

/// Animated arcs between cities over the world map.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayView {
    pub scale: ScaleConfig,
    pub arcs: ArcConfig,
}

impl View for OverlayView {
    type Record = City;
    type Model = OverlayModel;

    fn title(&self) -> &'static str {
        "Arc Overlay"
    }

    fn transform(&self, records: Vec<City>) -> OverlayModel {
        OverlayModel {
            markers: markers(&records, self.scale),
            arcs: build_arcs(&records),
        }
    }

    fn is_empty(&self, model: &OverlayModel) -> bool {
        model.markers.is_empty()
    }
}

/// Stock quotes as a plain listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockView;

impl View for StockView {
    type Record = StockPrice;
    type Model = Vec<StockPrice>;

    fn title(&self) -> &'static str {
        "Stock Prices"
    }

    fn transform(&self, records: Vec<StockPrice>) -> Vec<StockPrice> {
        records
    }

    fn is_empty(&self, model: &Vec<StockPrice>) -> bool {
        model.is_empty()
    }
}
