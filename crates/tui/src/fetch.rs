//! Background fetches for the dashboard.
//!
//! A fetch runs as a tokio task on the runtime handed to the dashboard and
//! posts a [`FetchOutcome`] back over a crossbeam channel. The render loop
//! drains the channel without blocking.

use client::transform::{CityMarker, PopulationSeries, SalesGrid};
use client::{
    ClientResult, DataClient, MapView, OverlayModel, OverlayView, PopulationView, SalesView,
    StockView, View, fetch_model,
};
use crossbeam_channel::Sender;
use tokio::runtime::Handle;
use types::StockPrice;

use crate::panel::ActiveView;

/// Transformed result of one fetch, tagged by view.
#[derive(Debug, Clone)]
pub enum Payload {
    Map(ClientResult<Vec<CityMarker>>),
    Sales(ClientResult<SalesGrid>),
    Population(ClientResult<Vec<PopulationSeries>>),
    Overlay(ClientResult<OverlayModel>),
    Stocks(ClientResult<Vec<StockPrice>>),
}

/// Message from a fetch task to the dashboard.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// Generation of the view that issued the fetch.
    pub generation: u64,
    pub payload: Payload,
}

/// Spawns fetch tasks.
pub(crate) struct Fetcher {
    client: DataClient,
    runtime: Handle,
    sender: Sender<FetchOutcome>,
}

impl Fetcher {
    pub(crate) fn new(client: DataClient, runtime: Handle, sender: Sender<FetchOutcome>) -> Self {
        Self {
            client,
            runtime,
            sender,
        }
    }

    pub(crate) fn client(&self) -> &DataClient {
        &self.client
    }

    /// Fetch and transform the dataset behind `view`.
    pub(crate) fn request(
        &self,
        view: ActiveView,
        generation: u64,
        map: MapView,
        overlay: OverlayView,
    ) {
        tracing::debug!(view = view.title(), generation, "fetch requested");
        match view {
            ActiveView::Map => self.spawn(map, generation, Payload::Map),
            ActiveView::Sales => self.spawn(SalesView, generation, Payload::Sales),
            ActiveView::Population => self.spawn(PopulationView, generation, Payload::Population),
            ActiveView::Overlay => self.spawn(overlay, generation, Payload::Overlay),
            ActiveView::Stocks => self.spawn(StockView, generation, Payload::Stocks),
        }
    }

    fn spawn<V>(&self, view: V, generation: u64, wrap: fn(ClientResult<V::Model>) -> Payload)
    where
        V: View + Send + Sync + 'static,
        V::Model: Send + 'static,
    {
        let client = self.client.clone();
        let sender = self.sender.clone();
        self.runtime.spawn(async move {
            let result = fetch_model(&view, &client).await;
            if let Err(ref e) = result {
                tracing::warn!(view = view.title(), error = %e, "fetch failed");
            }
            // The dashboard may have quit; nobody left to tell.
            let _ = sender.send(FetchOutcome {
                generation,
                payload: wrap(result),
            });
        });
    }
}
