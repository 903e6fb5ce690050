//! Which view is on screen, and that view's state.

use client::transform::{CityMarker, PopulationSeries, SalesGrid};
use client::{OverlayModel, Phase, ViewState};
use types::StockPrice;

use crate::fetch::Payload;

/// The views the dashboard can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActiveView {
    Map,
    Sales,
    Population,
    Overlay,
    Stocks,
}

impl ActiveView {
    /// All views, in tab order.
    pub const ALL: [ActiveView; 5] = [
        ActiveView::Map,
        ActiveView::Sales,
        ActiveView::Population,
        ActiveView::Overlay,
        ActiveView::Stocks,
    ];

    /// Tab label.
    pub fn title(self) -> &'static str {
        match self {
            ActiveView::Map => "Map",
            ActiveView::Sales => "Sales",
            ActiveView::Population => "Population",
            ActiveView::Overlay => "Arcs",
            ActiveView::Stocks => "Stocks",
        }
    }

    /// Position in [`ActiveView::ALL`].
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// View for a 1-based tab number.
    pub fn from_number(n: usize) -> Option<ActiveView> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Next tab (wraps around).
    pub fn next(self) -> ActiveView {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab (wraps around).
    pub fn prev(self) -> ActiveView {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// State of the mounted view, typed by its model.
#[derive(Debug, Clone)]
pub enum Panel {
    Map(ViewState<Vec<CityMarker>>),
    Sales(ViewState<SalesGrid>),
    Population(ViewState<Vec<PopulationSeries>>),
    Overlay(ViewState<OverlayModel>),
    Stocks(ViewState<Vec<StockPrice>>),
}

/// Apply `f` to the inner `ViewState` whatever its model type.
macro_rules! each_state {
    ($panel:expr, $state:ident => $body:expr) => {
        match $panel {
            Panel::Map($state) => $body,
            Panel::Sales($state) => $body,
            Panel::Population($state) => $body,
            Panel::Overlay($state) => $body,
            Panel::Stocks($state) => $body,
        }
    };
}

impl Panel {
    /// A fresh, idle panel for `view`.
    pub fn mount(view: ActiveView) -> Self {
        match view {
            ActiveView::Map => Panel::Map(ViewState::Idle),
            ActiveView::Sales => Panel::Sales(ViewState::Idle),
            ActiveView::Population => Panel::Population(ViewState::Idle),
            ActiveView::Overlay => Panel::Overlay(ViewState::Idle),
            ActiveView::Stocks => Panel::Stocks(ViewState::Idle),
        }
    }

    /// The view this panel belongs to.
    pub fn view(&self) -> ActiveView {
        match self {
            Panel::Map(_) => ActiveView::Map,
            Panel::Sales(_) => ActiveView::Sales,
            Panel::Population(_) => ActiveView::Population,
            Panel::Overlay(_) => ActiveView::Overlay,
            Panel::Stocks(_) => ActiveView::Stocks,
        }
    }

    pub fn phase(&self) -> Phase {
        each_state!(self, s => s.phase())
    }

    /// See [`ViewState::begin`].
    pub fn begin(&mut self) -> bool {
        each_state!(self, s => s.begin())
    }

    /// See [`ViewState::retry`].
    pub fn retry(&mut self) -> bool {
        each_state!(self, s => s.retry())
    }

    /// Error message when failed.
    pub fn error_message(&self) -> Option<String> {
        each_state!(self, s => s.error().map(ToString::to_string))
    }

    /// Number of selectable rows in the ready model (0 otherwise).
    pub fn selectable(&self) -> usize {
        match self {
            Panel::Map(s) => s.model().map_or(0, Vec::len),
            Panel::Sales(s) => s.model().map_or(0, |g| g.products.len()),
            Panel::Population(s) => s.model().map_or(0, Vec::len),
            Panel::Overlay(s) => s.model().map_or(0, |m| m.markers.len()),
            Panel::Stocks(s) => s.model().map_or(0, Vec::len),
        }
    }

    /// Resolve with a fetch result. Returns false when the payload is for a
    /// different view or the panel is not loading.
    pub fn apply(&mut self, payload: Payload) -> bool {
        match (self, payload) {
            (Panel::Map(s), Payload::Map(r)) => s.resolve(r),
            (Panel::Sales(s), Payload::Sales(r)) => s.resolve(r),
            (Panel::Population(s), Payload::Population(r)) => s.resolve(r),
            (Panel::Overlay(s), Payload::Overlay(r)) => s.resolve(r),
            (Panel::Stocks(s), Payload::Stocks(r)) => s.resolve(r),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::ClientError;

    #[test]
    fn test_tab_order_wraps() {
        assert_eq!(ActiveView::Map.next(), ActiveView::Sales);
        assert_eq!(ActiveView::Stocks.next(), ActiveView::Map);
        assert_eq!(ActiveView::Map.prev(), ActiveView::Stocks);
        assert_eq!(ActiveView::Overlay.prev(), ActiveView::Population);
    }

    #[test]
    fn test_from_number() {
        assert_eq!(ActiveView::from_number(1), Some(ActiveView::Map));
        assert_eq!(ActiveView::from_number(5), Some(ActiveView::Stocks));
        assert_eq!(ActiveView::from_number(0), None);
        assert_eq!(ActiveView::from_number(6), None);
    }

    #[test]
    fn test_mount_is_idle() {
        for view in ActiveView::ALL {
            let panel = Panel::mount(view);
            assert_eq!(panel.view(), view);
            assert_eq!(panel.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_apply_matching_payload() {
        let mut panel = Panel::mount(ActiveView::Sales);
        assert!(panel.begin());
        assert!(panel.apply(Payload::Sales(Ok(SalesGrid::default()))));
        assert_eq!(panel.phase(), Phase::Ready);
        assert_eq!(panel.selectable(), 0);
    }

    #[test]
    fn test_apply_wrong_view_is_ignored() {
        let mut panel = Panel::mount(ActiveView::Map);
        panel.begin();
        assert!(!panel.apply(Payload::Stocks(Ok(vec![]))));
        assert_eq!(panel.phase(), Phase::Loading);
    }

    #[test]
    fn test_failure_then_retry() {
        let mut panel = Panel::mount(ActiveView::Population);
        panel.begin();
        panel.apply(Payload::Population(Err(ClientError::Request {
            url: "http://127.0.0.1:1/api/population".into(),
            message: "connection refused".into(),
        })));
        assert_eq!(panel.phase(), Phase::Failed);
        assert!(panel.error_message().unwrap().contains("connection refused"));

        assert!(panel.retry());
        assert_eq!(panel.phase(), Phase::Loading);
        assert!(!panel.retry());
    }
}
