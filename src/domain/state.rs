use std::sync::Arc;

use crate::domain::events::{SeatMapEvent, SessionEvent};
use crate::domain::logging::LogComponent;
use crate::domain::seat_map::entities::{
    FilterState, HoverState, ScheduleSelection, SelectedSeat, SelectionChange, SelectionState,
};
use crate::domain::seat_map::services::{RowLabelIndex, SeatVisual, resolve_seat_visual};
use crate::domain::seat_map::value_objects::SeatMapConfig;
use crate::domain::venue::{Price, SeatCatalog, SeatId, SeatMapData, SeatRef};
use crate::view_state::ViewState;
use crate::{log_debug, log_trace};

/// Whole seat-map session: the read-only catalog plus every piece of UI
/// state that input events mutate. All mutation goes through [`apply`].
///
/// [`apply`]: SeatMapSession::apply
#[derive(Clone, Debug, Default)]
pub struct SeatMapSession {
    catalog: SeatCatalog,
    config: SeatMapConfig,
    row_labels: Arc<RowLabelIndex>,
    pub view: ViewState,
    selection: SelectionState,
    filter: FilterState,
    hover: HoverState,
    schedule: ScheduleSelection,
}

impl SeatMapSession {
    /// Config comes from the document when it carries one.
    pub fn new(data: SeatMapData) -> Self {
        let config = data.config.unwrap_or_default();
        Self::with_config(data, config)
    }

    pub fn with_config(data: SeatMapData, config: SeatMapConfig) -> Self {
        let catalog = SeatCatalog::new(data);
        let row_labels = RowLabelIndex::build(catalog.sections(), config.row_label_offset);
        Self {
            catalog,
            config,
            row_labels: Arc::new(row_labels),
            view: ViewState::from_config(&config),
            selection: SelectionState::default(),
            filter: FilterState::default(),
            hover: HoverState::default(),
            schedule: ScheduleSelection::default(),
        }
    }

    pub fn catalog(&self) -> &SeatCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    pub fn row_labels(&self) -> &RowLabelIndex {
        &self.row_labels
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn schedule(&self) -> &ScheduleSelection {
        &self.schedule
    }

    /// Apply one input. Returns what changed, `None` for inputs that were
    /// no-ops (e.g. a pointer move with no drag in progress).
    pub fn apply(&mut self, event: SeatMapEvent) -> Option<SessionEvent> {
        log_trace!(LogComponent::Domain("Session"), "apply {:?}", event);
        match event {
            SeatMapEvent::ZoomIn => {
                let step = self.config.button_zoom_step;
                self.with_viewport(|view| view.zoom(step))
            }
            SeatMapEvent::ZoomOut => {
                let step = self.config.button_zoom_step;
                self.with_viewport(|view| view.zoom(1.0 / step))
            }
            SeatMapEvent::ResetView => self.with_viewport(ViewState::reset),
            SeatMapEvent::Wheel { delta_y, at } => {
                let step = self.config.wheel_zoom_step;
                self.with_viewport(|view| view.wheel(delta_y, at, step))
            }
            SeatMapEvent::PointerDown(at) => {
                self.view.begin_drag(at);
                None
            }
            SeatMapEvent::PointerMove(at) => self.with_viewport(|view| {
                view.continue_drag(at);
            }),
            SeatMapEvent::PointerUp | SeatMapEvent::PointerLeave => {
                self.view.end_drag();
                None
            }
            SeatMapEvent::SurfaceResized(surface) => {
                self.view.set_surface(surface);
                None
            }
            SeatMapEvent::SeatClicked(id) => self.toggle_seat(&id),
            SeatMapEvent::ClickAt(at) => {
                let radius = self.config.seat_radius;
                let hit = self.view.hit_test(&self.catalog, at, radius).map(|r| r.seat.id.clone());
                hit.and_then(|id| self.toggle_seat(&id))
            }
            SeatMapEvent::SeatRemoved(id) => {
                self.selection.remove(&id).then(|| self.selection_changed())
            }
            SeatMapEvent::SeatHovered { seat_id, at } => self
                .hover
                .enter(&self.catalog, &seat_id, at)
                .then_some(SessionEvent::TooltipChanged { visible: true }),
            SeatMapEvent::SeatLeft => {
                self.hover.leave().then_some(SessionEvent::TooltipChanged { visible: false })
            }
            SeatMapEvent::TierClicked(tier) => {
                self.filter.toggle(tier);
                Some(SessionEvent::FilterChanged { active: self.filter.active().cloned() })
            }
            SeatMapEvent::ClearAll => {
                self.selection.clear();
                Some(self.selection_changed())
            }
            SeatMapEvent::DateSelected(index) => {
                let available = self.catalog.data().dates.len();
                self.schedule.select_date(index, available).then(|| self.schedule_changed())
            }
            SeatMapEvent::TimeSelected(index) => {
                let available = self.catalog.data().times.len();
                self.schedule.select_time(index, available).then(|| self.schedule_changed())
            }
        }
    }

    /// By-value form of [`apply`](SeatMapSession::apply): `(state, event) -> state'`.
    pub fn reduce(mut self, event: SeatMapEvent) -> Self {
        self.apply(event);
        self
    }

    pub fn toggle_seat(&mut self, id: &SeatId) -> Option<SessionEvent> {
        match self.selection.toggle(&self.catalog, &self.filter, id) {
            SelectionChange::Ignored(reason) => {
                log_debug!(LogComponent::Domain("Selection"), "click on {} ignored: {:?}", id, reason);
                Some(SessionEvent::SeatRejected { seat_id: Some(id.clone()), reason })
            }
            SelectionChange::Added(_) | SelectionChange::Removed(_) => Some(self.selection_changed()),
        }
    }

    pub fn selected_details(&self) -> Vec<SelectedSeat> {
        self.selection.details(&self.catalog)
    }

    pub fn selected_total(&self) -> Price {
        self.selection.total(&self.catalog)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    pub fn seat_visual(&self, seat: SeatRef<'_>) -> SeatVisual {
        resolve_seat_visual(
            seat.seat,
            self.catalog.tier(&seat.seat.price_tier_id),
            &self.filter,
            self.selection.contains(&seat.seat.id),
        )
    }

    pub fn seat_visual_by_id(&self, id: &SeatId) -> Option<SeatVisual> {
        self.catalog.seat(id).map(|seat| self.seat_visual(seat))
    }

    pub fn selected_time_label(&self) -> &str {
        self.schedule.time_label(&self.catalog.data().times)
    }

    fn with_viewport(&mut self, f: impl FnOnce(&mut ViewState)) -> Option<SessionEvent> {
        let old = self.view.viewport;
        f(&mut self.view);
        let new = self.view.viewport;
        (old != new).then_some(SessionEvent::ViewportChanged { old, new })
    }

    fn selection_changed(&self) -> SessionEvent {
        SessionEvent::SelectionChanged { count: self.selection.len(), total: self.selected_total() }
    }

    fn schedule_changed(&self) -> SessionEvent {
        SessionEvent::ScheduleChanged {
            date_index: self.schedule.date_index,
            time_index: self.schedule.time_index,
        }
    }
}
