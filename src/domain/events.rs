use crate::domain::seat_map::entities::RejectReason;
use crate::domain::seat_map::value_objects::{ScreenPoint, SurfaceSize, Viewport};
use crate::domain::venue::{Price, SeatId, TierId};
use std::fmt::Debug;

/// Base trait for all domain events
pub trait DomainEvent: Debug + Clone {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> u64 {
        use crate::domain::logging::get_time_provider;
        get_time_provider().current_timestamp()
    }
}

/// User input, already translated into seat-map terms
#[derive(Debug, Clone, PartialEq)]
pub enum SeatMapEvent {
    ZoomIn,
    ZoomOut,
    ResetView,
    Wheel { delta_y: f64, at: ScreenPoint },
    PointerDown(ScreenPoint),
    PointerMove(ScreenPoint),
    PointerUp,
    PointerLeave,
    SurfaceResized(SurfaceSize),
    SeatClicked(SeatId),
    /// Click somewhere on the surface; resolved by hit testing
    ClickAt(ScreenPoint),
    SeatRemoved(SeatId),
    SeatHovered { seat_id: SeatId, at: ScreenPoint },
    SeatLeft,
    TierClicked(TierId),
    ClearAll,
    DateSelected(usize),
    TimeSelected(usize),
}

impl DomainEvent for SeatMapEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SeatMapEvent::ZoomIn => "ZoomIn",
            SeatMapEvent::ZoomOut => "ZoomOut",
            SeatMapEvent::ResetView => "ResetView",
            SeatMapEvent::Wheel { .. } => "Wheel",
            SeatMapEvent::PointerDown(_) => "PointerDown",
            SeatMapEvent::PointerMove(_) => "PointerMove",
            SeatMapEvent::PointerUp => "PointerUp",
            SeatMapEvent::PointerLeave => "PointerLeave",
            SeatMapEvent::SurfaceResized(_) => "SurfaceResized",
            SeatMapEvent::SeatClicked(_) => "SeatClicked",
            SeatMapEvent::ClickAt(_) => "ClickAt",
            SeatMapEvent::SeatRemoved(_) => "SeatRemoved",
            SeatMapEvent::SeatHovered { .. } => "SeatHovered",
            SeatMapEvent::SeatLeft => "SeatLeft",
            SeatMapEvent::TierClicked(_) => "TierClicked",
            SeatMapEvent::ClearAll => "ClearAll",
            SeatMapEvent::DateSelected(_) => "DateSelected",
            SeatMapEvent::TimeSelected(_) => "TimeSelected",
        }
    }
}

/// What actually changed after an input was applied
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    ViewportChanged { old: Viewport, new: Viewport },
    SelectionChanged { count: usize, total: Price },
    SeatRejected { seat_id: Option<SeatId>, reason: RejectReason },
    FilterChanged { active: Option<TierId> },
    TooltipChanged { visible: bool },
    ScheduleChanged { date_index: usize, time_index: usize },
}

impl DomainEvent for SessionEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SessionEvent::ViewportChanged { .. } => "ViewportChanged",
            SessionEvent::SelectionChanged { .. } => "SelectionChanged",
            SessionEvent::SeatRejected { .. } => "SeatRejected",
            SessionEvent::FilterChanged { .. } => "FilterChanged",
            SessionEvent::TooltipChanged { .. } => "TooltipChanged",
            SessionEvent::ScheduleChanged { .. } => "ScheduleChanged",
        }
    }
}

/// Event dispatcher for publishing events
pub trait EventDispatcher {
    fn publish_session_event(&self, event: &SessionEvent);
}

/// Simple in-memory event dispatcher
#[derive(Default)]
pub struct InMemoryEventDispatcher {
    session_handlers: Vec<Box<dyn Fn(&SessionEvent)>>,
}

impl InMemoryEventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe_to_session_events<F>(&mut self, handler: F)
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.session_handlers.push(Box::new(handler));
    }
}

impl EventDispatcher for InMemoryEventDispatcher {
    fn publish_session_event(&self, event: &SessionEvent) {
        for handler in &self.session_handlers {
            handler(event);
        }
    }
}
