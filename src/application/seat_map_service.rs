use crate::domain::errors::AppResult;
use crate::domain::events::{DomainEvent, EventDispatcher, InMemoryEventDispatcher, SeatMapEvent, SessionEvent};
use crate::domain::logging::{LogComponent, LogEntry, LogLevel, get_logger};
use crate::domain::state::SeatMapSession;
use crate::domain::venue::SeatMapRepository;

/// Application service: loads the venue, builds the session and routes
/// every input through it, publishing what changed.
pub struct SeatMapService<R: SeatMapRepository> {
    repository: R,
    dispatcher: InMemoryEventDispatcher,
}

impl<R: SeatMapRepository> SeatMapService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository, dispatcher: InMemoryEventDispatcher::new() }
    }

    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: Fn(&SessionEvent) + 'static,
    {
        self.dispatcher.subscribe_to_session_events(handler);
    }

    /// Load one snapshot and start a session on it. Dangling tier references
    /// are logged and kept: such seats render with the fallback colour.
    pub fn start_session(&self) -> AppResult<SeatMapSession> {
        let data = self.repository.load()?;
        if let Some(config) = &data.config {
            config.validate()?;
        }
        let session = SeatMapSession::new(data);
        let catalog = session.catalog();

        for seat in catalog.dangling_tier_refs() {
            get_logger().log(
                LogEntry::new(
                    LogLevel::Warn,
                    LogComponent::Application("SeatMapService"),
                    "seat references an unknown price tier",
                )
                .with_field("seat", &seat.id)
                .with_field("tier", &seat.price_tier_id),
            );
        }

        get_logger().info(
            LogComponent::Application("SeatMapService"),
            &format!(
                "🎭 session ready: {} sections, {} seats, {} tiers",
                catalog.sections().len(),
                catalog.seat_count(),
                catalog.tiers().len()
            ),
        );
        Ok(session)
    }

    /// Apply an input to `session` and publish the resulting change, if any.
    pub fn dispatch(&self, session: &mut SeatMapSession, event: SeatMapEvent) -> Option<SessionEvent> {
        let kind = event.event_type();
        let change = session.apply(event)?;
        get_logger().log(
            LogEntry::new(LogLevel::Trace, LogComponent::Application("SeatMapService"), change.event_type())
                .with_field("input", kind),
        );
        self.dispatcher.publish_session_event(&change);
        Some(change)
    }
}
