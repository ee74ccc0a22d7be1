use crate::domain::state::SeatMapSession;
use leptos::*;
use once_cell::sync::OnceCell;

/// Reactive roots shared by every component of the page
pub struct Globals {
    pub session: RwSignal<SeatMapSession>,
    pub status: RwSignal<String>,
    pub logs: RwSignal<Vec<String>>,
    pub is_log_paused: RwSignal<bool>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        session: create_rw_signal(SeatMapSession::default()),
        status: create_rw_signal("Loading venue...".to_string()),
        logs: create_rw_signal(Vec::new()),
        is_log_paused: create_rw_signal(false),
    })
}

crate::global_signals! {
    pub session_signal => session: SeatMapSession,
    pub status_signal => status: String,
    pub logs_signal => logs: Vec<String>,
    pub log_paused_signal => is_log_paused: bool,
}
