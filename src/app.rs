use leptos::html::Div;
use leptos::*;

use crate::application::SeatMapService;
use crate::currency::format_inr;
use crate::domain::events::{SeatMapEvent, SessionEvent};
use crate::domain::logging::{LogComponent, LogEntry, Logger, get_logger};
use crate::domain::seat_map::services::{LabelSide, SeatShape};
use crate::domain::seat_map::value_objects::{ScreenPoint, SurfaceSize};
use crate::domain::seat_map::entities::RejectReason;
use crate::domain::state::SeatMapSession;
use crate::domain::venue::SeatMapRepository;
use crate::event_utils::{EventOptions, add_event_listener_with_options, window_event_listener_with_options};
use crate::global_state::{log_paused_signal, logs_signal, session_signal, status_signal};
use crate::infrastructure::rendering::{
    SeatGlyph, build_seat_glyphs, build_section_captions, left_half_disk_path, right_half_disk_path,
};
use crate::infrastructure::services::ConsoleLogger;
use crate::infrastructure::StaticSeatMapRepository;
use crate::{session_memo, venue_memo};
use crate::time_utils::{DateParts, format_generated_date, format_generated_time};

const MAX_LOG_LINES: usize = 100;

/// 🌉 Bridge logger: domain::logging -> debug console signal + devtools
pub struct LeptosLogger {
    console: ConsoleLogger,
}

impl LeptosLogger {
    pub fn new(console: ConsoleLogger) -> Self {
        Self { console }
    }
}

impl Logger for LeptosLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level >= self.console.min_level() && !log_paused_signal().get_untracked() {
            let line = entry.render();
            logs_signal().update(|lines| {
                lines.push(line);
                if lines.len() > MAX_LOG_LINES {
                    let excess = lines.len() - MAX_LOG_LINES;
                    lines.drain(..excess);
                }
            });
        }
        self.console.log(entry);
    }
}

thread_local! {
    static SERVICE: SeatMapService<StaticSeatMapRepository> = build_service();
}

fn build_service() -> SeatMapService<StaticSeatMapRepository> {
    let mut service = SeatMapService::new(StaticSeatMapRepository::embedded());
    service.subscribe(|change| {
        let status = match change {
            SessionEvent::SelectionChanged { count, total } => {
                format!("🪑 {} selected • {}", count, format_inr(total.value()))
            }
            SessionEvent::SeatRejected { reason: RejectReason::Booked, .. } => "⛔ Seat already booked".to_string(),
            SessionEvent::SeatRejected { reason: RejectReason::FilteredOut, .. } => {
                "🔍 Seat is outside the chosen price filter".to_string()
            }
            _ => return,
        };
        status_signal().set(status);
    });
    service
}

/// Route an input through the application service into the session signal.
pub fn send(event: SeatMapEvent) {
    SERVICE.with(|service| {
        dispatch_into(session_signal(), service, event);
    });
}

/// Apply `event` to the session held by `session`. Subscribers are only
/// notified when the input changed something.
pub fn dispatch_into<R: SeatMapRepository>(
    session: RwSignal<SeatMapSession>,
    service: &SeatMapService<R>,
    event: SeatMapEvent,
) -> Option<SessionEvent> {
    let mut change = None;
    session.update_untracked(|s| change = service.dispatch(s, event));
    if change.is_some() {
        session.update(|_| {});
    }
    change
}

/// Seat glyphs, rebuilt only when the venue, the selection or the filter changes.
pub fn seat_glyphs_memo(session: RwSignal<SeatMapSession>) -> Memo<Vec<SeatGlyph>> {
    let catalog = create_memo(move |_| session.with(|s| s.catalog().clone()));
    let selection = create_memo(move |_| session.with(|s| s.selection().clone()));
    let filter = create_memo(move |_| session.with(|s| s.filter().clone()));
    create_memo(move |_| {
        catalog.track();
        selection.track();
        filter.track();
        session.with_untracked(build_seat_glyphs)
    })
}

/// Pointer position relative to the seat-map surface, plus the surface size
fn surface_point(container: NodeRef<Div>, client_x: i32, client_y: i32) -> Option<(ScreenPoint, SurfaceSize)> {
    let element = container.get_untracked()?;
    let rect = element.get_bounding_client_rect();
    Some((
        ScreenPoint::new(client_x as f64 - rect.left(), client_y as f64 - rect.top()),
        SurfaceSize::new(rect.width(), rect.height()),
    ))
}

/// Pointer inputs carry surface coordinates, so keep the surface size in sync first.
fn send_pointer(container: NodeRef<Div>, ev: &web_sys::MouseEvent, make: impl FnOnce(ScreenPoint) -> SeatMapEvent) {
    let Some((at, surface)) = surface_point(container, ev.client_x(), ev.client_y()) else {
        return;
    };
    if session_signal().with_untracked(|s| s.view.surface != surface) {
        send(SeatMapEvent::SurfaceResized(surface));
    }
    send(make(at));
}

/// 🎭 Seat map page
#[component]
pub fn App() -> impl IntoView {
    match SERVICE.with(|service| service.start_session()) {
        Ok(session) => {
            session_signal().set(session);
            status_signal().set("✅ Venue loaded".to_string());
        }
        Err(err) => {
            get_logger().error(LogComponent::Presentation("App"), &format!("❌ venue failed to load: {}", err));
            status_signal().set(format!("❌ {}", err));
        }
    }

    view! {
        <style>
            {r#"
            .seat-map-app {
                font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f8fafc;
                min-height: 100vh;
                padding: 20px;
                color: #111827;
            }

            .breadcrumb {
                font-size: 13px;
                color: #6b7280;
                margin-bottom: 16px;
            }

            .layout {
                display: grid;
                grid-template-columns: 180px 1fr 320px;
                gap: 20px;
                align-items: start;
            }

            .tier-filter {
                display: flex;
                flex-direction: column;
                gap: 8px;
            }

            .tier-btn {
                display: flex;
                align-items: center;
                gap: 8px;
                border: 1px solid #e5e7eb;
                background: white;
                padding: 8px 10px;
                border-radius: 8px;
                cursor: pointer;
                font-size: 13px;
            }

            .tier-btn.active {
                box-shadow: 0 0 0 2px #111827;
            }

            .tier-btn.dimmed {
                opacity: 0.4;
            }

            .tier-swatch {
                width: 12px;
                height: 12px;
                border-radius: 50%;
            }

            .map-surface {
                position: relative;
                height: 850px;
                background: white;
                border-radius: 12px;
                border: 1px solid #e5e7eb;
                overflow: hidden;
                user-select: none;
            }

            .map-surface svg {
                width: 100%;
                height: 100%;
                cursor: grab;
            }

            .zoom-controls {
                position: absolute;
                right: 12px;
                bottom: 12px;
                display: flex;
                flex-direction: column;
                gap: 6px;
            }

            .zoom-btn {
                width: 32px;
                height: 32px;
                border-radius: 6px;
                border: 1px solid #d1d5db;
                background: white;
                cursor: pointer;
                font-size: 16px;
            }

            .seat-tooltip {
                position: absolute;
                background: #111827;
                color: white;
                padding: 6px 10px;
                border-radius: 6px;
                font-size: 12px;
                white-space: pre-line;
                pointer-events: none;
                transform: translate(-50%, -120%);
                z-index: 10;
            }

            .side-panel {
                display: flex;
                flex-direction: column;
                gap: 16px;
            }

            .card {
                background: white;
                border: 1px solid #e5e7eb;
                border-radius: 12px;
                padding: 16px;
            }

            .muted {
                color: #6b7280;
                font-size: 12px;
            }

            .chip-row {
                display: flex;
                flex-wrap: wrap;
                gap: 6px;
            }

            .chip {
                border: 1px solid #d1d5db;
                background: white;
                border-radius: 8px;
                padding: 6px 10px;
                cursor: pointer;
                font-size: 12px;
                text-align: center;
            }

            .chip.selected {
                border-color: #111827;
                background: #111827;
                color: white;
            }

            .chip .hot {
                color: #f97316;
                font-size: 10px;
            }

            .selected-row {
                display: flex;
                justify-content: space-between;
                align-items: center;
                padding: 6px 0;
                border-bottom: 1px solid #f3f4f6;
                font-size: 13px;
            }

            .link-btn {
                border: none;
                background: none;
                cursor: pointer;
                color: #2563eb;
                font-size: 12px;
            }

            .total-row {
                display: flex;
                justify-content: space-between;
                font-weight: 700;
                margin-top: 10px;
            }

            .next-btn {
                width: 100%;
                margin-top: 12px;
                padding: 10px;
                border: none;
                border-radius: 8px;
                background: #111827;
                color: white;
                cursor: pointer;
            }

            .status {
                color: #374151;
                font-size: 13px;
                margin: 12px 0;
            }

            .debug-console {
                background: rgba(0, 0, 0, 0.85);
                color: #e0e0e0;
                border-radius: 10px;
                padding: 15px;
                max-height: 240px;
                overflow-y: auto;
            }

            .debug-header {
                display: flex;
                justify-content: space-between;
                align-items: center;
                margin-bottom: 10px;
                color: #72c685;
                font-weight: bold;
            }

            .debug-btn {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 5px 10px;
                border-radius: 5px;
                cursor: pointer;
                font-size: 12px;
                margin-left: 5px;
            }

            .log-line {
                font-family: 'Courier New', monospace;
                font-size: 11px;
                margin: 2px 0;
            }
            "#}
        </style>
        <div class="seat-map-app">
            <SeatMapHeader />
            <div class="layout">
                <TierFilter />
                <SeatCanvas />
                <div class="side-panel">
                    <ShowCard />
                    <SelectedSeatsPanel />
                </div>
            </div>
            <div class="status">{move || status_signal().get()}</div>
            <DebugConsole />
        </div>
    }
}

#[component]
fn SeatMapHeader() -> impl IntoView {
    let event_name = venue_memo!(|c| c.data().event_name.clone());
    view! {
        <div class="breadcrumb">"Home › Events › " {move || event_name.get()} " › Select seats"</div>
    }
}

/// 🎟️ Price tier legend, doubles as the filter
#[component]
fn TierFilter() -> impl IntoView {
    let tiers = venue_memo!(|c| c.tiers().to_vec());
    let active = session_memo!(|s| s.filter().active().cloned());

    view! {
        <div class="tier-filter">
            <div class="muted">"Price"</div>
            <For
                each=move || tiers.get()
                key=|tier| tier.id.clone()
                children=move |tier| {
                    let id = tier.id.clone();
                    let class_id = tier.id.clone();
                    let class = move || match active.get() {
                        Some(current) if current == class_id => "tier-btn active",
                        Some(_) => "tier-btn dimmed",
                        None => "tier-btn",
                    };
                    view! {
                        <button class=class on:click=move |_| send(SeatMapEvent::TierClicked(id.clone()))>
                            <span class="tier-swatch" style:background=tier.color.clone()></span>
                            <span>{format_inr(tier.price.value())}</span>
                        </button>
                    }
                }
            />
        </div>
    }
}

/// 🗺️ Zoomable SVG surface
#[component]
fn SeatCanvas() -> impl IntoView {
    let container = create_node_ref::<Div>();
    let view_box = session_memo!(|s| s.view.viewport.view_box());
    let glyphs = seat_glyphs_memo(session_signal());
    let captions = venue_memo!(|c| build_section_captions(c));
    let loaded = session_memo!(|s| s.catalog().clone());
    let row_labels = create_memo(move |_| {
        loaded.track();
        session_signal().with_untracked(|s| s.row_labels().labels().to_vec())
    });
    let stage = venue_memo!(|c| c.data().stage);
    let sound_area = venue_memo!(|c| c.data().sound_video_area.clone());
    let dots = venue_memo!(|c| c.data().background_dots.clone());

    create_effect(move |_| {
        let Some(element) = container.get() else { return };
        let wheel = add_event_listener_with_options(
            &element,
            ev::wheel,
            &EventOptions::non_passive(),
            move |ev: web_sys::WheelEvent| {
                ev.prevent_default();
                let delta_y = ev.delta_y();
                send_pointer(container, &ev, |at| SeatMapEvent::Wheel { delta_y, at });
            },
        );
        let mouseup = window_event_listener_with_options(ev::mouseup, &EventOptions::default(), |_| {
            send(SeatMapEvent::PointerUp);
        });
        on_cleanup(move || {
            wheel.remove();
            mouseup.remove();
        });
    });

    view! {
        <div
            class="map-surface"
            node_ref=container
            on:mousedown=move |ev| send_pointer(container, &ev, SeatMapEvent::PointerDown)
            on:mousemove=move |ev| send_pointer(container, &ev, SeatMapEvent::PointerMove)
            on:mouseleave=move |_| send(SeatMapEvent::PointerLeave)
        >
            <svg viewBox=move || view_box.get() preserveAspectRatio="xMidYMid meet">
                {move || dots.get().into_iter().map(|dot| view! {
                    <circle cx=dot.x cy=dot.y r=1.5 fill="#e5e7eb" pointer-events="none" />
                }).collect_view()}
                {move || stage.get().map(|rect| view! {
                    <g pointer-events="none">
                        <rect x=rect.x y=rect.y width=rect.width height=rect.height rx=6 fill="#e5e7eb" />
                        <text x={rect.x + rect.width / 2.0} y={rect.y + rect.height / 2.0}
                            text-anchor="middle" dominant-baseline="middle" font-size="14" fill="#6b7280">
                            "STAGE"
                        </text>
                    </g>
                })}
                {move || sound_area.get().map(|area| view! {
                    <g pointer-events="none">
                        <rect x=area.x y=area.y width=area.width height=area.height rx=4 fill="#f3f4f6" />
                        <text x={area.x + area.width / 2.0} y={area.y + area.height / 2.0}
                            text-anchor="middle" dominant-baseline="middle" font-size="10" fill="#9ca3af">
                            {area.label.clone()}
                        </text>
                    </g>
                })}
                {move || captions.get().into_iter().map(|caption| view! {
                    <text x=caption.position.x y=caption.position.y text-anchor="middle"
                        font-size="12" font-weight="600" fill="#374151" pointer-events="none">
                        {caption.text}
                    </text>
                }).collect_view()}
                <For
                    each=move || glyphs.get()
                    key=|glyph| glyph.key()
                    children=move |glyph| view! { <SeatView glyph=glyph container=container /> }
                />
                {move || row_labels.get().into_iter().map(|label| {
                    let anchor = match label.side {
                        LabelSide::Left => "end",
                        LabelSide::Right => "start",
                    };
                    view! {
                        <text x=label.position.x y=label.position.y text-anchor=anchor
                            dominant-baseline="middle" font-size="10" fill="#6b7280" pointer-events="none">
                            {label.row}
                        </text>
                    }
                }).collect_view()}
            </svg>
            <ZoomControls />
            <SeatTooltip />
        </div>
    }
}

#[component]
fn SeatView(glyph: SeatGlyph, container: NodeRef<Div>) -> impl IntoView {
    let SeatGlyph { seat_id, center, radius, visual } = glyph;
    let interactive = visual.interactive;
    let click_id = seat_id.clone();
    let hover_id = seat_id;

    let shape = match visual.shape {
        SeatShape::Disk => view! {
            <circle cx=center.x cy=center.y r=radius fill=visual.fill.clone()
                stroke=visual.stroke stroke-width=visual.stroke_width />
        }
        .into_view(),
        SeatShape::SplitDisk { backdrop } => view! {
            <path d=right_half_disk_path(center, radius) fill=backdrop
                stroke=visual.stroke stroke-width=visual.stroke_width />
            <path d=left_half_disk_path(center, radius) fill=visual.fill.clone()
                stroke=visual.stroke stroke-width=visual.stroke_width />
        }
        .into_view(),
    };

    view! {
        <g
            opacity=visual.opacity
            style:cursor=visual.cursor.as_ref().to_string()
            on:click=move |_| {
                if interactive {
                    send(SeatMapEvent::SeatClicked(click_id.clone()));
                }
            }
            on:mouseenter=move |ev: web_sys::MouseEvent| {
                let seat_id = hover_id.clone();
                send_pointer(container, &ev, |at| SeatMapEvent::SeatHovered { seat_id, at });
            }
            on:mouseleave=move |_| send(SeatMapEvent::SeatLeft)
        >
            {shape}
        </g>
    }
}

#[component]
fn ZoomControls() -> impl IntoView {
    view! {
        <div class="zoom-controls" on:mousedown=|ev| ev.stop_propagation()>
            <button class="zoom-btn" title="Zoom in" on:click=|_| send(SeatMapEvent::ZoomIn)>"+"</button>
            <button class="zoom-btn" title="Zoom out" on:click=|_| send(SeatMapEvent::ZoomOut)>"−"</button>
            <button class="zoom-btn" title="Reset view" on:click=|_| send(SeatMapEvent::ResetView)>"⟲"</button>
        </div>
    }
}

/// 💬 Seat tooltip, positioned in surface pixels
#[component]
fn SeatTooltip() -> impl IntoView {
    let tooltip = session_memo!(|s| s.hover().tooltip().cloned());
    move || {
        tooltip.get().map(|data| {
            view! {
                <div
                    class="seat-tooltip"
                    style:left=format!("{}px", data.x)
                    style:top=format!("{}px", data.y)
                >
                    {data.formatted_text()}
                </div>
            }
        })
    }
}

/// 🎬 Event summary card
#[component]
fn ShowCard() -> impl IntoView {
    let data = venue_memo!(|c| {
        let d = c.data();
        (d.event_name.clone(), d.venue_name.clone(), d.rating.clone(), d.generated_at.clone())
    });

    view! {
        <div class="card">
            {move || {
                let (event_name, venue_name, rating, generated_at) = data.get();
                let generated = generated_at.as_deref().and_then(DateParts::parse).map(|parts| {
                    format!("Updated {} at {}", format_generated_date(&parts), format_generated_time(&parts))
                });
                view! {
                    <h2>{event_name}</h2>
                    <div class="muted">{venue_name}</div>
                    <div class="muted">{rating}</div>
                    {generated.map(|text| view! { <div class="muted">{text}</div> })}
                }
            }}
        </div>
    }
}

#[component]
fn DatePicker() -> impl IntoView {
    let dates = venue_memo!(|c| c.data().dates.clone());
    let current = session_memo!(|s| s.schedule().date_index);

    view! {
        <div class="muted">"Date"</div>
        <div class="chip-row">
            {move || dates.get().into_iter().enumerate().map(|(index, date)| {
                let class = move || if current.get() == index { "chip selected" } else { "chip" };
                view! {
                    <button class=class on:click=move |_| send(SeatMapEvent::DateSelected(index))>
                        <div>{date.day.clone()}</div>
                        <div>{date.short_date().to_string()}</div>
                        <div class="muted">{date.price.clone()}</div>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn TimePicker() -> impl IntoView {
    let times = venue_memo!(|c| c.data().times.clone());
    let current = session_memo!(|s| s.schedule().time_index);

    view! {
        <div class="muted">"Time"</div>
        <div class="chip-row">
            {move || times.get().into_iter().enumerate().map(|(index, slot)| {
                let class = move || if current.get() == index { "chip selected" } else { "chip" };
                let hot = slot.is_selling_out_fast();
                view! {
                    <button class=class on:click=move |_| send(SeatMapEvent::TimeSelected(index))>
                        <div>{slot.time.clone()}</div>
                        <div class="muted">{format_inr(slot.price.value())}</div>
                        {hot.then(|| view! { <div class="hot">"Selling out fast"</div> })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// 🧾 Selected seats with the running total; schedule pickers while empty
#[component]
fn SelectedSeatsPanel() -> impl IntoView {
    let details = session_memo!(|s| s.selected_details());
    let total = session_memo!(|s| s.selected_total());
    let time_label = session_memo!(|s| s.selected_time_label().to_string());

    view! {
        <div class="card">
            <Show
                when=move || !details.with(Vec::is_empty)
                fallback=|| view! { <DatePicker /> <TimePicker /> }
            >
                <div class="selected-row">
                    <strong>{move || format!("{} seat(s) • {}", details.with(Vec::len), time_label.get())}</strong>
                    <button class="link-btn" on:click=|_| send(SeatMapEvent::ClearAll)>"Clear all"</button>
                </div>
                <For
                    each=move || details.get()
                    key=|seat| seat.id.clone()
                    children=move |seat| {
                        let id = seat.id.clone();
                        view! {
                            <div class="selected-row">
                                <span>{format!("{} • {}", seat.section_name, seat.label)}</span>
                                <span>{format_inr(seat.price.value())}</span>
                                <button class="link-btn" title="Remove"
                                    on:click=move |_| send(SeatMapEvent::SeatRemoved(id.clone()))>
                                    "🗑"
                                </button>
                            </div>
                        }
                    }
                />
                <div class="total-row">
                    <span>"Total"</span>
                    <span>{move || format_inr(total.get().value())}</span>
                </div>
                <button
                    class="next-btn"
                    on:click=move |_| {
                        get_logger().info(
                            LogComponent::Presentation("Checkout"),
                            &format!("➡️ proceeding with {} seats", details.with(Vec::len)),
                        );
                    }
                >
                    "Next"
                </button>
            </Show>
        </div>
    }
}

/// 🐛 Domain logger console
#[component]
fn DebugConsole() -> impl IntoView {
    let logs = logs_signal();
    let is_paused = log_paused_signal();

    view! {
        <div class="debug-console">
            <div class="debug-header">
                <span>"🐛 Domain Logger Console"</span>
                <div>
                    <button
                        class="debug-btn"
                        on:click=move |_| {
                            let resume = is_paused.get_untracked();
                            if !resume {
                                get_logger().info(LogComponent::Presentation("DebugConsole"), "🛑 Logging paused");
                            }
                            is_paused.set(!resume);
                            if resume {
                                get_logger().info(LogComponent::Presentation("DebugConsole"), "▶️ Logging resumed");
                            }
                        }
                    >
                        {move || if is_paused.get() { "▶️ Resume" } else { "⏸️ Pause" }}
                    </button>
                    <button
                        class="debug-btn"
                        on:click=move |_| {
                            logs.set(Vec::new());
                            get_logger().info(LogComponent::Presentation("DebugConsole"), "🗑️ Log history cleared");
                        }
                    >
                        "🗑️ Clear"
                    </button>
                </div>
            </div>
            {move || logs.get().into_iter().map(|line| view! { <div class="log-line">{line}</div> }).collect_view()}
        </div>
    }
}
