/// Generate accessor functions for fields of [`Globals`](crate::global_state::Globals).
///
/// Usage:
/// `global_signals! {
///     pub fn1 => field1: Type1,
///     fn2 => field2: Type2,
/// }`
#[macro_export]
macro_rules! global_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}

/// Memoized derivation of the global session.
///
/// `let total = session_memo!(|s| s.selected_total());`
#[macro_export]
macro_rules! session_memo {
    (|$s:ident| $body:expr) => {
        ::leptos::create_memo(move |_| {
            ::leptos::SignalWith::with(&$crate::global_state::session_signal(), |$s| $body)
        })
    };
}

/// Memoized derivation of the loaded venue. Reruns only when a new document
/// replaces the catalog, not on every session change.
///
/// `let tiers = venue_memo!(|c| c.tiers().to_vec());`
#[macro_export]
macro_rules! venue_memo {
    (|$c:ident| $body:expr) => {{
        let catalog = $crate::session_memo!(|s| s.catalog().clone());
        ::leptos::create_memo(move |_| ::leptos::SignalWith::with(&catalog, |$c| $body))
    }};
}
