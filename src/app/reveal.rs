use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::motion::{Entrance, RevealLatch, REVEAL_MARGIN};

/// Latches to true the first time `target` scrolls into view. The observer
/// is stopped once the latch trips.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let latch = RwSignal::new(RevealLatch::default());

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if latch.with_untracked(RevealLatch::is_revealed) {
                return;
            }
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            // subscribers hear about the flip only
            latch.maybe_update(|l| l.observe(visible));
        },
        UseIntersectionObserverOptions::default().root_margin(REVEAL_MARGIN.to_string()),
    );

    let revealed = Signal::derive(move || latch.with(RevealLatch::is_revealed));
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
    revealed
}

/// Wraps children in an entrance transition keyed off `revealed`.
#[component]
pub fn Reveal(
    revealed: Signal<bool>,
    entrance: Entrance,
    #[prop(optional)] delay: f64,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=move || {
                format!(
                    "transition-all duration-700 ease-out {} {}",
                    entrance.classes(revealed.get()),
                    class,
                )
            }
            style:transition-delay=format!("{delay:.2}s")
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionBadge(text: &'static str) -> impl IntoView {
    view! {
        <div class="inline-flex items-center gap-2 px-5 py-2.5 rounded-full bg-gradient-to-r from-purple-500/10 to-cyan-500/10 border border-white/10 backdrop-blur-sm mb-8">
            <div class="w-2 h-2 bg-gradient-to-r from-purple-500 to-cyan-500 rounded-full animate-pulse" />
            <span class="text-sm font-medium text-transparent bg-clip-text bg-gradient-to-r from-purple-300 to-cyan-300 tracking-wide">
                {text}
            </span>
        </div>
    }
}

#[component]
pub fn SectionHeader(
    revealed: Signal<bool>,
    badge: &'static str,
    title: &'static str,
    highlight: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <Reveal revealed entrance=Entrance::FadeUp class="text-center mb-16 lg:mb-24">
            <SectionBadge text=badge />
            <h2 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-6 leading-tight">
                <span class="text-white">{title}</span>
                <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 via-pink-400 to-cyan-400 bg-[length:200%_auto] animate-gradient">
                    {highlight}
                </span>
            </h2>
            <p class="text-xl text-gray-400 max-w-3xl mx-auto leading-relaxed font-light">
                {subtitle}
            </p>
        </Reveal>
    }
}
