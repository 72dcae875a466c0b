use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Reveal},
};
use crate::{
    motion::{glow_origin, glow_scale, is_scrolled, star_field, Entrance, Star, STAR_COUNT},
    portfolio::{Icon, FLOATING_CARDS, HERO_STATS, OWNER_NAME, SOCIAL_LINKS},
};

const NAV_ITEMS: [&str; 3] = ["Projects", "About", "Contact"];

#[cfg(feature = "hydrate")]
fn random() -> f64 {
    web_sys::js_sys::Math::random()
}

// effects never run during server rendering
#[cfg(not(feature = "hydrate"))]
fn random() -> f64 {
    0.5
}

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    let (menu_open, set_menu_open) = signal(false);
    let (is_client, set_is_client) = signal(false);
    let (stars, set_stars) = signal(Vec::<Star>::new());
    let (pointer, set_pointer) = signal((0.0_f64, 0.0_f64));
    let (scroll_y, set_scroll_y) = signal(0.0_f64);
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get()));

    // listeners are removed when the component is cleaned up
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_scroll_y(window().scroll_y().unwrap_or_default());
    });
    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        set_pointer((e.client_x() as f64, e.client_y() as f64));
    });

    // effects only run in the browser, after the first render
    Effect::new(move |_| {
        set_is_client(true);
        set_stars(star_field(STAR_COUNT, random));
    });

    view! {
        <section
            id="home"
            node_ref=section_ref
            class="relative min-h-screen overflow-hidden bg-gradient-to-br from-gray-900 via-black to-gray-900 text-white"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/4 left-1/4 w-72 h-72 bg-purple-500/10 rounded-full blur-3xl animate-pulse" />
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-cyan-500/10 rounded-full blur-3xl animate-pulse delay-1000" />
                <Show when=move || is_client.get()>
                    <div class="absolute inset-0">
                        {move || {
                            stars
                                .get()
                                .into_iter()
                                .map(|star| {
                                    view! {
                                        <div
                                            class="absolute w-1 h-1 bg-white rounded-full opacity-20"
                                            style:left=format!("{}%", star.left)
                                            style:top=format!("{}%", star.top)
                                            style:animation=format!(
                                                "twinkle {}s infinite",
                                                star.duration,
                                            )
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </div>

            <Show when=move || is_client.get()>
                <div
                    class="pointer-events-none fixed w-96 h-96 rounded-full bg-gradient-to-r from-purple-500/10 to-cyan-500/10 blur-3xl transition-transform duration-300 z-0"
                    style:left=move || format!("{}px", glow_origin(pointer.get().0, pointer.get().1).0)
                    style:top=move || format!("{}px", glow_origin(pointer.get().0, pointer.get().1).1)
                    style:transform=move || format!("scale({})", glow_scale(scrolled.get()))
                />
            </Show>

            <NavBar scrolled menu_open set_menu_open />

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 pt-32 pb-20 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <Reveal revealed entrance=Entrance::FadeUp class="space-y-8">
                        <div class="inline-flex items-center space-x-2 bg-gradient-to-r from-purple-500/20 to-cyan-500/20 rounded-full px-4 py-2 backdrop-blur-sm border border-white/10">
                            <span class="w-2 h-2 bg-gradient-to-r from-purple-500 to-cyan-500 rounded-full animate-pulse" />
                            <span class="text-sm font-medium">"Available for freelance work"</span>
                        </div>
                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold leading-tight">
                            <span class="block text-gray-300">"Creating Digital"</span>
                            <span class="block bg-gradient-to-r from-purple-500 via-pink-500 to-cyan-500 bg-clip-text text-transparent animate-gradient bg-[length:200%_auto]">
                                "Experiences"
                            </span>
                            <span class="block text-gray-300">"That Inspire"</span>
                        </h1>
                        <p class="text-xl text-gray-400 max-w-2xl leading-relaxed">
                            "I'm " <span class="font-semibold text-cyan-400">{OWNER_NAME}</span>
                            ", a creative developer & designer focused on building innovative digital solutions with cutting-edge technology and thoughtful design."
                        </p>
                        <div class="flex flex-wrap gap-4">
                            <a
                                href="#projects"
                                class="group relative px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full font-semibold overflow-hidden hover:shadow-2xl hover:shadow-purple-500/30 transition-all duration-300 hover:-translate-y-1"
                            >
                                <span class="relative z-10 flex items-center space-x-2">
                                    <span>"View My Work"</span>
                                    <Glyph icon=Icon::Arrow class="group-hover:translate-x-1 transition-transform duration-300" />
                                </span>
                            </a>
                            <a
                                href="#contact"
                                class="px-8 py-4 border-2 border-white/20 rounded-full font-semibold hover:border-white/40 hover:bg-white/5 transition-all duration-300 hover:-translate-y-1"
                            >
                                "Get In Touch"
                            </a>
                        </div>
                        <div class="grid grid-cols-3 gap-6 pt-8">
                            {HERO_STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center">
                                            <div class="text-3xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                                                {stat.display()}
                                            </div>
                                            <div class="text-sm text-gray-400 mt-1">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal
                        revealed
                        entrance=Entrance::Fade
                        delay=0.3
                        class="relative h-[500px] lg:h-[600px]"
                    >
                        {FLOATING_CARDS
                            .iter()
                            .enumerate()
                            .map(|(i, card)| {
                                let position = match i {
                                    0 => "top-0 left-0 lg:top-10 lg:left-10",
                                    1 => "top-0 right-0 lg:top-20 lg:right-10",
                                    _ => "bottom-0 left-1/2 -translate-x-1/2 lg:bottom-20 lg:left-auto lg:right-20",
                                };
                                view! {
                                    <div
                                        class=format!(
                                            "absolute {position} animate-float bg-gradient-to-br {} p-[1px] rounded-2xl",
                                            card.color,
                                        )
                                        style:animation-delay=card.delay
                                    >
                                        <div class="bg-gray-900/90 backdrop-blur-xl rounded-2xl p-6 flex items-center space-x-4">
                                            <Glyph icon=card.icon class="text-3xl" />
                                            <span class="font-semibold">{card.title}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <Avatar />
                    </Reveal>
                </div>
            </div>

            <Show when=move || is_client.get()>
                <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                    <div class="w-6 h-10 border-2 border-white/20 rounded-full flex justify-center">
                        <div class="w-1 h-3 bg-white/50 rounded-full mt-2" />
                    </div>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn NavBar(
    scrolled: Memo<bool>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    view! {
        <nav class=move || {
            format!(
                "fixed w-full z-50 transition-all duration-500 {}",
                if scrolled.get() {
                    "py-4 bg-black/80 backdrop-blur-xl shadow-2xl shadow-purple-500/10"
                } else {
                    "py-6"
                },
            )
        }>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between">
                    <a href="/" class="flex items-center space-x-3 group">
                        <div class="w-10 h-10 rounded-xl bg-gradient-to-br from-purple-500 to-cyan-500 p-[2px]">
                            <div class="w-full h-full rounded-xl bg-black flex items-center justify-center">
                                <span class="font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                                    "DV"
                                </span>
                            </div>
                        </div>
                        <span class="hidden sm:block text-xl font-bold">{OWNER_NAME}</span>
                    </a>

                    <div class="hidden lg:flex items-center space-x-8">
                        <div class="flex items-center space-x-8">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <a
                                            href=format!("#{}", item.to_lowercase())
                                            class="text-gray-300 hover:text-white transition-colors duration-300 font-medium"
                                        >
                                            {*item}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex items-center space-x-4 pl-8 border-l border-white/10">
                            {SOCIAL_LINKS
                                .iter()
                                .take(4)
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-2 rounded-lg bg-white/5 hover:bg-white/10 text-gray-400 hover:text-white transition-all duration-300"
                                        >
                                            <Glyph icon=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <button
                        class="lg:hidden p-2 rounded-lg bg-white/5 hover:bg-white/10 transition-colors"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        <div class="w-6 h-5 flex flex-col justify-between">
                            <span class=move || {
                                if menu_open.get() {
                                    "h-0.5 bg-white transition-all rotate-45 translate-y-2"
                                } else {
                                    "h-0.5 bg-white transition-all"
                                }
                            } />
                            <span class=move || {
                                if menu_open.get() {
                                    "h-0.5 bg-white transition-all opacity-0"
                                } else {
                                    "h-0.5 bg-white transition-all"
                                }
                            } />
                            <span class=move || {
                                if menu_open.get() {
                                    "h-0.5 bg-white transition-all -rotate-45 -translate-y-2"
                                } else {
                                    "h-0.5 bg-white transition-all"
                                }
                            } />
                        </div>
                    </button>
                </div>

                <div class=move || {
                    format!(
                        "lg:hidden overflow-hidden transition-all duration-500 {}",
                        if menu_open.get() { "max-h-96 mt-6 opacity-100" } else { "max-h-0 opacity-0" },
                    )
                }>
                    <div class="bg-black/90 backdrop-blur-xl rounded-2xl p-6 border border-white/10 space-y-4">
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=format!("#{}", item.to_lowercase())
                                        class="block text-gray-300 hover:text-white transition-colors py-2 font-medium"
                                        on:click=move |_| set_menu_open(false)
                                    >
                                        {*item}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <div class="pt-4 border-t border-white/10 flex items-center space-x-4">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            aria-label=link.label
                                            class="p-2 rounded-lg bg-white/5 hover:bg-white/10 text-gray-400 hover:text-white transition-colors"
                                        >
                                            <Glyph icon=link.icon />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn Avatar() -> impl IntoView {
    view! {
        <div class="absolute inset-0 flex items-center justify-center">
            <div class="relative w-64 h-64 lg:w-80 lg:h-80">
                <div class="absolute inset-0 rounded-full bg-gradient-to-r from-purple-600 to-cyan-600 blur-2xl opacity-30 animate-pulse" />
                <div class="absolute inset-0 rounded-full border-2 border-dashed border-white/20 animate-spin-slow" />
                <div class="absolute inset-4 rounded-full bg-gradient-to-br from-gray-800 to-gray-900 overflow-hidden flex items-center justify-center">
                    <div class="absolute inset-0 grid grid-cols-10 grid-rows-10 opacity-10">
                        {(0..10)
                            .map(|col| {
                                view! {
                                    <div
                                        class="border-r border-white/20"
                                        style:grid-column=format!("{} / span 1", col + 1)
                                    />
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="relative text-center">
                        <div class="text-6xl lg:text-7xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                            "DV"
                        </div>
                        <div class="text-sm text-gray-400 mt-2 tracking-widest">{OWNER_NAME}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}
