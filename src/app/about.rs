use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_interval_fn_with_options, utils::Pausable, UseIntervalFnOptions};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Reveal, SectionHeader},
};
use crate::{
    motion::{counter_value, Entrance, Stagger, COUNTER_DURATION, COUNTER_TICK},
    portfolio::{Icon, Stat, ABOUT_STATS, CV_URL, OWNER_NAME, TECH_STACK},
};

const DESCRIPTION_BLOCKS: [&str; 2] = [
    "With expertise in modern technologies like React, Next.js, and TypeScript, I build scalable applications that deliver outstanding user experiences.",
    "My approach combines innovative thinking with attention to detail, ensuring every project meets the highest standards of quality and performance.",
];

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);

    view! {
        <section
            id="about"
            node_ref=section_ref
            class="relative py-24 lg:py-32 overflow-hidden bg-gradient-to-b from-gray-900 via-black to-gray-900 text-white"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-0 left-1/4 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl" />
                <div class="absolute bottom-0 right-1/4 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl" />
            </div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeader
                    revealed
                    badge="ABOUT ME"
                    title="Crafting Digital "
                    highlight="Experiences"
                    subtitle="Building the future with clean code, modern design, and innovative solutions"
                />

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-20 items-start">
                    <Reveal revealed entrance=Entrance::FromLeft delay=0.2 class="space-y-10">
                        <div class="space-y-6">
                            <h3 class="text-3xl font-bold text-white">
                                "Hello, I'm "
                                <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-pink-400">
                                    {OWNER_NAME}
                                </span>
                            </h3>
                            <p class="text-gray-300 text-lg leading-relaxed">
                                "A passionate " <span class="text-cyan-300 font-semibold">"Frontend Developer"</span>
                                " specializing in creating exceptional digital experiences. I combine technical expertise with creative vision to build solutions that are both beautiful and functional."
                            </p>
                        </div>

                        <div class="space-y-4">
                            {DESCRIPTION_BLOCKS
                                .iter()
                                .enumerate()
                                .map(|(i, text)| {
                                    view! {
                                        <Reveal
                                            revealed
                                            entrance=Entrance::FromLeft
                                            delay=Stagger::BLOCKS.delay(i)
                                            class="p-6 rounded-2xl bg-white/5 border border-white/10 backdrop-blur-sm hover:border-purple-500/30 transition-colors"
                                        >
                                            <p class="text-gray-300 leading-relaxed">{*text}</p>
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <Reveal
                            revealed
                            entrance=Entrance::FadeUpSmall
                            delay=0.8
                            class="grid grid-cols-3 gap-4"
                        >
                            {ABOUT_STATS
                                .iter()
                                .map(|stat| view! { <CountUp stat=*stat revealed /> })
                                .collect_view()}
                        </Reveal>

                        <Reveal revealed entrance=Entrance::FadeUpSmall delay=1.0>
                            <a
                                href=CV_URL
                                download=""
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-3 px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full font-semibold hover:shadow-2xl hover:shadow-purple-500/30 transition-all duration-300 hover:scale-105"
                            >
                                "Download CV"
                                <Glyph icon=Icon::Download />
                            </a>
                        </Reveal>
                    </Reveal>

                    <Reveal revealed entrance=Entrance::FromRight delay=0.4>
                        <div class="p-8 rounded-3xl bg-gradient-to-br from-white/5 to-white/0 border border-white/10 backdrop-blur-sm">
                            <div class="mb-8 text-center">
                                <h3 class="text-2xl font-bold text-white mb-2">"Technical Stack"</h3>
                                <p class="text-gray-400">"Technologies I use to bring ideas to life"</p>
                            </div>
                            <div class="grid grid-cols-3 sm:grid-cols-4 gap-4">
                                {TECH_STACK
                                    .iter()
                                    .enumerate()
                                    .map(|(i, tech)| {
                                        view! {
                                            <div
                                                class=move || {
                                                    format!(
                                                        "group flex flex-col items-center justify-center p-4 rounded-2xl bg-white/5 border border-white/10 hover:-translate-y-2 hover:scale-110 transition-all duration-500 ease-out {}",
                                                        Entrance::Pop.classes(revealed.get()),
                                                    )
                                                }
                                                style:transition-delay=Stagger::BADGES.css(i)
                                            >
                                                <Glyph icon=tech.icon class=tech.color />
                                                <span class="mt-2 text-xs text-gray-400 group-hover:text-white transition-colors">
                                                    {tech.name}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <Reveal
                                revealed
                                entrance=Entrance::Fade
                                delay=1.2
                                class="mt-12 pt-8 border-t border-white/10"
                            >
                                <p class="text-gray-400 text-sm text-center">
                                    "Specializing in modern frontend development with a focus on"
                                    <span class="text-cyan-300">" performance"</span> ","
                                    <span class="text-purple-300">" accessibility"</span> ", and"
                                    <span class="text-pink-300">" user experience"</span> "."
                                </p>
                            </Reveal>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

/// A stat that counts up from zero once its section is revealed.
#[component]
fn CountUp(stat: Stat, revealed: Signal<bool>) -> impl IntoView {
    let (elapsed, set_elapsed) = signal(Duration::ZERO);
    let Pausable {
        pause,
        resume,
        is_active,
    } = use_interval_fn_with_options(
        move || set_elapsed.update(|e| *e += COUNTER_TICK),
        COUNTER_TICK.as_millis() as u64,
        UseIntervalFnOptions::default().immediate(false),
    );

    Effect::new(move |_| {
        let done = elapsed.get() >= COUNTER_DURATION;
        if done {
            pause();
        } else if revealed.get() && !is_active.get_untracked() {
            resume();
        }
    });

    view! {
        <div class="text-center p-4 rounded-2xl bg-white/5 border border-white/10">
            <div class="text-3xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                {move || counter_value(stat.value, elapsed.get(), COUNTER_DURATION)}
                {stat.suffix}
            </div>
            <div class="text-sm text-gray-400 mt-1">{stat.label}</div>
        </div>
    }
}
