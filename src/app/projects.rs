use leptos::{html, prelude::*};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Reveal, SectionHeader},
};
use crate::{
    motion::{Entrance, Stagger},
    portfolio::{
        filter_options, filter_projects, Icon, Project, ProjectFilter, Stat, CV_URL, PROJECTS,
    },
};

#[component]
pub fn Projects() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let (active, set_active) = signal(ProjectFilter::All);

    // totals over the full list, independent of the selection
    let options = filter_options(PROJECTS);
    let featured_count = options
        .iter()
        .find(|o| o.filter == ProjectFilter::Featured)
        .map(|o| o.count)
        .unwrap_or_default();
    let summary = [
        Stat {
            value: PROJECTS.len() as u32,
            suffix: "",
            label: "Projects",
        },
        Stat {
            value: featured_count as u32,
            suffix: "",
            label: "Featured",
        },
        Stat {
            value: 100,
            suffix: "%",
            label: "Client Satisfaction",
        },
    ];

    view! {
        <section
            id="projects"
            node_ref=section_ref
            class="relative py-24 lg:py-32 overflow-hidden bg-black text-white"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-1/3 -left-20 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl" />
                <div class="absolute bottom-1/3 -right-20 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl" />
            </div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeader
                    revealed
                    badge="MY WORK"
                    title="Featured "
                    highlight="Projects"
                    subtitle="A collection of modern web applications built with cutting-edge frontend technologies"
                />

                <Reveal
                    revealed
                    entrance=Entrance::FadeUpSmall
                    delay=0.2
                    class="flex flex-wrap justify-center gap-4 mb-16"
                >
                    {options
                        .into_iter()
                        .map(|option| {
                            let is_active = move || active.get() == option.filter;
                            view! {
                                <button
                                    data-filter=option.filter.id()
                                    class=move || {
                                        format!(
                                            "flex items-center gap-3 px-6 py-3 rounded-full font-medium transition-all duration-300 hover:scale-105 active:scale-95 {}",
                                            if is_active() {
                                                "bg-gradient-to-r from-purple-600 to-cyan-600 text-white shadow-2xl shadow-purple-500/30"
                                            } else {
                                                "bg-white/5 border border-white/10 text-gray-300 hover:border-white/20 hover:text-white"
                                            },
                                        )
                                    }
                                    on:click=move |_| set_active(option.filter)
                                >
                                    <span>{option.label()}</span>
                                    <span class=move || {
                                        format!(
                                            "px-2 py-0.5 rounded-full text-xs {}",
                                            if is_active() { "bg-white/20" } else { "bg-white/10" },
                                        )
                                    }>{option.count}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </Reveal>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {move || {
                        filter_projects(PROJECTS, active.get())
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project index=i revealed /> })
                            .collect_view()
                    }}
                </div>

                <Reveal revealed entrance=Entrance::FadeUp delay=0.4 class="mt-24">
                    <div class="relative p-10 lg:p-16 rounded-3xl bg-gradient-to-br from-purple-500/10 via-transparent to-cyan-500/10 border border-white/10 overflow-hidden text-center">
                        <h3 class="text-3xl lg:text-4xl font-bold mb-4">
                            "Ready to bring your "
                            <span class="text-transparent bg-clip-text bg-gradient-to-r from-purple-400 to-cyan-400">
                                "ideas to life?"
                            </span>
                        </h3>
                        <p class="text-gray-400 text-lg mb-8 max-w-2xl mx-auto">
                            "Let's collaborate on your next project and create something amazing together."
                        </p>
                        <div class="flex flex-wrap justify-center gap-4">
                            <a
                                href="#contact"
                                class="group inline-flex items-center gap-2 px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-full font-semibold hover:shadow-2xl hover:shadow-purple-500/30 transition-all duration-300 hover:scale-105"
                            >
                                "Start a Project"
                                <Glyph icon=Icon::Arrow class="group-hover:translate-x-1 transition-transform" />
                            </a>
                            <a
                                href=CV_URL
                                download=""
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-8 py-4 border-2 border-white/20 rounded-full font-semibold hover:border-white/40 hover:bg-white/5 transition-all duration-300 hover:scale-105"
                            >
                                <Glyph icon=Icon::Download />
                                "Download CV"
                            </a>
                        </div>
                        <Reveal
                            revealed
                            entrance=Entrance::FadeUpSmall
                            delay=0.6
                            class="grid grid-cols-3 gap-6 mt-12 max-w-xl mx-auto"
                        >
                            {summary
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="text-3xl font-bold bg-gradient-to-r from-purple-400 to-cyan-400 bg-clip-text text-transparent">
                                                {stat.display()}
                                            </div>
                                            <div class="text-sm text-gray-400 mt-1">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize, revealed: Signal<bool>) -> impl IntoView {
    let surface = if project.featured {
        "bg-gradient-to-br from-purple-500/10 to-cyan-500/10"
    } else {
        "bg-gradient-to-b from-white/5 to-white/0"
    };
    view! {
        <article
            class=move || {
                format!(
                    "group relative rounded-3xl overflow-hidden border border-white/10 hover:border-white/20 hover:-translate-y-2.5 transition-all duration-500 ease-out {surface} {}",
                    Entrance::FadeUp.classes(revealed.get()),
                )
            }
            style:transition-delay=Stagger::CARDS.css(index)
        >
            {project
                .featured
                .then(|| {
                    view! {
                        <div class="absolute top-4 left-4 z-20">
                            <div class="flex items-center gap-1.5 px-3 py-1.5 rounded-full bg-gradient-to-r from-yellow-500 to-orange-500 text-black text-xs font-bold">
                                <Glyph icon=Icon::Star />
                                <span>"Featured"</span>
                            </div>
                        </div>
                    }
                })}
            <div class="relative h-56 overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading=if project.featured { "eager" } else { "lazy" }
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500">
                    <div class="absolute bottom-4 left-4 right-4 flex gap-3">
                        <a
                            href=project.live_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="flex items-center gap-2 px-4 py-2 bg-white text-black rounded-full text-sm font-semibold hover:scale-110 transition-transform"
                        >
                            <Glyph icon=Icon::ExternalLink />
                            "Live Demo"
                        </a>
                        {project
                            .github_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="flex items-center gap-2 px-4 py-2 bg-black/50 border border-white/20 rounded-full text-sm font-semibold hover:scale-110 transition-transform"
                                    >
                                        <Glyph icon=Icon::GitHub />
                                        "Code"
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
            <div class="p-6">
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="flex items-center gap-1.5 px-3 py-1 rounded-full bg-white/5 border border-white/10 text-xs">
                                    <Glyph icon=tech.icon />
                                    <span class="text-gray-300">{tech.name}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <h3 class="text-xl font-bold mb-3 group-hover:text-transparent group-hover:bg-clip-text group-hover:bg-gradient-to-r group-hover:from-purple-400 group-hover:to-cyan-400 transition-all">
                    {project.title}
                </h3>
                <p class="text-gray-400 text-sm leading-relaxed mb-6 line-clamp-3">
                    {project.description}
                </p>
                <a
                    href=project.live_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-flex items-center gap-2 text-sm font-semibold text-cyan-400 hover:text-cyan-300 hover:translate-x-1 transition-all"
                >
                    "View Project Details"
                    <Glyph icon=Icon::Arrow />
                </a>
            </div>
        </article>
    }
}
