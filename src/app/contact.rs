use std::time::Duration;

use leptos::{either::EitherOf3, ev::SubmitEvent, html, prelude::*, task::spawn_local};

use super::{
    icons::Glyph,
    reveal::{use_reveal, Reveal, SectionHeader},
};
use crate::{
    contact::{
        submit, ContactForm, DeliveryError, Field, FormCell, FormFields, SubmissionStatus,
        SubmitRejected,
    },
    motion::{Entrance, Stagger},
    portfolio::{Icon, LinkTarget, CONTACT_METHODS, FOOTER_LINKS, OWNER_NAME},
};

/// Relays a contact submission to the site owner's inbox.
#[server]
pub async fn send_message(fields: FormFields) -> Result<(), ServerFnError> {
    use crate::contact::{deliver, relay::EmailJs, EmailConfig};

    let config = EmailConfig::from_env().map_err(|e| {
        tracing::error!("contact form is not configured: {e}");
        ServerFnError::new("Message delivery is unavailable")
    })?;
    deliver(&EmailJs::new(config), &fields).await.map_err(|e| {
        tracing::error!("failed to deliver contact message: {e}");
        match e {
            DeliveryError::MissingField(field) => {
                ServerFnError::new(format!("Missing field: {}", field.label()))
            }
            _ => ServerFnError::new("Couldn't send message"),
        }
    })?;
    tracing::info!("contact message delivered");
    Ok(())
}

impl FormCell for RwSignal<ContactForm> {
    fn with_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

#[cfg(feature = "hydrate")]
async fn pause(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

// submit handlers never run during server rendering
#[cfg(not(feature = "hydrate"))]
async fn pause(_duration: Duration) {}

async fn send_to_server(fields: FormFields) -> Result<(), DeliveryError> {
    send_message(fields).await.map_err(|e| {
        log::error!("contact message failed: {e}");
        DeliveryError::Relay(e.to_string())
    })
}

#[component]
pub fn Contact() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(section_ref);
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            match submit(&form, send_to_server, pause).await {
                Ok(()) | Err(SubmitRejected::InFlight) => {}
                Err(rejected) => log::debug!("contact form not submitted: {rejected}"),
            }
        });
    };

    let submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section
            id="contact"
            node_ref=section_ref
            class="relative py-24 lg:py-32 overflow-hidden bg-gradient-to-b from-black via-gray-900 to-black text-white"
        >
            <div class="absolute inset-0 overflow-hidden">
                <div class="absolute top-0 right-1/4 w-96 h-96 bg-purple-500/5 rounded-full blur-3xl" />
                <div class="absolute bottom-0 left-1/4 w-96 h-96 bg-cyan-500/5 rounded-full blur-3xl" />
            </div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <SectionHeader
                    revealed
                    badge="GET IN TOUCH"
                    title="Let's Create "
                    highlight="Together"
                    subtitle="Have a project in mind? Let's discuss how we can bring your vision to life."
                />

                <div class="grid lg:grid-cols-2 gap-12 lg:gap-16">
                    <Reveal revealed entrance=Entrance::FromLeft delay=0.2 class="space-y-8">
                        <div>
                            <h3 class="text-3xl font-bold mb-4">"Connect With Me"</h3>
                            <p class="text-gray-400 text-lg leading-relaxed">
                                "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                            </p>
                        </div>
                        <div class="flex items-center gap-3 p-4 rounded-2xl bg-green-500/10 border border-green-500/20">
                            <span class="relative flex h-3 w-3">
                                <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-green-400 opacity-75" />
                                <span class="relative inline-flex rounded-full h-3 w-3 bg-green-500" />
                            </span>
                            <span class="text-green-300 text-sm font-medium">
                                "Currently available for freelance work and full-time opportunities"
                            </span>
                        </div>
                        <div class="grid sm:grid-cols-2 gap-4">
                            {CONTACT_METHODS
                                .iter()
                                .enumerate()
                                .map(|(i, method)| {
                                    let target = LinkTarget::of(method.link);
                                    view! {
                                        <a
                                            href=method.link
                                            target=target.target()
                                            rel=target.rel()
                                            class=move || {
                                                format!(
                                                    "group flex items-center gap-4 p-5 rounded-2xl bg-gradient-to-br {} border border-white/10 hover:border-white/20 hover:-translate-y-1 transition-all duration-500 ease-out {}",
                                                    method.color,
                                                    Entrance::FadeUp.classes(revealed.get()),
                                                )
                                            }
                                            style:transition-delay=Stagger::CARDS.css(i)
                                        >
                                            <div class="flex items-center justify-center w-12 h-12 rounded-xl bg-black/30 text-2xl">
                                                <Glyph icon=method.icon class=method.accent />
                                            </div>
                                            <div class="min-w-0">
                                                <div class="text-sm text-gray-400">{method.title}</div>
                                                <div class="font-semibold truncate group-hover:text-white transition-colors">
                                                    {method.value}
                                                </div>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal revealed entrance=Entrance::FromRight delay=0.4>
                        <form
                            on:submit=on_submit
                            class="p-8 lg:p-10 rounded-3xl bg-gradient-to-br from-white/5 to-white/0 border border-white/10 backdrop-blur-sm space-y-6"
                        >
                            <h3 class="text-2xl font-bold mb-2">"Send a Message"</h3>
                            <div class="grid sm:grid-cols-2 gap-6">
                                <FormInput form field=Field::Name />
                                <FormInput form field=Field::Email />
                            </div>
                            <FormInput form field=Field::Subject />
                            <div class="space-y-2">
                                <label
                                    for=Field::Message.as_str()
                                    class="block text-sm font-medium text-gray-300"
                                >
                                    {Field::Message.label()}
                                </label>
                                <textarea
                                    id=Field::Message.as_str()
                                    name=Field::Message.as_str()
                                    rows="6"
                                    required=true
                                    placeholder=Field::Message.placeholder()
                                    prop:value=move || form.with(|f| f.field(Field::Message).to_string())
                                    on:input=move |ev| {
                                        form.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                                    }
                                    class="w-full px-5 py-4 rounded-xl bg-black/40 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:border-purple-500/50 focus:ring-2 focus:ring-purple-500/20 transition-all resize-none"
                                />
                            </div>

                            <button
                                type="submit"
                                disabled=submitting
                                class="group w-full flex items-center justify-center gap-3 px-8 py-4 bg-gradient-to-r from-purple-600 to-cyan-600 rounded-xl font-semibold hover:shadow-2xl hover:shadow-purple-500/30 transition-all duration-300 disabled:opacity-60 disabled:cursor-not-allowed"
                            >
                                {move || {
                                    if submitting() {
                                        view! {
                                            <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin" />
                                            <span>"Sending Message..."</span>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <span>"Send Message"</span>
                                            <Glyph
                                                icon=Icon::Arrow
                                                class="group-hover:translate-x-1 transition-transform"
                                            />
                                        }
                                            .into_any()
                                    }
                                }}
                            </button>

                            {move || match form.with(ContactForm::status) {
                                SubmissionStatus::Idle => EitherOf3::A(()),
                                SubmissionStatus::Success => {
                                    EitherOf3::B(
                                        view! {
                                            <div
                                                role="status"
                                                class="p-4 rounded-xl bg-green-500/10 border border-green-500/30"
                                            >
                                                <p class="font-semibold text-green-300">
                                                    "Message Sent Successfully!"
                                                </p>
                                                <p class="text-sm text-green-200/80 mt-1">
                                                    "Thank you for reaching out. I'll get back to you within 24 hours."
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                                SubmissionStatus::Error => {
                                    EitherOf3::C(
                                        view! {
                                            <div
                                                role="alert"
                                                class="p-4 rounded-xl bg-red-500/10 border border-red-500/30"
                                            >
                                                <p class="font-semibold text-red-300">"Something went wrong"</p>
                                                <p class="text-sm text-red-200/80 mt-1">
                                                    "Please try again or contact me directly via email."
                                                </p>
                                            </div>
                                        },
                                    )
                                }
                            }}
                        </form>
                    </Reveal>
                </div>
            </div>
            <Footer />
        </section>
    }
}

#[component]
fn FormInput(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=field.as_str() class="block text-sm font-medium text-gray-300">
                {field.label()}
            </label>
            <input
                id=field.as_str()
                name=field.as_str()
                type=field.input_type()
                required=true
                placeholder=field.placeholder()
                prop:value=move || form.with(|f| f.field(field).to_string())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
                class="w-full px-5 py-4 rounded-xl bg-black/40 border border-white/10 text-white placeholder-gray-500 focus:outline-none focus:border-purple-500/50 focus:ring-2 focus:ring-purple-500/20 transition-all"
            />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative z-10 mt-24 pt-10 border-t border-white/10">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="text-center md:text-left">
                    <p class="text-gray-400 text-sm">
                        {format!("© {} {OWNER_NAME}. All rights reserved.", env!("BUILD_YEAR"))}
                    </p>
                    <p class="text-gray-500 text-xs mt-1">"Built with ♥ using Rust & Leptos"</p>
                </div>
                <div class="flex items-center gap-4">
                    {FOOTER_LINKS
                        .iter()
                        .map(|link| {
                            let target = LinkTarget::of(link.href);
                            view! {
                                <a
                                    href=link.href
                                    target=target.target()
                                    rel=target.rel()
                                    aria-label=link.label
                                    class="flex items-center justify-center w-10 h-10 rounded-full bg-white/5 border border-white/10 text-gray-400 hover:text-white hover:border-white/30 hover:-translate-y-1 transition-all duration-300"
                                >
                                    <Glyph icon=link.icon />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
