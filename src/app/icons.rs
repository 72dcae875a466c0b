use leptos::prelude::*;

use crate::portfolio::Icon;

/// Icon-font class for each symbolic icon. `devicon-*` comes from Devicon,
/// `extra-*` from the site's own icon font.
pub fn icon_class(icon: Icon) -> &'static str {
    match icon {
        Icon::NextJs => "devicon-nextjs-plain",
        Icon::React => "devicon-react-original",
        Icon::TypeScript => "devicon-typescript-plain",
        Icon::Tailwind => "devicon-tailwindcss-original",
        Icon::Firebase => "devicon-firebase-plain",
        Icon::Framer => "devicon-framermotion-original",
        Icon::Html5 => "devicon-html5-plain",
        Icon::Css3 => "devicon-css3-plain",
        Icon::JavaScript => "devicon-javascript-plain",
        Icon::Git => "devicon-git-plain",
        Icon::Figma => "devicon-figma-plain",
        Icon::Vercel => "devicon-vercel-original",
        Icon::GitHub => "devicon-github-plain",
        Icon::LinkedIn => "devicon-linkedin-plain",
        Icon::Twitter => "devicon-twitter-original",
        Icon::Facebook => "devicon-facebook-plain",
        Icon::Instagram => "extra-instagram",
        Icon::Email => "extra-email",
        Icon::Gmail => "extra-gmail",
        Icon::Phone => "extra-phone",
        Icon::WhatsApp => "extra-whatsapp",
        Icon::Location => "extra-location",
        Icon::Calendar => "extra-calendar",
        Icon::Code => "extra-code",
        Icon::Brush => "extra-brush",
        Icon::Rocket => "extra-rocket",
        Icon::ExternalLink => "extra-link",
        Icon::Download => "extra-download",
        Icon::Star => "extra-star",
        Icon::Arrow => "extra-arrow",
    }
}

#[component]
pub fn Glyph(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <i class=format!("{} {class}", icon_class(icon)) aria-hidden="true"></i> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{CONTACT_METHODS, FOOTER_LINKS, PROJECTS, SOCIAL_LINKS, TECH_STACK};

    #[test]
    fn test_every_icon_in_content_resolves() {
        let icons = PROJECTS
            .iter()
            .flat_map(|p| p.technologies.iter().map(|t| t.icon))
            .chain(TECH_STACK.iter().map(|t| t.icon))
            .chain(CONTACT_METHODS.iter().map(|c| c.icon))
            .chain(SOCIAL_LINKS.iter().chain(FOOTER_LINKS).map(|s| s.icon));
        for icon in icons {
            let class = icon_class(icon);
            assert!(
                class.starts_with("devicon-") || class.starts_with("extra-"),
                "{icon:?} -> {class}"
            );
        }
    }
}
