mod content;

pub use content::{
    ABOUT_STATS, CONTACT_METHODS, CV_URL, FLOATING_CARDS, FOOTER_LINKS, HERO_STATS, OWNER_NAME,
    PROJECTS, SOCIAL_LINKS, TECH_STACK,
};

/// Symbolic icon identifiers. The view layer decides how each one is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    NextJs,
    React,
    TypeScript,
    Tailwind,
    Firebase,
    Framer,
    Html5,
    Css3,
    JavaScript,
    Git,
    Figma,
    Vercel,
    GitHub,
    LinkedIn,
    Twitter,
    Facebook,
    Instagram,
    Email,
    Gmail,
    Phone,
    WhatsApp,
    Location,
    Calendar,
    Code,
    Brush,
    Rocket,
    ExternalLink,
    Download,
    Star,
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [Technology],
    pub image: &'static str,
    pub live_url: &'static str,
    pub github_url: Option<&'static str>,
    pub featured: bool,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactMethod {
    pub icon: Icon,
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub color: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub icon: Icon,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloatingCard {
    pub icon: Icon,
    pub title: &'static str,
    pub delay: &'static str,
    pub color: &'static str,
}

/// A headline number such as `20+` or `100%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Stat {
    pub fn display(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

/// How a link should be opened: external `http(s)` links get a fresh
/// browsing context, everything else (anchors, `mailto:`, `tel:`) stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    External,
    SameContext,
}

impl LinkTarget {
    pub fn of(href: &str) -> Self {
        if href.starts_with("http") {
            Self::External
        } else {
            Self::SameContext
        }
    }

    pub fn target(self) -> &'static str {
        match self {
            Self::External => "_blank",
            Self::SameContext => "_self",
        }
    }

    pub fn rel(self) -> &'static str {
        match self {
            Self::External => "noopener noreferrer",
            Self::SameContext => "",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
    Completed,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [Self::All, Self::Featured, Self::Completed];

    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Projects",
            Self::Featured => "Featured",
            Self::Completed => "Completed",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Featured => project.featured,
            Self::Completed => project.status == ProjectStatus::Completed,
        }
    }
}

/// A filter button: the filter plus its total count over the full list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: ProjectFilter,
    pub count: usize,
}

impl FilterOption {
    pub fn label(&self) -> &'static str {
        self.filter.label()
    }
}

/// Stable filter: surviving projects keep their source order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

pub fn filter_options(projects: &[Project]) -> [FilterOption; 3] {
    ProjectFilter::ALL.map(|filter| FilterOption {
        filter,
        count: projects.iter().filter(|p| filter.matches(p)).count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, featured: bool, status: ProjectStatus) -> Project {
        Project {
            id,
            title: "test",
            description: "",
            technologies: &[],
            image: "",
            live_url: "https://example.com",
            github_url: None,
            featured,
            status,
        }
    }

    fn ids(projects: &[&Project]) -> Vec<u32> {
        projects.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_seeded_projects() {
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(
            ids(&filter_projects(PROJECTS, ProjectFilter::All)),
            vec![1, 2, 3, 4, 5, 6]
        );
        assert_eq!(
            ids(&filter_projects(PROJECTS, ProjectFilter::Featured)),
            vec![3]
        );
        assert_eq!(
            ids(&filter_projects(PROJECTS, ProjectFilter::Completed)),
            vec![1, 2, 3, 4, 5, 6]
        );
    }

    #[test]
    fn test_project_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in PROJECTS {
            assert!(seen.insert(p.id), "duplicate project id {}", p.id);
        }
    }

    #[test]
    fn test_filter_all_is_identity() {
        let list = [
            project(7, false, ProjectStatus::InProgress),
            project(2, true, ProjectStatus::Completed),
            project(5, false, ProjectStatus::Completed),
        ];
        let all = filter_projects(&list, ProjectFilter::All);
        assert_eq!(all.len(), list.len());
        for (a, b) in all.iter().zip(list.iter()) {
            assert_eq!(*a, b);
        }
    }

    #[test]
    fn test_filter_preserves_order() {
        let list = [
            project(9, true, ProjectStatus::Completed),
            project(1, false, ProjectStatus::InProgress),
            project(4, true, ProjectStatus::InProgress),
            project(3, false, ProjectStatus::Completed),
            project(8, true, ProjectStatus::Completed),
        ];
        assert_eq!(
            ids(&filter_projects(&list, ProjectFilter::Featured)),
            vec![9, 4, 8]
        );
        assert_eq!(
            ids(&filter_projects(&list, ProjectFilter::Completed)),
            vec![9, 3, 8]
        );
        for filter in ProjectFilter::ALL {
            for p in filter_projects(&list, filter) {
                assert!(filter.matches(p));
            }
        }
    }

    #[test]
    fn test_filter_empty_result() {
        let list = [project(1, false, ProjectStatus::InProgress)];
        assert!(filter_projects(&list, ProjectFilter::Featured).is_empty());
        assert!(filter_projects(&list, ProjectFilter::Completed).is_empty());
        assert!(filter_projects(&[], ProjectFilter::All).is_empty());
    }

    #[test]
    fn test_filter_counts_match_filtered_sizes() {
        let options = filter_options(PROJECTS);
        assert_eq!(
            options.map(|o| (o.filter.id(), o.count)),
            [("all", 6), ("featured", 1), ("completed", 6)]
        );
        for option in options {
            assert_eq!(
                option.count,
                filter_projects(PROJECTS, option.filter).len()
            );
        }
        assert_eq!(options[0].label(), "All Projects");
    }

    #[test]
    fn test_link_target() {
        assert_eq!(
            LinkTarget::of("https://wa.me/2349115438720"),
            LinkTarget::External
        );
        assert_eq!(LinkTarget::of("mailto:a@b.c"), LinkTarget::SameContext);
        assert_eq!(LinkTarget::of("tel:+1"), LinkTarget::SameContext);
        assert_eq!(LinkTarget::of("#contact").target(), "_self");
        assert_eq!(LinkTarget::External.rel(), "noopener noreferrer");
    }

    #[test]
    fn test_stat_display() {
        let stat = Stat {
            value: 100,
            suffix: "%",
            label: "Client Satisfaction",
        };
        assert_eq!(stat.display(), "100%");
    }
}
