use super::{
    ContactMethod, FloatingCard, Icon, Project, ProjectStatus, SocialLink, Stat, TechBadge,
    Technology,
};

pub const OWNER_NAME: &str = "Dosunmu Victor";

pub const CV_URL: &str =
    "https://drive.google.com/file/d/1hcNBNDgeAhicBX-4OMGE4L7enP4OoizF/view?usp=sharing";

const NEXT_JS: Technology = Technology {
    name: "Next.js",
    icon: Icon::NextJs,
};
const REACT: Technology = Technology {
    name: "React",
    icon: Icon::React,
};
const TYPESCRIPT: Technology = Technology {
    name: "TypeScript",
    icon: Icon::TypeScript,
};
const TAILWIND: Technology = Technology {
    name: "Tailwind CSS",
    icon: Icon::Tailwind,
};
const FIREBASE: Technology = Technology {
    name: "Firebase",
    icon: Icon::Firebase,
};
const FRAMER: Technology = Technology {
    name: "Framer",
    icon: Icon::Framer,
};

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Easy Buy Silk",
        description: "A modern e-commerce platform built with Next.js, offering a seamless shopping experience for silk fabric enthusiasts with responsive design and intuitive user interface.",
        technologies: &[NEXT_JS, REACT, TYPESCRIPT, TAILWIND],
        image: "/project1.png",
        live_url: "https://easy-buy-silk.vercel.app/",
        github_url: None,
        featured: false,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 2,
        title: "Bloggy - Modern Blog Platform",
        description: "A sleek blog platform built with Next.js and Firebase, featuring real-time content updates, user authentication, and a clean, modern writing interface.",
        technologies: &[NEXT_JS, FIREBASE, REACT, TAILWIND],
        image: "/project2.png",
        live_url: "https://bloggy-ebon.vercel.app/",
        github_url: None,
        featured: false,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 3,
        title: "StudyHelp Platform",
        description: "Built the entire frontend of the StudyHelp platform. Worked closely with a backend developer to connect UI to server functionality. Implemented dashboards, features, and interactions for both students and teachers.",
        technologies: &[REACT, TYPESCRIPT, TAILWIND, FRAMER],
        image: "/project3.png",
        live_url: "https://studyhub-seven-eta.vercel.app/",
        github_url: None,
        featured: true,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 4,
        title: "ScoreUpRiseUp Funnel Site",
        description: "Designed the web flow and complete visual structure of the funnel site for an educational platform, focusing on conversion optimization and user journey.",
        technologies: &[NEXT_JS, REACT, TAILWIND],
        image: "/project4.png",
        live_url: "https://apply.scoreupriseup.com/",
        github_url: None,
        featured: false,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 5,
        title: "ashly Nicole Productions",
        description: "Designed and implemented the landing page for a movie production company with cinematic visuals, smooth animations, and responsive design.",
        technologies: &[REACT, FRAMER, TAILWIND],
        image: "/project5.png",
        live_url: "https://ashly-production-5dh9.vercel.app/",
        github_url: None,
        featured: false,
        status: ProjectStatus::Completed,
    },
    Project {
        id: 6,
        title: "Body of Christ Ministry",
        description: "Beautiful responsive website for a Christian ministry focused on teaching, apologetics, and outreach. Implemented smooth animations and accessible design.",
        technologies: &[REACT, FRAMER, TAILWIND],
        image: "/project6.png",
        live_url: "https://body-of-christ.vercel.app/",
        github_url: None,
        featured: false,
        status: ProjectStatus::Completed,
    },
];

pub static TECH_STACK: &[TechBadge] = &[
    TechBadge {
        icon: Icon::Html5,
        name: "HTML5",
        color: "text-orange-500",
    },
    TechBadge {
        icon: Icon::Css3,
        name: "CSS3",
        color: "text-blue-500",
    },
    TechBadge {
        icon: Icon::JavaScript,
        name: "JavaScript",
        color: "text-yellow-400",
    },
    TechBadge {
        icon: Icon::TypeScript,
        name: "TypeScript",
        color: "text-blue-600",
    },
    TechBadge {
        icon: Icon::React,
        name: "React",
        color: "text-cyan-400",
    },
    TechBadge {
        icon: Icon::NextJs,
        name: "Next.js",
        color: "text-white",
    },
    TechBadge {
        icon: Icon::Tailwind,
        name: "Tailwind",
        color: "text-teal-400",
    },
    TechBadge {
        icon: Icon::Framer,
        name: "Framer",
        color: "text-pink-500",
    },
    TechBadge {
        icon: Icon::Git,
        name: "Git",
        color: "text-orange-600",
    },
    TechBadge {
        icon: Icon::Figma,
        name: "Figma",
        color: "text-purple-600",
    },
    TechBadge {
        icon: Icon::Firebase,
        name: "Firebase",
        color: "text-orange-400",
    },
    TechBadge {
        icon: Icon::Vercel,
        name: "Vercel",
        color: "text-white",
    },
];

pub static CONTACT_METHODS: &[ContactMethod] = &[
    ContactMethod {
        icon: Icon::Gmail,
        title: "Email",
        value: "dosunmuvictor16@gmail.com",
        link: "mailto:dosunmuvictor16@gmail.com",
        color: "from-red-500/20 to-red-500/5",
        accent: "text-red-400",
    },
    ContactMethod {
        icon: Icon::Phone,
        title: "Phone",
        value: "+234 911 543 8720",
        link: "tel:+2349115438720",
        color: "from-green-500/20 to-green-500/5",
        accent: "text-green-400",
    },
    ContactMethod {
        icon: Icon::WhatsApp,
        title: "WhatsApp",
        value: "Chat with me",
        link: "https://wa.me/2349115438720",
        color: "from-green-600/20 to-green-600/5",
        accent: "text-green-500",
    },
    ContactMethod {
        icon: Icon::LinkedIn,
        title: "LinkedIn",
        value: "Dosunmu Victor",
        link: "https://www.linkedin.com/in/dosunmu-victor-57430a380",
        color: "from-blue-700/20 to-blue-700/5",
        accent: "text-blue-500",
    },
    ContactMethod {
        icon: Icon::GitHub,
        title: "GitHub",
        value: "@Viktor-Kode",
        link: "https://github.com/Viktor-Kode",
        color: "from-gray-800/20 to-gray-800/5",
        accent: "text-gray-300",
    },
    ContactMethod {
        icon: Icon::Twitter,
        title: "Twitter",
        value: "@WEBTOR2",
        link: "https://x.com/WEBTOR2",
        color: "from-blue-400/20 to-blue-400/5",
        accent: "text-blue-400",
    },
    ContactMethod {
        icon: Icon::Location,
        title: "Location",
        value: "Ogun, Nigeria",
        link: "#",
        color: "from-pink-500/20 to-pink-500/5",
        accent: "text-pink-400",
    },
    ContactMethod {
        icon: Icon::Calendar,
        title: "Availability",
        value: "Open for opportunities",
        link: "#contact",
        color: "from-purple-500/20 to-purple-500/5",
        accent: "text-purple-400",
    },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::GitHub,
        label: "GitHub",
        href: "https://github.com/Viktor-Kode",
    },
    SocialLink {
        icon: Icon::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/dosunmu-victor-57430a380",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        href: "https://x.com/WEBTOR2?t=bvU4uh4TlGKZSw9h31JSEg&s=09",
    },
    SocialLink {
        icon: Icon::Facebook,
        label: "Facebook",
        href: "https://www.facebook.com/share/1D7yMopFAu/",
    },
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram",
        href: "https://www.instagram.com/dosunmuvictor16?utm_source=qr&igsh=cDBscjR0bGU1c2s4",
    },
];

pub static FOOTER_LINKS: &[SocialLink] = &[
    SocialLink {
        icon: Icon::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/dosunmu-victor-57430a380",
    },
    SocialLink {
        icon: Icon::GitHub,
        label: "GitHub",
        href: "https://github.com/Viktor-Kode",
    },
    SocialLink {
        icon: Icon::Twitter,
        label: "Twitter",
        href: "https://x.com/WEBTOR2",
    },
    SocialLink {
        icon: Icon::Instagram,
        label: "Instagram",
        href: "#",
    },
    SocialLink {
        icon: Icon::Gmail,
        label: "Email",
        href: "mailto:dosunmuvictor16@gmail.com",
    },
];

pub static FLOATING_CARDS: &[FloatingCard] = &[
    FloatingCard {
        icon: Icon::Code,
        title: "Front-end Dev",
        delay: "0s",
        color: "from-purple-500 to-pink-500",
    },
    FloatingCard {
        icon: Icon::Brush,
        title: "UI/UX Design",
        delay: "1s",
        color: "from-cyan-500 to-blue-500",
    },
    FloatingCard {
        icon: Icon::Rocket,
        title: "Innovation",
        delay: "2s",
        color: "from-orange-500 to-red-500",
    },
];

pub static HERO_STATS: &[Stat] = &[
    Stat {
        value: 20,
        suffix: "+",
        label: "Projects",
    },
    Stat {
        value: 2,
        suffix: "+",
        label: "Years Experience",
    },
    Stat {
        value: 100,
        suffix: "%",
        label: "Client Satisfaction",
    },
];

pub static ABOUT_STATS: &[Stat] = &[
    Stat {
        value: 20,
        suffix: "+",
        label: "Projects",
    },
    Stat {
        value: 2,
        suffix: "+",
        label: "Years",
    },
    Stat {
        value: 15,
        suffix: "+",
        label: "Clients",
    },
];
