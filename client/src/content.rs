//! Static page content: navigation targets, profile, sections, contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything the page renders is a constant defined here. Components read
//! these tables directly; nothing is fetched or mutated at runtime.
//!
//! Every `NavSection` id must be rendered as exactly one element id on the
//! page, otherwise the matching nav link scrolls nowhere.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

// =============================================================================
// NAVIGATION
// =============================================================================

/// One same-page navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    /// Element id of the section, also the URL fragment.
    pub id: &'static str,
    pub label: &'static str,
}

impl NavSection {
    /// Fragment link for this section, e.g. `#about`.
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

pub const ABOUT: NavSection = NavSection { id: "about", label: "About" };
pub const SKILLS: NavSection = NavSection { id: "skills", label: "Skills" };
pub const EXPERIENCE: NavSection = NavSection { id: "experience", label: "Experience" };
pub const PROJECTS: NavSection = NavSection { id: "projects", label: "Projects" };
pub const BLOG: NavSection = NavSection { id: "blog", label: "Blog" };
pub const CONTACT: NavSection = NavSection { id: "contact", label: "Contact" };

/// Navbar order.
pub const SECTIONS: [NavSection; 6] = [ABOUT, SKILLS, EXPERIENCE, PROJECTS, BLOG, CONTACT];

// =============================================================================
// PROFILE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub github_url: &'static str,
    pub linkedin_url: &'static str,
}

impl Profile {
    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Nikhil Sharma",
    tagline: "Software developer building backend services, data pipelines and the tooling around them.",
    email: "nikhilsharmash20@gmail.com",
    github_url: "https://github.com/nikhilsh2003",
    linkedin_url: "https://www.linkedin.com/in/nikhilsh2003/",
};

/// Outbound profile destinations shown in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    GitHub,
    LinkedIn,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub label: &'static str,
}

impl SocialLink {
    /// Profile pages open in a new tab; the mail client link does not.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        !matches!(self.kind, SocialKind::Mail)
    }
}

/// Navbar social links in display order.
#[must_use]
pub fn social_links(profile: &Profile) -> [SocialLink; 3] {
    [
        SocialLink { kind: SocialKind::Mail, href: profile.mailto(), label: "Email" },
        SocialLink { kind: SocialKind::GitHub, href: profile.github_url.to_owned(), label: "GitHub" },
        SocialLink { kind: SocialKind::LinkedIn, href: profile.linkedin_url.to_owned(), label: "LinkedIn" },
    ]
}

// =============================================================================
// ABOUT / SKILLS
// =============================================================================

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I'm a software developer at Deutsche Bank, working on risk calculations for the banking book: \
     Scala and Spark jobs on Hadoop, Spring Boot services around them, and the SQL, Airflow and \
     OpenShift plumbing that keeps it all running.",
    "Outside work I build small full-stack tools, mostly to scratch my own itches, and deploy them \
     in containers.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillGroup {
    pub name: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup { name: "Languages", items: &["Java", "Scala", "Python", "C#", "SQL"] },
    SkillGroup { name: "Data", items: &["Hadoop", "Spark", "Airflow", "Liquibase"] },
    SkillGroup { name: "Backend", items: &["Spring Boot", "ASP.NET", "Razor", "AJAX"] },
    SkillGroup { name: "Platform", items: &["Docker", "OpenShift (OCP4)", "Render", "CI/CD"] },
];

// =============================================================================
// EXPERIENCE / PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub highlights: &'static [&'static str],
}

impl ExperienceEntry {
    /// Card heading, e.g. `Deutsche Bank – Software Developer`.
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{} – {}", self.company, self.role)
    }
}

pub const EXPERIENCE_ENTRIES: &[ExperienceEntry] = &[
    ExperienceEntry {
        company: "Deutsche Bank",
        role: "Software Developer",
        period: "Jul 2023 – Present",
        highlights: &[
            "Risk in Banking Book project (Scala, Hadoop, Spark)",
            "Java Spring Boot backend services",
            "Liquibase + SQL optimization",
            "Airflow + Python automation",
            "DevOps & OCP4 migration",
            "Agile tribe ceremonies",
        ],
    },
    ExperienceEntry {
        company: "Mastercard",
        role: "Summer Intern",
        period: "May 2022 – July 2022",
        highlights: &[
            "Built configurable data validator in ASP.NET",
            "Regex + Razor frontend",
            "AJAX lazy load optimization",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const PROJECT_ENTRIES: &[Project] = &[
    Project {
        title: "Crypto Tracker",
        summary: "Fullstack app for live crypto prices with Dockerized deployment on Render.",
    },
    Project {
        title: "GitHub Job Board",
        summary: "Automated job listing site scraping GitHub issues and sending notifications.",
    },
];

// =============================================================================
// BLOG
// =============================================================================

/// Blog placeholder, written in Markdown like the posts that will replace it.
pub const BLOG_MARKDOWN: &str = "\
Coming Soon: Developer musings, architecture breakdowns, and CI/CD hacks.

Posts will be powered by **Markdown/MDX** for easy writing and Git-based publishing.
";

// =============================================================================
// CONTACT
// =============================================================================

/// Hosted form handler that receives the contact form POST.
pub const CONTACT_FORM_ACTION: &str = "https://formspree.io/f/mgegvjzr";
pub const CONTACT_FORM_METHOD: &str = "POST";

/// Input control used for a contact field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u8 },
}

impl FieldKind {
    /// `type` attribute for `<input>` controls; `None` for a textarea.
    #[must_use]
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            Self::Text => Some("text"),
            Self::Email => Some("email"),
            Self::TextArea { .. } => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactField {
    /// Form field name sent in the POST body.
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
}

pub const CONTACT_FIELDS: [ContactField; 3] = [
    ContactField { name: "name", kind: FieldKind::Text, placeholder: "Your Name", required: true },
    ContactField { name: "email", kind: FieldKind::Email, placeholder: "Your Email", required: true },
    ContactField {
        name: "message",
        kind: FieldKind::TextArea { rows: 4 },
        placeholder: "Your Message",
        required: true,
    },
];

pub const CONTACT_SUBMIT_LABEL: &str = "Send Message";

// =============================================================================
// FOOTER
// =============================================================================

pub const FOOTER_YEAR: u16 = 2025;

#[must_use]
pub fn footer_text(profile: &Profile) -> String {
    format!(
        "© {FOOTER_YEAR} {} • Designed with ✨ and Leptos • Open to awesome opportunities",
        profile.name
    )
}
