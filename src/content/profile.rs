//! Page content: sections, hero phrases, skills and portfolio items.
//!
//! The content is plain data. Components that find their slice of it empty
//! disable themselves rather than erroring.

/// Identifier of a page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero section with the typing line and particle background.
    Home,
    /// Short bio.
    About,
    /// Skill bars.
    Skills,
    /// Filterable project grid.
    Portfolio,
    /// Contact form.
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Portfolio,
        Self::Contact,
    ];

    /// Navigation label shown in the sidebar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Portfolio => "Portfolio",
            Self::Contact => "Contact",
        }
    }

    /// Position within [`Self::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// One skill bar: a label and a target fill percentage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    /// Display label.
    pub name: String,
    /// Target width in percent, 0..=100.
    pub percent: u8,
}

/// One entry of the portfolio grid.
///
/// `id` keys into the project catalog; `category` is the tag the filter
/// matches against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioItem {
    /// Catalog key for the detail dialog.
    pub id: String,
    /// Card title.
    pub title: String,
    /// Filter tag carried by this item.
    pub category: String,
}

/// Everything the page displays, supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteContent {
    /// Name shown in the hero banner and title bar.
    pub name: String,
    /// Phrases the typewriter cycles through.
    pub typing_phrases: Vec<String>,
    /// Bio paragraphs for the About section.
    pub about: Vec<String>,
    /// Skill bars in display order.
    pub skills: Vec<Skill>,
    /// Portfolio grid items in display order.
    pub portfolio: Vec<PortfolioItem>,
    /// Filter tags in display order. The first entry is the sentinel "all".
    pub filter_tags: Vec<String>,
    /// Short line above the contact form.
    pub contact_intro: String,
}

impl SiteContent {
    /// The built-in portfolio content.
    #[must_use]
    pub fn builtin() -> Self {
        let item = |id: &str, title: &str, category: &str| PortfolioItem {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
        };
        let skill = |name: &str, percent: u8| Skill {
            name: name.to_string(),
            percent,
        };

        Self {
            name: "Code'x Wolfer".to_string(),
            typing_phrases: vec![
                "I am a Developer".to_string(),
                "I am a Freelancer".to_string(),
                "I am a Designer".to_string(),
                "I am a Problem Solver".to_string(),
            ],
            about: vec![
                "Full-stack developer and designer building mobile apps, web \
                 platforms and brand identities for clients around the world."
                    .to_string(),
                "I care about small details, fast interfaces and software that \
                 feels obvious the first time you use it. When I am not shipping \
                 client work I design print pieces and tinker with terminals."
                    .to_string(),
            ],
            skills: vec![
                skill("HTML / CSS", 95),
                skill("JavaScript", 90),
                skill("React Native", 85),
                skill("Node.js", 80),
                skill("UI / UX Design", 85),
                skill("Brand Design", 75),
            ],
            portfolio: vec![
                item("fittrack", "FitTrack Pro", "app"),
                item("shopease", "ShopEase E-commerce", "web"),
                item("businesscard", "Alistair Finch Branding", "card"),
                item("socialconnect", "SocialConnect", "app"),
                item("dataviz", "DataViz Dashboard", "web"),
                item("ignite", "Ignite Creative Agency", "web"),
                item("wedding", "Eternal Love Wedding Invitation", "card"),
                item("foodie", "Foodie Express", "app"),
            ],
            filter_tags: vec![
                "all".to_string(),
                "app".to_string(),
                "web".to_string(),
                "card".to_string(),
            ],
            contact_intro: "Have a project in mind? Send me a message.".to_string(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::builtin()
    }
}
