//! Static page content: metadata, sections, footer.
//!
//! Everything here is `'static` literal data. Nothing is computed, nothing
//! is loaded at runtime. Layout, export and the terminal view all read from
//! [`PAGE`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

// ============================================================================
// SECTION IDENTIFIERS
// ============================================================================

/// The fixed set of section anchors, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Education,
    Contact,
}

impl SectionId {
    /// All identifiers in the order the sections appear on the page.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The anchor string, e.g. `"skills"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Label shown on the header nav button.
    pub fn nav_label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    /// Position in page order (0-based).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An identifier outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

// ============================================================================
// CONTENT TYPES
// ============================================================================

/// Document-level metadata handed to whatever hosts the page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub viewport: &'static str,
}

/// Reference to a static image asset. Loading it is someone else's job.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImageRef {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// One list item: optional bold lead, plain text, optional detail paragraph.
///
/// `text` follows the lead verbatim, so it carries its own leading space
/// (or none).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Bullet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strong: Option<&'static str>,
    pub text: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
}

/// Input kinds used by the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    TextArea,
}

/// An unbound form input.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormField {
    pub kind: InputKind,
    pub placeholder: &'static str,
}

/// Contact form markup. No action, no handler.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormMarkup {
    pub fields: &'static [FormField],
    pub submit_label: &'static str,
}

/// Building blocks of a section, in render order.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Block {
    Image(ImageRef),
    /// Large page title (home only).
    Title(&'static str),
    Heading(&'static str),
    Paragraph(&'static str),
    Bullets(&'static [Bullet]),
    Form(FormMarkup),
}

/// One full-height content section.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub blocks: &'static [Block],
}

impl Section {
    /// The section's visible heading (first title or heading block).
    pub fn heading(&self) -> &'static str {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::Title(t) | Block::Heading(t) => Some(*t),
                _ => None,
            })
            .unwrap_or("")
    }

    /// The contact form, if this section carries one.
    pub fn form(&self) -> Option<&FormMarkup> {
        self.blocks.iter().find_map(|b| match b {
            Block::Form(f) => Some(f),
            _ => None,
        })
    }
}

/// The whole page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub meta: PageMeta,
    pub brand: &'static str,
    pub sections: &'static [Section],
    pub footer: &'static str,
}

impl Page {
    /// Look up a section by identifier. Every identifier is present.
    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }
}

// ============================================================================
// LITERAL DATA
// ============================================================================

pub const PAGE_META: PageMeta = PageMeta {
    title: "Ashfa Shakeel | Portfolio",
    description: "Ashfa Shakeel's professional portfolio",
    viewport: "width=device-width, initial-scale=1",
};

pub const PROFILE_IMAGE: ImageRef = ImageRef {
    src: "/profile-pic (1).png",
    alt: "Ashfa Shakeel",
    width: 400,
    height: 400,
};

pub const BRAND: &str = "Ashfa's Portfolio";

pub const FOOTER: &str = "\u{a9} 2024 Ashfa Shakeel | All Rights Reserved";

pub const CONTACT_FORM: FormMarkup = FormMarkup {
    fields: &[
        FormField {
            kind: InputKind::Text,
            placeholder: "Your Name",
        },
        FormField {
            kind: InputKind::Email,
            placeholder: "Your Email",
        },
        FormField {
            kind: InputKind::TextArea,
            placeholder: "Your Message",
        },
    ],
    submit_label: "Send Message",
};

const SKILLS: &[Bullet] = &[
    Bullet {
        strong: None,
        text: "Pharmacy Expertise - In-depth understanding of pharmaceutical practices, drug management, and patient care.",
        detail: None,
    },
    Bullet {
        strong: None,
        text: "Web Development - Proficient in creating full-stack web applications with Next.js, React, Node.js, and Express",
        detail: None,
    },
    Bullet {
        strong: None,
        text: "Front-End Technologies - Advanced knowledge of HTML, CSS, JavaScript, and Tailwind CSS for creating responsive, user-friendly interfaces.",
        detail: None,
    },
    Bullet {
        strong: None,
        text: "Responsive Design - Expertise in designing mobile-first, responsive websites to ensure seamless user experiences across devices.",
        detail: None,
    },
    Bullet {
        strong: None,
        text: "UI/UX Design - Skilled in creating intuitive and aesthetically pleasing designs that prioritize user experience.",
        detail: None,
    },
    Bullet {
        strong: None,
        text: "Version Control - Proficient in using Git and GitHub for collaborative coding and version management.",
        detail: None,
    },
];

const EXPERIENCE: &[Bullet] = &[
    Bullet {
        strong: Some("Working as a Pharmacist"),
        text: "(2024 - Present)",
        detail: Some("I provide exceptional patient care through the safe and effective use of medications, bridging healthcare and technology to improve patient outcomes."),
    },
    Bullet {
        strong: Some("Web Developer at Governor Sindh Initiative For GenAL, Web3, Metaverse"),
        text: " (2023 - Present)",
        detail: Some("I am expanding my web development skills with technologies like React and Next.js, focusing on healthcare-driven solutions."),
    },
    Bullet {
        strong: Some("House Job"),
        text: " (2023-2024) ",
        detail: Some("I worked as a hospital pharmacist, gaining hands-on experience in medication management and patient care."),
    },
];

const EDUCATION: &[Bullet] = &[
    Bullet {
        strong: Some("Web Development (Present)"),
        text: " - GIAIC, 2024",
        detail: None,
    },
    Bullet {
        strong: Some("House Job"),
        text: " - 2022-23",
        detail: None,
    },
    Bullet {
        strong: Some("Bachelor of Pharmacy"),
        text: " - University of PUMHSW, 2017",
        detail: None,
    },
    Bullet {
        strong: Some("Intermediate"),
        text: " - County Girls College, 2016",
        detail: None,
    },
    Bullet {
        strong: Some("Matriculation"),
        text: " - Eaton Public School, 2014",
        detail: None,
    },
];

const SECTIONS: &[Section] = &[
    Section {
        id: SectionId::Home,
        blocks: &[
            Block::Image(PROFILE_IMAGE),
            Block::Title("Welcome to My Portfolio"),
            Block::Paragraph("I'm Ashfa Shakeel, a passionate pharmacist and aspiring web developer. Here, you'll discover a blend of my expertise in healthcare and my growing skills in web development. I'm excited to share my journey, experiences that combine technology and pharmacy, creating impactful solutions for better healthcare."),
            Block::Paragraph("Explore my portfolio to see how I bring these two worlds together. Let's connect and collaborate on new projects to help shape the future of healthcare technology!"),
        ],
    },
    Section {
        id: SectionId::About,
        blocks: &[
            Block::Heading("About Me"),
            Block::Paragraph("I am a passionate pharmacist with a deep interest in technology, and my goal is to create impactful solutions that bridge the gap between healthcare and digital innovation. With a background in pharmacy and a growing expertise in web development, I strive to make healthcare more accessible and efficient through the power of technology."),
            Block::Paragraph("My experience in pharmacy allows me to understand the challenges healthcare professionals face, which I combine with my web development skills to create user-friendly digital tools. I am continuously learning new technologies and expanding my skills to stay at the forefront of the tech world."),
        ],
    },
    Section {
        id: SectionId::Skills,
        blocks: &[Block::Heading("Skills & Expertise"), Block::Bullets(SKILLS)],
    },
    Section {
        id: SectionId::Experience,
        blocks: &[Block::Heading("Experience"), Block::Bullets(EXPERIENCE)],
    },
    Section {
        id: SectionId::Education,
        blocks: &[Block::Heading("Education"), Block::Bullets(EDUCATION)],
    },
    Section {
        id: SectionId::Contact,
        blocks: &[
            Block::Heading("Contact Me"),
            Block::Paragraph("Feel free to reach out to me for collaboration or job opportunities."),
            Block::Form(CONTACT_FORM),
        ],
    },
];

/// The portfolio page.
pub const PAGE: Page = Page {
    meta: PAGE_META,
    brand: BRAND,
    sections: SECTIONS,
    footer: FOOTER,
};

// ============================================================================
// TESTS
// ============================================================================
