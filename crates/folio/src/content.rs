//! Static portfolio content.

/// Name shown in the hero and footer.
pub const NAME: &str = "Swaraj Shahaji Waykar";

/// Small badge above the name.
pub const BADGE: &str = "Portfolio • 2025";

/// An external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

pub const GITHUB: Link = Link {
    label: "GitHub",
    url: "https://github.com/Swarajwaykar?tab=repositories",
};

pub const LINKEDIN: Link = Link {
    label: "LinkedIn",
    url: "https://www.linkedin.com/in/swaraj-waykar-a56290258/",
};

pub const LEETCODE: Link = Link {
    label: "LeetCode",
    url: "https://leetcode.com/u/8x6q0DDW2A/",
};

/// Sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    About,
    Skills,
    Education,
    Projects,
    Experience,
    Leadership,
    Achievements,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::About,
        SectionId::Skills,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Leadership,
        SectionId::Achievements,
        SectionId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionId::About => "About Me",
            SectionId::Skills => "Skills",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Experience => "Experience",
            SectionId::Leadership => "Leadership",
            SectionId::Achievements => "Achievements & Certifications",
            SectionId::Contact => "Contact",
        }
    }

    pub fn subtitle(self) -> Option<&'static str> {
        match self {
            SectionId::About => Some(
                "Motivated Computer Science student with hands-on experience in building scalable \
                 applications. Proficient in Java, Spring Boot, Cloud, and AI. Passionate about \
                 solving real-world problems through technology, projects, and hackathons.",
            ),
            SectionId::Education => Some("A concise timeline of my academic journey."),
            _ => None,
        }
    }
}

pub const ABOUT: &str = "I enjoy crafting reliable, high-performance systems and delightful user \
    experiences. My focus spans from backend architecture to interactive frontends with modern tooling.";

pub const ABOUT_TAGS: &[&str] = &["Java", "Spring Boot", "MySQL", "REST APIs", "Cloud", "AI"];

pub struct SkillGroup {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        heading: "Programming",
        items: &["Java", "SQL"],
    },
    SkillGroup {
        heading: "Frameworks & DB",
        items: &["Spring Boot", "React", "MySQL"],
    },
    SkillGroup {
        heading: "Concepts",
        items: &[
            "OOP",
            "DSA",
            "REST APIs",
            "OS",
            "Cloud Fundamentals",
            "Networking",
            "SDLC",
        ],
    },
    SkillGroup {
        heading: "Tools",
        items: &["Git", "GitHub", "CI/CD (GitHub Actions)", "Linux"],
    },
    SkillGroup {
        heading: "Soft Skills",
        items: &["Communication", "Problem Solving", "Team Collaboration"],
    },
];

pub struct Education {
    pub period: &'static str,
    pub institution: &'static str,
    pub detail: &'static str,
}

pub const EDUCATION: &[Education] = &[
    Education {
        period: "2022–2026",
        institution: "JSPM’s Rajarshi Shahu College of Engineering, Pune",
        detail: "CGPA: 9.12/10",
    },
    Education {
        period: "2022",
        institution: "Takshshila Junior College, Jamkhed",
        detail: "79.33%",
    },
    Education {
        period: "2020",
        institution: "L.N. Hoshing Vidyalaya, Jamkhed",
        detail: "97.80%",
    },
];

pub struct Project {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    pub tags: &'static [&'static str],
    pub demo: Option<&'static str>,
    pub repo: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Companion-Way: AI Travel Buddy",
        bullets: &[
            "Developed an AI-powered assistant with real-time facial emotion recognition for solo travelers.",
            "Delivered emotion-aware responses by training machine learning models on real-time facial data.",
            "Designed backend microservices using REST APIs for scalability.",
            "Enhanced system responsiveness and reliability through emotion-aware conversation flows, \
             improving user engagement in prototype testing.",
        ],
        tags: &["AI", "Emotion Recognition", "Microservices", "Python"],
        demo: None,
        repo: Some("https://github.com/Swarajwaykar/AI-Travel-Buddy-App"),
    },
    Project {
        title: "ServiSwift",
        bullets: &[
            "Developed a full-stack platform with Spring Boot and React to connect users with local providers.",
            "Integrated data from APIs and databases, ensuring consistency and scalability across services.",
            "Implemented JWT-based authentication; containerized services with Docker.",
            "Set up CI/CD pipelines using GitHub Actions for automated testing and deployment.",
        ],
        tags: &["Spring Boot", "React", "Docker", "CI/CD"],
        demo: None,
        repo: Some("https://github.com/Swarajwaykar/ServiSwift"),
    },
];

pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub summary: Option<&'static str>,
    pub tags: &'static [&'static str],
}

pub const EXPERIENCE: &[Role] = &[
    Role {
        title: "Technology Intern, Deloitte",
        period: "May 2025",
        summary: Some(
            "Requirement analysis, proposing innovative solutions, and exposure to global consulting workflows.",
        ),
        tags: &["Analysis", "Solutioning", "Teamwork"],
    },
    Role {
        title: "AI/ML Virtual Intern, AICTE & EduSkills",
        period: "Jan–Mar 2024",
        summary: Some(
            "Built ML models for classification tasks and strengthened analytics and experimentation skills.",
        ),
        tags: &["ML", "Python", "Analytics"],
    },
];

pub const LEADERSHIP: &[Role] = &[
    Role {
        title: "Technical Event Head – Competitive Coding Club",
        period: "Oct 2023–Present",
        summary: None,
        tags: &[],
    },
    Role {
        title: "Student Coordinator – Dept. of Engineering Sciences",
        period: "Jan–Jul 2023",
        summary: None,
        tags: &[],
    },
];

pub const HIGHLIGHTS: &[&str] = &[
    "Runner-up — Apptware 48-Hour Hackathon",
    "Best Performer — Avinya 24-Hour Hackathon",
    "Organizer — CodWolf Event",
];

pub const CERTIFICATIONS: &[&str] = &[
    "Cisco Networking (2025)",
    "Oracle Cloud Infrastructure Foundation (2025)",
    "Java Programming (IIT Bombay, 2024)",
];

/// Photo captions from the achievements gallery.
pub const GALLERY: &[&str] = &[
    "Apptware 48-hour Hackathon — Runner-up",
    "Avinya 24-hour Hackathon — Best Performer",
    "CodWolf Event — Organizer As Technical Event Head",
];

pub const LOCATION: &str = "Pune, India";
pub const EMAIL: &str = "swarajwaykar8@gmail.com";
pub const PHONE: &str = "+91 9665603711";
