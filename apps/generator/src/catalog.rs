//! Static reference tables consumed by the synthesizers.
//!
//! Loaded once per run as an explicit read-only `Catalog` value and passed by
//! reference into every synthesizer — never mutated, never global.

/// One category of the skill taxonomy. Skill names are unique across the
/// whole partition, so a profile can never pick the same name twice through
/// different categories.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct University {
    pub name: &'static str,
    pub location: &'static str,
    pub ranking: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct CertificationEntry {
    pub name: &'static str,
    pub provider: &'static str,
}

/// A spoken language and the levels it is plausibly reported at.
#[derive(Debug, Clone, Copy)]
pub struct LanguagePool {
    pub name: &'static str,
    pub levels: &'static [&'static str],
}

/// All reference tables bundled together.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pub skill_taxonomy: &'static [SkillCategory],
    pub universities: &'static [University],
    pub degrees: &'static [&'static str],
    pub certifications: &'static [CertificationEntry],
    pub soft_skills: &'static [&'static str],
    /// First entry is English — every profile speaks it.
    pub languages: &'static [LanguagePool],
    /// Project names dropped into CV prose for flavour only.
    pub cv_project_types: &'static [&'static str],
    pub project_types: &'static [&'static str],
    pub clients: &'static [&'static str],
    pub roles: &'static [&'static str],
    /// Requirement pool used when no profiles were supplied to the
    /// project synthesizer.
    pub fallback_skills: &'static [&'static str],
    pub rfp_types: &'static [&'static str],
    pub rfp_clients: &'static [&'static str],
    pub budget_ranges: &'static [&'static str],
    pub rfp_skills: &'static [&'static str],
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            skill_taxonomy: SKILL_TAXONOMY,
            universities: UNIVERSITIES,
            degrees: DEGREES,
            certifications: CERTIFICATIONS,
            soft_skills: SOFT_SKILLS,
            languages: LANGUAGES,
            cv_project_types: CV_PROJECT_TYPES,
            project_types: PROJECT_TYPES,
            clients: CLIENTS,
            roles: ROLES,
            fallback_skills: FALLBACK_SKILLS,
            rfp_types: RFP_TYPES,
            rfp_clients: RFP_CLIENTS,
            budget_ranges: BUDGET_RANGES,
            rfp_skills: RFP_SKILLS,
        }
    }
}

const SKILL_TAXONOMY: &[SkillCategory] = &[
    SkillCategory {
        name: "Backend",
        skills: &[
            "Python",
            "Java",
            "C++",
            "Go",
            "Rust",
            "Node.js",
            "Django",
            "Spring Boot",
        ],
    },
    SkillCategory {
        name: "Frontend",
        skills: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Vue.js",
            "Angular",
            "Next.js",
        ],
    },
    SkillCategory {
        name: "Data/AI",
        skills: &[
            "Machine Learning",
            "Data Science",
            "PostgreSQL",
            "MongoDB",
            "Redis",
            "PyTorch",
        ],
    },
    SkillCategory {
        name: "DevOps",
        skills: &[
            "AWS",
            "Docker",
            "Kubernetes",
            "Jenkins",
            "Git",
            "Terraform",
            "Azure",
        ],
    },
];

const UNIVERSITIES: &[University] = &[
    University {
        name: "Massachusetts Institute of Technology (MIT)",
        location: "Cambridge, MA",
        ranking: 1,
    },
    University {
        name: "Stanford University",
        location: "Stanford, CA",
        ranking: 2,
    },
    University {
        name: "University of California, Berkeley",
        location: "Berkeley, CA",
        ranking: 4,
    },
    University {
        name: "University of Oxford",
        location: "Oxford, UK",
        ranking: 5,
    },
    University {
        name: "ETH Zurich",
        location: "Zurich, CH",
        ranking: 9,
    },
    University {
        name: "Georgia Institute of Technology",
        location: "Atlanta, GA",
        ranking: 15,
    },
    University {
        name: "Warsaw University of Technology",
        location: "Warsaw, PL",
        ranking: 50,
    },
    University {
        name: "Technical University of Munich",
        location: "Munich, DE",
        ranking: 20,
    },
];

const DEGREES: &[&str] = &[
    "B.Sc. in Computer Science",
    "M.Sc. in Software Engineering",
    "PhD in Artificial Intelligence",
];

const CERTIFICATIONS: &[CertificationEntry] = &[
    CertificationEntry {
        name: "AWS Certified Solutions Architect",
        provider: "Amazon",
    },
    CertificationEntry {
        name: "Google Cloud Professional",
        provider: "Google",
    },
    CertificationEntry {
        name: "Certified Kubernetes Administrator",
        provider: "Linux Foundation",
    },
    CertificationEntry {
        name: "Microsoft Azure Developer",
        provider: "Microsoft",
    },
    CertificationEntry {
        name: "Scrum Master Certification",
        provider: "Scrum.org",
    },
    CertificationEntry {
        name: "Docker Certified Associate",
        provider: "Docker",
    },
];

const SOFT_SKILLS: &[&str] = &[
    "Team Leadership",
    "Agile Methodology",
    "Scrum",
    "Mentoring",
    "Public Speaking",
    "Problem Solving",
    "Strategic Planning",
    "Cross-functional Communication",
    "Conflict Resolution",
    "Adaptability",
];

const LANGUAGES: &[LanguagePool] = &[
    LanguagePool {
        name: "English",
        levels: &["C1", "C2", "Native"],
    },
    LanguagePool {
        name: "Spanish",
        levels: &["B1", "B2", "C1"],
    },
    LanguagePool {
        name: "German",
        levels: &["B1", "B2"],
    },
    LanguagePool {
        name: "French",
        levels: &["B1", "B2"],
    },
    LanguagePool {
        name: "Polish",
        levels: &["Native", "C2"],
    },
];

const CV_PROJECT_TYPES: &[&str] = &[
    "E-commerce Platform",
    "Data Analytics Dashboard",
    "Mobile App",
    "API Gateway",
    "Machine Learning Pipeline",
    "Web Application",
    "Microservices Architecture",
    "Real-time Chat System",
    "Content Management System",
    "Payment Processing System",
];

const PROJECT_TYPES: &[&str] = &[
    "E-commerce Platform",
    "Data Analytics Dashboard",
    "Mobile App Development",
    "API Gateway Implementation",
    "Machine Learning Pipeline",
    "Web Application",
    "Microservices Architecture",
    "Real-time Chat System",
    "Content Management System",
    "Payment Processing System",
    "DevOps Automation",
    "Cloud Migration",
    "Security Audit System",
    "Inventory Management",
    "Customer Portal",
];

const CLIENTS: &[&str] = &[
    "TechCorp",
    "DataSystems Inc",
    "CloudNative Solutions",
    "FinTech Innovations",
    "HealthTech Partners",
    "RetailMax",
    "LogisticsPro",
    "EduTech Solutions",
    "MediaStream",
    "GreenEnergy Co",
    "SmartCity Initiative",
    "BioTech Labs",
];

const ROLES: &[&str] = &[
    "Backend Dev",
    "Frontend Dev",
    "Fullstack Dev",
    "Tech Lead",
    "Architect",
    "DevOps Eng",
];

const FALLBACK_SKILLS: &[&str] = &["Python", "Java", "JavaScript", "React", "AWS", "Docker"];

const RFP_TYPES: &[&str] = &[
    "Enterprise Web Application",
    "Mobile App Development",
    "Data Analytics Platform",
    "Cloud Migration Project",
    "E-commerce Modernization",
    "API Integration Platform",
];

const RFP_CLIENTS: &[&str] = &[
    "Global Finance Corp",
    "MedTech Industries",
    "Retail Solutions Ltd",
    "Manufacturing Plus",
];

const BUDGET_RANGES: &[&str] = &[
    "$100K - $250K",
    "$250K - $500K",
    "$500K - $1M",
    "$1M - $2M",
];

const RFP_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "React",
    "Angular",
    "Node.js",
    "AWS",
    "Docker",
    "Kubernetes",
];
