//! Built-in keyword tables.

use super::{CertificationKeywords, DegreeLabelRule, SectionHeaders};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn section_headers() -> SectionHeaders {
    SectionHeaders {
        experience: strings(&["experience", "work experience", "professional experience"]),
        projects: strings(&["projects", "academic projects"]),
        awards: strings(&[
            "activities & achievements",
            "activities and achievements",
            "achievements",
            "awards",
            "honors",
        ]),
        publications: strings(&["publications", "books", "research"]),
        certifications: strings(&[
            "certifications",
            "certification",
            "certificate",
            "certificates",
            "courses",
            "professional courses",
            "professional certifications",
            "training & certifications",
            "courses & certifications",
            "training",
        ]),
    }
}

pub(super) fn award_positive_words() -> Vec<String> {
    strings(&[
        "winner", "rank", "award", "prize", "honor", "honours", "first", "second", "third",
    ])
}

pub(super) fn activity_negative_words() -> Vec<String> {
    strings(&[
        "volunteer",
        "member",
        "participant",
        "organizer",
        "organised",
        "organized",
        "lead",
        "leadership",
        "representative",
    ])
}

pub(super) fn degree_keywords() -> Vec<String> {
    strings(&[
        "bachelor", "master", "bca", "mca", "b.tech", "m.tech", "msc", "m.sc", "bsc", "b.sc",
        "mba", "diploma", "phd", "class 10", "class 12", "ssc", "hsc",
    ])
}

pub(super) fn education_stop_headers() -> Vec<String> {
    strings(&[
        "experience",
        "projects",
        "skills",
        "awards",
        "activities",
        "personal",
        "publications",
        "hobbies",
    ])
}

pub(super) fn degree_labels() -> Vec<DegreeLabelRule> {
    vec![
        DegreeLabelRule::new("MSc", &["msc-cs", "msc cs"]),
        DegreeLabelRule::new("MCA", &["m.c.a", "mca"]),
        DegreeLabelRule::new("BCA", &["b.c.a", "bca"]),
        DegreeLabelRule::new("12th", &["h.s.c", "hsc", "class 12"]),
        DegreeLabelRule::new("10th", &["s.s.c", "ssc", "class 10"]),
    ]
}

pub(super) fn skills() -> Vec<String> {
    strings(&[
        "python",
        "java",
        "javascript",
        "typescript",
        "kotlin",
        "swift",
        "php",
        "rust",
        "sql",
        "mysql",
        "postgresql",
        "mongodb",
        "oracle",
        "html",
        "css",
        "bootstrap",
        "react",
        "angular",
        "node.js",
        "express",
        "django",
        "flask",
        "spring boot",
        "rest api",
        "flutter",
        "android",
        "machine learning",
        "deep learning",
        "nlp",
        "computer vision",
        "data analysis",
        "data science",
        "tensorflow",
        "pytorch",
        "pandas",
        "numpy",
        "scikit-learn",
        "matlab",
        "hadoop",
        "spark",
        "power bi",
        "tableau",
        "excel",
        "aws",
        "azure",
        "gcp",
        "docker",
        "kubernetes",
        "git",
        "github",
        "linux",
        "jira",
        "figma",
        "selenium",
    ])
}

pub(super) fn certifications() -> CertificationKeywords {
    CertificationKeywords {
        start_headers: strings(&[
            "certification",
            "certifications",
            "certification & trainings",
            "certifications & trainings",
            "training",
        ]),
        stop_headers: strings(&[
            "activities",
            "competitions",
            "achievements",
            "projects",
            "experience",
            "personal details",
            "date of birth",
            "gender",
            "address",
            "hobbies",
            "nationality",
            "education",
            "skills",
            "publications",
        ]),
        personal_keywords: strings(&[
            "email",
            "@",
            "phone",
            "mobile",
            "date of birth",
            "dob",
            "gender",
            "address",
            "nationality",
        ]),
        activity_keywords: strings(&[
            "competition",
            "winner",
            "volunteer",
            "participant",
            "hackathon",
        ]),
        issuer_hints: strings(&[
            "ibm",
            "google",
            "microsoft",
            "amazon",
            "aws",
            "coursera",
            "udemy",
            "edx",
            "simplilearn",
            "nasscom",
            "tcs",
            "ion",
            "infosys",
            "oracle",
            "cisco",
            "meta",
            "skillup",
            "smartbridge",
            "accenture",
        ]),
        title_hints: strings(&[
            "certification",
            "certified",
            "course",
            "training",
            "cloud",
            "django",
            "analytics",
            "computing",
        ]),
    }
}
