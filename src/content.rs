//! Static site content: profile, experience, education, projects, skills
//! and social links.

pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub footer: &'static str,
}

pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub dates: &'static str,
    pub bullets: &'static [&'static str],
}

pub struct Education {
    pub school: &'static str,
    pub program: &'static str,
    pub notes: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub struct Social {
    pub name: &'static str,
    pub link: &'static str,
    pub icon: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "LUCAS_HERBST",
    tagline: "[ COMPUTER_SCIENCE.STUDENT @ INDIANA_UNIVERSITY ]",
    footer: "> LUCAS_HERBST_\u{00A9} 2025",
};

pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_INTRO: &str =
    "I'm always interested in hearing about new opportunities and projects. Feel free to reach out!";

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Allied Solutions",
        role: "Software Engineer Intern",
        dates: "May 2025 \u{2014} August 2025",
        bullets: &[
            "Developed full-stack features using C#, JavaScript, React, and RESTful APIs, building interactive forms, integrating backend services, and delivering features used by hundreds of users daily.",
            "Refactored and optimized existing services by working closely with senior engineers to reduce code complexity by ~20% and improve long-term maintainability.",
            "Designed and executed 100+ unit tests for both legacy and new services, proactively identifying edge cases and helping the team catch regressions early in the development cycle.",
            "Communicated and validated API behavior and data flows using Postman, Cursor, and SQL Server Management Studio (SSMS), and partnered with designers via Figma to ensure accurate front-end implementation.",
        ],
    },
    Experience {
        company: "Data Annotation",
        role: "Large Language Model Trainer",
        dates: "March 2024 \u{2014} June 2024",
        bullets: &[
            "Refined AI-generated code across 100+ coding tasks, improving adherence to best practices and code quality.",
            "Analyzed AI performance on diverse programming challenges, identifying inefficiencies and recommending targeted optimizations.",
            "Performed rigorous quality assurance checks to enhance model accuracy and overall output reliability.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[Education {
    school: "Indiana University",
    program: "Computer Science student",
    notes: &[],
}];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Book Recommender",
        description: "A machine learning system that recommends books based on user ratings and preferred genres.",
        link: "https://github.com/luke-herbst/book-recommender",
    },
    Project {
        title: "Battle Boids",
        description: "Competitive flocking simulation exploring emergent behavior and decentralized agent decision-making.",
        link: "https://github.com/luke-herbst/battle-boids",
    },
    Project {
        title: "Delivery App",
        description: "Android food delivery app with authentication, ordering, and real-time order tracking.",
        link: "https://github.com/luke-herbst/DeliveryApp",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        items: &["Python", "Java", "Kotlin", "C", "C#", "JavaScript", "SQL"],
    },
    SkillGroup {
        category: "Frameworks & Tools",
        items: &[
            "React",
            "Android Studio",
            "Firebase",
            "Node.js",
            "REST APIs",
            "Git",
            "Postman",
        ],
    },
    SkillGroup {
        category: "Concepts",
        items: &[
            "Object-Oriented Design",
            "Unit Testing & Test-Driven Development (TDD)",
            "Data Structures & Algorithms",
            "Machine Learning & Neural Networks",
            "Computer Vision",
            "Software Design Patterns",
            "Agile & Scrum Methodologies",
            "RESTful API Design",
        ],
    },
];

pub const SOCIALS: &[Social] = &[
    Social {
        name: "GitHub",
        link: "https://github.com/luke-herbst/",
        icon: "\u{26A1}",
    },
    Social {
        name: "LinkedIn",
        link: "https://www.linkedin.com/in/lucas-herbst-a571b5251",
        icon: "\u{1F4BC}",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_absolute_https() {
        let links = PROJECTS
            .iter()
            .map(|p| p.link)
            .chain(SOCIALS.iter().map(|s| s.link));
        for link in links {
            let parsed = url::Url::parse(link).expect("valid url");
            assert_eq!(parsed.scheme(), "https", "{}", link);
        }
    }

    #[test]
    fn every_section_has_entries() {
        assert!(!EXPERIENCES.is_empty());
        assert!(!EDUCATION.is_empty());
        assert!(!PROJECTS.is_empty());
        assert!(SKILLS.iter().all(|g| !g.items.is_empty()));
        assert!(!SOCIALS.is_empty());
    }

    #[test]
    fn contact_copy_invites_opportunities() {
        assert_eq!(CONTACT_HEADING, "Get In Touch");
        assert!(CONTACT_INTRO.starts_with("I'm always interested in hearing about new opportunities"));
        assert!(CONTACT_INTRO.ends_with("Feel free to reach out!"));
    }

    #[test]
    fn education_matches_tagline() {
        for edu in EDUCATION {
            let school = edu.school.to_uppercase().replace(' ', "_");
            assert!(PROFILE.tagline.contains(&school), "{}", edu.school);
        }
    }
}
