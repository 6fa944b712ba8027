//! Static site content and the filters that project it down for display.
//!
//! Every record here is declared once at compile time and never mutated.
//! Filtering always returns a subsequence of the source slice: identity and
//! relative order are preserved, and an empty result is a legal outcome
//! rather than an error.

/// Sentinel category matching every project.
pub const ALL_CATEGORY: &str = "All";

pub const OWNER_NAME: &str = "Vikash Kumar";
pub const OWNER_ROLE: &str = "Mechatronics Engineer";
pub const CONTACT_EMAIL: &str = "your.email@example.com";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";
pub const CONTACT_PHONE_TEL: &str = "tel:+1234567890";
pub const CONTACT_LOCATION: &str = "San Francisco, CA, USA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: Option<&'static str>,
    pub categories: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub github_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
}

pub static PROJECT_CATEGORIES: &[&str] = &[
    ALL_CATEGORY,
    "Robotics",
    "Software",
    "Embedded Systems",
    "Machine Learning",
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Autonomous Robotic Arm",
        description: "Advanced robotic arm with machine learning capabilities for precise object manipulation.",
        image: None,
        categories: &["Robotics", "Machine Learning"],
        technologies: &["Python", "ROS", "TensorFlow", "OpenCV"],
        github_link: Some("#"),
        live_link: Some("#"),
    },
    Project {
        id: 2,
        title: "Smart Home Automation System",
        description: "IoT-based home automation system with real-time monitoring and control.",
        image: None,
        categories: &["Embedded Systems", "Software"],
        technologies: &["Arduino", "Raspberry Pi", "MQTT", "React"],
        github_link: Some("#"),
        live_link: Some("#"),
    },
    Project {
        id: 3,
        title: "Gesture-Controlled Drone",
        description: "Drone controlled through hand gestures using computer vision.",
        image: None,
        categories: &["Robotics", "Machine Learning"],
        technologies: &["Python", "OpenCV", "Drone SDK"],
        github_link: Some("#"),
        live_link: Some("#"),
    },
    Project {
        id: 4,
        title: "Industrial IoT Monitoring Platform",
        description: "Comprehensive IoT solution for industrial equipment monitoring and predictive maintenance.",
        image: None,
        categories: &["Embedded Systems", "Software"],
        technologies: &["Node.js", "React", "Docker", "Kubernetes"],
        github_link: Some("#"),
        live_link: Some("#"),
    },
];

/// Category + free-text selection for the Projects page.
///
/// Any category string is accepted, including ones with zero matches. The
/// search term is compared case-insensitively as a substring of the title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    category: String,
    search: String,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
            search: String::new(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn matches(&self, project: &Project) -> bool {
        (self.category == ALL_CATEGORY || project.categories.contains(&self.category.as_str()))
            && project
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    pub fn visible<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub kind: EntryKind,
    pub title: &'static str,
    pub organization: &'static str,
    pub location: &'static str,
    pub date: &'static str,
    pub description: &'static [&'static str],
    pub technologies: &'static [&'static str],
}

pub static EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        kind: EntryKind::Work,
        title: "MES Developer",
        organization: "Western Refrigeration Pvt. Ltd",
        location: "Vapi, Gujrat",
        date: "Jan 2022 - Present",
        description: &[
            "Led development of advanced robotics systems for industrial automation",
            "Designed and implemented IoT-enabled smart manufacturing solutions",
            "Developed machine learning algorithms for predictive maintenance",
            "Collaborated with cross-functional teams to deliver cutting-edge technological innovations",
        ],
        technologies: &["C#", "Python", "HTML", "CSS", "React", "Javascript"],
    },
    ExperienceEntry {
        kind: EntryKind::Work,
        title: "Project Associate",
        organization: "Wipro",
        location: "Greater Noida, UP",
        date: "Jan 2022 - Aug 2022",
        description: &["Salesforce Developer"],
        technologies: &["Apex", "Lightning", "JAVA", "SSQL"],
    },
    ExperienceEntry {
        kind: EntryKind::Education,
        title: "Bachelor of Engineering in Mechanical Engineering",
        organization: "GL Bajaj Institute of Technology and Management",
        location: "Greater Noida, UP",
        date: "Sep 2018 - May 2022",
        description: &["Minor in Computer Science"],
        technologies: &["CAD", "Python", "Embedded Systems"],
    },
    ExperienceEntry {
        kind: EntryKind::Education,
        title: "12th Standard, CBSE",
        organization: "Raman Munjal Vidya Mandir",
        location: "Sidhrawali, Haryana",
        date: "April 2017 - June 2018",
        description: &["Passed with 66.7%"],
        technologies: &[],
    },
    ExperienceEntry {
        kind: EntryKind::Education,
        title: "10th Standard, CBSE",
        organization: "Raman Munjal Vidya Mandir",
        location: "Sidhrawali, Haryana",
        date: "April 2015 - June 2016",
        description: &["Passed with 85%"],
        technologies: &[],
    },
];

/// Kind selection for the Experience page. `None` is the "all" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExperienceFilter(pub Option<EntryKind>);

impl ExperienceFilter {
    pub const ALL: Self = Self(None);

    pub fn visible<'a>(&self, entries: &'a [ExperienceEntry]) -> Vec<&'a ExperienceEntry> {
        entries
            .iter()
            .filter(|e| self.0.map_or(true, |k| e.kind == k))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Programming Languages",
        icon: "💻",
        skills: &[
            Skill { name: "Python", level: 90, color: "bg-blue-500" },
            Skill { name: "JavaScript", level: 85, color: "bg-yellow-500" },
            Skill { name: "C++", level: 80, color: "bg-green-500" },
            Skill { name: "Java", level: 75, color: "bg-red-500" },
            Skill { name: "MATLAB", level: 70, color: "bg-purple-500" },
        ],
    },
    SkillCategory {
        name: "Robotics & Embedded Systems",
        icon: "🤖",
        skills: &[
            Skill { name: "ROS", level: 85, color: "bg-blue-600" },
            Skill { name: "Arduino", level: 80, color: "bg-green-600" },
            Skill { name: "Raspberry Pi", level: 75, color: "bg-red-600" },
            Skill { name: "Microcontroller Programming", level: 85, color: "bg-purple-600" },
        ],
    },
    SkillCategory {
        name: "Web & Software Development",
        icon: "🌐",
        skills: &[
            Skill { name: "React", level: 85, color: "bg-blue-500" },
            Skill { name: "Node.js", level: 80, color: "bg-green-500" },
            Skill { name: "Express.js", level: 75, color: "bg-gray-500" },
            Skill { name: "Django", level: 70, color: "bg-green-700" },
        ],
    },
    SkillCategory {
        name: "Hardware & CAD",
        icon: "⚙️",
        skills: &[
            Skill { name: "Autodesk Fusion 360", level: 85, color: "bg-blue-600" },
            Skill { name: "SolidWorks", level: 80, color: "bg-red-600" },
            Skill { name: "PCB Design", level: 75, color: "bg-green-600" },
            Skill { name: "3D Printing", level: 70, color: "bg-purple-600" },
        ],
    },
    SkillCategory {
        name: "Tools & Frameworks",
        icon: "🛠️",
        skills: &[
            Skill { name: "Git", level: 85, color: "bg-orange-500" },
            Skill { name: "Docker", level: 75, color: "bg-blue-500" },
            Skill { name: "Kubernetes", level: 70, color: "bg-blue-600" },
            Skill { name: "Jenkins", level: 65, color: "bg-red-500" },
        ],
    },
    SkillCategory {
        name: "Databases & Cloud",
        icon: "☁️",
        skills: &[
            Skill { name: "MongoDB", level: 80, color: "bg-green-500" },
            Skill { name: "PostgreSQL", level: 75, color: "bg-blue-600" },
            Skill { name: "AWS", level: 70, color: "bg-orange-500" },
            Skill { name: "Firebase", level: 75, color: "bg-yellow-500" },
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: u16,
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification { name: "Advanced Robotics", issuer: "MIT xPRO", year: 2022 },
    Certification { name: "Machine Learning", issuer: "Stanford Online", year: 2021 },
    Certification { name: "Cloud Computing", issuer: "AWS Certification", year: 2022 },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreCompetency {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static CORE_COMPETENCIES: &[CoreCompetency] = &[
    CoreCompetency {
        icon: "🤖",
        title: "Robotics",
        description: "Designing and developing advanced robotic systems",
    },
    CoreCompetency {
        icon: "💻",
        title: "Software",
        description: "Proficient in programming and software development",
    },
    CoreCompetency {
        icon: "⚙️",
        title: "Mechanical Design",
        description: "Creating innovative mechanical engineering solutions",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        name: "GitHub",
        icon: "devicon-github-plain",
        href: "https://github.com/buildwithvikash",
    },
    SocialLink {
        name: "LinkedIn",
        icon: "devicon-linkedin-plain",
        href: "https://www.linkedin.com/in/vikash-kumar-46888319b/",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_category_is_identity() {
        let filter = ProjectFilter::new();
        let visible = filter.visible(PROJECTS);

        assert_eq!(visible.len(), PROJECTS.len());
        for (shown, source) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(shown.id, source.id);
        }
    }

    #[test]
    fn test_category_filter_sound_and_complete() {
        for category in PROJECT_CATEGORIES.iter().filter(|c| **c != ALL_CATEGORY) {
            let mut filter = ProjectFilter::new();
            filter.set_category(*category);
            let visible = filter.visible(PROJECTS);

            // every shown project carries the category
            for project in &visible {
                assert!(project.categories.contains(category));
            }
            // every project carrying the category is shown
            let expected = PROJECTS
                .iter()
                .filter(|p| p.categories.contains(category))
                .count();
            assert_eq!(visible.len(), expected);
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Robotics");
        filter.set_search("o");

        let once = filter.visible(PROJECTS);
        let twice: Vec<_> = once.iter().copied().filter(|p| filter.matches(p)).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_and_search_intersect() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Robotics");
        filter.set_search("arm");

        let visible = filter.visible(PROJECTS);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Autonomous Robotic Arm");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut filter = ProjectFilter::new();
        filter.set_search("DRONE");

        let visible = filter.visible(PROJECTS);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Gesture-Controlled Drone");
    }

    #[test]
    fn test_unmatched_category_yields_empty() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Basket Weaving");

        assert!(filter.visible(PROJECTS).is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let mut filter = ProjectFilter::new();
        filter.set_category("Embedded Systems");

        let ids: Vec<u32> = filter.visible(PROJECTS).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_experience_all_sentinel() {
        let visible = ExperienceFilter::ALL.visible(EXPERIENCE);
        assert_eq!(visible.len(), EXPERIENCE.len());
    }

    #[test]
    fn test_experience_filter_by_kind() {
        let work = ExperienceFilter(Some(EntryKind::Work)).visible(EXPERIENCE);
        assert_eq!(work.len(), 2);
        assert!(work.iter().all(|e| e.kind == EntryKind::Work));

        let education = ExperienceFilter(Some(EntryKind::Education)).visible(EXPERIENCE);
        assert_eq!(education.len(), 3);
        assert!(education.iter().all(|e| e.kind == EntryKind::Education));
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            for skill in category.skills {
                assert!(skill.level <= 100, "{} level out of range", skill.name);
            }
        }
    }

    #[test]
    fn test_tel_href_matches_display_number() {
        let digits: String = CONTACT_PHONE.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(CONTACT_PHONE_TEL, format!("tel:+{digits}"));
    }

    #[test]
    fn test_project_ids_are_unique() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
