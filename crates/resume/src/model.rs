use serde::{Deserialize, Serialize};

/// Everything the site displays, as read from `resume_data.json`.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Skills,
    pub projects: Vec<Project>,
    pub achievements: Vec<Achievement>,
    pub languages: Vec<Language>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub social_links: SocialLinks,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub linkedin: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub cgpa: Option<String>,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub percentage: Option<String>,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub description: Option<String>,
    pub responsibilities: Vec<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Skills {
    pub programming_languages: Vec<Skill>,
    pub frameworks_libraries: Vec<Skill>,
    pub tools_technologies: Vec<Skill>,
}

/// A rated skill. `level` is a percentage; values above 100 are shown as 100.
#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    #[serde(deserialize_with = "crate::de::level")]
    pub level: u32,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub date: String,
    pub description: Vec<String>,
    pub tech_stack: Vec<String>,
    pub features: Vec<String>,
    pub contributors: Vec<String>,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub github_link: Option<String>,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub demo_link: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Achievement {
    pub title: String,
    #[serde(deserialize_with = "crate::de::opt_text")]
    pub date: Option<String>,
    pub description: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Language {
    pub name: String,
    pub level: String,
}

pub struct SkillGroup<'a> {
    pub title: &'static str,
    pub skills: &'a [Skill],
}

impl Skill {
    pub fn percent(&self) -> u32 {
        self.level.min(100)
    }
}

impl Skills {
    /// Non-empty groups in display order.
    pub fn groups(&self) -> Vec<SkillGroup<'_>> {
        [
            ("Programming Languages", &self.programming_languages),
            ("Frameworks & Libraries", &self.frameworks_libraries),
            ("Tools & Technologies", &self.tools_technologies),
        ]
        .into_iter()
        .filter(|(_, skills)| !skills.is_empty())
        .map(|(title, skills)| SkillGroup {
            title,
            skills: skills.as_slice(),
        })
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.programming_languages.is_empty()
            && self.frameworks_libraries.is_empty()
            && self.tools_technologies.is_empty()
    }
}

impl ResumeData {
    pub fn featured_projects(&self, count: usize) -> &[Project] {
        &self.projects[..self.projects.len().min(count)]
    }
}
