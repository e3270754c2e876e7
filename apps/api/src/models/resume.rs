use serde::{Deserialize, Serialize};

/// The single resume being edited. Every field defaults to empty so a freshly
/// created entry never carries missing values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub duration: String,
    pub desc: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub desc: String,
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}

/// Skills grouped by category. Names are unique within a category
/// (case-sensitive) and keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillSet {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub tools: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    Experience,
    Education,
    Projects,
}

impl ListKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "experience" => Some(ListKind::Experience),
            "education" => Some(ListKind::Education),
            "projects" => Some(ListKind::Projects),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListKind::Experience => "experience",
            ListKind::Education => "education",
            ListKind::Projects => "projects",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Tools,
}

impl SkillCategory {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "technical" => Some(SkillCategory::Technical),
            "soft" => Some(SkillCategory::Soft),
            "tools" => Some(SkillCategory::Tools),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Tools => "tools",
        }
    }
}

impl SkillSet {
    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Technical => &self.technical,
            SkillCategory::Soft => &self.soft,
            SkillCategory::Tools => &self.tools,
        }
    }

    fn category_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Technical => &mut self.technical,
            SkillCategory::Soft => &mut self.soft,
            SkillCategory::Tools => &mut self.tools,
        }
    }

    /// Appends a trimmed skill name. Empty names and duplicates are ignored;
    /// returns whether the set changed.
    pub fn add(&mut self, category: SkillCategory, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let items = self.category_mut(category);
        if items.iter().any(|existing| existing == name) {
            return false;
        }
        items.push(name.to_string());
        true
    }

    /// Removes the skill at `index`, returning it if the index was in range.
    pub fn remove(&mut self, category: SkillCategory, index: usize) -> Option<String> {
        let items = self.category_mut(category);
        (index < items.len()).then(|| items.remove(index))
    }

    /// Replaces a whole category with the given names, keeping first
    /// occurrences only.
    pub fn replace(&mut self, category: SkillCategory, names: impl IntoIterator<Item = String>) {
        self.category_mut(category).clear();
        for name in names {
            self.add(category, &name);
        }
    }

    pub fn total(&self) -> usize {
        self.technical.len() + self.soft.len() + self.tools.len()
    }

    /// All skills, technical first, then soft, then tools.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.technical
            .iter()
            .chain(self.soft.iter())
            .chain(self.tools.iter())
    }
}

impl ResumeDocument {
    /// Appends an empty entry to the given list and returns its index.
    pub fn add_entry(&mut self, kind: ListKind) -> usize {
        match kind {
            ListKind::Experience => {
                self.experience.push(ExperienceEntry::default());
                self.experience.len() - 1
            }
            ListKind::Education => {
                self.education.push(EducationEntry::default());
                self.education.len() - 1
            }
            ListKind::Projects => {
                self.projects.push(ProjectEntry::default());
                self.projects.len() - 1
            }
        }
    }

    /// Removes the entry at `index`; returns false when out of range.
    pub fn remove_entry(&mut self, kind: ListKind, index: usize) -> bool {
        fn remove_at<T>(list: &mut Vec<T>, index: usize) -> bool {
            if index < list.len() {
                list.remove(index);
                true
            } else {
                false
            }
        }
        match kind {
            ListKind::Experience => remove_at(&mut self.experience, index),
            ListKind::Education => remove_at(&mut self.education, index),
            ListKind::Projects => remove_at(&mut self.projects, index),
        }
    }
}

/// Splits a comma-separated list, trimming and dropping empty items.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
