//! Form field paths. A dotted path such as `personal.email` or
//! `experience.0.desc` is parsed once into a `FieldPath` and then applied
//! without re-parsing.

use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::resume::{split_comma_list, ListKind, ResumeDocument, SkillCategory};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Summary,
    Github,
    Linkedin,
}

/// Flat fields addressed without a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelField {
    /// Comma-separated bulk entry; replaces the technical skills.
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Role,
    Duration,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    School,
    Degree,
    Year,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectField {
    Title,
    Desc,
    /// Comma-separated.
    TechStack,
    LiveUrl,
    GithubUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPath {
    Personal(PersonalField),
    TopLevel(TopLevelField),
    Experience(usize, ExperienceField),
    Education(usize, EducationField),
    Project(usize, ProjectField),
}

impl PersonalField {
    const ALL: [(PersonalField, &'static str); 7] = [
        (PersonalField::Name, "name"),
        (PersonalField::Email, "email"),
        (PersonalField::Phone, "phone"),
        (PersonalField::Location, "location"),
        (PersonalField::Summary, "summary"),
        (PersonalField::Github, "github"),
        (PersonalField::Linkedin, "linkedin"),
    ];
}

impl ExperienceField {
    const ALL: [(ExperienceField, &'static str); 4] = [
        (ExperienceField::Company, "company"),
        (ExperienceField::Role, "role"),
        (ExperienceField::Duration, "duration"),
        (ExperienceField::Desc, "desc"),
    ];
}

impl EducationField {
    const ALL: [(EducationField, &'static str); 3] = [
        (EducationField::School, "school"),
        (EducationField::Degree, "degree"),
        (EducationField::Year, "year"),
    ];
}

impl ProjectField {
    const ALL: [(ProjectField, &'static str); 5] = [
        (ProjectField::Title, "title"),
        (ProjectField::Desc, "desc"),
        (ProjectField::TechStack, "techStack"),
        (ProjectField::LiveUrl, "liveUrl"),
        (ProjectField::GithubUrl, "githubUrl"),
    ];
}

fn lookup<T: Copy + PartialEq>(table: &[(T, &'static str)], name: &str) -> Option<T> {
    table.iter().find(|(_, n)| *n == name).map(|(f, _)| *f)
}

fn name_of<T: Copy + PartialEq>(table: &[(T, &'static str)], field: T) -> &'static str {
    table
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, n)| *n)
        .unwrap_or_default()
}

impl FromStr for FieldPath {
    type Err = AppError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unknown = || AppError::Validation(format!("Unknown field path '{raw}'"));
        let parts: Vec<&str> = raw.split('.').collect();

        match parts.as_slice() {
            ["skills"] => Ok(FieldPath::TopLevel(TopLevelField::Skills)),
            ["personal", field] => lookup(&PersonalField::ALL, field)
                .map(FieldPath::Personal)
                .ok_or_else(unknown),
            [list, index, field] => {
                let kind = ListKind::parse(list).ok_or_else(unknown)?;
                let index: usize = index.parse().map_err(|_| unknown())?;
                let path = match kind {
                    ListKind::Experience => lookup(&ExperienceField::ALL, field)
                        .map(|f| FieldPath::Experience(index, f)),
                    ListKind::Education => lookup(&EducationField::ALL, field)
                        .map(|f| FieldPath::Education(index, f)),
                    ListKind::Projects => {
                        lookup(&ProjectField::ALL, field).map(|f| FieldPath::Project(index, f))
                    }
                };
                path.ok_or_else(unknown)
            }
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Personal(field) => {
                write!(f, "personal.{}", name_of(&PersonalField::ALL, *field))
            }
            FieldPath::TopLevel(TopLevelField::Skills) => write!(f, "skills"),
            FieldPath::Experience(i, field) => {
                write!(f, "experience.{i}.{}", name_of(&ExperienceField::ALL, *field))
            }
            FieldPath::Education(i, field) => {
                write!(f, "education.{i}.{}", name_of(&EducationField::ALL, *field))
            }
            FieldPath::Project(i, field) => {
                write!(f, "projects.{i}.{}", name_of(&ProjectField::ALL, *field))
            }
        }
    }
}

impl FieldPath {
    /// Writes `value` into the document. Fails with `NotFound` when the path
    /// addresses an entry that does not exist; the document is then unchanged.
    pub fn apply(&self, doc: &mut ResumeDocument, value: &str) -> Result<(), AppError> {
        let missing = |kind: ListKind, index: usize| {
            AppError::NotFound(format!("No {} entry at index {index}", kind.as_str()))
        };

        match *self {
            FieldPath::Personal(field) => {
                let p = &mut doc.personal;
                let slot = match field {
                    PersonalField::Name => &mut p.name,
                    PersonalField::Email => &mut p.email,
                    PersonalField::Phone => &mut p.phone,
                    PersonalField::Location => &mut p.location,
                    PersonalField::Summary => &mut p.summary,
                    PersonalField::Github => &mut p.github,
                    PersonalField::Linkedin => &mut p.linkedin,
                };
                *slot = value.to_string();
            }
            FieldPath::TopLevel(TopLevelField::Skills) => {
                doc.skills
                    .replace(SkillCategory::Technical, split_comma_list(value));
            }
            FieldPath::Experience(index, field) => {
                let entry = doc
                    .experience
                    .get_mut(index)
                    .ok_or_else(|| missing(ListKind::Experience, index))?;
                let slot = match field {
                    ExperienceField::Company => &mut entry.company,
                    ExperienceField::Role => &mut entry.role,
                    ExperienceField::Duration => &mut entry.duration,
                    ExperienceField::Desc => &mut entry.desc,
                };
                *slot = value.to_string();
            }
            FieldPath::Education(index, field) => {
                let entry = doc
                    .education
                    .get_mut(index)
                    .ok_or_else(|| missing(ListKind::Education, index))?;
                let slot = match field {
                    EducationField::School => &mut entry.school,
                    EducationField::Degree => &mut entry.degree,
                    EducationField::Year => &mut entry.year,
                };
                *slot = value.to_string();
            }
            FieldPath::Project(index, field) => {
                let entry = doc
                    .projects
                    .get_mut(index)
                    .ok_or_else(|| missing(ListKind::Projects, index))?;
                match field {
                    ProjectField::Title => entry.title = value.to_string(),
                    ProjectField::Desc => entry.desc = value.to_string(),
                    ProjectField::TechStack => entry.tech_stack = split_comma_list(value),
                    ProjectField::LiveUrl => entry.live_url = value.to_string(),
                    ProjectField::GithubUrl => entry.github_url = value.to_string(),
                }
            }
        }
        Ok(())
    }
}
