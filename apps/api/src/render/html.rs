use askama::Template;

use crate::errors::AppError;
use crate::models::preferences::Preferences;
use crate::models::resume::ResumeDocument;

/// Trimmed value, or the placeholder when the value is blank.
fn or_placeholder<'a>(value: &'a str, placeholder: &'static str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

pub struct ExperienceView<'a> {
    pub role: &'a str,
    pub duration: &'a str,
    pub company: &'a str,
    pub desc: &'a str,
}

pub struct ProjectView<'a> {
    pub title: &'a str,
    /// First non-empty of live URL and GitHub URL.
    pub link: &'a str,
    pub desc: &'a str,
    pub tech_stack: Vec<&'a str>,
}

pub struct EducationView<'a> {
    pub degree: &'a str,
    pub year: &'a str,
    pub school: &'a str,
}

/// Preview fragment: header, summary, experience, projects, education,
/// skills. Values are placeholder-filled here; escaping is left to askama.
#[derive(Template)]
#[template(path = "resume.html")]
pub struct ResumePreview<'a> {
    pub template_name: &'static str,
    pub accent: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub location: &'a str,
    pub links: String,
    pub summary: &'a str,
    pub experience: Vec<ExperienceView<'a>>,
    pub projects: Vec<ProjectView<'a>>,
    pub education: Vec<EducationView<'a>>,
    pub skills: String,
}

impl<'a> ResumePreview<'a> {
    pub fn new(doc: &'a ResumeDocument, prefs: &'a Preferences) -> Self {
        let p = &doc.personal;

        let mut links = Vec::new();
        if !p.github.trim().is_empty() {
            links.push(format!("GitHub: {}", p.github.trim()));
        }
        if !p.linkedin.trim().is_empty() {
            links.push(format!("LinkedIn: {}", p.linkedin.trim()));
        }

        let skills: Vec<&str> = doc.skills.iter().map(String::as_str).collect();
        let skills = if skills.is_empty() {
            "Technical expertise listed here.".to_string()
        } else {
            skills.join(" • ")
        };

        Self {
            template_name: prefs.template.as_str(),
            accent: &prefs.accent,
            name: or_placeholder(&p.name, "Your Name"),
            email: or_placeholder(&p.email, "email@example.com"),
            phone: or_placeholder(&p.phone, "+91 00000 00000"),
            location: or_placeholder(&p.location, "Location"),
            links: links.join(" | "),
            summary: or_placeholder(
                &p.summary,
                "Professionally engineered summary of your expertise and career goals.",
            ),
            experience: doc
                .experience
                .iter()
                .map(|e| ExperienceView {
                    role: or_placeholder(&e.role, "Role"),
                    duration: or_placeholder(&e.duration, "2022 - Present"),
                    company: or_placeholder(&e.company, "Company"),
                    desc: or_placeholder(&e.desc, "Description of your responsibilities."),
                })
                .collect(),
            projects: doc
                .projects
                .iter()
                .map(|pr| ProjectView {
                    title: or_placeholder(&pr.title, "Project Title"),
                    link: [pr.live_url.trim(), pr.github_url.trim()]
                        .into_iter()
                        .find(|l| !l.is_empty())
                        .unwrap_or_default(),
                    desc: or_placeholder(&pr.desc, "Description of your project work."),
                    tech_stack: pr.tech_stack.iter().map(String::as_str).collect(),
                })
                .collect(),
            education: doc
                .education
                .iter()
                .map(|e| EducationView {
                    degree: or_placeholder(&e.degree, "Degree"),
                    year: or_placeholder(&e.year, "2020"),
                    school: or_placeholder(&e.school, "University"),
                })
                .collect(),
            skills,
        }
    }
}

pub fn render_resume_html(doc: &ResumeDocument, prefs: &Preferences) -> Result<String, AppError> {
    ResumePreview::new(doc, prefs)
        .render()
        .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("preview template")))
}
