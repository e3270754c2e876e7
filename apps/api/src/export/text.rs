//! Plain-text rendering for clipboard and print. Section order is fixed:
//! header, summary, education, experience, projects, skills. Empty sections
//! are left out.

use crate::models::resume::{ResumeDocument, SkillCategory};

fn non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    values
        .into_iter()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
}

fn push_section(out: &mut String, title: &str, body: &[String]) {
    if body.is_empty() {
        return;
    }
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    for line in body {
        out.push_str(line);
        out.push('\n');
    }
}

fn header(doc: &ResumeDocument) -> Vec<String> {
    let p = &doc.personal;
    let mut lines = Vec::new();
    if !p.name.trim().is_empty() {
        lines.push(p.name.trim().to_string());
    }
    let contact = non_empty([p.email.as_str(), p.phone.as_str(), p.location.as_str()]);
    if !contact.is_empty() {
        lines.push(contact.join(" | "));
    }
    let mut links = Vec::new();
    if !p.github.trim().is_empty() {
        links.push(format!("GitHub: {}", p.github.trim()));
    }
    if !p.linkedin.trim().is_empty() {
        links.push(format!("LinkedIn: {}", p.linkedin.trim()));
    }
    if !links.is_empty() {
        lines.push(links.join(" | "));
    }
    lines
}

pub fn to_plain_text(doc: &ResumeDocument) -> String {
    let mut out = String::new();
    for line in header(doc) {
        out.push_str(&line);
        out.push('\n');
    }

    let summary = doc.personal.summary.trim();
    let summary_body = if summary.is_empty() {
        vec![]
    } else {
        vec![summary.to_string()]
    };
    push_section(&mut out, "SUMMARY", &summary_body);

    let education: Vec<String> = doc
        .education
        .iter()
        .map(|e| {
            let mut line = non_empty([e.degree.as_str(), e.school.as_str()]).join(", ");
            if !e.year.trim().is_empty() {
                line.push_str(&format!(" ({})", e.year.trim()));
            }
            line
        })
        .filter(|line| !line.trim().is_empty())
        .collect();
    push_section(&mut out, "EDUCATION", &education);

    let mut experience = Vec::new();
    for e in &doc.experience {
        let mut title = non_empty([e.role.as_str(), e.company.as_str()]).join(" at ");
        if !e.duration.trim().is_empty() {
            title.push_str(&format!(" ({})", e.duration.trim()));
        }
        let title = title.trim().to_string();
        if !title.is_empty() {
            experience.push(title);
        }
        if !e.desc.trim().is_empty() {
            experience.push(format!("- {}", e.desc.trim()));
        }
    }
    push_section(&mut out, "EXPERIENCE", &experience);

    let mut projects = Vec::new();
    for p in &doc.projects {
        if !p.title.trim().is_empty() {
            projects.push(p.title.trim().to_string());
        }
        if !p.desc.trim().is_empty() {
            projects.push(format!("- {}", p.desc.trim()));
        }
        if !p.tech_stack.is_empty() {
            projects.push(format!("  Tech: {}", p.tech_stack.join(", ")));
        }
        let mut links = Vec::new();
        if !p.live_url.trim().is_empty() {
            links.push(format!("Live: {}", p.live_url.trim()));
        }
        if !p.github_url.trim().is_empty() {
            links.push(format!("GitHub: {}", p.github_url.trim()));
        }
        if !links.is_empty() {
            projects.push(format!("  {}", links.join(" | ")));
        }
    }
    push_section(&mut out, "PROJECTS", &projects);

    let skills: Vec<String> = [
        ("Technical", SkillCategory::Technical),
        ("Soft Skills", SkillCategory::Soft),
        ("Tools", SkillCategory::Tools),
    ]
    .into_iter()
    .filter_map(|(label, category)| {
        let items = doc.skills.category(category);
        (!items.is_empty()).then(|| format!("{label}: {}", items.join(", ")))
    })
    .collect();
    push_section(&mut out, "SKILLS", &skills);

    out
}
