use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillSet,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demo resume loaded by "load sample". Replaces the document wholesale.
pub fn sample_resume() -> ResumeDocument {
    ResumeDocument {
        personal: PersonalInfo {
            name: "Zain Ul Abideen".to_string(),
            email: "zain@example.com".to_string(),
            phone: "+91 91234 56789".to_string(),
            location: "Mumbai, India".to_string(),
            summary: "Ambitious Software Engineer who has built premium user experiences and \
                      highly scalable frontend architectures. Expert in React \
                      and modern UI/UX design patterns."
                .to_string(),
            github: "github.com/zain-146".to_string(),
            linkedin: "linkedin.com/in/zain".to_string(),
        },
        experience: vec![ExperienceEntry {
            company: "KodNest Tech".to_string(),
            role: "Full Stack Developer".to_string(),
            duration: "2023 - Present".to_string(),
            desc: "Led the development of premium build systems and SaaS dashboards used by \
                   12 product teams."
                .to_string(),
        }],
        education: vec![EducationEntry {
            school: "Indian Institute of Technology".to_string(),
            degree: "B.Tech Computer Science".to_string(),
            year: "2023".to_string(),
        }],
        projects: vec![ProjectEntry {
            title: "AI Build Tracker".to_string(),
            desc: "Built a real-time project management tool with AI artifact verification."
                .to_string(),
            tech_stack: owned(&["React", "Node.js", "PostgreSQL"]),
            live_url: "ai-build.example.com".to_string(),
            github_url: "github.com/zain/ai-build".to_string(),
        }],
        skills: SkillSet {
            technical: owned(&["JavaScript", "React", "Tailwind CSS", "Node.js"]),
            soft: owned(&["Communication", "Mentoring"]),
            tools: owned(&["Git", "Figma"]),
        },
    }
}
