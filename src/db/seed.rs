//! Default portfolio content and the idempotent startup seeding pass.

use tracing::info;

use super::models::{
    ContactInfo, NewContactInfo, NewProject, NewSkill, Project, Skill, SkillCategory,
};
use super::repository::{
    ContactInfoRepository, Database, ProjectRepository, SeedOutcome, SkillRepository,
};
use super::DbResult;

/// Records inserted into empty collections at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub projects: Vec<NewProject>,
    pub skills: Vec<NewSkill>,
    pub contact_info: NewContactInfo,
}

/// What each seed step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub projects: SeedOutcome,
    pub skills: SeedOutcome,
    pub contact_info: SeedOutcome,
}

/// Seed projects, then skills, then contact info.
///
/// Each step is a no-op when its collection already holds documents, so this
/// is safe to run on every start. Seed records are validated before anything
/// is written.
pub async fn seed_database<D: Database>(db: &D, data: &SeedData) -> DbResult<SeedReport> {
    info!("Starting database seeding...");

    let projects = data
        .projects
        .iter()
        .cloned()
        .map(Project::new)
        .collect::<Result<Vec<_>, _>>()?;
    let skills = data
        .skills
        .iter()
        .cloned()
        .map(Skill::new)
        .collect::<Result<Vec<_>, _>>()?;
    let contact_info = ContactInfo::new(data.contact_info.clone())?;

    let report = SeedReport {
        projects: db.projects().seed(&projects).await?,
        skills: db.skills().seed(&skills).await?,
        contact_info: db.contact_info().seed(&contact_info).await?,
    };

    info!("Database seeding completed");
    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn project(
    title: &str,
    description: &str,
    image: &str,
    technologies: &[&str],
    category: &str,
    demo_url: Option<&str>,
    github_url: Option<&str>,
    featured: bool,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        demo_url: demo_url.map(str::to_string),
        github_url: github_url.map(str::to_string),
        featured,
    }
}

impl Default for SeedData {
    fn default() -> Self {
        use SkillCategory::{Backend, Design, Frontend, Tools};

        let projects = vec![
            project(
                "E-commerce Platform",
                "A full-stack e-commerce solution with user authentication, payment processing, inventory management, and real-time order tracking.",
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=600&h=400&fit=crop",
                &["React", "Node.js", "MongoDB", "Stripe API", "AWS"],
                "Full-Stack Development",
                Some("https://demo-ecommerce.example.com"),
                Some("https://github.com/alexchen/ecommerce-platform"),
                true,
            ),
            project(
                "Task Management App",
                "A collaborative project management tool with real-time updates, drag-and-drop boards, and team collaboration features.",
                "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=600&h=400&fit=crop",
                &["React", "TypeScript", "Firebase", "Material-UI", "Socket.io"],
                "Web Application",
                Some("https://taskflow-demo.example.com"),
                Some("https://github.com/alexchen/taskflow"),
                true,
            ),
            project(
                "Mobile Banking App Design",
                "Complete UI/UX design for a mobile banking application, focused on security, accessibility, and a comprehensive design system.",
                "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=600&h=400&fit=crop",
                &["Figma", "Adobe XD", "Principle", "InVision", "User Research"],
                "UI/UX Design",
                Some("https://bankapp-prototype.example.com"),
                None,
                true,
            ),
            project(
                "Data Visualization Dashboard",
                "Interactive business analytics dashboard with real-time data processing, customizable charts, and export functionality.",
                "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
                &["React", "D3.js", "Python", "FastAPI", "PostgreSQL"],
                "Data Visualization",
                Some("https://analytics-dashboard.example.com"),
                Some("https://github.com/alexchen/analytics-dashboard"),
                false,
            ),
            project(
                "Restaurant Brand Identity",
                "Brand identity for a restaurant chain including logo design, menu layouts, packaging, and digital presence.",
                "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=600&h=400&fit=crop",
                &["Adobe Illustrator", "Photoshop", "InDesign", "Brand Strategy"],
                "Brand Design",
                Some("https://restaurant-brand.example.com"),
                None,
                false,
            ),
            project(
                "Real-time Chat Application",
                "Scalable chat application with group chats, file sharing, emoji reactions, and message encryption.",
                "https://images.unsplash.com/photo-1577563908411-5077b6dc7624?w=600&h=400&fit=crop",
                &["React", "Node.js", "Socket.io", "Redis", "JWT"],
                "Real-time Application",
                Some("https://chatapp-demo.example.com"),
                Some("https://github.com/alexchen/realtime-chat"),
                false,
            ),
        ];

        let skills = vec![
            NewSkill::new("React", 95, 4, Frontend),
            NewSkill::new("TypeScript", 90, 3, Frontend),
            NewSkill::new("JavaScript", 95, 5, Frontend),
            NewSkill::new("HTML/CSS", 95, 5, Frontend),
            NewSkill::new("Tailwind CSS", 85, 2, Frontend),
            NewSkill::new("Next.js", 85, 2, Frontend),
            NewSkill::new("Node.js", 90, 4, Backend),
            NewSkill::new("Python", 85, 3, Backend),
            NewSkill::new("FastAPI", 80, 2, Backend),
            NewSkill::new("Express.js", 90, 4, Backend),
            NewSkill::new("PostgreSQL", 85, 3, Backend),
            NewSkill::new("MongoDB", 80, 3, Backend),
            NewSkill::new("Figma", 90, 3, Design),
            NewSkill::new("Adobe XD", 85, 4, Design),
            NewSkill::new("Photoshop", 80, 5, Design),
            NewSkill::new("Illustrator", 75, 3, Design),
            NewSkill::new("UI/UX Design", 90, 4, Design),
            NewSkill::new("Prototyping", 85, 4, Design),
            NewSkill::new("Git", 95, 5, Tools),
            NewSkill::new("Docker", 80, 2, Tools),
            NewSkill::new("AWS", 75, 2, Tools),
            NewSkill::new("Firebase", 85, 3, Tools),
            NewSkill::new("Vercel", 90, 2, Tools),
            NewSkill::new("VS Code", 95, 5, Tools),
        ];

        let contact_info = NewContactInfo {
            email: "alex.chen@example.com".to_string(),
            phone: Some("+1 (555) 123-4567".to_string()),
            location: Some("San Francisco, CA".to_string()),
            availability: Some("Available for new opportunities".to_string()),
            response_time: Some("Usually responds within 24 hours".to_string()),
        };

        Self {
            projects,
            skills,
            contact_info,
        }
    }
}
