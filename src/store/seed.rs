use crate::models::{Project, Section};

fn sample(
    id: &str,
    title: &str,
    description: &str,
    tech: &[&str],
    section: Section,
    author: &str,
    uploaded_at: &str,
    thumbnail: &str,
    link: &str,
    likes: u64,
    views: u64,
) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        section,
        author: author.to_string(),
        uploaded_at: uploaded_at.to_string(),
        thumbnail: thumbnail.to_string(),
        link: Some(link.to_string()),
        github_repo: None,
        files: Vec::new(),
        upload_method: None,
        likes,
        views,
    }
}

/// The fixed sample set written to an empty store: one record per section,
/// newest first.
pub fn sample_projects() -> Vec<Project> {
    vec![
        sample(
            "1",
            "Modern E-commerce Dashboard",
            "A beautiful and responsive e-commerce dashboard built with React and Tailwind CSS. \
             Features include product management, order tracking, and analytics.",
            &["React", "TypeScript", "Tailwind CSS", "Chart.js"],
            Section::Frontend,
            "Sarah Johnson",
            "2024-01-15T10:30:00Z",
            "https://images.pexels.com/photos/11035380/pexels-photo-11035380.jpeg?auto=compress&cs=tinysrgb&w=400",
            "https://github.com/sarah/ecommerce-dashboard",
            24,
            156,
        ),
        sample(
            "2",
            "Minimalist Portfolio Design",
            "Clean and modern portfolio design showcasing creative work with smooth animations \
             and intuitive navigation.",
            &["Figma", "Adobe XD", "Design System", "Prototyping"],
            Section::Uiux,
            "Mike Chen",
            "2024-01-14T14:20:00Z",
            "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=400",
            "https://figma.com/file/portfolio-design",
            18,
            89,
        ),
        sample(
            "3",
            "RESTful API with Node.js",
            "Complete REST API implementation with authentication, file uploads, and database \
             integration using Node.js and MongoDB.",
            &["Node.js", "Express", "MongoDB", "JWT"],
            Section::Backend,
            "Alex Rodriguez",
            "2024-01-13T09:15:00Z",
            "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg?auto=compress&cs=tinysrgb&w=400",
            "https://github.com/alex/nodejs-api",
            31,
            203,
        ),
        sample(
            "4",
            "Full-Stack Task Manager",
            "Complete task management application with real-time updates, user authentication, \
             and responsive design.",
            &["React", "Node.js", "Socket.io", "PostgreSQL"],
            Section::Fullstack,
            "Emily Davis",
            "2024-01-12T16:45:00Z",
            "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=400",
            "https://github.com/emily/task-manager",
            42,
            278,
        ),
    ]
}
