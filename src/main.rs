mod api;
mod auth;
mod error;
mod models;
mod section;
mod settings;
mod store;
mod upload;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use crate::api::{LocalFile, ProjectsApi, UploadApi};
use crate::auth::AuthClient;
use crate::models::{Project, Section, UploadMethod};
use crate::section::{tech_options, SectionFilter};
use crate::settings::Settings;
use crate::store::Store;
use crate::upload::UploadFlow;

#[derive(Parser)]
#[command(name = "showcase", about = "Project showcase gallery")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview of the four sections with project counts
    Sections,
    /// List projects, optionally one section only
    List {
        #[arg(long)]
        section: Option<Section>,
    },
    /// Show a single project by id
    Show { id: String },
    /// Search within a section by title/description and tech tag
    Search {
        term: String,
        #[arg(long)]
        section: Section,
        #[arg(long)]
        tech: Option<String>,
    },
    /// List the selectable tech-stack tags of a section
    Techs {
        #[arg(long)]
        section: Section,
    },
    /// Like a project
    Like { id: String },
    /// Upload a new project (requires login)
    Upload {
        #[arg(long)]
        section: Section,
        #[arg(long, default_value = "github")]
        method: UploadMethod,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma-separated tech-stack tags
        #[arg(long, default_value = "")]
        tech_stack: String,
        #[arg(long)]
        github_url: Option<String>,
        #[arg(long)]
        link: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        /// Run the advisory repository analysis before submitting
        #[arg(long)]
        analyze: bool,
    },
    /// Login (mocked GitHub flow or remote credential flow)
    Login {
        #[command(subcommand)]
        flow: LoginFlow,
    },
    /// Create an account via the remote auth endpoint
    Signup {
        username: String,
        email: String,
        password: String,
    },
    /// Clear the bearer token and the session
    Logout,
    /// Show the current session
    Whoami,
    /// Persist configuration to .showcase/setting.json
    Config {
        /// Base URL of the remote auth endpoints
        #[arg(long)]
        auth_url: String,
    },
}

#[derive(Subcommand)]
enum LoginFlow {
    /// Mocked GitHub login: any name and email activate the session
    Github { name: String, email: String },
    /// Credential login against the remote auth endpoint
    Email { email: String, password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "showcase=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let store = Store::open_default()?;
    store.ensure_seeded()?;

    let projects = ProjectsApi::new(&store);

    match cli.command {
        Commands::Sections => {
            let all = projects.get_all(None).await?;
            for section in Section::ALL {
                let count = section::section_projects(&all, section).len();
                println!(
                    "{:9}  {}: {} ({count} projects)",
                    section.as_str(),
                    section.title(),
                    section.description()
                );
            }
        }
        Commands::List { section } => {
            for project in projects.get_all(section).await? {
                print_project_line(&project);
            }
        }
        Commands::Show { id } => {
            let project = projects.get_by_id(&id).await?;
            print_project(&project);
        }
        Commands::Search {
            term,
            section,
            tech,
        } => {
            // The view derives its subset from the full list, like the app does.
            let all = projects.get_all(None).await?;
            let in_section: Vec<Project> = section::section_projects(&all, section)
                .into_iter()
                .cloned()
                .collect();
            let filter = SectionFilter::new(term, tech);
            let visible = filter.apply(&in_section);
            if visible.is_empty() {
                println!("No projects found");
            }
            for project in visible {
                print_project_line(project);
            }
        }
        Commands::Techs { section } => {
            let in_section = projects.get_all(Some(section)).await?;
            for tag in tech_options(in_section.iter()) {
                println!("{tag}");
            }
        }
        Commands::Like { id } => match projects.like(&id).await? {
            Some(project) => println!("{} now has {} likes", project.title, project.likes),
            None => println!("no project with id {id}"),
        },
        Commands::Upload {
            section,
            method,
            title,
            description,
            tech_stack,
            github_url,
            link,
            file,
            analyze,
        } => {
            auth::ensure_logged_in(&store)?;

            let mut flow = UploadFlow::new();
            flow.select_section(section);
            flow.set_method(method);
            flow.fields.title = title;
            flow.fields.description = description;
            flow.fields.tech_stack = tech_stack;
            flow.fields.github_url = github_url.unwrap_or_default();
            flow.fields.link = link.unwrap_or_default();
            if let Some(path) = file {
                flow.fields.file = Some(local_file(&path)?);
            }

            if analyze && method == UploadMethod::Github {
                let analysis = flow.analyze_repo().await?;
                println!("Detected tech stack: {}", analysis.all_tags().join(", "));
            }

            let uploads = UploadApi::new();
            let created = flow.submit(&projects, &uploads).await?;
            println!("Uploaded {} ({})", created.title, created.id);
        }
        Commands::Login { flow } => match flow {
            LoginFlow::Github { name, email } => {
                let session = auth::github_login(&store, &name, &email)?;
                if let Some(user) = session.user {
                    println!("Logged in as {} <{}>", user.name, user.email);
                }
            }
            LoginFlow::Email { email, password } => {
                let settings = Settings::load();
                let client = AuthClient::new(settings.auth_base_url);
                let token = client.login(&email, &password).await?;
                auth::store_token(&store, &token)?;
                println!("Logged in");
            }
        },
        Commands::Signup {
            username,
            email,
            password,
        } => {
            let settings = Settings::load();
            let client = AuthClient::new(settings.auth_base_url);
            client.signup(&username, &email, &password).await?;
            println!("Account created, you can now login");
        }
        Commands::Logout => {
            auth::logout(&store)?;
            println!("Logged out");
        }
        Commands::Whoami => {
            let session = auth::current_session(&store)?;
            match (session.logged_in, session.user) {
                (true, Some(user)) => println!("{} <{}>", user.name, user.email),
                (true, None) => println!("Logged in (token session)"),
                _ => println!("Not logged in"),
            }
        }
        Commands::Config { auth_url } => {
            let mut settings = Settings::load();
            settings.auth_base_url = auth_url;
            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            settings.save_to(&cwd)?;
            println!("Saved settings to {}", cwd.join(".showcase/setting.json").display());
        }
    }

    Ok(())
}

fn local_file(path: &std::path::Path) -> anyhow::Result<LocalFile> {
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("failed to read file {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("file path has no name")?;

    Ok(LocalFile {
        name,
        size: metadata.len(),
        content_type: "application/octet-stream".to_string(),
    })
}

fn print_project_line(project: &Project) {
    println!(
        "{}  [{}] {} by {} ({} likes, {} views)",
        project.id, project.section, project.title, project.author, project.likes, project.views
    );
}

fn print_project(project: &Project) {
    println!("{} ({})", project.title, project.id);
    println!("  section:    {}", project.section.title());
    println!("  author:     {}", project.author);
    println!("  uploaded:   {}", project.uploaded_at);
    println!("  tech stack: {}", project.tech_stack.join(", "));
    if let Some(link) = &project.link {
        println!("  link:       {link}");
    }
    if let Some(repo) = &project.github_repo {
        println!("  repo:       {}", repo.url);
    }
    for file in &project.files {
        println!("  file:       {} ({} bytes)", file.filename, file.size);
    }
    println!("  likes:      {}", project.likes);
    println!("  views:      {}", project.views);
    println!();
    println!("{}", project.description);
}
