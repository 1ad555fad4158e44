//! CLI entry point.
//!
//! # Responsibility
//! - Parse the command surface and dispatch into `taskdeck_core`
//!   repository operations.
//! - Render results as tables/messages and translate errors to exit codes.

mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::{
    default_log_level, init_logging, JsonFileStore, ProjectRepository, TaskRepository,
    UserRepository,
};

#[derive(Parser)]
#[command(
    name = "taskdeck",
    version,
    about = "CLI project management tool",
    after_help = "Example: taskdeck add-user --name Alex --email alex@example.com"
)]
struct Cli {
    /// Path of the JSON database file.
    #[arg(long, global = true, default_value = "data/db.json")]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new user.
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// List all users.
    ListUsers,
    /// Create a new project for a user.
    AddProject {
        /// Owner user name.
        #[arg(long)]
        user: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Due date (YYYY-MM-DD).
        #[arg(long, default_value = "")]
        due_date: String,
    },
    /// List projects, optionally for a user.
    ListProjects {
        /// User name (optional).
        #[arg(long)]
        user: Option<String>,
    },
    /// Add a task to a project.
    AddTask {
        /// Project title.
        #[arg(long)]
        project: String,
        #[arg(long)]
        title: String,
        /// User name to assign the task to.
        #[arg(long)]
        assigned_to: Option<String>,
    },
    /// List tasks, optionally for a project.
    ListTasks {
        /// Project title (optional).
        #[arg(long)]
        project: Option<String>,
    },
    /// Mark a task as complete.
    CompleteTask {
        /// Task ID.
        #[arg(long)]
        id: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging must never block the user; init failures are ignored.
    let log_dir = match cli.data_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join("logs"),
        _ => PathBuf::from("logs"),
    };
    let _ = init_logging(default_log_level(), &log_dir.to_string_lossy());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonFileStore::open(&cli.data_file)?;

    match &cli.command {
        Command::AddUser { name, email } => {
            let user = UserRepository::new(&store).create(name, email)?;
            println!("User created: {} <{}> (id {})", user.name(), user.email(), user.id());
        }
        Command::ListUsers => {
            output::print_users(&UserRepository::new(&store).list()?);
        }
        Command::AddProject {
            user,
            title,
            description,
            due_date,
        } => {
            let project =
                ProjectRepository::new(&store).create(user, title, description, due_date)?;
            println!(
                "Project created: {} (id {}, owner {})",
                project.title(),
                project.id(),
                user
            );
        }
        Command::ListProjects { user } => {
            output::print_projects(&ProjectRepository::new(&store).list(user.as_deref())?);
        }
        Command::AddTask {
            project,
            title,
            assigned_to,
        } => {
            let created =
                TaskRepository::new(&store).create(project, title, assigned_to.as_deref())?;
            if let Some(name) = &created.unresolved_assignee {
                eprintln!("warning: no user named `{name}`; task left unassigned");
            }
            println!(
                "Task created: {} (id {}, project {})",
                created.task.title(),
                created.task.id(),
                project
            );
        }
        Command::ListTasks { project } => {
            output::print_tasks(&TaskRepository::new(&store).list(project.as_deref())?);
        }
        Command::CompleteTask { id } => {
            let task = TaskRepository::new(&store).complete(*id)?;
            println!("Task {} marked as {}.", task.id(), task.status());
        }
    }

    Ok(())
}
