//! Table rendering for list commands.

use comfy_table::Table;
use taskdeck_core::{Project, Task, User};

pub fn print_users(users: &[User]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Email"]);
    for user in users {
        table.add_row(vec![
            user.id().to_string(),
            user.name().to_string(),
            user.email().to_string(),
        ]);
    }
    println!("{table}");
}

pub fn print_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Description", "Due Date", "User ID"]);
    for project in projects {
        table.add_row(vec![
            project.id().to_string(),
            project.title().to_string(),
            project.description().to_string(),
            project.due_date().to_string(),
            project.user_id().to_string(),
        ]);
    }
    println!("{table}");
}

pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Title", "Project ID", "Status", "Assigned To"]);
    for task in tasks {
        let assigned = task
            .assigned_to()
            .map_or_else(|| "-".to_string(), |id| id.to_string());
        table.add_row(vec![
            task.id().to_string(),
            task.title().to_string(),
            task.project_id().to_string(),
            task.status().to_string(),
            assigned,
        ]);
    }
    println!("{table}");
}
