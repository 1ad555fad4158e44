use std::str::FromStr;
use taskdeck_core::{Project, Task, TaskStatus, User, ValidationError};

#[test]
fn user_new_sets_fields() {
    let user = User::new(1, "Alex", "alex@example.com").unwrap();

    assert_eq!(user.id(), 1);
    assert_eq!(user.name(), "Alex");
    assert_eq!(user.email(), "alex@example.com");
}

#[test]
fn user_rejects_empty_name() {
    let err = User::new(1, "", "alex@example.com").unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            entity: "user",
            field: "name",
        }
    );
}

#[test]
fn user_rejects_email_without_at_sign() {
    let err = User::new(2, "Sam", "not-an-email").unwrap_err();
    assert_eq!(
        err,
        ValidationError::InvalidEmail {
            entity: "user",
            value: "not-an-email".to_string(),
        }
    );
}

#[test]
fn user_rejects_zero_id() {
    let err = User::new(0, "Alex", "alex@example.com").unwrap_err();
    assert_eq!(err, ValidationError::ZeroId { entity: "user" });
}

#[test]
fn user_setters_revalidate_and_keep_current_value_on_rejection() {
    let mut user = User::new(1, "Alex", "alex@example.com").unwrap();

    user.set_name("").unwrap_err();
    assert_eq!(user.name(), "Alex");

    user.set_email("nowhere").unwrap_err();
    assert_eq!(user.email(), "alex@example.com");

    user.set_name("Alexandra").unwrap();
    user.set_email("alexandra@example.com").unwrap();
    assert_eq!(user.name(), "Alexandra");
    assert_eq!(user.email(), "alexandra@example.com");
}

#[test]
fn user_serialization_uses_expected_wire_fields() {
    let user = User::new(7, "Alex", "alex@example.com").unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["name"], "Alex");
    assert_eq!(json["email"], "alex@example.com");

    let decoded: User = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, user);
}

#[test]
fn user_deserialize_rejects_empty_name() {
    let value = serde_json::json!({
        "id": 1,
        "name": "",
        "email": "alex@example.com"
    });

    let err = serde_json::from_value::<User>(value).unwrap_err();
    assert!(
        err.to_string().contains("non-empty"),
        "unexpected error: {err}"
    );
}

#[test]
fn project_rejects_empty_title() {
    let err = Project::new(1, "", "Desc", "2026-01-01", 1).unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            entity: "project",
            field: "title",
        }
    );
}

#[test]
fn project_record_defaults_description_and_due_date() {
    let value = serde_json::json!({
        "id": 3,
        "title": "Launch",
        "user_id": 1
    });

    let project: Project = serde_json::from_value(value).unwrap();
    assert_eq!(project.title(), "Launch");
    assert_eq!(project.description(), "");
    assert_eq!(project.due_date(), "");
    assert_eq!(project.user_id(), 1);
}

#[test]
fn project_set_title_revalidates() {
    let mut project = Project::new(1, "Launch", "", "", 1).unwrap();

    project.set_title("").unwrap_err();
    assert_eq!(project.title(), "Launch");

    project.set_title("Relaunch").unwrap();
    assert_eq!(project.title(), "Relaunch");
}

#[test]
fn project_round_trips_through_serialization() {
    let project = Project::new(2, "Launch", "Ship v1", "2026-09-01", 1).unwrap();

    let json = serde_json::to_value(&project).unwrap();
    assert_eq!(json["title"], "Launch");
    assert_eq!(json["due_date"], "2026-09-01");

    let decoded: Project = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, project);
}

#[test]
fn task_defaults_to_todo_and_unassigned() {
    let task = Task::new(1, "Do something", 1).unwrap();

    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.assigned_to(), None);
}

#[test]
fn task_rejects_empty_title() {
    let err = Task::new(1, "", 1).unwrap_err();
    assert_eq!(
        err,
        ValidationError::EmptyField {
            entity: "task",
            field: "title",
        }
    );
}

#[test]
fn task_set_title_revalidates() {
    let mut task = Task::new(1, "Design", 1).unwrap();

    task.set_title("").unwrap_err();
    assert_eq!(task.title(), "Design");

    task.set_title("Redesign").unwrap();
    assert_eq!(task.title(), "Redesign");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new(4, "Design", 2).unwrap();
    task.assign_to(1);
    task.set_status(TaskStatus::InProgress);

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], 4);
    assert_eq!(json["project_id"], 2);
    assert_eq!(json["status"], "in-progress");
    assert_eq!(json["assigned_to"], 1);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn task_record_defaults_status_and_assignee() {
    let value = serde_json::json!({
        "id": 9,
        "title": "Imported",
        "project_id": 2
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.status(), TaskStatus::Todo);
    assert_eq!(task.assigned_to(), None);
}

#[test]
fn task_deserialize_rejects_unknown_status() {
    let value = serde_json::json!({
        "id": 2,
        "title": "Bad status",
        "project_id": 1,
        "status": "blocked"
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("blocked"),
        "unexpected error: {err}"
    );
}

#[test]
fn task_status_parses_wire_values() {
    assert_eq!(TaskStatus::from_str("todo").unwrap(), TaskStatus::Todo);
    assert_eq!(
        TaskStatus::from_str("in-progress").unwrap(),
        TaskStatus::InProgress
    );
    assert_eq!(TaskStatus::from_str("done").unwrap(), TaskStatus::Done);

    let err = TaskStatus::from_str("invalid").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownStatus {
            value: "invalid".to_string(),
        }
    );
}
