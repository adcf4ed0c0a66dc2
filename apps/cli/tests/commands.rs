use serde_json::json;
use team_tracker_cli::build_goal_list;
use team_tracker_cli::commands::{execute, GoalCommands};
use team_tracker_cli::config::Config;
use team_tracker_core::goals::{GoalListService, GoalStatus};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn goal_list_for(server: &MockServer) -> GoalListService {
    let base_url = format!("{}/api", server.uri());
    let config = Config::from_lookup(|key| match key {
        "TT_API_BASE_URL" => Some(base_url.clone()),
        _ => None,
    });
    build_goal_list(&config).unwrap()
}

fn stored_goal() -> serde_json::Value {
    json!({
        "id": "g1",
        "title": "Write onboarding guide",
        "description": "For new hires",
        "dueDate": "2024-08-15",
        "status": "IN_PROGRESS"
    })
}

async fn mount_list(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_goal()])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn list_prints_goal_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/goals"))
        .and(query_param("status", "IN_PROGRESS"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_goal()])))
        .expect(1)
        .mount(&server)
        .await;
    let mut goals = goal_list_for(&server);

    let output = execute(
        &GoalCommands::List {
            status: Some(GoalStatus::InProgress),
        },
        &mut goals,
    )
    .await
    .unwrap();

    assert!(output.contains("Write onboarding guide"));
    assert!(output.contains("Aug 15, 2024"));
    assert!(output.contains("IN PROGRESS"));
}

#[tokio::test]
async fn add_with_blank_title_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/goals"))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_goal()))
        .expect(0)
        .mount(&server)
        .await;
    let mut goals = goal_list_for(&server);

    let result = execute(
        &GoalCommands::Add {
            title: String::new(),
            description: None,
            due: Some("2024-08-15".to_string()),
            status: None,
        },
        &mut goals,
    )
    .await;

    assert!(result.is_err());
    assert!(goals.is_empty());
}

#[tokio::test]
async fn add_creates_goal_with_server_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/goals"))
        .and(body_json(json!({
            "title": "Write onboarding guide",
            "description": "For new hires",
            "dueDate": "2024-08-15",
            "status": "IN_PROGRESS"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored_goal()))
        .expect(1)
        .mount(&server)
        .await;
    let mut goals = goal_list_for(&server);

    let output = execute(
        &GoalCommands::Add {
            title: "Write onboarding guide".to_string(),
            description: Some("For new hires".to_string()),
            due: Some("2024-08-15".to_string()),
            status: Some(GoalStatus::InProgress),
        },
        &mut goals,
    )
    .await
    .unwrap();

    assert!(output.starts_with("Goal created: g1"));
    assert_eq!(goals.len(), 1);
    assert_eq!(goals.goals()[0].id, "g1");
}

#[tokio::test]
async fn edit_sends_only_the_changed_field() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/goals/g1"))
        .and(body_json(json!({ "status": "COMPLETED" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    let mut goals = goal_list_for(&server);

    let output = execute(
        &GoalCommands::Edit {
            id: "g1".to_string(),
            title: None,
            description: None,
            due: None,
            status: Some(GoalStatus::Completed),
        },
        &mut goals,
    )
    .await
    .unwrap();

    assert!(output.starts_with("Goal updated: g1"));
    let goal = goals.get("g1").unwrap();
    assert_eq!(goal.status, GoalStatus::Completed);
    assert_eq!(goal.title, "Write onboarding guide");
    assert_eq!(goal.description.as_deref(), Some("For new hires"));
}

#[tokio::test]
async fn edit_unknown_goal_is_not_found() {
    let server = MockServer::start().await;
    mount_list(&server).await;
    let mut goals = goal_list_for(&server);

    let err = execute(
        &GoalCommands::Edit {
            id: "missing".to_string(),
            title: Some("x".to_string()),
            description: None,
            due: None,
            status: None,
        },
        &mut goals,
    )
    .await
    .unwrap_err();

    assert_eq!(err.to_string(), "Goal not found: missing");
}

#[tokio::test]
async fn delete_reports_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/goals/g1"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Not allowed" })))
        .mount(&server)
        .await;
    let mut goals = goal_list_for(&server);

    let err = execute(&GoalCommands::Delete { id: "g1".to_string() }, &mut goals)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Not allowed");
}
