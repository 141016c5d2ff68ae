
use skillboard::{
    entities::profile::{Project, SocialLinks, WorkEntry},
    errors::AppError,
    http::client::HttpProfileApi,
    repositories::profile_api::ProfileApi,
};
use test_utils::*;

#[actix_rt::test]
async fn create_then_fetch_by_id_and_email() {
    let app = TestApp::spawn().await;

    let mut profile = new_profile("Ada Lovelace", "ada@example.com", &["Python", "Rust"]);
    profile.projects.push(Project {
        title: "Analytical Engine".into(),
        description: Some("Notes".into()),
        links: Some("https://example.com/engine".into()),
    });
    profile.work.push(WorkEntry {
        links: Some(SocialLinks {
            github: Some("https://github.com/ada".into()),
            ..SocialLinks::default()
        }),
    });

    let created = app.api.create_profile(&profile).await.unwrap();
    assert!(created.success);
    assert!(!created.data.id.is_empty());
    assert!(created.data.created_at.is_some());

    let by_id = app.api.get_profile_by_id(&created.data.id).await.unwrap();
    assert_eq!(by_id.data, created.data);

    let by_email = app.api.get_profile_by_email("ada@example.com").await.unwrap();
    assert_eq!(by_email.data.id, created.data.id);
    assert_eq!(
        by_email.data.primary_links().and_then(|l| l.github.as_deref()),
        Some("https://github.com/ada")
    );
}

#[actix_rt::test]
async fn duplicate_email_surfaces_server_message() {
    let app = TestApp::spawn().await;
    let profile = new_profile("Ada", "ada@example.com", &[]);
    app.api.create_profile(&profile).await.unwrap();

    let err = app.api.create_profile(&profile).await.unwrap_err();

    assert!(matches!(err, AppError::Server { status: 400, .. }));
    assert_eq!(err.server_message(), Some("Profile with this email already exists"));
    assert_eq!(app.state.profile_count(), 1);
}

#[actix_rt::test]
async fn unknown_email_is_not_found() {
    let app = TestApp::spawn().await;

    let err = app.api.get_profile_by_email("nobody@example.com").await.unwrap_err();

    assert!(err.is_not_found());
}

#[actix_rt::test]
async fn server_failure_is_not_confused_with_not_found() {
    let app = TestApp::spawn().await;
    app.state.fail("email");

    let err = app.api.get_profile_by_email("ada@example.com").await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(matches!(err, AppError::Server { status: 500, .. }));
}

#[actix_rt::test]
async fn update_replaces_profile_fields() {
    let app = TestApp::spawn().await;
    let created = app.seed(&new_profile("Ada", "ada@example.com", &["Python"])).await;

    let mut update = new_profile("Ada King", "ada@example.com", &["Python", "Go"]);
    update.education = Some("Home schooled".into());
    let updated = app.api.update_profile(&created.id, &update).await.unwrap();

    assert_eq!(updated.data.name, "Ada King");
    assert_eq!(updated.data.skills, vec!["Python", "Go"]);
    assert_eq!(updated.data.education(), Some("Home schooled"));
}

#[actix_rt::test]
async fn delete_removes_profile_and_second_delete_is_not_found() {
    let app = TestApp::spawn().await;
    let created = app.seed(&new_profile("Ada", "ada@example.com", &[])).await;

    let ack = app.api.delete_profile(&created.id).await.unwrap();
    assert!(ack.success);
    assert_eq!(app.state.profile_count(), 0);

    let err = app.api.delete_profile(&created.id).await.unwrap_err();
    assert!(err.is_not_found());
}

#[actix_rt::test]
async fn search_encodes_skill_and_matches_case_insensitively() {
    let app = TestApp::spawn().await;
    app.seed(&new_profile("Ada", "ada@example.com", &["C#", "Python"])).await;
    app.seed(&new_profile("Linus", "linus@example.com", &["C"])).await;

    let found = app.api.search_by_skill("c#").await.unwrap();

    assert_eq!(found.count, 1);
    assert_eq!(found.data[0].email, "ada@example.com");
}

#[actix_rt::test]
async fn aggregates_report_totals_and_ranked_skills() {
    let app = TestApp::spawn().await;
    let mut first = new_profile("Ada", "ada@example.com", &["Python", "Rust"]);
    first.projects.push(Project { title: "One".into(), description: None, links: None });
    first.projects.push(Project { title: "Two".into(), description: None, links: None });
    app.seed(&first).await;
    app.seed(&new_profile("Linus", "linus@example.com", &["Python"])).await;

    let profiles = app.api.get_all_profiles().await.unwrap();
    assert_eq!(profiles.count, 2);

    let projects = app.api.get_all_projects().await.unwrap();
    assert_eq!(projects.count, 2);

    let top = app.api.get_top_skills(Some(1)).await.unwrap();
    assert_eq!(top.data.len(), 1);
    assert_eq!(top.data[0].skill_name, "Python");
    assert_eq!(top.data[0].count, 2);
}

#[actix_rt::test]
async fn top_skills_defaults_to_ten() {
    let app = TestApp::spawn().await;
    let skills: Vec<String> = (0..12).map(|i| format!("skill-{}", i)).collect();
    let skills: Vec<&str> = skills.iter().map(String::as_str).collect();
    app.seed(&new_profile("Ada", "ada@example.com", &skills)).await;

    let top = app.api.get_top_skills(None).await.unwrap();

    assert_eq!(app.state.last_top_skills_limit(), Some(10));
    assert_eq!(top.data.len(), 10);
}

#[actix_rt::test]
async fn health_reports_status_and_extra_fields() {
    let app = TestApp::spawn().await;

    let health = app.api.health_check().await.unwrap();

    assert_eq!(health.status, "OK");
    assert!(health.details.contains_key("uptime"));
}

#[actix_rt::test]
async fn unreachable_service_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());
    drop(listener);

    let api = HttpProfileApi::new(&test_config(&address)).unwrap();
    let err = api.get_all_profiles().await.unwrap_err();

    assert!(matches!(err, AppError::Network(_)));
    assert_eq!(err.user_message("Failed to fetch profiles"), "Failed to fetch profiles");
}
