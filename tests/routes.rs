//! Rotas: path, método, query e corpo que chegam ao servidor

use clickup::ClickUpClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, ClickUpClient) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let server = MockServer::start().await;
    let client = ClickUpClient::builder()
        .token("pk_test")
        .base_url(format!("{}/api/v2", server.uri()))
        .build()
        .unwrap();
    (server, client)
}

fn ok() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({}))
}

#[tokio::test]
async fn test_create_token_sends_credentials_as_query() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/oauth/token"))
        .and(query_param("client_id", "cid"))
        .and(query_param("client_secret", "secret"))
        .and(query_param("code", "xyz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "tok" })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client
        .authorization()
        .create_token("cid", "secret", "xyz")
        .await
        .unwrap();

    assert_eq!(token["access_token"], "tok");
}

#[tokio::test]
async fn test_authorization_user_and_teams() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": { "id": 1 } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "teams": [] })))
        .expect(2)
        .mount(&server)
        .await;

    assert_eq!(client.authorization().user().await.unwrap()["user"]["id"], 1);
    assert_eq!(client.authorization().teams().await.unwrap(), json!({ "teams": [] }));
    assert_eq!(client.team().list().await.unwrap(), json!({ "teams": [] }));
}

#[tokio::test]
async fn test_team_filtered_tasks_with_array_filters() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/team/42/task"))
        .and(query_param("statuses[]", "open"))
        .and(query_param("list_ids[]", "901"))
        .and(query_param("page", "0"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .team()
        .filtered_tasks("42", json!({ "statuses": ["open"], "listIds": ["901"], "page": 0 }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_team_webhooks() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/team/42/webhook"))
        .and(body_json(json!({ "endpoint": "https://example.com/hook", "events": ["taskCreated"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "wh1" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/team/42/webhook"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "webhooks": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .team()
        .create_webhook("42", json!({ "endpoint": "https://example.com/hook", "events": ["taskCreated"] }))
        .await
        .unwrap();
    assert_eq!(created["id"], "wh1");

    client.team().webhooks("42").await.unwrap();
}

#[tokio::test]
async fn test_space_tag_name_is_percent_encoded() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/space/7/tag/high%20priority"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.space().remove_tag("7", "high priority").await.unwrap();
}

#[tokio::test]
async fn test_folder_lists_and_create_list() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/folder/3/list"))
        .and(query_param("archived", "true"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/folder/3/list"))
        .and(body_json(json!({ "name": "Backlog", "due_date_time": false })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.folder().lists("3", json!({ "archived": true })).await.unwrap();
    client
        .folder()
        .create_list("3", json!({ "name": "Backlog", "dueDateTime": false }))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_create_task_with_query_and_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/list/901/task"))
        .and(query_param("custom_task_ids", "true"))
        .and(query_param("team_id", "42"))
        .and(body_json(json!({ "name": "Nova", "notify_all": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "t1" })))
        .expect(1)
        .mount(&server)
        .await;

    let task = client
        .list()
        .create_task(
            "901",
            json!({ "name": "Nova", "notifyAll": true }),
            json!({ "customTaskIds": true, "teamId": 42 }),
        )
        .await
        .unwrap();

    assert_eq!(task["id"], "t1");
}

#[tokio::test]
async fn test_list_add_and_remove_task() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/v2/list/901/task/t1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/list/901/task/t1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.list().add_task("901", "t1").await.unwrap();
    client.list().remove_task("901", "t1").await.unwrap();
}

#[tokio::test]
async fn test_task_update_and_custom_field() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/task/abc"))
        .and(body_json(json!({ "status": "done", "due_date": 1 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/task/abc/field/f1"))
        .and(body_json(json!({ "value": "x" })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .task()
        .update("abc", json!({ "status": "done", "dueDate": 1 }), None)
        .await
        .unwrap();
    client
        .task()
        .set_custom_field_value("abc", "f1", json!({ "value": "x" }), None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_task_bulk_time_in_status() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/task/bulk_time_in_status/task_ids"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .task()
        .bulk_time_in_status(json!({ "taskIds": ["a", "b"] }))
        .await
        .unwrap();

    let received = server.received_requests().await.unwrap();
    let pairs: Vec<(String, String)> = received[0].url.query_pairs().into_owned().collect();
    assert_eq!(
        pairs,
        vec![
            ("task_ids[]".to_string(), "a".to_string()),
            ("task_ids[]".to_string(), "b".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_checklist_items() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/checklist/c1/checklist_item/i1"))
        .and(body_json(json!({ "resolved": true })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/checklist/c1/checklist_item/i1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .checklist()
        .update_item("c1", "i1", json!({ "resolved": true }))
        .await
        .unwrap();
    client.checklist().delete_item("c1", "i1").await.unwrap();
}

#[tokio::test]
async fn test_comment_and_webhook_delete() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/comment/99"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/webhook/wh1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.comment().delete("99").await.unwrap();
    client.webhook().delete("wh1").await.unwrap();
}

#[tokio::test]
async fn test_task_id_is_encoded_as_single_segment() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/task/..%2Fuser"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.task().get("../user", None).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.path(), "/api/v2/task/..%2Fuser");
}

#[tokio::test]
async fn test_team_goals_and_goal_routes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/team/42/goal"))
        .and(query_param("include_completed", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "goals": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/team/42/goal"))
        .and(body_json(json!({ "name": "Q4", "due_date": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "goal": { "id": "g1" } })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/goal/g1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/goal/g1"))
        .and(body_json(json!({ "name": "Q4 revisado" })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/goal/g1/key_result"))
        .and(body_json(json!({ "name": "Vendas", "steps_end": 10 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/goal/g1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.team().goals("42", json!({ "includeCompleted": true })).await.unwrap();
    let created = client
        .team()
        .create_goal("42", json!({ "name": "Q4", "dueDate": 1 }))
        .await
        .unwrap();
    assert_eq!(created["goal"]["id"], "g1");

    client.goal().get("g1").await.unwrap();
    client.goal().update("g1", json!({ "name": "Q4 revisado" })).await.unwrap();
    client
        .goal()
        .add_key_result("g1", json!({ "name": "Vendas", "stepsEnd": 10 }))
        .await
        .unwrap();
    client.goal().delete("g1").await.unwrap();
}

#[tokio::test]
async fn test_key_result_update_and_delete() {
    let (server, client) = setup().await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/key_result/kr1"))
        .and(body_json(json!({ "steps_current": 5 })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/key_result/kr1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client
        .key_result()
        .update("kr1", json!({ "stepsCurrent": 5 }))
        .await
        .unwrap();
    client.key_result().delete("kr1").await.unwrap();
}

#[tokio::test]
async fn test_group_routes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/group"))
        .and(query_param("team_id", "42"))
        .and(query_param("group_ids[]", "gr1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "groups": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/group/gr1"))
        .and(body_json(json!({ "name": "Suporte" })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/group/gr1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    let groups = client
        .group()
        .get(json!({ "teamId": 42, "groupIds": ["gr1"] }))
        .await
        .unwrap();
    assert_eq!(groups, json!({ "groups": [] }));

    client.group().update("gr1", json!({ "name": "Suporte" })).await.unwrap();
    client.group().delete("gr1").await.unwrap();
}

#[tokio::test]
async fn test_team_views_and_view_routes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/team/42/view"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "views": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/team/42/view"))
        .and(body_json(json!({ "name": "Board", "type": "board" })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/view/v1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/v2/view/v1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/view/v1"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v2/view/v1/comment"))
        .and(body_json(json!({ "comment_text": "oi", "notify_all": false })))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2/view/v1/comment"))
        .respond_with(ok())
        .expect(1)
        .mount(&server)
        .await;

    client.team().views("42").await.unwrap();
    client
        .team()
        .create_view("42", json!({ "name": "Board", "type": "board" }))
        .await
        .unwrap();
    client.view().get("v1").await.unwrap();
    client.view().update("v1", json!({ "name": "Board 2" })).await.unwrap();
    client
        .view()
        .add_comment("v1", json!({ "commentText": "oi", "notifyAll": false }))
        .await
        .unwrap();
    client.view().comments("v1", None).await.unwrap();
    client.view().delete("v1").await.unwrap();
}

#[tokio::test]
async fn test_view_tasks_defaults_page_to_zero() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/v2/view/v1/task"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tasks": [], "last_page": true })))
        .expect(2)
        .mount(&server)
        .await;

    client.view().tasks("v1", None).await.unwrap();
    client.view().tasks("v1", json!({ "page": 3 })).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received[0].url.query(), Some("page=0"));
    assert_eq!(received[1].url.query(), Some("page=3"));
}
