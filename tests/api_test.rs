//! API client tests against a local mock server.

use mockito::Matcher;
use triage::{
    ApiClient, Category, Config, Priority, TicketCollection, TicketDraft, TicketFilter,
    TicketStatus, TriageError,
};

fn client_for(url: &str) -> ApiClient {
    let config = Config::default().with_api_url_override(Some(url.to_string()));
    ApiClient::from_config(&config).expect("client should build")
}

fn ticket_json(id: u64, title: &str, status: &str) -> String {
    format!(
        r#"{{"id":{id},"title":"{title}","description":"password reset link expired","category":"account","priority":"high","status":"{status}","created_at":"2024-06-01T12:00:00Z"}}"#
    )
}

// ============================================================================
// Listing and filtering
// ============================================================================

#[tokio::test]
async fn test_list_tickets_unfiltered() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tickets/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            "[{},{}]",
            ticket_json(2, "Refund not processed", "open"),
            ticket_json(1, "Cannot log in", "resolved"),
        ))
        .create_async()
        .await;

    let client = client_for(&server.url());
    let tickets = client
        .list_tickets(&TicketFilter::default())
        .await
        .expect("list should succeed");

    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].id, 2);
    assert_eq!(tickets[0].title, "Refund not processed");
    assert_eq!(tickets[1].status, TicketStatus::Resolved);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_drops_empty_filter_values_from_query() {
    let mut server = mockito::Server::new_async().await;
    // An empty search string never reaches the wire; only the category does.
    let mock = server
        .mock("GET", "/api/tickets/")
        .match_query(Matcher::Exact("category=billing".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let filter = TicketFilter {
        search: String::new(),
        category: Some(Category::Billing),
        ..Default::default()
    };
    let client = client_for(&server.url());
    let tickets = client.list_tickets(&filter).await.expect("list should succeed");

    assert!(tickets.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_sends_all_set_filter_values() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tickets/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "login".into()),
            Matcher::UrlEncoded("category".into(), "account".into()),
            Matcher::UrlEncoded("priority".into(), "high".into()),
            Matcher::UrlEncoded("status".into(), "in_progress".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;

    let filter = TicketFilter {
        search: "login".to_string(),
        category: Some(Category::Account),
        priority: Some(Priority::High),
        status: Some(TicketStatus::InProgress),
    };
    let client = client_for(&server.url());
    client.list_tickets(&filter).await.expect("list should succeed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_surfaces_server_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tickets/")
        .with_status(500)
        .with_body("upstream database unavailable")
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .list_tickets(&TicketFilter::default())
        .await
        .expect_err("500 should be an error");

    match err {
        TriageError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream database unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// Stats
// ============================================================================

#[tokio::test]
async fn test_stats_roundtrip() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/tickets/stats/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"total_tickets":14,"open_tickets":5,"avg_tickets_per_day":2.5,
                "priority_breakdown":{"high":3,"low":11},
                "category_breakdown":{"account":4,"billing":10}}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server.url());
    let stats = client.stats().await.expect("stats should succeed");

    assert_eq!(stats.total_tickets, 14);
    assert_eq!(stats.open_tickets, 5);
    assert_eq!(stats.avg_tickets_per_day, 2.5);
    assert_eq!(stats.priority_breakdown.get("high"), Some(&3));
    assert_eq!(stats.category_breakdown.get("billing"), Some(&10));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_stats_without_breakdowns() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/tickets/stats/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total_tickets":0,"open_tickets":0,"avg_tickets_per_day":0.0}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let stats = client.stats().await.expect("stats should succeed");

    assert!(stats.priority_breakdown.is_empty());
    assert!(stats.category_breakdown.is_empty());
}

// ============================================================================
// Creation
// ============================================================================

#[tokio::test]
async fn test_create_ticket_returns_server_copy() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tickets/")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Cannot log in",
            "description": "password reset link expired",
            "category": "account",
            "priority": "high",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(ticket_json(1, "Cannot log in", "open"))
        .create_async()
        .await;

    let draft = TicketDraft {
        title: "Cannot log in".to_string(),
        description: "password reset link expired".to_string(),
        category: Category::Account,
        priority: Priority::High,
    };
    let client = client_for(&server.url());
    let ticket = client.create_ticket(&draft).await.expect("create should succeed");

    assert_eq!(ticket.id, 1);
    assert_eq!(ticket.status, TicketStatus::Open);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_rejection_payload_is_verbatim() {
    let body = r#"{"title":["This field may not be blank."]}"#;
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/tickets/")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await;

    let draft = TicketDraft {
        title: "Cannot log in".to_string(),
        description: "password reset link expired".to_string(),
        ..Default::default()
    };
    let client = client_for(&server.url());
    let err = client
        .create_ticket(&draft)
        .await
        .expect_err("400 should be an error");

    match err {
        TriageError::Validation(payload) => assert_eq!(payload, body),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_create_transport_failure_is_not_validation() {
    // Nothing listens on the discard port, so the request never completes.
    let client = client_for("http://127.0.0.1:9");
    let draft = TicketDraft {
        title: "Cannot log in".to_string(),
        description: "password reset link expired".to_string(),
        ..Default::default()
    };

    let err = client
        .create_ticket(&draft)
        .await
        .expect_err("closed port should be an error");
    assert!(matches!(err, TriageError::Http(_)), "got: {err:?}");
}

// ============================================================================
// Classification
// ============================================================================

#[tokio::test]
async fn test_classify_suggestions() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/tickets/classify/")
        .match_body(Matcher::Json(serde_json::json!({
            "description": "password reset link expired",
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggested_category":"account","suggested_priority":"high"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let classification = client
        .classify("password reset link expired")
        .await
        .expect("classify should succeed");

    assert_eq!(classification.suggested_category, Some(Category::Account));
    assert_eq!(classification.suggested_priority, Some(Priority::High));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_classify_may_omit_either_suggestion() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/tickets/classify/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggested_category":"billing"}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let classification = client
        .classify("invoice shows the wrong amount")
        .await
        .expect("classify should succeed");

    assert_eq!(classification.suggested_category, Some(Category::Billing));
    assert_eq!(classification.suggested_priority, None);
}

// ============================================================================
// Status updates
// ============================================================================

#[tokio::test]
async fn test_update_status_patches_one_ticket() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("PATCH", "/api/tickets/7/")
        .match_body(Matcher::Json(serde_json::json!({ "status": "resolved" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ticket_json(7, "Cannot log in", "resolved"))
        .create_async()
        .await;

    let client = client_for(&server.url());
    let ticket = client
        .update_status(7, TicketStatus::Resolved)
        .await
        .expect("update should succeed");

    assert_eq!(ticket.id, 7);
    assert_eq!(ticket.status, TicketStatus::Resolved);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_status_unknown_id_is_an_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("PATCH", "/api/tickets/999/")
        .with_status(404)
        .with_body(r#"{"detail":"Not found."}"#)
        .create_async()
        .await;

    let client = client_for(&server.url());
    let err = client
        .update_status(999, TicketStatus::Closed)
        .await
        .expect_err("404 should be an error");

    match err {
        TriageError::Api { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

// ============================================================================
// End to end: classify, submit, list, resolve
// ============================================================================

#[tokio::test]
async fn test_new_ticket_lifecycle_over_http() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/api/tickets/classify/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"suggested_category":"account","suggested_priority":"high"}"#)
        .create_async()
        .await;
    server
        .mock("POST", "/api/tickets/")
        .match_body(Matcher::Json(serde_json::json!({
            "title": "Cannot log in",
            "description": "password reset link expired",
            "category": "account",
            "priority": "high",
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(ticket_json(1, "Cannot log in", "open"))
        .create_async()
        .await;
    server
        .mock("GET", "/api/tickets/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!("[{}]", ticket_json(1, "Cannot log in", "open")))
        .create_async()
        .await;
    server
        .mock("PATCH", "/api/tickets/1/")
        .match_body(Matcher::Json(serde_json::json!({ "status": "resolved" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ticket_json(1, "Cannot log in", "resolved"))
        .create_async()
        .await;

    let client = client_for(&server.url());

    // The suggestions land on the draft because the user picked neither field.
    let classification = client
        .classify("password reset link expired")
        .await
        .expect("classify should succeed");
    let mut draft = TicketDraft {
        title: "Cannot log in".to_string(),
        description: "password reset link expired".to_string(),
        ..Default::default()
    };
    if let Some(category) = classification.suggested_category {
        draft.category = category;
    }
    if let Some(priority) = classification.suggested_priority {
        draft.priority = priority;
    }

    let created = client.create_ticket(&draft).await.expect("create should succeed");
    assert_eq!(created.id, 1);
    assert_eq!(created.status, TicketStatus::Open);

    let mut collection = TicketCollection::default();
    let listed = client
        .list_tickets(&TicketFilter::default())
        .await
        .expect("list should succeed");
    collection.replace_all(listed);
    assert_eq!(collection.len(), 1);

    let resolved = client
        .update_status(created.id, TicketStatus::Resolved)
        .await
        .expect("update should succeed");
    assert!(collection.patch_by_id(resolved));

    let ticket = collection.get(0).expect("ticket #1 should still be listed");
    assert_eq!(ticket.status, TicketStatus::Resolved);
    assert_eq!(ticket.title, "Cannot log in");
}
