use mockito::{Matcher, Server};
use tally_client::{ApiEndpoint, Error, HttpFetcher, OwnerLookup, RecordFetcher};
use tally_core::{Owner, Task};

fn fetcher_for(server: &Server) -> HttpFetcher {
    let endpoint = ApiEndpoint::new(&server.url()).unwrap();
    HttpFetcher::new(endpoint).unwrap()
}

#[tokio::test]
async fn test_fetch_owner_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/2")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 2, "name": "Ervin Howell", "username": "Antonette", "phone": "010"}"#)
        .create_async()
        .await;

    let lookup = fetcher_for(&server).fetch_owner(2).await.unwrap();

    assert_eq!(lookup, OwnerLookup::Found(Owner::new(2, "Ervin Howell", "Antonette")));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_owner_not_found() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/999")
        .with_status(404)
        .with_body("{}")
        .create_async()
        .await;

    let lookup = fetcher_for(&server).fetch_owner(999).await.unwrap();

    assert_eq!(lookup, OwnerLookup::NotFound);
    assert!(lookup.into_option().is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_tasks_filtered_by_owner() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/todos")
        .match_query(Matcher::UrlEncoded("userId".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"userId": 2, "id": 21, "title": "a", "completed": true},
                {"userId": 2, "id": 22, "title": "b", "completed": false}
            ]"#,
        )
        .create_async()
        .await;

    let tasks = fetcher_for(&server).fetch_tasks(Some(2)).await.unwrap();

    assert_eq!(tasks, vec![Task::new(2, "a", true), Task::new(2, "b", false)]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_all_owners_and_tasks() {
    let mut server = Server::new_async().await;
    let users = server
        .mock("GET", "/users")
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Leanne Graham", "username": "Bret"}]"#)
        .create_async()
        .await;
    let todos = server
        .mock("GET", "/todos")
        .with_status(200)
        .with_body(r#"[{"userId": 1, "id": 1, "title": "x", "completed": false}]"#)
        .create_async()
        .await;

    let fetcher = fetcher_for(&server);
    let owners = fetcher.fetch_all_owners().await.unwrap();
    let tasks = fetcher.fetch_all_tasks().await.unwrap();

    assert_eq!(owners, vec![Owner::new(1, "Leanne Graham", "Bret")]);
    assert_eq!(tasks, vec![Task::new(1, "x", false)]);
    users.assert_async().await;
    todos.assert_async().await;
}

#[tokio::test]
async fn test_bulk_fetch_failure_is_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/users")
        .with_status(500)
        .create_async()
        .await;

    let err = fetcher_for(&server).fetch_all_owners().await.unwrap_err();

    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/users"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/todos")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = fetcher_for(&server).fetch_all_tasks().await.unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

#[tokio::test]
async fn test_unreachable_host_is_request_error() {
    let endpoint = ApiEndpoint::new("http://127.0.0.1:1").unwrap();
    let fetcher = HttpFetcher::new(endpoint).unwrap();

    let err = fetcher.fetch_owner(1).await.unwrap_err();
    assert!(matches!(err, Error::Request(_)));
}
