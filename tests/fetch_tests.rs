//! HTTP-level tests for the repository fetcher.
//!
//! Each test starts a local mock server and points a real client at it.

use mockito::Matcher;

use showcase::{
    project, run_pipeline, Error, PipelineResult, ProjectsQuery, RenderState, ShowcaseClient,
    LOAD_FAILURE_MESSAGE,
};

const ORG_REPOS_BODY: &str = r#"[
    {
        "id": 1,
        "name": "marco",
        "full_name": "ds-horizon/marco",
        "description": "Performance measurement for mobile apps",
        "stargazers_count": 40,
        "html_url": "https://github.com/ds-horizon/marco",
        "fork": false
    },
    {
        "id": 2,
        "name": "internal-tools",
        "full_name": "ds-horizon/internal-tools",
        "description": "Not featured",
        "stargazers_count": 500,
        "html_url": "https://github.com/ds-horizon/internal-tools",
        "fork": false
    },
    {
        "id": 3,
        "name": "defrost",
        "full_name": "ds-horizon/defrost",
        "description": null,
        "stargazers_count": 90,
        "html_url": "https://github.com/ds-horizon/defrost",
        "fork": false
    },
    {
        "id": 4,
        "name": "checkmate",
        "full_name": "ds-horizon/checkmate",
        "description": "Test case management",
        "stargazers_count": 40,
        "html_url": "https://github.com/ds-horizon/checkmate",
        "fork": false
    }
]"#;

fn client_for(server: &mockito::ServerGuard) -> ShowcaseClient {
    ShowcaseClient::new(Some(&server.url()), None).expect("Client creation should succeed")
}

fn names(result: &PipelineResult) -> Vec<String> {
    result
        .records()
        .expect("should be success")
        .iter()
        .map(|r| r.name.clone())
        .collect()
}

#[tokio::test]
async fn test_featured_pipeline_filters_and_sorts() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(ORG_REPOS_BODY)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = run_pipeline(client.repos(), "ds-horizon", &ProjectsQuery::featured()).await;

    mock.assert_async().await;
    assert_eq!(names(&result), vec!["defrost", "marco", "checkmate"]);
}

#[tokio::test]
async fn test_all_pipeline_requests_page_size() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(ORG_REPOS_BODY)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = run_pipeline(client.repos(), "ds-horizon", &ProjectsQuery::all(100)).await;

    mock.assert_async().await;
    assert_eq!(
        names(&result),
        vec!["internal-tools", "defrost", "marco", "checkmate"]
    );
}

#[tokio::test]
async fn test_request_headers() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .match_header("accept", "application/vnd.github+json")
        .match_header("user-agent", Matcher::Regex("^showcase/".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let client = client_for(&server);
    let repos = client
        .repos()
        .list("ds-horizon", None)
        .await
        .expect("should succeed");

    mock.assert_async().await;
    assert!(repos.is_empty());
}

#[tokio::test]
async fn test_not_found_is_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs/missing-org/repos")
        .with_status(404)
        .with_body(
            r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .repos()
        .list("missing-org", None)
        .await
        .expect_err("404 should fail");

    match err {
        Error::Fetch { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Not Found");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_renders_error_not_partial_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = run_pipeline(client.repos(), "ds-horizon", &ProjectsQuery::featured()).await;

    assert!(result.error().is_some_and(Error::is_fetch));
    assert_eq!(
        project(&result, 4),
        RenderState::Error(LOAD_FAILURE_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_rate_limit_is_plain_fetch_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .with_status(403)
        .with_header("x-ratelimit-remaining", "0")
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .repos()
        .list("ds-horizon", None)
        .await
        .expect_err("403 should fail");

    // exactly one request: no retry
    mock.assert_async().await;
    assert_eq!(err.status(), Some(403));
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .with_status(200)
        .with_body(r#"{"message": "not a list"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .repos()
        .list("ds-horizon", None)
        .await
        .expect_err("object body should fail");

    assert!(err.is_parse());
}

#[tokio::test]
async fn test_truncated_body_renders_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
        .with_status(200)
        .with_body(r#"[{"name": "marco", "stargazers_count": 4"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = run_pipeline(client.repos(), "ds-horizon", &ProjectsQuery::all(100)).await;

    assert!(result.error().is_some_and(Error::is_parse));
    assert_eq!(
        project(&result, 6),
        RenderState::Error(LOAD_FAILURE_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn test_null_description_renders_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/orgs/ds-horizon/repos")
        .with_status(200)
        .with_body(ORG_REPOS_BODY)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = run_pipeline(client.repos(), "ds-horizon", &ProjectsQuery::featured()).await;

    let RenderState::Cards(cards) = project(&result, 4) else {
        panic!("expected cards");
    };
    let defrost = cards
        .iter()
        .find(|c| c.title == "defrost")
        .expect("defrost is featured");
    assert_eq!(defrost.description, "No description available");
    assert_eq!(defrost.github_url, "https://github.com/ds-horizon/defrost");
}

#[tokio::test]
async fn test_unreachable_server_is_http_error() {
    // Nothing listens on the discard port.
    let client = ShowcaseClient::new(Some("http://127.0.0.1:9"), None)
        .expect("Client creation should succeed");

    let err = client
        .repos()
        .list("ds-horizon", None)
        .await
        .expect_err("connection should fail");

    assert!(matches!(err, Error::Http(_)));
}
