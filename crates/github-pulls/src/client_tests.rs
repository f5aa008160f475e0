//! Unit tests for PullsClient using wiremock

#[cfg(test)]
mod tests {
    use crate::client::{api_base, basic_auth_header, PullsClient};
    use crate::error::FetchError;
    use reminder_core::RepoRef;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo(s: &str) -> RepoRef {
        s.parse().unwrap()
    }

    /// Helper to create a mock pulls listing entry
    fn mock_pull(repo: &str, number: u64) -> serde_json::Value {
        serde_json::json!({
            "id": 1000 + number,
            "number": number,
            "state": "open",
            "title": format!("Change #{}", number),
            "html_url": format!("https://github.com/{}/pull/{}", repo, number),
            "user": {"login": "author", "id": 1}
        })
    }

    #[test]
    fn api_base_for_default_domain() {
        assert_eq!(api_base("api.github.com"), "https://api.github.com");
    }

    #[test]
    fn api_base_for_enterprise_domain() {
        assert_eq!(api_base("git.example.com"), "https://git.example.com/api/v3");
    }

    #[test]
    fn basic_auth_header_encodes_credentials() {
        // base64("user:pass") == "dXNlcjpwYXNz"
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
    }

    #[tokio::test]
    async fn test_list_open_pulls() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .and(header("Accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_pull("acme/widget", 7),
                mock_pull("acme/widget", 9)
            ])))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let links = client.list_open_pulls(&repo("acme/widget")).unwrap();

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].as_str(), "https://github.com/acme/widget/pull/7");
        assert_eq!(links[1].as_str(), "https://github.com/acme/widget/pull/9");
    }

    #[tokio::test]
    async fn test_list_open_pulls_empty() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let links = client.list_open_pulls(&repo("acme/widget")).unwrap();

        assert!(links.is_empty());
    }

    #[tokio::test]
    async fn test_basic_auth_header_is_sent() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/private/pulls"))
            .and(header("Authorization", "Basic dXNlcjpwYXNz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), Some(("user", "pass")));
        let result = client.list_open_pulls(&repo("acme/private"));

        // The mock only matches when the header is present
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_collect_preserves_repository_order() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                mock_pull("acme/widget", 1),
                mock_pull("acme/widget", 2)
            ])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/orbit/gizmo/pulls"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([mock_pull("orbit/gizmo", 5)])))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let links = client
            .collect_open_pulls(&[repo("acme/widget"), repo("orbit/gizmo")])
            .unwrap();

        let urls: Vec<&str> = links.iter().map(|l| l.as_str()).collect();
        assert_eq!(
            urls,
            vec![
                "https://github.com/acme/widget/pull/1",
                "https://github.com/acme/widget/pull/2",
                "https://github.com/orbit/gizmo/pull/5"
            ]
        );
    }

    #[tokio::test]
    async fn test_collect_aborts_on_first_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([mock_pull("acme/widget", 1)])))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/missing/pulls"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Not Found"
            })))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let result = client.collect_open_pulls(&[repo("acme/widget"), repo("acme/missing")]);

        match result {
            Err(FetchError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Not Found");
            }
            other => panic!("expected 404 API error, got {:?}", other.map(|l| l.len())),
        }
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/private/pulls"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "message": "Requires authentication"
            })))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let result = client.list_open_pulls(&repo("acme/private"));

        assert!(matches!(result, Err(FetchError::Unauthorized)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/repos/acme/widget/pulls"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let client = PullsClient::with_base_url(&mock_server.uri(), None);
        let result = client.list_open_pulls(&repo("acme/widget"));

        assert!(result.is_err());
    }
}
