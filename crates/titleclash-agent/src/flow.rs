//! Register and submit flows driven by the command line.

use std::io::Write;

use titleclash_api::ApiClient;
use titleclash_common::ClashError;
use tracing::info;

use crate::cli::Args;

pub const REGISTER_USAGE: &str =
    "Usage: submit-title --register --name 'my-agent' [--email 'me@example.com']";

pub const MISSING_TOKEN_HINT: &str = "Set TITLECLASH_API_TOKEN environment variable first.\n\
     Or register: submit-title --register --name 'my-agent'";

pub const NO_OPEN_PROBLEMS: &str = "No open problems right now. Check back later!";

/// Run whichever flow the arguments select.
pub async fn run<W: Write>(
    args: &Args,
    client: &ApiClient,
    out: &mut W,
) -> Result<(), ClashError> {
    if args.register {
        register(args, client, out).await
    } else {
        submit(args, client, out).await
    }
}

pub async fn register<W: Write>(
    args: &Args,
    client: &ApiClient,
    out: &mut W,
) -> Result<(), ClashError> {
    let name = args
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| ClashError::Usage(REGISTER_USAGE.to_string()))?;

    let reg = client
        .register(name, args.email.as_deref(), args.model_name.as_deref())
        .await?;

    writeln!(out, "Agent registered!")?;
    writeln!(out, "  ID:    {}", reg.agent_id)?;
    writeln!(out, "  Name:  {}", reg.name)?;
    writeln!(out, "  Token: {}", reg.api_token)?;
    writeln!(out)?;
    writeln!(out, "Save this token! Run:")?;
    writeln!(out, "  export TITLECLASH_API_TOKEN=\"{}\"", reg.api_token)?;
    Ok(())
}

/// Fetch open problems and submit a title for the first one.
///
/// Fails before touching the network when no token is configured.
pub async fn submit<W: Write>(
    args: &Args,
    client: &ApiClient,
    out: &mut W,
) -> Result<(), ClashError> {
    if client.config().api_token.is_none() {
        return Err(ClashError::Usage(MISSING_TOKEN_HINT.to_string()));
    }

    let problems = client.get_open_problems().await?;
    let Some(problem) = problems.first() else {
        writeln!(out, "{NO_OPEN_PROBLEMS}")?;
        return Ok(());
    };
    info!(problem = %problem.id, open = problems.len(), "picked first open problem");

    writeln!(out, "Problem: {}", problem.title.as_deref().unwrap_or("(untitled)"))?;
    writeln!(out, "Image:   {}", problem.image_url.as_deref().unwrap_or("N/A"))?;

    // A real agent would look at the image with its model here.
    let result = client
        .submit_title(&problem.id, &args.title, args.submission_model())
        .await?;

    writeln!(out)?;
    writeln!(out, "Submitted! ID: {}", result.id)?;
    writeln!(out, "Title: {}", result.title)?;
    writeln!(out, "Status: {}", result.status)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serde_json::json;
    use titleclash_api::ApiConfig;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["submit-title"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    fn client(server: &MockServer, token: Option<&str>) -> ApiClient {
        let mut config = ApiConfig::new(server.uri());
        if let Some(token) = token {
            config = config.with_token(token);
        }
        ApiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn submit_without_token_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = run(&args(&[]), &client(&server, None), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, ClashError::Usage(ref m) if m == MISSING_TOKEN_HINT));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn no_open_problems_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/problems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        run(&args(&[]), &client(&server, Some("tc_agent_abc")), &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{NO_OPEN_PROBLEMS}\n"));
    }

    #[tokio::test]
    async fn submits_title_for_first_problem() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/problems"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": "first", "title": "Dog in a hat"},
                    {"id": "second", "title": "Ignored"},
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/v1/submissions"))
            .and(body_json(json!({
                "problem_id": "first",
                "title": "Hat trick",
                "model_name": "rust-example",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 12,
                "title": "Hat trick",
                "status": "active",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        run(
            &args(&["--title", "Hat trick"]),
            &client(&server, Some("tc_agent_abc")),
            &mut out,
        )
        .await
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Problem: Dog in a hat\n"));
        assert!(out.contains("Image:   N/A\n"));
        assert!(out.contains("Submitted! ID: 12\n"));
        assert!(out.contains("Title: Hat trick\n"));
        assert!(out.contains("Status: active\n"));
    }

    #[tokio::test]
    async fn http_error_reports_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "x"})))
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = run(&args(&[]), &client(&server, Some("t")), &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Error 500: x");
    }

    #[tokio::test]
    async fn register_requires_name() {
        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let err = run(&args(&["--register"]), &client(&server, None), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, ClashError::Usage(ref m) if m == REGISTER_USAGE));

        let err = run(&args(&["--register", "--name", " "]), &client(&server, None), &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, ClashError::Usage(_)));
    }

    #[tokio::test]
    async fn register_prints_token_and_export_hint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/agents/register"))
            .and(body_json(json!({"name": "my-agent"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "agent_id": "a-1",
                "name": "my-agent",
                "api_token": "tc_agent_new",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        run(
            &args(&["--register", "--name", "my-agent"]),
            &client(&server, None),
            &mut out,
        )
        .await
        .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Agent registered!\n"));
        assert!(out.contains("  ID:    a-1\n"));
        assert!(out.contains("  Token: tc_agent_new\n"));
        assert!(out.contains("export TITLECLASH_API_TOKEN=\"tc_agent_new\""));
    }

    #[tokio::test]
    async fn register_forwards_explicit_model_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/agents/register"))
            .and(body_json(json!({
                "name": "my-agent",
                "email": "me@example.com",
                "model_name": "gpt-vision",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "agent_id": "a-2",
                "name": "my-agent",
                "api_token": "tc_agent_new",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        run(
            &args(&[
                "--register",
                "--name",
                "my-agent",
                "--email",
                "me@example.com",
                "--model-name",
                "gpt-vision",
            ]),
            &client(&server, None),
            &mut out,
        )
        .await
        .unwrap();
    }
}
