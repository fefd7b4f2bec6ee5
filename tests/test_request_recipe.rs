use fridge_chef::collector::{self, Input};
use fridge_chef::{FailureKind, RecipeRequester, RecipeResult, Session};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

fn requester(server: &ServerGuard) -> RecipeRequester {
    RecipeRequester::builder()
        .base_url(server.url())
        .build()
        .unwrap()
}

#[test]
fn test_one_request_with_exact_ingredients() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({
                "model": "llama3.2",
                "stream": false,
                "options": {"temperature": 0.7, "num_predict": 400}
            })),
            Matcher::Regex("eggs, spinach, chicken, tomatoes, cheese".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r##"{"response": "# Frittata\nPrep time: 10 min"}"##)
        .expect(1)
        .create();

    let query = collector::collect("eggs, spinach, chicken, tomatoes, cheese").unwrap();
    let result = requester(&server).request_recipe(&query);

    assert!(result.is_success());
    mock.assert();
}

#[test]
fn test_empty_input_issues_no_request() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .expect(0)
        .create();

    let requester = requester(&server);
    let mut session = Session::new(&requester);
    assert!(session.submit(&Input::from(""), |_| {}).is_none());

    mock.assert();
}

#[test]
fn test_success_is_trimmed() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"response": "  # Omelette\n...", "done": true}"#)
        .create();

    let query = collector::collect("eggs").unwrap();
    let result = requester(&server).request_recipe(&query);

    assert_eq!(result, RecipeResult::Success("# Omelette\n...".to_string()));
}

#[test]
fn test_blank_generation_is_empty_generation() {
    for body in [r#"{"response": ""}"#, r#"{"response": "   "}"#, r#"{"done": true}"#] {
        let mut server = Server::new();
        let _mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_body(body)
            .create();

        let query = collector::collect("eggs").unwrap();
        let result = requester(&server).request_recipe(&query);

        assert_eq!(result.kind(), Some(FailureKind::EmptyGeneration), "{}", body);
    }
}

#[test]
fn test_server_error_carries_status_and_body() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(500)
        .with_body("internal error")
        .create();

    let query = collector::collect("eggs").unwrap();
    let result = requester(&server).request_recipe(&query);

    match result {
        RecipeResult::Failure { kind, message } => {
            assert_eq!(kind, FailureKind::ServerError);
            assert!(message.contains("500"));
            assert!(message.contains("internal error"));
        }
        RecipeResult::Success(_) => panic!("Expected a failure"),
    }
}

#[test]
fn test_model_not_found_is_server_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("POST", "/api/generate")
        .with_status(404)
        .with_body(r#"{"error": "model \"llama3.2\" not found, try pulling it first"}"#)
        .create();

    let query = collector::collect("eggs").unwrap();
    let result = requester(&server).request_recipe(&query);

    assert_eq!(result.kind(), Some(FailureKind::ServerError));
    assert!(result.to_string().contains("try pulling it first"));
}

#[test]
fn test_repeat_calls_yield_same_kind() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r##"{"response": "# Soup"}"##)
        .expect(2)
        .create();

    let requester = requester(&server);
    let query = collector::collect("leeks, potatoes").unwrap();
    let first = requester.request_recipe(&query);
    let second = requester.request_recipe(&query);

    assert_eq!(first.kind(), second.kind());
    assert!(first.is_success() && second.is_success());
    mock.assert();
}
