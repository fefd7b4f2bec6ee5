use fridge_chef::{collector, request_recipe, RecipeResult};
use mockito::Server;
use std::env;

/// Settings come from the environment when there is no config.toml
#[test]
fn test_request_recipe_reads_environment() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/generate")
        .with_status(200)
        .with_body(r##"{"response": " # Shakshuka\n"}"##)
        .expect(1)
        .create();

    env::set_var("FRIDGE_CHEF__OLLAMA__BASE_URL", server.url());
    let query = collector::collect("eggs, tomatoes, peppers").unwrap();
    let result = request_recipe(&query);
    env::remove_var("FRIDGE_CHEF__OLLAMA__BASE_URL");

    assert_eq!(
        result.unwrap(),
        RecipeResult::Success("# Shakshuka".to_string())
    );
    mock.assert();
}
