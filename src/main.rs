use clap::Parser;
use log::debug;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use fridge_chef::collector::{self, InputCollector, EMPTY_HINT};
use fridge_chef::providers::OllamaProvider;
use fridge_chef::{
    PlannerConfig, PlannerError, RecipeRequester, RequestState, Session, ERROR_MARKER,
};

/// Turn the ingredients in your fridge into a recipe using a local Ollama model
#[derive(Parser)]
#[command(name = "fridge-chef")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma-separated ingredients; reads one list per line from stdin when omitted
    ingredients: Vec<String>,

    /// Model to ask (overrides the config file)
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama server address (overrides the config file)
    #[arg(long)]
    url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Path to a TOML config file (default: ./config.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check that the server is up and the model is pulled, then exit
    #[arg(long)]
    check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, PlannerError> {
    let mut config = match &cli.config {
        Some(path) => PlannerConfig::load_from(path)?,
        None => PlannerConfig::load()?,
    };
    if let Some(model) = cli.model {
        config.ollama.model = model;
    }
    if let Some(url) = cli.url {
        config.ollama.base_url = url;
    }
    if let Some(timeout) = cli.timeout {
        config.ollama.timeout = timeout;
    }
    debug!("{:#?}", config);

    if cli.check {
        return check(&OllamaProvider::new(&config.ollama)?);
    }

    let requester = RecipeRequester::builder()
        .from_config(&config.ollama)
        .build()?;
    let mut session = Session::new(&requester);
    let model = config.ollama.model.as_str();

    if !cli.ingredients.is_empty() {
        let Some(query) = collector::from_args(&cli.ingredients) else {
            println!("{}", EMPTY_HINT);
            return Ok(ExitCode::SUCCESS);
        };
        println!("{}", collector::echo(&query));
        let succeeded = session
            .submit(&query.into(), |state| announce(state, model))
            .is_some_and(|result| {
                println!("{}", result);
                result.is_success()
            });
        return Ok(if succeeded {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    println!("What ingredients do you have in your fridge?");
    println!("(e.g., eggs, spinach, chicken, tomatoes, cheese)");
    prompt()?;
    for input in InputCollector::new(io::stdin().lock()) {
        let input = match input {
            Ok(input) => input,
            Err(e) if e.is_invalid_input() => {
                eprintln!("{}{}", ERROR_MARKER, e);
                prompt()?;
                continue;
            }
            Err(e) => return Err(e),
        };
        match input.query() {
            Some(query) => println!("{}", collector::echo(query)),
            None => println!("{}", EMPTY_HINT),
        }
        if let Some(result) = session.submit(&input, |state| announce(state, model)) {
            println!("{}\n", result);
        }
        prompt()?;
    }

    Ok(ExitCode::SUCCESS)
}

fn check(provider: &OllamaProvider) -> Result<ExitCode, PlannerError> {
    match provider.has_model() {
        Ok(true) => {
            println!(
                "Ollama is running at {} and '{}' is available.",
                provider.base_url(),
                provider.model()
            );
            Ok(ExitCode::SUCCESS)
        }
        Ok(false) => {
            println!(
                "Model '{}' not found. Pull it with: ollama pull {}",
                provider.model(),
                provider.model()
            );
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            println!("{}{}", ERROR_MARKER, e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn announce(state: &RequestState, model: &str) {
    if let RequestState::Requesting = state {
        eprintln!("Cooking up a recipe with {}...", model);
    }
}

fn prompt() -> Result<(), PlannerError> {
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
