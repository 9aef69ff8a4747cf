//! Playground CLI - Run and compare prompts from the terminal
//!
//! Thin client over the Prompt Playground HTTP API.

mod api;
mod config;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{GenerateRequest, PlaygroundClient};
use config::Config;
use playground::{Prompt, PromptType, Response};

#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Prompt Playground CLI - run and compare prompts", long_about = None)]
#[command(version)]
struct Cli {
    /// Server URL (overrides config)
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send a prompt to a model (optionally compare with a second model)
    Generate {
        /// Prompt text
        prompt: String,
        /// Strategy: zero-shot, few-shot, chain-of-thought
        #[arg(short = 't', long)]
        r#type: Option<PromptType>,
        /// Model identifier (e.g., "openai/gpt-4o-mini")
        #[arg(short, long)]
        model: Option<String>,
        /// Second model to compare against
        #[arg(short, long)]
        compare: Option<String>,
        /// Temperature (0.0-1.0)
        #[arg(long)]
        temperature: Option<f64>,
        /// Maximum tokens (1-4000)
        #[arg(long)]
        max_tokens: Option<u32>,
        /// Print the raw upstream metadata too
        #[arg(long)]
        verbose: bool,
    },

    /// Show recent prompts
    Recent {
        /// Max results
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show the responses stored for a prompt
    Responses {
        /// Prompt ID
        prompt_id: i32,
    },

    /// Check that the server is reachable
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// base_url, default_model, default_prompt_type, temperature, max_tokens
        key: String,
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let base_url = cli.url.clone().unwrap_or_else(|| config.base_url.clone());

    match cli.command {
        Commands::Generate {
            prompt,
            r#type,
            model,
            compare,
            temperature,
            max_tokens,
            verbose,
        } => {
            let request = GenerateRequest {
                prompt,
                prompt_type: r#type.unwrap_or(config.default_prompt_type),
                model: model.unwrap_or_else(|| config.default_model.clone()),
                temperature: temperature.unwrap_or(config.temperature),
                max_tokens: max_tokens.unwrap_or(config.max_tokens),
                compare_model: compare,
            };
            cmd_generate(&base_url, request, verbose).await
        }
        Commands::Recent { limit } => cmd_recent(&base_url, limit).await,
        Commands::Responses { prompt_id } => cmd_responses(&base_url, prompt_id).await,
        Commands::Health => cmd_health(&base_url).await,
        Commands::Config { action } => cmd_config(config, action),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_generate(base_url: &str, request: GenerateRequest, verbose: bool) -> Result<()> {
    let client = PlaygroundClient::new(base_url);

    println!(
        "{} {} via {}",
        "→".cyan(),
        request.prompt_type.to_string().yellow(),
        request.model.bold()
    );

    let result = client.generate(&request).await?;

    println!("{} Prompt #{}", "✓".green(), result.prompt_id);
    print_response(&result.primary_response, verbose);
    if let Some(compare) = &result.compare_response {
        print_response(compare, verbose);
    }

    Ok(())
}

async fn cmd_recent(base_url: &str, limit: usize) -> Result<()> {
    let client = PlaygroundClient::new(base_url);
    let prompts = client.recent_prompts(limit).await?;

    if prompts.is_empty() {
        println!("{}", "No prompts yet.".dimmed());
        return Ok(());
    }

    for prompt in &prompts {
        print_prompt_line(prompt);
    }

    Ok(())
}

async fn cmd_responses(base_url: &str, prompt_id: i32) -> Result<()> {
    let client = PlaygroundClient::new(base_url);
    let responses = client.prompt_responses(prompt_id).await?;

    if responses.is_empty() {
        println!("{}", format!("No responses for prompt #{}.", prompt_id).dimmed());
        return Ok(());
    }

    for response in &responses {
        print_response(response, false);
    }

    Ok(())
}

async fn cmd_health(base_url: &str) -> Result<()> {
    let client = PlaygroundClient::new(base_url);
    print!("Checking {}... ", base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Playground API at {}", base_url);
        }
    }
}

fn cmd_config(mut config: Config, action: Option<ConfigAction>) -> Result<()> {
    match action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            println!("{}", "Configuration".bold());
            println!("  Path:        {:?}", Config::config_path()?);
            println!("  Server:      {}", config.base_url);
            println!("  Model:       {}", config.default_model);
            println!("  Prompt type: {}", config.default_prompt_type);
            println!("  Temperature: {}", config.temperature);
            println!("  Max tokens:  {}", config.max_tokens);
        }
        ConfigAction::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("{} {} = {}", "✓".green(), key, value);
        }
    }
    Ok(())
}

// ============================================
// Output helpers
// ============================================

fn print_prompt_line(prompt: &Prompt) {
    println!(
        "{} {} {} {}",
        format!("#{}", prompt.id).bold(),
        format!("[{}]", prompt.prompt_type).yellow(),
        prompt.model.cyan(),
        prompt.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
    );
    println!("    {}", truncate(&prompt.content, 80));
}

fn print_response(response: &Response, verbose: bool) {
    println!(
        "\n{} {}  {}",
        "■".blue(),
        response.model.bold(),
        format!(
            "{} ms · ${:.6}",
            response.duration,
            micro_dollars_to_usd(response.cost)
        )
        .dimmed()
    );
    println!("{}", response.content);

    if verbose {
        if let Ok(pretty) = serde_json::to_string_pretty(&response.metadata) {
            println!("{}", pretty.dimmed());
        }
    }
}

fn micro_dollars_to_usd(micro: i64) -> f64 {
    micro as f64 / 1_000_000.0
}

fn truncate(text: &str, max_chars: usize) -> String {
    let single_line = text.replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let head: String = single_line.chars().take(max_chars).collect();
        format!("{head}…")
    }
}
