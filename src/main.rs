use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use frontdesk::config::AppConfig;
use frontdesk::models::Transcript;
use frontdesk::services::ai::ollama::OllamaProvider;
use frontdesk::services::ai::openai::OpenAiProvider;
use frontdesk::services::ai::LlmProvider;
use frontdesk::services::conversation;
use frontdesk::services::ledger::{final_report, Ledger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let llm: Box<dyn LlmProvider> = match config.llm_provider.as_str() {
        "ollama" => {
            tracing::info!(
                "using Ollama provider (url: {}, model: {})",
                config.ollama_url,
                config.ollama_model
            );
            Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            ))
        }
        _ => {
            if config.openai_api_key.is_empty() {
                tracing::warn!(
                    "OPENAI_API_KEY is not set; reply requests will fail until it is configured"
                );
            } else {
                tracing::info!("using OpenAI provider (model: {})", config.openai_model);
            }
            Box::new(OpenAiProvider::new(
                config.openai_api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                config.openai_temperature,
            ))
        }
    };

    let mut transcript = Transcript::new();
    let mut ledger = Ledger::new();

    println!("Welcome to the Dental Clinic Assistant! Type 'exit' to end the conversation.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                println!("\nAgent: Goodbye!");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    println!("\nAgent: Goodbye!");
                    break;
                };
                if line.eq_ignore_ascii_case("exit") {
                    println!("Agent: Thank you! Have a great day!");
                    break;
                }
                let reply =
                    conversation::process_turn(llm.as_ref(), &mut transcript, &mut ledger, &line)
                        .await;
                println!("Agent: {reply}");
            }
        }
    }

    println!("\n{}", final_report(&ledger));

    Ok(())
}
