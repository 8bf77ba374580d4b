// src/main.rs - headless signup client
#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::{Parser, Subcommand};
    use newsletter_signup::dom::{MemoryField, MemoryPanel, MemorySubmitEvent, Panel};
    use newsletter_signup::{templates, Config, HttpSignupClient, SignupFormController, SubmitOutcome};
    use tracing_subscriber::EnvFilter;

    #[derive(Parser)]
    #[command(name = "newsletter-signup", about = "Submit the newsletter signup form without a browser")]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Subcommand)]
    enum Command {
        /// Fill in the form and submit it to the configured endpoint
        Submit {
            #[arg(long, default_value = "")]
            first_name: String,
            #[arg(long, default_value = "")]
            last_name: String,
            #[arg(long, default_value = "")]
            email: String,
        },
        /// Print the signup page HTML
        Render {
            #[arg(long, default_value = templates::DEFAULT_SCRIPT_SRC)]
            script_src: String,
        },
    }

    pub async fn run() -> anyhow::Result<()> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(true)
            .with_level(true)
            .init();

        dotenvy::dotenv().ok();

        match Cli::parse().command {
            Command::Submit {
                first_name,
                last_name,
                email,
            } => submit(first_name, last_name, email).await,
            Command::Render { script_src } => {
                println!("{}", templates::signup::render_with_script(&script_src));
                Ok(())
            }
        }
    }

    async fn submit(first_name: String, last_name: String, email: String) -> anyhow::Result<()> {
        let config = Config::from_env()?;
        let client = HttpSignupClient::new(&config.base_url, &config.endpoint)?;

        tracing::info!("📨 Submitting signup to {}", client.endpoint());

        let first_name = MemoryField::new(first_name);
        let last_name = MemoryField::new(last_name);
        let email = MemoryField::new(email);
        let popup = MemoryPanel::new();

        let controller = SignupFormController::new(client, &first_name, &last_name, &email, &popup)
            .with_policy(config.resubmit_policy);

        let outcome = controller.on_submit(&MemorySubmitEvent::new()).await?;

        match outcome {
            SubmitOutcome::Confirmed(status) => println!("✓ Signup confirmed ({})", status),
            SubmitOutcome::Rejected(status) => println!("Signup not accepted ({})", status),
            SubmitOutcome::Skipped => {}
        }
        tracing::debug!(popup_visible = popup.is_visible(), "Submit settled");

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
