//! Terminal front end for the contact form.
//!
//! Drives the same [`ContactForm`] controller a browser form would, against a
//! running `portfolio-contact` server.
//!
//! # Usage
//!
//! ```bash
//! # Fill in the form interactively
//! cargo run --bin contact -- send
//!
//! # Prefill fields and skip the confirmation
//! cargo run --bin contact -- send --name "John Doe" --email john@example.com \
//!     --message "Hello!" -y
//!
//! # Check the server
//! cargo run --bin contact -- health
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACT_URL` (optional): base URL of the site (default: `http://localhost:3000`)

use portfolio_contact::client::view::FormFields;
use portfolio_contact::client::{ContactForm, FormView, HttpContactClient};
use portfolio_contact::domain::Field;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};

/// CLI for sending a portfolio contact message.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the site
    #[arg(long, env = "CONTACT_URL", default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Fill in and send the contact form
    Send {
        /// Your name
        #[arg(short, long)]
        name: Option<String>,

        /// Your email address
        #[arg(short, long)]
        email: Option<String>,

        /// Message text
        #[arg(short, long)]
        message: Option<String>,

        /// Skip confirmation prompts
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check the server health endpoint
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Send {
            name,
            email,
            message,
            yes,
        } => send(&cli.url, name, email, message, yes).await?,
        Commands::Health => health(&cli.url).await?,
    }

    Ok(())
}

/// Runs the form until it is sent or the user gives up.
///
/// # Flow
///
/// 1. Prefill fields from arguments
/// 2. Prompt for every empty field
/// 3. Submit; on validation errors re-prompt only the failing fields
/// 4. On a send failure offer a retry with the same values
async fn send(
    url: &str,
    name: Option<String>,
    email: Option<String>,
    message: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✉️  Contact".bright_blue().bold());
    println!();

    let transport = HttpContactClient::new(url);
    let mut form = ContactForm::new();

    for (field, value) in [
        (Field::Name, name),
        (Field::Email, email),
        (Field::Message, message),
    ] {
        if let Some(value) = value {
            form.update_field(field, value);
        }
    }

    let mut pending: Vec<Field> = Field::ALL
        .into_iter()
        .filter(|&field| form.value(field).is_empty())
        .collect();
    let mut confirmed = skip_confirm;

    loop {
        for field in pending.drain(..) {
            prompt_field(&mut form, field)?;
        }

        if !confirmed && form.validate().is_empty() {
            print_summary(&form);

            confirmed = Confirm::new()
                .with_prompt("Send this message?")
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", "❌ Cancelled".red());
                return Ok(());
            }
        }

        form.submit(&transport).await;

        let fields = match form.view() {
            FormView::Confirmation { title, body } => {
                println!();
                println!("{}", format!("✅ {title}").green().bold());
                println!("  {body}");
                println!();
                return Ok(());
            }
            FormView::Form(fields) => fields,
        };

        if !form.errors().is_empty() {
            print_field_errors(&fields);
            pending = form.errors().iter().map(|(field, _)| field).collect();
            continue;
        }

        if let Some(failure) = fields.failure_message {
            println!("{}", failure.red());
        }

        let retry = !skip_confirm
            && Confirm::new()
                .with_prompt("Try again?")
                .default(true)
                .interact()?;

        if !retry {
            anyhow::bail!("Message was not sent");
        }
    }
}

/// Prompts for one field, showing its current value as initial text.
fn prompt_field(form: &mut ContactForm, field: Field) -> Result<()> {
    let value: String = Input::new()
        .with_prompt(format!("{} ({})", field.label(), field.placeholder()))
        .with_initial_text(form.value(field))
        .allow_empty(true)
        .interact_text()?;

    form.update_field(field, value);
    Ok(())
}

fn print_field_errors(fields: &FormFields) {
    for view in &fields.fields {
        if let Some(error) = view.error {
            println!("  {} {}", format!("{}:", view.label).bright_white(), error.red());
        }
    }
}

fn print_summary(form: &ContactForm) {
    println!();
    println!("{}", "Message details:".bright_white().bold());
    println!("  Name:    {}", form.value(Field::Name).cyan());
    println!("  Email:   {}", form.value(Field::Email).cyan());
    println!("  Message: {}", form.value(Field::Message));
    println!();
}

/// Prints the server health report.
async fn health(url: &str) -> Result<()> {
    println!("{}", "🔌 Checking server...".bright_blue().bold());

    let response = reqwest::get(format!("{}/health", url.trim_end_matches('/')))
        .await
        .context("Failed to reach server")?;

    let status = response.status();
    let body: serde_json::Value = response
        .json()
        .await
        .context("Health response is not JSON")?;

    let provider = &body["checks"]["email_provider"];
    let line = format!(
        "  Email provider: {} ({})",
        provider["status"].as_str().unwrap_or("unknown"),
        provider["message"].as_str().unwrap_or("-")
    );

    if status.is_success() {
        println!("{}", "✅ Healthy".green().bold());
        println!("{}", line.bright_black());
    } else {
        println!("{}", format!("⚠️  Degraded ({status})").yellow().bold());
        println!("{}", line.yellow());
    }

    Ok(())
}
