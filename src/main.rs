use anyhow::Context;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use payment_context::domain::billing::{CreateSubscriptionCommand, DocumentType, SubscriptionDetails};
use payment_context::infrastructure::{InMemoryStudentRepository, LoggingEmailService};
use payment_context::{SubscriptionConfig, SubscriptionHandler};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=debug payment_context command.json
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,payment_context=debug")),
        )
        .init();

    tracing::info!("🚀 Starting subscription registration");

    // === 1. Configuration ===
    let config = SubscriptionConfig::from_env()?;
    tracing::debug!(
        subscription_months = config.subscription_months,
        email_attempts = config.email_retry.max_attempts,
        "Configuration loaded"
    );

    // === 2. Adapters + handler ===
    let repository = Arc::new(InMemoryStudentRepository::new());
    let mailer = Arc::new(LoggingEmailService::new());
    let handler = SubscriptionHandler::new(repository.clone(), mailer.clone()).with_config(config);

    // === 3. Commands: from a JSON file, or a demo pair ===
    let commands = match std::env::args().nth(1) {
        Some(path) => load_commands(&path)?,
        None => demo_commands(),
    };

    for command in commands {
        let result = handler.handle(command).await?;
        if result.success {
            tracing::info!(message = %result.message, "✅ Command succeeded");
        } else {
            tracing::warn!(message = %result.message, "❌ Command failed");
        }
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    tracing::info!(
        students = repository.len().await,
        emails = mailer.outbox().await.len(),
        "🎉 Done"
    );
    tracing::debug!(students = %repository.snapshot().await?, "Repository contents");

    Ok(())
}

/// Accepts a single command object or an array of them
fn load_commands(path: &str) -> anyhow::Result<Vec<CreateSubscriptionCommand>> {
    let raw = std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
    let value: serde_json::Value = serde_json::from_str(&raw).with_context(|| format!("Invalid JSON in {path}"))?;

    let commands: Vec<CreateSubscriptionCommand> = match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?,
        single => vec![serde_json::from_value(single)?],
    };

    Ok(commands)
}

/// A valid boleto registration followed by one reusing the same document
fn demo_commands() -> Vec<CreateSubscriptionCommand> {
    let details = SubscriptionDetails {
        first_name: "Bruce".to_string(),
        last_name: "Wayne".to_string(),
        document: "53020223385".to_string(),
        email: "batman@dc.com".to_string(),
        paid_date: Utc::now(),
        expire_date: Utc::now() + Duration::days(30),
        total: Decimal::new(6000, 2),
        total_paid: Decimal::new(6000, 2),
        payer: "WAYNE CORP".to_string(),
        payer_document: "12345678000199".to_string(),
        payer_document_type: DocumentType::Cnpj,
        payer_email: "finance@wayne.com".to_string(),
        street: "Rua 1".to_string(),
        number: "99".to_string(),
        neighborhood: "Vila Xavier".to_string(),
        city: "Araraquara".to_string(),
        state: "SP".to_string(),
        country: "BR".to_string(),
        zip_code: "14800000".to_string(),
    };

    let mut duplicate = details.clone();
    duplicate.email = "bruce@wayne.com".to_string();

    vec![
        CreateSubscriptionCommand::boleto(details, "34191790010104351004791020150008291070026000", "1004791"),
        CreateSubscriptionCommand::paypal(duplicate, "PAYID-12345678"),
    ]
}
