//! Handler for the `submit` command.

use crate::adapter::inbound::cli::command::SubmitArgs;
use crate::application::Telemetry;
use crate::domain::Order;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Validate, persist and publish one order, then print it as JSON.
///
/// Pending telemetry is flushed before returning, whether or not the
/// capture succeeded.
pub async fn execute(args: &SubmitArgs) -> Result<()> {
    let mut config = args.config.load()?;
    if args.json_logs {
        config.logging.format = "json".into();
    }
    config.init_logging();

    let order = build_order(args);
    order.validate()?;

    let telemetry = bootstrap::build_telemetry(&config);
    let order = capture_and_flush(&config, &telemetry, order).await?;

    println!("{}", serde_json::to_string_pretty(&order)?);
    Ok(())
}

async fn capture_and_flush(config: &Config, telemetry: &Telemetry, order: Order) -> Result<Order> {
    let result = capture(config, telemetry.clone(), order).await;
    telemetry.flush(config.telemetry.flush_timeout()).await;
    result
}

async fn capture(config: &Config, telemetry: Telemetry, order: Order) -> Result<Order> {
    config.environment.report();
    let capture = bootstrap::build_capture_with(config, telemetry)?;
    capture.start().await?;
    let order = capture.persist(order).await;
    capture.publish(&order).await?;
    Ok(order)
}

fn build_order(args: &SubmitArgs) -> Order {
    Order {
        preferred_language: args.language.clone(),
        total: args.total,
        source: args.source.clone(),
        status: args.status.clone(),
        ..Order::new(args.email.clone())
    }
}
