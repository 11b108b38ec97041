use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cafe_orders::config::{CafeConfig, CliArgs};
use cafe_orders::console::MainMenu;
use cafe_orders::domain::beverage::MenuBeverageFactory;
use cafe_orders::domain::order::OrderService;
use cafe_orders::domain::pricing::PricingStrategies;
use cafe_orders::messaging::{ConsoleOrderObserver, InMemoryOrderAnalytics, SimpleOrderEventPublisher};
use cafe_orders::metrics::OrderMetrics;

fn main() -> anyhow::Result<()> {
    let config = CafeConfig::from_args(CliArgs::parse());

    // Logs go to stderr so the menu on stdout stays readable.
    // Default is warn; override with RUST_LOG or --log-filter,
    // e.g. RUST_LOG=cafe_orders=debug
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .init();

    tracing::info!(
        console_observer = config.console_observer,
        analytics = config.analytics,
        metrics = config.metrics,
        receipt_format = %config.receipt_format,
        "Starting café console"
    );

    // === Subscribers, in delivery order ===
    let mut publisher = SimpleOrderEventPublisher::empty();

    if config.console_observer {
        publisher.subscribe(Arc::new(ConsoleOrderObserver::new()));
    }

    let analytics = config.analytics.then(|| Arc::new(InMemoryOrderAnalytics::new()));
    if let Some(analytics) = &analytics {
        publisher.subscribe(analytics.clone());
    }

    let metrics = if config.metrics {
        Some(Arc::new(OrderMetrics::new()?))
    } else {
        None
    };
    if let Some(metrics) = &metrics {
        publisher.subscribe(metrics.clone());
    }

    // === Order service with shared pricing strategies ===
    let service = OrderService::new(MenuBeverageFactory::new(), PricingStrategies::new())
        .with_publisher(Arc::new(publisher));

    let stdin = io::stdin();
    let mut menu = MainMenu::new(service, stdin.lock(), io::stdout())
        .with_receipt_format(config.receipt_format);
    if let Some(analytics) = analytics {
        menu = menu.with_analytics(analytics);
    }
    if let Some(metrics) = metrics {
        menu = menu.with_metrics(metrics);
    }

    menu.run()?;

    tracing::info!("Café console stopped");
    Ok(())
}
