use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{config::parse_endpoint_url, load_settings, HttpTicketTransport, LotteryController};
use shared::domain::Ticket;

#[derive(Parser, Debug)]
#[command(about = "Pick Powerball numbers and submit the ticket")]
struct Args {
    /// Shared access password.
    #[arg(long)]
    password: String,
    #[arg(long)]
    name: String,
    /// Five main numbers, comma separated.
    #[arg(long, value_delimiter = ',', num_args = 1.., conflicts_with = "quick_pick")]
    numbers: Vec<u8>,
    #[arg(long, conflicts_with = "quick_pick")]
    powerball: Option<u8>,
    /// Let the client pick all numbers.
    #[arg(long)]
    quick_pick: bool,
    #[arg(long)]
    endpoint_url: Option<String>,
    /// Request timeout in seconds, at least 1.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
}

fn fill_ticket(controller: &mut LotteryController, args: &Args) -> Result<()> {
    controller.set_player_name(args.name.as_str());
    if args.quick_pick {
        let pick = controller.quick_pick();
        tracing::debug!(?pick, "quick pick");
        return Ok(());
    }

    // Explicit numbers are checked up front so typos are reported instead of
    // silently toggled away.
    let ticket = Ticket::new(&args.name, &args.numbers, args.powerball)?;
    for &number in ticket.main_numbers() {
        controller.toggle_primary(number);
    }
    controller.toggle_secondary(ticket.powerball());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings()?;
    if let Some(raw) = &args.endpoint_url {
        settings.endpoint_url = parse_endpoint_url(raw)?;
    }
    if let Some(secs) = args.timeout_secs {
        settings.request_timeout = Duration::from_secs(secs);
    }

    let mut controller = LotteryController::new(settings.access_password.clone());
    if !controller.gate_mut().unlock(&args.password) {
        bail!("{}", controller.gate().error_message());
    }

    fill_ticket(&mut controller, &args)?;
    let selection = &controller.state().selection;
    println!(
        "Ticket: {:?} + Powerball {}",
        selection.primary(),
        selection
            .secondary()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string())
    );

    let transport = HttpTicketTransport::new(settings.endpoint_url, settings.request_timeout)
        .context("failed to prepare ticket transport")?;
    tracing::info!(endpoint = %transport.endpoint_url(), "submitting ticket");

    match controller.submit(&transport).await {
        Ok(()) => {
            println!("{}", controller.state().submission.message());
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_numbers() {
        let args = Args::try_parse_from([
            "lottery",
            "--password",
            "powerball",
            "--name",
            "Alice",
            "--numbers",
            "5,4,3,2,1",
            "--powerball",
            "10",
        ])
        .expect("args");
        assert_eq!(args.numbers, vec![5, 4, 3, 2, 1]);

        let mut controller = LotteryController::new("powerball");
        fill_ticket(&mut controller, &args).expect("fill");
        assert_eq!(controller.state().selection.primary(), &[1, 2, 3, 4, 5]);
        assert_eq!(controller.state().selection.secondary(), Some(10));
    }

    #[test]
    fn quick_pick_conflicts_with_numbers() {
        let result = Args::try_parse_from([
            "lottery",
            "--password",
            "x",
            "--name",
            "Alice",
            "--numbers",
            "1,2,3,4,5",
            "--quick-pick",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quick_pick_fills_complete_selection() {
        let args = Args::try_parse_from([
            "lottery",
            "--password",
            "x",
            "--name",
            "Alice",
            "--quick-pick",
        ])
        .expect("args");
        let mut controller = LotteryController::new("x");
        fill_ticket(&mut controller, &args).expect("fill");
        assert!(controller.state().selection.is_complete());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let base = ["lottery", "--password", "x", "--name", "Alice", "--quick-pick"];
        let result = Args::try_parse_from(base.iter().copied().chain(["--timeout-secs", "0"]));
        assert!(result.is_err());

        let args = Args::try_parse_from(base.iter().copied().chain(["--timeout-secs", "3"]))
            .expect("args");
        assert_eq!(args.timeout_secs, Some(3));
    }

    #[test]
    fn duplicate_numbers_are_reported() {
        let args = Args::try_parse_from([
            "lottery",
            "--password",
            "x",
            "--name",
            "Alice",
            "--numbers",
            "1,1,2,3,4",
            "--powerball",
            "3",
        ])
        .expect("args");
        let mut controller = LotteryController::new("x");
        let err = fill_ticket(&mut controller, &args).expect_err("duplicate");
        assert!(err.to_string().contains("more than once"));
    }
}
