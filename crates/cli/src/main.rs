//! Command Line Interface for the staking pool reward rate calculator.
use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use reward_rate_domain::prelude::*;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::{Level, debug, info};

const TVL_PROMPT: &str = "expected ETH TVL: ";
const APY_PROMPT: &str = "APY (e.g. 8 or 8%): ";

#[derive(Parser, Debug)]
#[command(name = "reward-rate")]
#[command(about = "Per-second reward rate for a staking pool addPool call", long_about = None)]
struct Cli {
    /// Expected TVL in ETH (prompted when omitted)
    #[arg(long, allow_hyphen_values = true)]
    tvl: Option<String>,

    /// APY, e.g. 8 or 8% (prompted when omitted)
    #[arg(long, allow_hyphen_values = true)]
    apy: Option<String>,

    /// Print the quote as JSON
    #[arg(long)]
    json: bool,

    /// Log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct QuoteReport<'a> {
    #[serde(flatten)]
    quote: &'a RewardRateQuote,
    add_pool_call: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&cli, stdin.lock(), stdout.lock())
}

fn init_tracing(verbose: u8) {
    // stdout carries only prompts and results
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(verbose))
        .init();
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

fn run<R: BufRead, W: Write>(cli: &Cli, mut input: R, mut output: W) -> Result<()> {
    let tvl_text = match &cli.tvl {
        Some(value) => value.clone(),
        None => prompt(&mut input, &mut output, TVL_PROMPT)?,
    };
    let tvl_eth = parse_base_units(&tvl_text).context("invalid TVL")?;

    let apy_text = match &cli.apy {
        Some(value) => value.clone(),
        None => prompt(&mut input, &mut output, APY_PROMPT)?,
    };
    let apy = Percentage::parse(&apy_text).context("invalid APY")?;
    debug!(tvl_eth, %apy, "Parsed inputs");

    let quote = RewardRateQuote::compute(tvl_eth, apy)?;
    info!(
        rate = %quote.reward_rate_wei_per_sec,
        "Reward rate ready"
    );

    if cli.json {
        writeln!(output, "{}", render_json(&quote)?)?;
    } else {
        write!(output, "{}", render_text(&quote))?;
    }
    output.flush()?;

    Ok(())
}

/// Writes `question` without a newline and reads one line of input.
///
/// EOF yields an empty string, which later fails to parse.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}

fn render_text(quote: &RewardRateQuote) -> String {
    format!(
        "tvl_wei: {}\nannual_rewards_wei: {}\nrewardRate (wei/sec): {}\n{}\n",
        quote.tvl_wei,
        quote.annual_rewards_wei,
        quote.reward_rate_wei_per_sec,
        quote.add_pool_call()
    )
}

fn render_json(quote: &RewardRateQuote) -> Result<String> {
    let report = QuoteReport {
        quote,
        add_pool_call: quote.add_pool_call(),
    };
    serde_json::to_string_pretty(&report).context("failed to serialize quote")
}
