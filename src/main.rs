//! emojify - turn text into emoji from the command line.
//!
//! ```text
//! emojify [--config <file>] [--json] <text...>
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use emojify::{Emojify, EmojifyConfig, Prediction};
use tracing_subscriber::EnvFilter;

/// Turn text into emoji
#[derive(Parser, Debug)]
#[command(name = "emojify")]
#[command(about = "Map text to emoji: exact lookup, then word-embedding similarity")]
struct Cli {
    /// YAML config file (default: ./emojify.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,

    /// Text to emojify; multiple arguments are joined with spaces
    #[arg(required = true)]
    text: Vec<String>,
}

fn init_tracing(cfg: &EmojifyConfig) {
    let filter = EnvFilter::try_from_env("EMOJIFY_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cfg.log_json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let cfg = EmojifyConfig::load(args.config.as_deref()).context("loading configuration")?;
    init_tracing(&cfg);

    let emojify = Emojify::from_config(&cfg).context("building emoji matcher")?;
    let prediction = emojify.predict(&args.text.join(" "))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }

    match prediction {
        Prediction::Matched(result) => {
            let codes: Vec<&str> = result
                .unicode_sequence
                .iter()
                .map(|code| code.as_deref().unwrap_or("-"))
                .collect();
            println!(
                "{}\t{}\t{:.4}",
                result.emoji_sequence,
                codes.join(" "),
                result.confidence
            );
        }
        Prediction::Fallback(text) => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_joins_text() {
        let argv = ["emojify", "-c", "cfg.yaml", "--json", "I", "am", "happy"];
        let cli = Cli::try_parse_from(argv).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.yaml")));
        assert!(cli.json);
        assert_eq!(cli.text.join(" "), "I am happy");
    }

    #[test]
    fn unknown_flag_is_rejected_not_treated_as_text() {
        let err = Cli::try_parse_from(["emojify", "--jsno", "happy"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn text_is_required() {
        let err = Cli::try_parse_from(["emojify", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
