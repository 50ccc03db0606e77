//! `urlencoder` CLI — percent-encode and decode text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Encode arguments (joined with spaces)
//! urlencoder encode "a test &"            # a%20test%20%26
//!
//! # Keep some characters unescaped
//! urlencoder encode --safe "=?" "?q=a b"  # ?q=a%20b
//!
//! # Decode from stdin
//! echo 'a%20test%20%26' | urlencoder decode
//!
//! # File to file
//! urlencoder encode -i raw.txt -o encoded.txt
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "urlencoder",
    version,
    about = "Percent-encode and decode URL components (RFC 3986)",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Percent-encode text
    Encode {
        #[command(flatten)]
        args: IoArgs,
        /// Extra characters to leave unescaped (e.g. "=?&")
        #[arg(short, long, default_value = "")]
        safe: String,
    },
    /// Decode percent-encoded text
    Decode {
        #[command(flatten)]
        args: IoArgs,
    },
}

#[derive(Args)]
struct IoArgs {
    /// Text to process; multiple values are joined with a space
    #[arg(conflicts_with = "input")]
    text: Vec<String>,
    /// Input file (reads from stdin if neither TEXT nor --input is given)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { args, safe } => {
            let text = read_input(&args)?;
            let encoded = urlencoder::encode_with(&text, safe.as_str());
            write_output(args.output.as_deref(), &encoded)?;
        }
        Commands::Decode { args } => {
            let text = read_input(&args)?;
            let decoded = urlencoder::decode(&text).context("Failed to decode input")?;
            write_output(args.output.as_deref(), &decoded)?;
        }
    }

    Ok(())
}

/// Resolve the text to process: positional arguments first, then `--input`,
/// then stdin. One trailing line terminator is dropped from file/stdin input.
fn read_input(args: &IoArgs) -> Result<String> {
    if !args.text.is_empty() {
        return Ok(args.text.join(" "));
    }
    let raw = match args.input.as_deref() {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    Ok(strip_line_ending(raw))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
