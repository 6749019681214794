//! dss - OpenDSS text model converter
//!
//! # Usage
//!
//! ```bash
//! dss check ieee37.dss
//! dss roundtrip ieee37.dss -o ieee37_clean.dss
//! dss lift ieee37.dss -o ieee37.json --glm ieee37.glm
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use dss_tree::{
    config::{SyntaxConfig, COMMENT_MARKER, CONTINUATION_MARKER},
    dsl,
    error::Result,
    lift,
};
use tracing_subscriber::EnvFilter;

/// OpenDSS text model converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log stage summaries (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a file and report how many records it holds
    Check {
        #[command(flatten)]
        input: Input,
    },
    /// Parse a file and write it back one record per line
    Roundtrip {
        #[command(flatten)]
        input: Input,

        /// Output DSS file
        #[arg(short, long)]
        out: PathBuf,
    },
    /// Lift a file into a node/edge tree for visualization
    Lift {
        #[command(flatten)]
        input: Input,

        /// Output JSON file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Also write a GLM file
        #[arg(long)]
        glm: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct Input {
    /// Path to the DSS file
    #[arg(value_name = "DSS_FILE")]
    file: PathBuf,

    /// Comment marker
    #[arg(long, default_value_t = COMMENT_MARKER)]
    comment: char,

    /// Continuation marker
    #[arg(long, default_value_t = CONTINUATION_MARKER)]
    continuation: char,

    /// Keep the original letter case
    #[arg(long)]
    keep_case: bool,
}

impl Input {
    fn syntax(&self) -> SyntaxConfig {
        SyntaxConfig {
            comment_marker: self.comment,
            continuation_marker: self.continuation,
            lowercase: !self.keep_case,
        }
    }

    fn parse(&self) -> Result<dsl::DssTree> {
        dsl::parse_file_with(&self.file, &self.syntax())
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Check { input } => {
            let tree = input.parse()?;
            println!("{}: {} records", input.file.display(), tree.len());
        }
        Command::Roundtrip { input, out } => {
            let tree = input.parse()?;
            dsl::write_file(&tree, &out)?;
            println!("Wrote {}", out.display());
        }
        Command::Lift { input, out, glm } => {
            let tree = input.parse()?;
            let lifted = lift::lift(&tree)?;

            let skipped = lifted.unconverted().count();
            if skipped > 0 {
                eprintln!("{} of {} records not converted", skipped, lifted.len());
            }

            if let Some(path) = &glm {
                lift::write_glm(&lifted, path)?;
                eprintln!("Wrote {}", path.display());
            }

            match &out {
                Some(path) => {
                    lift::write_json(&lifted, path)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => println!("{}", lift::to_json_string(&lifted)?),
            }
        }
    }

    Ok(())
}
