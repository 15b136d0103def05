use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_INPUT: &str = "Data-20250728T195457Z-1-001/Data";
pub const DEFAULT_OUTPUT: &str = "extracted_data";

#[derive(Clone, Debug, Parser)]
#[command(name = "unbox", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Folder scanned for *.zip archives
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,
    /// Root under which each archive gets its own directory
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl App {
    pub fn config(&self) -> Config {
        Config {
            input: self.input.clone(),
            output: self.output.clone(),
        }
    }
}
