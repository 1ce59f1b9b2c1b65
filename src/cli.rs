use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::domain::parse_amount;

#[derive(Debug, Parser)]
#[command(name = "bill")]
#[command(version)]
#[command(about = "A CLI tool that calculates how much you need to pay for your bill.")]
pub struct Cli {
    /// The base amount of the bill.
    #[arg(value_name = "PRINCIPAL")]
    pub principal: Option<String>,

    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// The number of people to divide the splits among
    /// [default: 1, or num_people from the config file]
    #[arg(
        short = 'n',
        long = "numPeople",
        value_name = "INT8",
        allow_negative_numbers = true
    )]
    pub num_people: Option<i8>,

    /// Values to be split among n people. Example: -s 10,10,10
    #[arg(
        short = 's',
        long = "splits",
        value_name = "VALUES",
        value_delimiter = ',',
        value_parser = parse_split,
        allow_hyphen_values = true
    )]
    pub splits: Vec<f32>,

    /// Config file (default is $HOME/.bill.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print debug logs to stderr
    #[arg(long)]
    pub log: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,
}

fn parse_split(raw: &str) -> Result<f32, String> {
    parse_amount(raw).map_err(|reason| format!("parsing split {:?}: {}", raw, reason))
}
