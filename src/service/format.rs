use std::process::ExitCode;

use colored::Colorize;

use crate::domain::Amount;

use super::ServiceResult;

pub(crate) struct FormatService;

const AMOUNT_LABEL: &str = "The amount to pay is: ";

impl FormatService {
    /// Reports the outcome of a run and maps it to the process exit code.
    pub fn run(res: ServiceResult) -> ExitCode {
        match res {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                Self::error(&err);
                ExitCode::FAILURE
            }
        }
    }

    pub fn amount(amount: Amount) {
        println!("{}", Self::amount_line(amount));
    }

    pub fn amount_line(amount: Amount) -> String {
        format!("{} {}", AMOUNT_LABEL, amount)
    }

    pub fn error(err: &anyhow::Error) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
    }
}
