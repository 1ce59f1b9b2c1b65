use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

use super::ServiceResult;

pub(crate) struct CompletionService;

impl CompletionService {
    pub fn run(shell: Shell) -> ServiceResult {
        Self::write(shell, &mut std::io::stdout());
        Ok(())
    }

    fn write<W>(shell: Shell, out: &mut W)
    where
        W: Write,
    {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, out);
    }
}
