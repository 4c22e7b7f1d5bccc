//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use super::{Command, Context};
use crate::cli::{Cli, CompletionsArgs, Shell};
use crate::error::CliResult;

const BIN_NAME: &str = "quire";

impl Command for CompletionsArgs {
    fn name(&self) -> &'static str {
        "completions"
    }

    fn execute(self, _ctx: &Context) -> CliResult<()> {
        let mut out = std::io::stdout();
        match self.shell {
            Shell::Bash => write_script(shells::Bash, &mut out),
            Shell::Zsh => write_script(shells::Zsh, &mut out),
            Shell::Fish => write_script(shells::Fish, &mut out),
            Shell::PowerShell => write_script(shells::PowerShell, &mut out),
            Shell::Elvish => write_script(shells::Elvish, &mut out),
        }
        Ok(())
    }
}

fn write_script<G: Generator>(shell: G, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
