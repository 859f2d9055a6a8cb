use std::io::{self, Write};

use clap_complete::{generate, Shell};

use crate::app::AppError;

const BIN_NAME: &str = "daybook";

pub fn generate_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = crate::cli::styled_command();
    generate(shell, &mut cmd, BIN_NAME, buf);
}

fn resolve_shell(shell: Option<Shell>, shell_var: Option<&str>) -> Result<Shell, AppError> {
    shell
        .or_else(|| shell_var.and_then(Shell::from_shell_path))
        .ok_or_else(|| {
            AppError::InvalidArgument(
                "unable to detect shell from $SHELL; pass a shell name".to_string(),
            )
        })
}

pub fn run_completions_command(shell: Option<Shell>) -> Result<(), AppError> {
    let shell_var = std::env::var("SHELL").ok();
    let shell = resolve_shell(shell, shell_var.as_deref())?;
    let mut stdout = io::stdout().lock();
    generate_completions(shell, &mut stdout);
    Ok(())
}
