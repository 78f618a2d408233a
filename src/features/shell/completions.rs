//! Shell completions generation.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FitcoachError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, FitcoachError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "fitcoach", &mut buf);
    String::from_utf8(buf).map_err(|e| FitcoachError::Config(format!("UTF-8 error: {e}")))
}

/// How to install the completion script for `shell`.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => "# Add to ~/.bashrc:\nsource <(fitcoach completions bash)\n".to_string(),
        Shell::Zsh => "# Save to your fpath:\n\
                       fitcoach completions zsh > ~/.zsh/completions/_fitcoach\n"
            .to_string(),
        Shell::Fish => "# Save to fish completions directory:\n\
                        fitcoach completions fish > ~/.config/fish/completions/fitcoach.fish\n"
            .to_string(),
        Shell::PowerShell => "# Add to your PowerShell profile ($PROFILE):\n\
                              fitcoach completions powershell | Out-String | Invoke-Expression\n"
            .to_string(),
        _ => format!("# Generate with: fitcoach completions {shell}\n"),
    }
}
