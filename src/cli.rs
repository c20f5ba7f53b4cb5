//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prompt_kit::config::{DEFAULT_PATTERN, DEFAULT_ROOT, ROOT_ENV_VAR};

/// prompt-kit - prompt library tooling
///
/// Load prompt documents and validate their YAML front matter.
#[derive(Parser, Debug)]
#[command(
    name = "prompt-kit",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Load and validate prompt library documents",
    long_about = "prompt-kit loads prompt documents (markdown with YAML front matter) and \
                  validates that every prompt declares id, role and owner, with a versioned id. \
                  Running without a subcommand validates the prompt root.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  prompt-kit\n    \
                  prompt-kit validate --root ./prompts\n    \
                  prompt-kit show system/review.md --json\n    \
                  echo '{\"hook_event_name\":\"Stop\"}' | prompt-kit hook-message"
)]
pub struct Cli {
    /// Prompt root directory
    #[arg(long, short = 'r', global = true, env = ROOT_ENV_VAR, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate front matter of every prompt under the root (default)
    Validate(ValidateArgs),

    /// Load a prompt and print its metadata and body
    Show(ShowArgs),

    /// Print the notification message for a hook payload read from stdin
    HookMessage,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate ./prompts:\n    prompt-kit validate\n\n\
                  Validate another root:\n    prompt-kit validate --root library/prompts\n\n\
                  Validate only .prompt files:\n    prompt-kit validate --pattern '**/*.prompt'")]
pub struct ValidateArgs {
    /// Glob selecting prompt files, relative to the root
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}

impl Default for ValidateArgs {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a prompt:\n    prompt-kit show system/review.md\n\n\
                  Show as JSON:\n    prompt-kit show system/review.md --json")]
pub struct ShowArgs {
    /// Prompt path relative to the root
    pub path: PathBuf,

    /// Print a single JSON object instead of YAML and body
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(value_name = "SHELL")]
    pub shell: String,
}
