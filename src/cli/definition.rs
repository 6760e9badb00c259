//! Top-level clap definition

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Categorized todo lists for the terminal
///
/// Options go first. The first remaining token may be `-CATEGORY`; then comes
/// a command and its arguments (see `todo help`).
#[derive(Parser, Debug)]
#[command(name = "todo", version)]
#[command(override_usage = "todo [OPTIONS] [-CATEGORY] [COMMAND [ARGS...]]")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Task file (defaults to ~/.todo.yaml)
    #[arg(long, env = "TODO_FILE", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to ~/.config/todo/config.toml)
    #[arg(long, env = "TODO_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Listing a missing category prints a notice instead of failing
    #[arg(long)]
    pub lenient: bool,

    /// Output as JSON (list, categories, top)
    #[arg(long)]
    pub json: bool,

    /// Print a completion script for the given shell
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    version: Option<bool>,

    /// [-CATEGORY] [COMMAND [ARGS...]]
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_category_selector_is_positional() {
        let cli = Cli::try_parse_from(["todo", "-work", "add", "ship", "it"]).unwrap();
        assert_eq!(cli.args, vec!["-work", "add", "ship", "it"]);
    }

    #[test]
    fn test_short_h_is_a_category() {
        let cli = Cli::try_parse_from(["todo", "-h"]).unwrap();
        assert_eq!(cli.args, vec!["-h"]);
    }

    #[test]
    fn test_options_before_category() {
        let cli =
            Cli::try_parse_from(["todo", "--json", "--file", "/tmp/t.yaml", "-home"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/t.yaml")));
        assert_eq!(cli.args, vec!["-home"]);
    }

    #[test]
    fn test_flags_after_command_are_task_text() {
        let cli = Cli::try_parse_from(["todo", "add", "--json", "is", "text"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.args, vec!["add", "--json", "is", "text"]);
    }
}
