//! `todo help` text, rendered from the command table

use super::command::COMMANDS;

const USAGE_COL: usize = 26;

pub fn render() -> String {
    let mut out = String::from("Usage: todo [OPTIONS] [-CATEGORY] [COMMAND [ARGS...]]\n\n");
    out.push_str("Without a command, lists the selected category.\n\nCommands:\n");

    for spec in COMMANDS {
        let mut line = format!(
            "  {:<width$} {}",
            spec.usage,
            spec.summary,
            width = USAGE_COL
        );
        if !spec.aliases.is_empty() {
            line.push_str(&format!(" (aliases: {})", spec.aliases.join(", ")));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str("\nOptions (before the category):\n");
    out.push_str("  --file <PATH>             Task file (env TODO_FILE, default ~/.todo.yaml)\n");
    out.push_str("  --config <PATH>           Config file (env TODO_CONFIG)\n");
    out.push_str("  --lenient                 Listing a missing category is not an error\n");
    out.push_str("  --json                    JSON output for list, categories and top\n");
    out.push_str("  --completions <SHELL>     Print a shell completion script\n");
    out
}
