/// Shown by `/help` and when the chat starts.
pub const HELP: &str = "\
Type a question to ask about the loaded document.

Commands:
  /load <path>      load a .txt or .md file (replaces the current document)
  /preview          show the loaded document
  /clear            clear the chat history (keeps the document)
  /history [--json] print the chat history
  /key <api-key>    set the Anthropic API key for the following turns
  /help             show this help
  /quit             leave the chat";

/// One line of input to the interactive chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Anything not starting with `/`, passed to the session as-is.
    Ask(String),
    Load(String),
    Preview,
    Clear,
    History { json: bool },
    Key(String),
    Help,
    Quit,
    /// Unknown command or missing argument, with a message for the user.
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.trim_start().strip_prefix('/') else {
            return ReplCommand::Ask(line.to_string());
        };

        let (name, arg) = rest
            .split_once(char::is_whitespace)
            .map(|(name, arg)| (name, arg.trim()))
            .unwrap_or((rest.trim(), ""));

        match name {
            "load" | "open" if arg.is_empty() => {
                ReplCommand::Invalid("usage: /load <path>".to_string())
            }
            "load" | "open" => ReplCommand::Load(arg.to_string()),
            "preview" => ReplCommand::Preview,
            "clear" => ReplCommand::Clear,
            "history" => match arg {
                "" => ReplCommand::History { json: false },
                "--json" => ReplCommand::History { json: true },
                other => ReplCommand::Invalid(format!("unknown /history option: {other}")),
            },
            "key" if arg.is_empty() => ReplCommand::Invalid("usage: /key <api-key>".to_string()),
            "key" => ReplCommand::Key(arg.to_string()),
            "help" | "?" => ReplCommand::Help,
            "quit" | "exit" | "q" => ReplCommand::Quit,
            other => ReplCommand::Invalid(format!("unknown command: /{other} (try /help)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_are_questions() {
        assert_eq!(
            ReplCommand::parse("What is this about?"),
            ReplCommand::Ask("What is this about?".to_string())
        );
        assert_eq!(ReplCommand::parse("   "), ReplCommand::Ask("   ".to_string()));
    }

    #[test]
    fn commands_with_arguments() {
        assert_eq!(
            ReplCommand::parse("/load  docs/notes.md "),
            ReplCommand::Load("docs/notes.md".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/key sk-ant-123"),
            ReplCommand::Key("sk-ant-123".to_string())
        );
        assert_eq!(
            ReplCommand::parse("/history --json"),
            ReplCommand::History { json: true }
        );
    }

    #[test]
    fn bare_commands() {
        assert_eq!(ReplCommand::parse("/preview"), ReplCommand::Preview);
        assert_eq!(ReplCommand::parse("/clear"), ReplCommand::Clear);
        assert_eq!(ReplCommand::parse("/history"), ReplCommand::History { json: false });
        assert_eq!(ReplCommand::parse("/quit"), ReplCommand::Quit);
        assert_eq!(ReplCommand::parse("  /exit"), ReplCommand::Quit);
    }

    #[test]
    fn missing_arguments_and_unknown_commands_are_invalid() {
        assert!(matches!(ReplCommand::parse("/load"), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/key   "), ReplCommand::Invalid(_)));
        assert!(matches!(ReplCommand::parse("/frobnicate"), ReplCommand::Invalid(_)));
    }
}
