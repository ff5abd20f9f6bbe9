use crate::config::TerminalConfig;
use crate::content::ContentStore;
use crate::format;
use crate::markup::escape_with_breaks;
use std::collections::BTreeMap;

/// The commands the terminal understands. Nothing is parsed: each variant
/// owns exactly one literal trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Whoami,
    Profile,
    Education,
    Experience,
    Skills,
    Certifications,
    Contact,
    All,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Whoami,
        Command::Profile,
        Command::Education,
        Command::Experience,
        Command::Skills,
        Command::Certifications,
        Command::Contact,
        Command::All,
    ];

    pub fn trigger(self) -> &'static str {
        match self {
            Command::Whoami => "whoami",
            Command::Profile => "cat profile.txt",
            Command::Education => "cat edu.txt",
            Command::Experience => "cat exp.txt",
            Command::Skills => "cat skills.txt",
            Command::Certifications => "cat certs.txt",
            Command::Contact => "cat contact.txt",
            Command::All => "whoami && cat *.txt",
        }
    }

    pub fn render(self, store: &ContentStore) -> String {
        match self {
            Command::Whoami => format::whoami(store.profile(), store.banners()),
            Command::Profile => format::profile(store.profile()),
            Command::Education => format::education(store.education()),
            Command::Experience => format::experience(store.experience()),
            Command::Skills => format::skills(store.skills()),
            Command::Certifications => format::certifications(store.certifications()),
            Command::Contact => format::contact(store.contact()),
            Command::All => format::all_info(store),
        }
    }
}

/// Navigation entries shown in the page chrome, each firing a command.
pub const MENU: [(&str, Command); 8] = [
    ("About", Command::Whoami),
    ("Profile", Command::Profile),
    ("Education", Command::Education),
    ("Experience", Command::Experience),
    ("Skills", Command::Skills),
    ("Certifications", Command::Certifications),
    ("Contact", Command::Contact),
    ("Everything", Command::All),
];

pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut r = CommandRegistry {
            commands: BTreeMap::new(),
        };
        for cmd in Command::ALL {
            r.commands.insert(cmd.trigger(), cmd);
        }
        r
    }

    /// Exact, case-sensitive match. No trimming, no globbing.
    pub fn lookup(&self, input: &str) -> Option<Command> {
        self.commands.get(input).copied()
    }

    pub fn complete(&self, partial: &str) -> Vec<&'static str> {
        self.commands
            .keys()
            .filter(|trigger| trigger.starts_with(partial))
            .copied()
            .collect()
    }
}

pub fn not_found(input: &str) -> String {
    escape_with_breaks(&format!("command not found: {}", input))
}

pub fn prompt(config: &TerminalConfig) -> String {
    format!("{}@{}:~$ ", config.user, config.host)
}

/// Previously issued commands with an up/down recall cursor.
#[derive(Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: &str) {
        if !command.is_empty() && self.entries.last().map(String::as_str) != Some(command) {
            self.entries.push(command.to_string());
        }
        self.cursor = self.entries.len();
    }

    pub fn older(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return self.entries.first().map(String::as_str);
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// `None` once the cursor moves past the newest entry (empty input line).
    pub fn newer(&mut self) -> Option<&str> {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_trigger_resolves() {
        let r = CommandRegistry::new();
        for cmd in Command::ALL {
            assert_eq!(r.lookup(cmd.trigger()), Some(cmd));
        }
    }

    #[test]
    fn test_lookup_is_literal() {
        let r = CommandRegistry::new();
        for input in [
            "WHOAMI",
            "whoami ",
            " whoami",
            "cat",
            "cat profile",
            "cat *.txt",
            "whoami&&cat *.txt",
            "",
        ] {
            assert_eq!(r.lookup(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_complete() {
        let r = CommandRegistry::new();
        assert_eq!(
            r.complete("cat e"),
            vec!["cat edu.txt", "cat exp.txt"]
        );
        assert_eq!(r.complete("who"), vec!["whoami", "whoami && cat *.txt"]);
        assert!(r.complete("ls").is_empty());
        assert_eq!(r.complete("").len(), Command::ALL.len());
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(not_found("ls -la"), "command not found: ls -la");
        assert_eq!(not_found("a\nb"), "command not found: a<br>b");
        assert_eq!(not_found("<b>"), "command not found: &lt;b&gt;");
    }

    #[test]
    fn test_menu_covers_vocabulary() {
        for cmd in Command::ALL {
            assert!(MENU.iter().any(|(_, c)| *c == cmd));
        }
    }

    #[test]
    fn test_prompt() {
        assert_eq!(prompt(&TerminalConfig::default()), "visitor@portfolio:~$ ");
    }

    #[test]
    fn test_history_recall() {
        let mut h = CommandHistory::new();
        h.push("whoami");
        h.push("cat edu.txt");
        h.push("cat edu.txt");
        assert_eq!(h.len(), 2);
        assert_eq!(h.older(), Some("cat edu.txt"));
        assert_eq!(h.older(), Some("whoami"));
        assert_eq!(h.older(), Some("whoami"));
        assert_eq!(h.newer(), Some("cat edu.txt"));
        assert_eq!(h.newer(), None);
        assert_eq!(h.newer(), None);
    }
}
