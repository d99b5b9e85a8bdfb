use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::Action;

/// Shortcut key definition with key matching capability
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
    /// Short label for the footer hint line
    pub hint: &'static str,
    pub action: Action,
    pub matcher: fn(&KeyEvent) -> bool,
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

impl Shortcut {
    /// Check if this shortcut matches the given key event
    pub fn matches(&self, key: &KeyEvent) -> bool {
        (self.matcher)(key)
    }
}

fn ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Get all shortcut definitions organized by category
///
/// The search box always has focus, so every shortcut uses a non-printing key.
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Search",
            shortcuts: vec![
                Shortcut {
                    key_display: "Enter",
                    description: "Search for the typed query, or select the current commit",
                    hint: "search/select",
                    action: Action::Submit,
                    matcher: |key| key.code == KeyCode::Enter,
                },
                Shortcut {
                    key_display: "Ctrl+R",
                    description: "Reset the filter and show all commits",
                    hint: "reset",
                    action: Action::ResetFilter,
                    matcher: |key| ctrl(key, 'r'),
                },
                Shortcut {
                    key_display: "Backspace",
                    description: "Delete the last character of the query",
                    hint: "",
                    action: Action::SearchBackspace,
                    matcher: |key| key.code == KeyCode::Backspace,
                },
            ],
        },
        ShortcutCategory {
            name: "Navigation",
            shortcuts: vec![
                Shortcut {
                    key_display: "↑/Ctrl+P",
                    description: "Move to the previous commit",
                    hint: "",
                    action: Action::NavigateUp,
                    matcher: |key| key.code == KeyCode::Up || ctrl(key, 'p'),
                },
                Shortcut {
                    key_display: "↓/Ctrl+N",
                    description: "Move to the next commit",
                    hint: "move",
                    action: Action::NavigateDown,
                    matcher: |key| key.code == KeyCode::Down || ctrl(key, 'n'),
                },
                Shortcut {
                    key_display: "PgUp",
                    description: "Move one page up",
                    hint: "",
                    action: Action::PageUp,
                    matcher: |key| key.code == KeyCode::PageUp,
                },
                Shortcut {
                    key_display: "PgDn",
                    description: "Move one page down",
                    hint: "page",
                    action: Action::PageDown,
                    matcher: |key| key.code == KeyCode::PageDown,
                },
                Shortcut {
                    key_display: "Home",
                    description: "Jump to the newest commit",
                    hint: "",
                    action: Action::NavigateFirst,
                    matcher: |key| key.code == KeyCode::Home,
                },
                Shortcut {
                    key_display: "End",
                    description: "Jump to the oldest commit",
                    hint: "",
                    action: Action::NavigateLast,
                    matcher: |key| key.code == KeyCode::End,
                },
            ],
        },
        ShortcutCategory {
            name: "Commit",
            shortcuts: vec![Shortcut {
                key_display: "Ctrl+Y",
                description: "Copy the commit hash to the clipboard",
                hint: "copy hash",
                action: Action::CopySelectedHash,
                matcher: |key| ctrl(key, 'y'),
            }],
        },
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    key_display: "F12",
                    description: "Toggle debug console",
                    hint: "",
                    action: Action::ToggleDebugConsole,
                    matcher: |key| key.code == KeyCode::F(12),
                },
                Shortcut {
                    key_display: "Esc",
                    description: "Clear the query, or quit when it is empty",
                    hint: "clear/quit",
                    action: Action::Escape,
                    matcher: |key| key.code == KeyCode::Esc,
                },
                Shortcut {
                    key_display: "Ctrl+C",
                    description: "Quit",
                    hint: "quit",
                    action: Action::Quit,
                    matcher: |key| ctrl(key, 'c'),
                },
            ],
        },
    ]
}

/// Get all shortcuts in a flat list for easy iteration
pub fn get_all_shortcuts_flat() -> Vec<Shortcut> {
    get_shortcuts()
        .into_iter()
        .flat_map(|category| category.shortcuts)
        .collect()
}

/// Key binding reference for `--help`, one section per category
pub fn help_text() -> String {
    let mut out = String::from("Key bindings:\n");
    for category in get_shortcuts() {
        out.push_str(&format!("\n  {}\n", category.name));
        for shortcut in category.shortcuts {
            out.push_str(&format!(
                "    {:<12} {}\n",
                shortcut.key_display, shortcut.description
            ));
        }
    }
    out
}

/// Shortcuts shown in the footer, as (key, label) pairs
pub fn footer_hints() -> Vec<(&'static str, &'static str)> {
    get_all_shortcuts_flat()
        .into_iter()
        .filter(|shortcut| !shortcut.hint.is_empty())
        .map(|shortcut| (shortcut.key_display, shortcut.hint))
        .collect()
}

/// Map a key press to an action
///
/// When the debug console is open it captures navigation and its own keys;
/// otherwise shortcuts win and plain characters go into the search box.
pub fn action_for_key(key: &KeyEvent, debug_console_open: bool) -> Action {
    if debug_console_open {
        return match key.code {
            KeyCode::Esc | KeyCode::F(12) => Action::ToggleDebugConsole,
            KeyCode::Up | KeyCode::Char('k') => Action::ScrollDebugConsoleUp,
            KeyCode::Down | KeyCode::Char('j') => Action::ScrollDebugConsoleDown,
            KeyCode::Char('a') => Action::ToggleDebugAutoScroll,
            KeyCode::Char('c') if ctrl(key, 'c') => Action::Quit,
            KeyCode::Char('c') => Action::ClearDebugLogs,
            _ => Action::None,
        };
    }

    if let Some(shortcut) = get_all_shortcuts_flat()
        .into_iter()
        .find(|shortcut| shortcut.matches(key))
    {
        return shortcut.action;
    }

    match key.code {
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            Action::SearchInput(c)
        }
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_lists_every_shortcut() {
        let help = help_text();
        for shortcut in get_all_shortcuts_flat() {
            assert!(help.contains(shortcut.description));
        }
        assert!(help.contains("Navigation"));
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_chars_go_to_search() {
        assert_eq!(action_for_key(&key(KeyCode::Char('q')), false), Action::SearchInput('q'));
        assert_eq!(action_for_key(&key(KeyCode::Char('C')), false), Action::SearchInput('C'));
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('F'), KeyModifiers::SHIFT), false),
            Action::SearchInput('F')
        );
        assert_eq!(action_for_key(&key(KeyCode::Char('ü')), false), Action::SearchInput('ü'));
    }

    #[test]
    fn test_required_actions_exist() {
        assert_eq!(action_for_key(&ctrl_key('c'), false), Action::Quit);
        assert_eq!(action_for_key(&key(KeyCode::Esc), false), Action::Escape);
        assert_eq!(action_for_key(&key(KeyCode::Up), false), Action::NavigateUp);
        assert_eq!(action_for_key(&key(KeyCode::Down), false), Action::NavigateDown);
        assert_eq!(action_for_key(&ctrl_key('p'), false), Action::NavigateUp);
        assert_eq!(action_for_key(&ctrl_key('n'), false), Action::NavigateDown);
        assert_eq!(action_for_key(&key(KeyCode::PageUp), false), Action::PageUp);
        assert_eq!(action_for_key(&key(KeyCode::PageDown), false), Action::PageDown);
        assert_eq!(action_for_key(&key(KeyCode::Home), false), Action::NavigateFirst);
        assert_eq!(action_for_key(&key(KeyCode::End), false), Action::NavigateLast);
        assert_eq!(action_for_key(&key(KeyCode::Enter), false), Action::Submit);
        assert_eq!(action_for_key(&ctrl_key('y'), false), Action::CopySelectedHash);
        assert_eq!(action_for_key(&ctrl_key('r'), false), Action::ResetFilter);
        assert_eq!(action_for_key(&key(KeyCode::Backspace), false), Action::SearchBackspace);
    }

    #[test]
    fn test_unbound_control_keys_are_ignored() {
        assert_eq!(action_for_key(&ctrl_key('z'), false), Action::None);
        assert_eq!(action_for_key(&key(KeyCode::F(5)), false), Action::None);
        assert_eq!(
            action_for_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT), false),
            Action::None
        );
    }

    #[test]
    fn test_debug_console_captures_keys() {
        assert_eq!(action_for_key(&key(KeyCode::F(12)), false), Action::ToggleDebugConsole);
        assert_eq!(action_for_key(&key(KeyCode::F(12)), true), Action::ToggleDebugConsole);
        assert_eq!(action_for_key(&key(KeyCode::Esc), true), Action::ToggleDebugConsole);
        assert_eq!(action_for_key(&key(KeyCode::Char('j')), true), Action::ScrollDebugConsoleDown);
        assert_eq!(action_for_key(&key(KeyCode::Up), true), Action::ScrollDebugConsoleUp);
        assert_eq!(action_for_key(&key(KeyCode::Char('a')), true), Action::ToggleDebugAutoScroll);
        assert_eq!(action_for_key(&key(KeyCode::Char('c')), true), Action::ClearDebugLogs);
        assert_eq!(action_for_key(&ctrl_key('c'), true), Action::Quit);
        assert_eq!(action_for_key(&key(KeyCode::Char('x')), true), Action::None);
    }

    #[test]
    fn test_footer_hints() {
        let hints = footer_hints();
        assert!(hints.contains(&("Enter", "search/select")));
        assert!(hints.contains(&("Ctrl+C", "quit")));
        assert!(hints.iter().all(|(_, label)| !label.is_empty()));
    }
}
