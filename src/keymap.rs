//! Static mapping from physical keys to logical commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A logical command understood by the interaction loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Up,
    Down,
    First,
    Last,
    Enter,
    Leave,
    Refresh,
}

impl Command {
    #[cfg(test)]
    pub const ALL: [Command; 8] = [
        Command::Quit,
        Command::Up,
        Command::Down,
        Command::First,
        Command::Last,
        Command::Enter,
        Command::Leave,
        Command::Refresh,
    ];

    /// Short label for key hints.
    pub fn label(self) -> &'static str {
        match self {
            Command::Quit => "Exit",
            Command::Up => "Up",
            Command::Down => "Down",
            Command::First => "Top",
            Command::Last => "Bottom",
            Command::Enter => "Open",
            Command::Leave => "Return",
            Command::Refresh => "Reload",
        }
    }
}

/// One physical key bound to a command.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub command: Command,
}

const fn key(code: KeyCode, command: Command) -> KeyBinding {
    KeyBinding {
        code,
        modifiers: KeyModifiers::NONE,
        command,
    }
}

const fn ctrl(c: char, command: Command) -> KeyBinding {
    KeyBinding {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        command,
    }
}

/// Every key binding. The first binding of a command is the one shown in hints.
pub const KEYMAP: &[KeyBinding] = &[
    key(KeyCode::Char('q'), Command::Quit),
    ctrl('c', Command::Quit),
    key(KeyCode::Esc, Command::Quit),
    key(KeyCode::Up, Command::Up),
    key(KeyCode::Char('k'), Command::Up),
    key(KeyCode::Down, Command::Down),
    key(KeyCode::Char('j'), Command::Down),
    key(KeyCode::Home, Command::First),
    key(KeyCode::Char('g'), Command::First),
    key(KeyCode::End, Command::Last),
    key(KeyCode::Char('G'), Command::Last),
    key(KeyCode::Enter, Command::Enter),
    key(KeyCode::Right, Command::Enter),
    key(KeyCode::Char('l'), Command::Enter),
    key(KeyCode::Backspace, Command::Leave),
    key(KeyCode::Left, Command::Leave),
    key(KeyCode::Char('h'), Command::Leave),
    key(KeyCode::Char('r'), Command::Refresh),
    key(KeyCode::F(5), Command::Refresh),
];

/// Translate a key event into a command.
///
/// Shift is ignored because terminals report it inconsistently for
/// uppercase letters.
pub fn lookup(event: &KeyEvent) -> Option<Command> {
    let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
    KEYMAP
        .iter()
        .find(|binding| binding.code == event.code && binding.modifiers == modifiers)
        .map(|binding| binding.command)
}

/// Keys bound to `command`, in table order.
pub fn keys_for(command: Command) -> impl Iterator<Item = &'static KeyBinding> {
    KEYMAP.iter().filter(move |binding| binding.command == command)
}

/// Human-readable name of a key binding.
pub fn key_label(binding: &KeyBinding) -> String {
    let base = match binding.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    };
    if binding.modifiers.contains(KeyModifiers::CONTROL) {
        format!("Ctrl+{base}")
    } else {
        base
    }
}

/// Hint line such as `q: Exit / Enter: Open / Backspace: Return`.
pub fn hint_line(commands: &[Command]) -> String {
    commands
        .iter()
        .filter_map(|&command| {
            keys_for(command)
                .next()
                .map(|binding| format!("{}: {}", key_label(binding), command.label()))
        })
        .collect::<Vec<_>>()
        .join(" / ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn aliases_resolve_to_same_command() {
        let cases = [
            (vec![KeyCode::Char('q'), KeyCode::Esc], Command::Quit),
            (vec![KeyCode::Up, KeyCode::Char('k')], Command::Up),
            (vec![KeyCode::Down, KeyCode::Char('j')], Command::Down),
            (
                vec![KeyCode::Enter, KeyCode::Right, KeyCode::Char('l')],
                Command::Enter,
            ),
            (
                vec![KeyCode::Backspace, KeyCode::Left, KeyCode::Char('h')],
                Command::Leave,
            ),
            (vec![KeyCode::Home, KeyCode::Char('g')], Command::First),
            (vec![KeyCode::End], Command::Last),
            (vec![KeyCode::Char('r'), KeyCode::F(5)], Command::Refresh),
        ];
        for (codes, command) in cases {
            for code in codes {
                assert_eq!(lookup(&press(code)), Some(command), "{code:?}");
            }
        }
    }

    #[test]
    fn ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(lookup(&event), Some(Command::Quit));
    }

    #[test]
    fn plain_c_is_unbound() {
        assert_eq!(lookup(&press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn shifted_g_jumps_to_bottom() {
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(lookup(&event), Some(Command::Last));
    }

    #[test]
    fn control_modifier_does_not_alias_plain_key() {
        let event = KeyEvent::new(KeyCode::Char('j'), KeyModifiers::CONTROL);
        assert_eq!(lookup(&event), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        for code in [KeyCode::Char('x'), KeyCode::Tab, KeyCode::F(1), KeyCode::Delete] {
            assert_eq!(lookup(&press(code)), None, "{code:?}");
        }
    }

    #[test]
    fn every_command_is_bound() {
        for command in Command::ALL {
            assert!(keys_for(command).next().is_some(), "{command:?}");
        }
    }

    #[test]
    fn bindings_are_unique() {
        let mut seen = HashSet::new();
        for binding in KEYMAP {
            assert!(
                seen.insert((binding.code, binding.modifiers)),
                "duplicate binding {:?}",
                binding.code
            );
        }
    }

    #[test]
    fn every_binding_round_trips_through_lookup() {
        for binding in KEYMAP {
            let event = KeyEvent::new(binding.code, binding.modifiers);
            assert_eq!(lookup(&event), Some(binding.command));
        }
    }

    #[test]
    fn hint_line_uses_first_binding() {
        let hints = hint_line(&[Command::Quit, Command::Enter, Command::Leave]);
        assert_eq!(hints, "q: Exit / Enter: Open / Backspace: Return");
    }

    #[test]
    fn key_labels() {
        assert_eq!(key_label(&ctrl('c', Command::Quit)), "Ctrl+c");
        assert_eq!(key_label(&key(KeyCode::F(5), Command::Refresh)), "F5");
        assert_eq!(key_label(&key(KeyCode::Left, Command::Leave)), "←");
    }
}
