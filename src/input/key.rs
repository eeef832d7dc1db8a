//! Platform-independent key representation and terminal key-line parsing.

/// A single key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

impl Key {
    /// Map a named key token such as `esc` or `bs`, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "enter" => Some(Self::Enter),
            "bs" | "backspace" | "del" => Some(Self::Backspace),
            "esc" | "escape" | "clear" => Some(Self::Escape),
            _ => None,
        }
    }
}

/// Letters that are bound to a command on their own.
const KEY_LETTERS: &[char] = &['x', 'c', 'C'];

/// Turn one line of terminal input into key presses.
///
/// Whitespace separates tokens. A named token becomes its key; any other
/// token is one `Char` per character. Unknown words (tokens holding a letter
/// that is not a key on its own) are dropped, so `exit` does not type `x`.
/// A blank line is a single Enter.
pub fn parse_keys(line: &str) -> Vec<Key> {
    if line.trim().is_empty() {
        return vec![Key::Enter];
    }

    let mut keys = Vec::new();
    for token in line.split_whitespace() {
        if let Some(key) = Key::from_name(token) {
            keys.push(key);
        } else if !is_unknown_word(token) {
            keys.extend(token.chars().map(Key::Char));
        }
    }

    keys
}

fn is_unknown_word(token: &str) -> bool {
    token.chars().count() > 1
        && token
            .chars()
            .any(|c| c.is_alphabetic() && !KEY_LETTERS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("enter"), Some(Key::Enter));
        assert_eq!(Key::from_name("BS"), Some(Key::Backspace));
        assert_eq!(Key::from_name("Esc"), Some(Key::Escape));
        assert_eq!(Key::from_name("clear"), Some(Key::Escape));
        assert_eq!(Key::from_name("x"), None);
    }

    #[test]
    fn test_parse_characters() {
        assert_eq!(
            parse_keys("12+3="),
            vec![
                Key::Char('1'),
                Key::Char('2'),
                Key::Char('+'),
                Key::Char('3'),
                Key::Char('='),
            ]
        );
    }

    #[test]
    fn test_parse_named_tokens() {
        assert_eq!(
            parse_keys("12 bs 5 enter"),
            vec![
                Key::Char('1'),
                Key::Char('2'),
                Key::Backspace,
                Key::Char('5'),
                Key::Enter,
            ]
        );
    }

    #[test]
    fn test_unknown_words_dropped() {
        assert_eq!(parse_keys("exit"), Vec::<Key>::new());
        assert_eq!(
            parse_keys("3 exit +"),
            vec![Key::Char('3'), Key::Char('+')]
        );
    }

    #[test]
    fn test_bound_letters_kept() {
        assert_eq!(
            parse_keys("2x3"),
            vec![Key::Char('2'), Key::Char('x'), Key::Char('3')]
        );
        assert_eq!(parse_keys("c"), vec![Key::Char('c')]);
        assert_eq!(parse_keys("5c"), vec![Key::Char('5'), Key::Char('c')]);
    }

    #[test]
    fn test_empty_line_is_enter() {
        assert_eq!(parse_keys(""), vec![Key::Enter]);
        assert_eq!(parse_keys("   "), vec![Key::Enter]);
    }
}
