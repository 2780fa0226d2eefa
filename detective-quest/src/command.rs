use crate::room::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Go(Side),
    Stop,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognized command '{0}'")]
pub struct UnknownCommand(pub String);

impl Command {
    /// Parses one line of player input. The trimmed line must be a single
    /// `e`, `d` or `s`, in either case.
    pub fn parse(line: &str) -> Result<Self, UnknownCommand> {
        let trimmed = line.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => match c.to_ascii_lowercase() {
                'e' => Ok(Command::Go(Side::Left)),
                'd' => Ok(Command::Go(Side::Right)),
                's' => Ok(Command::Stop),
                _ => Err(UnknownCommand(trimmed.to_string())),
            },
            _ => Err(UnknownCommand(trimmed.to_string())),
        }
    }

    pub fn key(side: Side) -> char {
        match side {
            Side::Left => 'e',
            Side::Right => 'd',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_cases() {
        assert_eq!(Command::parse("e"), Ok(Command::Go(Side::Left)));
        assert_eq!(Command::parse("E"), Ok(Command::Go(Side::Left)));
        assert_eq!(Command::parse("d"), Ok(Command::Go(Side::Right)));
        assert_eq!(Command::parse("D"), Ok(Command::Go(Side::Right)));
        assert_eq!(Command::parse("s"), Ok(Command::Stop));
        assert_eq!(Command::parse("S"), Ok(Command::Stop));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(Command::parse("  d \r\n"), Ok(Command::Go(Side::Right)));
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(Command::parse("x"), Err(UnknownCommand("x".to_string())));
        assert_eq!(Command::parse("ed"), Err(UnknownCommand("ed".to_string())));
        assert_eq!(Command::parse(""), Err(UnknownCommand(String::new())));
    }
}
