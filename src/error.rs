use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
    pub location: Option<Location>,
}

impl Error {
    pub fn syntax(message: impl Into<String>, location: Location) -> Self {
        Self {
            kind: ErrorKind::Syntax,
            message: message.into(),
            location: Some(location),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Input,
            message: message.into(),
            location: None,
        }
    }

    pub fn line(&self) -> Option<usize> {
        self.location.map(|location| location.line)
    }

    pub fn column(&self) -> Option<usize> {
        self.location.map(|location| location.column)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(
                f,
                "{} at line {}, col {}",
                self.message, location.line, location.column
            ),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_syntax_error_display_includes_position() {
        let error = Error::syntax(
            "Expected digits",
            Location {
                offset: 4,
                line: 2,
                column: 3,
            },
        );
        assert_eq!(error.to_string(), "Expected digits at line 2, col 3");
        assert_eq!(error.kind, ErrorKind::Syntax);
        assert_eq!(error.line(), Some(2));
        assert_eq!(error.column(), Some(3));
    }

    #[rstest::rstest]
    fn test_input_error_display_is_bare_message() {
        let error = Error::input("read failed: broken pipe");
        assert_eq!(error.to_string(), "read failed: broken pipe");
        assert_eq!(error.kind, ErrorKind::Input);
        assert_eq!(error.location, None);
        assert_eq!(error.line(), None);
    }
}
