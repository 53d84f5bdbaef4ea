/// How the parser treats control bytes (0x00-0x1F) and spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Reject them anywhere in the input
    #[default]
    Strict,
    /// Reject them only inside the authority, where they are ambiguous;
    /// path, query and fragment pass them through
    Lenient,
}

/// Parser configuration.
///
/// # Examples
///
/// ```
/// use urlspan::{Mode, ParseOptions};
///
/// let url = urlspan::parse_with(b"/search?q=a b", ParseOptions::lenient()).unwrap();
/// assert_eq!(url.query(), Some(&b"q=a b"[..]));
///
/// assert_eq!(ParseOptions::default().mode, Mode::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParseOptions {
    pub mode: Mode,
}

impl ParseOptions {
    pub const fn strict() -> Self {
        Self { mode: Mode::Strict }
    }

    pub const fn lenient() -> Self {
        Self {
            mode: Mode::Lenient,
        }
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub(crate) const fn is_strict(self) -> bool {
        matches!(self.mode, Mode::Strict)
    }
}
