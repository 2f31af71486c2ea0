use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// UI visibility toggle for the launcher and in-app messages.
///
/// Parsing is intentionally forgiving: anything that is not a
/// case-insensitive `"VISIBLE"` means hidden, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("VISIBLE") {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

impl FromStr for Visibility {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Visibility::parse(s))
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => f.write_str("VISIBLE"),
            Visibility::Hidden => f.write_str("HIDDEN"),
        }
    }
}
