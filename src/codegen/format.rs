//! Line formatting for config scripts
//!
//! Command lines are column aligned: the opening quote of the value starts at
//! `value_column` and the `//` of the description at `comment_column`, with
//! at least one space of padding either way.

use serde::{Deserialize, Serialize};

/// Column layout for command lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Column where the quoted value starts
    #[serde(default = "default_value_column")]
    pub value_column: usize,
    /// Column where the `// description` starts
    #[serde(default = "default_comment_column")]
    pub comment_column: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            value_column: default_value_column(),
            comment_column: default_comment_column(),
        }
    }
}

const fn default_value_column() -> usize {
    60
}

const fn default_comment_column() -> usize {
    90
}

impl Layout {
    /// Format a `command "value";  // description` line
    ///
    /// An empty value produces the zero-argument form `command;`.
    #[must_use]
    pub fn command(&self, command: &str, value: &str, description: Option<&str>) -> String {
        if value.is_empty() {
            return format!("{command};");
        }

        let command_len = command.chars().count();
        let value_part = format!("\"{value}\";");
        let value_pad = padding(self.value_column, command_len);

        let mut line = format!("{command}{value_pad}{value_part}");
        if let Some(description) = description {
            let comment_pad = padding(self.comment_column, line.chars().count());
            line.push_str(&comment_pad);
            line.push_str("// ");
            line.push_str(description);
        }
        line
    }
}

fn padding(column: usize, used: usize) -> String {
    " ".repeat(column.saturating_sub(used).max(1))
}

/// Top-level section banners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    /// BINDS block
    Binds,
    /// ALIASES block
    Aliases,
    /// SETTINGS block
    Settings,
}

impl Banner {
    const FRAME: &'static str = "//====================//";

    /// The framed title line. Titles are not uniformly centred.
    #[must_use]
    pub const fn title_line(self) -> &'static str {
        match self {
            Banner::Binds => "//       BINDS        //",
            Banner::Aliases => "//      ALIASES       //",
            Banner::Settings => "//       SETTINGS     //",
        }
    }

    /// The three framing lines
    #[must_use]
    pub fn lines(self) -> [String; 3] {
        [
            Self::FRAME.to_string(),
            self.title_line().to_string(),
            Self::FRAME.to_string(),
        ]
    }
}

/// An indented sub-heading comment
#[must_use]
pub fn sub_heading(title: &str) -> String {
    format!("    // {title} //")
}
