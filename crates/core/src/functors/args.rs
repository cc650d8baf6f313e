//! Command line argument quoting and splitting
//!
//! Unix-style handling follows POSIX shell rules through `shlex`. Windows-style handling
//! follows the MSVC runtime rules used by `CommandLineToArgvW`.

use std::iter;

use super::text;
use crate::error::ConvertError;
use crate::functor::{Conversion, Functor, FunctorInfo};

pub struct ArgQuoteUnix {
    info: FunctorInfo,
}

impl ArgQuoteUnix {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "arg_quote_unix",
                "Arg Quote (Unix-style)",
                "Quote a command line argument (Unix-style)",
            ),
        }
    }
}

impl Default for ArgQuoteUnix {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for ArgQuoteUnix {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let quoted = shlex::try_quote(text(input))
            .map_err(|e| ConvertError::InvalidArgument(e.to_string()))?;
        Ok(vec![quoted.into_owned().into()])
    }
}

pub struct ArgQuoteWin {
    info: FunctorInfo,
}

impl ArgQuoteWin {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "arg_quote_win",
                "Arg Quote (Windows-style)",
                "Quote a command line argument (Windows-style)",
            ),
        }
    }
}

impl Default for ArgQuoteWin {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for ArgQuoteWin {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        Ok(vec![quote_windows(text(input)).into()])
    }
}

pub struct ArgSplitUnix {
    info: FunctorInfo,
}

impl ArgSplitUnix {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "arg_split_unix",
                "Arg Split (Unix-style)",
                "Split a command line (Unix-style)",
            ),
        }
    }
}

impl Default for ArgSplitUnix {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for ArgSplitUnix {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        let line = escape_comment_marks(text(input));
        let words = shlex::split(&line).ok_or(ConvertError::UnbalancedQuotes)?;
        Ok(words.into_iter().map(Conversion::from).collect())
    }
}

pub struct ArgSplitWin {
    info: FunctorInfo,
}

impl ArgSplitWin {
    pub fn new() -> Self {
        Self {
            info: FunctorInfo::new(
                "arg_split_win",
                "Arg Split (Windows-style)",
                "Split a command line (Windows-style)",
            ),
        }
    }
}

impl Default for ArgSplitWin {
    fn default() -> Self {
        Self::new()
    }
}

impl Functor for ArgSplitWin {
    fn info(&self) -> &FunctorInfo {
        &self.info
    }

    fn convert(&self, input: Option<&str>) -> Result<Vec<Conversion>, ConvertError> {
        Ok(split_windows(text(input))
            .into_iter()
            .map(Conversion::from)
            .collect())
    }
}

/// Escape every `#` that starts a word so `shlex` reads it as a literal.
///
/// `shlex` drops the rest of the line after such a `#`. Quoted text and characters
/// already escaped with a backslash are copied as-is.
fn escape_comment_marks(line: &str) -> String {
    #[derive(Clone, Copy, PartialEq)]
    enum Quote {
        None,
        Single,
        Double,
    }

    let mut escaped = String::with_capacity(line.len());
    let mut quote = Quote::None;
    let mut word_start = true;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Quote::Single => {
                escaped.push(c);
                if c == '\'' {
                    quote = Quote::None;
                }
            }
            Quote::Double => {
                escaped.push(c);
                match c {
                    '\\' => escaped.extend(chars.next()),
                    '"' => quote = Quote::None,
                    _ => {}
                }
            }
            Quote::None => {
                match c {
                    '#' if word_start => escaped.push_str("\\#"),
                    '\\' => {
                        escaped.push(c);
                        escaped.extend(chars.next());
                    }
                    '\'' => {
                        escaped.push(c);
                        quote = Quote::Single;
                    }
                    '"' => {
                        escaped.push(c);
                        quote = Quote::Double;
                    }
                    _ => escaped.push(c),
                }
                word_start = matches!(c, ' ' | '\t' | '\n');
            }
        }
    }

    escaped
}

/// Quote one argument so that `split_windows` gives it back unchanged.
pub fn quote_windows(arg: &str) -> String {
    let needs_quotes =
        arg.is_empty() || arg.contains(|c: char| matches!(c, ' ' | '\t' | '\n' | '\x0b' | '"'));
    if !needs_quotes {
        return arg.to_string();
    }

    let mut quoted = String::with_capacity(arg.len() + 2);
    quoted.push('"');

    let mut backslashes = 0;
    for c in arg.chars() {
        match c {
            '\\' => backslashes += 1,
            '"' => {
                quoted.extend(iter::repeat('\\').take(backslashes * 2 + 1));
                quoted.push('"');
                backslashes = 0;
            }
            _ => {
                quoted.extend(iter::repeat('\\').take(backslashes));
                quoted.push(c);
                backslashes = 0;
            }
        }
    }

    // Backslashes before the closing quote must be doubled.
    quoted.extend(iter::repeat('\\').take(backslashes * 2));
    quoted.push('"');
    quoted
}

/// Split a command line the way the MSVC runtime builds `argv`.
pub fn split_windows(cmdline: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut in_quotes = false;
    let mut chars = cmdline.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let mut count = 1;
                while chars.peek() == Some(&'\\') {
                    chars.next();
                    count += 1;
                }
                in_arg = true;

                if chars.peek() == Some(&'"') {
                    current.extend(iter::repeat('\\').take(count / 2));
                    if count % 2 == 1 {
                        chars.next();
                        current.push('"');
                    }
                } else {
                    current.extend(iter::repeat('\\').take(count));
                }
            }
            '"' => {
                in_arg = true;
                if in_quotes && chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ' ' | '\t' if !in_quotes => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            _ => {
                in_arg = true;
                current.push(c);
            }
        }
    }

    if in_arg {
        args.push(current);
    }

    args
}
