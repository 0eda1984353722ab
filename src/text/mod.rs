use thiserror::Error;
use time::OffsetDateTime;
use time::macros::format_description;

/// Errors that can occur while formatting text for display.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("timestamp out of range: {0}")]
    Timestamp(#[from] time::error::ComponentRange),
    #[error("failed to format timestamp: {0}")]
    Format(#[from] time::error::Format),
}

pub type Result<T> = std::result::Result<T, TextError>;

const ZERO_WIDTH_SPACE: char = '\u{200b}';

/// Format a commit time.
///
/// Commit timestamps are stored in UTC and shown in UTC, the way `git log`
/// prints them, regardless of the local timezone.
pub fn commit_datetime(timestamp: i64) -> Result<String> {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute] UTC");
    let datetime = OffsetDateTime::from_unix_timestamp(timestamp)?;
    Ok(datetime.format(format)?)
}

/// Put a zero-width space after every non-word character.
///
/// Lets long lists such as `a,b,c,...` wrap in narrow columns. Whitespace
/// already breaks and is left alone, as is a character already followed by a
/// zero-width space.
pub fn add_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        out.push(ch);
        let is_word = ch.is_alphanumeric() || ch == '_';
        if !is_word
            && !ch.is_whitespace()
            && ch != ZERO_WIDTH_SPACE
            && chars.peek() != Some(&ZERO_WIDTH_SPACE)
        {
            out.push(ZERO_WIDTH_SPACE);
        }
    }

    out
}
