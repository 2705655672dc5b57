//! Text extraction for translation responses
//!
//! The service answers with an XML declaration on the first line and the
//! whole `<Translation>` element on the second. Rather than parsing XML, the
//! translated text is cut out of the second line between the first `<text>`
//! and the last `</text>`. Anything between those two markers is returned
//! verbatim, including further tags if the line holds more than one `<text>`.

use crate::core::errors::{Result, YandexError};

const OPEN: &str = "<text>";
const CLOSE: &str = "</text>";

/// Extract the translated text from a raw response body
pub fn parse_translation(body: &str) -> Result<String> {
    let line = second_line(body).ok_or_else(|| YandexError::TranslationParseError {
        message: "response has fewer than two lines".to_string(),
    })?;

    let start = line
        .find(OPEN)
        .ok_or_else(|| missing(OPEN))?
        + OPEN.len();
    let end = line.rfind(CLOSE).ok_or_else(|| missing(CLOSE))?;

    if end < start {
        return Err(YandexError::TranslationParseError {
            message: format!("{} appears before {}", CLOSE, OPEN),
        });
    }

    Ok(line[start..end].to_string())
}

/// Second line of `body`, treating `\n`, `\r\n` and a lone `\r` as line breaks
fn second_line(body: &str) -> Option<&str> {
    let is_break = |c: char| c == '\r' || c == '\n';

    let first_end = body.find(is_break)?;
    let rest = &body[first_end..];
    let rest = rest.strip_prefix("\r\n").unwrap_or(&rest[1..]);
    if rest.is_empty() {
        return None;
    }

    let end = rest.find(is_break).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn missing(marker: &str) -> YandexError {
    YandexError::TranslationParseError {
        message: format!("{} not found on line 2", marker),
    }
}
