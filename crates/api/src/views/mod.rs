//! Server-rendered HTML.
//!
//! Pages are built with `format!`/`write!` into a `String`. Every value that
//! originates from a request or the database goes through [`escape`].

pub mod people;

use axum::http::StatusCode;

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap page content in the shared document shell.
pub fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title} | filmcrew</title>
  </head>
  <body>
{body}
  </body>
</html>
"#,
        title = escape(title),
    )
}

/// `<p id="notice">` line, or nothing when there is no message.
pub fn notice(message: Option<&str>) -> String {
    match message {
        Some(msg) => format!(r#"<p id="notice">{}</p>"#, escape(msg)),
        None => String::new(),
    }
}

/// Minimal page for error responses.
pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>\n<a href=\"/\">Home</a>",
        escape(reason),
        escape(message),
    );
    layout(reason, &body)
}
