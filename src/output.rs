use colored::Colorize;

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", "error".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}: {}", "success".green().bold(), message);
}

/// Render an API response body for the terminal.
///
/// The server's payloads are passed through opaque: bodies that parse as
/// JSON are pretty-printed, anything else is emitted verbatim (lossily for
/// invalid UTF-8). The client never inspects the content.
pub fn render_body(body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| lossy(body))
        }
        Err(_) => lossy(body),
    }
}

fn lossy(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Print a response body (pretty-printed when JSON)
pub fn print_body(body: &[u8]) {
    let rendered = render_body(body);
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pretty_prints_json() {
        let body = br#"{"id":"f1","name":"report.pdf"}"#;
        let rendered = render_body(body);
        assert_eq!(rendered, "{\n  \"id\": \"f1\",\n  \"name\": \"report.pdf\"\n}");
    }

    #[test]
    fn test_render_passes_non_json_through() {
        let body = b"upload accepted";
        assert_eq!(render_body(body), "upload accepted");
    }

    #[test]
    fn test_render_tolerates_invalid_utf8() {
        let body = [0xff, 0xfe, b'o', b'k'];
        let rendered = render_body(&body);
        assert!(rendered.ends_with("ok"));
    }
}
