//! User-facing reply texts.

use shortener::ErrorKind;

use crate::commands::command_list;

pub const WELCOME: &str = "Welcome to the URL Shortener Bot! \
Send me any link, or use /shorten <url>, and I'll give you a short one.";

pub const ABOUT: &str = "URL Shortener Bot: forwards your links to a shortening service \
and sends back the short version. Usage counts are kept in memory only.";

pub const SHORTEN_USAGE: &str =
    "Please provide a URL to shorten. Example: /shorten https://example.com";

pub const SEND_ANOTHER: &str = "Send me the next link you want to shorten.";

pub const NO_URL_FOUND: &str =
    "I couldn't find a link in your message. Send a URL like https://example.com";

pub const UNKNOWN_COMMAND: &str = "Unknown command. Use /help to see what I can do.";

/// Sent when the handler chain itself fails.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again later.";

pub fn greeting(name: &str) -> String {
    format!("Hi {}! {}", name, WELCOME)
}

pub fn help() -> String {
    format!(
        "Send me a link (or several) and I'll shorten each one.\n\
         Bare domains like example.com are fine too.\n\n{}",
        command_list()
    )
}

pub fn stats(count: u64, total: u64) -> String {
    format!(
        "📊 You have shortened {} link{}.\nAll users: {} link{}.",
        count,
        if count == 1 { "" } else { "s" },
        total,
        if total == 1 { "" } else { "s" }
    )
}

pub fn shortened(short_url: &str) -> String {
    format!("Shortened URL: {}", short_url)
}

/// Failure text per error kind. `input` is what the user sent.
pub fn shorten_failed(kind: ErrorKind, input: &str) -> String {
    match kind {
        ErrorKind::InvalidInput => format!("\"{}\" doesn't look like a valid URL.", input),
        ErrorKind::RemoteFailure | ErrorKind::UnexpectedResponse => {
            "Failed to shorten URL. Please try again later.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_pluralization() {
        assert_eq!(stats(1, 1), "📊 You have shortened 1 link.\nAll users: 1 link.");
        assert_eq!(stats(0, 5), "📊 You have shortened 0 links.\nAll users: 5 links.");
    }

    #[test]
    fn test_shorten_failed_texts() {
        assert!(shorten_failed(ErrorKind::InvalidInput, "nope").contains("\"nope\""));
        assert_eq!(
            shorten_failed(ErrorKind::RemoteFailure, "x"),
            shorten_failed(ErrorKind::UnexpectedResponse, "x")
        );
    }

    #[test]
    fn test_help_lists_commands() {
        assert!(help().contains("/shorten"));
    }
}
