//! String format validators
//!
//! Email addresses and video-host links.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

// Video ids are ASCII word characters; `\w` would also admit Unicode letters.
static YOUTUBE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+$",
        r"^(https?://)?(www\.)?youtube\.com/watch\?v=[A-Za-z0-9_-]+",
        r"^(https?://)?(www\.)?youtu\.be/[A-Za-z0-9_-]+",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("youtube pattern is valid"))
    .collect()
});

// ============================================================================
// EMAIL VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates the `local@domain.tld` shape.
    ///
    /// Deliberately loose: one run of non-whitespace, non-`@` characters on
    /// each side of the `@`, and at least one `.` followed by a non-empty
    /// suffix in the domain part.
    pub Email for str;
    rule(input) { EMAIL_REGEX.is_match(input) }
    error(input) {
        ValidationError::invalid_format("email", "Enter a valid email address", "local@domain.tld")
    }
    fn email();
}

// ============================================================================
// VIDEO URL VALIDATOR
// ============================================================================

/// Host family whose link shapes a [`VideoUrl`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoHost {
    /// `youtube.com` and `youtu.be` links.
    #[default]
    #[serde(rename = "youtube")]
    YouTube,
}

impl VideoHost {
    /// The allow-list of accepted URL shapes for this host.
    #[must_use]
    pub fn patterns(self) -> &'static [Regex] {
        match self {
            Self::YouTube => &YOUTUBE_PATTERNS,
        }
    }

    /// Display name used in messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::YouTube => "YouTube",
        }
    }
}

crate::validator! {
    /// Validates that a link matches at least one accepted shape of a host.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub VideoUrl { host: VideoHost } for str;
    rule(self, input) { self.host.patterns().iter().any(|p| p.is_match(input)) }
    error(self, input) {
        ValidationError::invalid_format(
            "video_url",
            format!("Enter a valid {} URL", self.host.label()),
            self.host.label(),
        )
    }
    fn video_url(host: VideoHost);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("user.name+tag@mail.example.org", true)]
    #[case("a@b", false)]
    #[case("a b@c.de", false)]
    #[case("@b.co", false)]
    #[case("a@@b.co", false)]
    #[case("a@b.", false)]
    #[case("", false)]
    fn test_email(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(email().validate(input).is_ok(), ok);
    }

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", true)]
    #[case("http://youtube.com/watch?v=abc-_1", true)]
    #[case("youtu.be/dQw4w9WgXcQ", true)]
    #[case("https://youtu.be/x", true)]
    #[case("www.youtube.com/shorts/abc", true)]
    #[case("https://vimeo.com/123", false)]
    #[case("https://youtube.com/", false)]
    #[case("https://notyoutube.com/watch?v=a", false)]
    #[case("youtu.be/abc\nrest", true)]
    #[case("youtu.be/şarkı\nrest", false)]
    #[case("youtube.com/watch?v=ğ\nrest", false)]
    #[case("", false)]
    fn test_youtube(#[case] input: &str, #[case] ok: bool) {
        assert_eq!(video_url(VideoHost::YouTube).validate(input).is_ok(), ok);
    }

    #[test]
    fn test_video_url_error() {
        let err = video_url(VideoHost::YouTube).validate("nope").unwrap_err();
        assert_eq!(err.code, "video_url");
        assert_eq!(err.message, "Enter a valid YouTube URL");
    }
}
