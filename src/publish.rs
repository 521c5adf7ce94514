use tracing::info;

use crate::models::post::Platform;

/// A complete draft, ready to hand to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub platform: Platform,
    pub content: String,
}

impl Submission {
    /// `None` unless both a platform is chosen and the content is non-empty.
    /// Whitespace counts as content.
    pub fn from_draft(platform: Option<Platform>, content: &str) -> Option<Self> {
        let platform = platform?;
        if content.is_empty() {
            return None;
        }
        Some(Submission {
            platform,
            content: content.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    Published(Submission),
    /// The draft was incomplete; nothing happened.
    Skipped,
}

/// Where published drafts go. Nothing here talks to a network.
pub trait PublishSink {
    fn submit(&mut self, submission: &Submission);
}

/// Records each submission as a log line.
#[derive(Debug, Default)]
pub struct LogSink;

impl PublishSink for LogSink {
    fn submit(&mut self, submission: &Submission) {
        info!(
            platform = %submission.platform,
            content = %submission.content,
            "Posting to {}: {}",
            submission.platform,
            submission.content
        );
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_becomes_submission() {
        let sub = Submission::from_draft(Some(Platform::Twitter), "hello").unwrap();
        assert_eq!(sub.platform, Platform::Twitter);
        assert_eq!(sub.content, "hello");
    }

    #[test]
    fn missing_platform_or_content_is_rejected() {
        assert!(Submission::from_draft(None, "hello").is_none());
        assert!(Submission::from_draft(Some(Platform::Facebook), "").is_none());
        assert!(Submission::from_draft(None, "").is_none());
    }

    #[test]
    fn whitespace_content_is_not_trimmed() {
        let sub = Submission::from_draft(Some(Platform::LinkedIn), "  ").unwrap();
        assert_eq!(sub.content, "  ");
    }
}
