//! `!echo`: repeats the message back.

use crate::session::{send_message, ChatSession};
use tracing::debug;
use yamato_common::ChannelId;

/// Reply text for an echo message: every token after the first, joined with
/// no separator. `None` when there is nothing to repeat.
pub fn echo_reply(content: &str) -> Option<String> {
    let reply: String = content.split_whitespace().skip(1).collect();
    (!reply.is_empty()).then_some(reply)
}

/// Handles `!echo`.
pub async fn run(session: &dyn ChatSession, channel_id: ChannelId, content: &str) {
    match echo_reply(content) {
        Some(reply) => send_message(session, channel_id, &reply).await,
        None => debug!("Nothing to echo"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_joined_without_separator() {
        assert_eq!(echo_reply("!echo hello world").as_deref(), Some("helloworld"));
        assert_eq!(echo_reply("!echo  a\tb \n c ").as_deref(), Some("abc"));
    }

    #[test]
    fn test_bare_echo_has_no_reply() {
        assert_eq!(echo_reply("!echo"), None);
        assert_eq!(echo_reply("!echo    "), None);
    }

    #[test]
    fn test_first_token_is_dropped_even_when_glued() {
        assert_eq!(echo_reply("!echoing twice").as_deref(), Some("twice"));
    }
}
