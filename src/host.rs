use std::path::PathBuf;

use anyhow::Result;

/// A slash-command invocation as delivered by the host platform.
#[derive(Debug, Clone)]
pub struct CommandArgs {
    /// Raw invocation line, including the leading `/trigger` token.
    pub command: String,
    pub user_id: String,
    pub channel_id: String,
}

/// Body of an ephemeral post, visible only to the addressed user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub channel_id: String,
    pub message: String,
}

/// Slash-command metadata handed to the host at activation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandRegistration {
    pub trigger: String,
    pub auto_complete: bool,
    pub auto_complete_hint: String,
    pub auto_complete_desc: String,
    /// Data URI for the autocomplete icon, or empty for no icon.
    pub autocomplete_icon_data: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseType {
    /// The handler already replied through `send_ephemeral_post`.
    #[default]
    None,
    /// The host renders `text` back to the invoking user.
    Ephemeral,
}

/// Returned to the host after a command has been handled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    pub response_type: ResponseType,
    pub text: String,
}

impl CommandResponse {
    pub fn ephemeral(text: impl Into<String>) -> Self {
        CommandResponse {
            response_type: ResponseType::Ephemeral,
            text: text.into(),
        }
    }
}

/// The narrow slice of the host platform API this plugin touches.
pub trait HostApi: Send + Sync {
    /// Registers a slash command with the platform.
    fn register_command(&self, registration: CommandRegistration) -> Result<()>;

    /// Best-effort ephemeral post to a single user. Delivery failures stay
    /// on the host side and are not reported back to the handler.
    fn send_ephemeral_post(&self, user_id: &str, post: Post);

    /// Root directory of the installed plugin bundle. Static assets live
    /// under `assets/` inside it.
    fn bundle_path(&self) -> Result<PathBuf>;
}
