use crate::broadcast::send_broadcast;
use crate::commands::extract_content;
use crate::config::Configuration;
use crate::host::{CommandArgs, CommandResponse, HostApi, Post};

pub const MSG_EMPTY_CONTENT: &str = "message content cannot be empty";
pub const MSG_BROADCAST_OK: &str = "message broadcast succeeded 🎉";

/// Handles one `/danmaku` invocation: forwards the trailing text to the
/// overlay endpoint and tells the invoking user how it went.
///
/// Empty content is rejected without touching the network. A failed
/// broadcast is reported to the user with the error detail rather than
/// masked as a success.
pub async fn execute_command_danmaku(
    api: &dyn HostApi,
    client: &reqwest::Client,
    config: &Configuration,
    args: &CommandArgs,
) -> CommandResponse {
    let content = extract_content(&args.command);

    let message = if content.is_empty() {
        MSG_EMPTY_CONTENT.to_string()
    } else {
        match send_broadcast(client, config, &content).await {
            Ok(()) => MSG_BROADCAST_OK.to_string(),
            Err(e) => {
                log::error!("danmaku broadcast failed: {}", e);
                format!("message broadcast failed: {}", e)
            }
        }
    };

    // Fire-and-forget: the host owns delivery of the ephemeral reply.
    api.send_ephemeral_post(
        &args.user_id,
        Post {
            channel_id: args.channel_id.clone(),
            message,
        },
    );

    CommandResponse::default()
}
