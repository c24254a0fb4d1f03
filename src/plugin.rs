use std::sync::Arc;

use anyhow::{Context, Result};

use crate::commands::{COMMAND_TRIGGER_DANMAKU, extract_trigger};
use crate::config::{self, Configuration};
use crate::handlers::execute_command_danmaku;
use crate::host::{CommandArgs, CommandRegistration, CommandResponse, HostApi};
use crate::icon::autocomplete_icon_data;

/// Supplies the live configuration, polled on every invocation rather than
/// cached at activation.
pub type ConfigSource = Box<dyn Fn() -> Configuration + Send + Sync>;

pub struct Plugin {
    api: Arc<dyn HostApi>,
    client: reqwest::Client,
    config_source: ConfigSource,
}

impl Plugin {
    /// Plugin wired to environment-backed configuration. Picks up a local
    /// `.env` file when present.
    pub fn new(api: Arc<dyn HostApi>) -> Self {
        config::load_environment();
        Plugin::with_config_source(api, Box::new(Configuration::from_env))
    }

    pub fn with_config_source(api: Arc<dyn HostApi>, config_source: ConfigSource) -> Self {
        Plugin {
            api,
            client: reqwest::Client::new(),
            config_source,
        }
    }

    /// Registers every slash command this plugin serves. An unreadable icon
    /// asset only costs the icon, never the registration.
    pub fn on_activate(&self) -> Result<()> {
        self.api
            .register_command(CommandRegistration {
                trigger: COMMAND_TRIGGER_DANMAKU.to_string(),
                auto_complete: true,
                auto_complete_hint: String::new(),
                auto_complete_desc: "向所有人发送弹幕".to_string(),
                autocomplete_icon_data: autocomplete_icon_data(self.api.as_ref(), "danmaku.svg"),
            })
            .with_context(|| format!("failed to register {} command", COMMAND_TRIGGER_DANMAKU))
    }

    /// Routes an invocation to the handler registered for its trigger.
    pub async fn execute_command(&self, args: &CommandArgs) -> CommandResponse {
        match extract_trigger(&args.command) {
            COMMAND_TRIGGER_DANMAKU => {
                let config = (self.config_source)();
                execute_command_danmaku(self.api.as_ref(), &self.client, &config, args).await
            }
            _ => CommandResponse::ephemeral(format!("Unknown command: {}", args.command)),
        }
    }
}
