//! Command handler registry
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use std::collections::HashMap;
use std::sync::Arc;

use super::handler::SlashCommandHandler;
use super::kind::BotCommand;

/// Registry mapping commands to handlers
#[derive(Clone)]
pub struct CommandRegistry {
    handlers: HashMap<BotCommand, Arc<dyn SlashCommandHandler>>,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with every built-in handler
    pub fn with_default_handlers() -> Self {
        let mut registry = Self::new();
        for handler in super::handlers::create_all_handlers() {
            registry.register(handler);
        }
        registry
    }

    /// Register a handler for every command it declares
    pub fn register(&mut self, handler: Arc<dyn SlashCommandHandler>) {
        for command in handler.commands() {
            self.handlers.insert(*command, Arc::clone(&handler));
        }
    }

    pub fn get(&self, command: BotCommand) -> Option<Arc<dyn SlashCommandHandler>> {
        self.handlers.get(&command).cloned()
    }

    pub fn contains(&self, command: BotCommand) -> bool {
        self.handlers.contains_key(&command)
    }

    /// Commands that have no handler yet
    pub fn missing(&self) -> Vec<BotCommand> {
        BotCommand::ALL
            .into_iter()
            .filter(|command| !self.contains(*command))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::context::CommandContext;
    use anyhow::Result;
    use async_trait::async_trait;
    use serenity::model::application::interaction::application_command::ApplicationCommandInteraction;
    use serenity::prelude::Context;

    struct MockHandler {
        commands: &'static [BotCommand],
    }

    #[async_trait]
    impl SlashCommandHandler for MockHandler {
        fn commands(&self) -> &'static [BotCommand] {
            self.commands
        }

        async fn handle(
            &self,
            _ctx: Arc<CommandContext>,
            _serenity_ctx: &Context,
            _command: BotCommand,
            _interaction: &ApplicationCommandInteraction,
        ) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_registry_new_is_empty() {
        let registry = CommandRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.missing().len(), BotCommand::ALL.len());
    }

    #[test]
    fn test_registry_register_multiple_commands() {
        let mut registry = CommandRegistry::new();
        registry.register(Arc::new(MockHandler {
            commands: &[BotCommand::HarassMe, BotCommand::StopHarassment],
        }));

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(BotCommand::HarassMe));
        assert!(registry.get(BotCommand::StopHarassment).is_some());
        assert!(registry.get(BotCommand::SendVideo).is_none());
        assert_eq!(
            registry.missing(),
            vec![BotCommand::SendVideo, BotCommand::SendVideoById]
        );
    }

    #[test]
    fn test_default_handlers_cover_every_command() {
        let registry = CommandRegistry::with_default_handlers();
        assert!(registry.missing().is_empty());
        assert_eq!(registry.len(), BotCommand::ALL.len());
    }
}
