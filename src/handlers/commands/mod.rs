//! Command handlers module
//!
//! This module contains handlers for the bot commands /start, /cancel and /help

pub mod cancel;
pub mod help;
pub mod start;

use teloxide::utils::command::BotCommands;

/// All available bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "MiBici commands:")]
pub enum Command {
    #[command(description = "Mostrar el menú principal")]
    Start,
    #[command(description = "Cancelar el regreso de bici en curso")]
    Cancel,
    #[command(description = "Mostrar ayuda")]
    Help,
}
