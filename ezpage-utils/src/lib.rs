/// Generic embed builders shared across commands.
pub mod embed;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Button pagination: controller, renderers, sessions and interaction glue.
pub mod pagination;
/// Pure text helpers.
pub mod text;
