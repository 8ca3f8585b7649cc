/// Paginates one card per registered command.
pub mod cards;
/// Plain command catalog.
pub mod help;
/// Paginates image attachments or image URLs.
pub mod images;
/// Paginates long text.
pub mod text;
