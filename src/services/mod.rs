// Service module exports
// Splitting, collision layout, the event cache and settings persistence

pub mod cache;
pub mod layout;
pub mod settings;
pub mod splitter;
