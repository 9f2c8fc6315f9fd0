// Module exports for models
// Value types shared by the splitter, the layout engine and the cache

pub mod event;
pub mod period;
pub mod segment;
pub mod settings;
