mod append_container;
mod parse_many;
mod parse_task;

pub use append_container::SyncAppendContainer;
pub use parse_task::{ParseTask, ParseTaskHandle};
