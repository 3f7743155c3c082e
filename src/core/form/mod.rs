mod state;
mod storage;
mod store;

pub use state::{FormField, FormState};
pub use storage::{FileStorage, MemoryStorage, StateStorage};
pub use store::{FormStore, STORAGE_KEY, persist, read_state};
