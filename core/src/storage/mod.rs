mod key_value_store;
mod serializer;
mod session_store;

pub use key_value_store::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use serializer::{Serializer, YamlSerializer};
pub use session_store::{SESSION_KEY, SessionStore};
