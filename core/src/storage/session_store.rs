use crate::error::GameError;
use crate::games::gomoku::GameSnapshot;
use super::{KeyValueStore, Serializer, YamlSerializer};

pub const SESSION_KEY: &str = "gomoku_session";

pub struct SessionStore<TStore, TSerializer = YamlSerializer>
where
    TStore: KeyValueStore,
    TSerializer: Serializer<GameSnapshot>,
{
    store: TStore,
    serializer: TSerializer,
}

impl<TStore> SessionStore<TStore, YamlSerializer>
where
    TStore: KeyValueStore,
{
    pub fn new(store: TStore) -> Self {
        Self {
            store,
            serializer: YamlSerializer::new(),
        }
    }
}

impl<TStore, TSerializer> SessionStore<TStore, TSerializer>
where
    TStore: KeyValueStore,
    TSerializer: Serializer<GameSnapshot>,
{
    pub fn with_serializer(store: TStore, serializer: TSerializer) -> Self {
        Self { store, serializer }
    }

    pub fn save(&self, snapshot: &GameSnapshot) -> Result<(), String> {
        let content = self.serializer.serialize(snapshot)?;
        self.store.set(SESSION_KEY, &content)
    }

    /// `Ok(None)` when nothing was saved; unreadable or undecodable data is `MalformedSnapshot`.
    pub fn load(&self) -> Result<Option<GameSnapshot>, GameError> {
        let Some(content) = self.store.get(SESSION_KEY).map_err(GameError::MalformedSnapshot)? else {
            return Ok(None);
        };

        self.serializer
            .deserialize(&content)
            .map(Some)
            .map_err(GameError::MalformedSnapshot)
    }

    pub fn clear(&self) -> Result<(), String> {
        self.store.remove(SESSION_KEY)
    }
}
