use super::state::{FormField, FormState};
use super::storage::StateStorage;
use crate::error::{ParseError, StorageError};

/// Name of the single persisted slot holding the form.
pub const STORAGE_KEY: &str = "mpow-simple";

/// Read the stored slot. `Ok(None)` means nothing was ever saved.
pub fn read_state<S: StateStorage>(storage: &S) -> Result<Option<FormState>, ParseError> {
    let Some(raw) = storage.read(STORAGE_KEY)? else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Form state bound to the storage slot it persists into.
pub struct FormStore<S: StateStorage> {
    storage: S,
    state: FormState,
}

impl<S: StateStorage> FormStore<S> {
    /// Load the persisted state, falling back to the preset on any failure.
    pub fn load(storage: S) -> Self {
        let state = match read_state(&storage) {
            Ok(Some(state)) => state,
            Ok(None) => FormState::default(),
            Err(error) => {
                tracing::warn!(%error, key = STORAGE_KEY, "discarding stored form state");
                FormState::default()
            }
        };
        Self { storage, state }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn update(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) -> Result<&FormState, StorageError> {
        let next = self.state.with_field(field, value);
        self.commit(next)
    }

    pub fn reset(&mut self) -> Result<&FormState, StorageError> {
        self.commit(FormState::default())
    }

    /// Swap in a whole state, e.g. one decoded from a share link.
    pub fn replace(&mut self, state: FormState) -> Result<&FormState, StorageError> {
        self.commit(state)
    }

    fn commit(&mut self, next: FormState) -> Result<&FormState, StorageError> {
        self.state = next;
        persist(&self.storage, &self.state)?;
        Ok(&self.state)
    }
}

/// Write the full state into the slot in one call.
pub fn persist<S: StateStorage>(storage: &S, state: &FormState) -> Result<(), StorageError> {
    let json =
        serde_json::to_string(state).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.write(STORAGE_KEY, &json)
}
