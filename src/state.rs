use crate::config::Config;
use crate::store::RecordStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: RecordStore,
    pub config: Config,
}

impl FromRef<AppState> for RecordStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
