use crate::{
    config::Config,
    infrastructure::classifier::traits::{FallbackClassifier, RemoteGateway},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gateway: Arc<dyn RemoteGateway>,
    pub fallback: Arc<dyn FallbackClassifier>,
}
