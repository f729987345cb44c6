use axum::extract::FromRef;

use crate::catalog::SongQueryService;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedQueryService = Arc<SongQueryService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub query_service: GuardedQueryService,
}

impl FromRef<ServerState> for GuardedQueryService {
    fn from_ref(input: &ServerState) -> Self {
        input.query_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
