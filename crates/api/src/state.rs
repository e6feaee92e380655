use origin_relay_application::ports::{OriginRepository, UpstreamRegistry};
use origin_relay_application::use_cases::{
    DeleteOriginUseCase, DeleteUpstreamUseCase, GetOriginsUseCase, GetUpstreamsUseCase,
    RegisterUpstreamUseCase, UpsertOriginUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct OriginUseCases {
    pub upsert: Arc<UpsertOriginUseCase>,
    pub get: Arc<GetOriginsUseCase>,
    pub delete: Arc<DeleteOriginUseCase>,
}

#[derive(Clone)]
pub struct UpstreamUseCases {
    pub register: Arc<RegisterUpstreamUseCase>,
    pub get: Arc<GetUpstreamsUseCase>,
    pub delete: Arc<DeleteUpstreamUseCase>,
}

#[derive(Clone)]
pub struct AppState {
    pub origins: OriginUseCases,
    pub upstreams: UpstreamUseCases,
}

impl AppState {
    pub fn new(origins: Arc<dyn OriginRepository>, registry: Arc<dyn UpstreamRegistry>) -> Self {
        Self {
            origins: OriginUseCases {
                upsert: Arc::new(UpsertOriginUseCase::new(origins.clone())),
                get: Arc::new(GetOriginsUseCase::new(origins.clone())),
                delete: Arc::new(DeleteOriginUseCase::new(origins.clone())),
            },
            upstreams: UpstreamUseCases {
                register: Arc::new(RegisterUpstreamUseCase::new(registry.clone())),
                get: Arc::new(GetUpstreamsUseCase::new(registry.clone())),
                delete: Arc::new(DeleteUpstreamUseCase::new(registry, origins)),
            },
        }
    }
}
