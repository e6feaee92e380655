pub mod origins;
pub mod upstreams;

pub use origins::{DeleteOriginUseCase, GetOriginsUseCase, UpsertOriginUseCase};
pub use upstreams::{
    DeleteUpstreamUseCase, GetUpstreamsUseCase, RegisterUpstreamUseCase, UpstreamRemoval,
};
