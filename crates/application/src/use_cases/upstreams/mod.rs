mod delete_upstream;
mod get_upstreams;
mod register_upstream;

pub use delete_upstream::{DeleteUpstreamUseCase, UpstreamRemoval};
pub use get_upstreams::GetUpstreamsUseCase;
pub use register_upstream::RegisterUpstreamUseCase;
