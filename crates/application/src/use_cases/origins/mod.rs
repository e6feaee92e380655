mod delete_origin;
mod get_origins;
mod upsert_origin;

pub use delete_origin::DeleteOriginUseCase;
pub use get_origins::GetOriginsUseCase;
pub use upsert_origin::UpsertOriginUseCase;
