use origin_relay_domain::UpstreamEndpoint;

/// Registry of upstreams marked online by an operator.
///
/// Absence means "offline or unknown".
pub trait UpstreamRegistry: Send + Sync {
    fn register(&self, upstream: UpstreamEndpoint);

    fn is_online(&self, upstream: &UpstreamEndpoint) -> bool;

    /// Returns true when the upstream was registered.
    fn unregister(&self, upstream: &UpstreamEndpoint) -> bool;

    fn list(&self) -> Vec<UpstreamEndpoint>;
}
