#![allow(dead_code)]

use origin_relay_application::ports::{OriginRepository, UpstreamRegistry};
use origin_relay_domain::{Address, RoutingEntry, UpstreamEndpoint};
use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

#[derive(Default)]
pub struct MockOriginRepository {
    routes: RwLock<HashMap<Address, UpstreamEndpoint>>,
}

impl MockOriginRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_routes(routes: &[(&str, &str)]) -> Self {
        let repo = Self::new();
        for (ip, upstream) in routes {
            repo.upsert(RoutingEntry::new(
                Address::parse(ip).unwrap(),
                UpstreamEndpoint::parse(upstream).unwrap(),
            ));
        }
        repo
    }

    pub fn count(&self) -> usize {
        self.routes.read().unwrap().len()
    }
}

impl OriginRepository for MockOriginRepository {
    fn upsert(&self, entry: RoutingEntry) -> Option<UpstreamEndpoint> {
        self.routes
            .write()
            .unwrap()
            .insert(entry.origin, entry.upstream)
    }

    fn get(&self, origin: &Address) -> Option<UpstreamEndpoint> {
        self.routes.read().unwrap().get(origin).copied()
    }

    fn remove(&self, origin: &Address) -> Option<UpstreamEndpoint> {
        self.routes.write().unwrap().remove(origin)
    }

    fn remove_targeting(&self, upstream: &UpstreamEndpoint) -> Vec<RoutingEntry> {
        let mut routes = self.routes.write().unwrap();
        let mut removed = Vec::new();
        routes.retain(|origin, target| {
            if target == upstream {
                removed.push(RoutingEntry::new(*origin, *target));
                false
            } else {
                true
            }
        });
        removed
    }

    fn list(&self) -> Vec<RoutingEntry> {
        self.routes
            .read()
            .unwrap()
            .iter()
            .map(|(o, u)| RoutingEntry::new(*o, *u))
            .collect()
    }
}

#[derive(Default)]
pub struct MockUpstreamRegistry {
    online: RwLock<HashSet<UpstreamEndpoint>>,
}

impl MockUpstreamRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_online(upstreams: &[&str]) -> Self {
        let registry = Self::new();
        for upstream in upstreams {
            registry.register(UpstreamEndpoint::parse(upstream).unwrap());
        }
        registry
    }
}

impl UpstreamRegistry for MockUpstreamRegistry {
    fn register(&self, upstream: UpstreamEndpoint) {
        self.online.write().unwrap().insert(upstream);
    }

    fn is_online(&self, upstream: &UpstreamEndpoint) -> bool {
        self.online.read().unwrap().contains(upstream)
    }

    fn unregister(&self, upstream: &UpstreamEndpoint) -> bool {
        self.online.write().unwrap().remove(upstream)
    }

    fn list(&self) -> Vec<UpstreamEndpoint> {
        self.online.read().unwrap().iter().copied().collect()
    }
}
