//! Test doubles for the resolver crate

use flint_asset::{
    Asset, AssetInfo, AssetResolver, ResolvedPath, Timestamp, WritableAsset, WriteMode,
    WritePermission,
};
use flint_core::{FlintError, Result};
use flint_manager::{
    Access, Capability, Context, EntityReference, HostInterface, LocatableContent, Manager,
    ManagerFactory, TraitsData,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

use crate::diagnostics::HostDiagnostics;

/// Sink that keeps every diagnostic as (action, message)
#[derive(Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<(String, String)>>,
}

impl RecordingDiagnostics {
    fn push(&self, action: &str, message: &str) {
        self.entries
            .lock()
            .unwrap()
            .push((action.to_string(), message.to_string()));
    }

    pub fn entries(&self) -> Vec<(String, String)> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages delivered through the fatal action
    pub fn criticals(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(action, _)| action == "fatal")
            .map(|(_, message)| message)
            .collect()
    }
}

impl HostDiagnostics for RecordingDiagnostics {
    fn fatal(&self, message: &str) {
        self.push("fatal", message);
    }

    fn error(&self, message: &str) {
        self.push("error", message);
    }

    fn warning(&self, message: &str) {
        self.push("warning", message);
    }

    fn status(&self, message: &str) {
        self.push("status", message);
    }

    fn debug(&self, message: &str) {
        self.push("debug", message);
    }
}

/// What the stub manager does when an entity is resolved
#[derive(Debug, Clone)]
pub enum StubBehavior {
    Location(String),
    NoLocation,
    NonStringLocation,
    Error(String),
    Panic,
}

/// Manager whose references are `stub://<name>`
pub struct StubManager {
    resolution: bool,
    entities: HashMap<String, StubBehavior>,
    resolve_calls: AtomicUsize,
    requested: Mutex<Vec<Vec<String>>>,
}

impl StubManager {
    pub const PREFIX: &'static str = "stub://";

    pub fn new() -> Self {
        Self {
            resolution: true,
            entities: HashMap::new(),
            resolve_calls: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn with_entity(mut self, name: &str, behavior: StubBehavior) -> Self {
        self.entities.insert(name.to_string(), behavior);
        self
    }

    pub fn without_resolution(mut self) -> Self {
        self.resolution = false;
        self
    }

    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    pub fn requested_traits(&self) -> Vec<Vec<String>> {
        self.requested.lock().unwrap().clone()
    }
}

impl Manager for StubManager {
    fn identifier(&self) -> &str {
        "org.flint.test.stub"
    }

    fn display_name(&self) -> &str {
        "Stub Manager"
    }

    fn has_capability(&self, capability: Capability) -> bool {
        match capability {
            Capability::Resolution => self.resolution,
            Capability::EntityReferenceIdentification => true,
            Capability::Publishing => false,
        }
    }

    fn is_entity_reference_string(&self, s: &str) -> bool {
        s.starts_with(Self::PREFIX)
    }

    fn resolve(
        &self,
        reference: &EntityReference,
        trait_set: &[&str],
        _access: Access,
        _context: &Context,
    ) -> Result<TraitsData> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);
        self.requested
            .lock()
            .unwrap()
            .push(trait_set.iter().map(|s| s.to_string()).collect());

        let name = reference.as_str().trim_start_matches(Self::PREFIX);
        let mut data = TraitsData::new();
        match self.entities.get(name) {
            Some(StubBehavior::Location(url)) => LocatableContent::set_location(&mut data, url),
            Some(StubBehavior::NoLocation) => data.add_trait(LocatableContent::ID),
            Some(StubBehavior::NonStringLocation) => {
                data.set_property(LocatableContent::ID, LocatableContent::LOCATION, 42i64)
            }
            Some(StubBehavior::Error(msg)) => return Err(FlintError::BackendError(msg.clone())),
            Some(StubBehavior::Panic) => panic!("stub manager panicked"),
            None => return Err(FlintError::BackendError(format!("Entity '{}' not found", reference))),
        }
        Ok(data)
    }
}

type StubConstructor = fn() -> StubManager;

/// Factory handing out a fresh stub manager, nothing, or an error
pub struct StubFactory {
    outcome: std::result::Result<Option<StubConstructor>, String>,
    hosts: Mutex<Vec<HostInterface>>,
}

impl StubFactory {
    pub fn with(constructor: StubConstructor) -> Self {
        Self {
            outcome: Ok(Some(constructor)),
            hosts: Mutex::new(Vec::new()),
        }
    }

    pub fn empty() -> Self {
        Self {
            outcome: Ok(None),
            hosts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            hosts: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_hosts(&self) -> Vec<HostInterface> {
        self.hosts.lock().unwrap().clone()
    }
}

impl ManagerFactory for StubFactory {
    fn default_manager(&self, host: &HostInterface) -> Result<Option<Box<dyn Manager>>> {
        self.hosts.lock().unwrap().push(host.clone());
        match &self.outcome {
            Ok(Some(constructor)) => Ok(Some(Box::new(constructor()))),
            Ok(None) => Ok(None),
            Err(message) => Err(FlintError::ConfigError(message.clone())),
        }
    }
}

/// Deterministic stand-in for the filesystem resolver that counts calls
#[derive(Default)]
pub struct CountingResolver {
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl AssetResolver for CountingResolver {
    fn create_identifier(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        self.hit();
        format!("{}|{}", anchor, asset_path)
    }

    fn create_identifier_for_new_asset(&self, asset_path: &str, anchor: &ResolvedPath) -> String {
        self.hit();
        format!("new:{}|{}", anchor, asset_path)
    }

    fn resolve(&self, asset_path: &str) -> ResolvedPath {
        self.hit();
        ResolvedPath::new(format!("/fs/{}", asset_path))
    }

    fn resolve_for_new_asset(&self, asset_path: &str) -> ResolvedPath {
        self.hit();
        ResolvedPath::new(format!("/fs/new/{}", asset_path))
    }

    fn get_extension(&self, asset_path: &str) -> String {
        self.hit();
        asset_path.rsplit('.').next().unwrap_or("").to_string()
    }

    fn get_asset_info(&self, asset_path: &str, _resolved: &ResolvedPath) -> AssetInfo {
        self.hit();
        AssetInfo {
            asset_name: Some(asset_path.to_string()),
            ..AssetInfo::default()
        }
    }

    fn get_modification_timestamp(&self, _asset_path: &str, _resolved: &ResolvedPath) -> Timestamp {
        self.hit();
        Timestamp::new(SystemTime::UNIX_EPOCH)
    }

    fn open_asset(&self, _resolved: &ResolvedPath) -> Option<Arc<dyn Asset>> {
        self.hit();
        None
    }

    fn can_write_asset_to_path(&self, _resolved: &ResolvedPath) -> WritePermission {
        self.hit();
        WritePermission::Allowed
    }

    fn open_asset_for_write(
        &self,
        _resolved: &ResolvedPath,
        _mode: WriteMode,
    ) -> Option<Arc<dyn WritableAsset>> {
        self.hit();
        None
    }
}
