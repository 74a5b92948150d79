//! Trait data returned by managers
//!
//! A trait is a named group of properties describing one facet of an
//! entity. `TraitsData` holds any number of them, keyed by trait id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl TraitValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TraitValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for TraitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraitValue::Bool(v) => write!(f, "{}", v),
            TraitValue::Int(v) => write!(f, "{}", v),
            TraitValue::Float(v) => write!(f, "{}", v),
            TraitValue::String(v) => f.write_str(v),
        }
    }
}

impl From<&str> for TraitValue {
    fn from(value: &str) -> Self {
        TraitValue::String(value.to_string())
    }
}

impl From<String> for TraitValue {
    fn from(value: String) -> Self {
        TraitValue::String(value)
    }
}

impl From<i64> for TraitValue {
    fn from(value: i64) -> Self {
        TraitValue::Int(value)
    }
}

impl From<f64> for TraitValue {
    fn from(value: f64) -> Self {
        TraitValue::Float(value)
    }
}

impl From<bool> for TraitValue {
    fn from(value: bool) -> Self {
        TraitValue::Bool(value)
    }
}

/// Trait id -> property name -> value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitsData {
    traits: BTreeMap<String, BTreeMap<String, TraitValue>>,
}

impl TraitsData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait with no properties (imbue it)
    pub fn add_trait(&mut self, trait_id: &str) {
        self.traits.entry(trait_id.to_string()).or_default();
    }

    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.traits.contains_key(trait_id)
    }

    /// Set a property, adding its trait if needed
    pub fn set_property(&mut self, trait_id: &str, key: &str, value: impl Into<TraitValue>) {
        self.traits
            .entry(trait_id.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
    }

    pub fn property(&self, trait_id: &str, key: &str) -> Option<&TraitValue> {
        self.traits.get(trait_id).and_then(|props| props.get(key))
    }

    /// Ids of all traits present
    pub fn trait_set(&self) -> Vec<&str> {
        self.traits.keys().map(|s| s.as_str()).collect()
    }

    /// Copy of this data restricted to the given traits
    pub fn subset(&self, trait_ids: &[&str]) -> TraitsData {
        let traits = self
            .traits
            .iter()
            .filter(|(id, _)| trait_ids.contains(&id.as_str()))
            .map(|(id, props)| (id.clone(), props.clone()))
            .collect();
        TraitsData { traits }
    }

    /// Apply `f` to every string property in place
    pub fn map_strings(&mut self, f: impl Fn(&str) -> String) {
        for props in self.traits.values_mut() {
            for value in props.values_mut() {
                if let TraitValue::String(s) = value {
                    *s = f(s);
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }
}

/// Content that can be found at a URL
pub struct LocatableContent<'a> {
    data: &'a TraitsData,
}

impl<'a> LocatableContent<'a> {
    pub const ID: &'static str = "content.LocatableContent";
    pub const LOCATION: &'static str = "location";

    pub fn new(data: &'a TraitsData) -> Self {
        Self { data }
    }

    /// Whether the data carries this trait at all
    pub fn is_imbued(&self) -> bool {
        self.data.has_trait(Self::ID)
    }

    /// The raw `location` property, if set
    pub fn location(&self) -> Option<&'a TraitValue> {
        self.data.property(Self::ID, Self::LOCATION)
    }

    /// Set `location` on `data`
    pub fn set_location(data: &mut TraitsData, url: &str) {
        data.set_property(Self::ID, Self::LOCATION, url);
    }
}
