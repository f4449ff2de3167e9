//! Documentation object registry
//!
//! The registry is the seam between documentation emission and the host that
//! consumes the documented objects. Producers call `register_class`,
//! `register_method`, and `attach_tag`; consumers either iterate the stored
//! entries or subscribe an observer that is invoked as each top-level class
//! is registered.

use crate::{DocClass, DocMethod, DocTag, DocgenError, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Separator between a class identifier and a method name in an object id
pub const OBJECT_PATH_SEPARATOR: char = '#';

/// Registry of documentation objects
///
/// Consumed, not implemented, by the documentor: any host able to accept
/// class/method/tag registrations can sit behind this trait.
pub trait DocRegistry {
    /// Register a new top-level class
    fn register_class(&mut self, class: DocClass) -> Result<()>;

    /// Register a method under an existing class
    fn register_method(&mut self, class_id: &str, method: DocMethod) -> Result<()>;

    /// Attach a tag to a registered object
    ///
    /// `object_id` is either a class identifier or `class#method`.
    fn attach_tag(&mut self, object_id: &str, tag: DocTag) -> Result<()>;
}

/// Callback invoked by the registry as classes are registered
pub trait RegistryObserver {
    /// Called after a new top-level class has been registered
    fn class_registered(&mut self, class: &DocClass);
}

/// A registered method together with its attached tags
#[derive(Debug, Clone, Serialize)]
pub struct MethodEntry {
    /// The registered method
    pub method: DocMethod,

    /// Tags attached after registration
    pub tags: Vec<DocTag>,
}

/// A registered class together with its methods and attached tags
#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    /// The registered class
    pub class: DocClass,

    /// Tags attached after registration
    pub tags: Vec<DocTag>,

    /// Methods registered under this class, in registration order
    pub methods: Vec<MethodEntry>,
}

/// In-memory registry implementation
///
/// Stores entries keyed by class identifier and notifies subscribed observers
/// on each class registration.
#[derive(Default)]
pub struct MemoryRegistry {
    classes: BTreeMap<String, ClassEntry>,
    observers: Vec<Box<dyn RegistryObserver>>,
}

impl MemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe an observer to class registrations
    pub fn subscribe(&mut self, observer: Box<dyn RegistryObserver>) {
        self.observers.push(observer);
    }

    /// Iterate registered classes in identifier order
    pub fn classes(&self) -> impl Iterator<Item = &ClassEntry> {
        self.classes.values()
    }

    /// Look up a class entry by identifier
    pub fn get(&self, identifier: &str) -> Option<&ClassEntry> {
        self.classes.get(identifier)
    }

    /// Number of registered classes
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether no class has been registered yet
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    fn entry_mut(&mut self, class_id: &str) -> Result<&mut ClassEntry> {
        self.classes
            .get_mut(class_id)
            .ok_or_else(|| DocgenError::ObjectNotFound(class_id.to_string()))
    }
}

impl DocRegistry for MemoryRegistry {
    fn register_class(&mut self, class: DocClass) -> Result<()> {
        if self.classes.contains_key(&class.identifier) {
            return Err(DocgenError::DuplicateObject(class.identifier));
        }

        for observer in &mut self.observers {
            observer.class_registered(&class);
        }

        self.classes.insert(
            class.identifier.clone(),
            ClassEntry {
                class,
                tags: Vec::new(),
                methods: Vec::new(),
            },
        );

        Ok(())
    }

    fn register_method(&mut self, class_id: &str, method: DocMethod) -> Result<()> {
        let entry = self.entry_mut(class_id)?;

        if entry.methods.iter().any(|m| m.method.name == method.name) {
            return Err(DocgenError::DuplicateObject(format!(
                "{}{}{}",
                class_id, OBJECT_PATH_SEPARATOR, method.name
            )));
        }

        entry.methods.push(MethodEntry {
            method,
            tags: Vec::new(),
        });

        Ok(())
    }

    fn attach_tag(&mut self, object_id: &str, tag: DocTag) -> Result<()> {
        match object_id.split_once(OBJECT_PATH_SEPARATOR) {
            None => {
                self.entry_mut(object_id)?.tags.push(tag);
                Ok(())
            }
            Some((class_id, method_name)) => {
                let entry = self.entry_mut(class_id)?;
                let method = entry
                    .methods
                    .iter_mut()
                    .find(|m| m.method.name == method_name)
                    .ok_or_else(|| DocgenError::ObjectNotFound(object_id.to_string()))?;
                method.tags.push(tag);
                Ok(())
            }
        }
    }
}
