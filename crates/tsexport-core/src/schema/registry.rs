use std::collections::HashMap;

use super::entity::EntityDescriptor;

/// Ordered registry of the entities to export in one run.
///
/// Entities are keyed by their qualified name. Registering an entity a second
/// time replaces the earlier definition but keeps its original position, so
/// the export order stays the discovery order.
#[derive(Debug, Default, Clone)]
pub struct SchemaRegistry {
    /// Entities in registration order.
    entities: Vec<EntityDescriptor>,

    /// Qualified name -> position in `entities`.
    index: HashMap<String, usize>,
}

impl SchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity definition.
    pub fn register_entity(&mut self, entity: EntityDescriptor) {
        let key = entity.qualified_name();
        match self.index.get(&key) {
            Some(&position) => {
                tracing::debug!(entity = %key, "Replacing duplicate entity definition");
                self.entities[position] = entity;
            }
            None => {
                self.index.insert(key, self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    /// Get an entity by namespace and name.
    pub fn get_entity(&self, namespace: &str, name: &str) -> Option<&EntityDescriptor> {
        self.index
            .get(&format!("{}.{}", namespace, name))
            .map(|&position| &self.entities[position])
    }

    /// All registered entities, in registration order.
    pub fn entities(&self) -> &[EntityDescriptor] {
        &self.entities
    }

    /// Drop every entity whose namespace is listed.
    pub fn exclude_namespaces(&mut self, excluded: &[String]) {
        if excluded.is_empty() {
            return;
        }
        let entities = std::mem::take(&mut self.entities);
        self.index.clear();
        for entity in entities {
            if excluded.iter().any(|ns| *ns == entity.namespace) {
                tracing::debug!(entity = %entity.qualified_name(), "Excluded by namespace");
                continue;
            }
            self.register_entity(entity);
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl FromIterator<EntityDescriptor> for SchemaRegistry {
    fn from_iter<I: IntoIterator<Item = EntityDescriptor>>(iter: I) -> Self {
        let mut registry = SchemaRegistry::new();
        for entity in iter {
            registry.register_entity(entity);
        }
        registry
    }
}
