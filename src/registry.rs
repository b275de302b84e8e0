//! Name-keyed store of built graphs.
//!
//! Registration is reserve → build → commit. The name is reserved under a
//! short lock, the build runs unlocked, and the lock is taken again only to
//! commit the graph or drop the reservation. A second registration of a
//! reserved or registered name fails immediately, so at most one graph per
//! name is ever live and slow builds never block other names.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::builder::GraphBuilder;
use crate::error::RegistrationError;
use crate::graph::AudioGraph;
use crate::types::AudioRenderCategory;

/// Serializable summary of one registered graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRecord {
  pub name: String,
  /// Content path the graph decodes.
  pub file_path: String,
  pub category: AudioRenderCategory,
  pub registered_at: DateTime<Utc>,
}

#[derive(Debug)]
struct RegisteredGraph {
  graph: Arc<AudioGraph>,
  registered_at: DateTime<Utc>,
}

#[derive(Debug)]
enum Slot {
  /// Build in progress; invisible to lookups.
  Reserved,
  Registered(RegisteredGraph),
}

type Slots = HashMap<String, Slot>;

fn lock(slots: &Mutex<Slots>) -> MutexGuard<'_, Slots> {
  slots.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds a name while its graph is being built.
///
/// Dropping without [Reservation::commit] (build failure or cancelled future)
/// frees the name for a later attempt.
struct Reservation<'a> {
  slots: &'a Mutex<Slots>,
  name: &'a str,
  committed: bool,
}

impl<'a> Reservation<'a> {
  /// Reserves `name`, or returns `None` if it is reserved or registered.
  fn acquire(slots: &'a Mutex<Slots>, name: &'a str) -> Option<Self> {
    let mut guard = lock(slots);
    if guard.contains_key(name) {
      return None;
    }
    guard.insert(name.to_string(), Slot::Reserved);
    Some(Self {
      slots,
      name,
      committed: false,
    })
  }

  fn commit(mut self, graph: Arc<AudioGraph>) {
    let entry = RegisteredGraph {
      graph,
      registered_at: Utc::now(),
    };
    lock(self.slots).insert(self.name.to_string(), Slot::Registered(entry));
    self.committed = true;
  }
}

impl Drop for Reservation<'_> {
  fn drop(&mut self) {
    if self.committed {
      return;
    }
    let mut guard = lock(self.slots);
    if matches!(guard.get(self.name), Some(Slot::Reserved)) {
      guard.remove(self.name);
    }
  }
}

/// Registry holding at most one graph per name.
///
/// Construct one per process (see [crate::AudioEngine]) and share it by reference.
pub struct GraphRegistry {
  builder: GraphBuilder,
  slots: Mutex<Slots>,
}

impl GraphRegistry {
  pub fn new(builder: GraphBuilder) -> Self {
    Self {
      builder,
      slots: Mutex::new(HashMap::new()),
    }
  }

  pub fn builder(&self) -> &GraphBuilder {
    &self.builder
  }

  /// Builds a graph for `file_path` and registers it under `name`.
  ///
  /// Fails with [RegistrationError::AlreadyRegistered] if `name` is registered
  /// or another registration for it is in flight. A failed build leaves the
  /// registry unchanged. Dropping the returned future mid-build releases the
  /// partial graph and the reservation.
  #[instrument(level = "trace", skip(self))]
  pub async fn register(
    &self,
    name: &str,
    file_path: &str,
  ) -> Result<Arc<AudioGraph>, RegistrationError> {
    let Some(reservation) = Reservation::acquire(&self.slots, name) else {
      warn!(name, "already registered");
      return Err(RegistrationError::AlreadyRegistered(name.to_string()));
    };

    let graph = match self.builder.build(file_path).await {
      Ok(graph) => Arc::new(graph),
      Err(source) => {
        warn!(name, stage = source.stage(), error = %source, "failed to register");
        return Err(RegistrationError::BuildFailed {
          name: name.to_string(),
          source,
        });
      }
    };

    reservation.commit(Arc::clone(&graph));
    info!(name, graph = %graph.id(), file_path, "registered");
    Ok(graph)
  }

  /// Registered graph for `name`. In-flight registrations are not visible.
  pub fn get(&self, name: &str) -> Option<Arc<AudioGraph>> {
    match lock(&self.slots).get(name) {
      Some(Slot::Registered(entry)) => Some(Arc::clone(&entry.graph)),
      _ => None,
    }
  }

  pub fn contains(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  /// Number of registered graphs.
  pub fn len(&self) -> usize {
    lock(&self.slots)
      .values()
      .filter(|s| matches!(s, Slot::Registered(_)))
      .count()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Registered names, sorted.
  pub fn names(&self) -> Vec<String> {
    let mut names: Vec<String> = lock(&self.slots)
      .iter()
      .filter(|(_, s)| matches!(s, Slot::Registered(_)))
      .map(|(n, _)| n.clone())
      .collect();
    names.sort();
    names
  }

  /// One record per registered graph, sorted by name.
  pub fn snapshot(&self) -> Vec<RegistrationRecord> {
    let mut records: Vec<RegistrationRecord> = lock(&self.slots)
      .iter()
      .filter_map(|(name, slot)| match slot {
        Slot::Registered(entry) => Some(RegistrationRecord {
          name: name.clone(),
          file_path: entry.graph.source().relative_path.clone(),
          category: entry.graph.category(),
          registered_at: entry.registered_at,
        }),
        Slot::Reserved => None,
      })
      .collect();
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
  }
}
