//! Session-scoped node id allocation.

use crate::types::NodeKind;
use tracing::instrument;

/// Issues node ids of the form `{tag}-{n}`.
///
/// `n` comes from one counter shared by every kind, so an id is never issued
/// twice even when nodes of different kinds are deleted and re-created.
#[derive(Debug, Clone)]
pub struct IdGenerator {
  next: u64,
}

impl Default for IdGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl IdGenerator {
  pub fn new() -> Self {
    Self { next: 1 }
  }

  /// Returns a fresh id for a node of `kind` and advances the counter.
  #[instrument(level = "trace")]
  pub fn next(&mut self, kind: NodeKind) -> String {
    let n = self.next;
    self.next += 1;
    format!("{}-{}", kind.tag(), n)
  }

  /// Counter value the next id will use.
  pub fn peek(&self) -> u64 {
    self.next
  }

  /// Number of ids issued so far.
  pub fn issued(&self) -> u64 {
    self.next - 1
  }
}
