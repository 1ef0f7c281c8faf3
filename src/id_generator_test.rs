//! Tests for `IdGenerator`.

use std::collections::HashSet;

use crate::id_generator::IdGenerator;
use crate::types::NodeKind;
use proptest::prelude::*;

#[test]
fn ids_carry_kind_tag_and_global_counter() {
  let mut ids = IdGenerator::new();
  assert_eq!(ids.next(NodeKind::Llm), "llm-1");
  assert_eq!(ids.next(NodeKind::Text), "text-2");
  assert_eq!(ids.next(NodeKind::Llm), "llm-3");
  assert_eq!(ids.issued(), 3);
  assert_eq!(ids.peek(), 4);
}

#[test]
fn legacy_tags_use_canonical_prefix() {
  let mut ids = IdGenerator::new();
  let kind = NodeKind::from_tag("customInput").unwrap();
  assert_eq!(ids.next(kind), "input-1");
}

#[test]
fn generators_are_independent() {
  let mut a = IdGenerator::new();
  let mut b = IdGenerator::default();
  assert_eq!(a.next(NodeKind::Api), "api-1");
  assert_eq!(b.next(NodeKind::Api), "api-1");
  assert_eq!(a.next(NodeKind::Api), "api-2");
  assert_eq!(b.issued(), 1);
}

proptest! {
  #[test]
  fn never_repeats_an_id(kinds in proptest::collection::vec(0usize..NodeKind::ALL.len(), 1..200)) {
    let mut ids = IdGenerator::new();
    let mut seen = HashSet::new();
    for k in kinds {
      let id = ids.next(NodeKind::ALL[k]);
      prop_assert!(seen.insert(id));
    }
  }
}
