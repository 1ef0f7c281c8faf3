//! Tests for `NodeKind`.

use super::NodeKind;

#[test]
fn tag_roundtrips_through_from_tag() {
  for kind in NodeKind::ALL {
    assert_eq!(NodeKind::from_tag(kind.tag()), Some(kind));
  }
}

#[test]
fn legacy_palette_tags_resolve() {
  assert_eq!(NodeKind::from_tag("customInput"), Some(NodeKind::Input));
  assert_eq!(NodeKind::from_tag("customOutput"), Some(NodeKind::Output));
}

#[test]
fn unknown_tag_is_none() {
  assert_eq!(NodeKind::from_tag("LLM"), None);
  assert_eq!(NodeKind::from_tag(""), None);
  assert!("database".parse::<NodeKind>().is_err());
}

#[test]
fn serializes_as_canonical_tag() {
  let json = serde_json::to_string(&NodeKind::Llm).unwrap();
  assert_eq!(json, "\"llm\"");
  let parsed: NodeKind = serde_json::from_str("\"customOutput\"").unwrap();
  assert_eq!(parsed, NodeKind::Output);
}

#[test]
fn only_text_has_dynamic_ports() {
  let dynamic: Vec<NodeKind> = NodeKind::ALL
    .into_iter()
    .filter(|k| k.has_dynamic_ports())
    .collect();
  assert_eq!(dynamic, vec![NodeKind::Text]);
}

#[test]
fn labels() {
  assert_eq!(NodeKind::Llm.label(), "LLM");
  assert_eq!(NodeKind::Api.label(), "API");
  assert_eq!(NodeKind::Summarize.to_string(), "summarize");
}
