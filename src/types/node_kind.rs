//! The closed set of node kinds a pipeline can contain.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a pipeline node. Serialized as its canonical tag (`"llm"`, `"text"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
  #[serde(alias = "customInput")]
  Input,
  #[serde(alias = "customOutput")]
  Output,
  Llm,
  Text,
  Transform,
  Condition,
  Api,
  Embedding,
  Summarize,
}

impl NodeKind {
  /// Every kind, in palette order.
  pub const ALL: [NodeKind; 9] = [
    NodeKind::Input,
    NodeKind::Llm,
    NodeKind::Output,
    NodeKind::Text,
    NodeKind::Transform,
    NodeKind::Condition,
    NodeKind::Api,
    NodeKind::Embedding,
    NodeKind::Summarize,
  ];

  /// Canonical tag used on the wire and as the id prefix.
  pub fn tag(&self) -> &'static str {
    match self {
      NodeKind::Input => "input",
      NodeKind::Output => "output",
      NodeKind::Llm => "llm",
      NodeKind::Text => "text",
      NodeKind::Transform => "transform",
      NodeKind::Condition => "condition",
      NodeKind::Api => "api",
      NodeKind::Embedding => "embedding",
      NodeKind::Summarize => "summarize",
    }
  }

  /// Title shown in the palette and node header.
  pub fn label(&self) -> &'static str {
    match self {
      NodeKind::Input => "Input",
      NodeKind::Output => "Output",
      NodeKind::Llm => "LLM",
      NodeKind::Text => "Text",
      NodeKind::Transform => "Transform",
      NodeKind::Condition => "Condition",
      NodeKind::Api => "API",
      NodeKind::Embedding => "Embedding",
      NodeKind::Summarize => "Summarize",
    }
  }

  /// Resolves a tag, accepting the legacy `customInput` / `customOutput` palette tags.
  pub fn from_tag(tag: &str) -> Option<NodeKind> {
    match tag {
      "input" | "customInput" => Some(NodeKind::Input),
      "output" | "customOutput" => Some(NodeKind::Output),
      "llm" => Some(NodeKind::Llm),
      "text" => Some(NodeKind::Text),
      "transform" => Some(NodeKind::Transform),
      "condition" => Some(NodeKind::Condition),
      "api" => Some(NodeKind::Api),
      "embedding" => Some(NodeKind::Embedding),
      "summarize" => Some(NodeKind::Summarize),
      _ => None,
    }
  }

  /// True when the port set depends on node data rather than the kind alone.
  pub fn has_dynamic_ports(&self) -> bool {
    matches!(self, NodeKind::Text)
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tag())
  }
}

impl FromStr for NodeKind {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    NodeKind::from_tag(s).ok_or_else(|| format!("unknown node type '{}'", s))
  }
}
