//! CLI: build a small pipeline through an editor session and submit it.
//!
//! Drops an input, a text, an LLM and an output node onto a headless canvas,
//! edits the text template, wires the nodes, prints every node's ports and
//! sends the graph to the validator.
//!
//! Usage: `pipeline_demo [--api-url URL] [--timeout-secs N]`
//!
//! Set RUST_LOG=pipeline_canvas=trace for span enter/exit and events.

use std::process;
use std::time::Duration;

use clap::Parser;
use pipeline_canvas::types::{CanvasBounds, Point, ViewportTransform};
use pipeline_canvas::{
  DropEvent, EditorSession, HttpValidator, NodeKind, SubmissionReport, ValidatorConfig,
};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

/// Build a demo pipeline and submit it to the validator.
#[derive(Parser, Debug)]
#[command(name = "pipeline_demo")]
#[command(after_help = r#"Environment variables (used when the flags are absent):
  PIPELINE_API_URL           Validator base address (default: http://localhost:8000).
  PIPELINE_API_TIMEOUT_SECS  Request timeout in seconds (default: 30).

Examples:
  pipeline_demo
  pipeline_demo --api-url http://127.0.0.1:9000"#)]
struct Args {
  /// Validator base address.
  #[arg(long, value_name = "URL", env = "PIPELINE_API_URL")]
  api_url: Option<String>,

  /// Request timeout in seconds.
  #[arg(long, value_name = "SECS", env = "PIPELINE_API_TIMEOUT_SECS")]
  timeout_secs: Option<u64>,
}

fn drop_node(session: &mut EditorSession, kind: NodeKind, x: f64, y: f64) -> String {
  let outcome = session.handle_drop(&DropEvent::new(Point::new(x, y), kind.tag()));
  match outcome.created() {
    Some(id) => id.to_string(),
    None => {
      eprintln!("Drop of {} was ignored: {:?}", kind.label(), outcome);
      process::exit(1);
    }
  }
}

fn wire(session: &mut EditorSession, source: &str, source_port: &str, target: &str, target_port: &str) {
  let source_handle = format!("{source}-{source_port}");
  let target_handle = format!("{target}-{target_port}");
  if let Err(e) = session.connect(source, &source_handle, target, &target_handle) {
    eprintln!("Error connecting {source_handle} -> {target_handle}: {e}");
    process::exit(1);
  }
}

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
    .init();

  info!("pipeline_demo starting");
  let args = Args::parse();

  let mut config = ValidatorConfig::from_env();
  if let Some(url) = &args.api_url {
    config = ValidatorConfig::new(url.as_str()).with_timeout(config.timeout);
  }
  if let Some(secs) = args.timeout_secs {
    config = config.with_timeout(Duration::from_secs(secs));
  }
  info!(base_url = %config.base_url, timeout = ?config.timeout, "validator config");

  let mut session = EditorSession::new();
  session.set_canvas_bounds(CanvasBounds::new(0.0, 0.0, 1200.0, 800.0));
  session.set_viewport(ViewportTransform::identity());

  let input = drop_node(&mut session, NodeKind::Input, 50.0, 200.0);
  let text = drop_node(&mut session, NodeKind::Text, 300.0, 200.0);
  let llm = drop_node(&mut session, NodeKind::Llm, 550.0, 200.0);
  let output = drop_node(&mut session, NodeKind::Output, 800.0, 200.0);

  if let Err(e) = session.edit_node_data(&text, json!({ "text": "Answer briefly: {{question}}" })) {
    eprintln!("Error editing {text}: {e}");
    process::exit(1);
  }

  wire(&mut session, &input, "value", &text, "question");
  wire(&mut session, &text, "output", &llm, "prompt");
  wire(&mut session, &llm, "response", &output, "value");

  for node in session.store().nodes() {
    let Some(ports) = session.ports(&node.id) else {
      continue;
    };
    let inputs: Vec<&str> = ports.inputs.iter().map(|p| p.name.as_str()).collect();
    let outputs: Vec<&str> = ports.outputs.iter().map(|p| p.name.as_str()).collect();
    println!("{} ({}): in {:?} out {:?}", node.id, node.kind.label(), inputs, outputs);
  }

  let validator = match HttpValidator::new(&config) {
    Ok(v) => v,
    Err(e) => {
      eprintln!("Error: {e}");
      process::exit(1);
    }
  };

  let report = session.submit(&validator).await;
  println!("{report}");
  if !matches!(report, SubmissionReport::Parsed(_)) {
    process::exit(1);
  }
}
