use std::collections::HashMap;
use std::time::Duration;

use crate::config::{API_URL_ENV, DEFAULT_API_URL, TIMEOUT_ENV, ValidatorConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
  let map: HashMap<String, String> = vars
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
  move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
  let c = ValidatorConfig::from_lookup(lookup(&[]));
  assert_eq!(c.base_url, DEFAULT_API_URL);
  assert_eq!(c.timeout, Duration::from_secs(30));
  assert_eq!(c, ValidatorConfig::default());
}

#[test]
fn reads_variables_and_trims_trailing_slash() {
  let c = ValidatorConfig::from_lookup(lookup(&[
    (API_URL_ENV, "http://validator:9000/"),
    (TIMEOUT_ENV, "5"),
  ]));
  assert_eq!(c.base_url, "http://validator:9000");
  assert_eq!(c.timeout, Duration::from_secs(5));
  assert_eq!(c.parse_url(), "http://validator:9000/pipelines/parse");
}

#[test]
fn bad_timeout_falls_back() {
  let c = ValidatorConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "soon")]));
  assert_eq!(c.timeout, Duration::from_secs(30));
  let c = ValidatorConfig::from_lookup(lookup(&[(TIMEOUT_ENV, "0")]));
  assert_eq!(c.timeout, Duration::from_secs(30));
}

#[test]
fn blank_url_falls_back() {
  let c = ValidatorConfig::from_lookup(lookup(&[(API_URL_ENV, "  ")]));
  assert_eq!(c.base_url, DEFAULT_API_URL);
}
