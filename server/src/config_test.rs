use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.stream_url.is_none());
}

#[test]
fn reads_port_and_stream_url() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("STREAM_URL", "http://cam.local/mjpeg")]))
        .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.stream_url.as_deref(), Some("http://cam.local/mjpeg"));
}

#[test]
fn rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("eighty".to_owned()));
}

#[test]
fn rejects_out_of_range_port() {
    assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn blank_stream_url_is_treated_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("STREAM_URL", "  ")])).unwrap();
    assert!(cfg.stream_url.is_none());
}
