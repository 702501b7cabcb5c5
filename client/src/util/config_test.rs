use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ClientConfig::from_lookup(|_| None);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.image_cloud_name, None);
    assert!(!cfg.mock_mode);
    assert_eq!(cfg, ClientConfig::default());
}

#[test]
fn overrides_are_trimmed_and_normalized() {
    let cfg = ClientConfig::from_lookup(lookup(&[
        ("TOURDESK_API_URL", " https://api.example.test/ "),
        ("TOURDESK_IMAGE_CLOUD_NAME", "demo"),
        ("TOURDESK_IMAGE_UPLOAD_PRESET", "unsigned"),
        ("TOURDESK_MOCK_MODE", "YES"),
    ]));
    assert_eq!(cfg.api_url, "https://api.example.test");
    assert!(cfg.mock_mode);
    let host = cfg.image_host().unwrap();
    assert_eq!(host.upload_url(), "https://api.cloudinary.com/v1_1/demo/image/upload");
    assert_eq!(host.upload_preset, "unsigned");
}

#[test]
fn blank_values_count_as_missing() {
    let cfg = ClientConfig::from_lookup(lookup(&[("TOURDESK_API_URL", "  "), ("TOURDESK_IMAGE_CLOUD_NAME", "")]));
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert_eq!(cfg.image_cloud_name, None);
}

#[test]
fn unknown_mock_word_falls_back_to_false() {
    let cfg = ClientConfig::from_lookup(lookup(&[("TOURDESK_MOCK_MODE", "maybe")]));
    assert!(!cfg.mock_mode);
}

#[test]
fn image_host_names_first_missing_variable() {
    let cfg = ClientConfig::from_lookup(lookup(&[("TOURDESK_IMAGE_UPLOAD_PRESET", "unsigned")]));
    assert_eq!(cfg.image_host(), Err(ConfigError::MissingImageHost { var: "TOURDESK_IMAGE_CLOUD_NAME" }));

    let cfg = ClientConfig::from_lookup(lookup(&[("TOURDESK_IMAGE_CLOUD_NAME", "demo")]));
    assert_eq!(cfg.image_host(), Err(ConfigError::MissingImageHost { var: "TOURDESK_IMAGE_UPLOAD_PRESET" }));
}

#[test]
fn env_bool_true_variants() {
    for val in ["1", "true", "yes", "on", " ON "] {
        assert_eq!(env_bool(Some(val)), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn env_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(env_bool(Some(val)), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn env_bool_unrecognized_is_none() {
    assert_eq!(env_bool(Some("2")), None);
    assert_eq!(env_bool(None), None);
}
