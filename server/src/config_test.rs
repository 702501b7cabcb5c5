use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn port_defaults_to_8080() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn port_override_is_trimmed() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " 3100 ")])).unwrap();
    assert_eq!(cfg.port, 3100);
}

#[test]
fn blank_port_uses_default() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidPort { ref value } if value == "eighty"));
    assert!(ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}
