use super::*;

fn lookup_from<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| vars.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, HostConfig { port: DEFAULT_PORT, site_root: None });
}

#[test]
fn reads_port_and_site_root() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", " 8080 "), ("RENIT_SITE_ROOT", "/srv/renit")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.site_root, Some(PathBuf::from("/srv/renit")));
}

#[test]
fn blank_values_fall_back() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("PORT", ""), ("RENIT_SITE_ROOT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert!(cfg.site_root.is_none());
}

#[test]
fn rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "70000"));
    assert_eq!(err.to_string(), "invalid PORT value: \"70000\"");
}
