use super::*;

#[test]
fn defaults_when_unset() {
    let cfg = HostConfig::from_vars(None, None).unwrap();
    assert_eq!(cfg.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_vars(Some("  "), Some("")).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_BIND_ADDR);
}

#[test]
fn parses_overrides() {
    let cfg = HostConfig::from_vars(Some(" 8080 "), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn parses_ipv6_bind_addr() {
    let cfg = HostConfig::from_vars(Some("3001"), Some("::1")).unwrap();
    assert_eq!(cfg.addr, "[::1]:3001".parse::<SocketAddr>().unwrap());
}

#[test]
fn rejects_bad_port() {
    let err = HostConfig::from_vars(Some("eighty"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    assert_eq!(err.to_string(), "invalid PORT: eighty");
}

#[test]
fn rejects_out_of_range_port() {
    assert!(matches!(HostConfig::from_vars(Some("70000"), None), Err(ConfigError::InvalidPort(_))));
}

#[test]
fn rejects_bad_bind_addr() {
    let err = HostConfig::from_vars(None, Some("localhost")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(ref v) if v == "localhost"));
}
