//! End-to-end tests for the gather pipeline and file output

use conncheck_configs::{CheckDescriptor, CheckOptions, MakerRegistry, SettingsSnapshot};

fn full_settings() -> SettingsSnapshot {
    SettingsSnapshot::from_yaml_str(
        r#"
DATABASES:
  default:
    ENGINE: django.db.backends.postgresql_psycopg2
    NAME: appdb
    HOST: db.internal
    PORT: "5432"
    USER: app
    PASSWORD: secret
BROKER_HOST: redis.internal
BROKER_BACKEND: redis
BROKER_PORT: 6379
CACHES:
  default:
    BACKEND: django.core.cache.backends.memcached.MemcachedCache
    LOCATION:
      - a:1
      - b:2
  local:
    BACKEND: django.core.cache.backends.locmem.LocMemCache
    LOCATION: unique-snowflake
STATSD_HOST: udp.host:9999
"#,
    )
    .unwrap()
}

#[test]
fn full_scenario_produces_five_checks_in_order() {
    let registry = MakerRegistry::with_defaults();
    let checks = registry
        .gather(&full_settings(), &CheckOptions::new())
        .unwrap();

    let tags: Vec<&str> = checks.iter().map(|c| c.type_tag()).collect();
    assert_eq!(tags, ["postgres", "redis", "memcached", "memcached", "udp"]);

    match &checks[0] {
        CheckDescriptor::Postgres(db) => {
            assert_eq!(db.host, "db.internal");
            assert_eq!(db.database.as_deref(), Some("appdb"));
            assert_eq!(db.port, Some(5432));
        }
        other => panic!("expected postgres first, got {:?}", other),
    }

    match &checks[1] {
        CheckDescriptor::Redis { host, port, .. } => {
            assert_eq!(host, "redis.internal");
            assert_eq!(*port, 6379);
        }
        other => panic!("expected redis, got {:?}", other),
    }

    assert_eq!(
        checks[2],
        CheckDescriptor::Memcached {
            host: "a".to_string(),
            port: 1
        }
    );
    assert_eq!(
        checks[3],
        CheckDescriptor::Memcached {
            host: "b".to_string(),
            port: 2
        }
    );

    match &checks[4] {
        CheckDescriptor::Udp { host, port, .. } => {
            assert_eq!(host, "udp.host");
            assert_eq!(*port, 9999);
        }
        other => panic!("expected udp last, got {:?}", other),
    }
}

#[test]
fn gather_is_idempotent_across_runs() {
    let registry = MakerRegistry::with_defaults();
    let settings = full_settings();
    let options = CheckOptions::new();

    let first = registry.gather(&settings, &options).unwrap();
    let second = registry.gather(&settings, &options).unwrap();
    assert_eq!(first, second);
}

#[test]
fn statsd_override_applies_to_every_descriptor_in_run() {
    let registry = MakerRegistry::with_defaults();
    let settings = full_settings();

    let overridden = CheckOptions::new()
        .with_statsd_overrides(Some("app.ping:1|c".to_string()), Some("ok".to_string()));
    let checks = registry.gather(&settings, &overridden).unwrap();

    match checks.last().unwrap() {
        CheckDescriptor::Udp { send, expect, .. } => {
            assert_eq!(send, "app.ping:1|c");
            assert_eq!(expect, "ok");
        }
        other => panic!("expected udp, got {:?}", other),
    }

    // A run with untouched options still sees the built-in defaults.
    let defaults = registry.gather(&settings, &CheckOptions::new()).unwrap();
    match defaults.last().unwrap() {
        CheckDescriptor::Udp { send, expect, .. } => {
            assert_eq!(send, "conncheck.test:1|c");
            assert_eq!(expect, "");
        }
        other => panic!("expected udp, got {:?}", other),
    }
}

#[test]
fn yaml_output_round_trips_through_serde() {
    let registry = MakerRegistry::with_defaults();
    let checks = registry
        .gather(&full_settings(), &CheckOptions::new())
        .unwrap();

    let yaml = serde_yaml::to_string(&checks).unwrap();
    assert!(!yaml.contains("null"));

    let parsed: Vec<CheckDescriptor> = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, checks);
}

#[test]
fn exported_file_is_readable_check_config() {
    use conncheck_configs::cli::commands::{CliArgs, OutputFormatArg};
    use conncheck_configs::cli::handlers::handle_export;
    use std::fs;

    let dir = tempfile::tempdir().unwrap();
    let settings_path = dir.path().join("settings.yaml");
    fs::write(
        &settings_path,
        "STATSD_HOST: udp.host:9999\nCACHES:\n  default:\n    LOCATION: a:1\n",
    )
    .unwrap();
    let out_path = dir.path().join("checks.yaml");

    let args = CliArgs {
        settings: settings_path,
        output_file: Some(out_path.clone()),
        print: false,
        database_name: None,
        statsd_send: Some("app.ping:1|c".to_string()),
        statsd_expect: None,
        format: OutputFormatArg::Yaml,
        log_level: None,
        verbose: false,
        quiet: false,
    };

    assert_eq!(handle_export(&args), 0);

    let written = fs::read_to_string(&out_path).unwrap();
    let parsed: Vec<CheckDescriptor> = serde_yaml::from_str(&written).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].type_tag(), "memcached");
    match &parsed[1] {
        CheckDescriptor::Udp { send, .. } => assert_eq!(send, "app.ping:1|c"),
        other => panic!("expected udp, got {:?}", other),
    }
}
