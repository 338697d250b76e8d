//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use arena_config::{ArenaConfig, ConfigError};
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://api.example.gg/api"
timeout_secs = 30
"#,
        )?;

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://api.example.gg/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.base_url_with_slash(), "https://api.example.gg/api/");
        assert!(config.api.is_configured());
        Ok(())
    });
}

#[test]
fn loads_access_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[access]
super_admin_roles = ["platform:superadmin", "platform:super_admin"]
"#,
        )?;

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.access.super_admin_roles,
            vec!["platform:superadmin", "platform:super_admin"]
        );
        assert!(config.validate().is_ok());
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[session]
persist = false
"#,
        )?;

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert!(!config.session.persist);
        assert_eq!(config.session.keyring_service, "arena-cli");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.api.timeout_secs, 15);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".arena")?;
        jail.create_file(
            ".arena/config.toml",
            r#"
[general]
default_limit = 50
"#,
        )?;

        let config = ArenaConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 50);
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_super_admin_roles() {
    Jail::expect_with(|jail| {
        jail.create_dir(".arena")?;
        jail.create_file(
            ".arena/config.toml",
            r#"
[access]
super_admin_roles = ["team:owner"]
"#,
        )?;

        let err = ArenaConfig::load().expect_err("team role is not a bypass role");
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        Ok(())
    });
}

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://from-toml.example.gg/api"
"#,
        )?;
        jail.set_env("ARENA_API__BASE_URL", "https://from-env.example.gg/api");

        let config: ArenaConfig = Figment::from(Serialized::defaults(ArenaConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ARENA_").split("__"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://from-env.example.gg/api");
        Ok(())
    });
}

#[test]
fn env_var_sets_numeric_and_list_values() {
    Jail::expect_with(|jail| {
        jail.set_env("ARENA_API__TIMEOUT_SECS", "45");
        jail.set_env(
            "ARENA_ACCESS__SUPER_ADMIN_ROLES",
            "[platform:superadmin, platform:super_admin]",
        );

        let config = ArenaConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 45);
        assert_eq!(config.access.super_admin_roles.len(), 2);
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ARENA_APII__BASE_URL", "https://typo.example.gg");

        let config = ArenaConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "http://localhost:4000/api/");
        Ok(())
    });
}
