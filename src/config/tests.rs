use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_rondo_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("RONDO_CONFIG_PATH", "/tmp/rondo-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/rondo-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("rondo")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("rondo")
            .join("config.toml")
    );
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[playback]
volume = 0.5
previous_restart_secs = 5.0
shuffle = true
repeat = true

[search]
debounce_ms = 250

[library]
extensions = ["mp3"]
recursive = false
include_hidden = false
follow_links = false
max_depth = 2
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RONDO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("RONDO__SEARCH__DEBOUNCE_MS");

    let s = Settings::load().unwrap();
    assert_eq!(s.playback.volume, 0.5);
    assert_eq!(s.playback.previous_restart_secs, 5.0);
    assert!(s.playback.shuffle);
    assert!(s.playback.repeat);
    assert_eq!(s.search.debounce_ms, 250);
    assert_eq!(s.library.extensions, vec!["mp3".to_string()]);
    assert!(!s.library.recursive);
    assert!(!s.library.include_hidden);
    assert!(!s.library.follow_links);
    assert_eq!(s.library.max_depth, Some(2));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[search]
debounce_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("RONDO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("RONDO__SEARCH__DEBOUNCE_MS", "100");

    let s = Settings::load().unwrap();
    assert_eq!(s.search.debounce_ms, 100);
}

#[test]
fn defaults_match_a_fresh_session() {
    let s = Settings::default();
    assert_eq!(s.playback.volume, 0.7);
    assert_eq!(s.playback.previous_restart_secs, 3.0);
    assert!(!s.playback.shuffle);
    assert!(!s.playback.repeat);
    assert_eq!(s.search.debounce_ms, 500);
}

#[test]
fn validate_rejects_out_of_range_values() {
    let mut s = Settings::default();
    assert!(s.validate().is_ok());

    s.playback.volume = 1.4;
    assert!(s.validate().is_err());

    s.playback.volume = 0.7;
    s.playback.previous_restart_secs = -1.0;
    assert!(s.validate().is_err());
}
