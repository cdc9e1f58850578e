use std::path::PathBuf;
use std::sync::atomic::AtomicU16;
use std::sync::atomic::Ordering::Relaxed;

pub static CONFIG_SEQ: AtomicU16 = AtomicU16::new(0);

/// Writes yaml to a fresh file in the temp directory and returns its path.
pub fn write_config(yaml: &str) -> PathBuf {
    let n = CONFIG_SEQ.fetch_add(1, Relaxed);
    let path = std::env::temp_dir().join(format!("pgerrors-test-{}-{}.yaml", std::process::id(), n));
    std::fs::write(&path, yaml).expect("couldn't write config file");
    path
}
