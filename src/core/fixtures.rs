use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

fn get_fixture_dir() -> PathBuf {
    env::var("NSE_FIXDIR").map_or_else(
        |_| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
        PathBuf::from,
    )
}

/// Keys are index names and symbols ("NIFTY 50", "M&M"); keep filenames portable.
fn sanitize(key: &str) -> String {
    key.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// `<endpoint>_<key>.<ext>`, the name offline tests look fixtures up by.
pub(crate) fn fixture_name(endpoint: &str, key: &str, ext: &str) -> String {
    format!("{}_{}.{}", endpoint, sanitize(key), ext)
}

fn write_fixture_in(
    dir: &Path,
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<PathBuf, std::io::Error> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    let path = dir.join(fixture_name(endpoint, key, ext));
    let mut file = fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;
    Ok(path)
}

pub(crate) fn record_fixture(
    endpoint: &str,
    key: &str,
    ext: &str,
    body: &str,
) -> Result<(), std::io::Error> {
    let path = write_fixture_in(&get_fixture_dir(), endpoint, key, ext, body)?;

    if env::var("NSE_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("NSE_RECORD: wrote fixture to {}", path.display());
    }
    Ok(())
}
