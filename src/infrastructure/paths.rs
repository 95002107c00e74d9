//! Filesystem locations used by the engine.
//!
//! Only the trace exporter and user configuration touch the filesystem; both
//! resolve through the XDG data directory so nothing is written next to the
//! binary.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "vagas";

/// Returns the data directory for vagas trace output.
///
/// Resolves to `$XDG_DATA_HOME/vagas` when that variable is set to an
/// absolute path, otherwise `$HOME/.local/share/vagas`. When neither is
/// available the relative directory `.vagas` is used.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(
        std::env::var_os("XDG_DATA_HOME").as_deref().map(Path::new),
        std::env::var_os("HOME").as_deref().map(Path::new),
    )
}

fn resolve_data_dir(xdg_data_home: Option<&Path>, home: Option<&Path>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|p| p.is_absolute()) {
        return xdg.join(APP_DIR);
    }
    match home {
        Some(home) => home.join(".local").join("share").join(APP_DIR),
        None => PathBuf::from(format!(".{APP_DIR}")),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// # Examples
///
/// ```
/// use vagas::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/etc/vagas.toml"), std::path::PathBuf::from("/etc/vagas.toml"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    expand_with_home(path, std::env::var_os("HOME").as_deref().map(Path::new))
}

fn expand_with_home(path: &str, home: Option<&Path>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xdg_wins_when_absolute() {
        let dir = resolve_data_dir(Some(Path::new("/xdg")), Some(Path::new("/home/ana")));
        assert_eq!(dir, PathBuf::from("/xdg/vagas"));
    }

    #[test]
    fn relative_xdg_is_ignored() {
        let dir = resolve_data_dir(Some(Path::new("xdg")), Some(Path::new("/home/ana")));
        assert_eq!(dir, PathBuf::from("/home/ana/.local/share/vagas"));
    }

    #[test]
    fn no_home_falls_back_to_dot_dir() {
        assert_eq!(resolve_data_dir(None, None), PathBuf::from(".vagas"));
    }

    #[test]
    fn tilde_expansion() {
        let home = Some(Path::new("/home/ana"));
        assert_eq!(expand_with_home("~", home), PathBuf::from("/home/ana"));
        assert_eq!(
            expand_with_home("~/cfg/vagas.toml", home),
            PathBuf::from("/home/ana/cfg/vagas.toml")
        );
        assert_eq!(expand_with_home("~x", home), PathBuf::from("~x"));
        assert_eq!(expand_with_home("~/a", None), PathBuf::from("~/a"));
    }
}
