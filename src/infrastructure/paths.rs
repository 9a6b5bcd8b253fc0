//! Path utilities for the Zellij sandbox environment.
//!
//! In the Zellij plugin sandbox the host filesystem is mounted under `/host`,
//! so both the trace data directory and user-supplied paths (like theme files)
//! need prefix handling.

use std::path::PathBuf;

/// Returns the data directory for zspaces trace output.
///
/// Located at `/host/.local/share/zellij/zspaces` in the sandbox. `/host`
/// points at the cwd of the last focused terminal, which typically resolves to
/// the user's home directory, making the effective path
/// `~/.local/share/zellij/zspaces`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zspaces")
}

/// Expands tilde paths to use the `/host` prefix.
///
/// User-facing configuration (the `theme_file` option) accepts `~/...` paths;
/// inside the sandbox the home directory maps to `/host`.
///
/// # Examples
///
/// ```
/// use zspaces::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/my.toml"), "/host/themes/my.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_paths_map_into_the_sandbox() {
        assert_eq!(expand_tilde("~/a/b"), "/host/a/b");
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("relative/path"), "relative/path");
    }

    #[test]
    fn data_dir_lives_under_the_zellij_share() {
        assert!(get_data_dir()
            .to_string_lossy()
            .starts_with("/host/.local/share/zellij"));
    }
}
