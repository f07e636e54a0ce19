use std::path::PathBuf;

const APP_DIRECTORY: &str = "color-picker";

pub fn get_home_directory() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// `$XDG_CONFIG_HOME/color-picker`, falling back to `~/.config/color-picker`.
pub fn get_config_directory() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| get_home_directory().map(|home| home.join(".config")))?;

    Some(base.join(APP_DIRECTORY))
}
