//! Settings file persistence.
//!
//! One line: `min,max,confirm_threshold`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::Settings;

pub const CONFIG_ENV: &str = "MASSPASS_CONFIG";

pub fn default_path() -> PathBuf {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/masspass/settings", home))
}

pub fn save(settings: &Settings, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    file.write_all(format_line(settings).as_bytes())
}

pub fn load(path: &Path) -> io::Result<Settings> {
    let line = match fs::read_to_string(path) {
        Ok(line) => line,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e),
    };

    parse_line(line.trim()).ok_or_else(|| {
        io::Error::new(
            ErrorKind::InvalidData,
            format!("malformed settings in {}", path.display()),
        )
    })
}

fn format_line(settings: &Settings) -> String {
    format!(
        "{},{},{}\n",
        settings.min_length, settings.max_length, settings.confirm_threshold
    )
}

fn parse_line(line: &str) -> Option<Settings> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    Some(Settings {
        min_length: parts[0].parse().ok()?,
        max_length: parts[1].parse().ok()?,
        confirm_threshold: parts[2].parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load(&dir.path().join("nope")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings");
        let settings = Settings {
            min_length: 8,
            max_length: 16,
            confirm_threshold: 500,
        };

        save(&settings, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "8,16,500\n");
        assert_eq!(load(&path).unwrap(), settings);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "8,sixteen,500\n").unwrap();
        assert_eq!(load(&path).unwrap_err().kind(), ErrorKind::InvalidData);

        fs::write(&path, "8,16\n").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn parse_tolerates_spaces() {
        assert_eq!(
            parse_line(" 4 , 9 ,100"),
            Some(Settings {
                min_length: 4,
                max_length: 9,
                confirm_threshold: 100
            })
        );
    }
}
