//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ports::FsError;
use crate::domain::value_objects::CommandLine;
use crate::error::{SiteModeError, SiteModeResult};

use super::types::{Config, PROJECT_CONFIG_FILE};

pub use crate::domain::value_objects::ConfigWarning;

/// Environment variable overriding `publish.dir`
pub const ENV_PUBLISH_DIR: &str = "SITEMODE_PUBLISH_DIR";
/// Environment variable overriding `commands.build`
pub const ENV_BUILD_COMMAND: &str = "SITEMODE_BUILD_COMMAND";
/// Environment variable overriding `commands.deploy`
pub const ENV_DEPLOY_COMMAND: &str = "SITEMODE_DEPLOY_COMMAND";

/// Configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from (`None` = built-in defaults)
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SiteModeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SiteModeError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .iter()
        .map(|dotted| {
            let segments: Vec<&str> = dotted.split('.').collect();
            let (key, section) = match segments.split_last() {
                Some((key, section)) => (*key, section),
                None => (dotted.as_str(), &[][..]),
            };
            ConfigWarning {
                key: key.to_string(),
                file: path.to_path_buf(),
                line: find_line_number(&content, section, key),
                suggestion: suggest_key(section, key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration for a project.
///
/// Order: explicit `--config` file, `<project>/sitemode.toml`, user config
/// (`<config_dir>/sitemode/config.toml`), built-in defaults. The first file
/// found wins; environment overrides apply on top of it.
pub fn discover(project_root: &Path, explicit: Option<&Path>) -> SiteModeResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file()),
    };

    let (config, warnings) = match &candidate {
        Some(path) => load_with_warnings(path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config)?,
        source: candidate,
        warnings,
    })
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sitemode").join("config.toml"))
}

/// Apply environment variable overrides (SITEMODE_* prefix)
pub fn with_env_overrides(config: Config) -> SiteModeResult<Config> {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> SiteModeResult<Config> {
    if let Some(dir) = get_env(ENV_PUBLISH_DIR).filter(|d| !d.trim().is_empty()) {
        config.publish.dir = PathBuf::from(dir);
    }

    if let Some(line) = get_env(ENV_BUILD_COMMAND) {
        config.commands.build = parse_command("build", &line)?;
    }

    if let Some(line) = get_env(ENV_DEPLOY_COMMAND) {
        config.commands.deploy = parse_command("deploy", &line)?;
    }

    Ok(config)
}

fn parse_command(key: &str, line: &str) -> SiteModeResult<CommandLine> {
    CommandLine::parse(line).map_err(|e| SiteModeError::InvalidCommand {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// Line (1-based) of `key` inside the `[section]` table.
///
/// Matches either an assignment (`key = ...`) under the table header or a
/// table header naming the key itself (`[section.key]`).
fn find_line_number(content: &str, section: &[&str], key: &str) -> Option<usize> {
    let section_name = section.join(".");
    let full_name = if section_name.is_empty() {
        key.to_string()
    } else {
        format!("{section_name}.{key}")
    };

    let mut current = String::new();
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = table_header(trimmed) {
            if header == full_name {
                return Some(i + 1);
            }
            current = header;
            continue;
        }
        if current == section_name && assigns_key(trimmed, key) {
            return Some(i + 1);
        }
    }
    None
}

fn table_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?;
    let end = inner.find(']')?;
    Some(
        inner[..end]
            .split('.')
            .map(|part| part.trim().trim_matches('"'))
            .collect::<Vec<_>>()
            .join("."),
    )
}

fn assigns_key(line: &str, key: &str) -> bool {
    let rest = match line.strip_prefix(key) {
        Some(rest) => rest,
        None => match line
            .strip_prefix('"')
            .and_then(|l| l.strip_prefix(key))
            .and_then(|l| l.strip_prefix('"'))
        {
            Some(rest) => rest,
            None => return false,
        },
    };
    rest.trim_start().starts_with('=')
}

/// Keys accepted by the table at `section`
fn section_keys(section: &[&str]) -> &'static [&'static str] {
    match section {
        [] => &["bundle", "publish", "commands"],
        ["bundle"] => &["document", "icon"],
        ["publish"] => &["dir", "index_name", "icon_name"],
        ["commands"] => &["build", "deploy"],
        _ => &[],
    }
}

fn suggest_key(section: &[&str], unknown: &str) -> Option<String> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in section_keys(section) {
        if *candidate == unknown {
            continue;
        }
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
