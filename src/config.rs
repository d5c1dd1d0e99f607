//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/wordhash/config.toml` (XDG) or platform config dir
//! 2. Project config: `.wordhash.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `WORDHASH_*`
//!
//! # Example
//!
//! ```toml
//! [vocabulary]
//! trigrams = "vocab/trigrams.txt"
//! relations = ["ba", "baa", "bab"]
//! types = "vocab/types.json"
//!
//! [encoding]
//! marker = "_"
//! ```
//!
//! Each vocabulary is either an inline list or a path. `.json` files hold a
//! JSON array of strings; any other file holds one token per line. Segment
//! lengths are never configured, they always equal the vocabulary sizes.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::encoding::{TrigramExtractor, DEFAULT_MARKER};
use crate::error::AppError;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub encoding: EncodingConfig,
}

/// The three vocabularies entities are encoded against.
#[derive(Debug, Clone, Deserialize)]
pub struct VocabularyConfig {
    /// Letter trigrams, in vector order.
    pub trigrams: VocabularySource,
    /// Relation labels, in vector order.
    pub relations: VocabularySource,
    /// Entity type labels, in vector order.
    pub types: VocabularySource,
}

/// Where a vocabulary's tokens come from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum VocabularySource {
    /// Tokens listed directly in the config.
    Inline(Vec<String>),
    /// Path to a token file.
    File(PathBuf),
}

impl VocabularySource {
    /// Reads the ordered token list.
    pub fn load(&self) -> Result<Vec<String>, AppError> {
        match self {
            VocabularySource::Inline(tokens) => Ok(tokens.clone()),
            VocabularySource::File(path) => read_vocabulary_file(path),
        }
    }
}

fn read_vocabulary_file(path: &Path) -> Result<Vec<String>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::VocabularyFile {
        path: path.to_path_buf(),
        source,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let tokens = if is_json {
        serde_json::from_str::<Vec<String>>(&content).map_err(|source| {
            AppError::InvalidVocabularyFile {
                path: path.to_path_buf(),
                source,
            }
        })?
    } else {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect()
    };

    tracing::debug!(path = %path.display(), tokens = tokens.len(), "Read vocabulary file");
    Ok(tokens)
}

/// Trigram extraction settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EncodingConfig {
    /// Boundary marker affixed to both ends of every word.
    #[serde(default = "default_marker")]
    pub marker: char,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER,
        }
    }
}

fn default_marker() -> char {
    DEFAULT_MARKER
}

impl EncodingConfig {
    pub fn extractor(&self) -> TrigramExtractor {
        TrigramExtractor::new(self.marker)
    }
}

/// Project config file, searched for from the working directory upwards.
const PROJECT_CONFIG: &str = ".wordhash.toml";

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_layers(&Self::user_config_path(), Path::new(PROJECT_CONFIG), None)
    }

    /// Load config with an explicit file layered above the user and project files.
    pub fn load_with(path: &Path) -> Result<Self, ConfigError> {
        Self::from_layers(
            &Self::user_config_path(),
            Path::new(PROJECT_CONFIG),
            Some(path),
        )
    }

    fn from_layers(
        user: &Path,
        project: &Path,
        explicit: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        // Layer 1: User config (lowest priority)
        // Layer 2: Project config
        let mut figment = Figment::new()
            .merge(Toml::file(user))
            .merge(Toml::file(project));

        // Layer 3: Explicit config file
        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        let figment = figment.merge(Env::prefixed("WORDHASH_").split("_"));

        let mut config: Config = figment.extract()?;
        config.vocabulary.resolve_paths(&figment);
        Ok(config)
    }

    /// User config path: ~/.config/wordhash/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("wordhash").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("wordhash").join("config.toml"))
            .unwrap_or_default()
    }
}

impl VocabularyConfig {
    /// Anchors relative vocabulary paths at the directory of the config file
    /// that declared them, the same rule figment's `RelativePathBuf` applies.
    ///
    /// `RelativePathBuf` itself can't sit inside the untagged
    /// [`VocabularySource`]: serde buffers untagged input, so figment never
    /// gets to attach the file metadata. Paths from the environment have no
    /// file and stay relative to the working directory.
    fn resolve_paths(&mut self, figment: &Figment) {
        let sources = [
            ("vocabulary.trigrams", &mut self.trigrams),
            ("vocabulary.relations", &mut self.relations),
            ("vocabulary.types", &mut self.types),
        ];

        for (key, source) in sources {
            let VocabularySource::File(path) = source else {
                continue;
            };
            if path.is_absolute() {
                continue;
            }

            let config_dir = figment
                .find_metadata(key)
                .and_then(|metadata| metadata.source.as_ref())
                .and_then(|source| source.file_path())
                .and_then(Path::parent);

            if let Some(dir) = config_dir {
                *path = dir.join(&*path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_inline_source() {
        let source = VocabularySource::Inline(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(source.load().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_line_file_source() {
        let file = write_file(".txt", "_a_\n  _ab \n\n_b_\r\n");
        let source = VocabularySource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), vec!["_a_", "_ab", "_b_"]);
    }

    #[test]
    fn test_json_file_source() {
        let file = write_file(".json", r#"["ba", "baa", "bab"]"#);
        let source = VocabularySource::File(file.path().to_path_buf());
        assert_eq!(source.load().unwrap(), vec!["ba", "baa", "bab"]);
    }

    #[test]
    fn test_invalid_json_file_source() {
        let file = write_file(".json", r#"{"not": "a list"}"#);
        let source = VocabularySource::File(file.path().to_path_buf());
        assert!(matches!(
            source.load(),
            Err(AppError::InvalidVocabularyFile { .. })
        ));
    }

    #[test]
    fn test_missing_file_source() {
        let source = VocabularySource::File(PathBuf::from("/nonexistent/wordhash/vocab.txt"));
        assert!(matches!(
            source.load(),
            Err(AppError::VocabularyFile { .. })
        ));
    }

    /// Loads `explicit` with user and project layers pointed at files that
    /// don't exist, so the developer's own config never leaks in.
    fn load_isolated(explicit: &Path) -> Result<Config, ConfigError> {
        let empty = tempfile::tempdir().unwrap();
        Config::from_layers(
            &empty.path().join("config.toml"),
            &empty.path().join(PROJECT_CONFIG),
            Some(explicit),
        )
    }

    #[test]
    #[serial]
    fn test_load_with_explicit_file() {
        let trigrams = write_file(".txt", "_a_\n_b_\n");
        let config_file = write_file(
            ".toml",
            &format!(
                "[vocabulary]\ntrigrams = {:?}\nrelations = [\"ba\"]\ntypes = [\"a\", \"b\"]\n",
                trigrams.path().display().to_string()
            ),
        );

        let config = load_isolated(config_file.path()).unwrap();

        assert_eq!(
            config.vocabulary.trigrams,
            VocabularySource::File(trigrams.path().to_path_buf())
        );
        assert_eq!(
            config.vocabulary.relations,
            VocabularySource::Inline(vec!["ba".to_string()])
        );
        assert_eq!(config.encoding.marker, DEFAULT_MARKER);
    }

    #[test]
    #[serial]
    fn test_relative_paths_resolve_against_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("trigrams.txt"), "_a_\n_b_\n").unwrap();
        std::fs::create_dir(dir.path().join("vocab")).unwrap();
        std::fs::write(dir.path().join("vocab").join("types.json"), r#"["a", "b"]"#).unwrap();

        let config_path = dir.path().join("wordhash.toml");
        std::fs::write(
            &config_path,
            "[vocabulary]\ntrigrams = \"trigrams.txt\"\nrelations = [\"ba\"]\ntypes = \"vocab/types.json\"\n",
        )
        .unwrap();

        // The working directory is the crate root, not the config's directory
        assert_ne!(std::env::current_dir().unwrap(), dir.path());
        let config = load_isolated(&config_path).unwrap();

        assert_eq!(
            config.vocabulary.trigrams,
            VocabularySource::File(dir.path().join("trigrams.txt"))
        );
        assert_eq!(
            config.vocabulary.types,
            VocabularySource::File(dir.path().join("vocab").join("types.json"))
        );

        let vocabularies = crate::encoding::Vocabularies::from_config(&config.vocabulary).unwrap();
        assert_eq!(vocabularies.trigrams.len(), 2);
        assert_eq!(vocabularies.types.len(), 2);
    }

    #[test]
    #[serial]
    fn test_env_overrides_marker() {
        let config_file = write_file(
            ".toml",
            "[vocabulary]\ntrigrams = []\nrelations = []\ntypes = []\n\n[encoding]\nmarker = \"_\"\n",
        );

        std::env::set_var("WORDHASH_ENCODING_MARKER", "#");
        let config = load_isolated(config_file.path());
        std::env::remove_var("WORDHASH_ENCODING_MARKER");

        assert_eq!(config.unwrap().encoding.marker, '#');
    }

    #[test]
    #[serial]
    fn test_missing_vocabulary_section() {
        let config_file = write_file(".toml", "[encoding]\nmarker = \"_\"\n");
        assert!(load_isolated(config_file.path()).is_err());
    }
}
