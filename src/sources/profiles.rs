use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use indexmap::IndexSet;
use tracing::debug;

use super::{ItemSource, SourceError};
use crate::model::Item;

const CONFIG_FILE_ENV: &str = "AWS_CONFIG_FILE";
const CREDENTIALS_FILE_ENV: &str = "AWS_SHARED_CREDENTIALS_FILE";

/// Which shared file a section header comes from.
///
/// The config file prefixes named profiles with `profile `; the credentials
/// file does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFileKind {
	Config,
	Credentials,
}

/// Locations of the AWS shared configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFiles {
	pub config: Option<PathBuf>,
	pub credentials: Option<PathBuf>,
}

impl ProfileFiles {
	/// Resolve the files the AWS CLI would read, honouring the usual
	/// environment overrides.
	pub fn from_env() -> Result<Self, SourceError> {
		let home = BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
		Self::resolve(|name| env::var_os(name), home)
	}

	/// Resolve both files from `lookup`, falling back to `~/.aws`. The home
	/// directory is only required for a file with no override.
	pub fn resolve(
		lookup: impl Fn(&str) -> Option<OsString>,
		home: Option<PathBuf>,
	) -> Result<Self, SourceError> {
		let aws_dir = home.map(|dir| dir.join(".aws"));
		let path_for = |name: &str, fallback: &str| -> Result<PathBuf, SourceError> {
			match lookup(name) {
				Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
				_ => aws_dir
					.as_ref()
					.map(|dir| dir.join(fallback))
					.ok_or(SourceError::NoHome),
			}
		};

		Ok(Self {
			config: Some(path_for(CONFIG_FILE_ENV, "config")?),
			credentials: Some(path_for(CREDENTIALS_FILE_ENV, "credentials")?),
		})
	}
}

/// Lists the profiles declared in the AWS shared files.
#[derive(Debug, Clone)]
pub struct ProfileSource {
	files: Option<ProfileFiles>,
}

impl ProfileSource {
	/// Read the files resolved from the environment when the list mounts.
	#[must_use]
	pub fn from_env() -> Self {
		Self { files: None }
	}

	#[must_use]
	pub fn with_files(files: ProfileFiles) -> Self {
		Self { files: Some(files) }
	}

	fn read_names(path: &Path, kind: ProfileFileKind) -> Result<Vec<String>, SourceError> {
		match fs::read_to_string(path) {
			Ok(contents) => Ok(parse_profile_names(&contents, kind)),
			Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
			Err(source) => Err(SourceError::Read {
				path: path.to_path_buf(),
				source,
			}),
		}
	}
}

impl ItemSource for ProfileSource {
	fn fetch(&self) -> Result<Vec<Item>, SourceError> {
		let files = match &self.files {
			Some(files) => files.clone(),
			None => ProfileFiles::from_env()?,
		};

		let mut names = IndexSet::new();
		if let Some(path) = &files.config {
			names.extend(Self::read_names(path, ProfileFileKind::Config)?);
		}
		if let Some(path) = &files.credentials {
			names.extend(Self::read_names(path, ProfileFileKind::Credentials)?);
		}
		debug!(count = names.len(), "loaded AWS profiles");

		Ok(names.into_iter().map(Item::labelled).collect())
	}
}

/// Extract profile names from the section headers of a shared file.
///
/// Comments (`#`, `;`) and non-profile sections of the config file such as
/// `[sso-session x]` are skipped.
#[must_use]
pub fn parse_profile_names(contents: &str, kind: ProfileFileKind) -> Vec<String> {
	contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.starts_with('#') && !line.starts_with(';'))
		.filter_map(|line| line.strip_prefix('[')?.strip_suffix(']'))
		.map(str::trim)
		.filter_map(|section| match kind {
			ProfileFileKind::Credentials => Some(section),
			ProfileFileKind::Config if section == "default" => Some(section),
			ProfileFileKind::Config => section.strip_prefix("profile ").map(str::trim),
		})
		.filter(|name| !name.is_empty())
		.map(str::to_owned)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::tempdir;

	#[test]
	fn config_sections_require_the_profile_prefix() {
		let contents = "\
[default]
region = us-east-1

[profile admin]
region = eu-west-1

[sso-session corp]
sso_region = us-east-1

# [profile commented]
[ profile spaced ]
";
		assert_eq!(
			parse_profile_names(contents, ProfileFileKind::Config),
			vec!["default", "admin", "spaced"]
		);
	}

	#[test]
	fn prefixed_default_matches_the_bare_default() {
		let dir = tempdir().unwrap();
		let config = dir.path().join("config");
		fs::write(&config, "[profile default]\n[default]\n[profile ops]\n").unwrap();

		let source = ProfileSource::with_files(ProfileFiles {
			config: Some(config),
			credentials: None,
		});
		let ids: Vec<String> = source.fetch().unwrap().into_iter().map(|item| item.id).collect();
		assert_eq!(ids, vec!["default", "ops"]);
	}

	#[test]
	fn overrides_do_not_need_a_home_directory() {
		let lookup = |name: &str| match name {
			CONFIG_FILE_ENV => Some(OsString::from("/etc/aws/config")),
			CREDENTIALS_FILE_ENV => Some(OsString::from("/etc/aws/credentials")),
			_ => None,
		};
		let files = ProfileFiles::resolve(lookup, None).unwrap();
		assert_eq!(files.config, Some(PathBuf::from("/etc/aws/config")));
		assert_eq!(files.credentials, Some(PathBuf::from("/etc/aws/credentials")));
	}

	#[test]
	fn missing_home_fails_only_for_unset_files() {
		let lookup = |name: &str| {
			(name == CONFIG_FILE_ENV).then(|| OsString::from("/etc/aws/config"))
		};
		let err = ProfileFiles::resolve(lookup, None).unwrap_err();
		assert!(matches!(err, SourceError::NoHome));

		let files = ProfileFiles::resolve(|_| None, Some(PathBuf::from("/home/dev"))).unwrap();
		assert_eq!(files.config, Some(PathBuf::from("/home/dev/.aws/config")));
		assert_eq!(
			files.credentials,
			Some(PathBuf::from("/home/dev/.aws/credentials"))
		);
	}

	#[test]
	fn credential_sections_are_bare_names() {
		let contents = "[default]\naws_access_key_id = x\n[ci]\n";
		assert_eq!(
			parse_profile_names(contents, ProfileFileKind::Credentials),
			vec!["default", "ci"]
		);
	}

	#[test]
	fn config_order_comes_first_without_duplicates() {
		let dir = tempdir().unwrap();
		let config = dir.path().join("config");
		let credentials = dir.path().join("credentials");
		fs::write(&config, "[default]\n[profile admin]\n").unwrap();
		fs::write(&credentials, "[ci]\n[default]\n").unwrap();

		let source = ProfileSource::with_files(ProfileFiles {
			config: Some(config),
			credentials: Some(credentials),
		});
		let ids: Vec<String> = source.fetch().unwrap().into_iter().map(|item| item.id).collect();
		assert_eq!(ids, vec!["default", "admin", "ci"]);
	}

	#[test]
	fn missing_files_yield_no_profiles() {
		let dir = tempdir().unwrap();
		let source = ProfileSource::with_files(ProfileFiles {
			config: Some(dir.path().join("absent-config")),
			credentials: None,
		});
		assert!(source.fetch().unwrap().is_empty());
	}

	#[test]
	fn unreadable_paths_are_reported() {
		let dir = tempdir().unwrap();
		let source = ProfileSource::with_files(ProfileFiles {
			config: Some(dir.path().to_path_buf()),
			credentials: None,
		});
		let err = source.fetch().unwrap_err();
		assert!(matches!(err, SourceError::Read { .. }));
	}
}
