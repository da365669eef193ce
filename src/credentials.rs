//! Persistent storage for the GitHub and Vercel tokens.
//!
//! Tokens are kept in a small TOML file under the user's config directory
//! with fixed keys. The deployment pipeline never reads this store itself;
//! callers resolve a [`TokenPair`] up front and hand it to the clients.
use log::*;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{fs, io::Write, path::PathBuf};

use crate::{
    config::app_config_dir,
    error::{Result, ShipfolderError},
    types::TokenPair,
};

/// Default credentials filename.
pub const TOKENS_FILE: &str = "tokens.toml";

/// Storage for the two service tokens.
pub trait TokenStore {
    /// Both stored tokens, or None unless both are present.
    fn load(&self) -> Result<Option<TokenPair>>;
    fn save(&self, tokens: &TokenPair) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredTokens {
    github_token: Option<String>,
    vercel_token: Option<String>,
}

/// TOML file backed [`TokenStore`].
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/shipfolder/tokens.toml`.
    pub fn default_location() -> Result<Self> {
        let dir = app_config_dir().ok_or_else(|| {
            ShipfolderError::credentials("unable to determine config directory")
        })?;
        Ok(Self::new(dir.join(TOKENS_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<TokenPair>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let stored: StoredTokens = toml::from_str(&content)?;

        match (stored.github_token, stored.vercel_token) {
            (Some(github), Some(vercel))
                if !github.is_empty() && !vercel.is_empty() =>
            {
                Ok(Some(TokenPair {
                    github: SecretString::from(github),
                    vercel: SecretString::from(vercel),
                }))
            }
            _ => {
                debug!("token store at {} is incomplete", self.path.display());
                Ok(None)
            }
        }
    }

    fn save(&self, tokens: &TokenPair) -> Result<()> {
        let github = tokens.github.expose_secret().trim();
        let vercel = tokens.vercel.expose_secret().trim();

        if github.is_empty() || vercel.is_empty() {
            return Err(ShipfolderError::credentials(
                "Please enter both tokens",
            ));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let stored = StoredTokens {
            github_token: Some(github.to_string()),
            vercel_token: Some(vercel.to_string()),
        };

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            // mode only applies on creation
            if self.path.exists() {
                fs::set_permissions(
                    &self.path,
                    fs::Permissions::from_mode(0o600),
                )?;
            }
        }

        let mut file = options.open(&self.path)?;
        file.write_all(toml::to_string(&stored)?.as_bytes())?;

        info!("saved tokens to {}", self.path.display());

        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            info!("removed tokens from {}", self.path.display());
        }
        Ok(())
    }
}

/// Resolve both tokens: explicit values (flags or environment) win, the
/// store fills in the rest.
pub fn resolve_tokens(
    github: Option<String>,
    vercel: Option<String>,
    store: &dyn TokenStore,
) -> Result<TokenPair> {
    let github = github.filter(|t| !t.trim().is_empty());
    let vercel = vercel.filter(|t| !t.trim().is_empty());

    if let (Some(github), Some(vercel)) = (&github, &vercel) {
        return Ok(TokenPair {
            github: SecretString::from(github.clone()),
            vercel: SecretString::from(vercel.clone()),
        });
    }

    let stored = store.load()?;

    let github = match github {
        Some(token) => SecretString::from(token),
        None => stored.as_ref().map(|t| t.github.clone()).ok_or_else(|| {
            ShipfolderError::credentials(
                "missing GitHub token: pass --github-token, set \
                 GITHUB_TOKEN, or run `shipfolder login`",
            )
        })?,
    };

    let vercel = match vercel {
        Some(token) => SecretString::from(token),
        None => stored.as_ref().map(|t| t.vercel.clone()).ok_or_else(|| {
            ShipfolderError::credentials(
                "missing Vercel token: pass --vercel-token, set \
                 VERCEL_TOKEN, or run `shipfolder login`",
            )
        })?,
    };

    Ok(TokenPair { github, vercel })
}
