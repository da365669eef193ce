//! Login and logout command implementations.
use secrecy::SecretString;

use crate::{
    cli::Args,
    credentials::{FileTokenStore, TokenStore},
    error::{Result, ShipfolderError},
    types::TokenPair,
};

/// Save the tokens given via flags or environment.
pub fn login(args: &Args) -> Result<()> {
    let (Some(github), Some(vercel)) = (&args.github_token, &args.vercel_token)
    else {
        return Err(ShipfolderError::credentials("Please enter both tokens"));
    };

    let store = FileTokenStore::default_location()?;
    store.save(&TokenPair {
        github: SecretString::from(github.clone()),
        vercel: SecretString::from(vercel.clone()),
    })
}

/// Remove any saved tokens.
pub fn logout() -> Result<()> {
    FileTokenStore::default_location()?.clear()
}
