//! Identify command

use anyhow::Result;
use flint_asset::{AssetResolver, ResolvedPath};
use flint_resolver::ResolverConfig;

pub fn run(config: &ResolverConfig, locator: &str, anchor: Option<&str>) -> Result<()> {
    let resolver = super::build_resolver(config)?;
    let anchor = anchor.map(ResolvedPath::from).unwrap_or_default();

    let identifier = resolver.create_identifier(locator, &anchor);
    if identifier.is_empty() {
        anyhow::bail!("Could not create an identifier for '{}'", locator);
    }
    println!("{}", identifier);
    Ok(())
}
