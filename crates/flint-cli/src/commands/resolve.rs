//! Resolve command

use anyhow::Result;
use flint_asset::AssetResolver;
use flint_resolver::ResolverConfig;
use serde::Serialize;

#[derive(Serialize)]
struct Resolution<'a> {
    locator: &'a str,
    reference: bool,
    resolved: Option<String>,
}

pub fn run(config: &ResolverConfig, locators: &[String], format: &str) -> Result<()> {
    let resolver = super::build_resolver(config)?;

    let results: Vec<Resolution> = locators
        .iter()
        .map(|locator| {
            let resolved = resolver.resolve(locator);
            Resolution {
                locator,
                reference: resolver.is_reference(locator),
                resolved: (!resolved.is_empty()).then(|| resolved.into_string()),
            }
        })
        .collect();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&results)?),
        _ => {
            for result in &results {
                let kind = if result.reference { "ref " } else { "path" };
                match &result.resolved {
                    Some(path) => println!("[{}] {} -> {}", kind, result.locator, path),
                    None => println!("[{}] {} -> (unresolved)", kind, result.locator),
                }
            }
        }
    }

    Ok(())
}
