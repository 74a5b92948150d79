//! Check command

use anyhow::Result;
use flint_manager::Manager;
use flint_resolver::ResolverConfig;

pub fn run(config: &ResolverConfig) -> Result<()> {
    let resolver = super::build_resolver(config)?;
    let manager = resolver.manager();

    println!("Asset manager: {} ({})", manager.display_name(), manager.identifier());
    println!("Log level: {}", config.log_level);
    let search_paths = resolver.fallback().search_paths();
    if search_paths.is_empty() {
        println!("Search paths: (none)");
    } else {
        println!("Search paths:");
        for path in search_paths {
            println!("  {}", path.display());
        }
    }
    Ok(())
}
