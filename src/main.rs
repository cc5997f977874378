mod dioxus_gui; // dioxus implementation
mod catalog; mod config; mod contact; mod context; mod error; mod lang; mod locale; mod logging; mod pages; mod routes; mod shape;
use anyhow::{Context, Result};

fn main() -> Result<()> {
    let config = config::SiteConfig::load()?;
    logging::init(&config.log_level);
    let catalog = catalog::Catalog::load_embedded().context("loading translation catalog")?;
    dioxus_gui::run(config, catalog)?;
    Ok(())
}
