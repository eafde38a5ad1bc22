//! Implementation of the `templet list` command.

use crate::config::Config;
use crate::error::Result;
use crate::store::TemplateStore;

/// Print the available template names, one per line.
pub fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let store = TemplateStore::new(config.templates_dir()?);
    store.ensure_dir()?;

    let names = store.names()?;
    if names.is_empty() {
        println!("No templates found in '{}'", store.dir().display());
        println!("Add template files there, or run 'templet open'.");
        return Ok(());
    }

    for name in names {
        println!("{}", name);
    }
    Ok(())
}
