//! Implementation of the `templet open` command.

use crate::config::Config;
use crate::error::Result;
use crate::fs::open_in_file_manager;
use crate::store::TemplateStore;

/// Open the templates directory in the system file manager, creating it
/// first if needed.
pub fn cmd_open() -> Result<()> {
    let config = Config::load()?;
    let store = TemplateStore::new(config.templates_dir()?);
    store.ensure_dir()?;

    open_in_file_manager(store.dir(), config.file_manager.as_deref())
}
