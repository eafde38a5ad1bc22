//! Implementation of the `templet new` command.
//!
//! Flow:
//! 1. Pick a template (or take `--template`)
//! 2. Ask for the output file name, defaulting to the template name
//! 3. Resolve placeholder tokens against the target directory
//! 4. Write `<target>/<filename>` and confirm
//!
//! Cancelling any prompt aborts the whole run: no prompt is re-issued and
//! nothing is written. An empty template store is not an error
//! interactively; the user is offered the templates folder instead.

use crate::cli::NewArgs;
use crate::config::Config;
use crate::context::find_workspace_root;
use crate::error::{Result, TempletError};
use crate::fs::{open_in_file_manager, write_new_file};
use crate::resolver::{ResolutionContext, resolve};
use crate::store::TemplateStore;
use crate::ui::{Prompter, TermPrompter};
use chrono::Local;
use std::env;

/// Remedial action offered when the store is empty.
const OPEN_TEMPLATES_FOLDER: &str = "Open Templates Folder";

/// Execute the `templet new` command.
pub fn cmd_new(args: NewArgs) -> Result<()> {
    let config = Config::load()?;
    let store = TemplateStore::new(config.templates_dir()?);
    store.ensure_dir()?;

    run(args, &config, &store, &mut TermPrompter)
}

fn run(
    args: NewArgs,
    config: &Config,
    store: &TemplateStore,
    prompter: &mut dyn Prompter,
) -> Result<()> {
    let names = store.names()?;

    if names.is_empty() {
        // Non-interactive callers get a hard error; interactive runs are
        // offered the templates folder and end successfully either way.
        if args.template.is_some() {
            return Err(TempletError::NoTemplates(store.dir().to_path_buf()));
        }
        let options = vec![OPEN_TEMPLATES_FOLDER.to_string()];
        if let Some(choice) = prompter.pick("No templates found!", &options)?
            && choice == OPEN_TEMPLATES_FOLDER
        {
            open_in_file_manager(store.dir(), config.file_manager.as_deref())?;
        }
        return Ok(());
    }

    let template = match args.template {
        Some(name) => {
            if !names.contains(&name) {
                return Err(TempletError::User(format!(
                    "unknown template '{}' (try 'templet list')",
                    name
                )));
            }
            name
        }
        None => match prompter.pick("Select a template", &names)? {
            Some(name) => name,
            None => return Err(TempletError::Cancelled),
        },
    };

    let filename = match args.name {
        Some(name) => name,
        None => match prompter.input("Please enter the desired file name", Some(&template))? {
            Some(name) => name,
            None => return Err(TempletError::Cancelled),
        },
    };

    let target_dir = match args.dir {
        Some(dir) => dir,
        None => env::current_dir().map_err(|e| {
            TempletError::User(format!("failed to get current working directory: {}", e))
        })?,
    };
    let workspace_root = args.root.or_else(|| find_workspace_root(&target_dir));

    let body = store.body(&template)?;
    let ctx = ResolutionContext::new(&filename, target_dir.clone(), workspace_root, Local::now());
    let contents = resolve(&body, &ctx, prompter)?;

    write_new_file(&target_dir.join(&filename), &contents, args.force)?;
    println!("{} created", filename);

    Ok(())
}
