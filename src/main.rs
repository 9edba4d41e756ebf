mod classify;
mod import;
mod models;
mod run;
mod store;
mod summary;
mod ui;

use anyhow::{Context, Result};

use crate::store::CategoryStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let store_path = get_store_path()?;
    let mut store = CategoryStore::load(&store_path);

    match args.len() {
        1 => run::as_tui(&mut store),
        2.. => run::as_cli(&args, &mut store),
        _ => {
            eprintln!("Usage: findash [command]");
            Ok(())
        }
    }
}

fn get_store_path() -> Result<std::path::PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "findash", "Findash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.join("categories.json"))
}
