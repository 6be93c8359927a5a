use tracing::info;

use crate::{
    InitArgs,
    config::{Config, DEFAULT_CONFIG_FILE},
    store::{DirectoryStore, SAMPLE_PAGE},
};

pub async fn run(args: &InitArgs) -> Result<(), anyhow::Error> {
    let path = if args.path.is_relative() {
        std::env::current_dir()?.join(&args.path)
    } else {
        args.path.clone()
    };

    if !path.exists() {
        if args.create {
            tokio::fs::create_dir_all(&path).await?;
            println!("Created directory {path}", path = path.display());
        } else {
            return Err(anyhow::anyhow!(
                "Directory does not exist: {path}",
                path = path.display()
            ));
        }
    }

    let config_file = path.join(DEFAULT_CONFIG_FILE);
    if config_file.exists() {
        return Err(anyhow::anyhow!(
            "Config file already exists: {config_file}",
            config_file = config_file.display()
        ));
    }

    println!("Initializing wiki in {}", path.display());

    let config = Config::default();
    let config_text = serde_yaml::to_string(&config)?;
    tokio::fs::write(&config_file, config_text).await?;

    println!(
        "Created config file {config_file}",
        config_file = config_file.display()
    );

    let store = DirectoryStore::new(path.join(&config.pages.dir), config.pages.extension.clone());
    tokio::fs::create_dir_all(store.dir()).await?;
    info!(dir = %store.dir().display(), "created pages directory");

    let home = store.page_path(&config.pages.home)?;
    if !home.exists() {
        tokio::fs::write(&home, SAMPLE_PAGE).await?;
        println!("Created page {home}", home = home.display());
    }

    Ok(())
}
