use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::{
    RenderArgs,
    config::Config,
    paths::base_path_from_config,
    wiki::Wiki,
};

pub async fn run(args: &RenderArgs) -> Result<(), anyhow::Error> {
    let config_path = Config::path_from_arg(args.config_file.as_deref())?;
    let mut config = Config::load_from_file(&config_path).await?;
    apply_overrides(&mut config, args);

    let markup = read_input(args.input.as_deref()).await?;

    let wiki = Wiki::from_config(&config, &base_path_from_config(&config_path))?;
    debug!(engine = wiki.engine_name(), bytes = markup.len(), "rendering markup");

    let output = render(&wiki, &config, args, &markup)?;
    print!("{output}");

    Ok(())
}

fn apply_overrides(config: &mut Config, args: &RenderArgs) {
    if let Some(engine) = args.engine {
        config.markup.engine = engine;
    }
    if args.escape_html {
        config.markup.escape_html = true;
    }
}

/// Read markup from a file, or from stdin when no file (or `-`) is given.
async fn read_input(input: Option<&Path>) -> Result<String, anyhow::Error> {
    match input {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut markup = String::new();
            tokio::io::stdin()
                .read_to_string(&mut markup)
                .await
                .context("failed to read markup from stdin")?;
            Ok(markup)
        }
    }
}

fn render(
    wiki: &Wiki,
    config: &Config,
    args: &RenderArgs,
    markup: &str,
) -> Result<String, anyhow::Error> {
    if !args.full {
        return Ok(wiki.render_fragment(markup));
    }

    // Page title: --title, then the input file name, then the home page
    let title = args
        .title
        .clone()
        .or_else(|| {
            args.input
                .as_deref()
                .filter(|path| *path != Path::new("-"))
                .and_then(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| config.pages.home.clone());

    Ok(wiki.render_document(&title, markup)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::EngineKind;

    fn args(input: Option<&str>) -> RenderArgs {
        RenderArgs {
            input: input.map(PathBuf::from),
            full: false,
            title: None,
            engine: None,
            escape_html: false,
            config_file: None,
        }
    }

    fn wiki(config: &Config) -> Wiki {
        let dir = tempfile::tempdir().unwrap();
        Wiki::from_config(config, dir.path()).unwrap()
    }

    #[test]
    fn test_fragment_output() {
        let config = Config::default();
        let output = render(&wiki(&config), &config, &args(None), "== Hi ==").unwrap();
        assert_eq!(output, "<h2>Hi</h2>");
    }

    #[test]
    fn test_full_page_title_from_file_name() {
        let config = Config::default();
        let mut args = args(Some("notes/Release_Notes.wiki"));
        args.full = true;

        let output = render(&wiki(&config), &config, &args, "''x''").unwrap();
        assert!(output.contains("<title>Release Notes - miniwiki</title>"));
        assert!(output.contains("<div><i>x</i></div>"));
    }

    #[test]
    fn test_full_page_title_falls_back_to_home() {
        let config = Config::default();
        let mut args = args(Some("-"));
        args.full = true;

        let output = render(&wiki(&config), &config, &args, "text").unwrap();
        assert!(output.contains("<h1>Main Page</h1>"));
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        let mut args = args(None);
        args.engine = Some(EngineKind::Tree);
        args.escape_html = true;

        apply_overrides(&mut config, &args);
        assert_eq!(config.markup.engine, EngineKind::Tree);
        assert!(config.markup.escape_html);

        let output = render(&wiki(&config), &config, &args, "'''''<x>'''''").unwrap();
        assert_eq!(output, "<b><i>&lt;x&gt;</i></b>");
    }

    #[tokio::test]
    async fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Page.wiki");
        std::fs::write(&path, "= T =").unwrap();

        assert_eq!(read_input(Some(path.as_path())).await.unwrap(), "= T =");

        let missing = dir.path().join("missing.wiki");
        assert!(read_input(Some(missing.as_path())).await.is_err());
    }
}
