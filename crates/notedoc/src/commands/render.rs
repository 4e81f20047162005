//! Render command.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use notedoc_collect::SnapshotFile;
use notedoc_static::{render_documentation, OutputFormat, RenderOptions};

use crate::config::{self, ConfigFile};

#[derive(Debug, Default, Args)]
pub struct RenderArgs {
    /// Namespace snapshot (.json, .yaml, .yml or .toml)
    pub snapshot: PathBuf,

    /// Output file (defaults to config, then stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Document title (defaults to config, then "Notebook")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Link the functions list to each function's section
    #[arg(long)]
    pub links: bool,

    /// Render the functions list without links, even if the config enables them
    #[arg(long, conflicts_with = "links")]
    pub no_links: bool,

    /// Output format: html or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Open the output file when done
    #[arg(long)]
    pub open: bool,
}

/// Flags merged over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    snapshot: PathBuf,
    options: RenderOptions,
    output: Option<PathBuf>,
    open: bool,
}

impl Settings {
    fn resolve(args: RenderArgs, config: ConfigFile) -> Self {
        Self {
            snapshot: args.snapshot,
            options: RenderOptions {
                title: args.title.or(config.document.title),
                enable_links: !args.no_links && (args.links || config.document.links),
                format: args.format.unwrap_or(config.document.format),
            },
            output: args.output.or(config.output.path),
            open: args.open || config.output.open,
        }
    }
}

/// Run the render command.
pub fn run(config_path: &Path, args: RenderArgs) -> Result<()> {
    let settings = Settings::resolve(args, config::load(config_path)?);
    let rendered = render(&settings)?;

    match &settings.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Output: {}", path.display());

            if settings.open {
                if let Err(e) = open::that(path) {
                    tracing::warn!("Failed to open {}: {}", path.display(), e);
                }
            }
        }
        None => {
            if settings.open {
                tracing::warn!("Nothing to open when writing to stdout");
            }
            std::io::stdout()
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

fn render(settings: &Settings) -> Result<String> {
    let namespace = SnapshotFile::new(&settings.snapshot)
        .load()
        .with_context(|| format!("Failed to load {}", settings.snapshot.display()))?;

    tracing::info!(
        "Rendering {} as {}",
        settings.snapshot.display(),
        settings.options.format
    );

    render_documentation(&namespace, &settings.options).context("Failed to render documentation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
  "entries": {
    "greet": {
      "kind": "function",
      "parameters": [
        { "name": "name", "annotation": { "kind": "named", "name": "str" } }
      ],
      "returns": { "kind": "named", "name": "str" },
      "docstring": "Say hello.\n\nArgs:\n    name: Who to greet.\n\nReturns:\n    str: The greeting."
    },
    "pd": { "kind": "value", "type_name": "module" }
  }
}"#;

    fn write_snapshot(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("namespace.json");
        fs::write(&path, SNAPSHOT).unwrap();
        path
    }

    #[test]
    fn flags_override_config() {
        let config: ConfigFile = toml::from_str(config::DEFAULT_CONFIG).unwrap();
        let args = RenderArgs {
            snapshot: PathBuf::from("ns.json"),
            output: Some(PathBuf::from("out.json")),
            title: Some("Report".to_string()),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let settings = Settings::resolve(args, config);

        assert_eq!(
            settings,
            Settings {
                snapshot: PathBuf::from("ns.json"),
                options: RenderOptions {
                    title: Some("Report".to_string()),
                    enable_links: true,
                    format: OutputFormat::Json,
                },
                output: Some(PathBuf::from("out.json")),
                open: false,
            }
        );
    }

    #[test]
    fn no_links_flag_overrides_config() {
        let config: ConfigFile = toml::from_str(config::DEFAULT_CONFIG).unwrap();
        assert!(config.document.links);
        let args = RenderArgs {
            snapshot: PathBuf::from("ns.json"),
            no_links: true,
            ..Default::default()
        };

        let settings = Settings::resolve(args, config);

        assert!(!settings.options.enable_links);
    }

    #[test]
    fn defaults_without_config() {
        let args = RenderArgs {
            snapshot: PathBuf::from("ns.json"),
            ..Default::default()
        };

        let settings = Settings::resolve(args, ConfigFile::default());

        assert_eq!(settings.options, RenderOptions::default());
        assert_eq!(settings.output, None);
    }

    #[test]
    fn writes_html_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("docs.html");
        let args = RenderArgs {
            snapshot: write_snapshot(&dir),
            output: Some(output.clone()),
            links: true,
            ..Default::default()
        };

        run(&dir.path().join("notedoc.toml"), args).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert!(html.contains("<title>Notebook - Documentation</title>"));
        assert!(html.contains("<a href=\"#greet\""));
        assert!(html.contains("<i>name</i>: Who to greet. (str)"));
        assert!(!html.contains("id=\"pd\""));
    }

    #[test]
    fn uses_config_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("notedoc.toml");
        let output = dir.path().join("docs.json");
        fs::write(
            &config_path,
            format!(
                "[document]\ntitle = \"Sales\"\nformat = \"json\"\n\n[output]\npath = {:?}\n",
                output.display().to_string()
            ),
        )
        .unwrap();
        let args = RenderArgs {
            snapshot: write_snapshot(&dir),
            ..Default::default()
        };

        run(&config_path, args).unwrap();

        let json = fs::read_to_string(&output).unwrap();
        assert!(json.contains("\"title\": \"Sales\""));
        assert!(json.contains("\"name\": \"greet\""));
    }

    #[test]
    fn missing_snapshot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let args = RenderArgs {
            snapshot: dir.path().join("missing.json"),
            ..Default::default()
        };

        let err = run(&dir.path().join("notedoc.toml"), args).unwrap_err();
        assert!(err.to_string().contains("Failed to load"));
    }

    #[test]
    fn unsupported_snapshot_extension_is_an_error() {
        let dir = TempDir::new().unwrap();
        let snapshot = dir.path().join("namespace.txt");
        fs::write(&snapshot, SNAPSHOT).unwrap();
        let args = RenderArgs {
            snapshot,
            ..Default::default()
        };

        assert!(run(&dir.path().join("notedoc.toml"), args).is_err());
    }
}
