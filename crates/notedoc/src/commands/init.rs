//! Initialize notedoc in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::DEFAULT_CONFIG;

/// Run the init command.
///
/// Writes the config file at `config_path` and a sample snapshot next to it.
pub fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing notedoc...");

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let dir = config_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let snapshot_path = dir.join("namespace.json");
    if !snapshot_path.exists() || yes {
        fs::write(&snapshot_path, SAMPLE_NAMESPACE)
            .with_context(|| format!("Failed to write {}", snapshot_path.display()))?;
        tracing::info!("Created {}", snapshot_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'notedoc render namespace.json' to build the documentation.");

    Ok(())
}

const SAMPLE_NAMESPACE: &str = r#"{
  "module": "__main__",
  "entries": {
    "pd": { "kind": "value", "type_name": "module" },
    "read_csv": {
      "kind": "function",
      "module": "pandas.io.parsers",
      "docstring": "Read a comma-separated values file into a DataFrame."
    },
    "THRESHOLD": { "kind": "value", "type_name": "float" },
    "clean_sales": {
      "kind": "function",
      "parameters": [
        { "name": "df", "annotation": { "kind": "named", "name": "DataFrame" } },
        {
          "name": "threshold",
          "annotation": { "kind": "named", "name": "float" },
          "default": "0.5"
        }
      ],
      "returns": { "kind": "named", "name": "DataFrame" },
      "docstring": "Drop incomplete sales rows.\n\n    Rows whose completeness score falls below the threshold are removed.\n\n    Args:\n        df: Raw sales data.\n        threshold (float, optional): Minimum completeness. Defaults to 0.5.\n\n    Returns:\n        DataFrame: The cleaned data.\n\n    Raises:\n        KeyError: If the score column is missing.\n\n    Examples:\n        >>> clean_sales(raw_df, threshold=0.8)\n    "
    },
    "summarize": {
      "kind": "function",
      "parameters": [
        {
          "name": "values",
          "annotation": {
            "kind": "named",
            "name": "list",
            "args": [{ "kind": "named", "name": "float" }]
          }
        },
        {
          "name": "precision",
          "kind": "keyword_only",
          "annotation": {
            "kind": "union",
            "members": [
              { "kind": "named", "name": "int" },
              { "kind": "named", "name": "NoneType" }
            ]
          },
          "default": "None"
        }
      ],
      "returns": {
        "kind": "union",
        "members": [
          { "kind": "named", "name": "float" },
          { "kind": "named", "name": "str" }
        ]
      },
      "docstring": "Average a list of values.\n\n    Args:\n        values: Numbers to average.\n        precision: Digits to round to, no rounding when None.\n\n    Returns:\n        The mean, or \"n/a\" for an empty list.\n    "
    }
  }
}
"#;
