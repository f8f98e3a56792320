//! Build command implementation.
//!
//! Discovers `*.item.yaml` recipes and writes each batch as PNG sprites
//! with JSON records alongside.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::Recipe;
use crate::discovery::{discover, discover_paths};
use crate::error::{ArmoryError, Result};
use crate::items;
use crate::output::{display_path, plural, Printer};

use super::generate::{report, write_item};

/// Build item batches from recipe files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Recipe files or directories (default: the current project)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: the manifest's, or dist/)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Scale factor for every recipe that doesn't set its own
    #[arg(long)]
    pub scale: Option<u32>,
}

/// Totals from one build.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub recipes: usize,
    pub items: usize,
    pub broken: usize,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<BuildSummary> {
    let found = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths)?
    };
    let output = args.output.clone().unwrap_or_else(|| found.output_dir());

    let recipes = found.load_recipes_scaled(args.scale)?;
    if recipes.is_empty() {
        printer.warning("Warning", "no recipes found");
        return Ok(BuildSummary::default());
    }

    fs::create_dir_all(&output).map_err(|e| ArmoryError::Io {
        path: output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut summary = BuildSummary::default();
    for (path, recipe) in recipes {
        let stem = recipe.stem(&path);
        printer.status(
            "Building",
            &format!("{} ({})", stem, plural(recipe.count as usize, recipe.item.as_str(), &format!("{}s", recipe.item))),
        );
        build_recipe(&recipe, &stem, &output, printer, &mut summary)?;
        summary.recipes += 1;
    }

    printer.success(
        "Finished",
        &format!(
            "{} from {} to {}",
            plural(summary.items, "item", "items"),
            plural(summary.recipes, "recipe", "recipes"),
            printer.cyan(&display_path(&output))
        ),
    );
    if summary.broken > 0 {
        printer.warning("Warning", &format!("{} failed to generate", plural(summary.broken, "item", "items")));
    }
    Ok(summary)
}

fn build_recipe(
    recipe: &Recipe,
    stem: &str,
    output: &std::path::Path,
    printer: &Printer,
    summary: &mut BuildSummary,
) -> Result<()> {
    for index in 0..recipe.count {
        let item = items::generate(recipe.item, &recipe.options_for(index));
        report(&item, printer);

        let base = format!("{}-{}", stem, index + 1);
        let png = output.join(format!("{}.png", base));
        write_item(&item, &png)?;

        let json = output.join(format!("{}.json", base));
        fs::write(&json, item.to_json()?).map_err(|e| ArmoryError::Io {
            path: json.clone(),
            message: format!("Failed to write item record: {}", e),
        })?;

        tracing::debug!(name = %item.name, seed = item.seed, path = %png.display(), "wrote item");
        if item.is_sentinel() {
            summary.broken += 1;
        }
        summary.items += 1;
    }
    Ok(())
}
