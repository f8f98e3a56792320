//! `armory generate`: one item to a PNG, optionally with its JSON record.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::assemble::{Item, ItemKind};
use crate::config::ItemOptions;
use crate::diagnostic::Severity;
use crate::error::{ArmoryError, Result};
use crate::items;
use crate::output::{display_path, Printer};
use crate::render::write_png;

/// Generate a single item sprite
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Item type
    #[arg(value_enum)]
    pub kind: ItemKind,

    /// Sub-type key (e.g. scimitar, morningstar); random when omitted
    #[arg(long)]
    pub sub_type: Option<String>,

    /// Primary material key
    #[arg(long, short)]
    pub material: Option<String>,

    #[arg(long)]
    pub grip_material: Option<String>,

    #[arg(long)]
    pub string_material: Option<String>,

    #[arg(long)]
    pub haft_material: Option<String>,

    #[arg(long)]
    pub hilt_material: Option<String>,

    #[arg(long)]
    pub pommel_material: Option<String>,

    #[arg(long)]
    pub gem_material: Option<String>,

    #[arg(long)]
    pub trim_material: Option<String>,

    /// Seed for a reproducible item
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Integer upscale of the logical grid
    #[arg(long)]
    pub scale: Option<u32>,

    /// Output PNG path (default: <kind>-<seed>.png)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Also write the item record as JSON to stdout
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    pub fn options(&self) -> ItemOptions {
        ItemOptions {
            sub_type: self.sub_type.clone(),
            material: self.material.clone(),
            grip_material: self.grip_material.clone(),
            string_material: self.string_material.clone(),
            haft_material: self.haft_material.clone(),
            hilt_material: self.hilt_material.clone(),
            pommel_material: self.pommel_material.clone(),
            gem_material: self.gem_material.clone(),
            trim_material: self.trim_material.clone(),
            seed: self.seed,
            scale: self.scale,
        }
    }
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let item = items::generate(args.kind, &args.options());
    report(&item, printer);

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{}-{}.png", item.kind, item.seed)));
    write_item(&item, &path)?;
    printer.success(
        "Generated",
        &format!("{} -> {}", printer.bold(&item.name), printer.cyan(&display_path(&path))),
    );

    if args.json {
        println!("{}", item.to_json()?);
    }
    Ok(())
}

/// Print an item's diagnostics through the printer.
pub fn report(item: &Item, printer: &Printer) {
    for diagnostic in &item.warnings {
        let line = format!("{} {}", diagnostic.message, printer.dim(&format!("[{}]", diagnostic.code)));
        match diagnostic.severity {
            Severity::Warning => printer.warning("Warning", &line),
            Severity::Error => printer.error("Error", &line),
        }
        if let Some(help) = &diagnostic.help {
            printer.info("Help", help);
        }
    }
}

/// Write the item's raster to `path`, creating parent directories.
pub fn write_item(item: &Item, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ArmoryError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create directory: {}", e),
        })?;
    }
    let surface = item.surface.as_ref().ok_or_else(|| ArmoryError::Build {
        message: format!("{} has no raster to write", item.name),
        help: None,
    })?;
    write_png(surface, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(kind: ItemKind, output: PathBuf) -> GenerateArgs {
        GenerateArgs {
            kind,
            sub_type: None,
            material: None,
            grip_material: None,
            string_material: None,
            haft_material: None,
            hilt_material: None,
            pommel_material: None,
            gem_material: None,
            trim_material: None,
            seed: Some(11),
            scale: Some(2),
            output: Some(output),
            json: false,
        }
    }

    #[test]
    fn test_generate_writes_scaled_png() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("sword.png");
        run(args(ItemKind::Sword, out.clone()), &Printer::plain()).unwrap();

        let img = image::open(&out).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (64, 144));
    }

    #[test]
    fn test_options_carry_every_slot() {
        let mut a = args(ItemKind::Ring, PathBuf::from("ring.png"));
        a.gem_material = Some("ruby".to_string());
        a.trim_material = Some("gold".to_string());
        let options = a.options();
        assert_eq!(options.gem_material.as_deref(), Some("ruby"));
        assert_eq!(options.trim_material.as_deref(), Some("gold"));
        assert_eq!(options.seed, Some(11));
    }

    #[test]
    fn test_sentinel_still_writes_placeholder() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("broken.png");
        let mut a = args(ItemKind::Mace, out.clone());
        a.scale = Some(0);
        run(a, &Printer::plain()).unwrap();
        assert!(out.exists());
    }
}
