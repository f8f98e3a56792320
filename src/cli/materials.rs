//! `armory materials`: print the built-in catalog.

use clap::Args;

use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{MaterialCatalog, MaterialClass};

/// List the built-in material catalog
#[derive(Args, Debug)]
pub struct MaterialsArgs {
    /// Only list one class (metal, wood, leather, cord, gem, cloth)
    #[arg(long)]
    pub class: Option<MaterialClass>,
}

pub fn run(args: MaterialsArgs, printer: &Printer) -> Result<()> {
    let entries: Vec<_> = match args.class {
        Some(class) => MaterialCatalog::of_class(class),
        None => MaterialCatalog::all().iter().collect(),
    };

    printer.info("Catalog", &plural(entries.len(), "material", "materials"));
    for def in entries {
        let palette = def.palette();
        println!(
            "{:<12} {:<14} {:<8} {} {} {}",
            def.key, def.name, def.class, palette.base, palette.highlight, palette.shadow
        );
    }
    Ok(())
}
