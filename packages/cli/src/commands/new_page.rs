use anyhow::{Context, Result};
use bistro_common::{slugify, IdGenerator};
use bistro_editor::PageDocument;
use bistro_model::{Page, SectionKind};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewPageArgs {
    /// Page title
    pub title: String,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Start the page with one of each stock section
    #[arg(long)]
    pub sample_sections: bool,
}

pub fn new_page(args: NewPageArgs) -> Result<()> {
    let mut ids = IdGenerator::random();
    let page = Page::new_draft(ids.new_id(), args.title.clone(), slugify(&args.title));

    let mut doc = PageDocument::new(page);
    if args.sample_sections {
        for kind in SectionKind::ALL {
            doc.add_section(kind)?;
        }
    }

    let json = doc.to_json()?;

    match &args.out {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "{} created '{}' → {}",
                "✓".green(),
                args.title,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
