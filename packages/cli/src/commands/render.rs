use anyhow::{Context, Result};
use bistro_compiler_html::{compile_to_html, CompileOptions};
use bistro_model::Page;
use bistro_renderer::Renderer;
use bistro_store::MemoryStore;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page JSON file to render
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit only the page fragment, without the document shell
    #[arg(long)]
    pub fragment: bool,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,
}

pub async fn render(args: RenderArgs) -> Result<()> {
    let json = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let page: Page = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid page", args.input.display()))?;

    // Product grids resolve against the stock catalog.
    let catalog = MemoryStore::seeded();
    let rendered = Renderer::new().render(&page, &catalog).await;

    let options = CompileOptions {
        document: !args.fragment,
        pretty: !args.compact,
        title: page.title.clone(),
        ..Default::default()
    };
    let html = compile_to_html(&rendered, options);

    match &args.out {
        Some(path) => {
            fs::write(path, html).with_context(|| format!("cannot write {}", path.display()))?;
            println!(
                "{} {} → {}",
                "✓".green(),
                args.input.display(),
                path.display()
            );
        }
        None => print!("{html}"),
    }

    Ok(())
}
