//! Show command implementation

use std::path::PathBuf;

use console::Style;
use prompt_kit::config::Config;
use prompt_kit::document::{Document, PromptLoader};
use prompt_kit::error::Result;

use crate::cli::ShowArgs;

/// Run show command
pub fn run(root: PathBuf, args: ShowArgs) -> Result<()> {
    let loader = PromptLoader::new(&Config::with_root(root));
    let document = loader.load(&args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print_document(&document)?;
    }
    Ok(())
}

fn print_document(document: &Document) -> Result<()> {
    println!(
        "{} {}",
        Style::new().bold().apply_to("Path:"),
        document.path.display()
    );
    println!("{}", Style::new().bold().apply_to("Metadata:"));
    if !document.metadata.is_empty() {
        for line in serde_yaml::to_string(&document.metadata)?.lines() {
            println!("  {line}");
        }
    }
    println!("{}", Style::new().bold().apply_to("Body:"));
    print!("{}", document.body);
    if !document.body.is_empty() && !document.body.ends_with('\n') {
        println!();
    }
    Ok(())
}
