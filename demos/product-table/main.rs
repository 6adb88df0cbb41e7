//! Runs the catalog browser over the built-in 24-product sample catalog.
//!
//! Type to filter by name, tab to the checkbox and press space to hide
//! out-of-stock products, esc to quit.

use bubbletea_catalog::CatalogBrowser;
use bubbletea_rs::Program;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let program = Program::<CatalogBrowser>::builder().build()?;
    program.run().await?;
    Ok(())
}
