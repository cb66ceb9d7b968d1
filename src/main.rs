use miette::Result;

/// Main entry point for the dotgraph CLI tool
fn main() -> Result<()> {
    miette::set_panic_hook();

    dotgraph::run()
}
