// src/bin/cli.rs
use housing_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let path = cli::run()?;
    println!("{}", path.display());
    Ok(())
}
