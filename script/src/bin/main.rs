use anyhow::Result;
use clap::Parser;
use prime_count_script::{init_tracing, run, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing();

    let stdout = std::io::stdout();
    run(&args, &mut stdout.lock())?;
    Ok(())
}
