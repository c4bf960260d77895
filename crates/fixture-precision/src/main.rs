use clap::Parser;
use tracing_subscriber::EnvFilter;

use fixture_precision::cli::{validate_file_name, Args};
use fixture_precision::error::RewriteResult;
use fixture_precision::walker::rewrite_all;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> RewriteResult<()> {
    let args = Args::parse();
    init_tracing();
    validate_file_name(&args.file_name)?;

    let reports = rewrite_all(&args.root, &args.file_name)?;
    let records: usize = reports.iter().map(|r| r.records).sum();
    let scaled: usize = reports.iter().map(|r| r.scaled).sum();
    println!(
        "rewrote {} fixtures under {} ({scaled}/{records} records scaled)",
        reports.len(),
        args.root.display()
    );

    Ok(())
}
