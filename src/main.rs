#[cfg(feature = "cli")]
fn main() -> anyhow::Result<()> {
    heritage_planner::cli::run()
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    std::process::exit(1);
}
