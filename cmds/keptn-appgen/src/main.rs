use anyhow::Result;
use clap::Parser;
use keptn_appgen::{cli, telemetry, util::BrokenPipeGuard};

#[cfg(all(
	target_os = "linux",
	feature = "mimalloc",
	not(feature = "system-alloc")
))]
#[global_allocator]
static GLOBAL: mimallocator::Mimalloc = mimallocator::Mimalloc;

fn main() -> Result<()> {
	let cli = cli::Cli::parse();

	telemetry::init(cli.log_level.as_deref().and_then(telemetry::parse_level));

	let stdout = BrokenPipeGuard::new(std::io::stdout());
	cli::run(&cli, stdout)
}
