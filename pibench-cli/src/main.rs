//! PiBench binary entry point.

fn main() -> anyhow::Result<()> {
    pibench_cli::run()
}
