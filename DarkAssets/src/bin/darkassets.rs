fn main() -> anyhow::Result<()> {
    darkassets::cli::run_cli()
}
