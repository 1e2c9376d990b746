fn main() -> anyhow::Result<()> {
    searchbench_cli::run()
}
