fn main() -> anyhow::Result<()> {
    heartbloom::app::run()
}
