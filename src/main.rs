fn main() -> anyhow::Result<()> {
    timetabler::runner::run()
}
