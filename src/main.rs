fn main() -> anyhow::Result<()> {
    balatro_modgen::run()
}
