fn main() -> anyhow::Result<()> {
    ecmwfpp_sweep::run()
}
