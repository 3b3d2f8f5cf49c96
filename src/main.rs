fn main() -> anyhow::Result<()> {
    image_detector::app::run()
}
