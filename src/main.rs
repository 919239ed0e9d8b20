fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = fractal_flow::PpmFilePresenter::new();
    let mut controller = fractal_flow::RenderController::new(presenter);

    controller.render(4)?;
    std::fs::create_dir_all("output")?;
    controller.write("output/snowflake.ppm")?;

    Ok(())
}
