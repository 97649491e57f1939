use vantage::Viewer;

fn main() {
    env_logger::init();

    // Optional: catalog directory as the first argument
    let models_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "models".to_string());

    if let Err(e) = Viewer::builder()
        .with_models_dir(&models_dir)
        .build()
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
