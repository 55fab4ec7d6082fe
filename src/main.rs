use stellar_fractal::app;
use stellar_fractal::config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    app::run(Config::default())
}
