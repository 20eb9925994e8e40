use svgpoly::Result;

use svgpoly::cli::{get_config, run};

fn main() -> Result<()> {
    env_logger::init();
    run(get_config()?)?;

    Ok(())
}
