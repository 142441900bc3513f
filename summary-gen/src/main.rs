use std::fs::{self, File};
use std::io::{BufWriter, Write};

use log::info;

mod content;
mod render;

const OUT_DIR: &str = "output/pdf";
const OUT_PATH: &str = "output/pdf/practice-timer-summary.pdf";

fn main() -> std::io::Result<()> {
    env_logger::init();

    fs::create_dir_all(OUT_DIR)?;
    info!("writing {}", OUT_PATH);

    let file = File::create(OUT_PATH)?;
    let mut writer = render::render(BufWriter::new(file))?;
    writer.flush()?;

    println!("{}", OUT_PATH);
    Ok(())
}
