//! Zero-argument driver: writes the icon asset set under `public/icons`.

use std::path::Path;

use goal_icons::{DEFAULT_OUT_DIR, OutputError, generate};

fn main() -> Result<(), OutputError> {
    generate(Path::new(DEFAULT_OUT_DIR))?;
    println!("Generated icons in {DEFAULT_OUT_DIR}/");
    Ok(())
}
