#![forbid(unsafe_code)]

//! anchortext demo binary entry point.

use anchortext_core::logging;
use anchortext_demo::{cli, scene};

fn main() {
    logging::init();
    let opts = cli::Opts::parse();

    match scene::draw(&opts) {
        Ok(canvas) => println!("{}", canvas.render()),
        Err(e) => {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        }
    }
}
