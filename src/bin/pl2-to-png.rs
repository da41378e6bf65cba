//! Render the transform tables of a PL2 container as a PNG swatch image.

use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use pl2::Pl2;

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let (Some(pl2_path), Some(png_path), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: pl2-to-png <input.pl2> <output.png>");
        return ExitCode::from(2);
    };

    if let Err(error) = run(&pl2_path, &png_path) {
        eprintln!("pl2-to-png: {}", error);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(pl2_path: &str, png_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut reader = BufReader::new(File::open(pl2_path)?);
    let pl2 = Pl2::decode(&mut reader)?;

    pl2.to_image().save(png_path)?;

    Ok(())
}
