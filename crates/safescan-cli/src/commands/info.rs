use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use safescan_core::media::{decode_preview, PickedFile};

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let file = PickedFile::from_path(&args.file)?;

    println!("File:        {}", args.file.display());
    println!("Size:        {:.1} KB", file.bytes.len() as f64 / 1024.0);
    println!("Media type:  {}", file.media_type);
    println!(
        "Accepted:    {}",
        if file.is_image() { "yes" } else { "no (not an image)" }
    );

    match decode_preview(&file.bytes) {
        Ok(img) => println!("Dimensions:  {}x{}", img.width(), img.height()),
        Err(e) => println!("Dimensions:  unknown ({e})"),
    }

    Ok(())
}
