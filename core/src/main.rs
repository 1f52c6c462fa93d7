mod args;
mod overlay;
mod position;

use args::Args;
use clap::Parser;
use heatmap::{placement_field, render, PieceSet};
use log::{error, info, LevelFilter};
use simplelog::{Config, SimpleLogger, WriteLogger};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    if let Err(e) = run(&args) {
        error!("{}", e);
        return Err(e);
    }

    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let board = position::setup(&args.fen, &args.moves)?;
    info!("Position: {}", board);

    let pieces = match &args.pieces {
        Some(dir) => PieceSet::load(dir)?,
        None => PieceSet::placeholder(args.square_size),
    };

    let heatmap = args.overlay.heatmap(&board, args.seed);
    if let Some((square, value)) = heatmap.as_ref().and_then(overlay::hottest) {
        info!("{}: hottest square {} ({:.2})", args.overlay.name(), square, value);
    }

    let fen = board.to_string();
    let image = render(&pieces, placement_field(&fen), heatmap.as_ref())?;
    image.save(&args.output)?;

    info!(
        "Wrote {}x{} board to {}",
        image.width(),
        image.height(),
        args.output.display()
    );

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(
            LevelFilter::Debug,
            Config::default(),
            File::create(log_file)?,
        )?,
        None => SimpleLogger::init(LevelFilter::Info, Config::default())?,
    }

    Ok(args)
}
