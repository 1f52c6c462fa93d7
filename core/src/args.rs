use std::path::PathBuf;

use clap::Parser;

use crate::overlay::Overlay;
use crate::position::DEFAULT_FEN;

#[derive(Parser, Debug)]
#[command(name = "TeaTree")]
#[command(about = "Render a chess position with a per-square heatmap overlay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Position to render. `default` is the standard starting position.
    #[arg(short, long, default_value = DEFAULT_FEN)]
    pub fen: String,

    /// Moves in UCI notation, played in order from the starting FEN.
    #[arg(short, long, num_args = 1..)]
    pub moves: Vec<String>,

    /// Metric drawn over the board.
    #[arg(long, value_enum, default_value_t = Overlay::Contested)]
    pub overlay: Overlay,

    /// Seed for the random overlay.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding r.png ... K.png. Generated discs are used otherwise.
    #[arg(short, long)]
    pub pieces: Option<PathBuf>,

    /// Square size in pixels for the generated discs.
    #[arg(long, default_value_t = 64, value_parser = clap::value_parser!(u32).range(8..=512))]
    pub square_size: u32,

    /// Where to write the PNG.
    #[arg(short, long, default_value = "board.png")]
    pub output: PathBuf,

    /// Write debug logs to a file instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
}
