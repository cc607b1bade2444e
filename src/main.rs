//! CLI entry point for the space-filling curve generation tool

use clap::Parser;
use fractalwalk::io::cli::{Cli, CurveRunner};

fn main() -> fractalwalk::Result<()> {
    let cli = Cli::parse();
    let mut runner = CurveRunner::new(cli);
    runner.run()
}
