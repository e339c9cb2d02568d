mod config;
mod firework;
mod show;
mod terminal;

use clap::Parser;
use config::ShowConfig;
use std::io;

#[derive(Parser)]
#[command(name = "pyro")]
#[command(author = "Terminal Art Generator")]
#[command(version = "0.1.0")]
#[command(about = "Terminal fireworks: animated bursts and a New Year greeting", long_about = None)]
struct Cli {
    /// Number of firework launches before the greeting
    #[arg(short, long, default_value = "5")]
    launches: u32,

    /// Number of sparkles scattered around the greeting
    #[arg(short = 'n', long, default_value = "20")]
    sparkles: u32,

    /// Greeting shown after the fireworks
    #[arg(short, long, default_value = "Happy New Year 2025")]
    message: String,

    /// Delay multiplier (1.0 = normal, 0 = no delays, 2.0 = half speed)
    #[arg(short = 't', long, default_value = "1.0")]
    speed: f32,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let config = ShowConfig {
        launches: cli.launches,
        sparkles: cli.sparkles,
        message: cli.message,
        speed: cli.speed.max(0.0),
        seed: cli.seed,
    };

    show::run(config)
}
