use clap::Parser;
use colored::Colorize;
use pong_map::cli::generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "pong-map")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate Admixture run file.", long_about = None)]
struct Cli {
    #[command(flatten)]
    args: GenerateArgs,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = pong_map::cli::generate::run(cli.args) {
        eprintln!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}
