use clap::Parser;

use pared::{App, Config, StdConsole};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Initial maximum line length (0 = raw)
    #[arg(short = 'w', long, value_name = "N", default_value_t = 0)]
    width: usize,

    /// Batch mode, no greeting or prompts
    #[arg(short = 'M', long)]
    batch: bool,

    /// Do not colour error messages
    #[arg(long)]
    no_color: bool,

    /// Log debug messages to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut console = StdConsole::new(!args.no_color);
    let mut app = App::new(Config::new(args.width, args.batch));
    if let Err(err) = app.run(&mut console) {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
