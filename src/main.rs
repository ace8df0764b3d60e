use std::env;
use std::path::Path;

use clap::Parser;
use tape_bf::commands::run::{self, RunArgs};

#[derive(Parser, Debug)]
#[command(name = "bf", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    #[command(flatten)]
    args: RunArgs,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter("BF_LOG").write_style("BF_LOG_STYLE")).init();

    // Use the bare binary name in messages
    let program = env::args()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| String::from("bf"));

    let cli = Cli::parse();
    let code = run::run(&program, cli.args);
    std::process::exit(code);
}
