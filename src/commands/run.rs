use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use clap::Args;
use crate::cli_util::print_run_error;
use crate::config::{self, Overrides};
use crate::{EofPolicy, Interpreter, Strategy};

#[derive(Args, Debug)]
#[command(disable_help_flag = true)]
pub struct RunArgs {
    /// Execution strategy: naive or rle (fallback BF_STRATEGY, bf.toml; default rle)
    #[arg(short = 's', long = "strategy", value_name = "STRATEGY")]
    pub strategy: Option<Strategy>,

    /// Cell value on end of input: sentinel, zero or unchanged (fallback BF_EOF, bf.toml; default sentinel)
    #[arg(long = "eof", value_name = "POLICY")]
    pub eof: Option<EofPolicy>,

    /// Path to the Brainfuck program
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Show this help
    #[arg(short = 'h', long = "help", action = clap::ArgAction::SetTrue)]
    pub help: bool,
}

pub fn run(program: &str, args: RunArgs) -> i32 {
    if args.help {
        usage_and_exit(program, 0);
    }

    let RunArgs {
        strategy,
        eof,
        path,
        ..
    } = args;

    let Some(path) = path else {
        eprintln!("{program}: expected exactly one argument, the path to a program file");
        usage_and_exit(program, 2);
    };

    let code = match fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("{program}: failed to read program file {}: {e}", path.display());
            let _ = io::stderr().flush();
            return 1;
        }
    };

    // Install SIGINT (ctrl+c) handler so output written so far is not lost
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        std::process::exit(130);
    }) {
        eprintln!("{program}: failed to set ctrl+c handler: {e}");
        let _ = io::stderr().flush();
        return 1;
    }

    let settings = config::resolve(Overrides { strategy, eof });

    let mut bf = Interpreter::new(code, io::stdin().lock(), io::stdout());
    bf.set_strategy(settings.strategy);
    bf.set_eof_policy(settings.eof);

    match bf.run() {
        Ok(()) => 0,
        Err(err) => {
            print_run_error(Some(program), bf.program(), &err);
            1
        }
    }
}

pub fn usage_and_exit(program: &str, code: i32) -> ! {
    eprintln!(
        r#"Usage:
  {0} [--strategy naive|rle] [--eof sentinel|zero|unchanged] <PATH>

Options:
  --strategy, -s <STRATEGY>  naive: one instruction at a time
                             rle:   apply runs of '<', '+' and '-' in one step (default)
  --eof <POLICY>             Cell value stored by ',' at end of input:
                             sentinel: 255 (default), zero: 0, unchanged: keep the cell
  --help,     -h             Show this help

Notes:
- Input (`,`) reads a single byte from stdin.
- Output (`.`) writes raw bytes to stdout; no trailing newline is added.
- Characters outside of Brainfuck's ><+-.,[] are treated as comments.
- Settings fall back to BF_STRATEGY / BF_EOF, then to the [interpreter] section of
  $BF_CONFIG or <config home>/bf.toml. Set BF_LOG=debug for diagnostics on stderr.

Examples:
- Run a program:
    {0} ./hello.bf
- Feed a file to `,`:
    {0} ./cat.bf < input.txt
"#,
        program
    );
    let _ = io::stderr().flush();
    std::process::exit(code);
}
