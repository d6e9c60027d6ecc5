use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use cpu16dis::dis::{InstructionTable, Recovery, write_listing};
use cpu16dis::load::load_file;
use log::{LevelFilter, debug, error};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

//===========================================================================//

const EXIT_USAGE: u8 = 1;
const EXIT_DECODE: u8 = 6;
const EXIT_OUTPUT: u8 = 7;

//===========================================================================//

#[derive(Parser)]
#[clap(author, about, long_about = None, version, disable_help_flag = true)]
struct Cli {
    /// The raw binary files to disassemble, in order.
    #[clap(required = true)]
    files: Vec<PathBuf>,
    /// Logs more detail to stderr; repeat for even more.
    #[clap(short, long, action = ArgAction::Count)]
    debug: u8,
    /// Skips one byte and carries on after a decode error, instead of
    /// stopping.
    #[clap(long)]
    resync: bool,
    /// Prints help.
    #[clap(
        short = 'h',
        long,
        short_alias = '?',
        alias = "usage",
        action = ArgAction::Help
    )]
    help: Option<bool>,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        match self.debug {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    fn recovery(&self) -> Recovery {
        if self.resync { Recovery::SkipByte } else { Recovery::Halt }
    }
}

//===========================================================================//

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(EXIT_USAGE),
            };
        }
    };
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_env(env_logger::Env::default())
        .init();

    let table = InstructionTable::cpu16();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut decode_failed = false;
    for path in cli.files.iter() {
        let image = match load_file(path) {
            Ok(image) => image,
            Err(err) => {
                let _ = out.flush();
                error!("{err}");
                return ExitCode::from(err.exit_code());
            }
        };
        debug!("disassembling {}", path.display());
        match write_listing(&mut out, &table, &image, cli.recovery()) {
            Ok(summary) => decode_failed |= !summary.is_clean(),
            Err(err) => {
                error!("cannot write listing: {err}");
                return ExitCode::from(EXIT_OUTPUT);
            }
        }
    }
    if let Err(err) = out.flush() {
        error!("cannot write listing: {err}");
        return ExitCode::from(EXIT_OUTPUT);
    }
    if decode_failed { ExitCode::from(EXIT_DECODE) } else { ExitCode::SUCCESS }
}

//===========================================================================//
