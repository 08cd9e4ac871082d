use anyhow::{anyhow, Context, Result};
use clap::Parser;
use ip_filter::ipv4::ParseMode;
use ip_filter::process;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Sort IPv4 addresses descending, then print the addresses starting with 1,
/// those starting with 46.70 and those with any part equal to 46.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Input file, stdin when absent
    file: Option<PathBuf>,

    /// Field separator, the address is the first field
    #[arg(short, long, default_value_t = '\t')]
    sep: char,

    /// Reject addresses that are not four parts in 0..=255
    #[arg(long)]
    strict: bool,
}

fn run(option: &Opts) -> Result<()> {
    let mode = if option.strict {
        ParseMode::Strict
    } else {
        ParseMode::Lenient
    };
    let pool = match &option.file {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
            process(BufReader::new(f), option.sep, mode)
        }
        None => process(io::stdin().lock(), option.sep, mode),
    }
    .map_err(|e| anyhow!(e))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", pool)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let option = Opts::parse();
    match run(&option) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file() {
        let option = Opts::try_parse_from(["ip-filter", "/nonexistent/ip_filter.tsv"]).unwrap();
        let e = run(&option).unwrap_err();
        let msg = format!("{:#}", e);
        assert!(msg.starts_with("open /nonexistent/ip_filter.tsv: "), "{}", msg);
    }

    #[test]
    fn option_tests() {
        let option = Opts::try_parse_from(["ip-filter"]).unwrap();
        assert_eq!('\t', option.sep);
        assert!(!option.strict);
        assert!(option.file.is_none());

        let option = Opts::try_parse_from(["ip-filter", "--strict", "-s", ",", "ips.tsv"]).unwrap();
        assert_eq!(',', option.sep);
        assert!(option.strict);
        assert_eq!(Some(PathBuf::from("ips.tsv")), option.file);

        assert!(Opts::try_parse_from(["ip-filter", "--sep", "ab"]).is_err());
    }
}
