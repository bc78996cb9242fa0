use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod report;

/// Finds the best pair of rings and amulet in an exported item list
#[derive(Debug, Parser)]
#[command(name = "jewel-optimizer", version, about)]
struct Args {
    /// Item export file, one blank-line separated block per item
    #[arg(default_value = "1.txt")]
    input: PathBuf,

    /// TOML file overriding the default score weights
    #[arg(long, value_name = "PATH")]
    weights: Option<PathBuf>,

    /// Print every loaded item before searching (text output only)
    #[arg(long, conflicts_with = "json")]
    list: bool,

    /// Print the winning combination as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = report::Options {
        input: args.input,
        weights: args.weights,
        list: args.list,
        json: args.json,
    };

    let mut stdout = std::io::stdout().lock();
    match report::run(&options, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["jewel-optimizer"]).unwrap();
        assert_eq!(args.input, PathBuf::from("1.txt"));
        assert!(args.weights.is_none());
        assert!(!args.list && !args.json);
    }

    #[test]
    fn test_list_conflicts_with_json() {
        let err = Args::try_parse_from(["jewel-optimizer", "--list", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
