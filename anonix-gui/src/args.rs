//! Command-line argument parsing.

use std::{error::Error, fmt::Display, path::PathBuf, process};

use crate::dir::AnonixDirectory;

/// Parsed command-line argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    DatadirPath(AnonixDirectory),
    ApiUrl(String),
}

/// Parse command-line arguments.
///
/// `args` includes the program name at `args[0]`. `--version` and `--help`
/// print to stderr and exit the process.
pub fn parse_args(args: Vec<String>, version: impl Display) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    let app_name = args
        .first()
        .and_then(|a| std::path::Path::new(a).file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("anonix-gui");

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", version);
        process::exit(0);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: {app_name} [OPTIONS]

Options:
    --datadir <PATH>    Path of anonix datadir
    --api-url <URL>     Base url of the gateway API
    -v, --version       Display {app_name} version
    -h, --help          Print help
        "#
        );
        process::exit(0);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--datadir" => {
                let path = iter.next().ok_or("missing arg to --datadir")?;
                res.push(Arg::DatadirPath(AnonixDirectory::new(PathBuf::from(path))));
            }
            "--api-url" => {
                let url = iter.next().ok_or("missing arg to --api-url")?;
                res.push(Arg::ApiUrl(url.clone()));
            }
            other => return Err(format!("unknown argument {}", other).into()),
        }
    }

    Ok(res)
}

/// Returns the data directory and the API url given on the command line.
pub fn split_args(args: &[Arg]) -> (Option<AnonixDirectory>, Option<String>) {
    let mut datadir = None;
    let mut api_url = None;
    for arg in args {
        match arg {
            Arg::DatadirPath(d) => datadir = Some(d.clone()),
            Arg::ApiUrl(u) => api_url = Some(u.clone()),
        }
    }
    (datadir, api_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = "0.1.0";

    fn args(s: &str) -> Vec<String> {
        s.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(args("app --meth"), VERSION).is_err());
        assert!(parse_args(args("app --datadir"), VERSION).is_err());
        assert!(parse_args(args("app --api-url"), VERSION).is_err());
        assert_eq!(Some(vec![]), parse_args(args("app"), VERSION).ok());
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(AnonixDirectory::new(PathBuf::from("hello"))),
                Arg::ApiUrl("http://gw:8080/api/v1".to_string()),
            ]),
            parse_args(args("app --datadir hello --api-url http://gw:8080/api/v1"), VERSION).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::ApiUrl("http://gw".to_string()),
                Arg::DatadirPath(AnonixDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("app --api-url http://gw --datadir hello"), VERSION).ok()
        );
    }

    #[test]
    fn test_split_args_last_wins() {
        let parsed = parse_args(args("app --api-url a --api-url b"), VERSION).unwrap();
        let (datadir, url) = split_args(&parsed);
        assert_eq!(datadir, None);
        assert_eq!(url.as_deref(), Some("b"));
    }
}
