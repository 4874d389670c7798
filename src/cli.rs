use std::path::PathBuf;

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tui-lagoon [options]

  --config <path>     JSON settings file
  --log-file <path>   write logs here (RUST_LOG overrides the default `info` filter)
  --fps <n>           animation rate, 1..=120 (overrides tick_ms)
  --no-color          plain glyphs, no color or attributes
  --help              show this message
";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub fps: Option<u32>,
    pub no_color: bool,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut out = CliArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --config"))?;
                out.config = Some(PathBuf::from(v));
            }
            "--log-file" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log-file"))?;
                out.log_file = Some(PathBuf::from(v));
            }
            "--fps" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --fps"))?;
                let fps = v
                    .parse::<u32>()
                    .ok()
                    .filter(|n| (1..=120).contains(n))
                    .ok_or_else(|| anyhow!("invalid --fps value: {} (expected 1..=120)", v))?;
                out.fps = Some(fps);
            }
            "--no-color" => out.no_color = true,
            "--help" | "-h" => out.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_args_uses_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn parse_args_parses_every_flag() {
        let cli = parse_args(&args(&[
            "--config",
            "lagoon.json",
            "--log-file",
            "/tmp/lagoon.log",
            "--fps",
            "30",
            "--no-color",
        ]))
        .unwrap();
        assert_eq!(
            cli,
            CliArgs {
                config: Some(PathBuf::from("lagoon.json")),
                log_file: Some(PathBuf::from("/tmp/lagoon.log")),
                fps: Some(30),
                no_color: true,
                help: false,
            }
        );
    }

    #[test]
    fn parse_args_rejects_bad_input() {
        assert!(parse_args(&args(&["--fps", "0"])).is_err());
        assert!(parse_args(&args(&["--fps", "121"])).is_err());
        assert!(parse_args(&args(&["--fps", "fast"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["observe"])).is_err());
    }
}
