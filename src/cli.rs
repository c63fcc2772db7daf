//! Command-line arguments for the `tui-raycast` binary.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::ResolutionPolicy;
use crate::engine::{EngineConfig, RenderMode};

pub const USAGE: &str = "\
usage: tui-raycast [options]

options:
  --map <path>     JSON map file (default: built-in map)
  --width <n>      camera width in columns (default: 160)
  --height <n>     camera height in rows (default: 40)
  --fps <n>        frames per second (default: 30)
  --seed <n>       spawn seed when the map has no player tile (default: 1)
  --top-down       start in top-down view
  --truncate       allow a map that does not evenly divide the camera
  -h, --help       print this help

keys:
  w/s a/d          move / strafe        q/e    rotate
  z/x c            narrow/widen/reset field of view
  -/= 0            shrink/grow/reset view radius
  tab              toggle view          esc    quit

env:
  RAYCAST_LOG=<path>   write logs to <path> (filter via RUST_LOG)";

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub map: Option<PathBuf>,
    pub config: EngineConfig,
    pub help: bool,
}

pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut options = CliOptions {
        map: None,
        config: EngineConfig::default(),
        help: false,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--map" => {
                options.map = Some(PathBuf::from(value(args, &mut i, "--map")?));
            }
            "--width" => {
                options.config.width = number(args, &mut i, "--width")?;
            }
            "--height" => {
                options.config.height = number(args, &mut i, "--height")?;
            }
            "--fps" => {
                options.config.frame_rate = number(args, &mut i, "--fps")?;
            }
            "--seed" => {
                options.config.seed = number(args, &mut i, "--seed")?;
            }
            "--top-down" => options.config.mode = RenderMode::TopDown,
            "--truncate" => options.config.resolution = ResolutionPolicy::Truncate,
            "-h" | "--help" => options.help = true,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> Result<T> {
    let v = value(args, i, flag)?;
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}
