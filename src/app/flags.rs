// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.

use crate::error::{Error, Result};
use pico_args::Arguments;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: logo-stamp [OPTIONS] <COMMAND>

Commands:
  register <PHONE>     Request an OTP for PHONE
  verify <OTP>         Log in with the OTP sent to the registered phone
  restaurants          List restaurants for the configured city
  share                Compose the logo onto a restaurant photo and share it

Share options:
  --restaurant <ID>    Use the photo and name of this listed restaurant
  --image <URL|PATH>   Base image (placeholder when omitted)
  --logo <PATH>        Logo image (bundled logo when omitted)
  --name <TEXT>        Restaurant name, used for the shared file name
  --canvas <WxH>       Canvas size (from settings when omitted)
  --slider <Y>         Press the scale track at Y
  --scale <S>          Set the logo scale directly
  --drag <DX,DY>       Drag the logo; may be repeated
  --no-dialog          Never open a save dialog

Options:
  --config-dir <DIR>   Settings directory
  --data-dir <DIR>     Session directory
  --cache-dir <DIR>    Cache directory for saved images
  -v, --verbose        Debug logging
  -h, --help           Show this help";

/// How the scripted share sets the logo scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleInput {
    /// Press the slider track at this offset.
    Slider(f32),
    Scale(f32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShareArgs {
    /// Listed restaurant whose photo and name are used.
    pub restaurant: Option<String>,
    pub image: Option<String>,
    pub logo: Option<PathBuf>,
    pub name: Option<String>,
    pub canvas: Option<(f32, f32)>,
    pub scale: Option<ScaleInput>,
    pub drags: Vec<(f32, f32)>,
    /// Whether a native dialog may be shown.
    pub interactive: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register { phone: String },
    Verify { otp: String },
    Restaurants,
    Share(ShareArgs),
    Help,
}

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    pub cache_dir: Option<String>,
    pub verbose: bool,
    pub command: Command,
}

fn invalid(err: pico_args::Error) -> Error {
    Error::InvalidInput(err.to_string())
}

fn parse_pair(value: &str, separator: char) -> std::result::Result<(f32, f32), String> {
    let (a, b) = value
        .split_once(separator)
        .ok_or_else(|| format!("expected two numbers separated by '{separator}': {value}"))?;
    let parse = |s: &str| {
        s.trim()
            .parse::<f32>()
            .map_err(|err| format!("{s}: {err}"))
    };
    Ok((parse(a)?, parse(b)?))
}

fn parse_canvas(value: &str) -> std::result::Result<(f32, f32), String> {
    parse_pair(&value.to_ascii_lowercase(), 'x')
}

fn parse_drag(value: &str) -> std::result::Result<(f32, f32), String> {
    parse_pair(value, ',')
}

impl Flags {
    pub fn parse(mut args: Arguments) -> Result<Self> {
        let help = args.contains(["-h", "--help"]);
        let verbose = args.contains(["-v", "--verbose"]);
        let config_dir = args.opt_value_from_str("--config-dir").map_err(invalid)?;
        let data_dir = args.opt_value_from_str("--data-dir").map_err(invalid)?;
        let cache_dir = args.opt_value_from_str("--cache-dir").map_err(invalid)?;

        let subcommand = args.subcommand().map_err(invalid)?;
        let command = match subcommand.as_deref() {
            _ if help => Command::Help,
            None => Command::Help,
            Some("register") => Command::Register {
                phone: args.free_from_str().map_err(invalid)?,
            },
            Some("verify") => Command::Verify {
                otp: args.free_from_str().map_err(invalid)?,
            },
            Some("restaurants") => Command::Restaurants,
            Some("share") => Command::Share(Self::parse_share(&mut args)?),
            Some(other) => {
                return Err(Error::InvalidInput(format!("unknown command: {other}")));
            }
        };

        let rest = args.finish();
        if !rest.is_empty() && command != Command::Help {
            return Err(Error::InvalidInput(format!(
                "unexpected arguments: {rest:?}"
            )));
        }

        Ok(Self {
            data_dir,
            config_dir,
            cache_dir,
            verbose,
            command,
        })
    }

    fn parse_share(args: &mut Arguments) -> Result<ShareArgs> {
        let slider: Option<f32> = args.opt_value_from_str("--slider").map_err(invalid)?;
        let scale: Option<f32> = args.opt_value_from_str("--scale").map_err(invalid)?;
        let scale = match (slider, scale) {
            (Some(_), Some(_)) => {
                return Err(Error::InvalidInput(
                    "--slider and --scale are mutually exclusive".to_string(),
                ))
            }
            (Some(y), None) => Some(ScaleInput::Slider(y)),
            (None, Some(s)) => Some(ScaleInput::Scale(s)),
            (None, None) => None,
        };

        Ok(ShareArgs {
            restaurant: args.opt_value_from_str("--restaurant").map_err(invalid)?,
            image: args.opt_value_from_str("--image").map_err(invalid)?,
            logo: args.opt_value_from_str("--logo").map_err(invalid)?,
            name: args.opt_value_from_str("--name").map_err(invalid)?,
            canvas: args
                .opt_value_from_fn("--canvas", parse_canvas)
                .map_err(invalid)?,
            scale,
            drags: args.values_from_fn("--drag", parse_drag).map_err(invalid)?,
            interactive: !args.contains("--no-dialog"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags> {
        Flags::parse(Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn no_arguments_shows_help() {
        assert_eq!(parse(&[]).expect("flags").command, Command::Help);
        assert_eq!(parse(&["--help", "share"]).expect("flags").command, Command::Help);
    }

    #[test]
    fn global_options_are_accepted_before_command() {
        let flags = parse(&["--verbose", "--data-dir", "/tmp/d", "register", "9876543210"])
            .expect("flags");
        assert!(flags.verbose);
        assert_eq!(flags.data_dir.as_deref(), Some("/tmp/d"));
        assert_eq!(
            flags.command,
            Command::Register {
                phone: "9876543210".into()
            }
        );
    }

    #[test]
    fn share_collects_gestures() {
        let flags = parse(&[
            "share",
            "--canvas",
            "340x190",
            "--scale",
            "3",
            "--drag",
            "300,0",
            "--drag",
            "5, 2.5",
            "--no-dialog",
        ])
        .expect("flags");
        let Command::Share(share) = flags.command else {
            panic!("expected share command");
        };
        assert_eq!(share.canvas, Some((340.0, 190.0)));
        assert_eq!(share.scale, Some(ScaleInput::Scale(3.0)));
        assert_eq!(share.drags, vec![(300.0, 0.0), (5.0, 2.5)]);
        assert!(!share.interactive);
    }

    #[test]
    fn share_accepts_restaurant_id() {
        let flags = parse(&["share", "--restaurant", "42", "--name", "Cafe"]).expect("flags");
        let Command::Share(share) = flags.command else {
            panic!("expected share command");
        };
        assert_eq!(share.restaurant.as_deref(), Some("42"));
        assert_eq!(share.name.as_deref(), Some("Cafe"));
        assert_eq!(share.image, None);
        assert!(share.interactive);
    }

    #[test]
    fn slider_and_scale_conflict() {
        assert!(parse(&["share", "--slider", "10", "--scale", "2"]).is_err());
    }

    #[test]
    fn malformed_values_are_rejected() {
        assert!(parse(&["share", "--canvas", "340"]).is_err());
        assert!(parse(&["share", "--drag", "a,b"]).is_err());
        assert!(parse(&["launch"]).is_err());
        assert!(parse(&["restaurants", "extra"]).is_err());
    }
}
