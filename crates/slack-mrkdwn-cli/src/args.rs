use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("Unknown format '{0}', expected plain, html, markdown, urls or tui")]
    UnknownFormat(String),

    #[error("--format needs a value")]
    MissingFormat,

    #[error("Unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// What to do with the parsed messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    Plain,
    Html,
    Markdown,
    Urls,
    #[default]
    Tui,
}

impl FromStr for Format {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Format::Plain),
            "html" => Ok(Format::Html),
            "markdown" | "md" => Ok(Format::Markdown),
            "urls" => Ok(Format::Urls),
            "tui" => Ok(Format::Tui),
            other => Err(ArgsError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Args {
    pub format: Format,
    /// Export file; falls back to `export_path` from the config file.
    pub export_path: Option<PathBuf>,
    /// Write a default config file and exit.
    pub init_config: bool,
}

impl Args {
    /// Parses the arguments after the program name.
    pub fn parse(args: &[String]) -> Result<Self, ArgsError> {
        let mut parsed = Args::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if arg == "--format" || arg == "-f" {
                let value = iter.next().ok_or(ArgsError::MissingFormat)?;
                parsed.format = value.parse()?;
            } else if arg == "--init-config" {
                parsed.init_config = true;
            } else if let Some(value) = arg.strip_prefix("--format=") {
                parsed.format = value.parse()?;
            } else if arg.starts_with('-') || parsed.export_path.is_some() {
                return Err(ArgsError::UnexpectedArgument(arg.clone()));
            } else {
                parsed.export_path = Some(PathBuf::from(arg));
            }
        }

        Ok(parsed)
    }

    pub fn usage(program: &str) -> String {
        format!(
            "Usage: {program} [--format plain|html|markdown|urls|tui] [export.toml]\n       {program} --init-config"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        Args::parse(&args)
    }

    #[test]
    fn no_arguments_opens_tui_with_configured_export() {
        assert_eq!(parse(&[]), Ok(Args::default()));
    }

    #[test]
    fn format_and_path() {
        let expected = Args {
            format: Format::Html,
            export_path: Some(PathBuf::from("export.toml")),
            init_config: false,
        };
        assert_eq!(parse(&["--format", "html", "export.toml"]), Ok(expected));
        assert_eq!(
            parse(&["export.toml", "--format=markdown"]).map(|a| a.format),
            Ok(Format::Markdown)
        );
        assert_eq!(parse(&["-f", "urls"]).map(|a| a.format), Ok(Format::Urls));
        assert_eq!(parse(&["--init-config"]).map(|a| a.init_config), Ok(true));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            parse(&["--format", "pdf"]),
            Err(ArgsError::UnknownFormat("pdf".to_string()))
        );
        assert_eq!(parse(&["--format"]), Err(ArgsError::MissingFormat));
        assert_eq!(
            parse(&["a.toml", "b.toml"]),
            Err(ArgsError::UnexpectedArgument("b.toml".to_string()))
        );
        assert_eq!(
            parse(&["--verbose"]),
            Err(ArgsError::UnexpectedArgument("--verbose".to_string()))
        );
    }
}
