use clap::{Parser, ValueEnum};
use site_survey::{Result, SurveyConfig, TextExtraction};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "site-survey")]
#[command(about = "Lists a page's external resources and counts the words of its privacy policy")]
#[command(version)]
pub struct Args {
    /// Page to survey (defaults to the configured target)
    pub url: Option<String>,

    /// Phrase to look for in hyperlink targets
    #[arg(short, long)]
    pub phrase: Option<String>,

    /// Directory the JSON files are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON configuration file; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How text is recovered from the linked page
    #[arg(long, value_enum)]
    pub text: Option<TextArg>,

    /// Use the body of non-2xx responses instead of failing
    #[arg(long)]
    pub accept_error_status: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TextArg {
    /// Strip tags from the serialized markup
    Markup,
    /// Use the parser's text nodes
    TextNodes,
}

impl From<TextArg> for TextExtraction {
    fn from(arg: TextArg) -> Self {
        match arg {
            TextArg::Markup => TextExtraction::Markup,
            TextArg::TextNodes => TextExtraction::TextNodes,
        }
    }
}

/// Build the run configuration: defaults, then the config file, then flags
pub fn build_config(args: &Args) -> Result<SurveyConfig> {
    let mut config = match &args.config {
        Some(path) => SurveyConfig::from_file(path)?,
        None => SurveyConfig::default(),
    };

    if let Some(url) = &args.url {
        config.target_url = url.clone();
    }
    if let Some(phrase) = &args.phrase {
        config.link_phrase = phrase.clone();
    }
    if let Some(dir) = &args.output_dir {
        config.output_dir = dir.clone();
    }
    if let Some(text) = args.text {
        config.text_extraction = text.into();
    }
    if args.accept_error_status {
        config.accept_error_status = true;
    }
    if args.timeout.is_some() {
        config.timeout_secs = args.timeout;
    }

    Ok(config)
}
