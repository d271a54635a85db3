//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "xlacs", about = "corpus augmentation tool.")]
/// Holds every command that is callable by the `xlacs` command.
pub enum Xlacs {
    #[structopt(about = "Mark aspect extents with delimiter pairs")]
    Mark(Mark),
    #[structopt(about = "Translate a marked corpus and recover spans")]
    Translate(Translate),
    #[structopt(about = "Code-switch aspects between a marked corpus and its translation")]
    Switch(Switch),
    #[structopt(about = "Strip leftover delimiters and renumber offsets")]
    Strip(Strip),
    #[structopt(about = "Drop opinions without an anchored target")]
    Clean(Clean),
    #[structopt(about = "Join corpus files into one")]
    Merge(Merge),
    #[structopt(about = "Run the full augmentation pipeline")]
    Augment(Augment),
}

#[derive(Debug, StructOpt)]
pub struct Mark {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "marked corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Translate {
    #[structopt(parse(from_os_str), help = "marked corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "translated corpus destination")]
    pub dst: PathBuf,
    #[structopt(help = "target language (two-letter code or full name)")]
    pub target: String,
    #[structopt(
        help = "translation service endpoint",
        long = "endpoint",
        default_value = "http://localhost:5000/translate"
    )]
    pub endpoint: String,
    #[structopt(
        help = "max attempts per sentence",
        long = "retries",
        default_value = "3"
    )]
    pub retries: usize,
}

#[derive(Debug, StructOpt)]
pub struct Switch {
    #[structopt(parse(from_os_str), help = "marked source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "translated corpus location")]
    pub translated: PathBuf,
    #[structopt(parse(from_os_str), help = "destination for source with swapped aspects")]
    pub dst_source: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "destination for translation with swapped aspects"
    )]
    pub dst_translated: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Strip {
    #[structopt(parse(from_os_str), help = "marked corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "stripped corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Clean {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "cleaned corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Merge {
    #[structopt(parse(from_os_str), help = "corpus files to join, in order")]
    pub srcs: Vec<PathBuf>,
    #[structopt(parse(from_os_str), long = "dst", help = "merged corpus destination")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Augment {
    #[structopt(parse(from_os_str), help = "source corpus location")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder for the corpus variants")]
    pub dst: PathBuf,
    #[structopt(help = "target language (two-letter code or full name)")]
    pub target: String,
    #[structopt(
        help = "translation service endpoint",
        long = "endpoint",
        default_value = "http://localhost:5000/translate"
    )]
    pub endpoint: String,
    #[structopt(
        help = "max attempts per sentence",
        long = "retries",
        default_value = "3"
    )]
    pub retries: usize,
}
