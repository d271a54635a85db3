//! # xlacs
//!
//! xlacs augments span-labeled sentiment corpora by round-tripping
//! sentences through a machine-translation service while keeping every
//! aspect label anchored to its substring, then code-switching aligned
//! aspects between the source and translated texts.
//!
//! This project can be used as a command line tool over corpus files,
//! or as a lib to integrate marking/recovery/code-switching into other
//! projects.
//!
//! ## Getting started
//!
//! ```sh
//! xlacs 0.1.0
//! corpus augmentation tool.
//!
//! USAGE:
//!     xlacs <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     augment      Run the full augmentation pipeline
//!     clean        Drop opinions without an anchored target
//!     help         Prints this message or the help of the given subcommand(s)
//!     mark         Mark aspect extents with delimiter pairs
//!     merge        Join corpus files into one
//!     strip        Strip leftover delimiters and renumber offsets
//!     switch       Code-switch aspects between a marked corpus and its translation
//!     translate    Translate a marked corpus and recover spans
//! ```
//!
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

use xlacs::corpus;
use xlacs::error::Error;
use xlacs::io::{read_corpus, write_corpus};
use xlacs::marking::{CodeSwitcher, Marker, Stripper, Transform};
use xlacs::pipelines::{load_intermediate, map_sentences, Augment, Pipeline};
use xlacs::translate::RemoteTranslator;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Xlacs::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Xlacs::Mark(m) => {
            let reviews = read_corpus(&m.src)?;
            let marker = Marker::default();
            let marked = map_sentences(reviews, |sentence| {
                if sentence.is_numeric_only() {
                    sentence
                } else {
                    marker.transform_own(sentence)
                }
            });
            write_corpus(&m.dst, &marked)?;
        }

        cli::Xlacs::Translate(t) => {
            let reviews = load_intermediate(&t.src)?;
            let translator =
                RemoteTranslator::new(&t.endpoint, &t.target)?.with_max_retries(t.retries);
            let pipeline = Augment::new(t.src, t.dst.clone(), &t.target, translator)?;
            let translated = pipeline.translate(&reviews);
            write_corpus(&t.dst, &translated)?;
        }

        cli::Xlacs::Switch(s) => {
            let source = load_intermediate(&s.src)?;
            let translated = load_intermediate(&s.translated)?;
            let switcher = CodeSwitcher::default();
            let (switched_source, switched_translated) =
                switcher.switch_documents(source, translated)?;
            write_corpus(&s.dst_source, &switched_source)?;
            write_corpus(&s.dst_translated, &switched_translated)?;
        }

        cli::Xlacs::Strip(s) => {
            let reviews = load_intermediate(&s.src)?;
            let stripper = Stripper::default();
            let stripped = map_sentences(reviews, |sentence| stripper.transform_own(sentence));
            write_corpus(&s.dst, &stripped)?;
        }

        cli::Xlacs::Clean(c) => {
            let mut reviews = read_corpus(&c.src)?;
            corpus::drop_unanchored(&mut reviews);
            write_corpus(&c.dst, &reviews)?;
        }

        cli::Xlacs::Merge(m) => {
            let mut parts = Vec::with_capacity(m.srcs.len());
            for src in &m.srcs {
                parts.push(read_corpus(src)?);
            }
            write_corpus(&m.dst, &corpus::merge(parts))?;
        }

        cli::Xlacs::Augment(a) => {
            let translator =
                RemoteTranslator::new(&a.endpoint, &a.target)?.with_max_retries(a.retries);
            let pipeline = Augment::new(a.src, a.dst, &a.target, translator)?;
            pipeline.run()?;
        }
    };
    Ok(())
}
