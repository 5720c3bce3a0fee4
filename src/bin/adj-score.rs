//! Score the adjectivalness of a list of words against the Brown corpus
//!
//! Reads the `ing_form` column of `keep.xlsx`, counts how often each distinct word is followed by
//! a noun (tag `NN`) in the Brown corpus, and writes `adjectivalness_analysis.xlsx`. The corpus
//! is taken from `~/nltk_data/corpora/brown` and downloaded there if missing.

// argument parsing
#[macro_use] extern crate clap;
// logging
extern crate env_logger;
// lastly, this library
extern crate adjectivalness;

use std::path::PathBuf;
use clap::Arg;

use adjectivalness::config::{self, Config};
use adjectivalness::count::{FirstToken, NOUN_TAG};
use adjectivalness::errors::*;
use adjectivalness::pipeline;

pub fn main() {
    // Main can't return a Result, and the ? operator needs the enclosing function to return Result
    if let Err(err) = inner_main() {
        eprintln!("Could not recover. Exiting. {}", err);
        std::process::exit(1);
    }
}
pub fn inner_main() -> Result<()> {
    env_logger::init();
    let args = app_from_crate!()
        .arg(Arg::with_name("input")
            .long("input").value_name("FILE").default_value(config::DEFAULT_INPUT)
            .help("spreadsheet with the candidate words"))
        .arg(Arg::with_name("column")
            .long("column").value_name("HEADER").default_value(config::DEFAULT_COLUMN)
            .help("header of the column holding the candidate words"))
        .arg(Arg::with_name("output")
            .long("output").value_name("FILE").default_value(config::DEFAULT_OUTPUT)
            .help("spreadsheet to write the scores to (overwritten)"))
        .arg(Arg::with_name("corpus")
            .long("corpus").value_name("DIR").takes_value(true)
            .help("Brown corpus directory [default: ~/nltk_data/corpora/brown]"))
        .arg(Arg::with_name("noun-tag")
            .long("noun-tag").value_name("TAG").default_value(NOUN_TAG)
            .help("tag a following token must carry, exactly"))
        .arg(Arg::with_name("count-first-token")
            .long("count-first-token")
            .help("also check the successor of a match on the corpus' very first token"))
        .arg(Arg::with_name("offline")
            .long("offline")
            .help("fail instead of downloading a missing corpus"))
        .get_matches();

    let mut config = Config::default();
    if let Some(input) = args.value_of("input") { config.input = PathBuf::from(input); }
    if let Some(column) = args.value_of("column") { config.column = column.to_string(); }
    if let Some(output) = args.value_of("output") { config.output = PathBuf::from(output); }
    if let Some(tag) = args.value_of("noun-tag") { config.criteria.noun_tag = tag.to_string(); }
    config.corpus_dir = args.value_of("corpus").map(PathBuf::from);
    config.allow_download = !args.is_present("offline");
    if args.is_present("count-first-token") {
        config.criteria.first_token = FirstToken::Counted;
    }

    println!("Looking up words from column {:?} of {}", config.column, config.input.display());
    pipeline::run_with(&config, |words| println!("{:?}", words), |stat| {
        println!("Word: {}", stat.word);
        println!("Total occurrences of {}: {}", stat.word, stat.total_count);
        println!("Occurrences of {} before a noun: {}", stat.word, stat.noun_follow_count);
        println!("Adjectivalness: {}", stat.adjectivalness);
        println!();
    })?;

    println!("Saved {}", config.output.display());
    Ok(())
}
