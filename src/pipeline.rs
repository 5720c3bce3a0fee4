//! The whole run: candidates in, corpus loaded, every candidate counted, report out
use crate::config::Config;
use crate::count::{PositionIndex, WordStat};
use crate::errors::*;
use crate::nltk;
use crate::sheet;

/// Score every candidate word and write the report
///
/// The input spreadsheet is read before the corpus is touched, so a bad input fails fast.
/// `on_stat` sees each result as soon as it is counted. Nothing is written unless every word
/// was counted.
pub fn run<F>(config: &Config, on_stat: F) -> Result<Vec<WordStat>>
    where F: FnMut(&WordStat) {
    run_with(config, |_| {}, on_stat)
}

/// Like `run`, also handing the deduplicated candidate list to `on_candidates` before counting
pub fn run_with<C, F>(config: &Config, on_candidates: C, mut on_stat: F) -> Result<Vec<WordStat>>
    where C: FnOnce(&[String]), F: FnMut(&WordStat) {
    let words = sheet::read_candidates(&config.input, &config.column)?;
    info!("Candidates: {:?}", words);
    on_candidates(&words);
    let corpus = nltk::open_brown(&config.brown_dir()?, config.allow_download)?;

    let index = PositionIndex::build(&corpus);
    info!("Scoring {} words against {} tokens", words.len(), corpus.len());
    let mut stats = Vec::with_capacity(words.len());
    for word in words.iter() {
        let stat = index.count(&corpus, word, &config.criteria);
        debug!("{:?}", stat);
        on_stat(&stat);
        stats.push(stat);
    }

    sheet::write_report(&config.output, &stats)?;
    Ok(stats)
}
