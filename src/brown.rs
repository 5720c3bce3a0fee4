//! Brown corpus reader
//!
//! Reads the corpus the way NLTK lays it out on disk: one plain text file per document, named
//! like `ca01`, holding whitespace separated `word/tag` tokens. Files are concatenated in sorted
//! name order into a single flat sequence.
use std::fs;
use std::path::{Path, PathBuf};
use nom::IResult;
use nom::bytes::complete::{take_till1, take_while};
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::preceded;
use regex::Regex;
use crate::corpus::{TaggedCorpus, TaggedToken};
use crate::errors::*;

/// Document files; everything else in the directory (README, cats.txt, ..) is metadata
const FILEID_PATTERN: &str = r"^c[a-z]\d\d$";

/// Split `word/tag` at the last slash, upper-casing the tag
///
/// Words may contain slashes themselves (`1/2/cd`), tags never do. A token without any slash
/// keeps all of its text as the word and gets an empty tag.
pub fn split_tagged(raw: &str) -> TaggedToken {
    match raw.rfind('/') {
        Some(idx) => TaggedToken::new(&raw[..idx], raw[idx + 1..].to_uppercase()),
        None => TaggedToken::new(raw, ""),
    }
}

fn tagged_token(input: &str) -> IResult<&str, TaggedToken> {
    map(take_till1(char::is_whitespace), split_tagged)(input)
}

fn tagged_tokens(input: &str) -> IResult<&str, Vec<TaggedToken>> {
    many0(preceded(take_while(char::is_whitespace), tagged_token))(input)
}

/// Parse the text of one corpus file
pub fn parse_tagged(content: &str) -> Result<Vec<TaggedToken>> {
    match tagged_tokens(content) {
        Ok((rest, tokens)) => {
            // Only trailing whitespace can be left over
            if !rest.trim().is_empty() {
                return Err(Error::Other(format!(
                    "Stopped parsing tagged text early, {} bytes left", rest.len())));
            }
            Ok(tokens)
        }
        Err(err) => Err(Error::Other(format!("Couldn't parse tagged text: {:?}", err))),
    }
}

/// List the document files of a corpus directory, sorted by name
pub fn fileids(dir: &Path) -> Result<Vec<PathBuf>> {
    let fileid = Regex::new(FILEID_PATTERN).unwrap();
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| fileid.is_match(name));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every document of the corpus into memory
pub fn load(dir: &Path) -> Result<TaggedCorpus> {
    if !dir.is_dir() {
        return Err(Error::CorpusUnavailable(
            format!("{} is not a directory", dir.display())));
    }
    let files = fileids(dir)?;
    if files.is_empty() {
        return Err(Error::CorpusUnavailable(
            format!("no corpus files (like ca01) in {}", dir.display())));
    }

    let mut tokens = vec![];
    for path in files.iter() {
        let content = fs::read(path)?;
        let before = tokens.len();
        tokens.extend(parse_tagged(&String::from_utf8_lossy(&content))?);
        debug!("Read {} tokens from {}", tokens.len() - before, path.display());
    }
    info!("Loaded {} tagged tokens from {} files in {}", tokens.len(), files.len(), dir.display());
    Ok(TaggedCorpus::new(tokens))
}
