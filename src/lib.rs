//! Adjectivalness of words in a tagged corpus
//!
//! How often is a word directly followed by a noun? For `-ing` forms this is a rough proxy for
//! how adjective-like they behave ("running water" vs "is running"). The modules here load the
//! Brown corpus, read candidate words from a spreadsheet, count, and write the report; the
//! `adj-score` binary strings them together.


#[macro_use] extern crate log;
extern crate farmhash;
pub mod errors;
pub mod farm;
pub mod staging;
pub mod corpus;
pub mod brown;
pub mod nltk;
pub mod count;
pub mod sheet;
pub mod config;
pub mod pipeline;
