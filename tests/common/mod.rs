#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// A scratch directory with a small Brown-style corpus and an input spreadsheet
pub struct Fixture {
    _tmp: TempDir,
    pub root: PathBuf,
    pub brown: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Fixture {
    pub fn new(candidates: &[&str]) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        let brown = root.join("nltk_data").join("corpora").join("brown");
        fs::create_dir_all(&brown).expect("create corpus dir");
        // The first document starts with "Running", which must not count as noun-followed
        fs::write(brown.join("ca01"),
            "\n\n\tRunning/vbg water/nn is/bez cold/jj ./.\n\n\
             \tThe/at running/vbg dog/nn barked/vbd ./.\n").unwrap();
        fs::write(brown.join("ca02"),
            "\n\n\tA/at running/vbg County/nn-tl race/nn ./.\n\n\
             \tHe/pps was/bedz walking/vbg home/nr ./.\n\n\
             \tThe/at walking/vbg stick/nn broke/vbd ./.\n\n\
             \tShe/pps kept/vbd running/vbg\n").unwrap();
        fs::write(brown.join("README"), "BROWN CORPUS/nn").unwrap();

        let input = root.join("keep.xlsx");
        write_candidates(&input, "ing_form", candidates);
        let output = root.join("adjectivalness_analysis.xlsx");
        Fixture { _tmp: tmp, root, brown, input, output }
    }
}

pub fn write_candidates(path: &Path, column: &str, candidates: &[&str]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(0, 0, "verb").unwrap();
    sheet.write_string(0, 1, column).unwrap();
    for (idx, word) in candidates.iter().enumerate() {
        sheet.write_string(idx as u32 + 1, 0, word.trim_end_matches("ing")).unwrap();
        sheet.write_string(idx as u32 + 1, 1, *word).unwrap();
    }
    workbook.save(path).unwrap();
}

/// Every row of the first worksheet, cells rendered as text
pub fn read_rows(path: &Path) -> Vec<Vec<String>> {
    let mut workbook = open_workbook_auto(path).expect("open report");
    let range = workbook.worksheet_range_at(0).expect("a worksheet").expect("readable worksheet");
    range.rows()
        .map(|row| row.iter().map(|cell: &Data| cell.to_string()).collect())
        .collect()
}
