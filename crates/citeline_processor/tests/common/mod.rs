/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2026 citeline contributors
*/

#![allow(dead_code)]

use std::path::PathBuf;

use citeline_core::{entry, Entry, StyleOptions};
use citeline_processor::{InputFormat, ParseOutcome, ReferenceParser};

// --- Fixtures: the same two references in every input format ---

pub const BIBTEX: &str = r#"
% exported bibliography
@article{smith2020,
  author  = {Jane Smith},
  title   = {A Study},
  journal = {J. Sci},
  year    = {2020},
  volume  = {5},
  number  = {2},
  pages   = {10-20}
}

@book{doe1999,
  author    = "John Doe and Ann Lee",
  title     = {Collected {Essays}},
  publisher = {Academic Press},
  year      = 1999
}
"#;

pub const RIS: &str = "TY  - JOUR
AU  - Jane Smith
TI  - A Study
JO  - J. Sci
PY  - 2020
VL  - 5
IS  - 2
SP  - 10
EP  - 20
ER  -

TY  - BOOK
AU  - John Doe
AU  - Ann Lee
TI  - Collected Essays
PB  - Academic Press
PY  - 1999
ER  -
";

pub const CSL_JSON: &str = r#"[
  {
    "id": "smith2020",
    "type": "article-journal",
    "author": [{"family": "Smith", "given": "Jane"}],
    "title": "A Study",
    "container-title": "J. Sci",
    "issued": {"date-parts": [[2020, 3]]},
    "volume": "5",
    "issue": 2,
    "page": "10-20"
  },
  {
    "id": "doe1999",
    "type": "book",
    "author": [
      {"family": "Doe", "given": "John"},
      {"family": "Lee", "given": "Ann"}
    ],
    "title": "Collected Essays",
    "publisher": "Academic Press",
    "issued": {"date-parts": [[1999]]}
  }
]"#;

pub const ENDNOTE: &str = "%0 Journal Article
%A Jane Smith
%T A Study
%J J. Sci
%D 2020
%V 5
%N 2
%P 10-20

%0 Book
%A John Doe
%A Ann Lee
%T Collected Essays
%I Academic Press
%D 1999
";

pub fn fixture(format: InputFormat) -> &'static str {
    match format {
        InputFormat::Bibtex => BIBTEX,
        InputFormat::Ris => RIS,
        InputFormat::CslJson => CSL_JSON,
        InputFormat::Endnote => ENDNOTE,
    }
}

pub fn fixture_extension(format: InputFormat) -> &'static str {
    match format {
        InputFormat::Bibtex => "bib",
        InputFormat::Ris => "ris",
        InputFormat::CslJson => "json",
        InputFormat::Endnote => "enw",
    }
}

pub const ALL_FORMATS: [InputFormat; 4] = [
    InputFormat::Bibtex,
    InputFormat::Ris,
    InputFormat::CslJson,
    InputFormat::Endnote,
];

pub fn parse_fixture(format: InputFormat) -> ParseOutcome {
    format
        .parser()
        .parse(fixture(format))
        .expect("fixture should parse")
}

// --- Helper Functions for Test Data Construction ---

/// The worked-example journal article.
pub fn smith_article() -> Entry {
    entry!(
        "article", "smith2020",
        Author = "Jane Smith",
        Title = "A Study",
        Year = "2020",
        Journal = "J. Sci",
        Volume = "5",
        Number = "2",
        Pages = "10-20",
    )
}

pub fn doe_book() -> Entry {
    entry!(
        "book", "doe1999",
        Author = "John Doe and Ann Lee",
        Title = "Collected Essays",
        Year = "1999",
        Publisher = "Academic Press",
    )
}

/// Options without a title line, so reference lines start at index 0.
pub fn untitled_options() -> StyleOptions {
    StyleOptions {
        show_title: false,
        ..Default::default()
    }
}

/// Write `content` to a file named `name` inside a fresh temp dir.
pub fn write_temp(name: &str, content: &[u8]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    (dir, path)
}
