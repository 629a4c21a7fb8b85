#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}

/// Population export: name in column 0, year in column 2, value in column 3.
/// Country A carries both a 2022 and a 2023 row; only the 2023 value may be
/// used. Country D has data but no entry in the database.
pub fn population_csv() -> String {
    [
        "country,code,year,population",
        "Country A,CA,2022,900",
        "Country A,CA,2023,1000",
        "Country B,CB,2023,250000",
        "Country D,CD,2023,7777",
    ]
    .join("\n")
}

/// World Bank style GDP export: five metadata rows, then a header row whose
/// year labels locate the value column. Country B has an empty 2023 cell and
/// Country C an unparseable one.
pub fn gdp_csv() -> String {
    [
        "Data Source,World Development Indicators",
        "Last Updated Date,2024-05-01",
        "Release,v2",
        "Note,GDP current US$",
        "Contact,data@example.org",
        "Country Name,Country Code,2022,2023",
        "Country A,CA,2400.0,2500.5",
        "Country B,CB,1000,",
        "Country C,CC,5,not available",
    ]
    .join("\n")
}

/// Country database with four placeholder entries and one already filled.
pub fn database_js() -> String {
    [
        "const countryInfo = {",
        "  'Country A': {",
        "    capital: 'City X',",
        "    population: 0,",
        "    gdp: 0,",
        "  },",
        "  'Country B': {",
        "    capital: 'City Y',",
        "    population: 0,",
        "    gdp: 0,",
        "  },",
        "  'Country C': {",
        "    capital: 'City Z',",
        "    population: 0,",
        "    gdp: 0,",
        "  },",
        "  'Country E': {",
        "    capital: 'City Q',",
        "    population: 0,",
        "    gdp: 0,",
        "  },",
        "  'Country F': {",
        "    capital: 'City R',",
        "    population: 42,",
        "    gdp: 9.5,",
        "  },",
        "};",
        "",
        "export default countryInfo;",
        "",
    ]
    .join("\n")
}
