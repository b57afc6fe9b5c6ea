use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

pub fn load_json<T, P>(path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let data = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("cannot parse {}", path.display()))?;
    Ok(data)
}

pub fn save_json<T, P>(data: &T, path: P) -> anyhow::Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let serialized = serde_json::to_string_pretty(data)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("cannot create {}", path.display()))?;
    file.write_all(serialized.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::language::circuit::Circuit;
    use crate::rewriting::simplify::SimplifyConfig;

    #[test]
    fn round_trip_through_file() {
        let path = std::env::temp_dir().join(format!("gates-json-{}.json", std::process::id()));
        let config = SimplifyConfig {
            max_explored: 17,
            ..Default::default()
        };
        save_json(&config, &path).unwrap();
        let loaded: SimplifyConfig = load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_names_path() {
        let error = load_json::<Circuit, _>("/nonexistent/circuit.json").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/circuit.json"));
    }
}
