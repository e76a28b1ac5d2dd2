use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

pub fn save_json(data: &serde_json::Value, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(data)?.as_bytes())?;
    info!(path = %path.display(), "wrote scrape result");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn save_json_writes_pretty_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.json");

        save_json(&json!({ "articles": [] }), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"articles\": []"));
    }
}
