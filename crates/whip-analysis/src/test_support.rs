use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;
use whip_core::entities::{SessionKey, VoteRef};
use whip_corpus::{Corpus, LegislatorCache};

/// A throwaway corpus directory for unit tests.
pub struct Fixture {
    dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("tempdir should create"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn legislator(&self, id: &str, party: &str, terms: &[&str]) {
        let roles: Vec<Value> = terms.iter().map(|term| json!({"term": term})).collect();
        self.write(
            &format!("legislators/{id}"),
            &json!({"leg_id": id, "party": party, "chamber": "house", "roles": roles}),
        );
    }

    /// A retired member record: no party, no roles.
    pub fn inactive(&self, id: &str) {
        self.write(
            &format!("legislators/{id}"),
            &json!({"leg_id": id, "active": false, "roles": []}),
        );
    }

    /// Create `count` legislators named `{prefix}{n}` and return their ids.
    pub fn members(&self, prefix: &str, party: &str, count: usize) -> Vec<String> {
        (1..=count)
            .map(|n| {
                let id = format!("{prefix}{n}");
                self.legislator(&id, party, &["85R"]);
                id
            })
            .collect()
    }

    pub fn bill(&self, key: &SessionKey, file: &str, document: &Value) {
        self.write(
            &format!("bills/tx/{}/{}/{file}", key.session, key.chamber),
            document,
        );
    }

    pub fn cache(&self) -> LegislatorCache {
        LegislatorCache::new(Corpus::new(self.root(), "tx"))
    }

    fn write(&self, relative: &str, document: &Value) {
        let path = self.root().join(relative);
        std::fs::create_dir_all(path.parent().expect("path has parent")).expect("dirs create");
        std::fs::write(path, document.to_string()).expect("file writes");
    }
}

pub fn votes<S: AsRef<str>>(ids: &[S]) -> Vec<VoteRef> {
    ids.iter()
        .map(|id| VoteRef {
            leg_id: Some(id.as_ref().to_string()),
            name: None,
        })
        .collect()
}
