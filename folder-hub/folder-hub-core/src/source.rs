//! Where the initial folder collection comes from.

use crate::folder::{check_invariants, Folder, OrgId};
use anyhow::{Context, Result};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::info;

/// Supplies the ordered folder collection a repository starts from.
pub trait FolderSource {
    fn load(&self) -> Result<Vec<Folder>>;
}

/// JSON array of folders on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, folders: &[Folder]) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_vec_pretty(folders)?;
        std::fs::write(&self.path, data)
            .with_context(|| format!("writing folders to {}", self.path.display()))?;
        info!(path = %self.path.display(), count = folders.len(), "saved folders");
        Ok(())
    }
}

impl FolderSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Folder>> {
        let data = std::fs::read(&self.path)
            .with_context(|| format!("reading folders from {}", self.path.display()))?;
        let folders: Vec<Folder> = serde_json::from_slice(&data)
            .with_context(|| format!("parsing folders in {}", self.path.display()))?;
        check_invariants(&folders)
            .with_context(|| format!("inconsistent folder data in {}", self.path.display()))?;
        Ok(folders)
    }
}

const ADJECTIVES: &[&str] = &[
    "amber", "brave", "calm", "clever", "daring", "eager", "fancy", "gentle", "happy", "jolly",
    "keen", "lucky", "merry", "noble", "proud", "quiet", "rapid", "steady", "tidy", "witty",
];

const NOUNS: &[&str] = &[
    "badger", "cobra", "dingo", "falcon", "gecko", "heron", "ibis", "jackal", "koala", "lemur",
    "marten", "newt", "otter", "panda", "quail", "raven", "stoat", "tapir", "viper", "wombat",
];

/// Seeded generator of plausible folder trees, one forest per organization.
///
/// Names are `adjective-noun` pairs. Below the roots a name may repeat across
/// branches but never along a single path. Root names are unique across the
/// whole data set so that no two organizations share a path prefix.
#[derive(Clone, Debug)]
pub struct SampleSource {
    pub seed: u64,
    pub orgs: usize,
    pub roots_per_org: usize,
    pub depth: usize,
    pub fanout: usize,
}

impl Default for SampleSource {
    fn default() -> Self {
        Self {
            seed: 2022,
            orgs: 3,
            roots_per_org: 3,
            depth: 3,
            fanout: 2,
        }
    }
}

impl SampleSource {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Organizations in generation order; the first is always the default org.
    pub fn org_ids(&self) -> Vec<OrgId> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.org_ids_from(&mut rng)
    }

    fn org_ids_from(&self, rng: &mut StdRng) -> Vec<OrgId> {
        (0..self.orgs)
            .map(|i| {
                if i == 0 {
                    OrgId::default_org()
                } else {
                    OrgId(uuid::Builder::from_random_bytes(rng.gen()).into_uuid())
                }
            })
            .collect()
    }

    pub fn generate(&self) -> Vec<Folder> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let orgs = self.org_ids_from(&mut rng);
        let mut used_roots = HashSet::new();
        let mut folders = Vec::new();

        for org in orgs {
            for _ in 0..self.roots_per_org {
                let root = Folder::root(unique_name(&mut rng, &mut used_roots), org);
                self.grow(&mut rng, &root, 1, &mut folders);
            }
        }
        folders
    }

    fn grow(&self, rng: &mut StdRng, folder: &Folder, level: usize, out: &mut Vec<Folder>) {
        out.push(folder.clone());
        if level >= self.depth {
            return;
        }
        let children = rng.gen_range(0..=self.fanout);
        for _ in 0..children {
            let mut name = random_name(rng);
            while folder.segments().any(|s| s == name) {
                name = random_name(rng);
            }
            let child = Folder::child_of(folder, name);
            self.grow(rng, &child, level + 1, out);
        }
    }
}

impl FolderSource for SampleSource {
    fn load(&self) -> Result<Vec<Folder>> {
        Ok(self.generate())
    }
}

fn random_name(rng: &mut StdRng) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("plain");
    let noun = NOUNS.choose(rng).copied().unwrap_or("folder");
    format!("{adjective}-{noun}")
}

fn unique_name(rng: &mut StdRng, used: &mut HashSet<String>) -> String {
    let mut name = random_name(rng);
    let mut n = 1;
    while !used.insert(name.clone()) {
        n += 1;
        // leading counter keeps roots from being string prefixes of each other
        name = format!("{n}-{}", random_name(rng));
    }
    name
}
