use super::NetworkError;
use byteorder::LittleEndian;
use byteorder::ReadBytesExt;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

/// Manifest file naming every variable in a checkpoint directory.
pub const MANIFEST: &str = "manifest.json";

/// One manifest entry: where a variable lives and its tensor shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub filename: String,
    pub shape: Vec<usize>,
}

impl Entry {
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }
}

/// A loaded weight tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    shape: Vec<usize>,
    values: Vec<f32>,
}

impl Variable {
    pub fn new(shape: Vec<usize>, values: Vec<f32>) -> Self {
        Self { shape, values }
    }
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }
    pub fn values(&self) -> &[f32] {
        &self.values
    }
}

/// Every variable of a checkpoint, keyed by its graph name
/// (e.g. `fire2/squeeze1x1/kernel`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightSet(BTreeMap<String, Variable>);

impl WeightSet {
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.0.get(name)
    }
    pub fn insert(&mut self, name: String, variable: Variable) {
        self.0.insert(name, variable);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    /// Fails on the first required name that is absent.
    pub fn verify<'a>(&self, required: impl IntoIterator<Item = &'a str>) -> Result<(), NetworkError> {
        required
            .into_iter()
            .find(|name| !self.0.contains_key(*name))
            .map(|name| Err(NetworkError::MissingVariable(name.to_string())))
            .unwrap_or(Ok(()))
    }
}

/// Reference to a directory of dumped weights: a `manifest.json` mapping
/// variable names to `{ filename, shape }`, plus one raw little-endian
/// `f32` file per variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint(PathBuf);

impl Checkpoint {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }
    pub fn dir(&self) -> &Path {
        &self.0
    }
    pub fn manifest(&self) -> Result<BTreeMap<String, Entry>, NetworkError> {
        let ref path = self.0.join(MANIFEST);
        let file = std::fs::File::open(path).map_err(|source| NetworkError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
    /// Reads every variable and checks the SqueezeNet graph can be wired.
    pub fn load(&self) -> Result<WeightSet, NetworkError> {
        log::info!("{:<32}{:<32}", "loading checkpoint", self);
        let mut weights = WeightSet::default();
        for (name, entry) in self.manifest()? {
            let variable = self.variable(&name, &entry)?;
            log::debug!("{:<32}{:?}", name, variable.shape());
            weights.insert(name, variable);
        }
        weights.verify(super::squeezenet::variables().iter().map(String::as_str))?;
        log::info!("{:<32}{:<32}", "loaded variables", weights.len());
        Ok(weights)
    }
    fn variable(&self, name: &str, entry: &Entry) -> Result<Variable, NetworkError> {
        let ref path = self.0.join(&entry.filename);
        let io = |source| NetworkError::Io {
            path: path.clone(),
            source,
        };
        let bytes = std::fs::metadata(path).map_err(io)?.len() as usize;
        let found = bytes / std::mem::size_of::<f32>();
        if found != entry.size() || bytes % std::mem::size_of::<f32>() != 0 {
            return Err(NetworkError::ShapeMismatch {
                name: name.to_string(),
                expected: entry.size(),
                found,
            });
        }
        let ref mut reader = BufReader::new(std::fs::File::open(path).map_err(io)?);
        let mut values = vec![0f32; found];
        reader
            .read_f32_into::<LittleEndian>(&mut values)
            .map_err(io)?;
        Ok(Variable::new(entry.shape.clone(), values))
    }
}

impl std::fmt::Display for Checkpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
