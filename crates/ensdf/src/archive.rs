// standard library
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

// external crates
use log::{debug, warn};

// internal modules
use crate::error::{Error, Result};
use crate::nuclide::{IsotopeId, Nuclide};
use crate::source::NuclideSource;

/// Pre-fetched nuclide data for offline use
///
/// An archive is a plain list of [Nuclide]s with all of their levels, stored as
/// either JSON or a bincode binary. The [Iaea](crate::Iaea) provider can
/// generate one with [Iaea::prefetch()](crate::Iaea::prefetch).
///
/// ```rust
/// # use isochart_ensdf::{Archive, Nuclide, NuclideSource};
/// let archive = Archive::new(vec![Nuclide {
///     protons: 27,
///     mass: 60,
///     levels: vec![],
/// }]);
///
/// assert!(archive.nuclide(60, 27).is_ok());
/// assert!(archive.nuclide(59, 27).is_err());
/// assert_eq!(archive.indexed().unwrap().len(), 1);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Archive {
    nuclides: BTreeMap<IsotopeId, Nuclide>,
}

impl Archive {
    /// Build an archive from a list of nuclides
    ///
    /// Where the same nuclide appears more than once the last entry is kept.
    pub fn new(nuclides: Vec<Nuclide>) -> Self {
        let mut map = BTreeMap::new();
        for nuclide in nuclides {
            let id = IsotopeId::new(nuclide.protons, nuclide.mass);
            if map.insert(id, nuclide).is_some() {
                warn!("Duplicate nuclide {id} in archive, keeping the last entry");
            }
        }
        Self { nuclides: map }
    }

    /// Read an archive, choosing the format from the file extension
    ///
    /// Files ending in `.bin` are decoded as bincode, anything else as JSON.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("bin") => Self::read_binary(path),
            _ => Self::read_json(path),
        }
    }

    /// Read an archive from a JSON list of nuclides
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let nuclides: Vec<Nuclide> = serde_json::from_reader(reader)?;
        debug!("Read {} nuclides from {}", nuclides.len(), path.as_ref().display());
        Ok(Self::new(nuclides))
    }

    /// Read an archive from a bincode list of nuclides
    pub fn read_binary<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let nuclides: Vec<Nuclide> = bincode::deserialize_from(reader)?;
        debug!("Read {} nuclides from {}", nuclides.len(), path.as_ref().display());
        Ok(Self::new(nuclides))
    }

    /// Write the archive as a JSON list of nuclides
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = BufWriter::new(File::create(path)?);
        let nuclides: Vec<&Nuclide> = self.iter().collect();
        Ok(serde_json::to_writer(f, &nuclides)?)
    }

    /// Write the archive as a bincode list of nuclides
    pub fn write_binary<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = BufWriter::new(File::create(path)?);
        let nuclides: Vec<&Nuclide> = self.iter().collect();
        Ok(bincode::serialize_into(f, &nuclides)?)
    }

    /// Iterate over nuclides ordered by proton then mass number
    pub fn iter(&self) -> impl Iterator<Item = &Nuclide> {
        self.nuclides.values()
    }

    /// Number of nuclides held
    pub fn len(&self) -> usize {
        self.nuclides.len()
    }

    /// True if the archive holds no nuclides
    pub fn is_empty(&self) -> bool {
        self.nuclides.is_empty()
    }
}

impl NuclideSource for Archive {
    type Nuclide = Nuclide;

    fn nuclide(&self, mass: u16, protons: u8) -> Result<Nuclide> {
        self.nuclides
            .get(&IsotopeId::new(protons, mass))
            .cloned()
            .ok_or(Error::NotInDatabase { mass, protons })
    }

    fn indexed(&self) -> Result<Vec<IsotopeId>> {
        Ok(self.nuclides.keys().copied().collect())
    }
}
