// standard library
use std::format as f;

// internal modules
use crate::archive::Archive;
use crate::element::ElementIndex;
use crate::error::{Error, Result};
use crate::nuclide::{DecayRatio, IsotopeId, Level, Nuclide};
use crate::parsers::number_or_nan;
use crate::source::NuclideSource;
use crate::units::{Quantity, Unit};

// external crates
use csv::Reader;
use kdam::par_tqdm;
use log::{debug, info, trace, warn};
use rayon::prelude::*;
use serde::Deserialize;

/// Base of the URL used to query the IAEA API
const IAEA_API: &str = "https://nds.iaea.org/relnsd/v1/data?";

/// Online provider backed by the IAEA LiveChart of nuclides API
///
/// The list of ground state nuclides and their element symbols is requested
/// once on [Iaea::connect()]. Levels are then requested per nuclide.
///
/// ```rust, no_run
/// # use isochart_ensdf::{Iaea, NuclideSource};
/// let iaea = Iaea::connect().unwrap();
/// let co60 = iaea.nuclide(60, 27).unwrap();
/// ```
///
/// The IAEA reports up to three decay modes per level in percent, which become
/// the decay ratio of each [Level]. Labels are translated to ENSDF notation
/// where the two differ, so that `EC+B+` is reported as `EC+%B+`.
///
/// See <https://www-nds.iaea.org/relnsd/vcharthtml/api_v0_guide.html> for
/// further information.
#[derive(Debug, Clone)]
pub struct Iaea {
    index: ElementIndex,
    ground_states: Vec<IsotopeId>,
}

impl Iaea {
    /// Collect the list of ground state nuclides from the IAEA
    pub fn connect() -> Result<Self> {
        let url = f!("{IAEA_API}fields=ground_states&nuclides=all");
        let csv = minreq::get(url).send()?;
        let (index, ground_states) = read_ground_states(csv.as_str()?)?;
        info!("IAEA lists {} ground state nuclides", ground_states.len());

        Ok(Self {
            index,
            ground_states,
        })
    }

    /// Element symbols known to the IAEA
    pub fn elements(&self) -> &ElementIndex {
        &self.index
    }

    /// Raw, unaltered CSV level data for a nuclide
    ///
    /// For getting something usable, use [Iaea::nuclide()] instead.
    pub fn fetch_raw_csv(&self, mass: u16, protons: u8) -> Result<String> {
        let symbol = self.index.symbol(protons)?.to_lowercase();
        let url = f!("{IAEA_API}fields=levels&nuclides={mass}{symbol}");
        trace!("GET {url}");
        Ok(minreq::get(url).send()?.as_str()?.to_string())
    }

    /// Fetch every listed nuclide in parallel
    ///
    /// This will request several thousand nuclides and can take a few minutes.
    /// Failed requests are logged and left out.
    pub fn fetch_all(&self, progress: bool) -> Vec<Nuclide> {
        let fetch = |id: &IsotopeId| match self.nuclide(id.mass, id.protons) {
            Ok(nuclide) => Some(nuclide),
            Err(e) => {
                warn!("Unable to fetch levels for {id}: {e}");
                None
            }
        };

        let nuclides: Vec<Nuclide> = if progress {
            let fetched = par_tqdm!(
                self.ground_states.par_iter().map(fetch),
                bar_format = "Fetching nuclides: {count}/{total} [{rate:.2} nuc/s]  "
            )
            .flatten()
            .collect();
            eprintln!();
            fetched
        } else {
            self.ground_states.par_iter().filter_map(fetch).collect()
        };

        nuclides
    }

    /// Generate an [Archive] of pre-fetched data for offline runs
    pub fn prefetch(&self, progress: bool) -> Archive {
        Archive::new(self.fetch_all(progress))
    }
}

impl NuclideSource for Iaea {
    type Nuclide = Nuclide;

    fn nuclide(&self, mass: u16, protons: u8) -> Result<Nuclide> {
        let csv_text = self.fetch_raw_csv(mass, protons)?;
        let levels = read_levels(&csv_text)?;

        if levels.is_empty() {
            return Err(Error::NotInDatabase { mass, protons });
        }

        Ok(Nuclide {
            protons,
            mass,
            levels,
        })
    }

    fn indexed(&self) -> Result<Vec<IsotopeId>> {
        Ok(self.ground_states.clone())
    }
}

// ! Private functions

/// Subset of the `ground_states` columns needed
#[derive(Deserialize, Debug)]
struct GroundState {
    symbol: String,
    z: u8,
    n: u16,
}

/// Subset of the `levels` columns needed
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct LevelRow {
    energy: Option<String>,
    half_life: Option<String>,
    unit_hl: Option<String>,
    decay_1: Option<String>,
    #[serde(rename = "decay_1_%")]
    decay_1_pct: Option<String>,
    decay_2: Option<String>,
    #[serde(rename = "decay_2_%")]
    decay_2_pct: Option<String>,
    decay_3: Option<String>,
    #[serde(rename = "decay_3_%")]
    decay_3_pct: Option<String>,
}

impl From<LevelRow> for Level {
    fn from(row: LevelRow) -> Self {
        let unit = row.unit_hl.as_deref().and_then(|u| match u.parse::<Unit>() {
            // a blank unit is not a unitless half-life
            Ok(Unit::Fraction) => None,
            Ok(unit) => Some(unit),
            Err(_) => {
                trace!("Unrecognised half-life unit \"{u}\"");
                None
            }
        });

        let half_life = Quantity::new(
            row.half_life.as_deref().map(number_or_nan).unwrap_or(f64::NAN),
            unit,
        );

        let energy = Quantity::new(
            row.energy.as_deref().map(number_or_nan).unwrap_or(f64::NAN),
            Some(Unit::KiloElectronVolt),
        );

        let mut decay_ratio = DecayRatio::new();
        for (label, percent) in [
            (row.decay_1, row.decay_1_pct),
            (row.decay_2, row.decay_2_pct),
            (row.decay_3, row.decay_3_pct),
        ] {
            let Some(label) = label.filter(|l| !l.trim().is_empty()) else {
                continue;
            };
            let value = percent.as_deref().map(number_or_nan).unwrap_or(f64::NAN);
            decay_ratio.insert(
                ensdf_label(label.trim()),
                Quantity::new(value, Some(Unit::Percent)),
            );
        }

        Level {
            energy,
            half_life,
            decay_ratio,
        }
    }
}

/// Translate IAEA decay labels into ENSDF notation where they differ
fn ensdf_label(label: &str) -> String {
    match label {
        "EC+B+" => "EC+%B+".to_string(),
        other => other.to_string(),
    }
}

fn csv_reader(csv_text: &str) -> Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes())
}

fn read_levels(csv_text: &str) -> Result<Vec<Level>> {
    let mut levels = Vec::new();
    for row in csv_reader(csv_text).deserialize::<LevelRow>() {
        levels.push(row?.into());
    }
    Ok(levels)
}

fn read_ground_states(csv_text: &str) -> Result<(ElementIndex, Vec<IsotopeId>)> {
    // Need the filter because the chart has entries for neutons as N1, N4, and
    // N6. These are easily confused for nitrogen isotopes
    let states = csv_reader(csv_text)
        .deserialize::<GroundState>()
        .filter_map(|record| match record {
            Ok(r) if r.z > 0 => Some(r),
            Ok(_) => None,
            Err(e) => {
                debug!("Skipping unreadable ground state row: {e}");
                None
            }
        })
        .collect::<Vec<GroundState>>();

    let index = ElementIndex::from_symbols(states.iter().map(|s| (s.z, s.symbol.as_str())));
    let ids = states
        .iter()
        .map(|s| IsotopeId::new(s.z, s.z as u16 + s.n))
        .collect();

    Ok((index, ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: &str = "\
z,n,symbol,energy,unc_e,jp,half_life,operator_hl,unc_hl,unit_hl,half_life_sec,decay_1,decay_1_%,unc_1,decay_2,decay_2_%,unc_2,decay_3,decay_3_%,unc_3
27,33,Co,0,,5+,5.2714,,5,y,166344192,B-,100,,,,,,,
27,33,Co,58.59,0.01,2+,10.467,,6,m,628.02,IT,99.75,3,B-,0.25,3,,,
";

    #[test]
    fn levels_from_csv() {
        let levels = read_levels(LEVELS).unwrap();
        assert_eq!(levels.len(), 2);

        let ground = &levels[0];
        assert_eq!(ground.half_life, Quantity::new(5.2714, Some(Unit::Year)));
        assert_eq!(ground.decay_ratio.len(), 1);
        assert_eq!(ground.decay_ratio["B-"].value, 100.0);
        assert_eq!(ground.decay_ratio["B-"].unit, Some(Unit::Percent));

        let isomer = &levels[1];
        assert_eq!(isomer.half_life.unit, Some(Unit::Minute));
        assert_eq!(isomer.decay_ratio.len(), 2);
        assert_eq!(isomer.decay_ratio["IT"].value, 99.75);
    }

    #[test]
    fn stable_and_blank_fields() {
        let csv = "\
z,n,symbol,energy,half_life,unit_hl,decay_1,decay_1_%,decay_2,decay_2_%,decay_3,decay_3_%
26,30,Fe,0,STABLE,,,,,,,
4,4,Be,0,5.57,eV,A,100,,,,
6,5,C,0,20.364,m,EC+B+,100,,,,
";
        let levels = read_levels(csv).unwrap();

        assert!(levels[0].half_life.value.is_nan());
        assert_eq!(levels[0].half_life.unit, None);
        assert!(levels[0].decay_ratio.is_empty());

        assert_eq!(levels[1].half_life.unit, Some(Unit::ElectronVolt));

        assert!(levels[2].decay_ratio.contains_key("EC+%B+"));
        assert!(!levels[2].decay_ratio.contains_key("EC+B+"));
    }

    #[test]
    fn ground_states_skip_neutrons() {
        let csv = "\
z,n,symbol,radius
0,1,n,
1,0,H,0.8783
1,1,H,2.1421
92,146,U,5.8571
";
        let (index, ids) = read_ground_states(csv).unwrap();
        assert_eq!(
            ids,
            vec![
                IsotopeId::new(1, 1),
                IsotopeId::new(1, 2),
                IsotopeId::new(92, 238)
            ]
        );
        assert_eq!(index.symbol(92).unwrap(), "U");
        assert!(index.symbol(0).is_err());
    }
}
