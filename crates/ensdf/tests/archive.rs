//! Integration tests for pre-fetched archives

use isochart_ensdf::{Archive, EnergyLevel, Isotope, IsotopeId, NuclideSource, Unit};
use rstest::{fixture, rstest};

#[fixture]
fn archive() -> Archive {
    Archive::read_json("./data/nuclides.json").unwrap()
}

#[rstest]
fn reads_every_nuclide(archive: Archive) {
    assert_eq!(archive.len(), 7);

    let ids = archive.indexed().unwrap();
    assert_eq!(ids.first(), Some(&IsotopeId::new(1, 3)));
    assert_eq!(ids.last(), Some(&IsotopeId::new(118, 294)));
}

#[rstest]
#[case(3, 1, 1)]
#[case(60, 27, 2)]
#[case(238, 92, 1)]
fn level_counts(archive: Archive, #[case] mass: u16, #[case] protons: u8, #[case] n: usize) {
    let nuclide = archive.nuclide(mass, protons).unwrap();
    assert_eq!(nuclide.levels().len(), n);
    assert_eq!(nuclide.id(), IsotopeId::new(protons, mass));
}

#[rstest]
fn levels_keep_provider_order(archive: Archive) {
    let co60 = archive.nuclide(60, 27).unwrap();
    let levels = co60.levels();

    assert_eq!(levels[0].energy.value, 0.0);
    assert_eq!(levels[1].energy.value, 58.59);
    assert_eq!(levels[1].half_life().unit, Some(Unit::Minute));
    assert_eq!(levels[1].decay_ratio().len(), 2);
}

#[rstest]
fn null_half_life_is_nan(archive: Archive) {
    let he4 = archive.nuclide(4, 2).unwrap();
    let half_life = he4.levels()[0].half_life();

    assert!(half_life.value.is_nan());
    assert!(!half_life.is_defined());
}

#[rstest]
fn binary_round_trip(archive: Archive) {
    let path = std::env::temp_dir().join("isochart-ensdf-archive.bin");
    archive.write_binary(&path).unwrap();

    let back = Archive::read(&path).unwrap();
    assert_eq!(back.len(), archive.len());

    let he4 = back.nuclide(4, 2).unwrap();
    assert!(he4.levels()[0].half_life.value.is_nan());

    let u238 = back.nuclide(238, 92).unwrap();
    assert_eq!(u238, archive.nuclide(238, 92).unwrap());

    std::fs::remove_file(path).unwrap();
}

#[rstest]
fn json_round_trip(archive: Archive) {
    let path = std::env::temp_dir().join("isochart-ensdf-archive.json");
    archive.write_json(&path).unwrap();

    let back = Archive::read(&path).unwrap();
    assert_eq!(back.indexed().unwrap(), archive.indexed().unwrap());

    std::fs::remove_file(path).unwrap();
}
