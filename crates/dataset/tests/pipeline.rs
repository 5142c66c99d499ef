//! Integration tests for merging and assembling the dataset

use std::collections::BTreeMap;

use isochart_dataset::{assemble, merge, AbundanceTable, Dataset, ElementTable, Error};
use isochart_decay::{run_batch, Criteria, DecayRecord};
use isochart_ensdf::{Archive, ElementIndex, NuclideSource};
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn elements() -> ElementTable {
    ElementTable::read_json("./data/elements.json").unwrap()
}

#[fixture]
fn abundances() -> AbundanceTable {
    AbundanceTable::read_json("./data/abundance.json").unwrap()
}

#[fixture]
fn records(elements: ElementTable) -> BTreeMap<String, DecayRecord> {
    let archive = Archive::read("./data/nuclides.json").unwrap();
    let ids = archive.indexed().unwrap();
    run_batch(&archive, &ids, &elements.index(), &Criteria::default(), false).records
}

#[fixture]
fn dataset(
    elements: ElementTable,
    abundances: AbundanceTable,
    records: BTreeMap<String, DecayRecord>,
) -> Dataset {
    let isotopes = merge(records, &abundances, &elements.index()).unwrap();
    assemble(&elements, isotopes)
}

fn record(symbol: &str, protons: u8, mass: u16) -> DecayRecord {
    DecayRecord {
        symbol: symbol.to_string(),
        protons,
        mass,
        half_life: 1.0,
        alpha: 0.25,
        beta: 0.75,
    }
}

#[rstest]
fn element_slots(elements: ElementTable) {
    assert_eq!(elements.elements().len(), 93);
    assert!(elements.get(0).is_none());
    assert!(elements.get(3).is_none());

    let uranium = elements.get(92).unwrap();
    assert_eq!(uranium.symbol, "U");
    assert_eq!(uranium.category.as_deref(), Some("actinoid"));
    assert_eq!(uranium.color.as_deref(), Some("008FFF"));
    assert_eq!(uranium.mass, Some(238.02891));

    assert_eq!(elements.get(43).unwrap().mass, Some(98.0));
}

#[rstest]
fn decay_records_from_archive(records: BTreeMap<String, DecayRecord>) {
    let symbols: Vec<&str> = records.keys().map(|s| s.as_str()).collect();
    assert_eq!(symbols, vec!["Co-60", "H-3", "O-14", "Tc-98", "U-238"]);

    // spontaneous fission is not tracked, so U-238 is pure alpha
    assert_eq!(records["U-238"].alpha, 1.0);
    assert_eq!(records["O-14"].beta, 1.0);
}

#[rstest]
fn merged_isotopes(dataset: Dataset) {
    let isotopes = &dataset.isotopes;
    assert_eq!(isotopes.len(), 15);

    // decay record, absent from the abundance table
    let co60 = &isotopes["Co-60"];
    assert_eq!(co60.abundance, 0.0);
    assert_eq!(co60.beta, Some(1.0));

    // decay record with a null abundance
    assert_eq!(isotopes["Tc-98"].abundance, 0.0);
    assert_eq!(isotopes["H-3"].abundance, 0.0);

    // decay record with an abundance
    let u238 = &isotopes["U-238"];
    assert!((u238.abundance - 0.992742).abs() < 1e-12);
    assert_eq!(u238.alpha, Some(1.0));

    // stub from the abundance table alone
    let o16 = &isotopes["O-16"];
    assert_eq!((o16.protons, o16.mass), (8, 16));
    assert_eq!(o16.half_life, None);
    assert_eq!(o16.alpha, None);
    assert_eq!(o16.beta, None);
    assert!((o16.abundance - 0.99757).abs() < 1e-12);

    assert_eq!(isotopes["Co-59"].abundance, 1.0);
}

#[rstest]
fn output_shape(dataset: Dataset) {
    let json: Value = serde_json::from_str(&dataset.to_json_string().unwrap()).unwrap();
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);

    let elements = json["elements"].as_array().unwrap();
    assert!(elements[0].is_null());
    assert_eq!(elements[1]["symbol"], "H");
    assert_eq!(elements[1]["type"], "nonmetal");
    assert_eq!(elements[1]["cpkHexColor"], "FFFFFF");
    assert_eq!(elements[1]["mass"], 1.00794);
    assert_eq!(elements[1].as_object().unwrap().len(), 5);

    let h1 = json["isotopes"]["H-1"].as_object().unwrap();
    assert!(h1["half_life"].is_null());
    assert!(!h1.contains_key("alpha"));
    assert!(!h1.contains_key("beta"));
    assert_eq!(h1["sym"], "H-1");

    let h3 = json["isotopes"]["H-3"].as_object().unwrap();
    assert!(h3["half_life"].as_f64().unwrap() > 3.8e8);
    assert_eq!(h3["alpha"], 0.0);
    assert_eq!(h3["beta"], 1.0);
    assert_eq!(h3["abundance"], 0.0);
}

#[rstest]
fn written_file_reads_back(dataset: Dataset) {
    let path = std::env::temp_dir().join("isochart-dataset-roundtrip.json");
    dataset.write_json(&path, true).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let back: Dataset = serde_json::from_str(&text).unwrap();
    assert_eq!(back.elements, dataset.elements);
    assert!(back.isotopes.keys().eq(dataset.isotopes.keys()));

    for (a, b) in back.isotopes.values().zip(dataset.isotopes.values()) {
        assert_eq!((a.protons, a.mass), (b.protons, b.mass));
        assert_eq!(a.half_life.is_some(), b.half_life.is_some());
        assert!((a.abundance - b.abundance).abs() < 1e-12);
    }

    std::fs::remove_file(path).unwrap();
}

#[rstest]
fn abundance_overrides_default() {
    let index = ElementIndex::from_symbols([(8, "O")]);
    let mut records = BTreeMap::new();
    records.insert("O-15".to_string(), record("O-15", 8, 15));
    records.insert("O-16".to_string(), record("O-16", 8, 16));

    let table = AbundanceTable::from_json_str(r#"{ "o16": 50.0 }"#).unwrap();
    let merged = merge(records, &table, &index).unwrap();

    assert_eq!(merged.len(), 2);
    assert_eq!(merged["O-15"].abundance, 0.0);
    assert_eq!(merged["O-16"].abundance, 0.5);
    assert_eq!(merged["O-16"].alpha, Some(0.25));
}

#[rstest]
#[case(r#"{ "Xx-12": null }"#, true)]
#[case(r#"{ "Xx-12": 1.0 }"#, false)]
#[case(r#"{ "not an isotope": 1.0 }"#, false)]
#[case(r#"{ "not an isotope": null }"#, false)]
#[case(r#"{ "O-16": 99.76, "o16": null }"#, false)]
#[case(r#"{ "O-16": 99.76, "O_16": 99.76 }"#, false)]
fn abundance_table_consistency(#[case] json: &str, #[case] ok: bool) {
    let index = ElementIndex::from_symbols([(8, "O")]);
    let table = AbundanceTable::from_json_str(json).unwrap();

    let merged = merge(BTreeMap::new(), &table, &index);
    assert_eq!(merged.is_ok(), ok);

    if let Ok(merged) = merged {
        assert!(merged.is_empty());
    }
}

#[rstest]
fn unknown_element_is_reported() {
    let index = ElementIndex::from_symbols([(8, "O")]);
    let table = AbundanceTable::from_json_str(r#"{ "Xx-12": 1.0 }"#).unwrap();

    assert!(matches!(
        merge(BTreeMap::new(), &table, &index),
        Err(Error::UnknownElement { symbol, .. }) if symbol == "Xx-12"
    ));
}

#[rstest]
fn duplicate_symbols_are_reported() {
    let index = ElementIndex::from_symbols([(8, "O")]);
    let mut records = BTreeMap::new();
    records.insert("O-16".to_string(), record("O-16", 8, 16));

    // the null entry would otherwise reset the abundance to 0
    let table = AbundanceTable::from_json_str(r#"{ "O-16": 99.76, "o16": null }"#).unwrap();

    assert!(matches!(
        merge(records, &table, &index),
        Err(Error::DuplicateSymbol { symbol, first, second })
            if symbol == "O-16" && first == "O-16" && second == "o16"
    ));
}
