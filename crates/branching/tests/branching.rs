//! Integration tests for reading branching coefficient files

use std::io::Cursor;

use rstest::{fixture, rstest};
use stools_branching::{
    read_branching, read_branching_with, to_json_string, Branching, BranchingReader, Error,
    StateValue,
};
use stools_settings::Settings;

const REF_FILE: &str = "./data/ref_branch.coe";
const REF_UNCS_FILE: &str = "./data/ref_branch_uncs.coe";

/// Two branches, one universe each, with a single FLUX variable
const MINIMAL: &str = "\
1 2 1 1 1
1 nom
2 BOR 750
0.0 0 0.0
0 1
FLUX 2 1.0 2.0
2 2 1 1 1
1 B1000
2 BOR 1000
0.0 0 0.0
0 1
FLUX 2 1.0 2.0
";

fn parse_str(text: &str, settings: Settings) -> stools_branching::Result<Branching> {
    BranchingReader::with_settings(settings).parse_reader(Cursor::new(text))
}

#[fixture]
fn settings() -> Settings {
    Settings::new()
        .with_int_variables(["BOR"])
        .with_float_variables(["TFU"])
}

#[fixture]
fn reference(settings: Settings) -> Branching {
    read_branching_with(REF_FILE, &settings).unwrap()
}

#[test]
fn minimal_file() {
    let branching = parse_str(MINIMAL, Settings::new()).unwrap();
    assert_eq!(branching.len(), 2);

    for (_, branch) in branching.branches() {
        assert_eq!(branch.universes().count(), 1);
        let universe = branch.get_universe(0, 0).unwrap();
        assert_eq!(universe.get_values("FLUX"), Some([1.0, 2.0].as_slice()));
    }
}

#[rstest]
fn distinct_branches(reference: Branching) {
    // four blocks, but "nom nom" appears twice
    assert_eq!(reference.len(), 3);

    let order: Vec<String> = reference.branches().map(|(n, _)| n.to_string()).collect();
    assert_eq!(order, ["nom nom", "B1000 nom", "nom FT1200"]);
}

#[rstest]
#[case(&["nom", "nom"], 750, 900.0)]
#[case(&["B1000", "nom"], 1000, 900.0)]
#[case(&["nom", "FT1200"], 750, 1200.0)]
fn state_data(reference: Branching, #[case] names: &[&str], #[case] bor: i64, #[case] tfu: f64) {
    let branch = reference.get_branch(names.iter().copied()).unwrap();
    assert_eq!(branch.get_state("BOR"), Some(&StateValue::Int(bor)));
    assert_eq!(branch.get_state("TFU"), Some(&StateValue::Float(tfu)));
    assert_eq!(
        branch.get_state("VERSION"),
        Some(&StateValue::Str("2.1.29".to_string()))
    );
}

#[rstest]
fn repeated_branch_keeps_first_state(reference: Branching) {
    let branch = reference.get_branch(["nom", "nom"]).unwrap();
    assert_eq!(branch.coef_index(), 1);
    assert_eq!(branch.state_data().len(), 3);
    assert_eq!(branch.get_state("BOR"), Some(&StateValue::Int(750)));

    // universes from both burnup steps are collected on the same branch
    assert_eq!(branch.universes().count(), 4);
    let later = branch.get_universe(10, 1).unwrap();
    assert_eq!(later.burnup, 1.0);
    assert_eq!(later.get_values("INF_FLX"), Some([4.0, 14.5].as_slice()));
    assert_eq!(branch.get_universe_at_burnup(10, 1.0), Some(later));
}

#[rstest]
fn universe_values(reference: Branching) {
    let branch = reference.get_branch(["B1000", "nom"]).unwrap();
    assert_eq!(branch.universes().count(), 2);

    let universe = branch.get_universe(10, 0).unwrap();
    assert_eq!(universe.len(), 3);
    assert_eq!(universe.get_values("INF_FLX"), Some([2.0, 12.5].as_slice()));
    assert_eq!(universe.get_values("B1_FLX"), Some([4.0, 14.5].as_slice()));
    assert_eq!(universe.get_values("INF_KINF"), Some([1.2].as_slice()));
    assert!(universe.get_uncertainties("INF_FLX").is_none());
}

#[rstest]
#[case(&["FLX"], true, true, &["INF_FLX", "B1_FLX"])]
#[case(&["FLX"], false, true, &["INF_FLX"])]
#[case(&["FLX"], true, false, &["B1_FLX"])]
#[case(&["FLX"], false, false, &[])]
#[case(&["KINF", "INF_FLX"], false, true, &["INF_FLX", "INF_KINF"])]
#[case(&[], false, false, &["INF_FLX", "B1_FLX", "INF_KINF"])]
fn retained_variables(
    #[case] variables: &[&str],
    #[case] b1: bool,
    #[case] inf: bool,
    #[case] expected: &[&str],
) {
    let mut settings = Settings::new().with_variables(variables.iter().copied());
    settings.set_include_b1(b1);
    settings.set_include_inf(inf);

    let branching = read_branching_with(REF_FILE, &settings).unwrap();
    for (_, branch) in branching.branches() {
        for universe in branch.universes() {
            let names: Vec<&String> = universe.variables().map(|(name, _)| name).collect();
            assert_eq!(names, expected);
        }
    }
}

#[test]
fn uncertainties() {
    let mut settings = Settings::new();
    settings.set_uncertainties(true);

    let branching = read_branching_with(REF_UNCS_FILE, &settings).unwrap();
    let universe = branching
        .get_branch(["nom"])
        .and_then(|b| b.get_universe(3101, 0))
        .unwrap();

    for (_, data) in universe.variables() {
        assert_eq!(data.values().len(), data.uncertainties().unwrap().len());
    }
    assert_eq!(universe.get_values("INF_TOT"), Some([0.51, 1.3].as_slice()));
    assert_eq!(
        universe.get_uncertainties("INF_TOT"),
        Some([0.0012, 0.0025].as_slice())
    );
}

#[test]
fn odd_uncertainties() {
    let mut settings = Settings::new();
    settings.set_uncertainties(true);

    // every value line has an even count apart from the odd uncertainty
    let text = MINIMAL.replace("FLUX 2 1.0 2.0\n2 2", "FLUX 2 1.0 2.0 3.0\n2 2");
    assert!(matches!(
        parse_str(&text, settings),
        Err(Error::MalformedLine { line: 6, .. })
    ));
}

#[test]
fn default_settings_keep_everything() {
    let branching = read_branching(REF_FILE).unwrap();
    let branch = branching.get_branch(["nom", "FT1200"]).unwrap();

    // no typing configured, so state values stay as text
    assert_eq!(
        branch.get_state("TFU"),
        Some(&StateValue::Str("1200".to_string()))
    );
    assert_eq!(branch.get_universe(0, 0).unwrap().len(), 3);
}

#[test]
fn truncated_file() {
    let lines: Vec<&str> = MINIMAL.lines().collect();
    let truncated = lines[..lines.len() - 1].join("\n");

    assert!(matches!(
        parse_str(&truncated, Settings::new()),
        Err(Error::UnexpectedEndOfFile { line: 11 })
    ));
}

#[test]
fn missing_trailing_newline() {
    let branching = parse_str(MINIMAL.trim_end(), Settings::new()).unwrap();
    assert_eq!(branching.len(), 2);
}

#[test]
fn empty_file() {
    let branching = parse_str("", Settings::new()).unwrap();
    assert!(branching.is_empty());
}

#[test]
fn partial_data_after_failure() {
    let text = format!("{MINIMAL}3 3 1 1 1\n1 nom\n");
    let mut reader = BranchingReader::new();

    assert!(matches!(
        reader.parse_reader(Cursor::new(text)),
        Err(Error::UnexpectedEndOfFile { line: 14 })
    ));
    assert_eq!(reader.partial().len(), 2);
}

#[test]
fn reader_is_reusable() {
    let mut reader = BranchingReader::new();
    let first = reader.parse_reader(Cursor::new(MINIMAL)).unwrap();
    let second = reader.parse_reader(Cursor::new(MINIMAL)).unwrap();
    assert_eq!(first, second);
    assert!(reader.partial().is_empty());
}

#[test]
fn missing_file() {
    assert!(matches!(
        read_branching("./data/does_not_exist.coe"),
        Err(Error::IOError(_))
    ));
}

#[test]
fn json_export() {
    let branching = parse_str(MINIMAL, Settings::new().with_int_variables(["BOR"])).unwrap();
    let text = to_json_string(&branching).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();

    let branches = json["branches"].as_array().unwrap();
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[1]["names"], serde_json::json!(["B1000"]));
    assert_eq!(branches[1]["state_data"]["BOR"], 1000);

    let universe = &branches[0]["universes"][0];
    assert_eq!(universe["id"], 0);
    assert_eq!(
        universe["variables"]["FLUX"]["values"],
        serde_json::json!([1.0, 2.0])
    );
    assert!(universe["variables"]["FLUX"].get("uncertainties").is_none());
}
