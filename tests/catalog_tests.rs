use ply_allele_corrector::{build_catalog, classify, Assignment, Call, Config, Profile, ReferenceCatalog, Schema, Table};

fn profile(calls: &[&str]) -> Profile {
    Profile::new(calls.iter().map(|c| Call::from_cell(c)).collect())
}

#[test]
fn test_insertion_order_is_kept() {
    let mut catalog = ReferenceCatalog::new();
    catalog.insert("ply-9", profile(&["A"]));
    catalog.insert("ply-2", profile(&["B"]));
    catalog.insert("ply-5", profile(&["C"]));
    let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ply-9", "ply-2", "ply-5"]);
}

#[test]
fn test_duplicate_id_overwrites_in_place() {
    let mut catalog = ReferenceCatalog::new();
    assert_eq!(catalog.insert("ply-2", profile(&["A"])), None);
    catalog.insert("ply-3", profile(&["B"]));
    assert_eq!(catalog.insert("ply-2", profile(&["C"])), Some(profile(&["A"])));

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.duplicate_ids(), 1);
    assert_eq!(catalog.get("ply-2"), Some(&profile(&["C"])));
    // 覆盖后仍在原来的位置
    assert_eq!(catalog.iter().next().map(|e| e.id.as_str()), Some("ply-2"));
}

#[test]
fn test_ambiguities() {
    let mut catalog = ReferenceCatalog::new();
    catalog.insert("ply-2", profile(&["A", "C"]));
    catalog.insert("ply-3", profile(&["D", "."]));
    catalog.insert("ply-4", profile(&["A", "C"]));
    catalog.insert("ply-5", profile(&["A", "C"]));

    let groups = catalog.ambiguities();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids, vec!["ply-2", "ply-4", "ply-5"]);
    assert_eq!(groups[0].profile, profile(&["A", "C"]));
    assert_eq!(groups[0].assignable(), Some("ply-2"));
}

#[test]
fn test_all_missing_shared_profile_is_never_assignable() {
    let mut catalog = ReferenceCatalog::new();
    catalog.insert("ply-2", profile(&["."]));
    catalog.insert("ply-3", profile(&[""]));

    let groups = catalog.ambiguities();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].ids, vec!["ply-2", "ply-3"]);
    assert_eq!(groups[0].assignable(), None);
    // 样本同样全缺失时得到的是 no change
    assert_eq!(classify(&profile(&["."]), &catalog), Assignment::NoChange);
}

#[test]
fn test_no_ambiguities_for_distinct_profiles() {
    let mut catalog = ReferenceCatalog::new();
    catalog.insert("ply-2", profile(&["A", "C"]));
    catalog.insert("ply-3", profile(&["A", "."]));
    assert!(catalog.ambiguities().is_empty());
}

#[test]
fn test_build_catalog_uses_reference_rows_only() {
    let tsv = "sample_id\tpos_1\tpos_2\n\
               ply-2\tA\tC\n\
               680\tA\tC\n\
               ply-3\t\tE\n\
               ply-x\tQ\tQ\n\
               sample_ply-4\tR\tR\n";
    let table = Table::from_reader(tsv.as_bytes()).unwrap();
    let config = Config::default();
    let schema = Schema::resolve(&table, &config.position_pattern().unwrap(), &config.position_prefix).unwrap();
    let catalog = build_catalog(&table, &schema, 0, &config.reference_pattern().unwrap());

    let ids: Vec<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["ply-2", "ply-3"]);
    assert_eq!(catalog.get("ply-3"), Some(&profile(&[".", "E"])));
}
