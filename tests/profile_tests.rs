use ply_allele_corrector::{Call, Config, Error, Schema, Table, SENTINEL};

fn table(tsv: &str) -> Table {
    Table::from_reader(tsv.as_bytes()).unwrap()
}

fn schema(t: &Table) -> Result<Schema, Error> {
    let config = Config::default();
    Schema::resolve(t, &config.position_pattern()?, &config.position_prefix)
}

#[test]
fn test_missing_tokens() {
    for cell in ["", ".", "NA", "NaN", "nan", "N/A", "NULL", "None", "<NA>"] {
        assert_eq!(Call::from_cell(cell), Call::Missing, "cell {:?}", cell);
    }
    assert_eq!(Call::from_cell("A"), Call::Residue("A".to_string()));
    // 空白不会被去掉
    assert_eq!(Call::from_cell(" K "), Call::Residue(" K ".to_string()));
    assert_eq!(Call::from_cell(" "), Call::Residue(" ".to_string()));
    assert_eq!(Call::Missing.as_str(), SENTINEL);
}

#[test]
fn test_schema_keeps_header_order() {
    let t = table("pos_10\tsample_id\tgene\tpos_2\tpos_1\nA\ts1\tply\tB\tC\n");
    let s = schema(&t).unwrap();
    assert_eq!(s.names(), &["pos_10", "pos_2", "pos_1"]);
    assert_eq!(s.len(), 3);
}

#[test]
fn test_schema_pattern_is_case_sensitive_prefix() {
    let t = table("sample_id\tPOS_1\tpos_x\tpos_3_alt\tpos_4\nA\tB\tC\tD\tE\n");
    let s = schema(&t).unwrap();
    assert_eq!(s.names(), &["pos_3_alt", "pos_4"]);
}

#[test]
fn test_no_position_columns_is_error() {
    let t = table("sample_id\tposition\tPOS_1\ns1\tA\tB\n");
    assert!(matches!(schema(&t), Err(Error::NoPositionColumns { .. })));
}

#[test]
fn test_profile_normalizes_missing() {
    let t = table("sample_id\tpos_1\tpos_2\tpos_3\ns1\tA\t\tNA\n");
    let s = schema(&t).unwrap();
    let p = s.profile(&t.rows[0]);
    assert_eq!(p.calls(), &[Call::Residue("A".to_string()), Call::Missing, Call::Missing]);
    assert!(!p.is_unchanged());
    assert_eq!(s.render(&p), "pos_1:A | pos_2:. | pos_3:.");
    // 同一行重复提取结果相同
    assert_eq!(p, s.profile(&t.rows[0]));
}

#[test]
fn test_unchanged_profile() {
    let t = table("sample_id\tpos_1\tpos_2\ns1\t.\t\n");
    let s = schema(&t).unwrap();
    assert!(s.profile(&t.rows[0]).is_unchanged());
}
