use ssm_report::config::Config;

#[test]
fn parse_example_config() {
    let raw = include_str!("../ssm-report.example.toml");
    let cfg: Config = toml::from_str(raw).expect("parse TOML");
    assert_eq!(cfg.output.sheet_name, "SSM_Report");
    assert_eq!(cfg.output.table_name, "ReportData");
    assert!(cfg.output.banded_rows);
}

#[test]
fn empty_config_uses_defaults() {
    let cfg: Config = toml::from_str("").expect("parse empty TOML");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.output.column_padding, 2);
    assert_eq!(cfg.output.max_column_width, 0);
}
