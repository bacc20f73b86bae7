use std::io::Write;

use super::model::{
    DEFAULT_MAX_CELLS, DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS, DEFAULT_MAX_VALUE_BYTES,
    load_settings_from,
};

#[test]
fn missing_file_falls_back_to_defaults() {
    let settings = load_settings_from("definitely/not/here/teiid_batch").unwrap();

    assert_eq!(settings.codec.max_rows, DEFAULT_MAX_ROWS);
    assert_eq!(settings.codec.max_columns, DEFAULT_MAX_COLUMNS);
    assert_eq!(settings.codec.max_cells, DEFAULT_MAX_CELLS);
    assert_eq!(settings.codec.max_value_bytes, DEFAULT_MAX_VALUE_BYTES);
    assert_eq!(settings.logging.stdout_level, "info");
    assert!(settings.logging.log_dir.is_none());
}

#[test]
fn file_values_override_defaults() {
    let dir = std::env::temp_dir().join(format!("teiid_batch_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("codec.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[codec]\nmax_rows = 10\n\n[logging]\nstdout_level = \"warn\"").unwrap();
    drop(file);

    let settings = load_settings_from(path.to_str().unwrap()).unwrap();

    assert_eq!(settings.codec.max_rows, 10);
    assert_eq!(settings.codec.max_columns, DEFAULT_MAX_COLUMNS);
    assert_eq!(settings.logging.stdout_level, "warn");

    std::fs::remove_dir_all(&dir).unwrap();
}
