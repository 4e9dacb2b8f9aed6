pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
}

/// Reads the grid dimensions from the `.env` file in the workspace root,
/// embedded at compile time. The contents should be two lines of the form:
///
///   COLS=10
///   ROWS=10
///
/// plus optional comments and whitespace. Missing keys fall back to a
/// 10x10 grid.
pub fn grid_config() -> GridConfig {
    let embedded = include_str!("../../.env");
    let mut cols = "10";
    let mut rows = "10";

    for line in embedded.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                match key.trim() {
                    "COLS" => cols = value,
                    "ROWS" => rows = value,
                    _ => {}
                }
            }
        }
    }

    let cols: usize = cols.parse().expect("invalid COLS in embedded .env");
    let rows: usize = rows.parse().expect("invalid ROWS in embedded .env");
    assert!(
        cols >= 1 && rows >= 1,
        "COLS and ROWS in embedded .env must be at least 1"
    );

    GridConfig { cols, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_yields_a_usable_grid() {
        let config = grid_config();
        assert!(config.cols >= 1);
        assert!(config.rows >= 1);
    }
}
