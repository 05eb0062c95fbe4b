use regex::Regex;

use crate::error::Result;

/// 列名、标识符前缀与输出标签
///
/// 默认值对应 aa_changes.tsv 的固定格式：
/// - 样本 ID 列 `sample_id`
/// - 位点列 `pos_<n>`
/// - 参考行 ID `ply-<n>`
/// - 无氨基酸变化的样本标记为 `ply-1`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub id_column: String,
    pub assignment_column: String,
    pub position_prefix: String,
    pub reference_prefix: String,
    pub no_change_label: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            id_column: "sample_id".to_string(),
            assignment_column: "ply_allele_aa".to_string(),
            position_prefix: "pos_".to_string(),
            reference_prefix: "ply-".to_string(),
            no_change_label: "ply-1".to_string(),
        }
    }
}

impl Config {
    /// Position columns match on prefix only: `pos_12` and `pos_12_alt` both qualify.
    pub fn position_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&format!(r"^{}\d+", regex::escape(&self.position_prefix)))?)
    }

    pub fn reference_pattern(&self) -> Result<Regex> {
        Ok(Regex::new(&format!(r"^{}\d+$", regex::escape(&self.reference_prefix)))?)
    }
}
