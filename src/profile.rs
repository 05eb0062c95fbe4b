use std::fmt;

use regex::Regex;

use crate::error::{Error, Result};
use crate::table::Table;

/// Symbol written in place of a missing call.
pub const SENTINEL: &str = ".";

/// Tokens the upstream tabular tooling writes for a missing value.
const MISSING_TOKENS: &[&str] = &[
    "", "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "<NA>", "#N/A",
    "#NA", "#N/A N/A", "1.#IND", "-1.#IND", "1.#QNAN", "-1.#QNAN",
];

/// 单个位点的氨基酸
///
/// 缺失值统一归为 `Missing`；字面量 `.` 也视为缺失，
/// 因为它与哨兵符号相同。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    Missing,
    Residue(String),
}

impl Call {
    /// Cells are compared verbatim; surrounding whitespace is part of the call.
    pub fn from_cell(cell: &str) -> Self {
        if cell == SENTINEL || MISSING_TOKENS.contains(&cell) {
            Call::Missing
        } else {
            Call::Residue(cell.to_string())
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Call::Missing)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Call::Missing => SENTINEL,
            Call::Residue(aa) => aa,
        }
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered calls, one per position column in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile(Vec<Call>);

impl Profile {
    pub fn new(calls: Vec<Call>) -> Self {
        Profile(calls)
    }

    pub fn calls(&self) -> &[Call] {
        &self.0
    }

    /// True when no position carries a substitution.
    pub fn is_unchanged(&self) -> bool {
        self.0.iter().all(Call::is_missing)
    }
}

/// Position columns resolved once from the header.
#[derive(Debug, Clone)]
pub struct Schema {
    names: Vec<String>,
    indices: Vec<usize>,
}

impl Schema {
    /// 按表头顺序收集匹配 `pattern` 的位点列；一个都没有时报配置错误
    pub fn resolve(table: &Table, pattern: &Regex, prefix: &str) -> Result<Self> {
        let (indices, names): (Vec<usize>, Vec<String>) = table
            .headers
            .iter()
            .enumerate()
            .filter(|(_, h)| pattern.is_match(h))
            .map(|(i, h)| (i, h.clone()))
            .unzip();

        if indices.is_empty() {
            return Err(Error::NoPositionColumns {
                prefix: prefix.to_string(),
            });
        }
        Ok(Schema { names, indices })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Cells past the end of a hand-built short row read as missing.
    pub fn profile(&self, row: &[String]) -> Profile {
        Profile(
            self.indices
                .iter()
                .map(|&i| row.get(i).map_or(Call::Missing, |cell| Call::from_cell(cell)))
                .collect(),
        )
    }

    /// Diagnostic rendering, e.g. `pos_1:A | pos_2:.`
    pub fn render(&self, profile: &Profile) -> String {
        self.names
            .iter()
            .zip(profile.calls())
            .map(|(name, call)| format!("{}:{}", name, call))
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
