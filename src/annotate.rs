use log::{debug, info};

use crate::catalog::build_catalog;
use crate::classifier::{classify_all, Assignment};
use crate::config::Config;
use crate::error::Result;
use crate::profile::Schema;
use crate::table::Table;

const BATCH_SIZE: usize = 4096;

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub position_columns: usize,
    pub references: usize,
    pub samples: usize,
    pub no_change: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub ambiguous_profiles: usize,
    pub duplicate_ids: usize,
}

/// 读入整张表后完成：位点列解析 → 参考目录 → 样本分型 → 回写分型列
///
/// 返回新表（行顺序、其他列保持不变）以及统计信息。
/// 配置错误或缺少 ID 列时直接返回错误，不产生任何输出。
pub fn annotate(table: &Table, config: &Config, threads: usize) -> Result<(Table, Summary)> {
    let id_idx = table.require_column(&config.id_column)?;
    let schema = Schema::resolve(table, &config.position_pattern()?, &config.position_prefix)?;
    let reference = config.reference_pattern()?;
    info!("Detected {} position columns: {}", schema.len(), schema.names().join(", "));

    debug!("Reference patterns:");
    let catalog = build_catalog(table, &schema, id_idx, &reference);

    let id_of = |row: &[String]| row.get(id_idx).cloned().unwrap_or_default();
    let sample_rows: Vec<usize> = table
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !reference.is_match(&id_of(row.as_slice())))
        .map(|(i, _)| i)
        .collect();
    let profiles: Vec<_> = sample_rows.iter().map(|&i| schema.profile(&table.rows[i])).collect();
    let assignments = classify_all(&profiles, &catalog, threads, BATCH_SIZE);

    let mut summary = Summary {
        position_columns: schema.len(),
        references: catalog.len(),
        samples: sample_rows.len(),
        ambiguous_profiles: catalog.ambiguities().len(),
        duplicate_ids: catalog.duplicate_ids(),
        ..Summary::default()
    };

    debug!("Matching samples to reference patterns:");
    for ((&row, profile), assignment) in sample_rows.iter().zip(&profiles).zip(&assignments) {
        let sample_id = id_of(table.rows[row].as_slice());
        match assignment {
            Assignment::NoChange => {
                summary.no_change += 1;
                debug!("Sample {}: no AA changes, assigned {}", sample_id, config.no_change_label);
            }
            Assignment::Matched(ref_id) => {
                summary.matched += 1;
                debug!("Sample {}: [{}] matched {}", sample_id, schema.render(profile), ref_id);
            }
            Assignment::Unmatched => {
                summary.unmatched += 1;
                debug!("Sample {}: [{}] no exact match, left empty", sample_id, schema.render(profile));
            }
        }
    }

    let mut out = table.clone();
    let target = match out.column_index(&config.assignment_column) {
        Some(idx) => idx,
        None => {
            let idx = id_idx + 1;
            out.headers.insert(idx, config.assignment_column.clone());
            for row in out.rows.iter_mut() {
                // 短行先补齐到 ID 列之后，保证插入位置正确
                if row.len() < idx {
                    row.resize(idx, String::new());
                }
                row.insert(idx, String::new());
            }
            idx
        }
    };

    for (&row, assignment) in sample_rows.iter().zip(&assignments) {
        let cells = &mut out.rows[row];
        if cells.len() <= target {
            cells.resize(target + 1, String::new());
        }
        cells[target] = assignment.label(&config.no_change_label).to_string();
    }

    Ok((out, summary))
}
