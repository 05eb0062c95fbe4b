use crossbeam_channel::bounded;
use std::thread;

use crate::catalog::ReferenceCatalog;
use crate::profile::Profile;

/// Outcome of classifying one sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// Every position is the sentinel.
    NoChange,
    /// First reference in catalog order with an identical profile.
    Matched(String),
    Unmatched,
}

impl Assignment {
    /// Cell value written to the assignment column.
    pub fn label<'a>(&'a self, no_change_label: &'a str) -> &'a str {
        match self {
            Assignment::NoChange => no_change_label,
            Assignment::Matched(id) => id,
            Assignment::Unmatched => "",
        }
    }
}

/// 对单个样本分型
///
/// 判定顺序固定：
/// 1. 所有位点都是哨兵值 → `NoChange`（优先于任何参考，即使某个参考也全是哨兵值）
/// 2. 按参考目录插入顺序扫描，第一个逐位完全相同的参考胜出
/// 3. 都不相同 → `Unmatched`
pub fn classify(profile: &Profile, catalog: &ReferenceCatalog) -> Assignment {
    if profile.is_unchanged() {
        return Assignment::NoChange;
    }
    catalog
        .iter()
        .find(|entry| entry.profile == *profile)
        .map_or(Assignment::Unmatched, |entry| Assignment::Matched(entry.id.clone()))
}

/// Classify every profile, keeping input order in the result.
///
/// With `threads > 1` batches are spread over worker threads; each result only
/// depends on its own profile, so the output equals the sequential one.
pub fn classify_all(profiles: &[Profile], catalog: &ReferenceCatalog, threads: usize, batch_size: usize) -> Vec<Assignment> {
    if threads <= 1 || profiles.len() <= batch_size {
        return profiles.iter().map(|p| classify(p, catalog)).collect();
    }

    let batch_size = batch_size.max(1);
    let (batch_tx, batch_rx) = bounded::<(usize, &[Profile])>(threads * 2);
    let (result_tx, result_rx) = bounded::<(usize, Vec<Assignment>)>(threads * 2);
    let mut results: Vec<Option<Assignment>> = vec![None; profiles.len()];

    thread::scope(|s| {
        for _ in 0..threads {
            let rx = batch_rx.clone();
            let tx = result_tx.clone();
            s.spawn(move || {
                while let Ok((start, batch)) = rx.recv() {
                    let assigned = batch.iter().map(|p| classify(p, catalog)).collect();
                    if tx.send((start, assigned)).is_err() {
                        break;
                    }
                }
            });
        }
        // 只保留 worker 持有的发送端，全部 worker 退出后结果通道才会关闭
        drop(batch_rx);
        drop(result_tx);

        s.spawn(move || {
            for (i, batch) in profiles.chunks(batch_size).enumerate() {
                if batch_tx.send((i * batch_size, batch)).is_err() {
                    break;
                }
            }
        });

        while let Ok((start, assigned)) = result_rx.recv() {
            for (offset, assignment) in assigned.into_iter().enumerate() {
                results[start + offset] = Some(assignment);
            }
        }
    });

    results
        .into_iter()
        .map(|r| r.expect("every batch is classified"))
        .collect()
}
