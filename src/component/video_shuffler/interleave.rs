//! 多資料夾交錯排序
//!
//! 先以 round-robin 從各 bucket 尾端取出項目，再做一次向前的修補，
//! 盡量避免同一來源連續出現三次以上。

/// 同一來源允許連續出現的最大次數
pub const MAX_CONSECUTIVE: usize = 2;

/// 交錯排序結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterleaveResult<T> {
    /// 合併後的順序
    pub items: Vec<T>,
    /// 每個項目的來源 bucket 索引，與 `items` 一一對應
    pub origins: Vec<usize>,
    /// 修補時進行的交換次數
    pub repairs: usize,
}

impl<T> InterleaveResult<T> {
    /// 結果中最長的同來源連續長度
    #[must_use]
    pub fn longest_run(&self) -> usize {
        longest_run(&self.origins)
    }
}

/// 將多個 bucket 合併為一個序列
///
/// 輸出永遠是所有 bucket 內容的排列，不會新增、遺失或重複項目。
/// 「不超過兩個連續同來源」只是盡力而為：當某個 bucket 遠大於其他
/// bucket 的總和時，尾端仍會留下較長的連續段。
pub fn interleave<T>(buckets: Vec<Vec<T>>) -> InterleaveResult<T> {
    let mut tagged = round_robin_draw(buckets);
    let repairs = repair_runs(&mut tagged);
    let (origins, items): (Vec<usize>, Vec<T>) = tagged.into_iter().unzip();

    InterleaveResult {
        items,
        origins,
        repairs,
    }
}

/// 依固定順序輪流從每個非空 bucket 的尾端取出一個項目
fn round_robin_draw<T>(mut buckets: Vec<Vec<T>>) -> Vec<(usize, T)> {
    let total: usize = buckets.iter().map(Vec::len).sum();
    let mut drawn = Vec::with_capacity(total);

    while drawn.len() < total {
        for (origin, bucket) in buckets.iter_mut().enumerate() {
            if let Some(item) = bucket.pop() {
                drawn.push((origin, item));
            }
        }
    }

    drawn
}

/// 單次向前掃描，修補三個連續同來源的位置
///
/// 在位置 `i` 發現 `i..=i+2` 同來源時，從 `i+3` 往後找第一個來源不同的項目
/// 與 `i+2` 交換；找不到就保留原狀。已掃過的位置不會重新檢查。
/// 回傳交換次數。
pub fn repair_runs<T>(sequence: &mut [(usize, T)]) -> usize {
    let mut repairs = 0;

    for i in 0..sequence.len().saturating_sub(MAX_CONSECUTIVE) {
        let origin = sequence[i].0;
        if sequence[i + 1].0 != origin || sequence[i + 2].0 != origin {
            continue;
        }

        if let Some(offset) = sequence[i + 3..].iter().position(|(o, _)| *o != origin) {
            sequence.swap(i + 2, i + 3 + offset);
            repairs += 1;
        }
    }

    repairs
}

/// 計算最長的同值連續長度
#[must_use]
pub fn longest_run<K: PartialEq>(tags: &[K]) -> usize {
    let mut longest = 0;
    let mut current = 0;

    for (i, tag) in tags.iter().enumerate() {
        if i > 0 && tags[i - 1] == *tag {
            current += 1;
        } else {
            current = 1;
        }
        longest = longest.max(current);
    }

    longest
}
