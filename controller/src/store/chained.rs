//! チェイン法ハッシュテーブル
//!
//! 固定数のバケットと、各バケットが所有するエントリ列で構成する。
//! バケット数は生成時に決まり、以後リハッシュはしない。ロックは持たない
//! （排他制御は [`super::table::Table`] が担当）。

use std::collections::TryReserveError;

/// デフォルトのバケット数（素数）
pub const DEFAULT_BUCKET_COUNT: usize = 10007;

/// 一覧バッファの初期容量
pub const INITIAL_LIST_CAPACITY: usize = 16;

/// djb2 文字列ハッシュ (`hash = hash * 33 + byte`, seed 5381)
pub fn djb2(key: &str) -> u32 {
    key.bytes()
        .fold(5381u32, |hash, byte| {
            hash.wrapping_mul(33).wrapping_add(u32::from(byte))
        })
}

struct Entry<T> {
    key: String,
    value: T,
}

/// 固定バケット数のチェイン法ハッシュマップ
pub struct ChainedMap<T> {
    buckets: Vec<Vec<Entry<T>>>,
    len: usize,
}

impl<T> ChainedMap<T> {
    /// 指定バケット数で作成（0 は 1 として扱う）
    pub fn with_buckets(bucket_count: usize) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self { buckets, len: 0 }
    }

    /// バケット数
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// 保持しているエントリ数
    pub fn len(&self) -> usize {
        self.len
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_index(&self, key: &str) -> usize {
        djb2(key) as usize % self.buckets.len()
    }

    /// エントリを挿入
    ///
    /// 同じキーが既にあれば値を置き換えて旧値を返す。新規キーはチェインの先頭に置く。
    /// 領域確保に失敗した場合は何も変更せずにエラーを返す。
    pub fn insert(&mut self, key: String, value: T) -> Result<Option<T>, TryReserveError> {
        let index = self.bucket_index(&key);
        let chain = &mut self.buckets[index];

        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == key) {
            return Ok(Some(std::mem::replace(&mut entry.value, value)));
        }

        chain.try_reserve(1)?;
        chain.insert(0, Entry { key, value });
        self.len += 1;
        Ok(None)
    }

    /// キーに一致するエントリを参照
    pub fn get(&self, key: &str) -> Option<&T> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// キーに一致するエントリを取り除いて返す
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|entry| entry.key == key)?;
        self.len -= 1;
        Some(chain.remove(position).value)
    }

    /// 全バケットを順に走査する
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|entry| &entry.value))
    }

    /// 述語に一致する値を複製して集める
    ///
    /// バッファは初期容量から倍々に拡張する。確保に失敗した場合は
    /// それまでのバッファを解放してエラーを返す。
    pub fn collect_matching<F>(&self, mut predicate: F) -> Result<Vec<T>, TryReserveError>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let mut matches = Vec::new();
        for value in self.values().filter(|value| predicate(value)) {
            push_growing(&mut matches, value.clone())?;
        }
        Ok(matches)
    }

    /// 全エントリを破棄し、破棄した件数を返す
    pub fn drain(&mut self) -> usize {
        let released = self.len;
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.len = 0;
        released
    }
}

/// 容量不足時に倍々で領域を確保してから追加する
pub(crate) fn push_growing<T>(buffer: &mut Vec<T>, value: T) -> Result<(), TryReserveError> {
    if buffer.len() == buffer.capacity() {
        let additional = buffer.capacity().max(INITIAL_LIST_CAPACITY);
        buffer.try_reserve_exact(additional)?;
    }
    buffer.push(value);
    Ok(())
}
