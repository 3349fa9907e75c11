//! スレッドセーフなテーブル
//!
//! [`ChainedMap`] をテーブル単位の単一ミューテックスで保護し、
//! レコードが二次キーを持つ場合は同じロック下で二次インデックスを維持する。

use std::collections::{HashMap, TryReserveError};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};
use vxlan_controller_common::error::{ControllerError, ControllerResult};

use super::chained::{push_growing, ChainedMap};

/// テーブルに格納できるレコード
pub trait Record: Clone + Send + 'static {
    /// 主キー
    fn key(&self) -> String;

    /// 二次インデックスのキー（持たない場合は `None`）
    fn index_key(&self) -> Option<&str> {
        None
    }
}

struct TableState<T> {
    entries: ChainedMap<T>,
    /// 二次キー → 主キー一覧
    index: HashMap<String, Vec<String>>,
}

impl<T> TableState<T> {
    fn unindex(&mut self, index_key: &str, key: &str) {
        if let Some(keys) = self.index.get_mut(index_key) {
            keys.retain(|k| k != key);
            if keys.is_empty() {
                self.index.remove(index_key);
            }
        }
    }
}

/// 単一ロックで保護されたテーブル
///
/// 同一テーブル内の操作はすべて直列化される。別テーブルとは競合しない。
/// 読み取り系は複製を返すため、呼び出し側がテーブル内のレコードを変更することはない。
#[derive(Clone)]
pub struct Table<T> {
    name: &'static str,
    state: Arc<Mutex<TableState<T>>>,
}

impl<T: Record> Table<T> {
    /// 指定バケット数の空テーブルを作成
    pub fn new(name: &'static str, bucket_count: usize) -> Self {
        Self {
            name,
            state: Arc::new(Mutex::new(TableState {
                entries: ChainedMap::with_buckets(bucket_count),
                index: HashMap::new(),
            })),
        }
    }

    /// テーブル名
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn lock(&self) -> ControllerResult<MutexGuard<'_, TableState<T>>> {
        self.state
            .lock()
            .map_err(|_| ControllerError::Internal(format!("{} table lock poisoned", self.name)))
    }

    fn allocation_failure(&self, operation: &str, err: TryReserveError) -> ControllerError {
        warn!(table = self.name, operation, error = %err, "Allocation failed");
        ControllerError::AllocationFailure(format!("{} {}: {}", self.name, operation, err))
    }

    /// レコードを保存
    ///
    /// 同じ主キーのレコードがあれば置き換え、旧レコードを返す。
    /// 領域確保に失敗した場合はテーブルを変更しない。
    pub fn save(&self, record: T) -> ControllerResult<Option<T>> {
        let key = record.key();
        let index_key = record.index_key().map(str::to_string);

        let mut guard = self.lock()?;
        let state = &mut *guard;

        if let Some(index_key) = &index_key {
            let reserved = state.index.try_reserve(1).and_then(|_| {
                state
                    .index
                    .entry(index_key.clone())
                    .or_default()
                    .try_reserve(1)
            });
            if let Err(err) = reserved {
                state.index.retain(|_, keys| !keys.is_empty());
                return Err(self.allocation_failure("save", err));
            }
        }

        let replaced = match state.entries.insert(key.clone(), record) {
            Ok(replaced) => replaced,
            Err(err) => {
                state.index.retain(|_, keys| !keys.is_empty());
                return Err(self.allocation_failure("save", err));
            }
        };

        if let Some(old_index_key) = replaced.as_ref().and_then(Record::index_key) {
            state.unindex(old_index_key, &key);
        }
        if let Some(index_key) = index_key {
            state.index.entry(index_key).or_default().push(key.clone());
        }
        drop(guard);

        if replaced.is_some() {
            debug!(table = self.name, key = %key, "Replaced record");
        } else {
            debug!(table = self.name, key = %key, "Saved record");
        }
        Ok(replaced)
    }

    /// 主キーでレコードを取得
    pub fn get(&self, key: &str) -> ControllerResult<Option<T>> {
        self.get_where(key, |_| true)
    }

    /// 主キーで取得し、述語を満たす場合のみ返す
    pub fn get_where<F>(&self, key: &str, predicate: F) -> ControllerResult<Option<T>>
    where
        F: FnOnce(&T) -> bool,
    {
        let state = self.lock()?;
        Ok(state.entries.get(key).filter(|record| predicate(*record)).cloned())
    }

    /// 主キーでレコードを削除して返す
    pub fn remove(&self, key: &str) -> ControllerResult<Option<T>> {
        self.remove_where(key, |_| true)
    }

    /// 述語を満たす場合のみ削除して返す
    pub fn remove_where<F>(&self, key: &str, predicate: F) -> ControllerResult<Option<T>>
    where
        F: FnOnce(&T) -> bool,
    {
        let mut guard = self.lock()?;
        let state = &mut *guard;

        if !state.entries.get(key).is_some_and(predicate) {
            return Ok(None);
        }

        let removed = state.entries.remove(key);
        if let Some(index_key) = removed.as_ref().and_then(Record::index_key) {
            state.unindex(index_key, key);
        }
        drop(guard);

        if removed.is_some() {
            debug!(table = self.name, key = %key, "Deleted record");
        }
        Ok(removed)
    }

    /// 全バケットを走査して述語に一致するレコードを返す
    pub fn list<F>(&self, predicate: F) -> ControllerResult<Vec<T>>
    where
        F: FnMut(&T) -> bool,
    {
        let state = self.lock()?;
        state
            .entries
            .collect_matching(predicate)
            .map_err(|err| self.allocation_failure("list", err))
    }

    /// 二次インデックスから該当レコードを返す
    pub fn list_indexed(&self, index_key: &str) -> ControllerResult<Vec<T>> {
        let state = self.lock()?;
        let Some(keys) = state.index.get(index_key) else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for record in keys.iter().filter_map(|key| state.entries.get(key)) {
            push_growing(&mut records, record.clone())
                .map_err(|err| self.allocation_failure("list", err))?;
        }
        Ok(records)
    }

    /// 保持しているレコード数
    pub fn len(&self) -> ControllerResult<usize> {
        Ok(self.lock()?.entries.len())
    }

    /// 空かどうか
    pub fn is_empty(&self) -> ControllerResult<bool> {
        Ok(self.len()? == 0)
    }

    /// 全レコードを破棄し、破棄した件数を返す
    pub fn clear(&self) -> ControllerResult<usize> {
        let mut state = self.lock()?;
        state.index.clear();
        Ok(state.entries.drain())
    }
}
