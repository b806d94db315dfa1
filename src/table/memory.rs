use crate::{
    common,
    error::{Operation, StoreError},
    read,
    table::TodoTable,
    write,
};

use std::{collections, ops::Bound, sync};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum MemoryError {
    #[error("the conditional request failed")]
    ConditionalCheckFailed,
    #[error("record has no string userId/todoId key")]
    MissingKey,
    #[error("service unavailable")]
    Unavailable,
}

/// In-process table with DynamoDB put/update/delete semantics, ordered by key.
#[derive(Debug, Default)]
pub(crate) struct MemoryTable {
    records: sync::Mutex<collections::BTreeMap<common::key::TodoKey, common::Record>>,
    failing: Option<Operation>,
}

impl MemoryTable {
    /// Table whose `operation` always fails.
    pub(crate) fn failing(operation: Operation) -> Self {
        Self {
            failing: Some(operation),
            ..Default::default()
        }
    }

    pub(crate) fn get(&self, key: &common::key::TodoKey) -> Option<common::Record> {
        self.lock().get(key).cloned()
    }

    fn lock(
        &self,
    ) -> sync::MutexGuard<'_, collections::BTreeMap<common::key::TodoKey, common::Record>> {
        self.records.lock().unwrap_or_else(sync::PoisonError::into_inner)
    }

    fn check(&self, operation: Operation) -> Result<(), StoreError> {
        match self.failing {
            Some(failing) if failing == operation => {
                Err(StoreError::new(operation, MemoryError::Unavailable))
            }
            _ => Ok(()),
        }
    }

    fn check_condition(
        operation: Operation,
        exists: bool,
        condition: write::common::WriteCondition,
    ) -> Result<(), StoreError> {
        let holds = match condition {
            write::common::WriteCondition::Always => true,
            write::common::WriteCondition::ItemExists => exists,
            write::common::WriteCondition::ItemAbsent => !exists,
        };
        if holds {
            Ok(())
        } else {
            Err(StoreError::new(operation, MemoryError::ConditionalCheckFailed))
        }
    }
}

impl TodoTable for MemoryTable {
    async fn scan_all(&self) -> Result<Vec<common::Record>, StoreError> {
        self.check(Operation::Scan)?;
        Ok(self.lock().values().cloned().collect())
    }

    async fn scan_page(
        &self,
        start: Option<common::Record>,
        limit: Option<i32>,
    ) -> Result<read::common::RecordPage, StoreError> {
        self.check(Operation::Scan)?;
        let lower = match start {
            Some(start) => match common::key::TodoKey::from_record(&start) {
                Some(key) => Bound::Excluded(key),
                None => return Err(StoreError::new(Operation::Scan, MemoryError::MissingKey)),
            },
            None => Bound::Unbounded,
        };
        let records = self.lock();
        let mut remaining = records.range((lower, Bound::Unbounded)).peekable();
        let limit = limit.map_or(usize::MAX, |limit| limit.max(1) as usize);
        let mut page = read::common::RecordPage::default();
        while page.records.len() < limit {
            match remaining.next() {
                Some((_, record)) => page.records.push(record.clone()),
                None => break,
            }
        }
        if remaining.peek().is_some() {
            page.last_evaluated_key = page
                .records
                .last()
                .and_then(common::key::TodoKey::from_record)
                .map(common::Record::from);
        }
        Ok(page)
    }

    async fn query_by_index(&self, user_id: &str) -> Result<Vec<common::Record>, StoreError> {
        self.check(Operation::Query)?;
        let records = self
            .lock()
            .iter()
            .filter(|(key, _)| key.user_id == user_id)
            .map(|(_, record)| record.clone())
            .collect();
        Ok(records)
    }

    async fn put(
        &self,
        record: common::Record,
        condition: write::common::WriteCondition,
    ) -> Result<(), StoreError> {
        self.check(Operation::Put)?;
        let key = common::key::TodoKey::from_record(&record)
            .ok_or_else(|| StoreError::new(Operation::Put, MemoryError::MissingKey))?;
        let mut records = self.lock();
        Self::check_condition(Operation::Put, records.contains_key(&key), condition)?;
        records.insert(key, record);
        Ok(())
    }

    async fn delete_key(&self, key: common::key::TodoKey) -> Result<(), StoreError> {
        self.check(Operation::Delete)?;
        self.lock().remove(&key);
        Ok(())
    }

    async fn update_fields(
        &self,
        key: common::key::TodoKey,
        assignments: write::update_item::SetInputs,
        condition: write::common::WriteCondition,
    ) -> Result<(), StoreError> {
        self.check(Operation::Update)?;
        let mut records = self.lock();
        Self::check_condition(Operation::Update, records.contains_key(&key), condition)?;
        let record = records
            .entry(key.clone())
            .or_insert_with(|| common::Record::from(key));
        record.extend(assignments.0);
        Ok(())
    }
}
