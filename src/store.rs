use std::path::Path;

use chrono::Utc;
use rusqlite::{Connection, Row, params};

use crate::errors::CategorizeResult;
use crate::types::CategorizedTransaction;

/// Storage seam for categorized records: bulk insert assigning identities,
/// and retrieval of everything stored for one company. Any backend that
/// honors insertion order satisfies the contract.
pub trait RecordStore {
    /// Persists the whole batch in input order and returns it with the
    /// assigned ids. All-or-nothing: on failure nothing is stored.
    fn save_all(
        &mut self,
        records: Vec<CategorizedTransaction>,
    ) -> CategorizeResult<Vec<CategorizedTransaction>>;

    fn find_by_company_id(
        &self,
        company_id: &str,
    ) -> CategorizeResult<Vec<CategorizedTransaction>>;
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS categorized_transaction (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company_id TEXT,
    transaction_date TEXT NOT NULL,
    transaction_description TEXT NOT NULL,
    deposit_amount INTEGER NOT NULL,
    withdraw_amount INTEGER NOT NULL,
    balance_amount INTEGER NOT NULL,
    transaction_place TEXT NOT NULL,
    category_id TEXT NOT NULL,
    category_name TEXT NOT NULL,
    classified INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_categorized_transaction_company
    ON categorized_transaction(company_id);
";

/// SQLite-backed [`RecordStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open<P: AsRef<Path>>(path: P) -> CategorizeResult<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    /// Ephemeral store, mainly for tests.
    pub fn open_in_memory() -> CategorizeResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> CategorizeResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore { conn })
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CategorizedTransaction> {
    Ok(CategorizedTransaction {
        id: Some(row.get(0)?),
        company_id: row.get(1)?,
        transaction_date: row.get(2)?,
        transaction_description: row.get(3)?,
        deposit_amount: row.get(4)?,
        withdraw_amount: row.get(5)?,
        balance_amount: row.get(6)?,
        transaction_place: row.get(7)?,
        category_id: row.get(8)?,
        category_name: row.get(9)?,
        classified: row.get(10)?,
    })
}

impl RecordStore for SqliteStore {
    fn save_all(
        &mut self,
        mut records: Vec<CategorizedTransaction>,
    ) -> CategorizeResult<Vec<CategorizedTransaction>> {
        let tx = self.conn.transaction()?;
        let created_at = Utc::now().to_rfc3339();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO categorized_transaction (
                    company_id, transaction_date, transaction_description,
                    deposit_amount, withdraw_amount, balance_amount,
                    transaction_place, category_id, category_name,
                    classified, created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
            )?;

            for record in &mut records {
                stmt.execute(params![
                    record.company_id,
                    record.transaction_date,
                    record.transaction_description,
                    record.deposit_amount,
                    record.withdraw_amount,
                    record.balance_amount,
                    record.transaction_place,
                    record.category_id,
                    record.category_name,
                    record.classified,
                    created_at,
                ])?;
                record.id = Some(tx.last_insert_rowid());
            }
        }

        tx.commit()?;
        Ok(records)
    }

    fn find_by_company_id(
        &self,
        company_id: &str,
    ) -> CategorizeResult<Vec<CategorizedTransaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, company_id, transaction_date, transaction_description,
                    deposit_amount, withdraw_amount, balance_amount,
                    transaction_place, category_id, category_name, classified
             FROM categorized_transaction
             WHERE company_id = ?1
             ORDER BY id",
        )?;

        let records = stmt
            .query_map(params![company_id], record_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Classification, Transaction};

    fn record(description: &str, outcome: Classification) -> CategorizedTransaction {
        let tx = Transaction {
            timestamp: "2023-07-25".to_string(),
            description: description.to_string(),
            income: 0,
            outcome: 4500,
            balance: 95500,
            location: "Downtown".to_string(),
        };
        CategorizedTransaction::build(&tx, outcome)
    }

    fn matched(company_id: &str) -> Classification {
        Classification::Matched {
            company_id: company_id.to_string(),
            category_id: "CAT1".to_string(),
            category_name: "Beverages".to_string(),
        }
    }

    #[test]
    fn test_save_all_assigns_increasing_ids() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let saved = store
            .save_all(vec![
                record("first", matched("C1")),
                record("second", matched("C1")),
            ])
            .unwrap();

        assert_eq!(saved.len(), 2);
        let first = saved[0].id.unwrap();
        let second = saved[1].id.unwrap();
        assert!(second > first);
        assert_eq!(saved[0].transaction_description, "first");
    }

    #[test]
    fn test_find_by_company_id_filters_and_preserves_order() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        store
            .save_all(vec![
                record("c1 first", matched("C1")),
                record("c2 only", matched("C2")),
                record("c1 second", matched("C1")),
                record("no company", Classification::Unmatched),
            ])
            .unwrap();

        let found = store.find_by_company_id("C1").unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].transaction_description, "c1 first");
        assert_eq!(found[1].transaction_description, "c1 second");
        assert!(found.iter().all(|r| r.company_id.as_deref() == Some("C1")));

        let missing = store.find_by_company_id("C3").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_unclassified_records_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();

        let saved = store
            .save_all(vec![record("mystery", Classification::Unmatched)])
            .unwrap();

        assert_eq!(saved[0].company_id, None);
        assert!(!saved[0].classified);

        // Unclassified rows have no company and are invisible to lookups.
        assert!(store.find_by_company_id("C1").unwrap().is_empty());
    }

    #[test]
    fn test_save_all_empty_batch() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let saved = store.save_all(vec![]).unwrap();
        assert!(saved.is_empty());
    }

    #[test]
    fn test_saved_fields_survive_retrieval() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let saved = store.save_all(vec![record("keep me", matched("C9"))]).unwrap();

        let found = store.find_by_company_id("C9").unwrap();
        assert_eq!(found, saved);
        assert_eq!(found[0].withdraw_amount, 4500);
        assert_eq!(found[0].balance_amount, 95500);
        assert_eq!(found[0].category_name, "Beverages");
        assert!(found[0].classified);
    }
}
