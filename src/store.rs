//! Embedded document store holding the sales and department salary collections.

use crate::error::AnalyticsError;
use crate::models::{DepartmentSalaryRecord, NewDepartmentSalary, NewSale, Sale};

use serde::de::DeserializeOwned;
use serde::Serialize;
use strum_macros::Display;
use uuid::Uuid;

/// Document collections held by the record store.
///
/// The display form names the underlying tree.
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum Collection {
    Sales,
    DepartmentSalary,
}

/// Handle to the embedded document store.
///
/// Each collection is a [sled] tree of JSON documents keyed by a generated
/// UUID, so scans yield documents in key order rather than insertion order.
/// The handle is cheap to clone and safe to share across request handlers.
#[derive(Clone, Debug)]
pub struct RecordStore {
    db: sled::Db,
}

impl RecordStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: &str) -> Result<Self, AnalyticsError> {
        let db = sled::open(path)?;
        Ok(RecordStore { db })
    }

    /// Open a throwaway store backed by temporary files. Used by tests.
    pub fn temporary() -> Result<Self, AnalyticsError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(RecordStore { db })
    }

    /// Write one document into a collection under the given id.
    fn insert<T: Serialize>(
        &self,
        collection: Collection,
        id: Uuid,
        document: &T,
    ) -> Result<(), AnalyticsError> {
        let tree = self.db.open_tree(collection.to_string())?;
        tree.insert(id.as_bytes(), serde_json::to_vec(document)?)?;
        tree.flush()?;
        Ok(())
    }

    /// Decode every document in a collection.
    fn scan<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>, AnalyticsError> {
        self.db
            .open_tree(collection.to_string())?
            .iter()
            .values()
            .map(|value| {
                let bytes = value?;
                Ok(serde_json::from_slice(&bytes)?)
            })
            .collect()
    }

    /// Persist a new sale, assigning its identifier.
    pub fn insert_sale(&self, new_sale: NewSale) -> Result<Sale, AnalyticsError> {
        let sale = Sale {
            id: Uuid::new_v4(),
            product: new_sale.product,
            quantity: new_sale.quantity,
            price: new_sale.price,
            date: new_sale.date,
        };
        self.insert(Collection::Sales, sale.id, &sale)?;
        Ok(sale)
    }

    /// Return every sale document.
    pub fn sales(&self) -> Result<Vec<Sale>, AnalyticsError> {
        self.scan(Collection::Sales)
    }

    /// Persist a department salary row, assigning its identifier.
    ///
    /// The HTTP surface has no write operation for this collection; callers
    /// are external tooling and tests.
    pub fn insert_department_salary(
        &self,
        new_record: NewDepartmentSalary,
    ) -> Result<DepartmentSalaryRecord, AnalyticsError> {
        let record = DepartmentSalaryRecord {
            id: Uuid::new_v4(),
            department: new_record.department,
            salary: new_record.salary,
        };
        self.insert(Collection::DepartmentSalary, record.id, &record)?;
        Ok(record)
    }

    /// Return every department salary row.
    pub fn department_salaries(&self) -> Result<Vec<DepartmentSalaryRecord>, AnalyticsError> {
        self.scan(Collection::DepartmentSalary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[test]
    fn collection_tree_names() {
        assert_eq!("sales", Collection::Sales.to_string());
        assert_eq!("department_salary", Collection::DepartmentSalary.to_string());
    }

    #[test]
    fn empty_collections_scan_empty() {
        let store = RecordStore::temporary().unwrap();
        assert!(store.sales().unwrap().is_empty());
        assert!(store.department_salaries().unwrap().is_empty());
    }

    #[test]
    fn insert_sale_roundtrip() {
        let store = RecordStore::temporary().unwrap();
        let sale = store.insert_sale(test_utils::get_test_new_sale()).unwrap();
        assert_eq!("apples", sale.product);
        let sales = store.sales().unwrap();
        assert_eq!(vec![sale], sales);
    }

    #[test]
    fn insert_sale_assigns_distinct_ids() {
        let store = RecordStore::temporary().unwrap();
        let first = store.insert_sale(test_utils::get_test_new_sale()).unwrap();
        let second = store.insert_sale(test_utils::get_test_new_sale()).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(2, store.sales().unwrap().len());
    }

    #[test]
    fn insert_department_salary_roundtrip() {
        let store = RecordStore::temporary().unwrap();
        let record = store
            .insert_department_salary(NewDepartmentSalary {
                department: "engineering".to_string(),
                salary: 1000.0,
            })
            .unwrap();
        assert_eq!(vec![record], store.department_salaries().unwrap());
    }

    #[test]
    fn collections_are_independent() {
        let store = RecordStore::temporary().unwrap();
        store.insert_sale(test_utils::get_test_new_sale()).unwrap();
        assert!(store.department_salaries().unwrap().is_empty());
    }
}
