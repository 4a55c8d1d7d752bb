use crate::models::{NewDepartmentSalary, NewSale};
use crate::store::RecordStore;

use time::macros::date;

/// Create a valid sale payload.
pub(crate) fn get_test_new_sale() -> NewSale {
    NewSale {
        product: "apples".to_string(),
        quantity: 2,
        price: 10.0,
        date: date!(2024 - 01 - 01),
    }
}

/// Create a store seeded with three sales spanning two months and two
/// products: 20.0 and 5.0 of revenue in January, 30.0 in February.
pub(crate) fn seeded_store() -> RecordStore {
    let store = RecordStore::temporary().unwrap();
    for (product, quantity, price, date) in [
        ("apples", 2, 10.0, date!(2024 - 01 - 01)),
        ("bananas", 1, 5.0, date!(2024 - 01 - 15)),
        ("apples", 3, 10.0, date!(2024 - 02 - 01)),
    ] {
        store
            .insert_sale(NewSale {
                product: product.to_string(),
                quantity,
                price,
                date,
            })
            .unwrap();
    }
    store
}

/// Create a store seeded with department salary rows: engineering split over
/// two rows, sales in one.
pub(crate) fn seeded_department_store() -> RecordStore {
    let store = RecordStore::temporary().unwrap();
    for (department, salary) in [
        ("engineering", 1000.0),
        ("engineering", 500.0),
        ("sales", 750.0),
    ] {
        store
            .insert_department_salary(NewDepartmentSalary {
                department: department.to_string(),
                salary,
            })
            .unwrap();
    }
    store
}
