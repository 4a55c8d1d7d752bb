//! The analytics catalog.
//!
//! Each analytic consumes a whole collection from the [record
//! store](crate::store::RecordStore) and reduces it to a derived result set.
//! The computations are fixed; none of them takes parameters. Grouping
//! preserves first-seen key order so that any tie-breaking downstream falls
//! back to the store's natural scan order.

use crate::error::AnalyticsError;
use crate::models::{
    AveragePrice, DailySalesPeak, DepartmentExpense, MonthlyRevenue, NewSale, ProductQuantity,
    ProductRevenue, RevenueTotal, Sale, SaleQuantity,
};
use crate::store::{Collection, RecordStore};

use std::collections::BTreeMap;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use time::Date;

/// Number of rows returned by the top-products ranking.
const TOP_PRODUCT_LIMIT: usize = 5;

/// Fold `(key, value)` pairs into per-key sums, preserving first-seen key
/// order.
fn sum_by_group<K, V, I>(rows: I) -> Vec<(K, V)>
where
    I: IntoIterator<Item = (K, V)>,
    K: Clone + Eq + std::hash::Hash,
    V: Copy + std::ops::Add<Output = V>,
{
    let mut order: Vec<K> = Vec::new();
    let mut totals: HashMap<K, V> = HashMap::new();
    for (key, value) in rows {
        match totals.entry(key) {
            Entry::Occupied(mut entry) => {
                let total = *entry.get() + value;
                entry.insert(total);
            }
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(value);
            }
        }
    }
    order
        .into_iter()
        .map(|key| {
            let total = totals[&key];
            (key, total)
        })
        .collect()
}

/// Month key in `YYYY-MM` form.
///
/// Zero padding keeps lexicographic and calendar order in agreement, so a
/// key-sorted map is already in chronological order.
fn month_key(date: Date) -> String {
    format!("{:04}-{:02}", date.year(), u8::from(date.month()))
}

/// Return all sales unmodified, in store scan order.
pub fn list_sales(store: &RecordStore) -> Result<Vec<Sale>, AnalyticsError> {
    store.sales()
}

/// Persist a validated sale and return the stored document.
///
/// Field presence and contents are enforced upstream at the request
/// boundary; nothing is re-checked here.
pub fn add_sale(store: &RecordStore, new_sale: NewSale) -> Result<Sale, AnalyticsError> {
    store.insert_sale(new_sale)
}

/// Sum `quantity * price` over the whole collection into one scalar.
///
/// An empty collection sums to zero rather than reporting absence.
pub fn total_revenue(store: &RecordStore) -> Result<RevenueTotal, AnalyticsError> {
    let sales = store.sales()?;
    let total_revenue = sales.iter().map(Sale::revenue).sum();
    Ok(RevenueTotal { total_revenue })
}

/// The literal quantity-by-product computation.
///
/// The grouping key pairs the row identity with the product, so every sale
/// forms its own group and `totalQuantity` is that single sale's quantity.
/// [quantity_by_product_totals] is the per-product rollup.
pub fn quantity_by_product(store: &RecordStore) -> Result<Vec<SaleQuantity>, AnalyticsError> {
    let rows = store
        .sales()?
        .into_iter()
        .map(|sale| SaleQuantity {
            id: sale.id,
            product: sale.product,
            total_quantity: sale.quantity,
        })
        .collect();
    Ok(rows)
}

/// Total quantity sold per product.
pub fn quantity_by_product_totals(
    store: &RecordStore,
) -> Result<Vec<ProductQuantity>, AnalyticsError> {
    let sales = store.sales()?;
    let totals = sum_by_group(sales.into_iter().map(|sale| (sale.product, sale.quantity)));
    Ok(totals
        .into_iter()
        .map(|(product, total_quantity)| ProductQuantity {
            product,
            total_quantity,
        })
        .collect())
}

/// The products with the highest total revenue, best first.
///
/// At most five rows are returned. The sort is stable, so products with
/// equal revenue keep their first-seen scan order.
pub fn top_products(store: &RecordStore) -> Result<Vec<ProductRevenue>, AnalyticsError> {
    let sales = store.sales()?;
    let mut totals = sum_by_group(
        sales
            .iter()
            .map(|sale| (sale.product.clone(), sale.revenue())),
    );
    totals.sort_by(|(_, left), (_, right)| right.total_cmp(left));
    Ok(totals
        .into_iter()
        .take(TOP_PRODUCT_LIMIT)
        .map(|(product, total_revenue)| ProductRevenue {
            product,
            total_revenue,
        })
        .collect())
}

/// Average unit price weighted by quantity: total revenue over total
/// quantity.
///
/// When no units were sold, over an empty collection or one of
/// zero-quantity sales, the average is reported as zero instead of dividing
/// by zero.
pub fn average_price(store: &RecordStore) -> Result<AveragePrice, AnalyticsError> {
    let sales = store.sales()?;
    let (total_quantity, total_revenue) =
        sales
            .iter()
            .fold((0_u64, 0.0_f64), |(quantity, revenue), sale| {
                (quantity + sale.quantity, revenue + sale.revenue())
            });
    let average_price = if total_quantity == 0 {
        0.0
    } else {
        total_revenue / total_quantity as f64
    };
    Ok(AveragePrice { average_price })
}

/// Total revenue per calendar month, ascending by month key.
pub fn revenue_by_month(store: &RecordStore) -> Result<Vec<MonthlyRevenue>, AnalyticsError> {
    let sales = store.sales()?;
    let mut months: BTreeMap<String, f64> = BTreeMap::new();
    for sale in &sales {
        *months.entry(month_key(sale.date)).or_insert(0.0) += sale.revenue();
    }
    Ok(months
        .into_iter()
        .map(|(month, total_revenue)| MonthlyRevenue {
            month,
            total_revenue,
        })
        .collect())
}

/// The date carrying the highest single-sale quantity, with a sale that
/// achieved it.
///
/// Sales are grouped by date keeping the maximum quantity per group; the top
/// group is then correlated back against the collection to recover a
/// matching sale's product. Ties between dates, or between sales on the
/// winning date, are unspecified and resolve to whichever row the scan
/// yields.
pub fn highest_quantity_sold(store: &RecordStore) -> Result<DailySalesPeak, AnalyticsError> {
    let sales = store.sales()?;
    let mut peaks: HashMap<Date, u64> = HashMap::new();
    for sale in &sales {
        let peak = peaks.entry(sale.date).or_insert(0);
        *peak = (*peak).max(sale.quantity);
    }
    let (date, quantity) = peaks
        .into_iter()
        .max_by_key(|(_, quantity)| *quantity)
        .ok_or(AnalyticsError::CollectionEmpty {
            collection: Collection::Sales,
        })?;
    let sale = sales
        .iter()
        .find(|sale| sale.date == date && sale.quantity == quantity)
        .ok_or(AnalyticsError::CollectionEmpty {
            collection: Collection::Sales,
        })?;
    Ok(DailySalesPeak {
        date,
        product: sale.product.clone(),
        quantity,
    })
}

/// Total salary expense per department.
///
/// Unlike the sales analytics, an empty collection here is reported as
/// absence rather than an empty result set.
pub fn department_salary_expense(
    store: &RecordStore,
) -> Result<Vec<DepartmentExpense>, AnalyticsError> {
    let records = store.department_salaries()?;
    if records.is_empty() {
        return Err(AnalyticsError::CollectionEmpty {
            collection: Collection::DepartmentSalary,
        });
    }
    let totals = sum_by_group(
        records
            .into_iter()
            .map(|record| (record.department, record.salary)),
    );
    Ok(totals
        .into_iter()
        .map(|(department, total_salary_expense)| DepartmentExpense {
            department,
            total_salary_expense,
        })
        .collect())
}
