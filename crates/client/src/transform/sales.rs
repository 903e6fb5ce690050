//! Sales rows grouped for a grouped bar chart.

use std::collections::{BTreeSet, HashMap};

use types::SalesRecord;

/// Sales laid out as a month x product grid.
///
/// Months are ascending (`YYYY-MM` sorts lexically); products keep the
/// order they first appear in the data, which fixes their bar colour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesGrid {
    pub months: Vec<String>,
    pub products: Vec<String>,
    /// `cells[month][product]`, `None` when the pair has no row.
    cells: Vec<Vec<Option<f64>>>,
}

impl SalesGrid {
    /// Group rows by month and product. Duplicate pairs are summed.
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let months: Vec<String> = records
            .iter()
            .map(|r| r.month.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut products: Vec<String> = Vec::new();
        for record in records {
            if !products.contains(&record.product) {
                products.push(record.product.clone());
            }
        }

        let month_idx: HashMap<&str, usize> = months
            .iter()
            .enumerate()
            .map(|(i, m)| (m.as_str(), i))
            .collect();
        let product_idx: HashMap<&str, usize> = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.as_str(), i))
            .collect();

        let mut cells = vec![vec![None; products.len()]; months.len()];
        for record in records {
            let m = month_idx[record.month.as_str()];
            let p = product_idx[record.product.as_str()];
            let cell: &mut Option<f64> = &mut cells[m][p];
            *cell = Some(cell.unwrap_or(0.0) + record.sales);
        }

        Self {
            months,
            products,
            cells,
        }
    }

    /// Whether the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Sales for a cell, by index.
    pub fn value(&self, month: usize, product: usize) -> Option<f64> {
        self.cells.get(month)?.get(product).copied().flatten()
    }

    /// Sales for a cell, by name.
    pub fn get(&self, month: &str, product: &str) -> Option<f64> {
        let m = self.months.iter().position(|x| x == month)?;
        let p = self.products.iter().position(|x| x == product)?;
        self.value(m, p)
    }

    /// Largest cell value (0.0 for an empty grid).
    pub fn max_value(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }

    /// Per-product total across all months, in product order.
    pub fn product_totals(&self) -> Vec<f64> {
        (0..self.products.len())
            .map(|p| {
                (0..self.months.len())
                    .filter_map(|m| self.value(m, p))
                    .sum()
            })
            .collect()
    }
}
