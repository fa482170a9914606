//! In-memory view over the fetched product list: free-text filter plus a
//! single sortable column.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::domain::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Id,
    Name,
    Brand,
    Price,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: SortColumn::Id,
            direction: SortDirection::Asc,
        }
    }
}

impl SortState {
    /// Same column flips the direction, a new column starts ascending.
    pub fn toggle(self, column: SortColumn) -> Self {
        let direction = if self.column == column && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { column, direction }
    }
}

/// Accent- and case-folded form of `s`
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style text comparison; raw text breaks ties
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn compare(a: &Product, b: &Product, column: SortColumn) -> Ordering {
    match column {
        SortColumn::Id => a.id.cmp(&b.id),
        SortColumn::Name => compare_text(&a.name, &b.name),
        SortColumn::Brand => compare_text(&a.brand, &b.brand),
        SortColumn::Price => a.price.cmp(&b.price),
    }
}

/// Products whose name or brand contains `query`, ignoring case
pub fn filter_products(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.brand.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort in place
pub fn sort_products(products: &mut [Product], sort: SortState) {
    match sort.direction {
        SortDirection::Asc => products.sort_by(|a, b| compare(a, b, sort.column)),
        SortDirection::Desc => products.sort_by(|a, b| compare(b, a, sort.column)),
    }
}

/// Filter first, then sort
pub fn display(products: &[Product], query: &str, sort: SortState) -> Vec<Product> {
    let mut rows = filter_products(products, query);
    sort_products(&mut rows, sort);
    rows
}

/// State behind the product table: the last fetched list, search text and
/// sort selection.
#[derive(Debug, Clone, Default)]
pub struct ProductTable {
    products: Vec<Product>,
    query: String,
    sort: SortState,
}

impl ProductTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched list; query and sort are kept
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort = self.sort.toggle(column);
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Rows as they should be rendered
    pub fn rows(&self) -> Vec<Product> {
        display(&self.products, &self.query, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn product(name: &str, brand: &str, price: i32) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            brand: brand.to_string(),
            price,
        }
    }

    #[test]
    fn filter_matches_brand_case_insensitively() {
        let list = vec![product("ProBook", "HP", 615), product("Xperia", "Sony", 699)];

        let rows = filter_products(&list, "hp");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "ProBook");
    }

    #[test]
    fn filter_matches_name_substring() {
        let list = vec![
            product("ThinkPad T14", "Lenovo", 1299),
            product("ThinkPad T11", "Dell", 999),
            product("R440 Server", "Dell", 1591),
        ];

        let rows = filter_products(&list, "PAD t1");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn empty_query_keeps_everything() {
        let list = vec![product("a", "b", 1), product("c", "d", 2)];
        assert_eq!(filter_products(&list, ""), list);
    }

    #[test]
    fn price_descending() {
        let mut list = vec![
            product("P2219H 21.5", "Dell", 129),
            product("R440 Server", "Dell", 1591),
            product("Iphone 6 64gb", "Apple", 680),
        ];
        sort_products(
            &mut list,
            SortState {
                column: SortColumn::Price,
                direction: SortDirection::Desc,
            },
        );

        let prices: Vec<i32> = list.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1591, 680, 129]);
    }

    #[test]
    fn text_sort_ignores_case_and_accents() {
        let mut list = vec![
            product("zeta", "x", 1),
            product("Éclair", "x", 1),
            product("apple", "x", 1),
            product("Banana", "x", 1),
        ];
        sort_products(
            &mut list,
            SortState {
                column: SortColumn::Name,
                direction: SortDirection::Asc,
            },
        );

        let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["apple", "Banana", "Éclair", "zeta"]);
    }

    #[test]
    fn toggle_flips_then_resets() {
        let start = SortState::default();
        let price_asc = start.toggle(SortColumn::Price);
        assert_eq!(price_asc.direction, SortDirection::Asc);

        let price_desc = price_asc.toggle(SortColumn::Price);
        assert_eq!(price_desc.direction, SortDirection::Desc);

        let back = price_desc.toggle(SortColumn::Price);
        assert_eq!(back.direction, SortDirection::Asc);

        let name = price_desc.toggle(SortColumn::Name);
        assert_eq!(name.column, SortColumn::Name);
        assert_eq!(name.direction, SortDirection::Asc);
    }

    #[test]
    fn first_toggle_on_default_column_goes_descending() {
        let state = SortState::default().toggle(SortColumn::Id);
        assert_eq!(state.direction, SortDirection::Desc);
    }

    #[test]
    fn table_rows_apply_filter_then_sort() {
        let mut table = ProductTable::new();
        table.replace_products(vec![
            product("ProLiant MicroGen10 Server", "HP", 321),
            product("Xperia", "Sony", 699),
            product("Elitebook G5 15'", "HP", 1322),
            product("ProBook 450 G6 15.6'", "HP", 615),
        ]);
        table.set_query("hp");
        table.toggle_sort(SortColumn::Price);
        table.toggle_sort(SortColumn::Price);

        let prices: Vec<i32> = table.rows().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1322, 615, 321]);
        assert_eq!(table.products().len(), 4);
    }

    proptest! {
        #[test]
        fn display_is_sorted_filter(
            items in prop::collection::vec(("[a-zA-Z]{1,8}", "[a-zA-Z]{1,6}", 1..5000i32), 0..30),
            query in "[a-z]{0,2}",
        ) {
            let list: Vec<Product> = items
                .iter()
                .map(|(n, b, p)| product(n, b, *p))
                .collect();
            let sort = SortState { column: SortColumn::Price, direction: SortDirection::Asc };

            let mut expected = filter_products(&list, &query);
            sort_products(&mut expected, sort);
            let rows = display(&list, &query, sort);

            prop_assert_eq!(&rows, &expected);
            prop_assert!(rows.windows(2).all(|w| w[0].price <= w[1].price));
            let all_match = rows.iter().all(|p| {
                p.name.to_lowercase().contains(&query) || p.brand.to_lowercase().contains(&query)
            });
            prop_assert!(all_match);
        }
    }
}
