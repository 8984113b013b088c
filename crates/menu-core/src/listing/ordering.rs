//! Multi-key stable ordering of menu items

use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::MenuItem;
use crate::error::DomainError;

const PARAM: &str = "ordering";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Price,
    Inventory,
    Category,
    CategoryTitle,
}

impl SortField {
    fn compare(self, a: &MenuItem, b: &MenuItem) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::Price => a.price.cmp(&b.price),
            SortField::Inventory => a.inventory.cmp(&b.inventory),
            SortField::Category => a.category.id.cmp(&b.category.id),
            SortField::CategoryTitle => a.category.title.cmp(&b.category.title),
        }
    }
}

impl FromStr for SortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "price" => Ok(SortField::Price),
            "inventory" | "stock" => Ok(SortField::Inventory),
            "category" | "category_id" => Ok(SortField::Category),
            "category__title" => Ok(SortField::CategoryTitle),
            other => Err(DomainError::invalid_parameter(
                PARAM,
                format!("cannot order by unknown field '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One level of a multi-key sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingKey {
    pub field: SortField,
    pub direction: Direction,
}

impl OrderingKey {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Parses a comma-separated list such as `-price,title`.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, DomainError> {
        raw.split(',').map(Self::parse).collect()
    }

    fn parse(raw: &str) -> Result<Self, DomainError> {
        let key = raw.trim();
        let (direction, name) = match key.strip_prefix('-') {
            Some(rest) => (Direction::Descending, rest),
            None => (Direction::Ascending, key),
        };
        if name.is_empty() {
            return Err(DomainError::invalid_parameter(PARAM, "empty ordering key"));
        }
        Ok(Self {
            field: name.parse()?,
            direction,
        })
    }

    fn compare(&self, a: &MenuItem, b: &MenuItem) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Sorts in place. Ties on every key keep their original relative order.
pub fn sort_items(items: &mut [MenuItem], keys: &[OrderingKey]) {
    items.sort_by(|a, b| {
        keys.iter()
            .map(|key| key.compare(a, b))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use rust_decimal::Decimal;

    fn item(id: i32, title: &str, price: i64, inventory: i32) -> MenuItem {
        MenuItem {
            id,
            title: title.to_string(),
            price: Decimal::new(price, 0),
            inventory,
            category: Category {
                id: 1,
                slug: "mains".to_string(),
                title: "Mains".to_string(),
            },
        }
    }

    fn ids(items: &[MenuItem]) -> Vec<i32> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_parse_list() {
        let keys = OrderingKey::parse_list("-price, inventory").unwrap();
        assert_eq!(
            keys,
            vec![
                OrderingKey {
                    field: SortField::Price,
                    direction: Direction::Descending
                },
                OrderingKey::ascending(SortField::Inventory),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_and_empty_keys() {
        assert!(matches!(
            OrderingKey::parse_list("calories"),
            Err(DomainError::InvalidParameter { name: "ordering", .. })
        ));
        assert!(OrderingKey::parse_list("price,").is_err());
        assert!(OrderingKey::parse_list("-").is_err());
    }

    #[test]
    fn test_ascending_and_descending() {
        let mut items = vec![item(1, "A", 8, 1), item(2, "B", 5, 1), item(3, "C", 12, 1)];
        sort_items(&mut items, &OrderingKey::parse_list("price").unwrap());
        assert_eq!(ids(&items), vec![2, 1, 3]);

        sort_items(&mut items, &OrderingKey::parse_list("-price").unwrap());
        assert_eq!(ids(&items), vec![3, 1, 2]);
    }

    #[test]
    fn test_multi_key_breaks_ties_then_keeps_original_order() {
        let mut items = vec![
            item(1, "A", 5, 3),
            item(2, "B", 5, 1),
            item(3, "C", 2, 9),
            item(4, "D", 5, 1),
        ];
        sort_items(&mut items, &OrderingKey::parse_list("-price,inventory").unwrap());
        // 2 and 4 tie on both keys and stay in input order
        assert_eq!(ids(&items), vec![2, 4, 1, 3]);
    }
}
