use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::product::model::{Category, Product};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    pub category_id: String,
    pub image_url: String,
}

impl ProductEntity {
    /// Resolves the category reference against `categories`; unknown ids fall
    /// back to an uncategorized placeholder.
    pub fn into_domain(self, categories: &[CategoryEntity]) -> Product {
        let category = categories
            .iter()
            .find(|c| c.id == self.category_id)
            .cloned()
            .map(CategoryEntity::into_domain)
            .unwrap_or_else(|| Category {
                id: self.category_id.clone(),
                name: "Uncategorized".to_string(),
                description: None,
            });

        Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category,
            image_url: self.image_url,
        }
    }
}

/// Catalog document: categories plus products referencing them by id.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    pub categories: Vec<CategoryEntity>,
    pub products: Vec<ProductEntity>,
}

impl CatalogDocument {
    pub fn into_domain(self) -> Vec<Product> {
        let categories = self.categories;
        self.products
            .into_iter()
            .map(|p| p.into_domain(&categories))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_category_reference() {
        let document: CatalogDocument = serde_json::from_str(
            r#"{
                "categories": [{ "id": "cat2", "name": "Books", "description": null }],
                "products": [{
                    "id": "prod10",
                    "name": "Sci-Fi Epic: Galaxy's Edge",
                    "description": "A sprawling space opera adventure.",
                    "price": 22.50,
                    "stock": 60,
                    "categoryId": "cat2",
                    "imageUrl": ""
                }]
            }"#,
        )
        .unwrap();

        let products = document.into_domain();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category.name, "Books");
        assert_eq!(products[0].price, Decimal::new(2250, 2));
    }

    #[test]
    fn should_fall_back_when_category_unknown() {
        let entity = ProductEntity {
            id: "prodX".to_string(),
            name: "Loose item".to_string(),
            description: String::new(),
            price: Decimal::ONE,
            stock: 1,
            category_id: "cat9".to_string(),
            image_url: String::new(),
        };

        let product = entity.into_domain(&[]);

        assert_eq!(product.category.id, "cat9");
        assert_eq!(product.category.name, "Uncategorized");
    }
}
