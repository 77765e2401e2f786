use business::domain::cart::model::CartSnapshot;
use business::domain::product::model::Product;

pub const NO_PRODUCTS: &str = "No products found. Try adjusting your filters.";

pub fn product_list(products: &[Product]) -> String {
    if products.is_empty() {
        return NO_PRODUCTS.to_string();
    }
    products
        .iter()
        .map(product_row)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn product_row(product: &Product) -> String {
    let availability = if product.is_out_of_stock() {
        "out of stock".to_string()
    } else {
        format!("{} in stock", product.stock)
    };
    format!(
        "{:<8} {:<40} {:>10.2}  {}",
        product.id.as_str(),
        product.name,
        product.price,
        availability
    )
}

pub fn product_detail(product: &Product) -> String {
    format!(
        "{}\n  {}\n  Category: {}\n  Price: {:.2}\n  Stock: {}\n  Image: {}",
        product.name,
        product.description,
        product.category.name,
        product.price,
        product.stock,
        product.image_url
    )
}

pub fn cart(snapshot: &CartSnapshot) -> String {
    if snapshot.lines.is_empty() {
        return "Your cart is empty.".to_string();
    }

    let mut out = String::new();
    for line in &snapshot.lines {
        out.push_str(&format!(
            "{:<8} {:<40} {:>3} x {:>8.2} = {:>10.2}\n",
            line.product_id.as_str(),
            line.name,
            line.quantity,
            line.price,
            line.subtotal()
        ));
    }
    out.push_str(&format!(
        "Items: {}  Total: {:.2}",
        snapshot.count, snapshot.total
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::cart::model::CartLine;
    use business::domain::product::model::Category;
    use business::domain::shared::value_objects::ProductId;
    use rust_decimal::Decimal;

    #[test]
    fn should_render_empty_cart() {
        let snapshot = CartSnapshot {
            lines: Vec::new(),
            total: Decimal::ZERO,
            count: 0,
        };

        assert_eq!(cart(&snapshot), "Your cart is empty.");
    }

    #[test]
    fn should_render_totals_with_two_decimals() {
        let snapshot = CartSnapshot {
            lines: vec![CartLine {
                product_id: ProductId::new("prod5"),
                name: "Classic Cotton T-Shirt".to_string(),
                price: Decimal::from(25),
                quantity: 3,
                image_url: String::new(),
                stock: 200,
            }],
            total: Decimal::from(75),
            count: 3,
        };

        let rendered = cart(&snapshot);

        assert!(rendered.contains("Classic Cotton T-Shirt"));
        assert!(rendered.ends_with("Items: 3  Total: 75.00"));
    }

    #[test]
    fn should_flag_out_of_stock_products() {
        let product = Product {
            id: ProductId::new("prod4"),
            name: "Mystery Novel: The Silent Witness".to_string(),
            description: String::new(),
            price: Decimal::new(1599, 2),
            stock: 0,
            category: Category {
                id: "cat2".to_string(),
                name: "Books".to_string(),
                description: None,
            },
            image_url: String::new(),
        };

        assert!(product_row(&product).ends_with("out of stock"));
    }
}
