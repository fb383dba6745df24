//! Product records.

use serde::{Deserialize, Serialize};

use crate::types::{Category, ProductId, Rupees};

/// Stars shown for a rating.
pub const MAX_STARS: u8 = 5;

/// A label/value row on the product specification tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specification {
    pub label: String,
    pub value: String,
}

impl Specification {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A purchasable product.
///
/// Products come from the static catalog and are never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique, URL-safe identifier used in `/products/{slug}`.
    pub slug: String,
    pub name: String,
    pub category: Category,
    pub price: Rupees,
    /// Pre-discount price, shown struck through.
    pub original_price: Option<Rupees>,
    /// Discount percentage badge.
    pub discount: Option<u8>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    pub reviews: u32,
    /// Primary image, used on cards and cart lines.
    pub image: String,
    /// Gallery images for the detail page.
    pub images: Vec<String>,
    pub in_stock: bool,
    /// Shown in the home page "featured" grid.
    pub featured: bool,
    pub description: String,
    pub highlights: Vec<String>,
    pub specifications: Vec<Specification>,
}

impl Product {
    /// Create an in-stock product with the given identity and price.
    ///
    /// Remaining fields start empty; use the `with_*` methods to fill them.
    #[must_use]
    pub fn new(
        id: u32,
        slug: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: u64,
    ) -> Self {
        let slug = slug.into();
        let image = format!("/static/images/products/{slug}-1.jpg");
        Self {
            id: ProductId::new(id),
            slug,
            name: name.into(),
            category,
            price: Rupees::new(price),
            original_price: None,
            discount: None,
            rating: 0.0,
            reviews: 0,
            images: vec![image.clone()],
            image,
            in_stock: true,
            featured: false,
            description: String::new(),
            highlights: Vec::new(),
            specifications: Vec::new(),
        }
    }

    /// Set the pre-discount price and discount badge.
    #[must_use]
    pub fn with_original_price(mut self, original_price: u64, discount: u8) -> Self {
        self.original_price = Some(Rupees::new(original_price));
        self.discount = Some(discount);
        self
    }

    #[must_use]
    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    #[must_use]
    pub fn mark_featured(mut self) -> Self {
        self.featured = true;
        self
    }

    #[must_use]
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Set the gallery to `count` numbered images derived from the slug.
    #[must_use]
    pub fn with_gallery(mut self, count: usize) -> Self {
        self.images = (1..=count.max(1))
            .map(|n| format!("/static/images/products/{}-{n}.jpg", self.slug))
            .collect();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_highlights(mut self, highlights: &[&str]) -> Self {
        self.highlights = highlights.iter().map(|h| (*h).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_specifications(mut self, specifications: &[(&str, &str)]) -> Self {
        self.specifications = specifications
            .iter()
            .map(|(label, value)| Specification::new(*label, *value))
            .collect();
        self
    }

    /// Amount saved against the original price, if discounted.
    #[must_use]
    pub fn savings(&self) -> Option<Rupees> {
        self.original_price
            .map(|original| original.saturating_sub(self.price))
            .filter(|saved| !saved.is_zero())
    }

    /// Whole stars of the rating, out of [`MAX_STARS`].
    #[must_use]
    pub fn filled_stars(&self) -> usize {
        (1..=MAX_STARS)
            .take_while(|&star| f32::from(star) <= self.rating)
            .count()
    }

    /// Star slots left unfilled.
    #[must_use]
    pub fn empty_stars(&self) -> usize {
        usize::from(MAX_STARS) - self.filled_stars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_savings() {
        let product = Product::new(1, "ring", "Ring", Category::Jewelry, 900)
            .with_original_price(1000, 10);
        assert_eq!(product.savings(), Some(Rupees::new(100)));

        let plain = Product::new(2, "band", "Band", Category::Jewelry, 900);
        assert_eq!(plain.savings(), None);
    }

    #[test]
    fn test_stars_floor_rating() {
        let product = Product::new(1, "buds", "Buds", Category::Earbuds, 100).with_rating(4.7, 10);
        assert_eq!(product.filled_stars(), 4);
        assert_eq!(product.empty_stars(), 1);

        let perfect = Product::new(2, "ring", "Ring", Category::Jewelry, 100).with_rating(5.0, 1);
        assert_eq!(perfect.filled_stars(), 5);

        let unrated = Product::new(3, "watch", "Watch", Category::Gadgets, 100);
        assert_eq!(unrated.filled_stars(), 0);
        assert_eq!(unrated.empty_stars(), 5);
    }

    #[test]
    fn test_gallery_follows_slug() {
        let product =
            Product::new(1, "nova-ring", "Nova", Category::Gadgets, 100).with_gallery(2);
        assert_eq!(
            product.images,
            vec![
                "/static/images/products/nova-ring-1.jpg".to_string(),
                "/static/images/products/nova-ring-2.jpg".to_string(),
            ]
        );
    }
}
