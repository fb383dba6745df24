//! The built-in Swariva catalog.

use crate::catalog::Product;
use crate::types::Category;

/// Build the static product list shipped with the storefront.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(1, "diamond-solitaire-ring", "Diamond Solitaire Ring", Category::Jewelry, 89_999)
            .with_original_price(104_999, 14)
            .with_rating(4.8, 124)
            .with_gallery(3)
            .mark_featured()
            .with_description(
                "A brilliant-cut 0.5 carat diamond set in 18K white gold, hand-finished \
                 for an everyday sparkle that lasts a lifetime.",
            )
            .with_highlights(&[
                "IGI certified 0.5 ct natural diamond",
                "18K white gold, rhodium plated",
                "Free resizing within 30 days",
                "Lifetime cleaning and polishing",
            ])
            .with_specifications(&[
                ("Metal", "18K White Gold"),
                ("Stone", "Natural Diamond, VS1 / F"),
                ("Carat", "0.50 ct"),
                ("Certification", "IGI"),
            ]),
        Product::new(2, "gold-temple-necklace", "22K Gold Temple Necklace", Category::Jewelry, 145_000)
            .with_original_price(160_000, 9)
            .with_rating(4.9, 86)
            .with_gallery(3)
            .mark_featured()
            .with_description(
                "Traditional temple craftsmanship in hallmarked 22K gold with hand-carved \
                 Lakshmi motifs and a ruby-accented pendant.",
            )
            .with_highlights(&[
                "BIS hallmarked 22K gold",
                "Hand-carved temple motifs",
                "Natural ruby accents",
            ])
            .with_specifications(&[
                ("Metal", "22K Yellow Gold"),
                ("Weight", "38.5 g"),
                ("Length", "18 inches"),
                ("Hallmark", "BIS 916"),
            ]),
        Product::new(3, "pearl-drop-earrings", "Freshwater Pearl Drop Earrings", Category::Jewelry, 12_499)
            .with_original_price(15_999, 22)
            .with_rating(4.6, 212)
            .with_gallery(2)
            .with_description(
                "Lustrous freshwater pearls suspended from sterling silver hooks, \
                 light enough to wear from morning to evening.",
            )
            .with_highlights(&[
                "AAA grade freshwater pearls",
                "925 sterling silver hooks",
                "Hypoallergenic finish",
            ])
            .with_specifications(&[
                ("Metal", "925 Sterling Silver"),
                ("Pearl Size", "8-9 mm"),
                ("Closure", "Fish hook"),
            ]),
        Product::new(4, "sapphire-tennis-bracelet", "Sapphire Tennis Bracelet", Category::Jewelry, 64_999)
            .with_rating(4.7, 58)
            .with_gallery(2)
            .out_of_stock()
            .with_description(
                "A continuous line of Ceylon blue sapphires in a flexible 14K gold setting.",
            )
            .with_highlights(&[
                "32 natural Ceylon sapphires",
                "Secure double-lock clasp",
                "Flexible box setting",
            ])
            .with_specifications(&[
                ("Metal", "14K Yellow Gold"),
                ("Stone", "Blue Sapphire, 3.2 ct total"),
                ("Length", "7 inches"),
            ]),
        Product::new(5, "aurasound-pro-anc", "AuraSound Pro ANC Earbuds", Category::Earbuds, 14_999)
            .with_original_price(19_999, 25)
            .with_rating(4.5, 1_342)
            .with_gallery(3)
            .mark_featured()
            .with_description(
                "Hybrid active noise cancellation, spatial audio and 32 hours of playback \
                 with the wireless charging case.",
            )
            .with_highlights(&[
                "Hybrid ANC up to 45 dB",
                "32 hours total playback",
                "Wireless charging case",
                "IPX5 sweat resistance",
            ])
            .with_specifications(&[
                ("Driver", "11 mm dynamic"),
                ("Bluetooth", "5.3, multipoint"),
                ("Battery", "8 h + 24 h case"),
                ("Codecs", "AAC, LDAC"),
            ]),
        Product::new(6, "bassline-sport", "Bassline Sport Earbuds", Category::Earbuds, 4_999)
            .with_original_price(6_499, 23)
            .with_rating(4.3, 876)
            .with_gallery(2)
            .with_description(
                "Secure ear-hook fit and punchy bass tuned for workouts and runs.",
            )
            .with_highlights(&[
                "Ear-hook sport fit",
                "IP67 dust and water resistance",
                "Fast charge: 10 min for 2 hours",
            ])
            .with_specifications(&[
                ("Driver", "13 mm dynamic"),
                ("Bluetooth", "5.2"),
                ("Battery", "9 h + 27 h case"),
            ]),
        Product::new(7, "studio-lux-wireless", "Studio Lux Wireless Earbuds", Category::Earbuds, 24_999)
            .with_rating(4.7, 431)
            .with_gallery(3)
            .mark_featured()
            .with_description(
                "Planar magnetic drivers in a brushed aluminium shell for studio-grade \
                 detail on the move.",
            )
            .with_highlights(&[
                "Planar magnetic drivers",
                "Lossless-ready LDAC and aptX Lossless",
                "Adaptive transparency mode",
            ])
            .with_specifications(&[
                ("Driver", "Planar magnetic"),
                ("Bluetooth", "5.4"),
                ("Battery", "7 h + 21 h case"),
                ("Weight", "5.4 g per bud"),
            ]),
        Product::new(8, "pulse-smartwatch-x2", "Pulse Smartwatch X2", Category::Gadgets, 29_999)
            .with_original_price(34_999, 14)
            .with_rating(4.6, 654)
            .with_gallery(3)
            .mark_featured()
            .with_description(
                "AMOLED always-on display, dual-band GPS and seven-day battery life in a \
                 titanium case.",
            )
            .with_highlights(&[
                "1.43\" AMOLED always-on display",
                "Dual-band GPS",
                "ECG and SpO2 monitoring",
                "7-day battery life",
            ])
            .with_specifications(&[
                ("Display", "1.43\" AMOLED, 466 x 466"),
                ("Case", "Titanium, 46 mm"),
                ("Water Rating", "5 ATM"),
                ("Battery", "Up to 7 days"),
            ]),
        Product::new(9, "nova-smart-ring", "Nova Smart Ring", Category::Gadgets, 22_499)
            .with_rating(4.4, 198)
            .with_gallery(2)
            .with_description(
                "Sleep, heart-rate and activity tracking in a 4 gram titanium ring with no \
                 subscription.",
            )
            .with_highlights(&[
                "Sleep staging and readiness score",
                "Continuous heart-rate tracking",
                "No subscription required",
            ])
            .with_specifications(&[
                ("Material", "Grade 5 Titanium"),
                ("Weight", "4 g"),
                ("Battery", "Up to 6 days"),
            ]),
        Product::new(10, "orbit-mini-projector", "Orbit Mini Projector", Category::Gadgets, 38_999)
            .with_original_price(44_999, 13)
            .with_rating(4.2, 143)
            .with_gallery(2)
            .out_of_stock()
            .with_description(
                "A palm-sized 1080p LED projector with auto-focus and built-in streaming apps.",
            )
            .with_highlights(&[
                "Native 1080p, 600 ANSI lumens",
                "Auto-focus and keystone correction",
                "Built-in streaming apps",
            ])
            .with_specifications(&[
                ("Resolution", "1920 x 1080"),
                ("Brightness", "600 ANSI lumens"),
                ("Throw Ratio", "1.2:1"),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_slugs_and_ids_are_unique() {
        let products = builtin_products();
        let slugs: HashSet<_> = products.iter().map(|p| p.slug.as_str()).collect();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(slugs.len(), products.len());
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_slugs_are_url_safe() {
        for product in builtin_products() {
            assert!(
                product
                    .slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not URL-safe",
                product.slug
            );
        }
    }

    #[test]
    fn test_ratings_in_range() {
        for product in builtin_products() {
            assert!((0.0..=5.0).contains(&product.rating));
        }
    }
}
