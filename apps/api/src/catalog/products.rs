//! Static product catalog. Read-only for the lifetime of the process.

use serde::Serialize;

/// A catalog entry as shown in listings and recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Display price, e.g. "₹12,999".
    pub price: String,
    pub description: String,
    pub image: String,
    /// Lowercase style tag matched against the classified vibe.
    pub vibe: String,
}

impl Product {
    /// Numeric price in rupees, read from the digits of the display price.
    pub fn price_value(&self) -> Option<u32> {
        let digits: String = self.price.chars().filter(char::is_ascii_digit).collect();
        digits.parse().ok()
    }
}

/// Product detail view: the listing fields plus long-form copy and specifications.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub long_description: String,
    pub close_up_image: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ProductDetail>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(items: Vec<ProductDetail>) -> Self {
        let products = items.iter().map(|d| d.product.clone()).collect();
        Self { items, products }
    }

    /// Listing view of every product, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: u32) -> Option<&ProductDetail> {
        self.items.iter().find(|d| d.product.id == id)
    }

    pub fn builtin() -> Self {
        Self::new(vec![
            item(
                (1, "Elegant Gold Earrings", "₹12,999", "elegant"),
                "Handcrafted 22K gold earrings",
                "elegant-gold-earrings-jewelry",
                "A handcrafted 22K gold earring inspired by celebrity fashion. These stunning \
                 earrings feature intricate detailing and a timeless design that complements any \
                 outfit. Perfect for special occasions or adding a touch of elegance to your \
                 everyday look.",
                &[
                    "Material: 22K Gold",
                    "Weight: 8.5 grams",
                    "Design: Traditional with modern twist",
                    "Occasion: Weddings, Parties, Festivals",
                ],
            ),
            item(
                (2, "Diamond Necklace", "₹45,000", "glamorous"),
                "Stunning diamond necklace set",
                "diamond-necklace-luxury-jewelry",
                "An exquisite diamond necklace that radiates sophistication and luxury. Featuring \
                 premium quality diamonds set in 18K gold, this piece is designed to make a \
                 statement at any grand occasion.",
                &[
                    "Material: 18K Gold with Diamonds",
                    "Diamond Quality: VVS",
                    "Total Carats: 2.5",
                    "Occasion: Weddings, Galas, Special Events",
                ],
            ),
            item(
                (3, "Royal Bracelet", "₹22,500", "traditional"),
                "Exquisite gold bracelet design",
                "royal-gold-bracelet-jewelry",
                "A regal gold bracelet that embodies royal elegance. Crafted with precision and \
                 adorned with intricate patterns, this bracelet is perfect for those who \
                 appreciate fine jewelry.",
                &[
                    "Material: 22K Gold",
                    "Weight: 15 grams",
                    "Design: Royal traditional pattern",
                    "Occasion: Weddings, Festivals, Celebrations",
                ],
            ),
            item(
                (4, "Pearl Drop Earrings", "₹18,999", "classic"),
                "Classic pearl elegance",
                "pearl-drop-earrings-luxury",
                "Classic pearl drop earrings that exude timeless elegance. Featuring lustrous \
                 pearls suspended from delicate gold settings, these earrings are perfect for \
                 adding sophistication to any ensemble.",
                &[
                    "Material: 18K Gold with Natural Pearls",
                    "Pearl Size: 8mm",
                    "Design: Classic drop style",
                    "Occasion: Formal events, Parties, Daily wear",
                ],
            ),
            item(
                (5, "Sleek Silver Band", "₹6,499", "minimal"),
                "Polished sterling silver stacking ring",
                "sleek-silver-band-ring",
                "A slim sterling silver band with a mirror polish. Wear it alone for a clean \
                 everyday look or stack several for a modern layered style.",
                &[
                    "Material: 925 Sterling Silver",
                    "Width: 2mm",
                    "Design: Minimal stackable band",
                    "Occasion: Daily wear, Office",
                ],
            ),
            item(
                (6, "Statement Cocktail Ring", "₹34,999", "bold"),
                "Oversized emerald cocktail ring",
                "statement-cocktail-ring",
                "An oversized cocktail ring crowned with a vivid emerald and a halo of \
                 diamonds. Built to be noticed from across the room.",
                &[
                    "Material: 18K Gold with Emerald and Diamonds",
                    "Center Stone: 3 carat emerald",
                    "Design: Halo cocktail setting",
                    "Occasion: Parties, Receptions",
                ],
            ),
        ])
    }
}

fn item(
    (id, name, price, vibe): (u32, &str, &str, &str),
    description: &str,
    image_stem: &str,
    long_description: &str,
    details: &[&str],
) -> ProductDetail {
    ProductDetail {
        product: Product {
            id,
            name: name.to_string(),
            price: price.to_string(),
            description: description.to_string(),
            image: format!("/{image_stem}.jpg"),
            vibe: vibe.to_string(),
        },
        long_description: long_description.to_string(),
        close_up_image: format!("/{image_stem}-close-up.jpg"),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

/// Celebrity style inspiration shown alongside recommendations.
pub const INSPIRATION_IMAGES: &[&str] = &[
    "/celebrity-wearing-elegant-jewelry.jpg",
    "/celebrity-in-gold-jewelry.jpg",
    "/celebrity-with-diamond-necklace.jpg",
    "/celebrity-wearing-luxury-earrings.jpg",
];
