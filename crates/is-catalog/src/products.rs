//! Furniture catalog: categories and products.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub price: u64,
    pub image: &'static str,
    pub tag: Option<&'static str>,
    pub category: &'static str,
    pub category_id: &'static str,
    pub description: &'static str,
    pub dimensions: Option<&'static str>,
    pub material: Option<&'static str>,
    /// Pricing unit suffix, e.g. `/sqm` for wall cladding.
    pub unit: Option<&'static str>,
}

const fn product(
    category: &Category,
    id: u32,
    name: &'static str,
    price: u64,
    image: &'static str,
    tag: Option<&'static str>,
    description: &'static str,
) -> Product {
    Product {
        id,
        name,
        price,
        image,
        tag,
        category: category.name,
        category_id: category.id,
        description,
        dimensions: None,
        material: None,
        unit: None,
    }
}

impl Product {
    const fn sized(self, dimensions: &'static str, material: &'static str) -> Self {
        Self {
            dimensions: Some(dimensions),
            material: Some(material),
            ..self
        }
    }

    const fn priced_per(self, unit: &'static str) -> Self {
        Self {
            unit: Some(unit),
            ..self
        }
    }
}

const BEDROOMS: Category = Category {
    id: "bedrooms",
    name: "Bedrooms",
    subtitle: "Wardrobe Solutions",
    description: "Custom wardrobe systems and walk-in closets designed to maximize space and style.",
    image: "/images/Bedroom_1.webp",
};

const TV_UNITS: Category = Category {
    id: "tv-units",
    name: "TV Units",
    subtitle: "Media & Entertainment",
    description: "Modern media consoles handcrafted from premium wood, designed to anchor your living space with elegance.",
    image: "/images/Tv_1.webp",
};

const SOFAS: Category = Category {
    id: "sofas",
    name: "Sofas",
    subtitle: "Living Room",
    description: "Luxurious sofas with custom fabric options, built on solid wood frames.",
    image: "/images/S_1.webp",
};

const TABLES: Category = Category {
    id: "tables",
    name: "Tables",
    subtitle: "Dining Collection",
    description: "Solid wood dining tables that bring family and friends together. Each piece tells a story.",
    image: "/images/Table_1.webp",
};

const CONSOLES: Category = Category {
    id: "consoles",
    name: "Consoles",
    subtitle: "Decorative Accents",
    description: "Statement consoles framed in premium materials to elevate any room.",
    image: "/images/C_1.webp",
};

const DINING_TABLES: Category = Category {
    id: "dining-tables",
    name: "Dinning Tables",
    subtitle: "Dining Collection",
    description: "Solid wood dining tables that bring family and friends together. Each piece tells a story.",
    image: "/images/Dining_1.webp",
};

const CHAIRS: Category = Category {
    id: "chairs",
    name: "Chairs",
    subtitle: "Seating Collection",
    description: "Elegant chairs designed for comfort and style.",
    image: "/images/CH_1.webp",
};

const WALL_CLADDING: Category = Category {
    id: "wall-cladding",
    name: "Wall Cladding",
    subtitle: "Wall Treatments",
    description: "Transform your walls with sculptural wood panels and vertical slat systems.",
    image: "/images/Wall1.webp",
};

pub static CATEGORIES: &[Category] = &[
    BEDROOMS,
    TV_UNITS,
    SOFAS,
    TABLES,
    CONSOLES,
    DINING_TABLES,
    CHAIRS,
    WALL_CLADDING,
];

/// Every product, grouped by category in display order.
pub static PRODUCTS: &[Product] = &[
    product(
        &BEDROOMS,
        1001,
        "Premium Master Suite",
        1450,
        "/images/Bedroom_1.webp",
        Some("Premium"),
        "A luxurious master bedroom set featuring a grand headboard and integrated nightstands.",
    ),
    product(
        &BEDROOMS,
        1002,
        "Modern Bed Frame",
        780,
        "/images/Bedroom_2.webp",
        Some("New"),
        "Clean lines and natural wood textures define this contemporary sleeping solution.",
    ),
    product(
        &BEDROOMS,
        1003,
        "Classic Bed Frame",
        950,
        "/images/Bedroom_3.webp",
        None,
        "Spacious wardrobe crafted from aromatic cedar with traditional joinery.",
    ),
    product(
        &BEDROOMS,
        1004,
        "Modern Vanity Set",
        580,
        "/images/Bedroom_4.webp",
        Some("Popular"),
        "A sophisticated vanity with a large mirror and ample storage for essentials.",
    ),
    product(
        &BEDROOMS,
        1005,
        "Standard Bed Frame",
        520,
        "/images/Bedroom_5.webp",
        None,
        "Perfect for smaller rooms, offering comfort and style without compromise.",
    ),
    product(
        &TV_UNITS,
        2001,
        "Levant Floating Console",
        320,
        "/images/Tv_1.webp",
        Some("Best Seller"),
        "Sleek floating design that hides all cables for a clean, modern look.",
    ),
    product(
        &TV_UNITS,
        2002,
        "Rustic TV Stand",
        160,
        "/images/Tv_2.webp",
        None,
        "A robust combination of solid wood and industrial metal accents.",
    ),
    product(
        &TV_UNITS,
        2003,
        "Floating TV Board",
        99,
        "/images/Tv_3.webp",
        Some("New"),
        "Low-profile unit perfect for large screens and minimalist interiors.",
    ),
    product(
        &TV_UNITS,
        2004,
        "Custom TV Center",
        380,
        "/images/Tv_4.webp",
        None,
        "A grand piece with plenty of storage for media, books, and decor.",
    ),
    product(
        &TV_UNITS,
        2005,
        "Modern Media Unit",
        288,
        "/images/Tv_5.webp",
        Some("Popular"),
        "Features beautiful vertical slats that allow remote signals to pass through.",
    ),
    product(
        &TV_UNITS,
        2006,
        "Simple TV Shelf",
        88,
        "/images/Tv_6.webp",
        None,
        "Designed to fit perfectly in corners, maximizing space in smaller rooms.",
    ),
    product(
        &TV_UNITS,
        2007,
        "Marble Top Media Unit",
        520,
        "/images/Tv_7.webp",
        Some("Premium"),
        "Exquisite walnut base topped with premium Italian marble.",
    ),
    product(
        &TV_UNITS,
        2008,
        "Standard TV Bench",
        195,
        "/images/Tv_8.webp",
        None,
        "Warm, rustic charm with plenty of character and storage.",
    ),
    product(
        &TV_UNITS,
        2009,
        "Black TV Console",
        350,
        "/images/Tv_9.webp",
        None,
        "Modern black oak finish with smoked glass doors.",
    ),
    product(
        &TV_UNITS,
        2010,
        "Decorative TV Console",
        420,
        "/images/Tv_10.webp",
        Some("New"),
        "Elegant Art Deco inspired design with gold hardware.",
    ),
    product(
        &TV_UNITS,
        2011,
        "Simple TV Bench",
        245,
        "/images/Tv_11.webp",
        None,
        "Simple, functional, and beautiful Scandinavian design.",
    ),
    product(
        &SOFAS,
        3001,
        "Velvet Sectional",
        780,
        "/images/S_1.webp",
        Some("Best Seller"),
        "Ultra-soft velvet sectional that offers unparalleled comfort and style.",
    )
    .sized("320 x 240 cm", "Velvet"),
    product(
        &SOFAS,
        3002,
        "L-Shape Sofa",
        650,
        "/images/S_2.webp",
        Some("Premium"),
        "Timeless leather sofa that ages beautifully and fits any decor.",
    )
    .sized("220 x 95 cm", "Top Grain Leather"),
    product(
        &SOFAS,
        3003,
        "Modern Linen Sofa",
        520,
        "/images/S_3.webp",
        Some("New"),
        "Breathable linen fabric and deep cushions for a relaxed, airy feel.",
    )
    .sized("240 x 100 cm", "Linen"),
    product(
        &SOFAS,
        3004,
        "Compact 2-Seater",
        380,
        "/images/S_4.webp",
        None,
        "Perfect for apartments or as an accent piece in larger rooms.",
    )
    .sized("160 x 85 cm", "Cotton Blend"),
    product(
        &SOFAS,
        3005,
        "Modular Cloud Sofa",
        920,
        "/images/S_5.webp",
        Some("Popular"),
        "Fully modular system that can be configured to fit any space.",
    )
    .sized("Custom", "Performance Fabric"),
    product(
        &SOFAS,
        3006,
        "Tufted Sofa",
        580,
        "/images/S_6.webp",
        None,
        "Elegant tufted backrest and rolled arms for a classic look.",
    )
    .sized("210 x 90 cm", "Velvet"),
    product(
        &TABLES,
        4001,
        "Standard Coffee Table",
        165,
        "/images/Table_1.webp",
        Some("Best Seller"),
        "A sturdy and beautiful coffee table that anchors your living room.",
    ),
    product(
        &TABLES,
        4002,
        "Trio Nesting Set",
        280,
        "/images/Table_2.webp",
        Some("New"),
        "Versatile nesting tables that can be used together or separately.",
    ),
    product(
        &TABLES,
        4003,
        "Premium Coffee Table",
        220,
        "/images/Table_3.webp",
        None,
        "Elegant round table with a marble top and solid wood base.",
    ),
    product(
        &TABLES,
        4004,
        "Square Coffee Table",
        145,
        "/images/Table_4.webp",
        None,
        "Compact side table with a rugged industrial aesthetic.",
    ),
    product(
        &TABLES,
        4005,
        "Sequoia Table",
        380,
        "/images/Table_5.webp",
        Some("Premium"),
        "Unique live edge slab that brings the beauty of nature indoors.",
    ),
    product(
        &TABLES,
        4006,
        "Modern Coffee Table",
        185,
        "/images/Table_6.webp",
        Some("Popular"),
        "Slim profile table perfect for entryways or behind sofas.",
    ),
    product(
        &TABLES,
        4007,
        "Bistro Table",
        250,
        "/images/Table_7.webp",
        None,
        "Modern bistro table for small dining areas or balconies.",
    ),
    product(
        &CONSOLES,
        5001,
        "Premium Entry Console",
        320,
        "/images/C_1.webp",
        Some("Best Seller"),
        "A beautiful first impression for your home with ample storage.",
    ),
    product(
        &CONSOLES,
        5002,
        "Mirror Console",
        225,
        "/images/C_2.webp",
        Some("Premium"),
        "Reflective surfaces that make your entryway feel larger and brighter.",
    ),
    product(
        &CONSOLES,
        5003,
        "Rustic Hall Table",
        280,
        "/images/C_3.webp",
        None,
        "Warm and inviting rustic table with a distressed finish.",
    ),
    product(
        &CONSOLES,
        5004,
        "Modern Hallway Table",
        250,
        "/images/C_4.webp",
        Some("New"),
        "Ultra-slim design for tight spaces and modern interiors.",
    ),
    product(
        &CONSOLES,
        5005,
        "Carved Wooden Console",
        420,
        "/images/C_5.webp",
        None,
        "Intricately carved details for a touch of traditional elegance.",
    ),
    product(
        &CONSOLES,
        5006,
        "Retro Console",
        295,
        "/images/C_6.webp",
        Some("Popular"),
        "Iconic mid-century design with tapered legs and clean lines.",
    ),
    product(
        &CONSOLES,
        5007,
        "Minimalist Hall Table",
        145,
        "/images/C_7.webp",
        None,
        "Combines open shelving with closed storage for versatility.",
    ),
    product(
        &CONSOLES,
        5009,
        "Dark Wood Console",
        330,
        "/images/C_8.webp",
        None,
        "Sleek black finish that adds drama and sophistication.",
    ),
    product(
        &CONSOLES,
        5010,
        "Simple Hall Table",
        195,
        "/images/C_9.webp",
        None,
        "Simple, clean, and functional Scandinavian design.",
    ),
    product(
        &DINING_TABLES,
        6001,
        "Large Banquet Table",
        650,
        "/images/Dining_1.webp",
        Some("Premium"),
        "An impressive table that seats up to 12 guests for grand gatherings.",
    ),
    product(
        &DINING_TABLES,
        6002,
        "Standard Dining Table",
        420,
        "/images/Dining_2.webp",
        Some("Best Seller"),
        "The perfect centerpiece for daily family meals and conversations.",
    ),
    product(
        &CHAIRS,
        7001,
        "Velvet Chair",
        120,
        "/images/CH_1.webp",
        Some("Popular"),
        "Comfortable and stylish dining chair with premium velvet upholstery.",
    ),
    product(
        &CHAIRS,
        7002,
        "Accent Chair",
        195,
        "/images/CH_2.webp",
        Some("New"),
        "A statement accent chair that adds comfort and style to any corner.",
    ),
    product(
        &WALL_CLADDING,
        501,
        "Wall Paneling",
        220,
        "/images/Wall1.webp",
        None,
        "Transform any wall into a statement piece with our signature wood paneling. Easy to install, these panels add warmth and texture while providing excellent acoustic properties.",
    )
    .priced_per("/sqm"),
    product(
        &WALL_CLADDING,
        502,
        "Slat Wall Panel",
        195,
        "/images/Wall2.webp",
        Some("Popular"),
        "Contemporary vertical slat design creates depth and visual interest. Perfect for feature walls in living rooms or bedrooms.",
    )
    .priced_per("/sqm"),
];
