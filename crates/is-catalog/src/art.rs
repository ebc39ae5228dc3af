//! Art collections: original oil paintings and framed prints.

use is_api_types::ItemKind;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Painting {
    pub code: &'static str,
    pub title: &'static str,
    /// Canvas width in cm.
    pub width: u32,
    /// Canvas height in cm.
    pub height: u32,
    pub price: u64,
    pub image: &'static str,
    pub description: &'static str,
}

impl Painting {
    pub fn dimensions_label(&self) -> String {
        format!("{}×{}cm", self.width, self.height)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Print {
    pub code: &'static str,
    pub title: &'static str,
    /// Starting price (smallest size, standard glass).
    pub price: u64,
    pub image: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub default_frame: &'static str,
    pub sizes: &'static [&'static str],
}

const fn painting(
    code: &'static str,
    title: &'static str,
    width: u32,
    height: u32,
    price: u64,
    image: &'static str,
    description: &'static str,
) -> Painting {
    Painting {
        code,
        title,
        width,
        height,
        price,
        image,
        description,
    }
}

const fn print(
    code: &'static str,
    title: &'static str,
    image: &'static str,
    category: &'static str,
    description: &'static str,
) -> Print {
    Print {
        code,
        title,
        price: 29,
        image,
        category,
        description,
        default_frame: "Black",
        sizes: &["a3", "a2"],
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ArtCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub tagline: &'static str,
    pub path: &'static str,
    pub collection: Option<ItemKind>,
    pub available: bool,
}

impl ArtCategory {
    pub fn count(&self) -> usize {
        match self.collection {
            Some(ItemKind::Painting) => PAINTINGS.len(),
            Some(ItemKind::Print) => PRINTS.len(),
            _ => 0,
        }
    }

    pub fn cover_image(&self) -> Option<&'static str> {
        match self.collection {
            Some(ItemKind::Painting) => PAINTINGS.first().map(|p| p.image),
            Some(ItemKind::Print) => PRINTS.first().map(|p| p.image),
            _ => None,
        }
    }

    pub fn coming_soon(&self) -> bool {
        !self.available
    }
}

pub static ART_CATEGORIES: &[ArtCategory] = &[
    ArtCategory {
        id: "oil-paintings",
        name: "Oil Paintings",
        short_name: "Paintings",
        description: "Original hand-drawn oil paintings on canvas. Each piece is unique and crafted with care.",
        tagline: "Hand-drawn oil on canvas",
        path: "/arts/oil-paintings",
        collection: Some(ItemKind::Painting),
        available: true,
    },
    ArtCategory {
        id: "prints",
        name: "Framed Prints",
        short_name: "Prints",
        description: "High-quality framed prints in various sizes. Perfect for any space.",
        tagline: "Premium framed prints",
        path: "/arts/prints",
        collection: Some(ItemKind::Print),
        available: true,
    },
    ArtCategory {
        id: "decorations",
        name: "Decorations",
        short_name: "Decor",
        description: "Crafty accessories, metal pieces, and unique decor items coming soon.",
        tagline: "Artisanal decor pieces",
        path: "/arts/decorations",
        collection: None,
        available: false,
    },
];

pub static PAINTINGS: &[Painting] = &[
    painting(
        "OP17",
        "African Muse",
        50,
        70,
        125,
        "/images/OP17.avif",
        "A striking portrait celebrating African beauty and culture. Bold colors and expressive details create a powerful, captivating presence.",
    ),
    painting(
        "OP9",
        "Cherry Blossom Tree",
        100,
        50,
        195,
        "/images/OP9.avif",
        "Delicate pink cherry blossoms cascade across this expansive canvas. A celebration of spring's fleeting beauty, perfect for bringing serenity to your home.",
    ),
    painting(
        "OP11",
        "City Streetscape",
        70,
        50,
        125,
        "/images/OP11.avif",
        "Urban energy captured in bold brushstrokes. This atmospheric city scene pulses with life, from bustling pedestrians to glowing storefronts.",
    ),
    painting(
        "OP5",
        "Colorful Reef Fish",
        100,
        50,
        195,
        "/images/OP5.avif",
        "Dive into an underwater paradise with this vibrant portrayal of tropical reef fish. Brilliant colors and fluid movement create a mesmerizing focal point.",
    ),
    painting(
        "OP12",
        "Dancing Hearts",
        70,
        50,
        125,
        "/images/OP12.avif",
        "A playful and romantic composition featuring hearts in joyful motion. Warm colors and dynamic shapes create an uplifting, love-filled atmosphere.",
    ),
    painting(
        "OP14",
        "Dancing Silhouette",
        50,
        100,
        195,
        "/images/OP14.avif",
        "A tall, dramatic piece featuring a graceful dancer in motion. The flowing silhouette creates an elegant vertical accent for narrow walls or entryways.",
    ),
    painting(
        "OP2",
        "Emerald Forest",
        50,
        70,
        155,
        "/images/OP2.avif",
        "Lose yourself in the depths of this lush forest scene. Deep emerald greens and dappled light create a serene escape into nature's embrace.",
    ),
    painting(
        "OP3",
        "Golden Bloom",
        60,
        80,
        155,
        "/images/OP3.avif",
        "An elegant floral composition featuring blooms rendered in warm gold and amber tones. Perfect for adding sophistication and natural beauty to your space.",
    ),
    painting(
        "OP16",
        "Golden Circles",
        50,
        70,
        125,
        "/images/OP16.avif",
        "Geometric elegance meets artistic expression. Overlapping circles in rich gold tones create a harmonious, contemporary composition.",
    ),
    painting(
        "OP6",
        "Golden Tree",
        120,
        60,
        195,
        "/images/OP6.avif",
        "A stunning statement piece featuring a majestic tree adorned in golden foliage. The generous dimensions make this an impressive centerpiece for large walls.",
    ),
    painting(
        "OP10",
        "Green Echoes",
        60,
        80,
        125,
        "/images/OP10.avif",
        "An abstract exploration of nature's palette, with layered greens creating depth and movement. A contemporary piece that bridges organic and modern aesthetics.",
    ),
    painting(
        "OP13",
        "Majestic Elephant",
        50,
        70,
        125,
        "/images/OP13.avif",
        "The noble presence of an elephant rendered with striking detail. This powerful portrait captures wisdom, strength, and the beauty of wildlife.",
    ),
    painting(
        "OP7",
        "Mount Fuji at Dawn",
        60,
        60,
        125,
        "/images/OP7.avif",
        "The iconic silhouette of Mount Fuji emerges through soft morning mist. This peaceful Japanese-inspired landscape brings tranquility and cultural depth.",
    ),
    painting(
        "OP8",
        "Paris in Red",
        50,
        40,
        99,
        "/images/OP8.avif",
        "A romantic Parisian street scene awash in passionate reds and warm tones. The Eiffel Tower peeks through, evoking the City of Light's timeless charm.",
    ),
    painting(
        "OP19",
        "Sandstone Grid",
        80,
        80,
        155,
        "/images/OP19.avif",
        "A sophisticated geometric pattern inspired by natural sandstone textures. The warm earth tones and clean lines suit both modern and traditional interiors.",
    ),
    painting(
        "OP15",
        "Soft Plaster",
        60,
        80,
        155,
        "/images/OP15.avif",
        "Textural abstraction in soft, neutral tones. The subtle palette and dimensional surface create sophisticated minimalist appeal for modern spaces.",
    ),
    painting(
        "OP1",
        "Sunlit Oranges",
        50,
        50,
        99,
        "/images/OP1.avif",
        "A vibrant still life capturing the warmth of freshly picked oranges bathed in golden sunlight. The rich textures and bold colors bring a Mediterranean charm to any room.",
    ),
    painting(
        "OP4",
        "White Stallion",
        80,
        40,
        99,
        "/images/OP4.avif",
        "The raw power and grace of a majestic white stallion captured in motion. This dynamic piece brings energy and elegance to contemporary interiors.",
    ),
    painting(
        "OP18",
        "Wings of Gold",
        60,
        80,
        155,
        "/images/OP18.avif",
        "Delicate butterfly wings rendered in shimmering gold. A symbol of transformation and beauty, this piece adds a touch of magic to any room.",
    ),
];

pub static PRINTS: &[Print] = &[
    print(
        "PR1",
        "Morning Moka",
        "/images/1PR.webp",
        "Kitchen",
        "Warm terracotta moka pot on a checkered table; a playful kitchen print with a cozy retro feel.",
    ),
    print(
        "PR2",
        "Ciao Bella",
        "/images/2PR.webp",
        "Typography",
        "Bold Italian greeting in playful green hand-drawn typography; a cheerful statement piece for any room.",
    ),
    print(
        "PR3",
        "Coffee Cat",
        "/images/3PR.webp",
        "Illustration",
        "Charming illustration of a black cat in a striped sweater enjoying a warm cup of coffee.",
    ),
    print(
        "PR4",
        "No Place Like Home",
        "/images/4PR.webp",
        "Vintage",
        "Vintage-style kitchen illustration celebrating the warmth and comfort of home.",
    ),
    print(
        "PR5",
        "Koi in the Waves",
        "/images/5PR.webp",
        "Japanese",
        "Playful abstract illustration of two golden koi swimming through deep swirling blue waves.",
    ),
    print(
        "PR6",
        "Coastal Dream",
        "/images/6PR.webp",
        "Coastal",
        "Serene illustration of a woman resting by swirling blue waters under a golden sun.",
    ),
    print(
        "PR7",
        "Trust the Flow",
        "/images/7PR.webp",
        "Typography",
        "Hand-lettered mantra in soft coastal colours with playful details; calm, optimistic, and easy to live with.",
    ),
    print(
        "PR8",
        "Dancing Koi",
        "/images/8PR.webp",
        "Japanese",
        "Traditional Japanese-inspired artwork of koi fish swimming gracefully in deep indigo waters.",
    ),
    print(
        "PR9",
        "Great Things Take Time",
        "/images/9PR.webp",
        "Typography",
        "Bold black-and-white typography art with an inspiring message about patience and persistence.",
    ),
    print(
        "PR10",
        "Blue Sardines",
        "/images/10PR.webp",
        "Coastal",
        "Elegant illustration of blue sardines swimming on a warm coral background.",
    ),
    print(
        "PR11",
        "Call of the Sea",
        "/images/11PR.webp",
        "Coastal",
        "Elegant navy wave pattern with “Call of the Sea” typography; ocean-inspired minimalist art.",
    ),
    print(
        "PR12",
        "Play It Twice",
        "/images/12PR.webp",
        "Retro",
        "Retro record player illustration with a music-lover message; simple, fun, and giftable.",
    ),
    print(
        "PR13",
        "Koi Pond",
        "/images/13PR.webp",
        "Abstract",
        "Delicate watercolor-style illustration of koi fish swimming among soft turquoise brushstrokes.",
    ),
    print(
        "PR14",
        "Think Outside the Box",
        "/images/14PR.webp",
        "Typography",
        "Playful typography with tic-tac-toe illustration; a creative reminder to think differently.",
    ),
    print(
        "PR15",
        "Home Sweet Home",
        "/images/15PR.webp",
        "Typography",
        "Warm heart-shaped typography with radiating sunburst pattern in red and cream tones.",
    ),
    print(
        "PR16",
        "Grip Yourself",
        "/images/16PR.webp",
        "Typography",
        "Bold hand-painted typography with flowing letterforms; high-contrast and graphic for a statement wall.",
    ),
    print(
        "PR17",
        "Eye Spiral",
        "/images/17PR.webp",
        "Abstract",
        "High-contrast black-and-cream optical pattern with repeating “eyes”; bold, artsy, and statement-heavy.",
    ),
    print(
        "PR18",
        "Crimson Texture",
        "/images/18PR.webp",
        "Abstract",
        "A rich red textured field; minimal, moody, and perfect as a modern accent piece.",
    ),
    print(
        "PR19",
        "Night Signal",
        "/images/19PR.webp",
        "Illustration",
        "Comic-style cityscape with a dramatic spotlight symbol; playful, cinematic, and perfect for an office or media room.",
    ),
    print(
        "PR20",
        "Desert Botanicals",
        "/images/20PR.webp",
        "Vintage",
        "Vintage-style cactus and succulent study chart; detailed, timeless, and easy to style.",
    ),
    print(
        "PR21",
        "In the Sun by the Sea",
        "/images/21PR.webp",
        "Coastal",
        "Sunny coastal typography in warm blue and yellow tones celebrating seaside living.",
    ),
    print(
        "PR22",
        "Melting Time",
        "/images/22PR.webp",
        "Abstract",
        "Surreal melting clock on a clean white field; witty, minimal, and a conversation piece.",
    ),
    print(
        "PR23",
        "Owl Atlas",
        "/images/23PR.webp",
        "Vintage",
        "Vintage owl identification chart; warm, scholarly, and perfect for reading corners.",
    ),
    print(
        "PR24",
        "Coffee, Please!",
        "/images/24PR.webp",
        "Kitchen",
        "Simple line illustration with a coffee plea; quirky, minimal, and ideal for kitchens.",
    ),
    print(
        "PR25",
        "Tiger Acrobat",
        "/images/25PR.webp",
        "Vintage",
        "Vintage poster-style tiger in a dynamic pose; bold, playful energy with strong character.",
    ),
    print(
        "PR26",
        "Wild Gaze",
        "/images/26PR.webp",
        "Photography",
        "High-contrast close-up of a big cat mid-expression; intense, modern, and striking.",
    ),
    print(
        "PR27",
        "The Chill Out Room",
        "/images/27PR.webp",
        "Typography",
        "Retro typography poster with soft border; fun, youthful, and lounge-ready.",
    ),
    print(
        "PR28",
        "3D Audience",
        "/images/28PR.webp",
        "Photography",
        "Classic black-and-white crowd in 3D glasses; iconic, graphic, and made for gallery walls.",
    ),
    print(
        "PR29",
        "Cosmic Balance",
        "/images/29PR.webp",
        "Illustration",
        "Astronaut holding a stacked solar system; playful, modern, and giftable.",
    ),
    print(
        "PR30",
        "Red Line Grid",
        "/images/30PR.webp",
        "Abstract",
        "Minimal striped composition with a single red bar; crisp, architectural, and modern.",
    ),
    print(
        "PR31",
        "Midcentury Orbit",
        "/images/31PR.webp",
        "Geometric",
        "Teal-and-orange geometric forms in a midcentury style; warm, design-forward, and furniture-friendly.",
    ),
    print(
        "PR32",
        "Botanical Forms",
        "/images/32PR.webp",
        "Abstract",
        "Minimal plant-inspired shapes in deep green and burgundy; calm, contemporary, and clean.",
    ),
];
